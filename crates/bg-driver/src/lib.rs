//! `bg-driver` — bus drivers, their circular routes, and the gossip they know.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                    |
//! |---------------|-------------------------------------------------------------|
//! | [`route`]     | `Route` — non-empty, fixed, cyclic sequence of stops        |
//! | [`driver`]    | `Driver` — position on its route + known gossip set         |
//! | [`store`]     | `DriverStore` — drivers addressed by `DriverId` handles     |
//! | [`builder`]   | `DriverStoreBuilder` — assigns each driver a unique gossip  |
//! | [`loader`]    | `load_routes_csv`, `load_routes_reader`                     |
//! | [`error`]     | `DriverError`, `DriverResult<T>`                            |
//!
//! # Gossip model (summary)
//!
//! Every driver starts knowing exactly one gossip token.  Exchanging gossip is
//! a one-way pull:
//!
//! ```text
//! a.exchange_gossip(&b)   →   a.gossip = a.gossip ∪ b.gossip   (b untouched)
//! ```
//!
//! Mutual exchange is two pulls, one in each direction; `bg-sim` does that for
//! every pair of co-located drivers.
//!
//! # Feature flags
//!
//! | Flag      | Effect                                                   |
//! |-----------|----------------------------------------------------------|
//! | `fx-hash` | Gossip sets use FxHash instead of SipHash.               |
//! | `serde`   | Derives `Serialize`/`Deserialize` on all public types.   |

pub mod builder;
pub mod driver;
pub mod error;
pub mod loader;
pub mod route;
pub mod store;


pub use builder::DriverStoreBuilder;
pub use driver::Driver;
pub use error::{DriverError, DriverResult};
pub use loader::{load_routes_csv, load_routes_reader};
pub use route::Route;
pub use store::DriverStore;
