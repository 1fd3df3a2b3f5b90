//! `bg-core` — foundational types for the `bus_gossip` simulation.
//!
//! This crate is a dependency of every other `bg-*` crate.  It has no `bg-*`
//! dependencies and a single required external one (`thiserror`, plus
//! optional `serde`).
//!
//! # What lives here
//!
//! | Module          | Contents                                              |
//! |-----------------|-------------------------------------------------------|
//! | [`ids`]         | `DriverId`, `StopId`, `GossipId`                      |
//! | [`time`]        | `Minute`, `ShiftClock`, `ShiftConfig`                 |
//! | [`source`]      | `GossipSource` (unique originating gossip tokens)     |
//! | [`error`]       | `CoreError`, `CoreResult`                             |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod error;
pub mod ids;
pub mod source;
pub mod time;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{CoreError, CoreResult};
pub use ids::{DriverId, GossipId, StopId};
pub use source::GossipSource;
pub use time::{DEFAULT_SHIFT_MINUTES, Minute, ShiftClock, ShiftConfig};
