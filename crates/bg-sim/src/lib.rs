//! `bg-sim` — the bus schedule tick loop and the gossip game built on it.
//!
//! # One tick (one simulated minute)
//!
//! ```text
//! tick():
//!   ① Move   — every driver advances one stop along its route.
//!   ② Clock  — minutes worked += 1.
//!   ③ Talk   — for every ordered pair (a, b) of drivers at the same stop:
//!                a pulls b's gossip, then b pulls a's gossip.
//! ```
//!
//! A freshly built [`BusSchedule`] runs step ③ once before any tick, since
//! drivers that start at the same stop can talk straight away.  After
//! [`ShiftConfig::shift_minutes`][bg_core::ShiftConfig] (480 by default) the
//! schedule is out of service.
//!
//! # The game
//!
//! [`GossipGame`] ticks its schedule minute by minute until every driver
//! knows every driver's gossip (`Outcome::Done(minutes)`) or the shift ends
//! first (`Outcome::Never`).
//!
//! # Quick-start
//!
//! ```rust
//! use bg_sim::GossipGame;
//!
//! let mut game = GossipGame::from_stops([vec![1, 2], vec![3, 2]]).unwrap();
//! assert_eq!(game.stops_needed(), "2");
//! ```

pub mod builder;
pub mod error;
pub mod game;
pub mod observer;
pub mod schedule;


pub use builder::ScheduleBuilder;
pub use error::{SimError, SimResult};
pub use game::{GameState, GossipGame, Outcome};
pub use observer::{NoopObserver, ScheduleObserver};
pub use schedule::BusSchedule;
