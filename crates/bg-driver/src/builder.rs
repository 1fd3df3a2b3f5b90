//! Fluent builder for a [`DriverStore`].
//!
//! # Usage
//!
//! ```rust
//! use bg_driver::{DriverStoreBuilder, Route};
//!
//! let mut builder = DriverStoreBuilder::new();
//! let first  = builder.add_route(Route::from_stops([1, 2]).unwrap());
//! let second = builder.add_stops([3, 2]).unwrap();
//! let store  = builder.build();
//!
//! assert_eq!(store.len(), 2);
//! assert_ne!(store[first].origin(), store[second].origin());
//! ```

use bg_core::{DriverId, GossipSource};

use crate::{Driver, DriverResult, DriverStore, Route};

/// Builds a [`DriverStore`], giving every driver a fresh originating gossip
/// token from one [`GossipSource`].
///
/// Handles are assigned in insertion order: the first driver added is
/// `DriverId(0)`.
#[derive(Default)]
pub struct DriverStoreBuilder {
    source:  GossipSource,
    drivers: Vec<Driver>,
}

impl DriverStoreBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Issue origins from `source` instead of a fresh counter.
    ///
    /// Must be called before any driver is added.
    pub fn with_source(mut self, source: GossipSource) -> Self {
        debug_assert!(self.drivers.is_empty(), "with_source after drivers were added");
        self.source = source;
        self
    }

    /// Add a driver for `route` (fluent form).
    pub fn route(mut self, route: Route) -> Self {
        self.add_route(route);
        self
    }

    /// Add one driver per route, in order (fluent form).
    pub fn routes<I: IntoIterator<Item = Route>>(mut self, routes: I) -> Self {
        for route in routes {
            self.add_route(route);
        }
        self
    }

    /// Add a driver for `route` and return its handle.
    pub fn add_route(&mut self, route: Route) -> DriverId {
        let id = DriverId(self.drivers.len() as u32);
        let origin = self.source.next_gossip();
        self.drivers.push(Driver::new(route, origin));
        id
    }

    /// Add a driver for a route given as raw stop numbers.
    ///
    /// Fails with [`DriverError::InvalidRoute`][crate::DriverError::InvalidRoute]
    /// if `stops` is empty.
    pub fn add_stops<I: IntoIterator<Item = u32>>(&mut self, stops: I) -> DriverResult<DriverId> {
        Ok(self.add_route(Route::from_stops(stops)?))
    }

    /// Number of drivers added so far.
    pub fn len(&self) -> usize {
        self.drivers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.drivers.is_empty()
    }

    /// Finish building.  The store may be empty; `bg-sim` rejects that.
    pub fn build(self) -> DriverStore {
        DriverStore::new(self.drivers)
    }
}
