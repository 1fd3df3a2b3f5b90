//! `Route` — the fixed loop of stops a driver repeats all shift.

use bg_core::StopId;

use crate::{DriverError, DriverResult};

/// An ordered, non-empty sequence of stops.
///
/// The route is cyclic: after the last stop the driver returns to the first.
/// A stop may appear more than once.  Routes never change after construction.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "Vec<StopId>", into = "Vec<StopId>"))]
pub struct Route {
    stops: Vec<StopId>,
}

impl Route {
    /// Build a route from `stops`.
    ///
    /// Returns [`DriverError::InvalidRoute`] if `stops` is empty.
    pub fn new(stops: Vec<StopId>) -> DriverResult<Self> {
        if stops.is_empty() {
            return Err(DriverError::InvalidRoute(
                "a route needs at least one stop".into(),
            ));
        }
        Ok(Self { stops })
    }

    /// Build a route from raw stop numbers.
    ///
    /// ```
    /// use bg_driver::Route;
    ///
    /// let route = Route::from_stops([3, 1, 2, 3]).unwrap();
    /// assert_eq!(route.stop_count(), 4);
    /// assert!(Route::new(Vec::new()).is_err());
    /// ```
    pub fn from_stops<I: IntoIterator<Item = u32>>(stops: I) -> DriverResult<Self> {
        Self::new(stops.into_iter().map(StopId).collect())
    }

    /// Number of stops in one loop.  Always at least 1.
    #[inline]
    pub fn stop_count(&self) -> usize {
        self.stops.len()
    }

    /// The stop at `position`, wrapping around the loop.
    #[inline]
    pub fn stop(&self, position: usize) -> StopId {
        self.stops[position % self.stops.len()]
    }

    pub fn stops(&self) -> &[StopId] {
        &self.stops
    }
}

impl TryFrom<Vec<StopId>> for Route {
    type Error = DriverError;

    fn try_from(stops: Vec<StopId>) -> DriverResult<Self> {
        Self::new(stops)
    }
}

impl From<Route> for Vec<StopId> {
    fn from(route: Route) -> Vec<StopId> {
        route.stops
    }
}
