//! Fluent builder for constructing a [`BusSchedule`].

use bg_core::ShiftConfig;
use bg_driver::DriverStore;

use crate::{BusSchedule, NoopObserver, ScheduleObserver, SimError, SimResult};

/// Fluent builder for [`BusSchedule`].
///
/// # Required inputs
///
/// - [`DriverStore`] — from [`bg_driver::DriverStoreBuilder`]; must not be
///   empty.
///
/// # Optional inputs (have defaults)
///
/// | Method        | Default                                  |
/// |---------------|------------------------------------------|
/// | `.config(c)`  | `ShiftConfig::default()` (480 minutes)   |
///
/// # Example
///
/// ```rust
/// use bg_core::ShiftConfig;
/// use bg_driver::DriverStoreBuilder;
/// use bg_sim::ScheduleBuilder;
///
/// let mut drivers = DriverStoreBuilder::new();
/// let first = drivers.add_stops([1, 2]).unwrap();
/// let schedule = ScheduleBuilder::new(drivers.build())
///     .config(ShiftConfig::hours(1))
///     .build()
///     .unwrap();
/// assert_eq!(schedule.driver(first).gossip_count(), 1);
/// ```
pub struct ScheduleBuilder {
    drivers: DriverStore,
    config:  Option<ShiftConfig>,
}

impl ScheduleBuilder {
    /// Create a builder with all required inputs.
    pub fn new(drivers: DriverStore) -> Self {
        Self { drivers, config: None }
    }

    /// Supply the shift configuration.
    pub fn config(mut self, config: ShiftConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// Validate inputs, let co-located drivers talk once, and return a
    /// schedule at minute zero.
    pub fn build(self) -> SimResult<BusSchedule> {
        self.build_observed(&mut NoopObserver)
    }

    /// Like [`build`](Self::build), reporting the initial talk step to
    /// `observer` (as meetings at minute zero).
    pub fn build_observed<O: ScheduleObserver>(self, observer: &mut O) -> SimResult<BusSchedule> {
        if self.drivers.is_empty() {
            return Err(SimError::NoDrivers);
        }
        let config = self.config.unwrap_or_default();
        config.validate()?;

        Ok(BusSchedule::start(config, self.drivers, observer))
    }
}
