//! The `BusSchedule` struct and its tick loop.

use bg_core::{DriverId, ShiftClock, ShiftConfig};
use bg_driver::{Driver, DriverStore};
use tracing::{debug, trace};

use crate::{NoopObserver, ScheduleBuilder, ScheduleObserver, SimResult};

/// Moves a fixed set of drivers in lockstep and lets them gossip.
///
/// Each [`tick`](Self::tick) is one simulated minute:
///
/// 1. **Move**: every driver advances one stop.
/// 2. **Clock**: minutes worked goes up by one.
/// 3. **Talk**: every pair of drivers at the same stop exchange gossip in
///    both directions.
///
/// The schedule owns its drivers; callers keep the `DriverId` handles they
/// got from the `DriverStoreBuilder` and read drivers through
/// [`driver`](Self::driver).
///
/// Ticking past the end of the shift is allowed: the clock keeps counting and
/// the schedule simply stays out of service.
///
/// Create via [`BusSchedule::new`], [`BusSchedule::with_config`], or
/// [`ScheduleBuilder`].
#[derive(Debug)]
pub struct BusSchedule {
    config:  ShiftConfig,
    clock:   ShiftClock,
    drivers: DriverStore,
}

impl BusSchedule {
    /// A schedule with the default 8-hour shift.
    ///
    /// Fails with [`SimError::NoDrivers`][crate::SimError::NoDrivers] if
    /// `drivers` is empty.
    pub fn new(drivers: DriverStore) -> SimResult<Self> {
        ScheduleBuilder::new(drivers).build()
    }

    /// A schedule with a custom shift length.
    pub fn with_config(drivers: DriverStore, config: ShiftConfig) -> SimResult<Self> {
        ScheduleBuilder::new(drivers).config(config).build()
    }

    /// Assemble a validated schedule and run the initial talk step.
    pub(crate) fn start<O: ScheduleObserver>(
        config:   ShiftConfig,
        drivers:  DriverStore,
        observer: &mut O,
    ) -> Self {
        let mut schedule = Self { clock: config.make_clock(), config, drivers };

        // Everyone starts at their first stop; drivers sharing it talk now.
        let meetings = schedule.let_drivers_talk(observer);
        debug!(
            drivers = schedule.drivers.len(),
            shift_minutes = schedule.config.shift_minutes,
            meetings,
            "schedule started"
        );
        schedule
    }

    // ── Public API ────────────────────────────────────────────────────────

    /// Advance one minute: move, count, talk.
    pub fn tick(&mut self) {
        self.tick_observed(&mut NoopObserver);
    }

    /// Like [`tick`](Self::tick), reporting to `observer`.
    pub fn tick_observed<O: ScheduleObserver>(&mut self, observer: &mut O) {
        observer.on_tick_start(self.clock.current_minute);

        self.drivers.advance_all();
        self.clock.advance();
        let meetings = self.let_drivers_talk(observer);

        let now = self.clock.current_minute;
        observer.on_tick_end(now, meetings);
        debug!(minute = now.0, meetings, "tick");

        if now == self.config.end_minute() {
            debug!(minute = now.0, "shift over, schedule out of service");
            observer.on_shift_end(now);
        }
    }

    /// Run exactly `n` ticks, regardless of the shift limit.
    pub fn run_ticks<O: ScheduleObserver>(&mut self, n: u64, observer: &mut O) {
        for _ in 0..n {
            self.tick_observed(observer);
        }
    }

    /// `true` once the schedule has worked a full shift.
    pub fn is_out_of_service(&self) -> bool {
        self.config.is_over(&self.clock)
    }

    /// `true` if every driver knows every driver's originating gossip.
    pub fn everyone_informed(&self) -> bool {
        self.drivers.informed_count() == self.drivers.len()
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    pub fn minutes_worked(&self) -> u64 {
        self.clock.minutes_worked()
    }

    pub fn clock(&self) -> &ShiftClock {
        &self.clock
    }

    pub fn config(&self) -> &ShiftConfig {
        &self.config
    }

    /// The driver behind `id`.
    ///
    /// # Panics
    /// Panics if `id` was not issued for this schedule's drivers.
    pub fn driver(&self, id: DriverId) -> &Driver {
        self.drivers.get(id)
    }

    pub fn drivers(&self) -> &DriverStore {
        &self.drivers
    }

    pub fn driver_count(&self) -> usize {
        self.drivers.len()
    }

    // ── Talk step ─────────────────────────────────────────────────────────

    /// One full exchange pass; returns the number of meetings.
    ///
    /// Every ordered pair `(a, b)` is visited in driver order, `a == b`
    /// included.  For co-located pairs `a` pulls from `b`, then `b` pulls
    /// from `a`.  Positions cannot change mid-pass, so which pairs meet is
    /// fixed; the visit order only affects how gossip relays inside a group,
    /// and since every member talks directly with every other member, each
    /// group ends the pass sharing the union of its gossip.
    ///
    /// Quadratic in the number of drivers.
    fn let_drivers_talk<O: ScheduleObserver>(&mut self, observer: &mut O) -> usize {
        let now = self.clock.current_minute;
        let count = self.drivers.len() as u32;
        let mut meetings = 0;

        for a in (0..count).map(DriverId) {
            for b in (0..count).map(DriverId) {
                if !self.drivers.co_located(a, b) {
                    continue;
                }
                self.drivers.pull_gossip(a, b);
                self.drivers.pull_gossip(b, a);

                if a < b {
                    let stop = self.drivers.get(a).current_stop();
                    trace!(minute = now.0, stop = stop.0, first = a.0, second = b.0, "drivers meet");
                    observer.on_meeting(now, stop, a, b);
                    meetings += 1;
                }
            }
        }
        meetings
    }
}
