//! Shift time model.
//!
//! # Design
//!
//! Time is a monotonically increasing `Minute` counter starting at zero when
//! the schedule is created.  One schedule tick is one simulated minute; there
//! is no mapping to wall-clock time.
//!
//! A shift lasts `ShiftConfig::shift_minutes` minutes (8 hours by default).
//! Once the clock reaches that many minutes the schedule is out of service.

use std::fmt;

use crate::{CoreError, CoreResult};

/// Length of a standard shift: 8 hours of 60 minutes.
pub const DEFAULT_SHIFT_MINUTES: u64 = 8 * 60;

// ── Minute ───────────────────────────────────────────────────────────────────

/// An absolute count of simulated minutes since the schedule started.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Minute(pub u64);

impl fmt::Display for Minute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "M{}", self.0)
    }
}

// ── ShiftClock ───────────────────────────────────────────────────────────────

/// Counts the minutes a schedule has worked.
///
/// Cheap to copy; holds no heap data.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ShiftClock {
    /// Minutes worked so far — advanced by `ShiftClock::advance()` each tick.
    pub current_minute: Minute,
}

impl ShiftClock {
    /// A clock at minute zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Advance the clock by one minute.
    #[inline]
    pub fn advance(&mut self) {
        self.current_minute = Minute(self.current_minute.0 + 1);
    }

    /// Minutes worked since the shift began.
    #[inline]
    pub fn minutes_worked(&self) -> u64 {
        self.current_minute.0
    }
}

// ── ShiftConfig ──────────────────────────────────────────────────────────────

/// Schedule configuration.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ShiftConfig {
    /// Minutes a schedule may work before it goes out of service.
    /// Default: [`DEFAULT_SHIFT_MINUTES`].
    pub shift_minutes: u64,
}

impl Default for ShiftConfig {
    fn default() -> Self {
        Self { shift_minutes: DEFAULT_SHIFT_MINUTES }
    }
}

impl ShiftConfig {
    /// A shift lasting `hours` whole hours, saturating at `u64::MAX` minutes.
    pub fn hours(hours: u64) -> Self {
        Self { shift_minutes: hours.saturating_mul(60) }
    }

    /// The first minute at which the schedule is out of service.
    #[inline]
    pub fn end_minute(&self) -> Minute {
        Minute(self.shift_minutes)
    }

    /// `true` once `clock` has reached the end of the shift.
    #[inline]
    pub fn is_over(&self, clock: &ShiftClock) -> bool {
        clock.current_minute >= self.end_minute()
    }

    /// Construct a `ShiftClock` for a fresh run.
    pub fn make_clock(&self) -> ShiftClock {
        ShiftClock::new()
    }

    /// Reject configurations that describe no shift at all.
    pub fn validate(&self) -> CoreResult<()> {
        if self.shift_minutes == 0 {
            return Err(CoreError::Config("shift_minutes must be > 0".into()));
        }
        Ok(())
    }
}
