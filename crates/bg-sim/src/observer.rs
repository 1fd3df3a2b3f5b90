//! Observer trait for progress reporting and data collection.

use bg_core::{DriverId, Minute, StopId};

use crate::Outcome;

/// Callbacks invoked by [`BusSchedule`][crate::BusSchedule] and
/// [`GossipGame`][crate::GossipGame] at key points of a run.
///
/// All methods have default no-op implementations so implementors only need to
/// override what they care about.
///
/// # Example — meeting log
///
/// ```rust
/// use bg_core::{DriverId, Minute, StopId};
/// use bg_sim::{GossipGame, ScheduleObserver};
///
/// #[derive(Default)]
/// struct MeetingLog(Vec<(Minute, StopId)>);
///
/// impl ScheduleObserver for MeetingLog {
///     fn on_meeting(&mut self, minute: Minute, stop: StopId, _a: DriverId, _b: DriverId) {
///         self.0.push((minute, stop));
///     }
/// }
///
/// let mut game = GossipGame::from_stops([vec![1, 2], vec![3, 2]]).unwrap();
/// let mut log = MeetingLog::default();
/// game.play_observed(&mut log);
/// assert_eq!(log.0[0], (Minute(1), StopId(2)));
/// ```
pub trait ScheduleObserver {
    /// Called at the start of each tick, before anyone moves.  `minute` is
    /// the minutes worked so far.
    fn on_tick_start(&mut self, _minute: Minute) {}

    /// Called once per pair of distinct drivers found at the same stop during
    /// a tick's talk step, with `first < second`.
    fn on_meeting(
        &mut self,
        _minute: Minute,
        _stop:   StopId,
        _first:  DriverId,
        _second: DriverId,
    ) {}

    /// Called at the end of each tick.  `minute` is the minutes worked after
    /// the tick; `meetings` counts the pairs reported via `on_meeting`.
    fn on_tick_end(&mut self, _minute: Minute, _meetings: usize) {}

    /// Called by the tick that takes the schedule out of service.
    fn on_shift_end(&mut self, _minute: Minute) {}

    /// Called by the game once per round, before that round's tick.
    /// `informed` is how many drivers already know everything.
    fn on_round(&mut self, _round: u64, _informed: usize) {}

    /// Called once when a game reaches its outcome.
    fn on_game_end(&mut self, _outcome: Outcome) {}
}

/// A [`ScheduleObserver`] that does nothing.  Use when you need to call an
/// `*_observed` method but don't want callbacks.
pub struct NoopObserver;

impl ScheduleObserver for NoopObserver {}
