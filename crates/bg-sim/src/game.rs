//! `GossipGame` — how many minutes until everyone has heard everything?

use std::fmt;

use bg_driver::{DriverStore, DriverStoreBuilder};
use tracing::debug;

use crate::{BusSchedule, NoopObserver, ScheduleObserver, SimResult};

// ── Outcome ───────────────────────────────────────────────────────────────────

/// How a game ended.
///
/// Displays as the minute count (`"5"`) or as `"never"`.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// Every driver knew every gossip item after this many minutes.
    Done(u64),
    /// The shift ended before the gossip had spread to everyone.
    Never,
}

impl Outcome {
    /// Minutes needed, or `None` for [`Outcome::Never`].
    pub fn minutes(self) -> Option<u64> {
        match self {
            Outcome::Done(n) => Some(n),
            Outcome::Never => None,
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Done(n) => write!(f, "{n}"),
            Outcome::Never => f.write_str("never"),
        }
    }
}

// ── GameState ─────────────────────────────────────────────────────────────────

/// `Running` until the first call to `play`; `Finished` is terminal.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum GameState {
    Running,
    Finished(Outcome),
}

// ── GossipGame ────────────────────────────────────────────────────────────────

/// Ticks a [`BusSchedule`] until all gossip has spread or the shift ends.
///
/// Each round the game:
///
/// 1. gives up with [`Outcome::Never`] if the schedule is out of service,
/// 2. counts the round,
/// 3. checks whether every driver knows every gossip item,
/// 4. ticks the schedule,
/// 5. stops with [`Outcome::Done`] if the check in step 3 passed.
///
/// The check looks at the gossip from *before* the round's tick, and the tick
/// still happens on the winning round.  A game reporting `Done(n)` has seen
/// the gossip complete at minute `n - 1`, and leaves its schedule at minute
/// `n`.
pub struct GossipGame {
    schedule: BusSchedule,
    state:    GameState,
}

impl GossipGame {
    /// A game over `drivers` with the default 8-hour shift.
    ///
    /// Building the schedule runs its initial talk step.
    pub fn new(drivers: DriverStore) -> SimResult<Self> {
        Ok(Self::from_schedule(BusSchedule::new(drivers)?))
    }

    /// A game over an already-built schedule.
    pub fn from_schedule(schedule: BusSchedule) -> Self {
        Self { schedule, state: GameState::Running }
    }

    /// A game with one driver per stop list.
    ///
    /// Fails if any list is empty or if there are no lists at all.
    pub fn from_stops<I, S>(routes: I) -> SimResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: IntoIterator<Item = u32>,
    {
        let mut builder = DriverStoreBuilder::new();
        for stops in routes {
            builder.add_stops(stops)?;
        }
        Self::new(builder.build())
    }

    /// Play the game and render the outcome: the number of minutes needed,
    /// or `"never"`.
    pub fn stops_needed(&mut self) -> String {
        self.play().to_string()
    }

    /// Play the game to its outcome.
    ///
    /// A finished game returns its recorded outcome without ticking again.
    pub fn play(&mut self) -> Outcome {
        self.play_observed(&mut NoopObserver)
    }

    /// Like [`play`](Self::play), reporting rounds, ticks and the outcome to
    /// `observer`.
    pub fn play_observed<O: ScheduleObserver>(&mut self, observer: &mut O) -> Outcome {
        if let GameState::Finished(outcome) = self.state {
            return outcome;
        }

        let outcome = self.run_rounds(observer);
        self.state = GameState::Finished(outcome);

        debug!(
            %outcome,
            minutes_worked = self.schedule.minutes_worked(),
            drivers = self.schedule.driver_count(),
            "gossip game finished"
        );
        observer.on_game_end(outcome);
        outcome
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn schedule(&self) -> &BusSchedule {
        &self.schedule
    }

    fn run_rounds<O: ScheduleObserver>(&mut self, observer: &mut O) -> Outcome {
        let total = self.schedule.driver_count();
        let mut rounds: u64 = 0;

        loop {
            if self.schedule.is_out_of_service() {
                return Outcome::Never;
            }
            rounds += 1;

            let informed = self.schedule.drivers().informed_count();
            let done = informed == total;
            observer.on_round(rounds, informed);
            debug!(round = rounds, informed, total, "round");

            self.schedule.tick_observed(observer);

            if done {
                return Outcome::Done(rounds);
            }
        }
    }
}
