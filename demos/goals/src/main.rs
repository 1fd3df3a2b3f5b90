//! goals — plays the gossiping bus drivers games.
//!
//! Runs the built-in sample games, then every routes file given on the
//! command line (one driver per CSV line, see `data/goals.csv`), and prints
//! how many minutes each game needs until every driver knows all the gossip.
//!
//! ```text
//! cargo run -p goals -- demos/goals/data/goals.csv
//! RUST_LOG=bg_sim=debug cargo run -p goals
//! ```

use std::path::Path;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use tracing::info;
use tracing_subscriber::EnvFilter;

use bg_core::{DriverId, Minute, StopId};
use bg_driver::{DriverStoreBuilder, Route, load_routes_csv};
use bg_sim::{GossipGame, Outcome, ScheduleBuilder, ScheduleObserver};

// ── Sample games ──────────────────────────────────────────────────────────────

const SAMPLES: &[(&str, &[&[u32]])] = &[
    ("lone driver",            &[&[1, 2]]),
    ("meet at stop 2",         &[&[1, 2], &[3, 2]]),
    ("never meet",             &[&[1, 2], &[3, 4]]),
    ("same stop, wrong time",  &[&[2, 1, 2], &[5, 2, 8]]),
    ("three drivers",          &[&[3, 1, 2, 3], &[3, 2, 3, 1], &[4, 2, 3, 4, 5]]),
];

// ── Observer: count meetings ─────────────────────────────────────────────────

#[derive(Default)]
struct MeetingCounter {
    meetings:  usize,
    last_seen: Option<Minute>,
}

impl ScheduleObserver for MeetingCounter {
    fn on_meeting(&mut self, minute: Minute, _stop: StopId, _a: DriverId, _b: DriverId) {
        self.meetings += 1;
        self.last_seen = Some(minute);
    }
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("=== goals — gossiping bus drivers ===");
    println!();
    println!("{:<24} {:>8} {:>10} {:>10}", "Game", "Drivers", "Meetings", "Result");
    println!("{}", "-".repeat(55));

    for &(label, stops) in SAMPLES {
        let routes = stops
            .iter()
            .map(|s| Route::from_stops(s.iter().copied()))
            .collect::<Result<Vec<_>, _>>()?;
        play(label, routes)?;
    }

    for arg in std::env::args().skip(1) {
        let path = Path::new(&arg);
        let routes = load_routes_csv(path)
            .with_context(|| format!("loading routes from {}", path.display()))?;
        info!(path = %path.display(), drivers = routes.len(), "loaded routes");
        play(&arg, routes)?;
    }

    Ok(())
}

fn play(label: &str, routes: Vec<Route>) -> Result<Outcome> {
    let store = DriverStoreBuilder::new().routes(routes).build();
    let drivers = store.len();

    let mut obs = MeetingCounter::default();
    let schedule = ScheduleBuilder::new(store).build_observed(&mut obs)?;
    let mut game = GossipGame::from_schedule(schedule);

    let t0 = Instant::now();
    let outcome = game.play_observed(&mut obs);
    info!(
        game = label,
        elapsed_us = whole_micros(t0.elapsed()),
        last_meeting = ?obs.last_seen,
        "game played"
    );

    println!("{:<24} {:>8} {:>10} {:>10}", label, drivers, obs.meetings, outcome);
    Ok(outcome)
}

/// `elapsed` in whole microseconds, saturating at `u64::MAX`.
fn whole_micros(elapsed: Duration) -> u64 {
    u64::try_from(elapsed.as_micros()).unwrap_or(u64::MAX)
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::whole_micros;

    #[test]
    fn micros_of_short_duration() {
        assert_eq!(whole_micros(Duration::from_millis(3)), 3_000);
    }

    #[test]
    fn micros_saturate_for_huge_duration() {
        assert_eq!(whole_micros(Duration::MAX), u64::MAX);
    }
}
