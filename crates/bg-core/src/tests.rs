//! Unit tests for bg-core.

#[cfg(test)]
mod ids {
    use crate::{DriverId, GossipId, StopId};

    #[test]
    fn index_casts_inner_value() {
        assert_eq!(DriverId(7).index(), 7);
    }

    #[test]
    fn display_names_the_type() {
        assert_eq!(StopId(3).to_string(), "StopId(3)");
        assert_eq!(GossipId(12).to_string(), "GossipId(12)");
    }

    #[test]
    fn try_from_usize_rejects_overflow() {
        assert_eq!(DriverId::try_from(5usize).unwrap(), DriverId(5));
        assert!(DriverId::try_from(u32::MAX as usize + 1).is_err());
    }

    #[test]
    fn from_inner_value() {
        let stop: StopId = 4.into();
        assert_eq!(stop, StopId(4));
    }
}

#[cfg(test)]
mod source {
    use std::collections::HashSet;

    use crate::{GossipId, GossipSource};

    #[test]
    fn starts_at_zero() {
        let mut src = GossipSource::new();
        assert_eq!(src.next_gossip(), GossipId(0));
        assert_eq!(src.next_gossip(), GossipId(1));
        assert_eq!(src.issued(), 2);
    }

    #[test]
    fn tokens_are_unique() {
        let mut src = GossipSource::new();
        let tokens: HashSet<GossipId> = (0..1_000).map(|_| src.next_gossip()).collect();
        assert_eq!(tokens.len(), 1_000);
    }

    #[test]
    fn starting_at_offsets_first_token() {
        let mut src = GossipSource::starting_at(100);
        assert_eq!(src.next_gossip(), GossipId(100));
    }

    #[test]
    fn same_start_same_sequence() {
        let (mut a, mut b) = (GossipSource::new(), GossipSource::new());
        for _ in 0..5 {
            assert_eq!(a.next_gossip(), b.next_gossip());
        }
        assert_eq!(a.issued(), 5);
    }
}

#[cfg(test)]
mod time {
    use crate::{CoreError, DEFAULT_SHIFT_MINUTES, Minute, ShiftClock, ShiftConfig};

    #[test]
    fn clock_advances_one_minute() {
        let mut clock = ShiftClock::new();
        clock.advance();
        clock.advance();
        assert_eq!(clock.current_minute, Minute(2));
        assert_eq!(clock.minutes_worked(), 2);
    }

    #[test]
    fn default_shift_is_eight_hours() {
        let cfg = ShiftConfig::default();
        assert_eq!(cfg.shift_minutes, DEFAULT_SHIFT_MINUTES);
        assert_eq!(cfg.shift_minutes, 480);
        assert_eq!(cfg, ShiftConfig::hours(8));
    }

    #[test]
    fn shift_over_exactly_at_end_minute() {
        let cfg = ShiftConfig { shift_minutes: 3 };
        let mut clock = cfg.make_clock();
        for _ in 0..2 {
            clock.advance();
        }
        assert!(!cfg.is_over(&clock));
        clock.advance();
        assert!(cfg.is_over(&clock));
        clock.advance();
        assert!(cfg.is_over(&clock));
    }

    #[test]
    fn hours_saturate_instead_of_overflowing() {
        assert_eq!(ShiftConfig::hours(2).shift_minutes, 120);
        assert_eq!(ShiftConfig::hours(u64::MAX).shift_minutes, u64::MAX);
        assert_eq!(ShiftConfig::hours(u64::MAX / 60 + 1).end_minute(), Minute(u64::MAX));
    }

    #[test]
    fn minute_displays_with_prefix() {
        assert_eq!(Minute(75).to_string(), "M75");
    }

    #[test]
    fn zero_length_shift_rejected() {
        let err = ShiftConfig { shift_minutes: 0 }.validate().unwrap_err();
        assert!(matches!(err, CoreError::Config(_)));
        assert!(ShiftConfig::default().validate().is_ok());
    }
}
