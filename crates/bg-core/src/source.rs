//! Issuing originating gossip tokens.
//!
//! # Uniqueness strategy
//!
//! Every driver starts the shift knowing one piece of gossip that nobody else
//! knows.  Only set membership matters, never the token's value, so a plain
//! monotonic counter is enough:
//!
//! - No two tokens drawn from the same `GossipSource` are equal.
//! - Runs are reproducible: the same sequence of drivers always receives the
//!   same tokens.
//! - The source is an explicit value handed to whoever builds drivers; there
//!   is no process-wide generator.

use crate::GossipId;

/// A counter handing out unique [`GossipId`]s.
///
/// Two sources started at the same offset issue the same tokens, so drivers
/// that will ever share a schedule must be built from one source (the
/// `DriverStoreBuilder` in `bg-driver` owns one for exactly this reason).
#[derive(Clone, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GossipSource {
    next: u64,
}

impl GossipSource {
    /// A source whose first token is `GossipId(0)`.
    pub fn new() -> Self {
        Self::default()
    }

    /// A source whose first token is `GossipId(first)`.
    ///
    /// Useful when two independently built driver groups must never collide:
    /// start the second group past the last token of the first.
    pub fn starting_at(first: u64) -> Self {
        Self { next: first }
    }

    /// Issue the next token.
    #[inline]
    pub fn next_gossip(&mut self) -> GossipId {
        let id = GossipId(self.next);
        self.next += 1;
        id
    }

    /// How many tokens this source would have issued had it started at zero.
    #[inline]
    pub fn issued(&self) -> u64 {
        self.next
    }
}
