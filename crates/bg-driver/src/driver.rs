//! Per-driver state: where on the route the driver is, and what it has heard.

use bg_core::{GossipId, StopId};

use crate::Route;

#[cfg(feature = "fx-hash")]
type GossipSet = rustc_hash::FxHashSet<GossipId>;
#[cfg(not(feature = "fx-hash"))]
type GossipSet = std::collections::HashSet<GossipId>;

/// A bus driver looping over a fixed [`Route`].
///
/// A driver is always parked at a stop: `position` indexes into the route and
/// `advance` moves one stop forward, wrapping back to the first stop after the
/// last.  The set of known gossip starts as `{origin}` and only ever grows.
///
/// Drivers have no notion of equality; inside a simulation they are told
/// apart by their `DriverId` handle in the owning `DriverStore`.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Driver {
    route:    Route,
    /// Index into `route`.  Always `< route.stop_count()`.
    position: usize,
    /// The gossip this driver started the shift with.
    origin:   GossipId,
    gossip:   GossipSet,
}

impl Driver {
    /// A driver at the first stop of `route`, knowing only `origin`.
    ///
    /// `origin` must not be shared with any other driver that will take part
    /// in the same schedule; `DriverStoreBuilder` guarantees that.
    pub fn new(route: Route, origin: GossipId) -> Self {
        let mut gossip = GossipSet::default();
        gossip.insert(origin);
        Self { route, position: 0, origin, gossip }
    }

    // ── Route traversal ───────────────────────────────────────────────────

    /// The stop the driver is currently at.
    #[inline]
    pub fn current_stop(&self) -> StopId {
        self.route.stop(self.position)
    }

    /// Drive on to the next stop, looping back to the start after the last.
    #[inline]
    pub fn advance(&mut self) {
        self.position = (self.position + 1) % self.route.stop_count();
    }

    /// Index of the current stop within the route.
    #[inline]
    pub fn position(&self) -> usize {
        self.position
    }

    pub fn route(&self) -> &Route {
        &self.route
    }

    // ── Gossip ────────────────────────────────────────────────────────────

    /// Number of distinct gossip items this driver knows.
    #[inline]
    pub fn gossip_count(&self) -> usize {
        self.gossip.len()
    }

    /// Learn everything `other` knows.
    ///
    /// One-way: `other` is not modified.  Repeating the call with the same
    /// `other` changes nothing.
    pub fn exchange_gossip(&mut self, other: &Driver) {
        self.gossip.extend(other.gossip.iter().copied());
    }

    /// The gossip this driver started with.
    #[inline]
    pub fn origin(&self) -> GossipId {
        self.origin
    }

    /// `true` if this driver has heard `gossip`.
    #[inline]
    pub fn knows(&self, gossip: GossipId) -> bool {
        self.gossip.contains(&gossip)
    }

    /// Every gossip item this driver knows, in no particular order.
    pub fn gossip(&self) -> impl Iterator<Item = GossipId> + '_ {
        self.gossip.iter().copied()
    }
}
