//! `DriverStore` — the fixed, ordered collection of drivers in one schedule.
//!
//! # Why handles?
//!
//! Callers build drivers, hand them to a schedule, and later want to inspect
//! them ("which stop is driver 1 at now?").  Rather than sharing mutable
//! references between the caller and the schedule, the schedule owns the
//! store and callers keep the `DriverId` handles returned by
//! [`DriverStoreBuilder`][crate::DriverStoreBuilder]:
//!
//! ```ignore
//! let stop = schedule.driver(first).current_stop();  // O(1) index
//! ```
//!
//! The collection itself never changes shape after `build()`; only the drivers
//! inside it are mutated, and only through `&mut DriverStore`.

use std::ops::Index;

use bg_core::DriverId;

use crate::Driver;

/// Drivers indexed by [`DriverId`].
///
/// `DriverId(i)` is the `i`-th driver added to the builder.  Indexing with an
/// id from a different store panics, like any out-of-bounds slice access.
#[derive(Clone, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DriverStore {
    drivers: Vec<Driver>,
}

impl DriverStore {
    pub(crate) fn new(drivers: Vec<Driver>) -> Self {
        Self { drivers }
    }

    /// Number of drivers.
    #[inline]
    pub fn len(&self) -> usize {
        self.drivers.len()
    }

    /// `true` if there are no drivers.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.drivers.is_empty()
    }

    /// Iterator over all `DriverId`s in ascending index order.
    pub fn ids(&self) -> impl Iterator<Item = DriverId> + '_ {
        (0..self.drivers.len() as u32).map(DriverId)
    }

    /// Iterator over `(DriverId, &Driver)` in ascending index order.
    pub fn iter(&self) -> impl Iterator<Item = (DriverId, &Driver)> + '_ {
        self.drivers
            .iter()
            .enumerate()
            .map(|(i, d)| (DriverId(i as u32), d))
    }

    /// The driver behind `id`.
    ///
    /// # Panics
    /// Panics if `id` does not belong to this store.
    #[inline]
    pub fn get(&self, id: DriverId) -> &Driver {
        &self.drivers[id.index()]
    }

    /// The driver behind `id`, or `None` if `id` is out of range.
    #[inline]
    pub fn try_get(&self, id: DriverId) -> Option<&Driver> {
        self.drivers.get(id.index())
    }

    // ── Whole-store operations ────────────────────────────────────────────

    /// Move every driver on to its next stop.
    pub fn advance_all(&mut self) {
        for driver in &mut self.drivers {
            driver.advance();
        }
    }

    /// `true` if drivers `a` and `b` are at the same stop right now.
    #[inline]
    pub fn co_located(&self, a: DriverId, b: DriverId) -> bool {
        self.get(a).current_stop() == self.get(b).current_stop()
    }

    /// Let `listener` learn everything `speaker` knows (one direction only).
    ///
    /// A driver pulling from itself learns nothing, so `listener == speaker`
    /// is a no-op.
    pub fn pull_gossip(&mut self, listener: DriverId, speaker: DriverId) {
        if listener == speaker {
            return;
        }
        let (into, from) = self.pair_mut(listener, speaker);
        into.exchange_gossip(from);
    }

    /// Number of drivers that know every originating gossip item.
    ///
    /// Each driver contributes exactly one unique item, so "knows everything"
    /// means "knows as many items as there are drivers".
    pub fn informed_count(&self) -> usize {
        let total = self.drivers.len();
        self.drivers
            .iter()
            .filter(|d| d.gossip_count() == total)
            .count()
    }

    // ── Private helpers ───────────────────────────────────────────────────

    /// Disjoint `(&mut a, &b)` borrows.  `a != b` (checked by the caller).
    fn pair_mut(&mut self, a: DriverId, b: DriverId) -> (&mut Driver, &Driver) {
        let (i, j) = (a.index(), b.index());
        debug_assert_ne!(i, j, "pair_mut needs two distinct drivers");
        if i < j {
            let (lo, hi) = self.drivers.split_at_mut(j);
            (&mut lo[i], &hi[0])
        } else {
            let (lo, hi) = self.drivers.split_at_mut(i);
            (&mut hi[0], &lo[j])
        }
    }
}

impl Index<DriverId> for DriverStore {
    type Output = Driver;

    #[inline]
    fn index(&self, id: DriverId) -> &Driver {
        self.get(id)
    }
}
