//! Strongly typed, zero-cost identifier wrappers.
//!
//! All IDs are `Copy + Ord + Hash` so they can be used as set members and map
//! keys without ceremony.  The inner integer is `pub`; `DriverId` doubles as
//! an index into a `DriverStore`, so prefer its `.index()` helper there.
//!
//! Unlike handle types in larger simulations there is no `INVALID` sentinel:
//! stop numbers are supplied by the caller and every `u32` is a legal stop.

use std::fmt;

/// Generate a typed ID wrapper around a primitive integer.
macro_rules! typed_id {
    ($(#[$attr:meta])* $vis:vis struct $name:ident($inner:ty);) => {
        $(#[$attr])*
        #[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        $vis struct $name(pub $inner);

        impl $name {
            /// Cast to `usize` for direct use as a `Vec` index.
            #[inline(always)]
            pub fn index(self) -> usize {
                self.0 as usize
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}({})", stringify!($name), self.0)
            }
        }

        impl From<$inner> for $name {
            #[inline(always)]
            fn from(raw: $inner) -> $name {
                $name(raw)
            }
        }

        impl TryFrom<usize> for $name {
            type Error = std::num::TryFromIntError;
            fn try_from(n: usize) -> Result<$name, Self::Error> {
                <$inner>::try_from(n).map($name)
            }
        }
    };
}

typed_id! {
    /// Handle of a driver: its index in the owning `DriverStore`.
    pub struct DriverId(u32);
}

typed_id! {
    /// A bus stop.  Only equality is meaningful.
    pub struct StopId(u32);
}

typed_id! {
    /// One unit of gossip.  Each driver starts out knowing exactly one,
    /// issued by a [`GossipSource`][crate::GossipSource].
    pub struct GossipId(u64);
}
