//! Typed identifiers for patrollers and targets.
//!
//! Agent ids are dense (`0..agent_count`) and double as indices into the
//! simulation's agent list.  Target ids are chosen by the caller and only need
//! to stay stable from one tick to the next.

use std::fmt;

macro_rules! typed_id {
    ($(#[$attr:meta])* $vis:vis struct $name:ident($inner:ty) => $label:literal;) => {
        $(#[$attr])*
        #[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        $vis struct $name(pub $inner);

        impl $name {
            #[inline(always)]
            pub fn index(self) -> usize {
                self.0 as usize
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, concat!($label, "#{}"), self.0)
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
    /// Position of a patroller in the simulation's agent list.
    pub struct AgentId(u32) => "agent";
}

typed_id! {
    /// Caller-assigned identity of an observable target (an intruder).
    ///
    /// Exposure is tracked per id, so it must survive the target list being
    /// rebuilt every tick.
    pub struct TargetId(u32) => "target";
}
