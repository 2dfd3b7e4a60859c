//! Static goal priority.

use std::fmt;

/// The static priority a goal is registered with.
///
/// Lower values take precedence: a goal at `Priority(0)` outranks one at
/// `Priority(5)`.  The selector itself never compares priorities; it only
/// carries them to `mob_goal::Goal::can_be_replaced_by`, which owns the
/// policy.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Priority(pub i32);

impl Priority {
    /// The highest precedence a goal can have.
    pub const HIGHEST: Priority = Priority(i32::MIN);

    /// The lowest precedence a goal can have.
    pub const LOWEST: Priority = Priority(i32::MAX);

    /// `true` if `self` takes strict precedence over `other`.
    #[inline]
    pub fn outranks(self, other: Priority) -> bool {
        self.0 < other.0
    }
}

impl From<i32> for Priority {
    fn from(value: i32) -> Self {
        Priority(value)
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "P{}", self.0)
    }
}
