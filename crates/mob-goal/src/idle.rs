//! A goal that never runs.

use crate::Goal;

/// A [`Goal`] that never starts and requires no controls.
///
/// Useful as a placeholder in tests or for entities whose goal list is filled
/// in later.
pub struct IdleGoal;

impl<C: ?Sized> Goal<C> for IdleGoal {
    fn can_start(&mut self, _ctx: &C) -> bool {
        false
    }
}
