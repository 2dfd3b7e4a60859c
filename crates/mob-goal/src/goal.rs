//! The `Goal` trait — the main extension point for user code.

use mob_core::{ControlSet, Priority};

use crate::GoalResult;

/// One unit of entity behavior that may want to run.
///
/// `C` is the per-entity context the goal reads and mutates (position,
/// target, navigation state, …).  The selector owns the goal but never looks
/// inside it: it only asks the questions below and performs the lifecycle
/// transitions they imply.
///
/// # Required methods
///
/// Only [`can_start`][Self::can_start] is required.  Everything else has a
/// default that matches the common case: no controls, continue while
/// startable, stoppable, lower priority value wins, no-op actions.
///
/// # Contract
///
/// - [`required_controls`][Self::required_controls] is read once, when the
///   goal is registered.  Later changes are not observed.
/// - Queries may update the goal's own bookkeeping (pick a wander target,
///   roll a chance) but must not assume they are followed by `start`.
/// - `start`, `stop`, and `tick` errors abort the current selector tick.
///
/// # Example
///
/// ```rust,ignore
/// struct LookAround { remaining: u32 }
///
/// impl Goal<Mob> for LookAround {
///     fn required_controls(&self) -> ControlSet {
///         ControlSet::from([Control::Look])
///     }
///     fn can_start(&mut self, mob: &Mob) -> bool {
///         mob.rng_roll < 0.02
///     }
///     fn should_continue(&mut self, _mob: &Mob) -> bool {
///         self.remaining > 0
///     }
///     fn start(&mut self, _mob: &mut Mob) -> GoalResult<()> {
///         self.remaining = 20;
///         Ok(())
///     }
///     fn tick(&mut self, mob: &mut Mob) -> GoalResult<()> {
///         self.remaining -= 1;
///         mob.yaw += 4.5;
///         Ok(())
///     }
/// }
/// ```
pub trait Goal<C: ?Sized>: Send {
    /// Controls this goal holds exclusively while running.
    fn required_controls(&self) -> ControlSet {
        ControlSet::EMPTY
    }

    /// Whether the goal wants to start this tick.
    fn can_start(&mut self, ctx: &C) -> bool;

    /// Whether a running goal wants to keep running.
    ///
    /// Default: the start condition still holds.
    fn should_continue(&mut self, ctx: &C) -> bool {
        self.can_start(ctx)
    }

    /// Whether the goal may be interrupted by another goal at all.
    fn can_stop(&self) -> bool {
        true
    }

    /// Whether this goal, currently holding a control at priority `own`,
    /// yields it to a challenger registered at priority `challenger`.
    ///
    /// Default: yield only to a strictly higher-precedence challenger, and
    /// only if [`can_stop`][Self::can_stop].  Equal priorities never preempt,
    /// so the current holder keeps the control.
    fn can_be_replaced_by(&self, own: Priority, challenger: Priority) -> bool {
        self.can_stop() && challenger.outranks(own)
    }

    /// Called once when the goal acquires its controls.
    fn start(&mut self, _ctx: &mut C) -> GoalResult<()> {
        Ok(())
    }

    /// Called once when the goal stops, whether it finished, lost a control to
    /// preemption, or had a control disabled.
    fn stop(&mut self, _ctx: &mut C) -> GoalResult<()> {
        Ok(())
    }

    /// Called every selector tick while running.
    fn tick(&mut self, _ctx: &mut C) -> GoalResult<()> {
        Ok(())
    }

    /// Short label for logs.  Default: the unqualified type name, without
    /// generic arguments.
    fn name(&self) -> &str {
        let full = std::any::type_name::<Self>();
        let path = full.split('<').next().unwrap_or(full);
        path.rsplit("::").next().unwrap_or(path)
    }
}
