//! `PrioritizedGoal` — a goal as the selector stores it.

use std::fmt;

use mob_core::{ControlSet, Priority};

use crate::{Goal, GoalResult};

/// A boxed goal plus its static priority and the selector-managed running
/// flag.
///
/// The required-control set is sampled from the goal once, here, and never
/// re-read: a goal cannot change what it holds while the selector is tracking
/// it.
pub struct PrioritizedGoal<C: ?Sized> {
    goal:     Box<dyn Goal<C>>,
    priority: Priority,
    controls: ControlSet,
    running:  bool,
}

impl<C: ?Sized> PrioritizedGoal<C> {
    /// Wrap `goal` at `priority`.  New entries are idle.
    pub fn new(priority: Priority, goal: Box<dyn Goal<C>>) -> Self {
        let controls = goal.required_controls();
        Self { goal, priority, controls, running: false }
    }

    #[inline]
    pub fn priority(&self) -> Priority {
        self.priority
    }

    /// The controls this entry holds while running.
    #[inline]
    pub fn controls(&self) -> ControlSet {
        self.controls
    }

    #[inline]
    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn name(&self) -> &str {
        self.goal.name()
    }

    pub fn goal(&self) -> &dyn Goal<C> {
        self.goal.as_ref()
    }

    pub fn goal_mut(&mut self) -> &mut dyn Goal<C> {
        self.goal.as_mut()
    }

    // ── Queries ───────────────────────────────────────────────────────────

    #[inline]
    pub fn can_start(&mut self, ctx: &C) -> bool {
        self.goal.can_start(ctx)
    }

    #[inline]
    pub fn should_continue(&mut self, ctx: &C) -> bool {
        self.goal.should_continue(ctx)
    }

    /// Whether this entry (as the current holder of a control) yields to
    /// `challenger`.  The decision belongs to this entry's goal.
    #[inline]
    pub fn can_be_replaced_by(&self, challenger: &PrioritizedGoal<C>) -> bool {
        self.goal.can_be_replaced_by(self.priority, challenger.priority)
    }

    // ── Transitions ───────────────────────────────────────────────────────

    /// Mark running and start the goal.  No-op if already running.
    ///
    /// The flag is set before the goal is called so it agrees with the
    /// ownership table the selector has just written, even if `start` fails.
    pub fn start(&mut self, ctx: &mut C) -> GoalResult<()> {
        if self.running {
            return Ok(());
        }
        self.running = true;
        self.goal.start(ctx)
    }

    /// Mark idle and stop the goal.  No-op if not running, so a goal is never
    /// stopped twice for one run.
    pub fn stop(&mut self, ctx: &mut C) -> GoalResult<()> {
        if !self.running {
            return Ok(());
        }
        self.running = false;
        self.goal.stop(ctx)
    }

    /// Advance the goal by one tick.
    #[inline]
    pub fn tick(&mut self, ctx: &mut C) -> GoalResult<()> {
        self.goal.tick(ctx)
    }

    /// Clear the running flag without calling the goal.
    ///
    /// Only for re-initializing a selector whose tables may be inconsistent.
    pub fn force_idle(&mut self) {
        self.running = false;
    }
}

impl<C: ?Sized> fmt::Debug for PrioritizedGoal<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PrioritizedGoal")
            .field("goal", &self.goal.name())
            .field("priority", &self.priority)
            .field("controls", &self.controls)
            .field("running", &self.running)
            .finish()
    }
}
