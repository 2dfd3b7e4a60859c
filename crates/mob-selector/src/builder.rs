//! Fluent builder for constructing a [`GoalSelector`].

use mob_core::{Control, Priority};
use mob_goal::Goal;

use crate::{GoalSelector, SelectorConfig, SelectorError, SelectorResult};

/// Fluent builder for [`GoalSelector<C>`].
///
/// Collects the goal list an entity is spawned with, validates it against the
/// configuration, and registers everything in the order given.
///
/// # Optional inputs (have defaults)
///
/// | Method             | Default                    |
/// |--------------------|----------------------------|
/// | `.config(c)`       | `SelectorConfig::default()`|
/// | `.disabled(ctl)`   | Nothing disabled           |
///
/// # Example
///
/// ```rust,ignore
/// let selector = SelectorBuilder::new()
///     .goal(Priority(0), SwimGoal)
///     .goal(Priority(5), WanderGoal::new(1.0))
///     .goal(Priority(8), LookAroundGoal::default())
///     .build()?;
/// ```
pub struct SelectorBuilder<C: ?Sized> {
    config: SelectorConfig,
    goals:  Vec<(Priority, Box<dyn Goal<C>>)>,
}

impl<C: ?Sized> Default for SelectorBuilder<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: ?Sized> SelectorBuilder<C> {
    pub fn new() -> Self {
        Self { config: SelectorConfig::default(), goals: Vec::new() }
    }

    /// Replace the configuration.  Controls disabled so far are kept.
    pub fn config(mut self, config: SelectorConfig) -> Self {
        let disabled = self.config.disabled.union(config.disabled);
        self.config = SelectorConfig { disabled, ..config };
        self
    }

    /// Start with `control` disabled.
    pub fn disabled(mut self, control: Control) -> Self {
        self.config.disabled.insert(control);
        self
    }

    /// Append a goal.  Registration order is the order of these calls.
    pub fn goal<G>(mut self, priority: impl Into<Priority>, goal: G) -> Self
    where
        G: Goal<C> + 'static,
    {
        self.goals.push((priority.into(), Box::new(goal)));
        self
    }

    /// Append an already-boxed goal.
    pub fn boxed_goal(mut self, priority: impl Into<Priority>, goal: Box<dyn Goal<C>>) -> Self {
        self.goals.push((priority.into(), goal));
        self
    }

    /// Validate inputs and return a selector with every goal registered idle.
    pub fn build(self) -> SelectorResult<GoalSelector<C>> {
        if self.config.max_goals == 0 {
            return Err(SelectorError::Config("max_goals must be at least 1".into()));
        }
        if self.goals.len() > self.config.max_goals {
            return Err(SelectorError::TooManyGoals { max: self.config.max_goals });
        }

        let mut selector = GoalSelector::with_config(self.config);
        for (priority, goal) in self.goals {
            selector.register_boxed(priority, goal)?;
        }
        Ok(selector)
    }
}
