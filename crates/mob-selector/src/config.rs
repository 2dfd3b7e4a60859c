//! Per-selector configuration.

use mob_core::ControlSet;

/// Static settings for one [`GoalSelector`][crate::GoalSelector].
///
/// Typically shared by every entity of a kind and loaded alongside the world
/// configuration.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SelectorConfig {
    /// Upper bound on live registrations.  Must be at least 1.
    pub max_goals: usize,

    /// Controls that start out disabled (e.g. `Move` for a leashed or
    /// ridden entity).
    pub disabled: ControlSet,
}

impl SelectorConfig {
    pub const DEFAULT_MAX_GOALS: usize = 64;
}

impl Default for SelectorConfig {
    fn default() -> Self {
        Self {
            max_goals: Self::DEFAULT_MAX_GOALS,
            disabled:  ControlSet::EMPTY,
        }
    }
}
