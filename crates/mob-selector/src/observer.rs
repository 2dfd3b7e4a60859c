//! Selector observer trait for instrumentation and logging.

use std::fmt;

use mob_core::{EntryId, Priority};

/// The two halves of a selector tick.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum Phase {
    /// Stop, control cleanup, and start.
    Update,
    /// Advancing every running goal.
    Tick,
}

impl Phase {
    pub fn as_str(self) -> &'static str {
        match self {
            Phase::Update => "goal_update",
            Phase::Tick   => "goal_tick",
        }
    }
}

/// Why a running goal was stopped.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum StopReason {
    /// `should_continue` returned `false`.
    Finished,
    /// One of its required controls was disabled.
    ControlDisabled,
    /// Another goal took one of its controls.
    Preempted { by: EntryId },
    /// The goal was unregistered while running.
    Removed,
}

impl fmt::Display for StopReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StopReason::Finished        => f.write_str("finished"),
            StopReason::ControlDisabled => f.write_str("control disabled"),
            StopReason::Preempted { by } => write!(f, "preempted by {by}"),
            StopReason::Removed         => f.write_str("removed"),
        }
    }
}

/// Callbacks invoked by
/// [`GoalSelector::tick_observed`][crate::GoalSelector::tick_observed].
///
/// All methods have default no-op implementations so implementors only need to
/// override what they care about.  Phase callbacks bracket the update and tick
/// halves, which is where a profiler would push and pop its sections.
///
/// # Example — transition counter
///
/// ```rust,ignore
/// #[derive(Default)]
/// struct Churn { starts: usize, preemptions: usize }
///
/// impl SelectorObserver for Churn {
///     fn on_goal_started(&mut self, _e: EntryId, _g: &str, _p: Priority) {
///         self.starts += 1;
///     }
///     fn on_goal_stopped(&mut self, _e: EntryId, _g: &str, reason: StopReason) {
///         if matches!(reason, StopReason::Preempted { .. }) {
///             self.preemptions += 1;
///         }
///     }
/// }
/// ```
pub trait SelectorObserver {
    fn on_phase_start(&mut self, _phase: Phase) {}

    fn on_phase_end(&mut self, _phase: Phase) {}

    /// Called after a goal has acquired its controls and been started.
    fn on_goal_started(&mut self, _entry: EntryId, _goal: &str, _priority: Priority) {}

    /// Called after a goal has been stopped and marked idle.
    fn on_goal_stopped(&mut self, _entry: EntryId, _goal: &str, _reason: StopReason) {}
}

/// A [`SelectorObserver`] that does nothing.
pub struct NoopObserver;

impl SelectorObserver for NoopObserver {}

/// A [`SelectorObserver`] that reports every transition through the `log`
/// facade, tagged with the owning entity's label.
///
/// Starts and stops go to `debug`, phase boundaries to `trace`.
pub struct LogObserver<'a> {
    pub label: &'a str,
}

impl<'a> LogObserver<'a> {
    pub fn new(label: &'a str) -> Self {
        Self { label }
    }
}

impl SelectorObserver for LogObserver<'_> {
    fn on_phase_start(&mut self, phase: Phase) {
        log::trace!(target: "mob_selector", "[{}] {} begin", self.label, phase.as_str());
    }

    fn on_phase_end(&mut self, phase: Phase) {
        log::trace!(target: "mob_selector", "[{}] {} end", self.label, phase.as_str());
    }

    fn on_goal_started(&mut self, entry: EntryId, goal: &str, priority: Priority) {
        log::debug!(target: "mob_selector", "[{}] start {goal} ({entry}, {priority})", self.label);
    }

    fn on_goal_stopped(&mut self, entry: EntryId, goal: &str, reason: StopReason) {
        log::debug!(target: "mob_selector", "[{}] stop {goal} ({entry}): {reason}", self.label);
    }
}
