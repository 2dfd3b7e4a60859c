//! Unit tests for mob-goal.

use mob_core::{Control, ControlSet, Priority};

use crate::{Goal, GoalError, GoalResult, IdleGoal, PrioritizedGoal};

// ── Helpers ───────────────────────────────────────────────────────────────────

/// Minimal entity context: a start switch and a record of lifecycle calls.
#[derive(Default)]
struct Pen {
    ready:  bool,
    events: Vec<&'static str>,
}

/// Requires `Move`; runs while `ready`.
struct Walk;

impl Goal<Pen> for Walk {
    fn required_controls(&self) -> ControlSet {
        ControlSet::from([Control::Move])
    }
    fn can_start(&mut self, ctx: &Pen) -> bool {
        ctx.ready
    }
    fn start(&mut self, ctx: &mut Pen) -> GoalResult<()> {
        ctx.events.push("start");
        Ok(())
    }
    fn stop(&mut self, ctx: &mut Pen) -> GoalResult<()> {
        ctx.events.push("stop");
        Ok(())
    }
    fn tick(&mut self, ctx: &mut Pen) -> GoalResult<()> {
        ctx.events.push("tick");
        Ok(())
    }
}

/// Refuses to be interrupted.
struct Stubborn;

impl Goal<Pen> for Stubborn {
    fn can_start(&mut self, _ctx: &Pen) -> bool {
        true
    }
    fn can_stop(&self) -> bool {
        false
    }
}

/// Yields to anyone, including equal priorities.
struct Yielding;

impl Goal<Pen> for Yielding {
    fn can_start(&mut self, _ctx: &Pen) -> bool {
        true
    }
    fn can_be_replaced_by(&self, _own: Priority, _challenger: Priority) -> bool {
        true
    }
}

struct Broken;

impl Goal<Pen> for Broken {
    fn can_start(&mut self, _ctx: &Pen) -> bool {
        true
    }
    fn start(&mut self, _ctx: &mut Pen) -> GoalResult<()> {
        Err(GoalError::Failed("no path".into()))
    }
}

fn entry(priority: i32, goal: impl Goal<Pen> + 'static) -> PrioritizedGoal<Pen> {
    PrioritizedGoal::new(Priority(priority), Box::new(goal))
}

// ── Goal defaults ─────────────────────────────────────────────────────────────

#[cfg(test)]
mod goal_defaults {
    use super::*;

    #[test]
    fn should_continue_defaults_to_can_start() {
        let mut walk = Walk;
        let mut pen = Pen::default();
        assert!(!walk.should_continue(&pen));
        pen.ready = true;
        assert!(walk.should_continue(&pen));
    }

    #[test]
    fn default_replacement_requires_strictly_higher_precedence() {
        let walk = Walk;
        assert!(walk.can_be_replaced_by(Priority(5), Priority(1)));
        assert!(!walk.can_be_replaced_by(Priority(5), Priority(5)));
        assert!(!walk.can_be_replaced_by(Priority(1), Priority(5)));
    }

    #[test]
    fn unstoppable_goal_never_yields() {
        assert!(!Stubborn.can_be_replaced_by(Priority(5), Priority(0)));
    }

    #[test]
    fn name_is_unqualified_type_name() {
        assert_eq!(Goal::<Pen>::name(&Walk), "Walk");
    }

    /// Generic wrapper around another goal, for naming.
    struct Slowed<G>(G);

    impl<G: Goal<Pen>> Goal<Pen> for Slowed<G> {
        fn can_start(&mut self, ctx: &Pen) -> bool {
            self.0.can_start(ctx)
        }
    }

    #[test]
    fn name_drops_generic_arguments() {
        assert_eq!(Goal::<Pen>::name(&Slowed(Walk)), "Slowed");
        assert_eq!(Goal::<Pen>::name(&Slowed(Slowed(Walk))), "Slowed");
    }

    #[test]
    fn idle_goal_never_starts() {
        let mut goal = IdleGoal;
        assert!(!Goal::<Pen>::can_start(&mut goal, &Pen { ready: true, ..Pen::default() }));
        assert!(Goal::<Pen>::required_controls(&goal).is_empty());
    }
}

// ── PrioritizedGoal ───────────────────────────────────────────────────────────

#[cfg(test)]
mod prioritized {
    use super::*;

    #[test]
    fn new_entry_is_idle_with_snapshot_controls() {
        let e = entry(3, Walk);
        assert!(!e.is_running());
        assert_eq!(e.priority(), Priority(3));
        assert_eq!(e.controls(), ControlSet::from(Control::Move));
        assert_eq!(e.name(), "Walk");
    }

    #[test]
    fn start_and_stop_toggle_running() {
        let mut pen = Pen::default();
        let mut e = entry(0, Walk);
        e.start(&mut pen).unwrap();
        assert!(e.is_running());
        e.tick(&mut pen).unwrap();
        e.stop(&mut pen).unwrap();
        assert!(!e.is_running());
        assert_eq!(pen.events, vec!["start", "tick", "stop"]);
    }

    #[test]
    fn repeated_transitions_are_noops() {
        let mut pen = Pen::default();
        let mut e = entry(0, Walk);
        e.stop(&mut pen).unwrap();
        e.start(&mut pen).unwrap();
        e.start(&mut pen).unwrap();
        e.stop(&mut pen).unwrap();
        e.stop(&mut pen).unwrap();
        assert_eq!(pen.events, vec!["start", "stop"]);
    }

    #[test]
    fn failed_start_still_marks_running() {
        let mut pen = Pen::default();
        let mut e = entry(0, Broken);
        assert!(matches!(e.start(&mut pen), Err(GoalError::Failed(_))));
        assert!(e.is_running());
    }

    #[test]
    fn replacement_is_decided_by_occupant() {
        let occupant = entry(5, Walk);
        let stronger = entry(1, Walk);
        let weaker = entry(9, Walk);
        assert!(occupant.can_be_replaced_by(&stronger));
        assert!(!occupant.can_be_replaced_by(&weaker));

        let yielding = entry(1, Yielding);
        assert!(yielding.can_be_replaced_by(&weaker));

        let stubborn = entry(9, Stubborn);
        assert!(!stubborn.can_be_replaced_by(&stronger));
    }

    #[test]
    fn force_idle_skips_goal() {
        let mut pen = Pen::default();
        let mut e = entry(0, Walk);
        e.start(&mut pen).unwrap();
        e.force_idle();
        assert!(!e.is_running());
        assert_eq!(pen.events, vec!["start"]);
    }

    #[test]
    fn debug_shows_goal_name() {
        let e = entry(2, Walk);
        let s = format!("{e:?}");
        assert!(s.contains("Walk"), "got {s}");
        assert!(s.contains("running: false"), "got {s}");
    }
}
