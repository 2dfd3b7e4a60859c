//! Sheep state and the goals that drive it.

use mob_core::{Control, ControlSet, EntityId, EntityRng};
use mob_goal::{Goal, GoalError, GoalResult};

// ── Constants ─────────────────────────────────────────────────────────────────

/// Sheep west of this line are standing in the pond.
const POND_EDGE: f32 = -20.0;
/// A wolf closer than this sends a sheep running.
const FLEE_RADIUS: f32 = 8.0;
const WALK_SPEED: f32 = 0.5;
const RUN_SPEED: f32 = 1.2;
/// Field half-width; wander targets are drawn from inside it.
const FIELD: f32 = 30.0;

// Per-goal RNG salts so two goals on the same sheep roll independently.
const WANDER_SALT: u64 = 0x5741_4e44;
const LOOK_SALT: u64 = 0x4c4f_4f4b;

// ── State ─────────────────────────────────────────────────────────────────────

/// Everything a sheep's goals read and write.
#[derive(Debug, Default)]
pub struct Sheep {
    pub x:   f32,
    pub y:   f32,
    pub yaw: f32,
    /// Where the nearest wolf is, refreshed by the world before each tick.
    pub wolf: Option<(f32, f32)>,

    // Counters for the end-of-run report.
    pub distance: f32,
    pub bobs:     u32,
    pub flights:  u32,
}

impl Sheep {
    pub fn at(x: f32, y: f32) -> Self {
        Self { x, y, ..Self::default() }
    }

    pub fn in_water(&self) -> bool {
        self.x < POND_EDGE
    }

    fn wolf_distance(&self) -> Option<f32> {
        self.wolf.map(|(wx, wy)| ((self.x - wx).powi(2) + (self.y - wy).powi(2)).sqrt())
    }

    /// Step up to `speed` towards `(tx, ty)`.  Returns `true` on arrival.
    fn step_towards(&mut self, tx: f32, ty: f32, speed: f32) -> bool {
        let (dx, dy) = (tx - self.x, ty - self.y);
        let d = (dx * dx + dy * dy).sqrt();
        if d <= speed {
            self.x = tx;
            self.y = ty;
            self.distance += d;
            return true;
        }
        self.x += dx / d * speed;
        self.y += dy / d * speed;
        self.yaw = dy.atan2(dx).to_degrees();
        self.distance += speed;
        false
    }
}

// ── Float ─────────────────────────────────────────────────────────────────────

/// Keep the head above water.  Never yields: drowning is not negotiable.
pub struct FloatGoal;

impl Goal<Sheep> for FloatGoal {
    fn required_controls(&self) -> ControlSet {
        ControlSet::from(Control::Jump)
    }
    fn can_start(&mut self, sheep: &Sheep) -> bool {
        sheep.in_water()
    }
    fn can_stop(&self) -> bool {
        false
    }
    fn tick(&mut self, sheep: &mut Sheep) -> GoalResult<()> {
        sheep.bobs += 1;
        Ok(())
    }
}

// ── Flee ──────────────────────────────────────────────────────────────────────

/// Run directly away from a nearby wolf until out of range.
pub struct FleeGoal;

impl Goal<Sheep> for FleeGoal {
    fn required_controls(&self) -> ControlSet {
        ControlSet::from([Control::Move, Control::Jump])
    }
    fn can_start(&mut self, sheep: &Sheep) -> bool {
        sheep.wolf_distance().is_some_and(|d| d < FLEE_RADIUS)
    }
    fn should_continue(&mut self, sheep: &Sheep) -> bool {
        sheep.wolf_distance().is_some_and(|d| d < FLEE_RADIUS * 1.5)
    }
    fn start(&mut self, sheep: &mut Sheep) -> GoalResult<()> {
        sheep.flights += 1;
        Ok(())
    }
    fn tick(&mut self, sheep: &mut Sheep) -> GoalResult<()> {
        let Some((wx, wy)) = sheep.wolf else {
            return Err(GoalError::InvalidState("fleeing with no wolf in sight".into()));
        };
        let (tx, ty) = (2.0 * sheep.x - wx, 2.0 * sheep.y - wy);
        sheep.step_towards(tx, ty, RUN_SPEED);
        Ok(())
    }
}

// ── Wander ────────────────────────────────────────────────────────────────────

/// Now and then, amble to a random spot in the field.
pub struct WanderGoal {
    rng:      EntityRng,
    /// One-in-N chance per tick of setting off.
    interval: u32,
    target:   Option<(f32, f32)>,
}

impl WanderGoal {
    pub fn new(seed: u64, sheep: EntityId, interval: u32) -> Self {
        Self { rng: EntityRng::new(seed ^ WANDER_SALT, sheep), interval, target: None }
    }
}

impl Goal<Sheep> for WanderGoal {
    fn required_controls(&self) -> ControlSet {
        ControlSet::from(Control::Move)
    }
    fn can_start(&mut self, _sheep: &Sheep) -> bool {
        if !self.rng.one_in(self.interval) {
            return false;
        }
        self.target = Some((self.rng.gen_range(-FIELD..FIELD), self.rng.gen_range(-FIELD..FIELD)));
        true
    }
    fn should_continue(&mut self, _sheep: &Sheep) -> bool {
        self.target.is_some()
    }
    fn stop(&mut self, _sheep: &mut Sheep) -> GoalResult<()> {
        self.target = None;
        Ok(())
    }
    fn tick(&mut self, sheep: &mut Sheep) -> GoalResult<()> {
        let Some((tx, ty)) = self.target else { return Ok(()) };
        if sheep.step_towards(tx, ty, WALK_SPEED) {
            self.target = None;
        }
        Ok(())
    }
}

// ── Look around ───────────────────────────────────────────────────────────────

/// Idly turn the head for a short while.
pub struct LookAroundGoal {
    rng:       EntityRng,
    remaining: u32,
    turn:      f32,
}

impl LookAroundGoal {
    pub fn new(seed: u64, sheep: EntityId) -> Self {
        Self { rng: EntityRng::new(seed ^ LOOK_SALT, sheep), remaining: 0, turn: 0.0 }
    }
}

impl Goal<Sheep> for LookAroundGoal {
    fn required_controls(&self) -> ControlSet {
        ControlSet::from([Control::Look])
    }
    fn can_start(&mut self, _sheep: &Sheep) -> bool {
        self.rng.gen_bool(0.02)
    }
    fn should_continue(&mut self, _sheep: &Sheep) -> bool {
        self.remaining > 0
    }
    fn start(&mut self, _sheep: &mut Sheep) -> GoalResult<()> {
        self.remaining = 20 + self.rng.gen_range(0..20);
        self.turn = if self.rng.gen_bool(0.5) { 6.0 } else { -6.0 };
        Ok(())
    }
    fn tick(&mut self, sheep: &mut Sheep) -> GoalResult<()> {
        self.remaining = self.remaining.saturating_sub(1);
        sheep.yaw = (sheep.yaw + self.turn).rem_euclid(360.0);
        Ok(())
    }
}
