//! pasture: a flock of sheep sharing out their controls among competing goals.
//!
//! Each sheep runs four goals through its own `GoalSelector`:
//!
//! | Priority | Goal       | Controls    |
//! |----------|------------|-------------|
//! | 0        | Float      | Jump        |
//! | 1        | Flee       | Move, Jump  |
//! | 5        | Wander     | Move        |
//! | 8        | LookAround | Look        |
//!
//! A wolf circles the field and the shepherd periodically leashes half the
//! flock by disabling `Move`.  Pass a JSON `WorldConfig` path as the first
//! argument to override the defaults; set `RUST_LOG=mob_selector=debug` to
//! watch goals start and stop.

mod sheep;

use std::time::Instant;

use anyhow::{Context, Result};

use mob_core::{Control, EntityId, EntityRng, Tick};
use mob_selector::GoalSelector;
use mob_sim::{World, WorldConfig, WorldObserver};

use sheep::{FleeGoal, FloatGoal, LookAroundGoal, Sheep, WanderGoal};

// ── Constants ─────────────────────────────────────────────────────────────────

const FLOCK_SIZE:      usize = 24;
/// Wander sets off one tick in this many, on average.
const WANDER_INTERVAL: u32   = 40;
/// Leash toggles every this many ticks.
const LEASH_PERIOD:    u64   = 50;
const WOLF_ORBIT:      f32   = 25.0;
/// Radians per tick.
const WOLF_SPEED:      f32   = 0.03;
const REPORT_INTERVAL: u64   = 50;

// ── Observer ──────────────────────────────────────────────────────────────────

/// Logs a one-line progress report every `REPORT_INTERVAL` ticks.
#[derive(Default)]
struct ProgressObserver {
    peak_running: usize,
    ticks:        u64,
}

impl WorldObserver for ProgressObserver {
    fn on_tick_end(&mut self, tick: Tick, running: usize) {
        self.ticks += 1;
        self.peak_running = self.peak_running.max(running);
        if tick.0 % REPORT_INTERVAL == 0 {
            log::info!("{tick}: {running} goals running");
        }
    }

    fn on_world_end(&mut self, final_tick: Tick) {
        log::info!("finished at {final_tick}, peak {} running goals", self.peak_running);
    }
}

// ── Setup ─────────────────────────────────────────────────────────────────────

fn load_config() -> Result<WorldConfig> {
    let Some(path) = std::env::args().nth(1) else {
        return Ok(WorldConfig { total_ticks: 400, ..WorldConfig::default() });
    };
    let text = std::fs::read_to_string(&path).with_context(|| format!("reading {path}"))?;
    serde_json::from_str(&text).with_context(|| format!("parsing {path}"))
}

fn flock_selector(world: &World<Sheep>, seed: u64, sheep: EntityId) -> Result<GoalSelector<Sheep>> {
    let selector = world
        .selector_builder()
        .goal(0, FloatGoal)
        .goal(1, FleeGoal)
        .goal(5, WanderGoal::new(seed, sheep, WANDER_INTERVAL))
        .goal(8, LookAroundGoal::new(seed, sheep))
        .build()?;
    Ok(selector)
}

/// Wolf position on its orbit at `tick`.
fn wolf_at(tick: Tick) -> (f32, f32) {
    let angle = tick.0 as f32 * WOLF_SPEED;
    (WOLF_ORBIT * angle.cos(), WOLF_ORBIT * angle.sin())
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = load_config()?;
    println!("=== pasture — mobai goal selector ===");
    println!(
        "Sheep: {FLOCK_SIZE}  |  Ticks: {}  |  Seed: {}",
        config.total_ticks, config.seed
    );
    println!();

    // 1. Scatter the flock, a few of them in the pond.
    let mut world = World::<Sheep>::new(config.clone())?;
    let mut scatter = EntityRng::new(config.seed, EntityId::INVALID);
    for i in 0..FLOCK_SIZE {
        let id = world.next_entity_id();
        let selector = flock_selector(&world, config.seed, id)?;
        let sheep = Sheep::at(scatter.gen_range(-28.0..28.0), scatter.gen_range(-28.0..28.0));
        world.spawn(format!("sheep-{i}"), sheep, selector)?;
    }

    // 2. Run tick by tick so the wolf and the shepherd can act in between.
    let mut obs = ProgressObserver::default();
    let mut leashed = false;
    let t0 = Instant::now();
    while world.clock().0 < config.total_ticks {
        let now = world.clock();

        if now.0 > 0 && now.0 % LEASH_PERIOD == 0 {
            leashed = !leashed;
            log::info!("{now}: shepherd {} the even sheep", if leashed { "leashes" } else { "frees" });
            for i in (0..world.len()).step_by(2) {
                let id = EntityId(i as u32);
                if let Some(entity) = world.entity_mut(id) {
                    entity.selector.set_control_enabled(Control::Move, !leashed);
                }
            }
        }

        let wolf = wolf_at(now);
        for (_, sheep) in world.states_mut() {
            sheep.wolf = Some(wolf);
        }

        world.run_ticks(1, &mut obs)?;
    }
    obs.on_world_end(world.clock());
    let elapsed = t0.elapsed();

    // 3. Summary.
    println!();
    println!("Simulation complete in {:.3} s ({} ticks)", elapsed.as_secs_f64(), obs.ticks);
    println!();
    println!(
        "{:<10} {:>8} {:>8} {:>8} {:>6} {:>8}  {}",
        "Sheep", "x", "y", "walked", "bobs", "flights", "running"
    );
    println!("{}", "-".repeat(64));
    for entity in world.entities() {
        let s = &entity.state;
        let running: Vec<&str> = entity.selector.running().map(|(_, g)| g.name()).collect();
        println!(
            "{:<10} {:>8.1} {:>8.1} {:>8.1} {:>6} {:>8}  {}",
            entity.tag,
            s.x,
            s.y,
            s.distance,
            s.bobs,
            s.flights,
            running.join(", "),
        );
    }

    Ok(())
}
