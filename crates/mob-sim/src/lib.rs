//! `mob-sim` — world driver for the `mobai` goal selector.
//!
//! Each entity owns one [`GoalSelector`][mob_selector::GoalSelector] and the
//! state its goals act on.  A world tick runs every entity's selector tick
//! exactly once:
//!
//! ```text
//! for tick in 0..config.total_ticks:
//!   observer.on_tick_start(tick)
//!   for entity in entities:            (Rayon with the `parallel` feature)
//!     entity.selector.tick(&mut entity.state)
//!   observer.on_tick_end(tick, running_goal_count)
//! ```
//!
//! Entities never share mutable state, so the parallel schedule needs no
//! locks and produces the same result as the sequential one.
//!
//! # Cargo features
//!
//! | Feature    | Effect                                                 |
//! |------------|--------------------------------------------------------|
//! | `parallel` | Ticks entities on Rayon's thread pool.                 |
//! | `fx-hash`  | FxHash for the entity tag index.                       |
//! | `serde`    | `Serialize`/`Deserialize` for `WorldConfig`.           |
//!
//! # Quick-start
//!
//! ```rust,ignore
//! let mut world = World::new(WorldConfig::default())?;
//! let selector = SelectorBuilder::new()
//!     .goal(Priority(5), WanderGoal::default())
//!     .build()?;
//! world.spawn("sheep-0", Sheep::new(world.next_entity_id()), selector)?;
//! world.run(&mut NoopObserver)?;
//! ```

pub mod config;
pub mod error;
pub mod observer;
pub mod world;


pub use config::WorldConfig;
pub use error::{SimError, SimResult};
pub use observer::{NoopObserver, WorldObserver};
pub use world::{Entity, World};
