//! `mob-selector` — per-entity control arbitration for the `mobai` framework.
//!
//! # Tick cycle
//!
//! ```text
//! GoalSelector::tick(ctx):
//!   update
//!     ① Stop     — running goals with should_continue() == false, or with
//!                  any required control disabled, are stopped.
//!     ② Cleanup  — ownership slots held by idle goals are cleared.
//!     ③ Start    — idle goals, in registration order, with can_start() and
//!                  every control free or yielded by its holder, take all
//!                  their controls; displaced holders are stopped first.
//!   tick
//!     ④ Tick     — every running goal is advanced.
//! ```
//!
//! ① always completes before ② so a control released this tick is free in ③.
//! Acquisition is all-or-nothing: a goal never holds a strict subset of its
//! controls.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                   |
//! |--------------|------------------------------------------------------------|
//! | [`selector`] | `GoalSelector<C>` — tables and the tick cycle              |
//! | [`builder`]  | `SelectorBuilder<C>` — fluent, validated construction      |
//! | [`config`]   | `SelectorConfig`                                           |
//! | [`observer`] | `SelectorObserver`, `NoopObserver`, `LogObserver`          |
//! | [`error`]    | `SelectorError`, `SelectorResult<T>`                       |
//!
//! # Cargo features
//!
//! | Feature | Effect                                          |
//! |---------|-------------------------------------------------|
//! | `serde` | `Serialize`/`Deserialize` for `SelectorConfig`. |
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use mob_core::{Control, Priority};
//! use mob_selector::SelectorBuilder;
//!
//! let mut selector = SelectorBuilder::new()
//!     .goal(Priority(1), FleeGoal::default())
//!     .goal(Priority(5), WanderGoal::default())
//!     .build()?;
//!
//! selector.disable_control(Control::Move); // leashed
//! selector.tick(&mut mob)?;
//! ```

pub mod builder;
pub mod config;
pub mod error;
pub mod observer;
pub mod selector;


pub use builder::SelectorBuilder;
pub use config::SelectorConfig;
pub use error::{SelectorError, SelectorResult};
pub use observer::{LogObserver, NoopObserver, Phase, SelectorObserver, StopReason};
pub use selector::GoalSelector;
