//! `mob-goal` — the goal trait and the prioritized entry the selector stores.
//!
//! # Crate layout
//!
//! | Module          | Contents                                                     |
//! |-----------------|--------------------------------------------------------------|
//! | [`goal`]        | `Goal<C>` trait — lifecycle queries, actions, replacement    |
//! | [`prioritized`] | `PrioritizedGoal<C>` — goal + static priority + running flag |
//! | [`idle`]        | `IdleGoal` — placeholder that never starts                   |
//! | [`error`]       | `GoalError`, `GoalResult<T>`                                 |
//!
//! # Design notes
//!
//! Goals are generic over the entity context `C` they read and mutate.  The
//! selector hands queries (`can_start`, `should_continue`) a shared `&C` and
//! actions (`start`, `stop`, `tick`) an exclusive `&mut C`, so a goal never
//! needs interior mutability or a back-pointer to its owner.
//!
//! Whether an occupant may be preempted is decided by the occupant itself via
//! [`Goal::can_be_replaced_by`]; the default compares priorities, but any goal
//! can override it.

pub mod error;
pub mod goal;
pub mod idle;
pub mod prioritized;

#[cfg(test)]
mod tests;

pub use error::{GoalError, GoalResult};
pub use goal::Goal;
pub use idle::IdleGoal;
pub use prioritized::PrioritizedGoal;
