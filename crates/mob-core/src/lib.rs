//! `mob-core` — foundational types for the `mobai` goal selector.
//!
//! This crate is a dependency of every other `mob-*` crate.  It intentionally
//! has no `mob-*` dependencies and minimal external ones (only `rand` and
//! `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module          | Contents                                                  |
//! |-----------------|-----------------------------------------------------------|
//! | [`control`]     | `Control` enum, `ControlSet` bit set, `ControlMap<T>`     |
//! | [`ids`]         | `EntryId`, `EntityId`                                     |
//! | [`priority`]    | `Priority` (lower value = higher precedence)              |
//! | [`time`]        | `Tick`                                                    |
//! | [`rng`]         | `EntityRng` (per-entity deterministic RNG)                |
//! | [`error`]       | `CoreError`, `CoreResult`                                 |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod control;
pub mod error;
pub mod ids;
pub mod priority;
pub mod rng;
pub mod time;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use control::{Control, ControlMap, ControlSet};
pub use error::{CoreError, CoreResult};
pub use ids::{EntityId, EntryId};
pub use priority::Priority;
pub use rng::EntityRng;
pub use time::Tick;
