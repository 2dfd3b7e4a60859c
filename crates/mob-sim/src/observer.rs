//! World observer trait for progress reporting.

use mob_core::Tick;

/// Callbacks invoked by [`World::run`][crate::World::run] at tick boundaries.
///
/// All methods have default no-op implementations.
pub trait WorldObserver {
    /// Called at the very start of each tick, before any entity is ticked.
    fn on_tick_start(&mut self, _tick: Tick) {}

    /// Called after every entity has been ticked.
    ///
    /// `running` is the number of goals running across all entities.
    fn on_tick_end(&mut self, _tick: Tick, _running: usize) {}

    /// Called once after the final tick of [`World::run`][crate::World::run].
    fn on_world_end(&mut self, _final_tick: Tick) {}
}

/// A [`WorldObserver`] that does nothing.
pub struct NoopObserver;

impl WorldObserver for NoopObserver {}
