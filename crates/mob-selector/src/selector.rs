//! The `GoalSelector` struct and its tick cycle.

use mob_core::{Control, ControlMap, ControlSet, EntryId, Priority};
use mob_goal::{Goal, GoalError, PrioritizedGoal};

use crate::{
    NoopObserver, Phase, SelectorConfig, SelectorError, SelectorObserver, SelectorResult,
    StopReason,
};

// ── GoalSelector ──────────────────────────────────────────────────────────────

/// Arbitrates an entity's controls among its registered goals.
///
/// `GoalSelector<C>` owns the goals, the control ownership table, and the
/// disabled-control table, and drives the per-tick cycle:
///
/// 1. **Stop**: every running goal that no longer wants to continue, or that
///    requires a disabled control, is stopped.
/// 2. **Cleanup**: ownership slots held by goals that are no longer running
///    are cleared.
/// 3. **Start**: every idle goal, in registration order, that wants to start
///    and whose controls are all either free or held by occupants willing to
///    yield, takes all of them at once.  Displaced occupants are stopped
///    first and release everything they held.
/// 4. **Tick**: every running goal is advanced.
///
/// Phases 1–3 form the update half; phase 4 is the tick half.  Disabling a
/// control only flips a flag; holders are evicted at the next stop phase.
///
/// A goal that fails during a tick poisons the selector: the error is
/// returned, and every later tick fails with [`SelectorError::Poisoned`] until
/// [`reset`][Self::reset] is called.
pub struct GoalSelector<C: ?Sized> {
    /// Registration-ordered arena.  Removed goals leave a `None` so
    /// outstanding `EntryId`s never alias a later registration.
    entries:  Vec<Option<PrioritizedGoal<C>>>,
    /// Which entry holds each control, if any.
    owners:   ControlMap<Option<EntryId>>,
    /// Controls suspended for this entity.
    disabled: ControlMap<bool>,
    config:   SelectorConfig,
    /// Live (non-removed) entry count.
    live:     usize,
    /// Set by the first goal failure; cleared by `reset`.
    poisoned: Option<EntryId>,
}

impl<C: ?Sized> Default for GoalSelector<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: ?Sized> GoalSelector<C> {
    /// An empty selector with the default configuration.
    pub fn new() -> Self {
        Self::with_config(SelectorConfig::default())
    }

    /// An empty selector whose disabled table is seeded from `config`.
    pub fn with_config(config: SelectorConfig) -> Self {
        let disabled = ControlMap::from_fn(|c| config.disabled.contains(c));
        Self {
            entries: Vec::new(),
            owners: ControlMap::default(),
            disabled,
            config,
            live: 0,
            poisoned: None,
        }
    }

    // ── Registration ──────────────────────────────────────────────────────

    /// Register `goal` at `priority`.  The goal starts idle.
    pub fn register<G>(&mut self, priority: Priority, goal: G) -> SelectorResult<EntryId>
    where
        G: Goal<C> + 'static,
    {
        self.register_boxed(priority, Box::new(goal))
    }

    /// Register an already-boxed goal.
    pub fn register_boxed(
        &mut self,
        priority: Priority,
        goal:     Box<dyn Goal<C>>,
    ) -> SelectorResult<EntryId> {
        if self.live >= self.config.max_goals {
            return Err(SelectorError::TooManyGoals { max: self.config.max_goals });
        }
        let id = EntryId::try_from(self.entries.len())
            .ok()
            .filter(|id| *id != EntryId::INVALID)
            .ok_or(SelectorError::IdsExhausted)?;

        let entry = PrioritizedGoal::new(priority, goal);
        log::trace!(
            "registered {} as {id} at {priority} requiring {}",
            entry.name(),
            entry.controls(),
        );
        self.entries.push(Some(entry));
        self.live += 1;
        Ok(id)
    }

    /// Unregister `id`, stopping it first if it is running.
    ///
    /// Its controls are released immediately.  Returns the entry so the caller
    /// can reclaim the goal.
    pub fn remove(&mut self, id: EntryId, ctx: &mut C) -> SelectorResult<PrioritizedGoal<C>> {
        self.remove_observed(id, ctx, &mut NoopObserver)
    }

    /// [`remove`][Self::remove] with a stop callback.
    ///
    /// If the goal's `stop` fails, the entry stays registered (now idle and
    /// holding nothing) and the selector is poisoned like any other failure.
    pub fn remove_observed<O: SelectorObserver>(
        &mut self,
        id:       EntryId,
        ctx:      &mut C,
        observer: &mut O,
    ) -> SelectorResult<PrioritizedGoal<C>> {
        let slot = self
            .entries
            .get_mut(id.index())
            .filter(|slot| slot.is_some())
            .ok_or(SelectorError::UnknownEntry(id))?;
        release_all(&mut self.owners, id);

        if let Some(entry) = slot.as_mut().filter(|e| e.is_running()) {
            if let Err(source) = entry.stop(ctx) {
                return Err(poison(&mut self.poisoned, id, entry.name(), source));
            }
            observer.on_goal_stopped(id, entry.name(), StopReason::Removed);
        }

        let entry = slot.take().ok_or(SelectorError::UnknownEntry(id))?;
        self.live -= 1;
        log::debug!("removed {} ({id})", entry.name());
        Ok(entry)
    }

    // ── Control flags ─────────────────────────────────────────────────────

    /// Suspend `control`.  Its holder, if any, is stopped at the next tick.
    pub fn disable_control(&mut self, control: Control) {
        self.disabled[control] = true;
    }

    /// Make `control` available again from the next tick.
    pub fn enable_control(&mut self, control: Control) {
        self.disabled[control] = false;
    }

    pub fn set_control_enabled(&mut self, control: Control, enabled: bool) {
        self.disabled[control] = !enabled;
    }

    #[inline]
    pub fn is_control_disabled(&self, control: Control) -> bool {
        self.disabled[control]
    }

    /// The set of currently disabled controls.
    pub fn disabled_controls(&self) -> ControlSet {
        self.disabled.iter().filter(|(_, d)| **d).map(|(c, _)| c).collect()
    }

    // ── Queries ───────────────────────────────────────────────────────────

    /// The entry currently holding `control`, if any.
    #[inline]
    pub fn occupant(&self, control: Control) -> Option<EntryId> {
        self.owners[control]
    }

    pub fn entry(&self, id: EntryId) -> Option<&PrioritizedGoal<C>> {
        self.entries.get(id.index()).and_then(Option::as_ref)
    }

    /// All live entries in registration order.
    pub fn entries(&self) -> impl Iterator<Item = (EntryId, &PrioritizedGoal<C>)> {
        self.entries
            .iter()
            .enumerate()
            .filter_map(|(i, slot)| slot.as_ref().map(|e| (EntryId(i as u16), e)))
    }

    /// Running entries in registration order.
    pub fn running(&self) -> impl Iterator<Item = (EntryId, &PrioritizedGoal<C>)> {
        self.entries().filter(|(_, e)| e.is_running())
    }

    /// Number of live entries.
    pub fn len(&self) -> usize {
        self.live
    }

    pub fn is_empty(&self) -> bool {
        self.live == 0
    }

    pub fn config(&self) -> &SelectorConfig {
        &self.config
    }

    /// The entry whose failure poisoned this selector, if any.
    pub fn poisoned_by(&self) -> Option<EntryId> {
        self.poisoned
    }

    // ── Tick ──────────────────────────────────────────────────────────────

    /// Run one scheduling cycle: update (stop, cleanup, start), then tick.
    pub fn tick(&mut self, ctx: &mut C) -> SelectorResult<()> {
        self.tick_observed(ctx, &mut NoopObserver)
    }

    /// [`tick`][Self::tick] with transition and phase callbacks.
    pub fn tick_observed<O: SelectorObserver>(
        &mut self,
        ctx:      &mut C,
        observer: &mut O,
    ) -> SelectorResult<()> {
        if let Some(entry) = self.poisoned {
            return Err(SelectorError::Poisoned { entry });
        }

        observer.on_phase_start(Phase::Update);
        self.stop_goals(ctx, observer)?;
        self.cleanup_controls();
        self.start_goals(ctx, observer)?;
        observer.on_phase_end(Phase::Update);

        observer.on_phase_start(Phase::Tick);
        self.tick_goals(ctx)?;
        observer.on_phase_end(Phase::Tick);
        Ok(())
    }

    /// Stop running goals that should not continue or need a disabled
    /// control.  Completes for every entry before any slot is released.
    fn stop_goals<O: SelectorObserver>(&mut self, ctx: &mut C, observer: &mut O) -> SelectorResult<()> {
        for (i, slot) in self.entries.iter_mut().enumerate() {
            let Some(entry) = slot else { continue };
            if !entry.is_running() {
                continue;
            }

            let reason = if !entry.should_continue(ctx) {
                StopReason::Finished
            } else if any_disabled(&self.disabled, entry.controls()) {
                StopReason::ControlDisabled
            } else {
                continue;
            };

            let id = EntryId(i as u16);
            if let Err(source) = entry.stop(ctx) {
                return Err(poison(&mut self.poisoned, id, entry.name(), source));
            }
            observer.on_goal_stopped(id, entry.name(), reason);
        }
        Ok(())
    }

    /// Release every slot whose holder is no longer running.
    fn cleanup_controls(&mut self) {
        for slot in self.owners.values_mut() {
            let Some(id) = *slot else { continue };
            let running = self
                .entries
                .get(id.index())
                .and_then(Option::as_ref)
                .is_some_and(PrioritizedGoal::is_running);
            if !running {
                *slot = None;
            }
        }
    }

    /// Start idle goals whose controls are available or replaceable.
    fn start_goals<O: SelectorObserver>(&mut self, ctx: &mut C, observer: &mut O) -> SelectorResult<()> {
        for i in 0..self.entries.len() {
            let id = EntryId(i as u16);
            let Some(challenger) = self.entries[i].as_mut() else { continue };
            if challenger.is_running() || !challenger.can_start(ctx) {
                continue;
            }
            if !self.controls_available(id) {
                continue;
            }

            // Hand over every control, stopping whoever held it.
            let controls = self.entries[i].as_ref().map_or(ControlSet::EMPTY, PrioritizedGoal::controls);
            for control in controls.iter() {
                if let Some(occupant) = self.owners[control] {
                    self.preempt(occupant, id, ctx, observer)?;
                }
                self.owners[control] = Some(id);
            }

            let Some(challenger) = self.entries[i].as_mut() else { continue };
            if let Err(source) = challenger.start(ctx) {
                return Err(poison(&mut self.poisoned, id, challenger.name(), source));
            }
            observer.on_goal_started(id, challenger.name(), challenger.priority());
        }
        Ok(())
    }

    /// `true` if none of `challenger`'s controls are disabled and every
    /// occupied one is held by an entry that accepts replacement by it.
    fn controls_available(&self, challenger: EntryId) -> bool {
        let Some(entry) = self.entry(challenger) else { return false };
        for control in entry.controls().iter() {
            if self.disabled[control] {
                return false;
            }
            let Some(occupant) = self.owners[control] else { continue };
            match self.entry(occupant) {
                Some(holder) if !holder.can_be_replaced_by(entry) => return false,
                _ => {}
            }
        }
        true
    }

    /// Stop `occupant` on behalf of `by` and release every slot it holds, so
    /// it never keeps a partial set of controls.
    fn preempt<O: SelectorObserver>(
        &mut self,
        occupant: EntryId,
        by:       EntryId,
        ctx:      &mut C,
        observer: &mut O,
    ) -> SelectorResult<()> {
        release_all(&mut self.owners, occupant);
        let Some(holder) = self.entries.get_mut(occupant.index()).and_then(Option::as_mut) else {
            return Ok(());
        };
        if !holder.is_running() {
            return Ok(());
        }
        if let Err(source) = holder.stop(ctx) {
            return Err(poison(&mut self.poisoned, occupant, holder.name(), source));
        }
        observer.on_goal_stopped(occupant, holder.name(), StopReason::Preempted { by });
        Ok(())
    }

    /// Advance every running goal.  No eligibility is re-checked here.
    fn tick_goals(&mut self, ctx: &mut C) -> SelectorResult<()> {
        for (i, slot) in self.entries.iter_mut().enumerate() {
            let Some(entry) = slot else { continue };
            if !entry.is_running() {
                continue;
            }
            if let Err(source) = entry.tick(ctx) {
                return Err(poison(&mut self.poisoned, EntryId(i as u16), entry.name(), source));
            }
        }
        Ok(())
    }

    // ── Recovery and checking ─────────────────────────────────────────────

    /// Re-initialize after a failure: every goal is marked idle without being
    /// called, every control is released, and the poison is cleared.
    ///
    /// Disabled controls are external state and are left as they are.
    pub fn reset(&mut self) {
        self.owners.fill(None);
        for entry in self.entries.iter_mut().flatten() {
            entry.force_idle();
        }
        if let Some(entry) = self.poisoned.take() {
            log::info!("selector reset after failure in {entry}");
        }
    }

    /// Verify the ownership table against the running flags.
    ///
    /// Holds after every completed tick:
    /// - each occupied slot belongs to a live, running entry that requires it;
    /// - each running entry occupies every control it requires.
    ///
    /// Mutual exclusion follows from the table having one slot per control.
    pub fn check_invariants(&self) -> SelectorResult<()> {
        for (control, slot) in self.owners.iter() {
            let Some(id) = *slot else { continue };
            let Some(entry) = self.entry(id) else {
                return Err(SelectorError::InvariantViolation(format!(
                    "{control} is held by unknown {id}"
                )));
            };
            if !entry.is_running() {
                return Err(SelectorError::InvariantViolation(format!(
                    "{control} is held by idle {} ({id})",
                    entry.name()
                )));
            }
            if !entry.controls().contains(control) {
                return Err(SelectorError::InvariantViolation(format!(
                    "{control} is held by {} ({id}) which does not require it",
                    entry.name()
                )));
            }
        }

        for (id, entry) in self.running() {
            for control in entry.controls().iter() {
                if self.owners[control] != Some(id) {
                    return Err(SelectorError::InvariantViolation(format!(
                        "running {} ({id}) does not hold {control}",
                        entry.name()
                    )));
                }
            }
        }
        Ok(())
    }
}

// ── Helpers ───────────────────────────────────────────────────────────────────

#[inline]
fn any_disabled(disabled: &ControlMap<bool>, controls: ControlSet) -> bool {
    controls.iter().any(|c| disabled[c])
}

/// Clear every slot held by `id`.
#[inline]
fn release_all(owners: &mut ControlMap<Option<EntryId>>, id: EntryId) {
    for slot in owners.values_mut() {
        if *slot == Some(id) {
            *slot = None;
        }
    }
}

/// Record a goal failure and build the error returned from `tick`.
fn poison(
    poisoned: &mut Option<EntryId>,
    entry:    EntryId,
    goal:     &str,
    source:   GoalError,
) -> SelectorError {
    log::error!("goal `{goal}` ({entry}) failed, selector needs reset: {source}");
    *poisoned = Some(entry);
    SelectorError::Goal { entry, goal: goal.to_owned(), source }
}
