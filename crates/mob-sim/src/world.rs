//! The `World` struct and its tick loop.

use mob_core::{EntityId, Tick};
use mob_selector::{GoalSelector, LogObserver, SelectorBuilder};

use crate::{SimError, SimResult, WorldConfig, WorldObserver};

#[cfg(feature = "fx-hash")]
type TagIndex = rustc_hash::FxHashMap<String, EntityId>;
#[cfg(not(feature = "fx-hash"))]
type TagIndex = std::collections::HashMap<String, EntityId>;

// ── Entity ────────────────────────────────────────────────────────────────────

/// One schedulable entity: its own selector and the state its goals act on.
pub struct Entity<C> {
    pub id:       EntityId,
    /// Unique human-readable label, used in logs and for lookup.
    pub tag:      String,
    pub selector: GoalSelector<C>,
    pub state:    C,
}

impl<C> Entity<C> {
    /// Run one selector tick and return how many goals are running after it.
    fn tick(&mut self) -> SimResult<usize> {
        let mut observer = LogObserver::new(&self.tag);
        self.selector
            .tick_observed(&mut self.state, &mut observer)
            .map_err(|source| SimError::Entity {
                entity: self.id,
                tag:    self.tag.clone(),
                source,
            })?;
        Ok(self.selector.running().count())
    }
}

// ── World ─────────────────────────────────────────────────────────────────────

/// Drives one [`GoalSelector`] per entity, once per tick.
///
/// Entities share nothing: each owns its selector and its state, so a tick in
/// which no goal fails gives identical results whether entities run in order
/// or in parallel (with the `parallel` feature).  The world never reaches
/// into a selector's tables; the only cross-entity structure is the tag index.
///
/// An entity whose selector fails aborts the tick with [`SimError::Entity`].
/// Its selector stays poisoned until the caller resets it through
/// [`entity_mut`][Self::entity_mut].  Which other entities were ticked before
/// the abort is only fixed for the sequential path, where it is every entity
/// ahead of the failing one; in parallel it is an arbitrary subset.
pub struct World<C> {
    config:   WorldConfig,
    clock:    Tick,
    entities: Vec<Entity<C>>,
    tags:     TagIndex,

    #[cfg(feature = "parallel")]
    pool: Option<rayon::ThreadPool>,
}

impl<C: Send> World<C> {
    /// Validate `config` and create an empty world at tick 0.
    pub fn new(config: WorldConfig) -> SimResult<Self> {
        if config.num_threads == Some(0) {
            return Err(SimError::Config("num_threads must be at least 1".into()));
        }
        if config.selector.max_goals == 0 {
            return Err(SimError::Config("selector.max_goals must be at least 1".into()));
        }

        #[cfg(feature = "parallel")]
        let pool = match config.num_threads {
            Some(n) => Some(rayon::ThreadPoolBuilder::new().num_threads(n).build()?),
            None    => None,
        };

        Ok(Self {
            config,
            clock: Tick::ZERO,
            entities: Vec::new(),
            tags: TagIndex::default(),
            #[cfg(feature = "parallel")]
            pool,
        })
    }

    // ── Population ────────────────────────────────────────────────────────

    /// The id the next [`spawn`][Self::spawn] will assign.  Useful for
    /// seeding per-entity state before it exists.
    pub fn next_entity_id(&self) -> EntityId {
        EntityId(self.entities.len() as u32)
    }

    /// A selector builder preloaded with `config.selector`, for assembling the
    /// goal list of an entity before [`spawn`][Self::spawn].
    pub fn selector_builder(&self) -> SelectorBuilder<C> {
        SelectorBuilder::new().config(self.config.selector.clone())
    }

    /// Add an entity.  `tag` must be unique within the world.
    pub fn spawn(
        &mut self,
        tag:      impl Into<String>,
        state:    C,
        selector: GoalSelector<C>,
    ) -> SimResult<EntityId> {
        let tag = tag.into();
        if self.tags.contains_key(&tag) {
            return Err(SimError::DuplicateTag(tag));
        }
        let id = EntityId::try_from(self.entities.len())
            .ok()
            .filter(|id| *id != EntityId::INVALID)
            .ok_or(SimError::TooManyEntities)?;

        log::debug!("spawned {tag} as {id} with {} goals", selector.len());
        self.tags.insert(tag.clone(), id);
        self.entities.push(Entity { id, tag, selector, state });
        Ok(id)
    }

    // ── Queries ───────────────────────────────────────────────────────────

    pub fn config(&self) -> &WorldConfig {
        &self.config
    }

    /// The tick the next call to [`tick`][Self::tick] will run.
    pub fn clock(&self) -> Tick {
        self.clock
    }

    pub fn entity(&self, id: EntityId) -> Option<&Entity<C>> {
        self.entities.get(id.index())
    }

    pub fn entity_mut(&mut self, id: EntityId) -> Option<&mut Entity<C>> {
        self.entities.get_mut(id.index())
    }

    /// Look up an entity by tag.
    pub fn find(&self, tag: &str) -> Option<&Entity<C>> {
        self.tags.get(tag).and_then(|id| self.entity(*id))
    }

    pub fn entities(&self) -> &[Entity<C>] {
        &self.entities
    }

    /// Mutable access to every entity's state, e.g. to apply world events
    /// between ticks.  Selectors and tags stay out of reach.
    pub fn states_mut(&mut self) -> impl Iterator<Item = (EntityId, &mut C)> {
        self.entities.iter_mut().map(|e| (e.id, &mut e.state))
    }

    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    // ── Tick loop ─────────────────────────────────────────────────────────

    /// Run from the current tick to `config.total_ticks`.
    pub fn run<O: WorldObserver>(&mut self, observer: &mut O) -> SimResult<()> {
        while self.clock.0 < self.config.total_ticks {
            self.step(observer)?;
        }
        observer.on_world_end(self.clock);
        Ok(())
    }

    /// Run exactly `n` ticks from the current position (ignores `total_ticks`).
    pub fn run_ticks<O: WorldObserver>(&mut self, n: u64, observer: &mut O) -> SimResult<()> {
        for _ in 0..n {
            self.step(observer)?;
        }
        Ok(())
    }

    fn step<O: WorldObserver>(&mut self, observer: &mut O) -> SimResult<()> {
        let now = self.clock;
        observer.on_tick_start(now);
        let running = self.tick()?;
        observer.on_tick_end(now, running);
        self.clock = now.next();
        Ok(())
    }

    /// Tick every entity's selector once.  Returns the number of goals
    /// running across the world afterwards.
    ///
    /// Does not advance the clock; [`run`][Self::run] and
    /// [`run_ticks`][Self::run_ticks] do.
    pub fn tick(&mut self) -> SimResult<usize> {
        #[cfg(not(feature = "parallel"))]
        {
            let mut running = 0;
            for entity in &mut self.entities {
                running += entity.tick()?;
            }
            Ok(running)
        }

        #[cfg(feature = "parallel")]
        {
            use rayon::prelude::*;

            let entities = &mut self.entities;
            let mut tick_all = move || {
                entities
                    .into_par_iter()
                    .map(Entity::tick)
                    .try_reduce(|| 0, |a, b| Ok(a + b))
            };
            match &self.pool {
                Some(pool) => pool.install(tick_all),
                None       => tick_all(),
            }
        }
    }
}
