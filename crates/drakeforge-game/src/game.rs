//! The game loop: buying, merging, income and save/load
//!
//! `Game` owns the [`Forge`], the [`Grid`] and a [`SaveStore`]. It is the
//! only place that writes to the grid; the forge just hands back new drakes.

use crate::error::{Error, Result};
use crate::save::{self, SaveState, SaveStore};
use crate::{GameConfig, Grid};
use drakeforge_core::{round_half_up, Drake, DrakeId, Forge};
use std::time::Duration;

/// Result of a successful merge
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MergeOutcome {
    /// Slot the child was placed in
    pub index: usize,
    pub child: DrakeId,
    pub level: u32,
    /// Whether the child is the highest level reached so far
    pub new_highest: bool,
}

/// How [`Game::start`] came up
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StartKind {
    Restored,
    Fresh,
}

/// A running game
pub struct Game<S: SaveStore> {
    config: GameConfig,
    forge: Forge,
    grid: Grid,
    resources: u64,
    highest_level: Option<u32>,
    pending: Duration,
    store: S,
}

impl<S: SaveStore> Game<S> {
    /// Create a game in its fresh state; call [`start`](Self::start) to
    /// pick up a save
    pub fn new(forge: Forge, config: GameConfig, store: S) -> Self {
        let grid = Grid::new(config.grid_size());
        let resources = config.starting_resources;
        Self {
            config,
            forge,
            grid,
            resources,
            highest_level: None,
            pending: Duration::ZERO,
            store,
        }
    }

    /// Restore the saved game if asked and available, otherwise reset
    ///
    /// An unreadable or incompatible save is logged and replaced by a fresh
    /// game rather than treated as fatal.
    pub fn start(&mut self, load_save: bool) -> Result<StartKind> {
        if load_save {
            if let Some(state) = self.read_save()? {
                self.restore(state);
                return Ok(StartKind::Restored);
            }
        }

        self.reset();
        tracing::info!("started a new game");
        Ok(StartKind::Fresh)
    }

    fn read_save(&self) -> Result<Option<SaveState>> {
        let Some(payload) = self.store.load(&self.config.save_key)? else {
            tracing::info!(key = %self.config.save_key, "no save data found");
            return Ok(None);
        };

        match save::decode(&payload) {
            Ok(file) => {
                tracing::info!(saved_at = %file.saved_at, "loaded save data");
                Ok(Some(file.state))
            }
            Err(err) => {
                tracing::warn!(%err, "ignoring unreadable save data");
                Ok(None)
            }
        }
    }

    fn restore(&mut self, state: SaveState) {
        let max_level = self.forge.max_level();
        let slots = state
            .grid_slots
            .into_iter()
            .enumerate()
            .map(|(index, slot)| match slot {
                Some(drake) if drake.level > max_level => {
                    tracing::warn!(
                        index,
                        level = drake.level,
                        max_level,
                        "dropping saved drake above max level"
                    );
                    None
                }
                slot => slot,
            })
            .collect();

        self.resources = state.resources;
        self.grid = Grid::from_slots(slots, self.config.grid_size());
        let saved_highest = state.highest_drake_level.filter(|&level| level <= max_level);
        self.highest_level = self.grid.highest_level().max(saved_highest);
        self.pending = Duration::ZERO;
        self.forge.reset_id_allocator(self.grid.highest_id());
    }

    fn reset(&mut self) {
        // Ids keep counting so nothing from before the reset is ever reused
        self.resources = self.config.starting_resources;
        self.grid = Grid::new(self.config.grid_size());
        self.highest_level = None;
        self.pending = Duration::ZERO;
    }

    /// Price of one shop drake
    pub fn purchase_cost(&self) -> u64 {
        self.forge
            .taxonomy()
            .level(self.config.purchase_level)
            .map(|tier| tier.cost)
            .unwrap_or_default()
    }

    /// Buy a drake into the first empty slot
    ///
    /// Returns the slot the drake was placed in.
    pub fn buy_drake(&mut self) -> Result<usize> {
        let cost = self.purchase_cost();
        let index = self.grid.find_empty_slot().ok_or(Error::GridFull)?;
        if self.resources < cost {
            return Err(Error::InsufficientResources {
                need: cost,
                have: self.resources,
            });
        }

        let drake = self.forge.create_drake(self.config.purchase_level)?;
        self.resources -= cost;
        tracing::debug!(
            index,
            id = %drake.id,
            rarity = %drake.rarity,
            element = %drake.element,
            "purchased drake"
        );

        if let Err(err) = self.grid.place(drake, index) {
            self.resources += cost;
            return Err(err);
        }
        self.update_highest_level();
        Ok(index)
    }

    /// Merge the drake at `from` onto the drake at `to`
    ///
    /// The drake at `to` is the merge target and passes on its element. On
    /// success both parents leave the grid and the child takes slot `to`.
    /// A failed merge leaves the grid untouched.
    pub fn attempt_merge(&mut self, from: usize, to: usize) -> Result<MergeOutcome> {
        if from == to {
            return Err(Error::SameSlot(from));
        }
        let source = self.grid.drake_at(from).ok_or(Error::EmptySlot(from))?;
        let target = self.grid.drake_at(to).ok_or(Error::EmptySlot(to))?;

        let child = self.forge.resolve_merge(target, source).inspect_err(|err| {
            tracing::debug!(from, to, %err, "merge rejected");
        })?;

        self.grid.remove(from);
        self.grid.remove(to);
        let outcome = MergeOutcome {
            index: to,
            child: child.id,
            level: child.level,
            new_highest: self.highest_level.map_or(true, |h| child.level > h),
        };
        self.grid.place(child, to)?;
        self.update_highest_level();

        tracing::debug!(?outcome, "merge placed");
        Ok(outcome)
    }

    /// Move a drake into an empty slot
    pub fn move_drake(&mut self, from: usize, to: usize) -> Result<()> {
        self.grid.move_drake(from, to)
    }

    /// Income the board produces in one tick, before rounding
    pub fn income_per_tick(&self) -> f64 {
        self.grid.iter().map(|(_, d)| d.income_per_tick()).sum()
    }

    /// Run one income tick and return the amount added
    pub fn collect_income(&mut self) -> u64 {
        let income = round_half_up(self.income_per_tick());
        if income <= 0.0 {
            return 0;
        }
        let income = income as u64;
        self.resources = self.resources.saturating_add(income);
        income
    }

    /// Advance game time, collecting income for every full interval passed
    pub fn advance(&mut self, elapsed: Duration) -> u64 {
        let interval = self.config.income_interval();
        self.pending += elapsed;

        let mut collected = 0;
        while self.pending >= interval {
            self.pending -= interval;
            collected += self.collect_income();
        }
        collected
    }

    /// Snapshot of the current progress
    pub fn save_state(&self) -> SaveState {
        SaveState {
            resources: self.resources,
            grid_slots: self.grid.slots().to_vec(),
            highest_drake_level: self.highest_level,
        }
    }

    /// Write the current progress to the store
    pub fn save(&mut self) -> Result<()> {
        let payload = save::encode(&self.save_state())?;
        self.store.save(&self.config.save_key, &payload)?;
        tracing::info!(key = %self.config.save_key, "game saved");
        Ok(())
    }

    /// Reload from the store; returns whether a save was restored
    pub fn load(&mut self) -> Result<bool> {
        Ok(self.start(true)? == StartKind::Restored)
    }

    /// Delete the save and start over
    pub fn delete_save(&mut self) -> Result<bool> {
        let removed = self.store.delete(&self.config.save_key)?;
        if removed {
            tracing::info!(key = %self.config.save_key, "save data deleted");
        }
        self.start(false)?;
        Ok(removed)
    }

    fn update_highest_level(&mut self) {
        let level = self.grid.highest_level();
        if level <= self.highest_level {
            return;
        }
        if let Some((l, info)) = level.and_then(|l| self.forge.tier_info(l).map(|i| (l, i))) {
            tracing::info!(level = l, name = info.name, "new highest drake");
        }
        self.highest_level = level;
    }

    pub fn drake_at(&self, index: usize) -> Option<&Drake> {
        self.grid.drake_at(index)
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn resources(&self) -> u64 {
        self.resources
    }

    pub fn highest_level(&self) -> Option<u32> {
        self.highest_level
    }

    pub fn forge(&self) -> &Forge {
        &self.forge
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}
