//! Event-facing surface: the shared state handle, build authorization,
//! explosion filtering, and the selection wand.
//!
//! The host's event layer calls into these before committing a world
//! mutation; none of the checks block on anything but the state locks.

use std::sync::Arc;

use tokio::sync::RwLock;

use crate::config::RegionGuardConfig;
use crate::error::RegionError;
use crate::persist::{self, WorldLookup};
use crate::region::BlockPos;
use crate::selection::SelectionStore;
use crate::store::RegionStore;

/// Shared handle to region and selection state (used by commands and
/// handlers). Constructed once at startup and cloned to every call site.
#[derive(Clone)]
pub struct RegionGuard {
    pub regions: Arc<RwLock<RegionStore>>,
    pub selections: Arc<RwLock<SelectionStore>>,
    pub config: Arc<RegionGuardConfig>,
}

impl RegionGuard {
    pub fn new(config: RegionGuardConfig) -> Self {
        Self {
            regions: Arc::new(RwLock::new(RegionStore::new())),
            selections: Arc::new(RwLock::new(SelectionStore::default())),
            config: Arc::new(config),
        }
    }

    /// Loads the persisted snapshot, replacing the in-memory regions.
    /// Called once when the host enables the plugin.
    pub async fn load(&self, worlds: &dyn WorldLookup) -> Result<(), RegionError> {
        let loaded = persist::load(&self.config.storage.data_file, worlds)?;
        *self.regions.write().await = loaded;
        Ok(())
    }

    /// Writes the full snapshot, overwriting the previous file. Called after
    /// every mutating command and when the host disables the plugin.
    pub async fn save(&self) -> Result<(), RegionError> {
        let regions = self.regions.read().await;
        persist::save(&regions, &self.config.storage.data_file)
    }

    /// Authorization check before a block break or place commits.
    ///
    /// Privileged actors bypass protection entirely. Everyone else is denied
    /// if any region containing the position refuses them; loaded data may
    /// overlap, so every containing region gets a say.
    pub async fn can_mutate(
        &self,
        actor: &str,
        privileged: bool,
        world: &str,
        pos: BlockPos,
    ) -> bool {
        if privileged {
            return true;
        }
        let regions = self.regions.read().await;
        let allowed = !regions.regions_at(world, pos).any(|r| !r.can_build(actor));
        allowed
    }

    /// Returns true if any region claims the position.
    pub async fn is_protected(&self, world: &str, pos: BlockPos) -> bool {
        self.regions.read().await.is_protected(world, pos)
    }

    /// Strips protected positions out of an explosion's destruction list.
    /// The host applies damage to whatever remains.
    pub async fn filter_explosion(&self, world: &str, affected: Vec<BlockPos>) -> Vec<BlockPos> {
        let regions = self.regions.read().await;
        affected
            .into_iter()
            .filter(|pos| !regions.is_protected(world, *pos))
            .collect()
    }

    /// Records a wand click on a block and returns the chat lines to send
    /// back. `is_first` distinguishes the two click kinds.
    pub async fn handle_wand_click(
        &self,
        actor: &str,
        world: &str,
        pos: BlockPos,
        is_first: bool,
    ) -> Vec<String> {
        let mut selections = self.selections.write().await;
        selections.set_pos(actor, world, pos, is_first);
        let complete = selections.get(actor).is_some_and(|s| s.is_complete());
        drop(selections);

        let which = if is_first { "First" } else { "Second" };
        let mut lines = vec![format!("{which} position set to: {pos}")];
        if complete {
            lines.push("Selection complete! Use /region create <name> to create region.".to_string());
        }
        lines
    }

    /// Forgets the actor's selection when they disconnect.
    pub async fn handle_disconnect(&self, actor: &str) {
        self.selections.write().await.clear(actor);
    }
}
