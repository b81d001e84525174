//! Region storage: name-keyed lookup, containment scans, insert validation.

use std::collections::HashMap;

use crate::error::RegionError;
use crate::region::{BlockPos, Region};

/// In-memory store of all regions, keyed by region name.
///
/// `insert` is the only path that enforces the no-overlap invariant;
/// `restore` trusts already-persisted data, so scans must tolerate
/// overlapping regions.
#[derive(Debug, Default)]
pub struct RegionStore {
    regions: HashMap<String, Region>,
}

impl RegionStore {
    pub fn new() -> Self {
        Self {
            regions: HashMap::new(),
        }
    }

    /// Registers a new region after validating both invariants: the name must
    /// be free and the cuboid must not overlap any existing region in the
    /// same world. On failure the store is left untouched.
    pub fn insert(&mut self, region: Region) -> Result<(), RegionError> {
        if self.regions.contains_key(&region.name) {
            return Err(RegionError::DuplicateName(region.name));
        }
        if let Some(existing) = self.regions.values().find(|r| r.overlaps(&region)) {
            return Err(RegionError::OverlapConflict(existing.name.clone()));
        }
        self.regions.insert(region.name.clone(), region);
        Ok(())
    }

    /// Re-inserts a region loaded from storage. The overlap check is skipped:
    /// persisted data is trusted as-is, even if it was written by an older
    /// build without overlap validation.
    pub fn restore(&mut self, region: Region) {
        self.regions.insert(region.name.clone(), region);
    }

    pub fn remove(&mut self, name: &str) -> Result<Region, RegionError> {
        self.regions
            .remove(name)
            .ok_or_else(|| RegionError::NotFound(name.to_string()))
    }

    pub fn get(&self, name: &str) -> Option<&Region> {
        self.regions.get(name)
    }

    pub fn get_mut(&mut self, name: &str) -> Option<&mut Region> {
        self.regions.get_mut(name)
    }

    /// Every region containing the position. Loaded data may overlap, so all
    /// matches matter to callers, not just the first.
    pub fn regions_at<'a>(
        &'a self,
        world: &'a str,
        pos: BlockPos,
    ) -> impl Iterator<Item = &'a Region> {
        self.regions.values().filter(move |r| r.contains(world, pos))
    }

    /// Returns true if any region contains the position.
    pub fn is_protected(&self, world: &str, pos: BlockPos) -> bool {
        self.regions_at(world, pos).next().is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Region> {
        self.regions.values()
    }

    pub fn len(&self) -> usize {
        self.regions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }
}
