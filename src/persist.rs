//! Snapshot persistence: the regions document schema, the codec between
//! records and live regions, and whole-file save/load.
//!
//! The on-disk layout is a single JSON document keyed `regions`, mapping each
//! region name to a flat record. Corners are stored as `"x,y,z"` strings.
//! Loading is fault tolerant per entry: a corrupt record is logged and
//! skipped, the rest of the file still loads.

use std::collections::BTreeMap;
use std::io;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::RegionError;
use crate::region::{BlockPos, Cuboid, Region};
use crate::store::RegionStore;

/// Opaque handle to a live world, produced by the host's lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorldHandle {
    name: String,
}

impl WorldHandle {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

/// Host collaborator that resolves a persisted world name to a live world.
pub trait WorldLookup {
    fn resolve_world(&self, name: &str) -> Option<WorldHandle>;
}

/// One persisted region. Unknown fields reject the record; `members` may be
/// absent in documents written by older builds.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RegionRecord {
    pub name: String,
    pub owner: String,
    pub world: String,
    pub pos1: String,
    pub pos2: String,
    #[serde(default)]
    pub members: Vec<String>,
}

/// Written snapshot shape. `BTreeMap` keeps the file diff-stable.
#[derive(Serialize)]
struct RegionsDocument {
    regions: BTreeMap<String, RegionRecord>,
}

/// Read-side shape: entries stay raw so one bad record cannot fail the whole
/// document.
#[derive(Deserialize)]
struct RawDocument {
    #[serde(default)]
    regions: BTreeMap<String, serde_json::Value>,
}

fn format_pos(pos: BlockPos) -> String {
    format!("{},{},{}", pos.x, pos.y, pos.z)
}

fn parse_pos(s: &str) -> Result<BlockPos, RegionError> {
    let mut axes = [0i32; 3];
    let mut tokens = s.split(',');
    for axis in &mut axes {
        *axis = tokens
            .next()
            .and_then(|t| t.trim().parse().ok())
            .ok_or_else(|| RegionError::MalformedCoordinate(s.to_string()))?;
    }
    if tokens.next().is_some() {
        return Err(RegionError::MalformedCoordinate(s.to_string()));
    }
    Ok(BlockPos::new(axes[0], axes[1], axes[2]))
}

pub fn encode_region(region: &Region) -> RegionRecord {
    let mut members: Vec<String> = region.members.iter().cloned().collect();
    members.sort_unstable();
    RegionRecord {
        name: region.name.clone(),
        owner: region.owner.clone(),
        world: region.world.clone(),
        pos1: format_pos(region.bounds.pos1),
        pos2: format_pos(region.bounds.pos2),
        members,
    }
}

pub fn decode_region(
    record: RegionRecord,
    worlds: &dyn WorldLookup,
) -> Result<Region, RegionError> {
    let world = match worlds.resolve_world(&record.world) {
        Some(world) => world,
        None => return Err(RegionError::UnknownWorld(record.world)),
    };
    let pos1 = parse_pos(&record.pos1)?;
    let pos2 = parse_pos(&record.pos2)?;
    let mut region = Region::new(record.name, record.owner, world.name(), Cuboid::new(pos1, pos2));
    region.members.extend(record.members);
    Ok(region)
}

/// Writes the full snapshot, overwriting the previous file.
pub fn save(store: &RegionStore, path: &Path) -> Result<(), RegionError> {
    let doc = RegionsDocument {
        regions: store
            .iter()
            .map(|r| (r.name.clone(), encode_region(r)))
            .collect(),
    };
    let json = serde_json::to_string_pretty(&doc)?;
    std::fs::write(path, json)?;
    Ok(())
}

/// Loads a snapshot. A missing file is an empty store; a corrupt entry is
/// logged and skipped while the remaining entries still load.
pub fn load(path: &Path, worlds: &dyn WorldLookup) -> Result<RegionStore, RegionError> {
    let text = match std::fs::read_to_string(path) {
        Ok(text) => text,
        Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(RegionStore::new()),
        Err(err) => return Err(err.into()),
    };
    let raw: RawDocument = serde_json::from_str(&text)?;

    let mut store = RegionStore::new();
    for (key, value) in raw.regions {
        let decoded = serde_json::from_value::<RegionRecord>(value)
            .map_err(RegionError::from)
            .and_then(|record| decode_region(record, worlds));
        match decoded {
            Ok(region) => store.restore(region),
            Err(err) => log::warn!("regionguard: skipping region '{key}': {err}"),
        }
    }
    log::info!("regionguard: loaded {} regions", store.len());
    Ok(store)
}
