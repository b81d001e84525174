//! Error kinds surfaced by region operations.
//!
//! All of these are recovered at the command boundary and turned into chat
//! messages; none abort the plugin.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum RegionError {
    /// A region with this name is already registered.
    #[error("region '{0}' already exists")]
    DuplicateName(String),

    /// The new region's cuboid intersects an existing region's cuboid.
    #[error("region overlaps existing region '{0}'")]
    OverlapConflict(String),

    /// No region with this name.
    #[error("region '{0}' not found")]
    NotFound(String),

    /// Caller is neither the region owner nor privileged.
    #[error("permission denied")]
    PermissionDenied,

    /// A persisted corner was not exactly three comma-separated integers.
    #[error("malformed coordinate '{0}'")]
    MalformedCoordinate(String),

    /// The persisted world name did not resolve to a live world.
    #[error("unknown world '{0}'")]
    UnknownWorld(String),

    /// The actor has not set both selection corners yet.
    #[error("selection is incomplete")]
    IncompleteSelection,

    /// A persisted entry did not match the record schema.
    #[error("malformed region record: {0}")]
    MalformedRecord(#[from] serde_json::Error),

    /// Reading or writing the snapshot file failed.
    #[error("region storage i/o: {0}")]
    Io(#[from] std::io::Error),
}
