//! RegionGuard: cuboid land claims and build protection for shared-world
//! servers.
//!
//! Players mark two corners with a wand, name the claim, and the claim's
//! owner decides who else may break or place blocks inside it. The host game
//! engine stays outside this crate: it forwards block/interact/explosion
//! events and tokenized `/region` commands in, and delivers the returned chat
//! lines and allow/deny verdicts.
//!
//! The crate is structured in a decentralized way:
//! - **[region]** — block position, cuboid, and region types
//! - **[selection]** — wand selection state
//! - **[store]** — region storage and its insert invariants
//! - **[persist]** — snapshot document codec and file I/O
//! - **[handlers]** — the shared [`RegionGuard`] handle and event hooks
//! - **[commands]** — /region routing and executors
//! - **[config]** — toml configuration

pub mod commands;
pub mod config;
pub mod error;
pub mod handlers;
pub mod persist;
pub mod region;
pub mod selection;
pub mod store;

pub use commands::{dispatch, CommandSource};
pub use config::RegionGuardConfig;
pub use error::RegionError;
pub use handlers::RegionGuard;
pub use persist::{RegionRecord, WorldHandle, WorldLookup};
pub use region::{BlockPos, Cuboid, Region};
pub use selection::{Selection, SelectionStore};
pub use store::RegionStore;
