//! Snapshot round-trips and fault tolerance against real files.

use regionguard::persist::{self, WorldHandle, WorldLookup};
use regionguard::{BlockPos, Cuboid, Region, RegionStore};

struct StaticWorlds(&'static [&'static str]);

impl WorldLookup for StaticWorlds {
    fn resolve_world(&self, name: &str) -> Option<WorldHandle> {
        self.0.contains(&name).then(|| WorldHandle::new(name))
    }
}

const WORLDS: StaticWorlds = StaticWorlds(&["world", "world_nether"]);

fn pos(x: i32, y: i32, z: i32) -> BlockPos {
    BlockPos::new(x, y, z)
}

#[test]
fn save_then_load_reproduces_the_registry() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("regions.json");

    let mut store = RegionStore::new();
    let mut base = Region::new(
        "base",
        "alice",
        "world",
        Cuboid::new(pos(10, 64, -10), pos(-10, 70, 10)),
    );
    base.add_member("bob");
    base.add_member("carol");
    store.insert(base).unwrap();
    store
        .insert(Region::new(
            "hideout",
            "bob",
            "world_nether",
            Cuboid::new(pos(0, 0, 0), pos(20, 20, 20)),
        ))
        .unwrap();

    persist::save(&store, &path).unwrap();
    let reloaded = persist::load(&path, &WORLDS).unwrap();

    assert_eq!(reloaded.len(), 2);
    let base = reloaded.get("base").unwrap();
    assert_eq!(base.owner, "alice");
    assert_eq!(base.world, "world");
    assert_eq!(base.bounds, Cuboid::new(pos(10, 64, -10), pos(-10, 70, 10)));
    assert_eq!(base.members.len(), 2);
    assert!(base.members.contains("bob") && base.members.contains("carol"));

    let hideout = reloaded.get("hideout").unwrap();
    assert_eq!(hideout.world, "world_nether");
    assert!(hideout.members.is_empty());
}

#[test]
fn saving_overwrites_the_previous_snapshot() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("regions.json");

    let mut store = RegionStore::new();
    store
        .insert(Region::new(
            "base",
            "alice",
            "world",
            Cuboid::new(pos(0, 0, 0), pos(10, 10, 10)),
        ))
        .unwrap();
    persist::save(&store, &path).unwrap();

    store.remove("base").unwrap();
    persist::save(&store, &path).unwrap();

    let reloaded = persist::load(&path, &WORLDS).unwrap();
    assert!(reloaded.is_empty());
}

#[test]
fn missing_file_loads_an_empty_registry() {
    let dir = tempfile::tempdir().unwrap();
    let store = persist::load(&dir.path().join("nope.json"), &WORLDS).unwrap();
    assert!(store.is_empty());
}

#[test]
fn corrupt_entries_are_skipped_but_the_rest_load() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("regions.json");
    std::fs::write(
        &path,
        r#"{
            "regions": {
                "good": {
                    "name": "good",
                    "owner": "alice",
                    "world": "world",
                    "pos1": "0,0,0",
                    "pos2": "10,10,10"
                },
                "bad-coords": {
                    "name": "bad-coords",
                    "owner": "alice",
                    "world": "world",
                    "pos1": "0,0",
                    "pos2": "10,10,10"
                },
                "bad-world": {
                    "name": "bad-world",
                    "owner": "alice",
                    "world": "world_the_end",
                    "pos1": "0,0,0",
                    "pos2": "10,10,10"
                },
                "bad-shape": {
                    "name": "bad-shape",
                    "owner": "alice",
                    "world": "world",
                    "pos1": "0,0,0",
                    "pos2": "10,10,10",
                    "resize": true
                }
            }
        }"#,
    )
    .unwrap();

    let store = persist::load(&path, &WORLDS).unwrap();
    assert_eq!(store.len(), 1);
    assert!(store.get("good").is_some());
}

#[test]
fn document_without_regions_key_is_empty() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("regions.json");
    std::fs::write(&path, "{}").unwrap();
    assert!(persist::load(&path, &WORLDS).unwrap().is_empty());
}

#[test]
fn unreadable_document_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("regions.json");
    std::fs::write(&path, "not json at all").unwrap();
    assert!(persist::load(&path, &WORLDS).is_err());
}
