//! End-to-end authorization scenarios through the shared handle.

use regionguard::{BlockPos, Cuboid, Region, RegionGuard, RegionGuardConfig};

fn pos(x: i32, y: i32, z: i32) -> BlockPos {
    BlockPos::new(x, y, z)
}

fn claim(name: &str, owner: &str, world: &str, a: BlockPos, b: BlockPos) -> Region {
    Region::new(name, owner, world, Cuboid::new(a, b))
}

async fn guard_with(regions: Vec<Region>) -> RegionGuard {
    let guard = RegionGuard::new(RegionGuardConfig::default());
    {
        let mut store = guard.regions.write().await;
        for region in regions {
            store.insert(region).expect("test regions must not conflict");
        }
    }
    guard
}

#[tokio::test]
async fn owner_members_and_strangers() {
    let guard = guard_with(vec![claim(
        "base",
        "alice",
        "world",
        pos(0, 0, 0),
        pos(10, 10, 10),
    )])
    .await;
    let inside = pos(5, 5, 5);

    assert!(guard.can_mutate("alice", false, "world", inside).await);
    assert!(!guard.can_mutate("bob", false, "world", inside).await);

    guard
        .regions
        .write()
        .await
        .get_mut("base")
        .unwrap()
        .add_member("bob");
    assert!(guard.can_mutate("bob", false, "world", inside).await);

    guard
        .regions
        .write()
        .await
        .get_mut("base")
        .unwrap()
        .remove_member("bob");
    assert!(!guard.can_mutate("bob", false, "world", inside).await);
}

#[tokio::test]
async fn unclaimed_land_is_free_for_everyone() {
    let guard = guard_with(vec![claim(
        "base",
        "alice",
        "world",
        pos(0, 0, 0),
        pos(10, 10, 10),
    )])
    .await;
    assert!(guard.can_mutate("bob", false, "world", pos(100, 100, 100)).await);
    // same coordinates, different world: the claim does not reach there
    assert!(guard.can_mutate("bob", false, "world_nether", pos(5, 5, 5)).await);
}

#[tokio::test]
async fn privileged_actor_bypasses_everything() {
    let guard = guard_with(vec![claim(
        "base",
        "alice",
        "world",
        pos(0, 0, 0),
        pos(10, 10, 10),
    )])
    .await;
    assert!(guard.can_mutate("admin", true, "world", pos(5, 5, 5)).await);
}

#[tokio::test]
async fn deny_wins_across_overlapping_loaded_regions() {
    // Overlapping regions can only enter through the trusted reload path.
    let guard = RegionGuard::new(RegionGuardConfig::default());
    {
        let mut store = guard.regions.write().await;
        store.restore(claim("a", "alice", "world", pos(0, 0, 0), pos(10, 10, 10)));
        store.restore(claim("b", "bob", "world", pos(5, 5, 5), pos(15, 15, 15)));
    }
    let shared = pos(7, 7, 7);

    // each owner is a stranger to the other region
    assert!(!guard.can_mutate("alice", false, "world", shared).await);
    assert!(!guard.can_mutate("bob", false, "world", shared).await);

    guard
        .regions
        .write()
        .await
        .get_mut("b")
        .unwrap()
        .add_member("alice");
    assert!(guard.can_mutate("alice", false, "world", shared).await);
}

#[tokio::test]
async fn explosion_keeps_only_unprotected_blocks() {
    let guard = guard_with(vec![claim(
        "base",
        "alice",
        "world",
        pos(0, 0, 0),
        pos(10, 10, 10),
    )])
    .await;

    let affected = vec![pos(5, 5, 5), pos(100, 100, 100)];
    let surviving = guard.filter_explosion("world", affected).await;
    assert_eq!(surviving, vec![pos(100, 100, 100)]);

    assert!(guard.is_protected("world", pos(5, 5, 5)).await);
    assert!(!guard.is_protected("world", pos(100, 100, 100)).await);
}

#[tokio::test]
async fn explosion_filter_is_world_scoped() {
    let guard = guard_with(vec![claim(
        "base",
        "alice",
        "world",
        pos(0, 0, 0),
        pos(10, 10, 10),
    )])
    .await;

    // an explosion in another world keeps its whole block list
    let affected = vec![pos(5, 5, 5), pos(8, 8, 8)];
    let surviving = guard.filter_explosion("world_nether", affected.clone()).await;
    assert_eq!(surviving, affected);
}
