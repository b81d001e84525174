//! Region and cuboid types for RegionGuard.
//!
//! Decoupled from command/handler logic so claim rules can be reused or tested
//! independently.

use std::collections::HashSet;
use std::fmt;

/// An integer block position inside one world.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BlockPos {
    pub x: i32,
    pub y: i32,
    pub z: i32,
}

impl BlockPos {
    pub const fn new(x: i32, y: i32, z: i32) -> Self {
        Self { x, y, z }
    }
}

impl fmt::Display for BlockPos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}

/// An axis-aligned cuboid defined by two opposite corners.
///
/// The corners are kept exactly as selected; no ordering is imposed. Every
/// query normalizes to per-axis min/max, so `(a, b)` and `(b, a)` describe the
/// same volume.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cuboid {
    pub pos1: BlockPos,
    pub pos2: BlockPos,
}

impl Cuboid {
    pub const fn new(pos1: BlockPos, pos2: BlockPos) -> Self {
        Self { pos1, pos2 }
    }

    /// Normalized bounds: (lower corner, upper corner).
    fn bounds(&self) -> (BlockPos, BlockPos) {
        (
            BlockPos::new(
                self.pos1.x.min(self.pos2.x),
                self.pos1.y.min(self.pos2.y),
                self.pos1.z.min(self.pos2.z),
            ),
            BlockPos::new(
                self.pos1.x.max(self.pos2.x),
                self.pos1.y.max(self.pos2.y),
                self.pos1.z.max(self.pos2.z),
            ),
        )
    }

    /// Returns true if the position is inside this cuboid (inclusive min/max).
    #[must_use]
    pub fn contains(&self, pos: BlockPos) -> bool {
        let (min, max) = self.bounds();
        pos.x >= min.x && pos.x <= max.x
            && pos.y >= min.y && pos.y <= max.y
            && pos.z >= min.z && pos.z <= max.z
    }

    /// Returns true if the two cuboids intersect on every axis.
    ///
    /// Bounds are closed intervals: cuboids sharing only a face, edge, or
    /// corner count as overlapping.
    #[must_use]
    pub fn overlaps(&self, other: &Cuboid) -> bool {
        let (a_min, a_max) = self.bounds();
        let (b_min, b_max) = other.bounds();
        a_min.x <= b_max.x && a_max.x >= b_min.x
            && a_min.y <= b_max.y && a_max.y >= b_min.y
            && a_min.z <= b_max.z && a_max.z >= b_min.z
    }
}

/// A protected cuboid claim with an owner and a member list.
///
/// The bounds never change after creation; there is no resize or move.
#[derive(Debug, Clone)]
pub struct Region {
    pub name: String,
    pub owner: String,
    /// Name of the world the claim lives in.
    pub world: String,
    pub bounds: Cuboid,
    pub members: HashSet<String>,
}

impl Region {
    pub fn new(
        name: impl Into<String>,
        owner: impl Into<String>,
        world: impl Into<String>,
        bounds: Cuboid,
    ) -> Self {
        Self {
            name: name.into(),
            owner: owner.into(),
            world: world.into(),
            bounds,
            members: HashSet::new(),
        }
    }

    /// Returns true if the position in the given world is inside this region.
    /// A region never contains positions from another world.
    pub fn contains(&self, world: &str, pos: BlockPos) -> bool {
        self.world == world && self.bounds.contains(pos)
    }

    /// Returns true if both regions claim the same world and their cuboids
    /// intersect.
    pub fn overlaps(&self, other: &Region) -> bool {
        self.world == other.world && self.bounds.overlaps(&other.bounds)
    }

    /// Returns true if the actor is allowed to build (break/place) here.
    pub fn can_build(&self, actor: &str) -> bool {
        self.is_owner(actor) || self.members.contains(actor)
    }

    pub fn is_owner(&self, actor: &str) -> bool {
        self.owner == actor
    }

    /// Adds a member. Adding an existing member is a no-op.
    pub fn add_member(&mut self, actor: impl Into<String>) {
        self.members.insert(actor.into());
    }

    /// Removes a member. Removing a non-member is a no-op.
    pub fn remove_member(&mut self, actor: &str) {
        self.members.remove(actor);
    }
}
