//! # grid_nav
//!
//! Grid-based pathfinding over terrain-classified tiles. A [TerrainGrid]
//! holds a fixed 2D field of [Node]s whose walkability is derived from a
//! [Terrain] classification, an [AstarPathfinder] computes lowest-cost paths
//! with a Manhattan-distance heuristic, and a [PathFollower] walks an agent
//! along those paths in world space, re-planning against a moving target on
//! a fixed interval. Connected components over the walkable cells are
//! pre-computed to avoid flood-filling behaviour if no path exists.
//!
//! Everything is single-threaded and tick-driven: terrain edits, searches
//! and following all run to completion inside the caller's update loop, and
//! the only failure mode anywhere is an absent result ([None]), never a
//! panic.
mod astar;
pub mod follower;
pub mod node;
pub mod pathfinder;
pub mod terrain_grid;

pub use follower::{FollowState, FollowerConfig, PathFollower};
pub use node::{Node, Terrain};
pub use pathfinder::AstarPathfinder;
pub use terrain_grid::TerrainGrid;
