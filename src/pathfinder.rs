use grid_util::point::Point;
use log::{debug, info};

use crate::astar::astar;
use crate::terrain_grid::TerrainGrid;

/// A* planner over a [TerrainGrid] using the Manhattan distance
/// `|dx| + |dy|` as heuristic.
///
/// The heuristic is admissible (and found paths optimal) for 4-connected
/// movement with unit step costs. With
/// [allow_diagonal_move](TerrainGrid::allow_diagonal_move) enabled, or with a
/// `heuristic_factor` above 1.0, it overestimates and paths may be
/// suboptimal. This is a documented trade-off, not silently corrected.
#[derive(Clone, Debug)]
pub struct AstarPathfinder {
    /// Scales the heuristic. 1.0 (the default) keeps A* optimal; larger
    /// values greedily speed up searches at the cost of path quality.
    pub heuristic_factor: f32,
}

impl Default for AstarPathfinder {
    fn default() -> AstarPathfinder {
        AstarPathfinder::new()
    }
}

impl AstarPathfinder {
    pub fn new() -> AstarPathfinder {
        AstarPathfinder {
            heuristic_factor: 1.0,
        }
    }

    pub fn heuristic(&self, p1: &Point, p2: &Point) -> i32 {
        let manhattan = (p1.x - p2.x).abs() + (p1.y - p2.y).abs();
        (manhattan as f32 * self.heuristic_factor) as i32
    }

    /// Computes a lowest-cost path from `start` to `goal`, both included, or
    /// [None] if the goal cannot be reached. Endpoints that are out of bounds
    /// or not walkable yield [None] immediately. When `start == goal` the
    /// path is the single node itself.
    ///
    /// Every call is a fresh search reading the grid's current state; edits
    /// made since a previous call are simply picked up. Given identical grid
    /// state and endpoints, repeated calls return identical paths.
    pub fn find_path(&self, grid: &TerrainGrid, start: Point, goal: Point) -> Option<Vec<Point>> {
        let (start_node, goal_node) = match (
            grid.node_at(start.x, start.y),
            grid.node_at(goal.x, goal.y),
        ) {
            (Some(s), Some(g)) => (s, g),
            _ => {
                debug!("Endpoint out of bounds: start {}, goal {}", start, goal);
                return None;
            }
        };
        if !start_node.walkable() || !goal_node.walkable() {
            debug!("Endpoint blocked: start {}, goal {}", start, goal);
            return None;
        }
        // The component check only holds while components are clean; after a
        // blocking edit the full search settles the question by exhausting
        // its open set.
        if !grid.components_dirty && grid.unreachable(&start, &goal) {
            info!("{} is not reachable from {}", goal, start);
            return None;
        }
        let result = astar(
            &start,
            |node| grid.pathfinding_neighborhood(node),
            |point| self.heuristic(point, &goal),
            |point| *point == goal,
        );
        if result.is_none() {
            info!("Open set exhausted: {} is not reachable from {}", goal, start);
        }
        result.map(|(v, _c)| v)
    }
}
