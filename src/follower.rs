//! Tick-driven path following: walks an agent through the waypoints of a
//! planned path in world space, re-planning against a live target on a fixed
//! interval.

use glam::Vec2;
use grid_util::point::Point;
use log::debug;

use crate::pathfinder::AstarPathfinder;
use crate::terrain_grid::TerrainGrid;

/// Configuration for path following.
#[derive(Clone, Debug)]
pub struct FollowerConfig {
    /// Movement speed in world units per second.
    pub move_speed: f32,
    /// Seconds between re-plans against the target's current position.
    /// Lower values track a moving target more closely at the cost of more
    /// searches.
    pub repath_interval: f32,
    /// Distance at which a waypoint counts as reached.
    pub waypoint_tolerance: f32,
}

impl Default for FollowerConfig {
    fn default() -> Self {
        Self {
            move_speed: 3.0,
            repath_interval: 0.5,
            waypoint_tolerance: 0.1,
        }
    }
}

/// State of path following.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FollowState {
    /// No path is held; the agent stays put until a re-plan succeeds.
    NoPath,
    /// Walking the current path's waypoints.
    Following,
    /// All waypoints consumed; holding position until the next re-plan.
    Arrived,
}

/// Walks an agent along paths planned by an [AstarPathfinder].
///
/// Each [tick](Self::tick) counts down the re-plan timer and, on expiry,
/// resolves the agent's and the target's world positions to grid nodes and
/// plans afresh. Failure to plan (unresolved endpoint, unreachable goal) is
/// not an error: the agent simply holds position and the next scheduled
/// re-plan is the only recovery path.
pub struct PathFollower {
    pub config: FollowerConfig,
    pathfinder: AstarPathfinder,
    path: Option<Vec<Point>>,
    current_index: usize,
    repath_timer: f32,
    state: FollowState,
}

impl PathFollower {
    /// A follower that plans immediately on its first tick.
    pub fn new(config: FollowerConfig, pathfinder: AstarPathfinder) -> Self {
        Self {
            config,
            pathfinder,
            path: None,
            current_index: 0,
            repath_timer: 0.0,
            state: FollowState::NoPath,
        }
    }

    pub fn state(&self) -> FollowState {
        self.state
    }

    pub fn has_path(&self) -> bool {
        self.path.is_some()
    }

    /// The waypoint currently being walked towards, if any.
    pub fn current_waypoint(&self) -> Option<Point> {
        self.path
            .as_ref()
            .and_then(|p| p.get(self.current_index))
            .copied()
    }

    /// Drops the current path; the follower holds position until the next
    /// re-plan.
    pub fn clear_path(&mut self) {
        self.path = None;
        self.current_index = 0;
        self.state = FollowState::NoPath;
    }

    /// Advances the follower by `dt` seconds and returns the agent's next
    /// world position. `position` is the agent's current world position and
    /// `target` the position to path towards; both are re-resolved to grid
    /// nodes at every re-plan.
    pub fn tick(
        &mut self,
        grid: &TerrainGrid,
        position: Vec2,
        target: Vec2,
        dt: f32,
    ) -> Vec2 {
        self.repath_timer -= dt;
        if self.repath_timer <= 0.0 {
            self.replan(grid, position, target);
            self.repath_timer = self.config.repath_interval;
        }
        self.step(grid, position, dt)
    }

    fn replan(&mut self, grid: &TerrainGrid, position: Vec2, target: Vec2) {
        let start = grid.world_to_node(position).map(|n| n.point);
        let goal = grid.world_to_node(target).map(|n| n.point);
        self.path = match (start, goal) {
            (Some(start), Some(goal)) => self.pathfinder.find_path(grid, start, goal),
            _ => {
                debug!("Re-plan skipped: endpoint did not resolve to a node");
                None
            }
        };
        self.current_index = 0;
        self.state = if self.path.is_some() {
            FollowState::Following
        } else {
            FollowState::NoPath
        };
    }

    fn step(&mut self, grid: &TerrainGrid, position: Vec2, dt: f32) -> Vec2 {
        let waypoint = match self.current_waypoint() {
            Some(w) => w,
            None => {
                if self.has_path() {
                    self.state = FollowState::Arrived;
                }
                return position;
            }
        };
        let waypoint_pos = grid.node_to_world(waypoint);
        let new_position = move_towards(position, waypoint_pos, self.config.move_speed * dt);
        if new_position.distance(waypoint_pos) < self.config.waypoint_tolerance {
            self.current_index += 1;
            if self.current_waypoint().is_none() {
                debug!("Reached the end of the path");
                self.state = FollowState::Arrived;
            }
        }
        new_position
    }
}

/// Moves `from` towards `to` by at most `max_delta`, without overshooting.
fn move_towards(from: Vec2, to: Vec2, max_delta: f32) -> Vec2 {
    let delta = to - from;
    let distance = delta.length();
    if distance <= max_delta || distance == 0.0 {
        to
    } else {
        from + delta / distance * max_delta
    }
}
