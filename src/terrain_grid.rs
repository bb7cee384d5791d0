use core::fmt;
use glam::Vec2;
use grid_util::grid::Grid;
use grid_util::point::Point;
use log::info;
use petgraph::unionfind::UnionFind;

use crate::node::{Node, Terrain};

/// [TerrainGrid] owns a fixed-size 2D field of terrain-classified [Node]s and
/// answers the spatial queries the planner and follower need: bounds-checked
/// lookups, world-to-grid mapping and fixed-order neighbourhoods. It also
/// maintains connected components over the walkable cells in a [UnionFind]
/// structure so that searches for unreachable goals can bail out without
/// flood-filling the map. Implements [Grid] over [Terrain].
///
/// The grid is never resized; only terrain (and with it walkability) changes
/// after construction.
#[derive(Clone, Debug)]
pub struct TerrainGrid {
    nodes: Vec<Node>,
    width: usize,
    height: usize,
    /// World units per cell, used by [world_to_node](Self::world_to_node) and
    /// [node_to_world](Self::node_to_world).
    pub cell_size: f32,
    /// Whether neighbourhoods are 8-connected. Off by default: the planner's
    /// Manhattan heuristic is only admissible for 4-connected movement.
    pub allow_diagonal_move: bool,
    pub components: UnionFind<usize>,
    pub components_dirty: bool,
}

/// Neighbour offsets in fixed order: East, West, North, South, then the
/// diagonals NE, NW, SE, SW. The order feeds the open set and therefore
/// affects tie-breaking; changing it changes which of several equally short
/// paths a search returns.
const NEIGHBOUR_OFFSETS: [(i32, i32); 8] = [
    (1, 0),
    (-1, 0),
    (0, 1),
    (0, -1),
    (1, 1),
    (-1, 1),
    (1, -1),
    (-1, -1),
];

impl Default for TerrainGrid {
    fn default() -> TerrainGrid {
        TerrainGrid {
            nodes: Vec::new(),
            width: 0,
            height: 0,
            cell_size: 1.0,
            allow_diagonal_move: false,
            components: UnionFind::new(0),
            components_dirty: false,
        }
    }
}

impl TerrainGrid {
    fn ix(&self, x: usize, y: usize) -> usize {
        y * self.width + x
    }
    fn in_bounds(&self, x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && (x as usize) < self.width && (y as usize) < self.height
    }
    /// The node at grid coordinates (x, y), or [None] when outside
    /// [0, width) x [0, height). Out-of-range lookups (including negative
    /// coordinates) are an expected answer, not a fault.
    pub fn node_at(&self, x: i32, y: i32) -> Option<&Node> {
        if self.in_bounds(x, y) {
            Some(&self.nodes[y as usize * self.width + x as usize])
        } else {
            None
        }
    }
    /// Resolves a world-space position to the nearest grid node by rounding
    /// against [cell_size](Self::cell_size). Positions off the grid resolve
    /// to [None].
    pub fn world_to_node(&self, world: Vec2) -> Option<&Node> {
        let x = (world.x / self.cell_size).round() as i32;
        let y = (world.y / self.cell_size).round() as i32;
        self.node_at(x, y)
    }
    /// Centre of a cell in world space; the inverse of
    /// [world_to_node](Self::world_to_node).
    pub fn node_to_world(&self, point: Point) -> Vec2 {
        Vec2::new(
            point.x as f32 * self.cell_size,
            point.y as f32 * self.cell_size,
        )
    }
    /// Lazily yields the adjacent nodes of `node` in the fixed
    /// [NEIGHBOUR_OFFSETS] order, 4-connected or 8-connected depending on
    /// [allow_diagonal_move](Self::allow_diagonal_move). Out-of-range
    /// positions are omitted; blocked neighbours are yielded (the search
    /// filters those itself).
    pub fn neighbors<'a>(&'a self, node: &Node) -> impl Iterator<Item = &'a Node> + 'a {
        let (x, y) = (node.point.x, node.point.y);
        let count = if self.allow_diagonal_move { 8 } else { 4 };
        NEIGHBOUR_OFFSETS[..count]
            .iter()
            .filter_map(move |&(dx, dy)| self.node_at(x + dx, y + dy))
    }
    /// The walkable neighbourhood of a position together with step costs, as
    /// consumed by the A* successor function. Every edge costs one step; the
    /// per-terrain movement cost is not consulted here (see
    /// [Terrain::movement_cost]).
    pub(crate) fn pathfinding_neighborhood(&self, pos: &Point) -> Vec<(Point, i32)> {
        match self.node_at(pos.x, pos.y) {
            Some(node) => self
                .neighbors(node)
                .filter(|n| n.walkable())
                .map(|n| (n.point, 1))
                .collect(),
            None => Vec::new(),
        }
    }
    pub fn can_move_to(&self, pos: Point) -> bool {
        self.node_at(pos.x, pos.y).is_some_and(|n| n.walkable())
    }
    /// Reclassifies a node's terrain to [Terrain::Wall] or [Terrain::Road].
    /// A path computed earlier is not invalidated; the next search simply
    /// observes the new state. Out-of-range points are ignored.
    pub fn set_walkable(&mut self, point: Point, walkable: bool) {
        if self.in_bounds(point.x, point.y) {
            let terrain = if walkable { Terrain::Road } else { Terrain::Wall };
            self.set(point.x as usize, point.y as usize, terrain);
        }
    }
    /// Retrieves the component id a given [Point] belongs to.
    pub fn get_component(&self, point: &Point) -> usize {
        self.components.find(self.get_ix_point(point))
    }
    /// Checks if start and goal are on the same component.
    pub fn reachable(&self, start: &Point, goal: &Point) -> bool {
        !self.unreachable(start, goal)
    }
    /// Checks if start and goal are not on the same component. Anything out
    /// of bounds is unreachable by definition.
    pub fn unreachable(&self, start: &Point, goal: &Point) -> bool {
        if self.in_bounds(start.x, start.y) && self.in_bounds(goal.x, goal.y) {
            let start_ix = self.get_ix_point(start);
            let goal_ix = self.get_ix_point(goal);
            !self.components.equiv(start_ix, goal_ix)
        } else {
            true
        }
    }
    /// Regenerates the components if they are marked as dirty.
    pub fn update(&mut self) {
        if self.components_dirty {
            info!("Components are dirty: regenerating components");
            self.generate_components();
        }
    }
    /// Generates a new [UnionFind] structure and links up walkable grid
    /// neighbours to the same components.
    pub fn generate_components(&mut self) {
        let w = self.width;
        let h = self.height;
        self.components = UnionFind::new(w * h);
        self.components_dirty = false;
        for x in 0..w {
            for y in 0..h {
                if !self.nodes[self.ix(x, y)].walkable() {
                    continue;
                }
                let parent_ix = self.get_ix(x, y);
                let point = Point::new(x as i32, y as i32);
                // Linking each cell to its east/north (and forward diagonal)
                // neighbours covers every edge exactly once.
                let forward = if self.allow_diagonal_move {
                    vec![
                        Point::new(point.x + 1, point.y),
                        Point::new(point.x, point.y + 1),
                        Point::new(point.x + 1, point.y + 1),
                        Point::new(point.x + 1, point.y - 1),
                    ]
                } else {
                    vec![
                        Point::new(point.x + 1, point.y),
                        Point::new(point.x, point.y + 1),
                    ]
                };
                let neighbour_ixs: Vec<usize> = forward
                    .into_iter()
                    .filter(|p| self.can_move_to(*p))
                    .map(|p| self.get_ix(p.x as usize, p.y as usize))
                    .collect();
                for ix in neighbour_ixs {
                    self.components.union(parent_ix, ix);
                }
            }
        }
    }
}

impl fmt::Display for TerrainGrid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for y in (0..self.height).rev() {
            for x in 0..self.width {
                write!(f, "{}", self.nodes[self.ix(x, y)].terrain.glyph())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl Grid<Terrain> for TerrainGrid {
    fn new(width: usize, height: usize, default_value: Terrain) -> Self {
        let mut nodes = Vec::with_capacity(width * height);
        for y in 0..height {
            for x in 0..width {
                nodes.push(Node::new(x as i32, y as i32, default_value));
            }
        }
        let mut base_grid = TerrainGrid {
            nodes,
            width,
            height,
            cell_size: 1.0,
            allow_diagonal_move: false,
            components: UnionFind::new(width * height),
            components_dirty: false,
        };
        base_grid.generate_components();
        base_grid
    }
    fn get(&self, x: usize, y: usize) -> Terrain {
        self.nodes[self.ix(x, y)].terrain
    }
    /// Reclassifies a position on the grid. Joins newly connected components
    /// and flags the components as dirty if components are (potentially)
    /// broken apart into multiple.
    fn set(&mut self, x: usize, y: usize, value: Terrain) {
        let ix = self.ix(x, y);
        let was_walkable = self.nodes[ix].walkable();
        self.nodes[ix].terrain = value;
        if was_walkable && !value.walkable() {
            self.components_dirty = true;
        } else if value.walkable() {
            let p_ix = self.get_ix(x, y);
            let neighbour_ixs: Vec<usize> = self
                .neighbors(&self.nodes[ix])
                .filter(|n| n.walkable())
                .map(|n| self.get_ix_point(&n.point))
                .collect();
            for n_ix in neighbour_ixs {
                self.components.union(p_ix, n_ix);
            }
        }
    }
    fn width(&self) -> usize {
        self.width
    }
    fn height(&self) -> usize {
        self.height
    }
}
