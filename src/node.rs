use core::fmt;
use grid_util::point::Point;

/// Terrain classification of a single grid cell. Walkability and movement
/// cost are both derived from this; there is no separate walkable flag that
/// could disagree with it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Terrain {
    Road,
    Mud,
    Water,
    Wall,
}

impl Default for Terrain {
    fn default() -> Terrain {
        Terrain::Road
    }
}

impl Terrain {
    /// Cost of stepping onto a cell of this terrain, or [None] if the terrain
    /// cannot be entered at all.
    ///
    /// Note that the A* relaxation currently uses a unit step cost and does
    /// not consult this value, so terrain cost is descriptive only. Making it
    /// count would also require replacing the Manhattan heuristic, which is
    /// only admissible for unit costs.
    pub fn movement_cost(&self) -> Option<i32> {
        match self {
            Terrain::Road => Some(1),
            Terrain::Mud => Some(3),
            Terrain::Water => Some(5),
            Terrain::Wall => None,
        }
    }
    pub fn walkable(&self) -> bool {
        !matches!(self, Terrain::Wall)
    }
    /// Single-character rendering used by the grid's [Display](fmt::Display) impl.
    pub fn glyph(&self) -> char {
        match self {
            Terrain::Road => '.',
            Terrain::Mud => 'm',
            Terrain::Water => 'w',
            Terrain::Wall => '#',
        }
    }
}

/// A single grid cell: a position and its terrain. Nodes are created once at
/// grid generation and live for the grid's lifetime; only the terrain mutates
/// afterwards. Search bookkeeping (g-cost, parent links) is kept per search
/// inside the A* routine, not here.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Node {
    pub point: Point,
    pub terrain: Terrain,
}

impl Node {
    pub fn new(x: i32, y: i32, terrain: Terrain) -> Node {
        Node {
            point: Point::new(x, y),
            terrain,
        }
    }
    pub fn walkable(&self) -> bool {
        self.terrain.walkable()
    }
    pub fn movement_cost(&self) -> Option<i32> {
        self.terrain.movement_cost()
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{:?} at {}", self.terrain, self.point)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn walkability_follows_terrain() {
        assert!(Node::new(0, 0, Terrain::Road).walkable());
        assert!(Node::new(0, 0, Terrain::Mud).walkable());
        assert!(Node::new(0, 0, Terrain::Water).walkable());
        assert!(!Node::new(0, 0, Terrain::Wall).walkable());
    }

    #[test]
    fn movement_costs() {
        assert_eq!(Terrain::Road.movement_cost(), Some(1));
        assert_eq!(Terrain::Mud.movement_cost(), Some(3));
        assert_eq!(Terrain::Water.movement_cost(), Some(5));
        assert_eq!(Terrain::Wall.movement_cost(), None);
    }
}
