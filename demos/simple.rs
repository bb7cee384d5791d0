use grid_nav::{AstarPathfinder, Terrain, TerrainGrid};
use grid_util::grid::Grid;
use grid_util::point::Point;

// In this demo a path is found on a grid with shape
// ....G
// .###.
// .#w#.
// .mmm.
// S....
// S marks the start
// G marks the goal
fn main() {
    env_logger::init();
    let mut grid: TerrainGrid = TerrainGrid::new(5, 5, Terrain::Road);
    for x in 1..4 {
        grid.set(x, 1, Terrain::Mud);
        grid.set(x, 3, Terrain::Wall);
    }
    grid.set(1, 2, Terrain::Wall);
    grid.set(3, 2, Terrain::Wall);
    grid.set(2, 2, Terrain::Water);
    grid.generate_components();
    println!("{}", grid);

    let pathfinder = AstarPathfinder::new();
    let start = Point::new(0, 0);
    let goal = Point::new(4, 4);
    if let Some(path) = pathfinder.find_path(&grid, start, goal) {
        println!("A path has been found:");
        for p in path {
            println!("{:?}", p);
        }
    }
}
