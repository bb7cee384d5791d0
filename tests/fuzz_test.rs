//! Fuzzes the planner by checking for many random grids that a path is found
//! exactly when the goal is reachable, i.e. start and goal share a connected
//! component. Both 4-connected and 8-connected movement are tested.
use grid_nav::{AstarPathfinder, Terrain, TerrainGrid};
use grid_util::grid::Grid;
use grid_util::point::Point;
use rand::prelude::*;

fn random_grid(n: usize, rng: &mut StdRng, diagonal: bool) -> TerrainGrid {
    let mut grid = TerrainGrid::new(n, n, Terrain::Road);
    grid.allow_diagonal_move = diagonal;
    for x in 0..grid.width() {
        for y in 0..grid.height() {
            if rng.gen_bool(0.4) {
                grid.set(x, y, Terrain::Wall);
            }
        }
    }
    grid.generate_components();
    grid
}

fn visualize_grid(grid: &TerrainGrid, start: &Point, end: &Point) {
    for y in (0..grid.height() as i32).rev() {
        for x in 0..grid.width() as i32 {
            let p = Point::new(x, y);
            if *start == p {
                print!("S");
            } else if *end == p {
                print!("G");
            } else if !grid.can_move_to(p) {
                print!("#");
            } else {
                print!(".");
            }
        }
        println!();
    }
}

#[test]
fn fuzz() {
    const N: usize = 10;
    const N_GRIDS: usize = 2000;
    let mut rng = StdRng::seed_from_u64(0);
    let pathfinder = AstarPathfinder::new();
    for diagonal in [false, true] {
        for _ in 0..N_GRIDS {
            let mut grid = random_grid(N, &mut rng, diagonal);
            let start = Point::new(0, 0);
            let end = Point::new(N as i32 - 1, N as i32 - 1);
            grid.set_walkable(start, true);
            grid.set_walkable(end, true);
            let reachable = grid.reachable(&start, &end);
            let path = pathfinder.find_path(&grid, start, end);
            // Show the grid if the search and the components disagree
            if path.is_some() != reachable {
                visualize_grid(&grid, &start, &end);
            }
            assert!(path.is_some() == reachable);
        }
    }
}

#[test]
fn fuzz_path_validity() {
    const N: usize = 8;
    const N_GRIDS: usize = 2000;
    let mut rng = StdRng::seed_from_u64(1);
    let pathfinder = AstarPathfinder::new();
    for _ in 0..N_GRIDS {
        let mut grid = random_grid(N, &mut rng, false);
        let start = Point::new(0, 0);
        let end = Point::new(N as i32 - 1, N as i32 - 1);
        grid.set_walkable(start, true);
        grid.set_walkable(end, true);
        if let Some(path) = pathfinder.find_path(&grid, start, end) {
            assert_eq!(*path.first().unwrap(), start);
            assert_eq!(*path.last().unwrap(), end);
            for pair in path.windows(2) {
                let dx = (pair[0].x - pair[1].x).abs();
                let dy = (pair[0].y - pair[1].y).abs();
                assert_eq!(dx + dy, 1);
            }
            for p in &path {
                assert!(grid.can_move_to(*p));
            }
        }
    }
}

/// On obstacle-free grids the returned path must have the exact Manhattan
/// length between the endpoints.
#[test]
fn fuzz_open_grid_optimality() {
    const N: usize = 12;
    let mut rng = StdRng::seed_from_u64(2);
    let grid = TerrainGrid::new(N, N, Terrain::Road);
    let pathfinder = AstarPathfinder::new();
    for _ in 0..500 {
        let start = Point::new(rng.gen_range(0..N) as i32, rng.gen_range(0..N) as i32);
        let end = Point::new(rng.gen_range(0..N) as i32, rng.gen_range(0..N) as i32);
        let path = pathfinder.find_path(&grid, start, end).unwrap();
        let manhattan = (start.x - end.x).abs() + (start.y - end.y).abs();
        assert_eq!(path.len() as i32, manhattan + 1);
    }
}
