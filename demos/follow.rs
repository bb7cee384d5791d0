use glam::Vec2;
use grid_nav::{AstarPathfinder, FollowState, FollowerConfig, PathFollower, Terrain, TerrainGrid};
use grid_util::grid::Grid;

// An agent chases a static target across a walled grid, ticking at 60 Hz.
// The follower re-plans on its own interval and walks waypoint to waypoint.
fn main() {
    env_logger::init();
    let mut grid: TerrainGrid = TerrainGrid::new(10, 10, Terrain::Road);
    for y in 0..8 {
        grid.set(4, y, Terrain::Wall);
    }
    grid.generate_components();
    println!("{}", grid);

    let mut follower = PathFollower::new(FollowerConfig::default(), AstarPathfinder::new());
    let target = Vec2::new(9.0, 0.0);
    let mut position = Vec2::new(0.0, 0.0);
    let dt = 1.0 / 60.0;

    for step in 0..2000 {
        position = follower.tick(&grid, position, target, dt);
        if step % 60 == 0 {
            println!(
                "t={:5.2}s position=({:.2}, {:.2}) state={:?}",
                step as f32 * dt,
                position.x,
                position.y,
                follower.state()
            );
        }
        if follower.state() == FollowState::Arrived && position.distance(target) < 0.2 {
            println!("Arrived at the target");
            break;
        }
    }
}
