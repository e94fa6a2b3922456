#![allow(missing_docs)]
#![allow(clippy::float_cmp)]

use ndarray::array;
use pursuit::simulation::environment::Environment;
use pursuit::simulation::geometric_utils::euclidean;
use pursuit::simulation::obstacle::Obstacle;
use pursuit::simulation::params::{EnvParams, PROBE_RADIUS};

fn test_env(seed: u64) -> Environment {
    Environment::new(EnvParams::default(), seed)
}

#[test]
fn test_agents_stay_in_bounds_after_any_move() {
    let mut env = Environment::new(EnvParams::open_arena(), 7);
    env.reset().unwrap();

    // oversized and diagonal actions, including ones that overshoot the arena
    let actions = [
        array![1000.0, 0.0],
        array![0.0, -1000.0],
        array![-350.0, 275.0],
        array![2.0, 2.0],
        array![-0.1, 99999.0],
    ];

    for action in &actions {
        env.step(action, action);
        let params = env.params().clone();
        for agent in [&env.predator, &env.prey] {
            assert!(agent.pos[0] >= 0.0 && agent.pos[0] <= params.width);
            assert!(agent.pos[1] >= 0.0 && agent.pos[1] <= params.height);
        }
    }
}

#[test]
fn test_obstacles_never_touch_the_boundary() {
    for seed in 0..50 {
        let mut env = test_env(seed);
        env.reset().unwrap();

        assert_eq!(env.obstacles.len(), env.params().num_obstacles);
        for ob in &env.obstacles {
            assert!(ob.pos[0] >= ob.radius && ob.pos[0] <= env.params().width - ob.radius);
            assert!(ob.pos[1] >= ob.radius && ob.pos[1] <= env.params().height - ob.radius);
        }
    }
}

#[test]
fn test_agents_placed_clear_of_obstacles() {
    for seed in 0..50 {
        let mut env = test_env(seed);
        env.reset().unwrap();

        for agent in [&env.predator, &env.prey] {
            for ob in &env.obstacles {
                assert!(euclidean(&agent.pos, &ob.pos) >= ob.radius + PROBE_RADIUS);
            }
        }
    }
}

#[test]
fn test_reset_rejects_obstacles_larger_than_the_arena() {
    // a radius-60 obstacle cannot stay clear of the boundary of a 100x100
    // arena, so reset must fail instead of sampling forever
    let params = EnvParams {
        num_obstacles: 1,
        min_obstacle_radius: 60.0,
        max_obstacle_radius: 60.0,
        ..EnvParams::default()
    };
    let mut env = Environment::new(params, 3);
    assert!(env.reset().is_err());
}

#[test]
fn test_observation_mirror_symmetry() {
    let mut env = test_env(11);
    let (pred_obs, prey_obs) = env.reset().unwrap();

    assert_eq!(pred_obs.len(), 6);
    assert_eq!(prey_obs.len(), 6);

    // opponent-direction channels are exact negations
    assert_eq!(pred_obs[0], -prey_obs[0]);
    assert_eq!(pred_obs[1], -prey_obs[1]);

    // shared scaled distance and bias
    assert_eq!(pred_obs[2], prey_obs[2]);
    assert_eq!(pred_obs[3], 1.0);
    assert_eq!(prey_obs[3], 1.0);
}

#[test]
fn test_observation_is_idempotent() {
    let mut env = test_env(13);
    env.reset().unwrap();

    let (pred_a, prey_a) = env.observe();
    let (pred_b, prey_b) = env.observe();
    assert_eq!(pred_a, pred_b);
    assert_eq!(prey_a, prey_b);
}

#[test]
fn test_scaled_distance_channel() {
    let mut env = Environment::new(EnvParams::open_arena(), 1);
    env.place_agents((0.0, 0.0), (30.0, 0.0));

    let (pred_obs, _) = env.observe();
    assert_eq!(pred_obs[0], 1.0); // unit direction toward the prey
    assert_eq!(pred_obs[1], 0.0);
    assert_eq!(pred_obs[2], 30.0 / 150.0);
}

#[test]
fn test_zero_distance_gives_zero_direction() {
    let mut env = Environment::new(EnvParams::open_arena(), 1);
    env.place_agents((42.0, 42.0), (42.0, 42.0));

    let (pred_obs, prey_obs) = env.observe();
    assert_eq!(pred_obs[0], 0.0);
    assert_eq!(pred_obs[1], 0.0);
    assert_eq!(prey_obs[0], 0.0);
    assert_eq!(prey_obs[1], 0.0);
    assert_eq!(pred_obs[2], 0.0);
}

#[test]
fn test_no_obstacles_zeroes_obstacle_channels() {
    let mut env = Environment::new(EnvParams::open_arena(), 5);
    let (pred_obs, prey_obs) = env.reset().unwrap();

    assert_eq!(pred_obs[4], 0.0);
    assert_eq!(pred_obs[5], 0.0);
    assert_eq!(prey_obs[4], 0.0);
    assert_eq!(prey_obs[5], 0.0);
}

#[test]
fn test_capture_uses_strict_less_than() {
    let mut env = Environment::new(EnvParams::open_arena(), 1);

    // exactly at the capture radius: not captured
    env.place_agents((0.0, 0.0), (5.0, 0.0));
    let (_, info) = env.step(&array![0.0, 0.0], &array![0.0, 0.0]);
    assert_eq!(info.distance, 5.0);
    assert!(!info.captured);

    // strictly inside: captured
    env.place_agents((0.0, 0.0), (4.9, 0.0));
    let (_, info) = env.step(&array![0.0, 0.0], &array![0.0, 0.0]);
    assert!(info.captured);
}

#[test]
fn test_collision_is_a_hard_stop() {
    let mut env = Environment::new(EnvParams::open_arena(), 1);
    env.place_agents((20.0, 20.0), (90.0, 90.0));
    env.obstacles = vec![Obstacle::new(22.0, 20.0, 5.0)];

    // intended next position is the obstacle center
    let (_, info) = env.step(&array![2.0, 0.0], &array![0.0, 0.0]);

    // no partial slide: the predator did not move at all
    assert_eq!(env.predator.pos, array![20.0, 20.0]);
    assert_eq!(info.pred_vel, array![0.0, 0.0]);
}

#[test]
fn test_step_reports_committed_velocities() {
    let mut env = Environment::new(EnvParams::open_arena(), 1);
    env.place_agents((99.0, 50.0), (10.0, 10.0));

    // predator overshoots the right wall; committed displacement is clamped
    let (_, info) = env.step(&array![5.0, 0.0], &array![1.0, -1.0]);
    assert_eq!(info.pred_pos, array![100.0, 50.0]);
    assert_eq!(info.pred_vel, array![1.0, 0.0]);
    assert_eq!(info.prey_vel, array![1.0, -1.0]);
}

#[test]
fn test_nearest_obstacle_direction() {
    let mut env = Environment::new(EnvParams::open_arena(), 1);
    env.place_agents((10.0, 10.0), (90.0, 90.0));
    env.obstacles = vec![
        Obstacle::new(10.0, 30.0, 4.0),  // nearest to the predator
        Obstacle::new(80.0, 80.0, 4.0),
    ];

    let dir = env.nearest_obstacle_dir(&env.predator);
    assert!((dir[0] - 0.0).abs() < 1e-6);
    assert!((dir[1] - 1.0).abs() < 1e-6);
}

#[test]
fn test_obstacle_hide_direction() {
    let mut env = Environment::new(EnvParams::open_arena(), 1);
    env.place_agents((0.0, 50.0), (90.0, 50.0));
    env.obstacles = vec![Obstacle::new(50.0, 50.0, 6.0)];

    // direction from the predator toward the prey's nearest cover
    let dir = env.obstacle_hide_direction(&env.prey, &env.predator);
    assert!((dir[0] - 1.0).abs() < 1e-6);
    assert!((dir[1] - 0.0).abs() < 1e-6);

    // no obstacles: degenerate query returns the zero vector
    env.obstacles.clear();
    let dir = env.obstacle_hide_direction(&env.prey, &env.predator);
    assert_eq!(dir, array![0.0, 0.0]);
}
