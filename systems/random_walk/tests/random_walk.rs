use maze_robots_core::{Position, Robot};
use maze_robots_system_random_walk::RandomWalk;
use maze_robots_world::Maze;
use rand::{rngs::mock::StepRng, SeedableRng};
use rand_chacha::ChaCha8Rng;

const CORRIDOR: &str = "\
************
* S        *
* ******** *
*    *   * *
*** **** * *
**     *G  *
************
";

const STEP_LIMIT: usize = 100_000;

fn walk_trace(maze: &Maze, seed: u64) -> Vec<Position> {
    let mut robot = RandomWalk::new(maze, ChaCha8Rng::seed_from_u64(seed));
    let mut trace = vec![robot.position()];

    while !robot.has_reached_goal() && trace.len() < STEP_LIMIT {
        robot.step();
        trace.push(robot.position());
    }

    trace
}

#[test]
fn starts_on_maze_start() {
    let maze = Maze::parse(CORRIDOR).expect("valid maze");
    let robot = RandomWalk::new(&maze, ChaCha8Rng::seed_from_u64(7));

    assert_eq!(robot.position(), Position::new(2, 1));
}

#[test]
fn first_step_leaves_start() {
    let maze = Maze::parse(CORRIDOR).expect("valid maze");

    for seed in 0..32 {
        let mut robot = RandomWalk::new(&maze, ChaCha8Rng::seed_from_u64(seed));
        let initial = robot.position();

        robot.step();

        assert_ne!(robot.position(), initial, "seed {seed} did not move");
    }
}

#[test]
fn seeded_walk_reaches_goal() {
    let maze = Maze::parse(CORRIDOR).expect("valid maze");

    let trace = walk_trace(&maze, 0x5eed);

    let last = *trace.last().expect("trace is never empty");
    assert!(maze.is_goal(last), "walk stopped at {last} after {} steps", trace.len());
}

#[test]
fn every_step_moves_to_an_adjacent_open_cell() {
    let maze = Maze::parse(CORRIDOR).expect("valid maze");

    let trace = walk_trace(&maze, 42);

    for pair in trace.windows(2) {
        assert_eq!(pair[0].manhattan_distance(pair[1]), 1, "{} -> {}", pair[0], pair[1]);
        assert!(maze.is_movable(pair[1]));
    }
}

#[test]
fn deterministic_replay_under_fixed_seed() {
    let maze = Maze::parse(CORRIDOR).expect("valid maze");

    let first = walk_trace(&maze, 1234);
    let second = walk_trace(&maze, 1234);

    assert_eq!(first, second, "replay diverged between runs");
}

#[test]
fn dead_end_steps_back_one_cell() {
    let maze = Maze::parse("*******\n*G  S *\n*******").expect("valid maze");
    // A zeroed generator always takes the first candidate in north, east,
    // south, west order, which sends the robot into the east dead end.
    let mut robot = RandomWalk::new(&maze, StepRng::new(0, 0));
    let mut trace = vec![robot.position()];

    while !robot.has_reached_goal() {
        robot.step();
        trace.push(robot.position());
    }

    assert_eq!(
        trace,
        vec![
            Position::new(4, 1),
            Position::new(5, 1),
            Position::new(4, 1),
            Position::new(3, 1),
            Position::new(2, 1),
            Position::new(1, 1),
        ]
    );
}

#[test]
fn step_after_goal_is_a_no_op() {
    let maze = Maze::parse("****\n*SG*\n****").expect("valid maze");
    let mut robot = RandomWalk::new(&maze, ChaCha8Rng::seed_from_u64(3));

    robot.step();
    assert!(robot.has_reached_goal());

    robot.step();
    assert_eq!(robot.position(), Position::new(2, 1));
}
