#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Random-walk navigation that avoids reversing unless it is cornered.

use maze_robots_core::{Position, Robot};
use maze_robots_world::Maze;
use rand::Rng;
use tracing::trace;

/// Robot that wanders by picking a random open neighbour at every step.
///
/// The cell it just left is excluded from the draw, so the walk only reverses
/// at dead ends. Randomness comes from the injected generator, which makes
/// runs reproducible under a seeded RNG.
#[derive(Debug)]
pub struct RandomWalk<'maze, R> {
    maze: &'maze Maze,
    position: Position,
    previous: Position,
    rng: R,
}

impl<'maze, R: Rng> RandomWalk<'maze, R> {
    /// Places a new robot on the maze's start cell.
    #[must_use]
    pub fn new(maze: &'maze Maze, rng: R) -> Self {
        let start = maze.start();
        Self {
            maze,
            position: start,
            previous: start,
            rng,
        }
    }

    /// Cell the robot occupied before its most recent move.
    #[must_use]
    pub fn previous_position(&self) -> Position {
        self.previous
    }

    fn forward_candidates(&self) -> ([Position; 4], usize) {
        let mut candidates = [self.position; 4];
        let mut count = 0;

        for neighbor in self.position.neighbors() {
            if neighbor != self.previous && self.maze.is_movable(neighbor) {
                candidates[count] = neighbor;
                count += 1;
            }
        }

        (candidates, count)
    }
}

impl<R: Rng> Robot for RandomWalk<'_, R> {
    fn step(&mut self) {
        if self.has_reached_goal() {
            return;
        }

        let (candidates, count) = self.forward_candidates();
        if count == 0 {
            trace!(from = %self.position, to = %self.previous, "dead end, stepping back");
            std::mem::swap(&mut self.position, &mut self.previous);
            return;
        }

        let chosen = candidates[self.rng.gen_range(0..count)];
        trace!(from = %self.position, to = %chosen, options = count, "random step");
        self.previous = self.position;
        self.position = chosen;
    }

    fn position(&self) -> Position {
        self.position
    }

    fn has_reached_goal(&self) -> bool {
        self.maze.is_goal(self.position)
    }

    fn is_stalled(&self) -> bool {
        !self.has_reached_goal()
            && self
                .position
                .neighbors()
                .into_iter()
                .all(|neighbor| !self.maze.is_movable(neighbor))
    }
}
