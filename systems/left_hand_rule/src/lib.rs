#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Wall-following navigation that keeps its left hand on the wall.

use maze_robots_core::{Direction, Position, Robot};
use maze_robots_world::Maze;
use tracing::trace;

/// Robot that prefers turning left, then going straight, then turning right.
///
/// When all three are blocked it turns around. The walk solves any maze whose
/// goals touch the wall the robot follows; a goal inside a free-standing loop
/// of wall can make it circle forever, so drivers must bound the step count.
#[derive(Debug)]
pub struct LeftHandRule<'maze> {
    maze: &'maze Maze,
    position: Position,
    facing: Direction,
}

impl<'maze> LeftHandRule<'maze> {
    /// Places a new robot on the maze's start cell facing north.
    #[must_use]
    pub fn new(maze: &'maze Maze) -> Self {
        Self {
            maze,
            position: maze.start(),
            facing: Direction::North,
        }
    }

    /// Direction the robot currently faces.
    #[must_use]
    pub fn facing(&self) -> Direction {
        self.facing
    }

    fn can_move(&self, direction: Direction) -> bool {
        self.maze.is_movable(self.position.neighbor(direction))
    }
}

impl Robot for LeftHandRule<'_> {
    fn step(&mut self) {
        if self.has_reached_goal() {
            return;
        }

        let preferences = [self.facing.left(), self.facing, self.facing.right()];
        let heading = preferences
            .into_iter()
            .find(|&direction| self.can_move(direction));

        match heading {
            Some(direction) => self.facing = direction,
            None => {
                self.facing = self.facing.opposite();
                if !self.can_move(self.facing) {
                    trace!(at = %self.position, "enclosed cell, holding position");
                    return;
                }
            }
        }

        let next = self.position.neighbor(self.facing);
        trace!(from = %self.position, to = %next, facing = ?self.facing, "following wall");
        self.position = next;
    }

    fn position(&self) -> Position {
        self.position
    }

    fn has_reached_goal(&self) -> bool {
        self.maze.is_goal(self.position)
    }

    fn is_stalled(&self) -> bool {
        !self.has_reached_goal()
            && Direction::ALL
                .into_iter()
                .all(|direction| !self.can_move(direction))
    }
}
