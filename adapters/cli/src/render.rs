//! Plain-text rendering of a maze with the cells a robot passed through.

use std::collections::HashSet;

use maze_robots_core::Position;
use maze_robots_world::{Maze, MazeSymbols};

const TRAIL: char = '.';
const ROBOT: char = '@';
const OPEN: char = ' ';

/// Draws the maze row by row, marking the trail and the robot's final cell.
///
/// Start and goal markers take precedence over the trail; the robot's final
/// cell takes precedence over everything.
pub(crate) fn render(maze: &Maze, trace: &[Position], symbols: &MazeSymbols) -> String {
    let trail: HashSet<Position> = trace.iter().copied().collect();
    let robot = trace.last().copied();
    let mut out = String::with_capacity(maze.rows() * (maze.columns() + 1));

    for y in 0..maze.rows() {
        for x in 0..maze.columns() {
            let position = Position::new(x as i32, y as i32);
            let cell = if Some(position) == robot {
                ROBOT
            } else if !maze.is_movable(position) {
                symbols.wall
            } else if position == maze.start() {
                symbols.start
            } else if maze.is_goal(position) {
                symbols.goal
            } else if trail.contains(&position) {
                TRAIL
            } else {
                OPEN
            };
            out.push(cell);
        }
        out.push('\n');
    }

    out
}
