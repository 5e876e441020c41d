#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Depth-first homing navigation guided by the maze's goal-distance field.

use maze_robots_core::{Position, Robot};
use maze_robots_world::Maze;
use tracing::trace;

/// Robot that always steps toward the unvisited neighbour closest to a goal.
///
/// Every entered cell is marked visited and the route taken so far is kept on
/// a stack. When no unvisited open neighbour remains the robot pops the stack
/// and retraces one step, so the search is a depth-first traversal ordered by
/// the distance field. Visited marks only ever grow, which bounds the run by
/// twice the number of reachable cells.
#[derive(Debug)]
pub struct Homing<'maze> {
    maze: &'maze Maze,
    position: Position,
    visited: Vec<bool>,
    path: Vec<Position>,
}

impl<'maze> Homing<'maze> {
    /// Places a new robot on the maze's start cell and marks it visited.
    #[must_use]
    pub fn new(maze: &'maze Maze) -> Self {
        let position = maze.start();
        let mut visited = vec![false; maze.cell_count()];
        if let Some(index) = maze.cell_index(position) {
            visited[index] = true;
        }

        Self {
            maze,
            position,
            visited,
            path: Vec::new(),
        }
    }

    /// Cells the robot can backtrack through, oldest first.
    #[must_use]
    pub fn path(&self) -> &[Position] {
        &self.path
    }

    /// Reports whether the position has been entered at least once.
    #[must_use]
    pub fn has_visited(&self, position: Position) -> bool {
        self.maze
            .cell_index(position)
            .is_some_and(|index| self.visited[index])
    }

    /// Reports whether the search has run out of cells to explore.
    #[must_use]
    pub fn is_exhausted(&self) -> bool {
        self.path.is_empty() && self.next_position().is_none()
    }

    /// Unvisited open neighbour with the strictly lowest goal distance.
    ///
    /// Neighbours are scanned north, east, south, west; the first minimum wins.
    fn next_position(&self) -> Option<Position> {
        let mut best: Option<(Position, u32)> = None;

        for neighbor in self.position.neighbors() {
            let Some(index) = self.maze.cell_index(neighbor) else {
                continue;
            };
            if self.visited[index] || !self.maze.is_movable(neighbor) {
                continue;
            }

            let distance = self.maze.distance_to_closest_goal(neighbor);
            if best.map_or(true, |(_, lowest)| distance < lowest) {
                best = Some((neighbor, distance));
            }
        }

        best.map(|(position, _)| position)
    }
}

impl Robot for Homing<'_> {
    fn step(&mut self) {
        if self.has_reached_goal() {
            return;
        }

        if let Some(next) = self.next_position() {
            trace!(from = %self.position, to = %next, depth = self.path.len(), "advancing");
            self.path.push(self.position);
            if let Some(index) = self.maze.cell_index(next) {
                self.visited[index] = true;
            }
            self.position = next;
        } else if let Some(previous) = self.path.pop() {
            trace!(from = %self.position, to = %previous, "backtracking");
            self.position = previous;
        }
    }

    fn position(&self) -> Position {
        self.position
    }

    fn has_reached_goal(&self) -> bool {
        self.maze.is_goal(self.position)
    }

    fn is_stalled(&self) -> bool {
        !self.has_reached_goal() && self.is_exhausted()
    }
}
