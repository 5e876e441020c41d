#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Core contracts shared across the maze robot workspace.
//!
//! This crate defines the vocabulary every other crate speaks: [`Position`]
//! values addressing grid cells, the four cardinal [`Direction`]s a robot can
//! face, and the [`Robot`] contract that navigation strategies implement and
//! drivers consume. Strategies only ever read a maze, so nothing here carries
//! mutable shared state.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Location of a single grid cell expressed as column (`x`) and row (`y`).
///
/// Coordinates are signed so that the neighbours of boundary cells can be
/// represented and rejected by bounds checks instead of wrapping around.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Position {
    x: i32,
    y: i32,
}

impl Position {
    /// Creates a new position from column and row coordinates.
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Zero-based column index.
    #[must_use]
    pub const fn x(&self) -> i32 {
        self.x
    }

    /// Zero-based row index.
    #[must_use]
    pub const fn y(&self) -> i32 {
        self.y
    }

    /// Position one row up.
    #[must_use]
    pub const fn north(self) -> Self {
        Self::new(self.x, self.y.wrapping_sub(1))
    }

    /// Position one row down.
    #[must_use]
    pub const fn south(self) -> Self {
        Self::new(self.x, self.y.wrapping_add(1))
    }

    /// Position one column right.
    #[must_use]
    pub const fn east(self) -> Self {
        Self::new(self.x.wrapping_add(1), self.y)
    }

    /// Position one column left.
    #[must_use]
    pub const fn west(self) -> Self {
        Self::new(self.x.wrapping_sub(1), self.y)
    }

    /// Adjacent position in the provided direction.
    #[must_use]
    pub const fn neighbor(self, direction: Direction) -> Self {
        match direction {
            Direction::North => self.north(),
            Direction::East => self.east(),
            Direction::South => self.south(),
            Direction::West => self.west(),
        }
    }

    /// The four adjacent positions in [`Direction::ALL`] order.
    #[must_use]
    pub const fn neighbors(self) -> [Self; 4] {
        [self.north(), self.east(), self.south(), self.west()]
    }

    /// Computes the Manhattan distance between two positions.
    #[must_use]
    pub fn manhattan_distance(self, other: Position) -> u32 {
        self.x.abs_diff(other.x) + self.y.abs_diff(other.y)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.x, self.y)
    }
}

/// Cardinal directions a robot can face or move in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    /// Movement toward decreasing row indices.
    North,
    /// Movement toward increasing column indices.
    East,
    /// Movement toward increasing row indices.
    South,
    /// Movement toward decreasing column indices.
    West,
}

impl Direction {
    /// Every direction in clockwise order starting at north.
    ///
    /// Strategies that break ties by scan order rely on this exact sequence.
    pub const ALL: [Direction; 4] = [
        Direction::North,
        Direction::East,
        Direction::South,
        Direction::West,
    ];

    /// Direction reached by turning 90 degrees counter-clockwise.
    #[must_use]
    pub const fn left(self) -> Self {
        match self {
            Direction::North => Direction::West,
            Direction::West => Direction::South,
            Direction::South => Direction::East,
            Direction::East => Direction::North,
        }
    }

    /// Direction reached by turning 90 degrees clockwise.
    #[must_use]
    pub const fn right(self) -> Self {
        match self {
            Direction::North => Direction::East,
            Direction::East => Direction::South,
            Direction::South => Direction::West,
            Direction::West => Direction::North,
        }
    }

    /// Direction reached by turning around.
    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Direction::North => Direction::South,
            Direction::East => Direction::West,
            Direction::South => Direction::North,
            Direction::West => Direction::East,
        }
    }
}

/// Contract shared by every navigation strategy.
///
/// Drivers call [`Robot::step`] repeatedly and poll [`Robot::has_reached_goal`]
/// to decide when to stop. Stepping a robot that already stands on a goal, or
/// that has nowhere left to go, leaves it where it is.
pub trait Robot {
    /// Advances the robot by a single move according to its strategy.
    fn step(&mut self);

    /// Cell the robot currently occupies.
    fn position(&self) -> Position;

    /// Reports whether the robot currently stands on a goal cell.
    fn has_reached_goal(&self) -> bool;

    /// Reports whether further calls to [`Robot::step`] can never move the robot.
    fn is_stalled(&self) -> bool {
        false
    }
}

impl<R: Robot + ?Sized> Robot for Box<R> {
    fn step(&mut self) {
        (**self).step();
    }

    fn position(&self) -> Position {
        (**self).position()
    }

    fn has_reached_goal(&self) -> bool {
        (**self).has_reached_goal()
    }

    fn is_stalled(&self) -> bool {
        (**self).is_stalled()
    }
}
