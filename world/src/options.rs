//! Tuning knobs applied while parsing a maze description.

use serde::{Deserialize, Serialize};

use crate::MazeError;

/// Characters that assign a role to a grid cell.
///
/// Any character that is not one of these marks an ordinary movable cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MazeSymbols {
    /// Marks an impassable cell.
    pub wall: char,
    /// Marks the unique start cell.
    pub start: char,
    /// Marks a goal cell.
    pub goal: char,
}

impl Default for MazeSymbols {
    fn default() -> Self {
        Self {
            wall: '*',
            start: 'S',
            goal: 'G',
        }
    }
}

impl MazeSymbols {
    pub(crate) fn validate(&self) -> Result<(), MazeError> {
        if self.wall == self.start || self.wall == self.goal {
            return Err(MazeError::ConflictingSymbols { symbol: self.wall });
        }
        if self.start == self.goal {
            return Err(MazeError::ConflictingSymbols { symbol: self.start });
        }
        Ok(())
    }
}

/// Policy applied to rows that are narrower than the widest row.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum RaggedRows {
    /// Pad short rows on the right with wall cells.
    #[default]
    PadWithWalls,
    /// Fail construction with [`MazeError::RaggedRow`].
    Reject,
}

/// Metric used to fill the goal-distance field.
///
/// Both metrics run the same multi-source breadth-first search from every
/// goal; they differ only in whether walls stop the expansion.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DistanceMetric {
    /// Expansion crosses walls, so each cell holds the Manhattan distance to
    /// its nearest goal.
    #[default]
    Manhattan,
    /// Expansion stops at walls, so each cell holds the length of the
    /// shortest movable path to its nearest goal.
    Walkable,
}

/// Parsing configuration for [`crate::Maze`] construction.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParseOptions {
    /// Characters assigned to walls, the start, and goals.
    pub symbols: MazeSymbols,
    /// Handling of rows narrower than the widest row.
    pub ragged_rows: RaggedRows,
    /// Metric used for [`crate::Maze::distance_to_closest_goal`].
    pub metric: DistanceMetric,
}
