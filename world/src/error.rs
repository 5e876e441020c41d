//! Failures raised while constructing a maze.

use std::io;

use maze_robots_core::Position;
use thiserror::Error;

/// Errors that prevent a maze from being constructed.
#[derive(Debug, Error)]
pub enum MazeError {
    /// The grid description could not be read.
    #[error("failed to read maze description")]
    Read(#[from] io::Error),
    /// The grid description contained no rows.
    #[error("maze description is empty")]
    Empty,
    /// A row's width differed from the first row while ragged rows are rejected.
    #[error("row {row} has {found} columns, expected {expected}")]
    RaggedRow {
        /// Zero-based index of the offending row.
        row: usize,
        /// Width of the first row.
        expected: usize,
        /// Width of the offending row.
        found: usize,
    },
    /// The grid is too large to address with signed 32-bit coordinates.
    #[error("maze of {rows}x{columns} cells exceeds the addressable range")]
    TooLarge {
        /// Number of rows in the description.
        rows: usize,
        /// Number of columns in the widest row.
        columns: usize,
    },
    /// Two cell roles were configured with the same character.
    #[error("symbol {symbol:?} is assigned to more than one cell role")]
    ConflictingSymbols {
        /// Character shared between roles.
        symbol: char,
    },
    /// No start marker was present.
    #[error("maze contains no start marker {symbol:?}")]
    NoStart {
        /// Character that marks the start cell.
        symbol: char,
    },
    /// More than one start marker was present.
    #[error("maze contains more than one start marker: {first} and {second}")]
    MultipleStarts {
        /// First start marker found in row-major order.
        first: Position,
        /// Second start marker found in row-major order.
        second: Position,
    },
    /// No goal marker was present.
    #[error("maze contains no goal marker {symbol:?}")]
    NoGoal {
        /// Character that marks goal cells.
        symbol: char,
    },
}

/// Coarse classification of [`MazeError`] values.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MazeErrorKind {
    /// The description was unreadable or structurally invalid.
    Malformed,
    /// The description lacked a unique start cell.
    NoStart,
    /// The description lacked any goal cell.
    NoGoal,
}

impl MazeError {
    /// Classifies the error into the failure family it belongs to.
    #[must_use]
    pub fn kind(&self) -> MazeErrorKind {
        match self {
            MazeError::Read(_)
            | MazeError::Empty
            | MazeError::RaggedRow { .. }
            | MazeError::TooLarge { .. }
            | MazeError::ConflictingSymbols { .. } => MazeErrorKind::Malformed,
            MazeError::NoStart { .. } | MazeError::MultipleStarts { .. } => MazeErrorKind::NoStart,
            MazeError::NoGoal { .. } => MazeErrorKind::NoGoal,
        }
    }
}
