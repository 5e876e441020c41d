#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Read-only maze representation shared by every navigation strategy.
//!
//! A [`Maze`] is parsed once from a character grid, validated, and then only
//! queried. Construction precomputes the goal-distance field so strategies can
//! ask for distances in constant time while they move.

mod error;
mod navigation;
mod options;

use std::{io::BufRead, str::FromStr};

use maze_robots_core::Position;
use tracing::debug;

pub use error::{MazeError, MazeErrorKind};
pub use navigation::UNREACHABLE;
pub use options::{DistanceMetric, MazeSymbols, ParseOptions, RaggedRows};

use navigation::DistanceField;

/// Rectangular grid maze with a single start and one or more goals.
#[derive(Clone, Debug)]
pub struct Maze {
    columns: usize,
    rows: usize,
    movable: Vec<bool>,
    goal_mask: Vec<bool>,
    start: Position,
    goals: Vec<Position>,
    field: DistanceField,
    metric: DistanceMetric,
}

impl Maze {
    /// Parses a maze from text using the default [`ParseOptions`].
    pub fn parse(text: &str) -> Result<Self, MazeError> {
        Self::from_lines(text.lines(), &ParseOptions::default())
    }

    /// Reads and parses a maze from a buffered reader.
    pub fn from_reader<R: BufRead>(reader: R, options: &ParseOptions) -> Result<Self, MazeError> {
        let lines = reader.lines().collect::<Result<Vec<_>, _>>()?;
        Self::from_lines(lines, options)
    }

    /// Builds a maze from individual grid rows.
    ///
    /// Trailing carriage returns and trailing blank rows are ignored. Rows
    /// narrower than the widest row are handled according to
    /// [`ParseOptions::ragged_rows`].
    pub fn from_lines<I, S>(lines: I, options: &ParseOptions) -> Result<Self, MazeError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        options.symbols.validate()?;

        let mut grid: Vec<Vec<char>> = lines
            .into_iter()
            .map(|line| line.as_ref().trim_end_matches('\r').chars().collect())
            .collect();
        while grid.last().is_some_and(Vec::is_empty) {
            let _ = grid.pop();
        }

        if grid.is_empty() {
            return Err(MazeError::Empty);
        }

        let rows = grid.len();
        let columns = grid.iter().map(Vec::len).max().unwrap_or(0);

        if options.ragged_rows == RaggedRows::Reject {
            let expected = grid[0].len();
            if let Some((row, line)) = grid
                .iter()
                .enumerate()
                .find(|(_, line)| line.len() != expected)
            {
                return Err(MazeError::RaggedRow {
                    row,
                    expected,
                    found: line.len(),
                });
            }
        }

        if i32::try_from(rows).is_err() || i32::try_from(columns).is_err() {
            return Err(MazeError::TooLarge { rows, columns });
        }

        let symbols = options.symbols;
        let cell_count = rows * columns;
        let mut movable = vec![false; cell_count];
        let mut goal_mask = vec![false; cell_count];
        let mut start = None;
        let mut goals = Vec::new();

        for (y, line) in grid.iter().enumerate() {
            for (x, &symbol) in line.iter().enumerate() {
                if symbol == symbols.wall {
                    continue;
                }

                let index = y * columns + x;
                let position = coordinate(x, y);
                movable[index] = true;

                if symbol == symbols.start {
                    if let Some(first) = start {
                        return Err(MazeError::MultipleStarts {
                            first,
                            second: position,
                        });
                    }
                    start = Some(position);
                } else if symbol == symbols.goal {
                    goal_mask[index] = true;
                    goals.push(position);
                }
            }
        }

        let start = start.ok_or(MazeError::NoStart {
            symbol: symbols.start,
        })?;
        if goals.is_empty() {
            return Err(MazeError::NoGoal {
                symbol: symbols.goal,
            });
        }

        let field = match options.metric {
            DistanceMetric::Manhattan => DistanceField::build(columns, rows, &goals, |_| false),
            DistanceMetric::Walkable => {
                DistanceField::build(columns, rows, &goals, |index| !movable[index])
            }
        };

        debug!(
            rows,
            columns,
            goals = goals.len(),
            %start,
            metric = ?options.metric,
            "maze constructed"
        );

        Ok(Self {
            columns,
            rows,
            movable,
            goal_mask,
            start,
            goals,
            field,
            metric: options.metric,
        })
    }

    /// Number of rows in the grid.
    #[must_use]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns in the grid, taken from the widest row.
    #[must_use]
    pub fn columns(&self) -> usize {
        self.columns
    }

    /// Total number of cells, which is also the length of any dense per-cell mask.
    #[must_use]
    pub fn cell_count(&self) -> usize {
        self.movable.len()
    }

    /// Cell every robot starts from.
    #[must_use]
    pub fn start(&self) -> Position {
        self.start
    }

    /// Goal cells in row-major order.
    #[must_use]
    pub fn goals(&self) -> &[Position] {
        &self.goals
    }

    /// Metric the distance field was computed with.
    #[must_use]
    pub fn metric(&self) -> DistanceMetric {
        self.metric
    }

    /// Row-major index of the position, or `None` when it lies off the grid.
    #[must_use]
    pub fn cell_index(&self, position: Position) -> Option<usize> {
        let column = usize::try_from(position.x()).ok()?;
        let row = usize::try_from(position.y()).ok()?;
        if column >= self.columns || row >= self.rows {
            return None;
        }
        Some(row * self.columns + column)
    }

    /// Reports whether a robot may occupy the position.
    ///
    /// Positions off the grid are never movable.
    #[must_use]
    pub fn is_movable(&self, position: Position) -> bool {
        self.cell_index(position)
            .is_some_and(|index| self.movable[index])
    }

    /// Reports whether the position is one of the goal cells.
    #[must_use]
    pub fn is_goal(&self, position: Position) -> bool {
        self.cell_index(position)
            .is_some_and(|index| self.goal_mask[index])
    }

    /// Precomputed distance from the position to the nearest goal.
    ///
    /// Returns [`UNREACHABLE`] for walls, off-grid positions, and cells no
    /// goal can reach under the maze's [`DistanceMetric`].
    #[must_use]
    pub fn distance_to_closest_goal(&self, position: Position) -> u32 {
        match self.cell_index(position) {
            Some(index) if self.movable[index] => self.field.distance(index),
            _ => UNREACHABLE,
        }
    }
}

impl FromStr for Maze {
    type Err = MazeError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        Self::parse(text)
    }
}

fn coordinate(x: usize, y: usize) -> Position {
    // Dimensions are checked against i32::MAX before any cell is visited.
    Position::new(x as i32, y as i32)
}

#[cfg(test)]
mod tests {
    use super::*;

    const CORRIDOR: &str = "\
************
*S         *
* ******** *
*    *   * *
*** **** * *
**     *G  *
************
";

    #[test]
    fn parses_dimensions_and_markers() {
        let maze = Maze::parse(CORRIDOR).expect("valid maze");

        assert_eq!(maze.columns(), 12);
        assert_eq!(maze.rows(), 7);
        assert_eq!(maze.start(), Position::new(1, 1));
        assert_eq!(maze.goals(), &[Position::new(8, 5)]);
        assert_eq!(maze.cell_count(), 84);
    }

    #[test]
    fn default_metric_measures_manhattan_distance() {
        let maze = Maze::parse(CORRIDOR).expect("valid maze");

        assert_eq!(maze.metric(), DistanceMetric::Manhattan);
        assert_eq!(maze.distance_to_closest_goal(Position::new(1, 1)), 11);
    }

    #[test]
    fn walkable_metric_follows_corridors() {
        let options = ParseOptions {
            metric: DistanceMetric::Walkable,
            ..ParseOptions::default()
        };
        let maze = Maze::from_lines(CORRIDOR.lines(), &options).expect("valid maze");

        assert_eq!(maze.distance_to_closest_goal(Position::new(1, 1)), 15);
        assert_eq!(maze.distance_to_closest_goal(Position::new(10, 5)), 2);
    }

    #[test]
    fn walls_report_unreachable_distance() {
        let maze = Maze::parse(CORRIDOR).expect("valid maze");

        assert_eq!(maze.distance_to_closest_goal(Position::new(0, 0)), UNREACHABLE);
        assert_eq!(maze.distance_to_closest_goal(Position::new(-3, 2)), UNREACHABLE);
    }

    #[test]
    fn short_rows_are_padded_with_walls() {
        let maze = Maze::parse("*****\n*S G*\n***\n").expect("valid maze");

        assert_eq!(maze.columns(), 5);
        assert_eq!(maze.rows(), 3);
        assert!(!maze.is_movable(Position::new(3, 2)));
        assert!(!maze.is_movable(Position::new(4, 2)));
    }

    #[test]
    fn carriage_returns_and_trailing_blank_rows_are_ignored() {
        let maze = Maze::parse("****\r\n*SG*\r\n****\r\n\r\n\n").expect("valid maze");

        assert_eq!(maze.columns(), 4);
        assert_eq!(maze.rows(), 3);
    }

    #[test]
    fn custom_symbols_are_honoured() {
        let options = ParseOptions {
            symbols: MazeSymbols {
                wall: '#',
                start: 'A',
                goal: 'B',
            },
            ..ParseOptions::default()
        };
        let maze = Maze::from_lines(["#####", "#A*B#", "#####"], &options).expect("valid maze");

        assert_eq!(maze.start(), Position::new(1, 1));
        assert!(maze.is_goal(Position::new(3, 1)));
        assert!(maze.is_movable(Position::new(2, 1)));
    }

    #[test]
    fn reader_input_matches_text_input() {
        let maze =
            Maze::from_reader(CORRIDOR.as_bytes(), &ParseOptions::default()).expect("valid maze");
        let parsed: Maze = CORRIDOR.parse().expect("valid maze");

        assert_eq!(maze.columns(), parsed.columns());
        assert_eq!(maze.start(), parsed.start());
        assert_eq!(
            maze.distance_to_closest_goal(Position::new(10, 1)),
            parsed.distance_to_closest_goal(Position::new(10, 1))
        );
    }
}
