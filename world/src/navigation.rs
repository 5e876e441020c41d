//! Static goal-distance field built once per maze.

use std::collections::VecDeque;

use maze_robots_core::Position;

/// Distance reported for cells that no goal can reach.
pub const UNREACHABLE: u32 = u32::MAX;

/// Dense goal-distance grid seeded from every goal cell at once.
///
/// Distances are stored in row-major order and default to [`UNREACHABLE`] so
/// callers can distinguish blocked or disconnected cells from traversable
/// ones.
#[derive(Clone, Debug, Default)]
pub(crate) struct DistanceField {
    columns: usize,
    rows: usize,
    distances: Vec<u32>,
}

impl DistanceField {
    /// Builds the field with a multi-source breadth-first search.
    ///
    /// Every goal starts at distance zero and each expansion adds one step.
    /// Cells for which `is_blocked` returns `true` are never entered.
    pub(crate) fn build<F>(columns: usize, rows: usize, goals: &[Position], is_blocked: F) -> Self
    where
        F: Fn(usize) -> bool,
    {
        let cell_count = columns.checked_mul(rows).unwrap_or(0);
        let mut field = Self {
            columns,
            rows,
            distances: vec![UNREACHABLE; cell_count],
        };

        if cell_count == 0 {
            return field;
        }

        let mut queue = VecDeque::new();

        for &goal in goals {
            let Some(index) = field.index(goal) else {
                continue;
            };

            if is_blocked(index) || field.distances[index] == 0 {
                continue;
            }

            field.distances[index] = 0;
            queue.push_back(goal);
        }

        while let Some(cell) = queue.pop_front() {
            let Some(current_index) = field.index(cell) else {
                continue;
            };
            let current_distance = field.distances[current_index];

            if current_distance >= UNREACHABLE.saturating_sub(1) {
                continue;
            }

            let next_distance = current_distance + 1;

            for neighbor in cell.neighbors() {
                let Some(neighbor_index) = field.index(neighbor) else {
                    continue;
                };

                if is_blocked(neighbor_index) {
                    continue;
                }

                if field.distances[neighbor_index] <= next_distance {
                    continue;
                }

                field.distances[neighbor_index] = next_distance;
                queue.push_back(neighbor);
            }
        }

        field
    }

    /// Distance captured for the provided row-major cell index.
    #[must_use]
    pub(crate) fn distance(&self, index: usize) -> u32 {
        self.distances.get(index).copied().unwrap_or(UNREACHABLE)
    }

    fn index(&self, cell: Position) -> Option<usize> {
        let column = usize::try_from(cell.x()).ok()?;
        let row = usize::try_from(cell.y()).ok()?;
        if column >= self.columns || row >= self.rows {
            return None;
        }
        row.checked_mul(self.columns)?.checked_add(column)
    }
}
