//! Sudoku-style rule sets.

use crate::puzzle::{Grid, GridRules, Value, ValueSet};
use crate::square::Coord;

/// Row, column, and box uniqueness over a `box_width^2` grid.
pub struct SudokuRules {
    box_width: usize,
}

impl SudokuRules {
    /// A rule set for a `box_width^2 x box_width^2` grid (3 for classic
    /// 9x9 sudoku). Panics on a box width below 2.
    pub fn new(box_width: usize) -> Self {
        assert!(box_width >= 2);
        Self { box_width }
    }

    /// Grid width this rule set expects.
    pub fn size(&self) -> usize {
        self.box_width * self.box_width
    }
}

impl GridRules for SudokuRules {
    fn candidates(&self, grid: &Grid, coord: Coord) -> ValueSet {
        let size = grid.width();
        debug_assert_eq!(self.size(), size);
        let mut set = ValueSet::with_all(size as Value);
        for i in 0..size {
            if let Some(value) = grid[Coord::new(coord.row, i)] {
                set.remove(value);
            }
            if let Some(value) = grid[Coord::new(i, coord.col)] {
                set.remove(value);
            }
        }
        let box_row = coord.row / self.box_width * self.box_width;
        let box_col = coord.col / self.box_width * self.box_width;
        for row in box_row..box_row + self.box_width {
            for col in box_col..box_col + self.box_width {
                if let Some(value) = grid[Coord::new(row, col)] {
                    set.remove(value);
                }
            }
        }
        set
    }
}

/// Uniqueness along the two main diagonals; unconstrained elsewhere.
/// Pair with [`SudokuRules`] for X-sudoku.
pub struct DiagonalRules;

impl GridRules for DiagonalRules {
    fn candidates(&self, grid: &Grid, coord: Coord) -> ValueSet {
        let size = grid.width();
        let mut set = ValueSet::with_all(size as Value);
        if coord.row == coord.col {
            for i in 0..size {
                if let Some(value) = grid[Coord::new(i, i)] {
                    set.remove(value);
                }
            }
        }
        if coord.row + coord.col == size - 1 {
            for i in 0..size {
                if let Some(value) = grid[Coord::new(i, size - 1 - i)] {
                    set.remove(value);
                }
            }
        }
        set
    }
}

#[cfg(test)]
mod tests {
    use super::{DiagonalRules, SudokuRules};
    use crate::puzzle::{GridRules, GridState};
    use crate::square::Coord;

    fn rows(values: &[&[i32]]) -> Vec<Vec<Option<i32>>> {
        values
            .iter()
            .map(|row| {
                row.iter()
                    .map(|&v| if v == 0 { None } else { Some(v) })
                    .collect()
            })
            .collect()
    }

    #[test]
    fn candidates_exclude_row_column_and_box() {
        let rules = SudokuRules::new(2);
        let state = GridState::from_rows(
            &rules,
            rows(&[
                &[0, 2, 0, 0],
                &[3, 0, 0, 0],
                &[0, 0, 0, 0],
                &[4, 0, 0, 0],
            ]),
        );
        // Row holds 2, column holds 3 and 4, box holds 2 and 3.
        let set = rules.candidates(state.grid(), Coord::new(0, 0));
        assert_eq!(vec![1], set.iter().collect::<Vec<_>>());
    }

    #[test]
    fn diagonal_rules_only_bind_on_diagonals() {
        let rules = DiagonalRules;
        let state = GridState::from_rows(
            &rules,
            rows(&[
                &[1, 0, 0, 0],
                &[0, 0, 0, 0],
                &[0, 0, 0, 0],
                &[0, 0, 0, 2],
            ]),
        );
        let on_diagonal = rules.candidates(state.grid(), Coord::new(1, 1));
        assert_eq!(vec![3, 4], on_diagonal.iter().collect::<Vec<_>>());
        let off_diagonal = rules.candidates(state.grid(), Coord::new(0, 1));
        assert_eq!(4, off_diagonal.len());
    }

    #[test]
    fn anti_diagonal_binds_too() {
        let rules = DiagonalRules;
        let state = GridState::from_rows(
            &rules,
            rows(&[
                &[0, 0, 0, 4],
                &[0, 0, 0, 0],
                &[0, 0, 0, 0],
                &[0, 0, 0, 0],
            ]),
        );
        let set = rules.candidates(state.grid(), Coord::new(3, 0));
        assert_eq!(vec![1, 2, 3], set.iter().collect::<Vec<_>>());
    }
}
