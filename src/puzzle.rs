//! Grid puzzles on top of the search core: a square of value cells, a rule
//! set that prunes candidate values per cell, and the [`State`] impl that
//! ties them to the engine.

use std::fmt;

use itertools::Itertools;

pub use crate::collections::ValueSet;

use crate::square::{Coord, Square};
use crate::state::{MoveGroup, State};

pub mod shade;
pub mod sudoku;

/// A cell value. Rule sets define the meaning; values are `1..=max`.
pub type Value = i32;

/// A square of cells, blank (`None`) until a move fills them.
pub type Grid = Square<Option<Value>>;

/// A puzzle rule set: local candidate pruning for one blank cell.
///
/// Implementations prune with local deduction only; they are never asked to
/// prove global consistency. An empty candidate set must mean the cell is
/// genuinely unfillable, since the engine prunes whole branches on it.
pub trait GridRules {
    /// Candidate values for the blank cell at `coord`.
    fn candidates(&self, grid: &Grid, coord: Coord) -> ValueSet;
}

/// Combines two rule sets over the same cells: a value is a candidate only
/// if both rule sets allow it.
pub struct Paired<A, B>(
    /// First rule set.
    pub A,
    /// Second rule set.
    pub B,
);

impl<A: GridRules, B: GridRules> GridRules for Paired<A, B> {
    fn candidates(&self, grid: &Grid, coord: Coord) -> ValueSet {
        let mut set = self.0.candidates(grid, coord);
        set.intersect(&self.1.candidates(grid, coord));
        set
    }
}

/// Filling one blank cell with one value.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct GridMove {
    /// The cell being filled.
    pub coord: Coord,
    /// The value it takes.
    pub value: Value,
}

impl fmt::Debug for GridMove {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}={}", self.coord, self.value)
    }
}

/// Progress on a grid puzzle under a borrowed rule set.
pub struct GridState<'a, R: GridRules> {
    rules: &'a R,
    grid: Grid,
    moves_played: u32,
}

impl<'a, R: GridRules> GridState<'a, R> {
    /// Starts from the given grid; blank cells are the decisions to make.
    pub fn new(rules: &'a R, grid: Grid) -> Self {
        Self {
            rules,
            grid,
            moves_played: 0,
        }
    }

    /// Starts from rows of optional values. Panics if not square.
    pub fn from_rows(rules: &'a R, rows: Vec<Vec<Option<Value>>>) -> Self {
        Self::new(rules, Square::from_rows(rows))
    }

    /// The current grid.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// The filled grid, once no blank cell remains.
    pub fn values(&self) -> Option<Square<Value>> {
        if !self.is_solved() {
            return None;
        }
        let width = self.grid.width();
        let rows = (0..width)
            .map(|row| {
                (0..width)
                    .map(|col| self.grid[Coord::new(row, col)].expect("no blank cells"))
                    .collect_vec()
            })
            .collect_vec();
        Some(Square::from_rows(rows))
    }
}

impl<'a, R: GridRules> Clone for GridState<'a, R> {
    fn clone(&self) -> Self {
        Self {
            rules: self.rules,
            grid: self.grid.clone(),
            moves_played: self.moves_played,
        }
    }
}

impl<'a, R: GridRules> State for GridState<'a, R> {
    type Move = GridMove;

    fn moves_played(&self) -> u32 {
        self.moves_played
    }

    fn is_solved(&self) -> bool {
        self.grid.iter().all(Option::is_some)
    }

    fn move_groups(&self) -> Vec<MoveGroup<GridMove>> {
        self.grid
            .iter_coord()
            .filter(|(_, cell)| cell.is_none())
            .map(|(coord, _)| {
                self.rules
                    .candidates(&self.grid, coord)
                    .iter()
                    .map(|value| GridMove { coord, value })
                    .collect_vec()
            })
            .collect()
    }

    fn apply(&mut self, mv: &GridMove) {
        debug_assert!(self.grid[mv.coord].is_none());
        self.grid[mv.coord] = Some(mv.value);
        self.moves_played += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::{Grid, GridMove, GridRules, GridState, Paired, Value, ValueSet};
    use crate::square::Coord;
    use crate::state::State;

    struct AtMost(Value);

    impl GridRules for AtMost {
        fn candidates(&self, _grid: &Grid, _coord: Coord) -> ValueSet {
            ValueSet::with_all(self.0)
        }
    }

    #[test]
    fn one_group_per_blank_cell() {
        let rules = AtMost(2);
        let state = GridState::from_rows(
            &rules,
            vec![vec![Some(1), None], vec![None, Some(2)]],
        );
        let groups = state.move_groups();
        assert_eq!(2, groups.len());
        assert_eq!(
            vec![
                GridMove {
                    coord: Coord::new(0, 1),
                    value: 1
                },
                GridMove {
                    coord: Coord::new(0, 1),
                    value: 2
                },
            ],
            groups[0]
        );
    }

    #[test]
    fn paired_rules_intersect_candidates() {
        let rules = Paired(AtMost(3), AtMost(2));
        let state = GridState::from_rows(&rules, vec![vec![None]]);
        let groups = state.move_groups();
        assert_eq!(2, groups[0].len());
    }

    #[test]
    fn apply_fills_and_counts() {
        let rules = AtMost(2);
        let mut state = GridState::from_rows(&rules, vec![vec![None]]);
        assert!(!state.is_solved());
        state.apply(&GridMove {
            coord: Coord::new(0, 0),
            value: 2,
        });
        assert!(state.is_solved());
        assert_eq!(1, state.moves_played());
        assert_eq!(Some(2), state.values().map(|v| v[Coord::new(0, 0)]));
    }
}
