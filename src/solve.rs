//! The search core: forced-move propagation, the memoizing search tree,
//! and the exploration driver.

pub use self::search::{solve, Solution, SolveOutcome};

mod search;
mod settle;
mod tree;

#[cfg(test)]
pub(crate) mod testing {
    use crate::state::{MoveGroup, State};

    /// A row of cells with per-cell candidate menus and an all-different
    /// rule. Small enough to trace by hand, rich enough to produce forced
    /// cascades, contradictions, and open branches on demand.
    #[derive(Clone, Debug, PartialEq)]
    pub(crate) struct MenuRow {
        cells: Vec<Option<i32>>,
        menus: Vec<Vec<i32>>,
        moves_played: u32,
    }

    impl MenuRow {
        pub fn new(menus: Vec<Vec<i32>>) -> Self {
            Self {
                cells: vec![None; menus.len()],
                menus,
                moves_played: 0,
            }
        }

        pub fn cells(&self) -> &[Option<i32>] {
            &self.cells
        }
    }

    impl State for MenuRow {
        type Move = (usize, i32);

        fn moves_played(&self) -> u32 {
            self.moves_played
        }

        fn is_solved(&self) -> bool {
            self.cells.iter().all(Option::is_some)
        }

        fn move_groups(&self) -> Vec<MoveGroup<(usize, i32)>> {
            self.cells
                .iter()
                .enumerate()
                .filter(|(_, cell)| cell.is_none())
                .map(|(i, _)| {
                    self.menus[i]
                        .iter()
                        .filter(|&&v| !self.cells.contains(&Some(v)))
                        .map(|&v| (i, v))
                        .collect()
                })
                .collect()
        }

        fn apply(&mut self, &(i, v): &(usize, i32)) {
            assert!(self.cells[i].is_none());
            self.cells[i] = Some(v);
            self.moves_played += 1;
        }
    }

    /// Breaks the rule-set contract: claims to be unsolved but exposes no
    /// decisions.
    #[derive(Clone, Debug)]
    pub(crate) struct NoDecisions;

    impl State for NoDecisions {
        type Move = ();

        fn moves_played(&self) -> u32 {
            0
        }

        fn is_solved(&self) -> bool {
            false
        }

        fn move_groups(&self) -> Vec<MoveGroup<()>> {
            Vec::new()
        }

        fn apply(&mut self, _mv: &()) {
            unreachable!()
        }
    }
}
