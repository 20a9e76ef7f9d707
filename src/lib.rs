//! Solve grid logic puzzles (Sudoku, shading puzzles, composites) by
//! combining forced-move propagation with a memoizing backtracking search
//! over a lazily-built decision tree.
//!
//! The engine is domain-agnostic: puzzle rules are supplied through the
//! [`State`](state::State) contract. [`solve`](solve::solve) drives the
//! search to either a solution or a proof that no solution exists.

#![warn(missing_docs)]

pub mod error;
pub mod puzzle;
pub mod solve;
pub mod square;
pub mod state;

mod collections;
