//! Errors reported by the search engine.
//!
//! A contradiction inside a branch and an unsolvable puzzle are ordinary
//! outcomes, not errors. The only error type here is [`EngineFault`], which
//! means the rule set broke its contract.

use thiserror::Error;

/// A rule-set contract violation detected by the engine.
///
/// These are programming errors in the rule set (or in the engine itself),
/// not properties of the puzzle being solved.
#[derive(Debug, Error)]
pub enum EngineFault {
    /// The rule set returned no move-groups for a state it does not
    /// consider solved, so the engine has no decision left to make.
    #[error("rule set exposed no decisions for an unsolved state after {moves_played} moves")]
    MissingDecisions {
        /// Move counter of the offending state.
        moves_played: u32,
    },
    /// The driver scanned every live node without finding a legal
    /// unexplored move while the puzzle remains open.
    #[error("no explorable move remains while the puzzle is unsolved")]
    NoExplorableMove,
}
