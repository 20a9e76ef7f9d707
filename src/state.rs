//! The contract between the search engine and a puzzle rule set.

use std::fmt::Debug;
use std::hash::Hash;

/// A group of mutually exclusive candidate moves for one undecided
/// decision point, e.g. all candidate digits for one blank cell.
///
/// The engine reads group sizes literally: an empty group is a hard
/// contradiction, a single-move group is forced and will be applied before
/// anything else, and a group of two or more is an open choice.
pub type MoveGroup<M> = Vec<M>;

/// A snapshot of puzzle progress, owned by one search node at a time.
///
/// `Clone` must produce a deep, independent copy; the engine clones a state
/// only when branching. Moves are only ever applied, never undone.
pub trait State: Clone {
    /// An atomic mutation of the state. Moves key the per-node record of
    /// explored branches, so equal moves must denote the same decision.
    type Move: Clone + Eq + Hash + Debug;

    /// Number of moves applied to this state since the initial position.
    fn moves_played(&self) -> u32;

    /// True iff no decision remains.
    fn is_solved(&self) -> bool;

    /// Every currently undecided decision point, one group per decision.
    ///
    /// Each group must list all moves the rule set currently believes are
    /// legal for that decision. Local pruning is encouraged, but a group
    /// reported empty must be genuinely unsatisfiable: the engine treats
    /// it as proof that this state has no completion.
    fn move_groups(&self) -> Vec<MoveGroup<Self::Move>>;

    /// Applies `mv` in place and increments the move counter.
    fn apply(&mut self, mv: &Self::Move);
}
