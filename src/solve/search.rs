use log::debug;

use crate::error::EngineFault;
use crate::solve::tree::{NodeId, SearchTree, TreeEvent};
use crate::state::State;

/// A solved puzzle.
pub struct Solution<S> {
    /// The final state; `is_solved` holds and every move on the path from
    /// the initial state was verified legal.
    pub state: S,
    /// Number of branches explored. Zero means propagation alone solved
    /// the puzzle.
    pub guesses: u32,
}

/// Terminal outcome of a search.
pub enum SolveOutcome<S> {
    /// A solution was found.
    Solved(Solution<S>),
    /// The root was proven illegal: no legal completion exists.
    Unsolvable,
}

impl<S> SolveOutcome<S> {
    /// The solution, if one was found.
    pub fn solution(self) -> Option<Solution<S>> {
        match self {
            SolveOutcome::Solved(solution) => Some(solution),
            SolveOutcome::Unsolvable => None,
        }
    }
}

/// Solves a puzzle from its initial state.
///
/// Alternates choosing the most constrained open branch with expanding it
/// until a solution surfaces or the root is proven illegal. `Err` means the
/// rule set violated its contract, never that the puzzle has no solution.
pub fn solve<S: State>(start: S) -> Result<SolveOutcome<S>, EngineFault> {
    let (mut tree, mut event) = SearchTree::new(start)?;
    let mut guesses = 0;
    loop {
        match event {
            TreeEvent::Solved(state) => {
                debug!("solved after {} guesses", guesses);
                return Ok(SolveOutcome::Solved(Solution { state, guesses }));
            }
            TreeEvent::Unsolvable => {
                debug!("proven unsolvable after {} guesses", guesses);
                return Ok(SolveOutcome::Unsolvable);
            }
            TreeEvent::Open => (),
        }
        let (id, mv) = best_guess(&tree).ok_or(EngineFault::NoExplorableMove)?;
        guesses += 1;
        event = tree.expand(id, mv)?;
    }
}

/// The (node, move) pair whose move-group has the fewest live options among
/// all materialized nodes, stopping early at a binary choice. Traverses with
/// an explicit stack so memory tracks tree size, not search depth; ties go
/// to whichever qualifying pair the traversal meets first.
fn best_guess<S: State>(tree: &SearchTree<S>) -> Option<(NodeId, S::Move)> {
    let mut best: Option<(usize, NodeId, S::Move)> = None;
    let mut stack = vec![tree.root()];
    while let Some(id) = stack.pop() {
        let node = tree.node(id);
        stack.extend(node.children());
        if let Some((count, _, _)) = best {
            // least_options lower-bounds every group here, explorable or not
            if node.least_options() >= count {
                continue;
            }
        }
        if let Some((count, mv)) = node.best_unexplored() {
            if count == 2 {
                return Some((id, mv));
            }
            match best {
                Some((best_count, _, _)) if best_count <= count => (),
                _ => best = Some((count, id, mv)),
            }
        }
    }
    best.map(|(_, id, mv)| (id, mv))
}
