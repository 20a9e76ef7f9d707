use log::debug;

use crate::error::EngineFault;
use crate::state::{MoveGroup, State};

/// Result of settling a state (applying every forced move).
pub(crate) enum SettleResult<M> {
    /// No decision remains and the state reports itself solved.
    Solved,
    /// Some move-group came back empty; the state has no completion.
    Contradiction,
    /// Every remaining group has at least two options.
    Open {
        groups: Vec<MoveGroup<M>>,
        /// Minimum group size, cached as a search-order hint.
        least_options: usize,
    },
}

/// Repeatedly applies any move-group that has collapsed to a single option
/// until the state is solved, contradicted, or every group has >= 2 options.
///
/// Groups are re-enumerated after every forced application since one forced
/// move can cascade into another. Terminates because each application
/// strictly reduces the number of undecided decision points.
pub(crate) fn settle<S: State>(state: &mut S) -> Result<SettleResult<S::Move>, EngineFault> {
    loop {
        let groups = state.move_groups();
        if groups.iter().any(Vec::is_empty) {
            debug!("contradiction after {} moves", state.moves_played());
            return Ok(SettleResult::Contradiction);
        }
        if let Some(group) = groups.iter().find(|group| group.len() == 1) {
            debug!("forced move {:?}", group[0]);
            state.apply(&group[0]);
            continue;
        }
        if groups.is_empty() {
            if !state.is_solved() {
                return Err(EngineFault::MissingDecisions {
                    moves_played: state.moves_played(),
                });
            }
            debug!("settled to a solution in {} moves", state.moves_played());
            return Ok(SettleResult::Solved);
        }
        let least_options = groups.iter().map(Vec::len).min().expect("groups is non-empty");
        return Ok(SettleResult::Open {
            groups,
            least_options,
        });
    }
}
