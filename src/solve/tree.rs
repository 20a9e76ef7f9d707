use std::mem;

use linked_hash_map::LinkedHashMap;
use log::debug;

use crate::error::EngineFault;
use crate::solve::settle::{settle, SettleResult};
use crate::state::{MoveGroup, State};

/// Stable handle to a node in the tree arena. Freed slots are never reused,
/// so a `NodeId` held across mutations either points at the same node or at
/// a dead slot, never at a different node.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub(crate) struct NodeId(usize);

/// What exploring a move from a node turned up so far.
enum MoveOutcome {
    /// The move produced this child, not yet proven illegal.
    Child(NodeId),
    /// The move has been proven to reach a contradiction.
    Illegal,
}

type ExploredMap<M> = LinkedHashMap<M, MoveOutcome, ahash::RandomState>;

fn explored_map<M: Eq + std::hash::Hash>() -> ExploredMap<M> {
    LinkedHashMap::with_hasher(ahash::RandomState::default())
}

/// One point in the decision tree: a fully settled state plus the record of
/// which of its moves have been explored.
pub(crate) struct SearchNode<S: State> {
    state: S,
    /// Owning node and the move that produced this node; `None` at the root.
    parent: Option<(NodeId, S::Move)>,
    /// Remaining move-groups after settling. Never contains a group with
    /// exactly one live option; such a group is collapsed on the spot.
    groups: Vec<MoveGroup<S::Move>>,
    /// Legality of a move is tracked here, keyed by move identity, never on
    /// the move value itself. Insertion order doubles as traversal order.
    explored: ExploredMap<S::Move>,
    /// Minimum live-option count over all groups. Search-order hint only.
    least_options: usize,
}

impl<S: State> SearchNode<S> {
    fn is_illegal(&self, mv: &S::Move) -> bool {
        matches!(self.explored.get(mv), Some(MoveOutcome::Illegal))
    }

    fn child_of(&self, mv: &S::Move) -> Option<NodeId> {
        match self.explored.get(mv) {
            Some(&MoveOutcome::Child(child)) => Some(child),
            _ => None,
        }
    }

    fn live_moves<'a>(&'a self, group: &'a [S::Move]) -> impl Iterator<Item = &'a S::Move> {
        group.iter().filter(move |mv| !self.is_illegal(mv))
    }

    pub fn least_options(&self) -> usize {
        self.least_options
    }

    pub fn children(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.explored.values().filter_map(|outcome| match outcome {
            &MoveOutcome::Child(child) => Some(child),
            _ => None,
        })
    }

    /// The legal unexplored move belonging to the group with the fewest live
    /// options at this node, with that count. Stops scanning at a group of
    /// two live options since no group can beat it.
    pub fn best_unexplored(&self) -> Option<(usize, S::Move)> {
        let mut best: Option<(usize, &S::Move)> = None;
        for group in &self.groups {
            let live = self.live_moves(group).count();
            debug_assert!(live >= 2);
            if let Some((count, _)) = best {
                if live >= count {
                    continue;
                }
            }
            if let Some(mv) = group.iter().find(|mv| !self.explored.contains_key(mv)) {
                if live == 2 {
                    return Some((2, mv.clone()));
                }
                best = Some((live, mv));
            }
        }
        best.map(|(count, mv)| (count, mv.clone()))
    }
}

/// Outcome of a tree mutation, reported up to the driver.
pub(crate) enum TreeEvent<S> {
    /// Branches remain to explore.
    Open,
    /// A settled state with no decisions left surfaced; search is over.
    Solved(S),
    /// The root itself was proven illegal; no solution exists.
    Unsolvable,
}

/// Result of collapsing a move-group down to its lone survivor.
enum Collapse<S> {
    Stable,
    Solved(S),
    /// The survivor itself reached a contradiction, so the collapsed node
    /// is illegal too.
    NodeIllegal,
}

/// The root sentinel plus the mutable network of search nodes.
///
/// All structural rewiring (illegal-branch cascades, promotions) happens
/// through [`expand`](Self::expand); everything else reads the tree.
pub(crate) struct SearchTree<S: State> {
    nodes: Vec<Option<SearchNode<S>>>,
    root: NodeId,
}

impl<S: State> SearchTree<S> {
    /// Settles the initial state and builds the root node around it. The
    /// tree stays empty when settling alone already decides the puzzle.
    pub fn new(mut state: S) -> Result<(Self, TreeEvent<S>), EngineFault> {
        let mut tree = Self {
            nodes: Vec::new(),
            root: NodeId(0),
        };
        let event = match settle(&mut state)? {
            SettleResult::Solved => TreeEvent::Solved(state),
            SettleResult::Contradiction => TreeEvent::Unsolvable,
            SettleResult::Open {
                groups,
                least_options,
            } => {
                tree.insert(SearchNode {
                    state,
                    parent: None,
                    groups,
                    explored: explored_map(),
                    least_options,
                });
                TreeEvent::Open
            }
        };
        Ok((tree, event))
    }

    pub fn root(&self) -> NodeId {
        self.root
    }

    pub fn node(&self, id: NodeId) -> &SearchNode<S> {
        self.nodes[id.0].as_ref().expect("live node")
    }

    fn node_mut(&mut self, id: NodeId) -> &mut SearchNode<S> {
        self.nodes[id.0].as_mut().expect("live node")
    }

    fn insert(&mut self, node: SearchNode<S>) -> NodeId {
        debug_assert!(node.groups.iter().all(|group| group.len() >= 2));
        self.nodes.push(Some(node));
        NodeId(self.nodes.len() - 1)
    }

    /// Branches on `(id, mv)`: copies the node's state, plays the move, and
    /// settles. An open result materializes a child node; a contradiction
    /// flags the move illegal and cascades.
    pub fn expand(&mut self, id: NodeId, mv: S::Move) -> Result<TreeEvent<S>, EngineFault> {
        let node = self.node(id);
        debug_assert!(!node.explored.contains_key(&mv));
        let mut state = node.state.clone();
        debug!("guessing {:?} after {} moves", mv, state.moves_played());
        state.apply(&mv);
        match settle(&mut state)? {
            SettleResult::Solved => Ok(TreeEvent::Solved(state)),
            SettleResult::Contradiction => self.flag_illegal(id, mv),
            SettleResult::Open {
                groups,
                least_options,
            } => {
                let child = self.insert(SearchNode {
                    state,
                    parent: Some((id, mv.clone())),
                    groups,
                    explored: explored_map(),
                    least_options,
                });
                self.node_mut(id)
                    .explored
                    .insert(mv, MoveOutcome::Child(child));
                Ok(TreeEvent::Open)
            }
        }
    }

    /// Records that playing `mv` from node `id` reaches a contradiction,
    /// then cascades: a group left with one live option collapses onto its
    /// survivor, and a group left with none proves this node illegal too,
    /// notifying the parent the same way. Reaching the root this way proves
    /// the whole puzzle unsolvable.
    fn flag_illegal(&mut self, mut id: NodeId, mut mv: S::Move) -> Result<TreeEvent<S>, EngineFault> {
        loop {
            debug!("move {:?} is illegal", mv);
            let previous = self
                .node_mut(id)
                .explored
                .insert(mv.clone(), MoveOutcome::Illegal);
            if let Some(MoveOutcome::Child(child)) = previous {
                self.free_subtree(child);
            }

            // The scan borrows the node, so it ends before the tree is
            // mutated below.
            let (first, second) = {
                let node = self.node(id);
                let group = node
                    .groups
                    .iter()
                    .find(|group| group.contains(&mv))
                    .expect("flagged move belongs to a group");
                let mut live = node.live_moves(group).cloned();
                (live.next(), live.next())
            };
            let survivor = match (first, second) {
                (None, _) => None,
                (Some(survivor), None) => Some(survivor),
                (Some(_), Some(_)) => {
                    self.recompute_least_options(id);
                    return Ok(TreeEvent::Open);
                }
            };

            let node_illegal = match survivor {
                None => true,
                Some(survivor) => match self.collapse(id, survivor)? {
                    Collapse::Stable => return Ok(TreeEvent::Open),
                    Collapse::Solved(state) => return Ok(TreeEvent::Solved(state)),
                    Collapse::NodeIllegal => true,
                },
            };
            debug_assert!(node_illegal);

            match self.node(id).parent.clone() {
                None => {
                    debug!("root is illegal; puzzle is unsolvable");
                    self.free_subtree(id);
                    return Ok(TreeEvent::Unsolvable);
                }
                Some((parent_id, parent_move)) => {
                    id = parent_id;
                    mv = parent_move;
                }
            }
        }
    }

    /// Promotes the lone survivor of a collapsed group as if it had been
    /// forced from the start, without recomputing the node from scratch.
    fn collapse(&mut self, id: NodeId, survivor: S::Move) -> Result<Collapse<S>, EngineFault> {
        if let Some(child) = self.node(id).child_of(&survivor) {
            // Already explored: the child takes this node's place, keeping
            // all search work done in its subtree.
            debug!("promoting explored child of forced move {:?}", survivor);
            let node = self.nodes[id.0].take().expect("live node");
            for (_, outcome) in node.explored {
                if let MoveOutcome::Child(other) = outcome {
                    if other != child {
                        self.free_subtree(other);
                    }
                }
            }
            match node.parent {
                Some((parent_id, parent_move)) => {
                    self.node_mut(child).parent = Some((parent_id, parent_move.clone()));
                    let slot = self
                        .node_mut(parent_id)
                        .explored
                        .get_mut(&parent_move)
                        .expect("parent move is explored");
                    *slot = MoveOutcome::Child(child);
                }
                None => {
                    self.node_mut(child).parent = None;
                    self.root = child;
                }
            }
            return Ok(Collapse::Stable);
        }

        // Unexplored: play the survivor against this node's own state and
        // re-initialize in place. Prior explored children hang off decision
        // points that have just been recomputed, so they are freed.
        debug!("collapsing onto unexplored forced move {:?}", survivor);
        let node = self.node_mut(id);
        node.state.apply(&survivor);
        let orphans = match settle(&mut node.state)? {
            SettleResult::Solved => return Ok(Collapse::Solved(node.state.clone())),
            SettleResult::Contradiction => return Ok(Collapse::NodeIllegal),
            SettleResult::Open {
                groups,
                least_options,
            } => {
                node.groups = groups;
                node.least_options = least_options;
                mem::replace(&mut node.explored, explored_map())
            }
        };
        for (_, outcome) in orphans {
            if let MoveOutcome::Child(child) = outcome {
                self.free_subtree(child);
            }
        }
        Ok(Collapse::Stable)
    }

    fn recompute_least_options(&mut self, id: NodeId) {
        let node = self.node(id);
        let least = node
            .groups
            .iter()
            .map(|group| node.live_moves(group).count())
            .min()
            .expect("open node has groups");
        self.node_mut(id).least_options = least;
    }

    /// Frees a node and everything below it. The illegal marker that led
    /// here lives in the ancestor's explored map and persists.
    fn free_subtree(&mut self, id: NodeId) {
        let mut stack = vec![id];
        while let Some(id) = stack.pop() {
            if let Some(node) = self.nodes[id.0].take() {
                stack.extend(node.children());
            }
        }
    }
}
