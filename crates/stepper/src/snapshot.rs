use abv_core::Utility;
use abv_search::Event;
use abv_search::Step;
use abv_search::Trace;
use abv_tree::Kind;
use abv_tree::NodeId;
use abv_tree::Tree;
use serde::Serialize;
use std::collections::HashMap;

/// Where a node stands at some point of the search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Status {
    Unvisited,
    /// Entered but not yet backed up (on the current search path).
    Active,
    /// Leaf evaluated or internal node backed up.
    Done,
    /// Inside a subtree that a cutoff skipped.
    Pruned,
}

/// The last alpha/beta recorded at a node.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Window {
    #[serde(with = "abv_search::bound")]
    pub alpha: Utility,
    #[serde(with = "abv_search::bound")]
    pub beta: Utility,
}

/// One node as a renderer should draw it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct View {
    pub id: NodeId,
    pub kind: Kind,
    pub status: Status,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub window: Option<Window>,
    /// Running best so far at an internal node.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub best: Option<Utility>,
    /// Leaf value once evaluated, backed-up value once done.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<Utility>,
}

/// The whole tree as it looks after the first `position` steps.
///
/// Derived by folding the steps, so it is a pure function of
/// `(tree, trace, position)` and never depends on how the cursor got there.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Snapshot {
    pub position: usize,
    pub focus: Option<NodeId>,
    pub nodes: Vec<View>,
}

impl Snapshot {
    pub fn at(tree: &Tree, trace: &Trace, position: usize) -> Self {
        let position = position.min(trace.len());
        let mut nodes = tree
            .all()
            .map(|node| View {
                id: node.id(),
                kind: node.kind(),
                status: Status::Unvisited,
                window: None,
                best: None,
                value: None,
            })
            .collect::<Vec<_>>();
        let slots = nodes
            .iter()
            .enumerate()
            .map(|(i, view)| (view.id, i))
            .collect::<HashMap<_, _>>();
        let applied = &trace.steps()[..position];
        // ids missing from `tree` mean the trace came from another tree; skip them
        for step in applied {
            if let Some(slot) = slots.get(&step.node) {
                Self::apply(&mut nodes[*slot], step);
            }
            for slot in step
                .pruned
                .iter()
                .flat_map(|id| std::iter::once(*id).chain(tree.descendants(*id)))
                .filter_map(|id| slots.get(&id))
            {
                nodes[*slot].status = Status::Pruned;
            }
        }
        Self {
            position,
            focus: applied.last().map(|step| step.node),
            nodes,
        }
    }

    fn apply(view: &mut View, step: &Step) {
        view.window = Some(Window {
            alpha: step.alpha,
            beta: step.beta,
        });
        match step.event {
            Event::Enter => view.status = Status::Active,
            Event::Evaluate => {
                view.status = Status::Done;
                view.value = step.value;
            }
            Event::UpdateBound | Event::Prune => view.best = step.best,
            Event::Backup => {
                view.status = Status::Done;
                view.best = step.best;
                view.value = step.value;
            }
        }
    }

    pub fn get(&self, id: NodeId) -> Option<&View> {
        self.nodes.iter().find(|view| view.id == id)
    }
    /// Entered nodes that have not backed up yet, root first.
    pub fn path(&self) -> Vec<NodeId> {
        self.nodes
            .iter()
            .filter(|view| view.status == Status::Active)
            .map(|view| view.id)
            .collect()
    }
}
