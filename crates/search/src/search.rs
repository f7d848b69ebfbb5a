use super::*;
use abv_core::ALPHA_INIT;
use abv_core::BETA_INIT;
use abv_core::Utility;
use abv_tree::Kind;
use abv_tree::Node;
use abv_tree::Tree;

/// One internal node whose children are being searched.
struct Frame<'tree> {
    node: Node<'tree>,
    children: Vec<Node<'tree>>,
    next: usize,
    alpha: Utility,
    beta: Utility,
    best: Utility,
}

impl<'tree> Frame<'tree> {
    fn open(node: Node<'tree>, alpha: Utility, beta: Utility) -> Self {
        let best = match node.kind() {
            Kind::Max => Utility::NEG_INFINITY,
            _ => Utility::INFINITY,
        };
        Self {
            node,
            children: node.children(),
            next: 0,
            alpha,
            beta,
            best,
        }
    }
    /// Strict improvement only: a tie keeps the earlier child's value.
    fn improves(&self, value: Utility) -> bool {
        match self.node.kind() {
            Kind::Max => value > self.best,
            _ => value < self.best,
        }
    }
    /// Moves this side's bound toward `value`, never past the other bound.
    /// A cutoff therefore shows up as `alpha == beta`.
    fn tighten(&mut self, value: Utility) {
        self.best = value;
        match self.node.kind() {
            Kind::Max => self.alpha = self.alpha.max(value).min(self.beta),
            _ => self.beta = self.beta.min(value).max(self.alpha),
        }
    }
    fn closed(&self) -> bool {
        self.alpha >= self.beta
    }
    fn remaining(&self) -> &[Node<'tree>] {
        &self.children[self.next..]
    }
}

/// Depth-first alpha-beta over a [`Tree`], children left to right.
///
/// The recursion is unrolled onto an explicit stack of frames, so tree
/// depth is bounded by memory rather than the call stack. Every event
/// is appended to the step log as it happens; the log is only handed
/// out once the root has backed up, so a partial trace never escapes.
pub struct Search<'tree> {
    tree: &'tree Tree,
    steps: Vec<Step>,
}

impl<'tree> From<&'tree Tree> for Search<'tree> {
    fn from(tree: &'tree Tree) -> Self {
        Self {
            tree,
            steps: Vec::with_capacity(tree.len() * 3),
        }
    }
}

impl<'tree> Search<'tree> {
    /// Run to completion.
    pub fn run(mut self) -> Trace {
        let root = self.tree.root();
        self.emit(Event::Enter, root, ALPHA_INIT, BETA_INIT, None, None, vec![]);
        let value = match root.value() {
            Some(value) => {
                self.emit(Event::Evaluate, root, ALPHA_INIT, BETA_INIT, Some(value), None, vec![]);
                self.emit(Event::Backup, root, ALPHA_INIT, BETA_INIT, Some(value), Some(value), vec![]);
                value
            }
            None => self.descend(Frame::open(root, ALPHA_INIT, BETA_INIT)),
        };
        log::debug!(
            "searched {} of {} nodes in {} steps, game value {}",
            self.steps.iter().filter(|s| s.is(Event::Enter)).count(),
            self.tree.len(),
            self.steps.len(),
            value
        );
        Trace::new(self.steps, value)
    }

    fn descend(&mut self, root: Frame<'tree>) -> Utility {
        let mut stack = vec![root];
        let mut returned = None::<Utility>;
        loop {
            let frame = stack.last_mut().expect("stack holds the root until it backs up");
            if let Some(value) = returned.take() {
                if frame.improves(value) {
                    frame.tighten(value);
                    let (node, alpha, beta, best) = (frame.node, frame.alpha, frame.beta, frame.best);
                    self.emit(Event::UpdateBound, node, alpha, beta, None, Some(best), vec![]);
                    if frame.closed() && !frame.remaining().is_empty() {
                        let pruned = frame.remaining().iter().map(|n| n.id()).collect();
                        self.emit(Event::Prune, node, alpha, beta, None, Some(best), pruned);
                        frame.next = frame.children.len();
                    }
                }
            }
            if let Some(child) = frame.children.get(frame.next).copied() {
                frame.next += 1;
                let (alpha, beta) = (frame.alpha, frame.beta);
                self.emit(Event::Enter, child, alpha, beta, None, None, vec![]);
                match child.value() {
                    Some(value) => {
                        self.emit(Event::Evaluate, child, alpha, beta, Some(value), None, vec![]);
                        returned = Some(value);
                    }
                    None => stack.push(Frame::open(child, alpha, beta)),
                }
            } else {
                let done = stack.pop().expect("frame was just inspected");
                let best = done.best;
                self.emit(Event::Backup, done.node, done.alpha, done.beta, Some(best), Some(best), vec![]);
                if stack.is_empty() {
                    return best;
                }
                returned = Some(best);
            }
        }
    }

    #[allow(clippy::too_many_arguments)]
    fn emit(
        &mut self,
        event: Event,
        node: Node,
        alpha: Utility,
        beta: Utility,
        value: Option<Utility>,
        best: Option<Utility>,
        pruned: Vec<abv_tree::NodeId>,
    ) {
        self.steps.push(Step {
            index: self.steps.len(),
            event,
            node: node.id(),
            alpha,
            beta,
            value,
            best,
            pruned,
        });
    }
}

impl From<&Tree> for Trace {
    fn from(tree: &Tree) -> Self {
        Search::from(tree).run()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use abv_core::Arbitrary;
    use abv_tree::NodeId;
    use abv_tree::Sketch;
    use abv_tree::leaf;
    use abv_tree::max;
    use abv_tree::min;
    use std::collections::HashSet;

    fn build(sketch: Sketch) -> (Tree, Trace) {
        let tree = Tree::try_from(sketch).unwrap();
        let trace = Trace::from(&tree);
        (tree, trace)
    }

    fn events(trace: &Trace) -> Vec<(Event, u32)> {
        trace
            .steps()
            .iter()
            .map(|s| (s.event, u32::from(s.node)))
            .collect()
    }

    #[test]
    fn single_leaf() {
        let (_, trace) = build(leaf(4.));
        assert_eq!(
            events(&trace),
            vec![(Event::Enter, 0), (Event::Evaluate, 0), (Event::Backup, 0)]
        );
        assert_eq!(trace.value(), 4.);
        assert_eq!(trace.last().and_then(|s| s.value), Some(4.));
    }

    #[test]
    fn max_over_two_leaves() {
        let (_, trace) = build(max([leaf(3.), leaf(5.)]));
        use Event::*;
        assert_eq!(
            events(&trace),
            vec![
                (Enter, 0),
                (Enter, 1),
                (Evaluate, 1),
                (UpdateBound, 0),
                (Enter, 2),
                (Evaluate, 2),
                (UpdateBound, 0),
                (Backup, 0),
            ]
        );
        let updates = trace
            .steps()
            .iter()
            .filter(|s| s.is(UpdateBound))
            .map(|s| s.alpha)
            .collect::<Vec<_>>();
        assert_eq!(updates, vec![3., 5.]);
        assert_eq!(trace.value(), 5.);
        assert!(trace.steps().iter().all(|s| !s.is(Prune)));
    }

    #[test]
    fn textbook_cutoff() {
        let (_, trace) = build(max([min([leaf(3.), leaf(5.)]), min([leaf(2.), leaf(9.)])]));
        let prunes = trace
            .steps()
            .iter()
            .filter(|s| s.is(Event::Prune))
            .collect::<Vec<_>>();
        assert_eq!(prunes.len(), 1);
        assert_eq!(prunes[0].node, NodeId::from(4));
        assert_eq!(prunes[0].pruned, vec![NodeId::from(6)]);
        assert_eq!(prunes[0].alpha, 3.);
        assert_eq!(prunes[0].beta, 3.);
        assert_eq!(prunes[0].best, Some(2.));
        let backup = trace
            .steps()
            .iter()
            .find(|s| s.is(Event::Backup) && s.node == NodeId::from(4))
            .unwrap();
        assert_eq!(backup.value, Some(2.));
        let root_updates = trace
            .steps()
            .iter()
            .filter(|s| s.is(Event::UpdateBound) && s.node == NodeId::from(0))
            .count();
        assert_eq!(root_updates, 1);
        assert_eq!(trace.value(), 3.);
        assert!(!trace.entered().contains(&NodeId::from(6)));
    }

    #[test]
    fn enter_inherits_parent_window() {
        let (_, trace) = build(max([min([leaf(3.), leaf(5.)]), min([leaf(2.), leaf(9.)])]));
        let enter = trace
            .steps()
            .iter()
            .find(|s| s.is(Event::Enter) && s.node == NodeId::from(4))
            .unwrap();
        assert_eq!((enter.alpha, enter.beta), (3., Utility::INFINITY));
        let second = trace
            .steps()
            .iter()
            .find(|s| s.is(Event::Enter) && s.node == NodeId::from(3))
            .unwrap();
        assert_eq!((second.alpha, second.beta), (Utility::NEG_INFINITY, 3.));
    }

    #[test]
    fn raised_alpha_stops_at_inherited_beta() {
        let (_, trace) = build(min([leaf(2.), max([leaf(5.), leaf(1.)])]));
        let update = trace
            .steps()
            .iter()
            .find(|s| s.is(Event::UpdateBound) && s.node == NodeId::from(2))
            .unwrap();
        assert_eq!((update.alpha, update.beta), (2., 2.));
        assert_eq!(update.best, Some(5.));
        assert_eq!(trace.value(), 2.);
    }

    #[test]
    fn windows_never_invert() {
        for _ in 0..512 {
            let trace = Trace::from(&Tree::random());
            for step in trace.steps() {
                assert!(step.alpha <= step.beta, "{}", step);
            }
        }
    }

    #[test]
    fn ties_do_not_update() {
        let (_, trace) = build(max([leaf(4.), leaf(4.), leaf(1.)]));
        let updates = trace
            .steps()
            .iter()
            .filter(|s| s.is(Event::UpdateBound))
            .count();
        assert_eq!(updates, 1);
        assert_eq!(trace.value(), 4.);
    }

    #[test]
    fn tie_with_parent_bound_still_prunes() {
        // MIN child ties the MAX root's alpha: alpha >= beta closes the window
        let (_, trace) = build(max([leaf(3.), min([leaf(3.), leaf(8.)])]));
        let prune = trace.steps().iter().find(|s| s.is(Event::Prune)).unwrap();
        assert_eq!(prune.node, NodeId::from(2));
        assert_eq!(prune.pruned, vec![NodeId::from(4)]);
        assert_eq!(trace.value(), 3.);
    }

    #[test]
    fn no_prune_when_last_child_closes_window() {
        let (_, trace) = build(max([leaf(5.), min([leaf(7.), leaf(1.)])]));
        assert!(trace.steps().iter().all(|s| !s.is(Event::Prune)));
        assert_eq!(trace.value(), 5.);
    }

    #[test]
    fn kinds_need_not_alternate() {
        let (_, trace) = build(max([max([leaf(1.), leaf(6.)]), max([leaf(2.)])]));
        assert_eq!(trace.value(), 6.);
        let (_, trace) = build(min([min([leaf(4.), leaf(-2.)]), leaf(0.)]));
        assert_eq!(trace.value(), -2.);
    }

    #[test]
    fn indices_are_sequential() {
        let trace = Trace::from(&Tree::random());
        assert!(trace.steps().iter().enumerate().all(|(i, s)| s.index == i));
        assert!(trace.last().unwrap().is(Event::Backup));
    }

    #[test]
    fn pruning_never_changes_value() {
        for _ in 0..512 {
            let tree = Tree::random();
            assert_eq!(Trace::from(&tree).value(), minimax(&tree));
        }
    }

    #[test]
    fn pruned_subtrees_are_never_entered() {
        for _ in 0..512 {
            let tree = Tree::random();
            let trace = Trace::from(&tree);
            let entered = trace.entered().into_iter().collect::<HashSet<_>>();
            for id in trace.pruned() {
                assert!(!entered.contains(&id));
                for below in tree.descendants(id) {
                    assert!(!entered.contains(&below));
                }
            }
        }
    }

    #[test]
    fn every_node_is_entered_or_pruned() {
        for _ in 0..128 {
            let tree = Tree::random();
            let trace = Trace::from(&tree);
            let pruned = trace
                .pruned()
                .into_iter()
                .flat_map(|id| std::iter::once(id).chain(tree.descendants(id)))
                .count();
            assert_eq!(trace.entered().len() + pruned, tree.len());
        }
    }

    #[test]
    fn deterministic() {
        let tree = Tree::random();
        assert_eq!(Trace::from(&tree), Trace::from(&tree));
    }

    #[test]
    fn deep_chains_do_not_overflow() {
        use abv_tree::RawEntry;
        use abv_tree::RawTree;
        let n = 100_000u32;
        let chain = (0..n)
            .map(|i| RawEntry {
                id: NodeId::from(i),
                kind: if i + 1 == n {
                    Kind::Leaf
                } else if i % 2 == 0 {
                    Kind::Max
                } else {
                    Kind::Min
                },
                children: if i + 1 == n { vec![] } else { vec![NodeId::from(i + 1)] },
                value: if i + 1 == n { Some(1.) } else { None },
            })
            .collect::<Vec<_>>();
        let tree = Tree::try_from(RawTree::from(chain)).unwrap();
        let trace = Trace::from(&tree);
        assert_eq!(trace.value(), 1.);
        assert_eq!(trace.entered().len(), n as usize);
    }
}
