use super::*;
use abv_search::Step;
use abv_search::Trace;
use abv_tree::Tree;
use std::sync::Arc;

/// A cursor over one precomputed [`Trace`].
///
/// `position` counts how many steps have been applied: `0` means the
/// search has not started, `len` means it has finished. The current step
/// is the one at `position - 1`. The trace is shared read-only; every
/// operation here only moves the cursor.
#[derive(Debug, Clone)]
pub struct Stepper {
    trace: Arc<Trace>,
    position: usize,
}

impl From<Arc<Trace>> for Stepper {
    fn from(trace: Arc<Trace>) -> Self {
        Self { trace, position: 0 }
    }
}
impl From<Trace> for Stepper {
    fn from(trace: Trace) -> Self {
        Self::from(Arc::new(trace))
    }
}

impl Stepper {
    pub fn trace(&self) -> &Arc<Trace> {
        &self.trace
    }
    pub fn position(&self) -> usize {
        self.position
    }
    pub fn len(&self) -> usize {
        self.trace.len()
    }
    /// Traces are never empty, so this is always false.
    pub fn is_empty(&self) -> bool {
        self.trace.is_empty()
    }
    pub fn is_started(&self) -> bool {
        self.position > 0
    }
    pub fn is_complete(&self) -> bool {
        self.position == self.len()
    }
    /// The most recently applied step; `None` before the first.
    pub fn current(&self) -> Option<&Step> {
        self.position
            .checked_sub(1)
            .and_then(|index| self.trace.get(index))
    }

    pub fn forward(&mut self) -> Signal {
        if self.is_complete() {
            Signal::AtEnd
        } else {
            self.position += 1;
            Signal::Moved(self.current().cloned())
        }
    }
    pub fn backward(&mut self) -> Signal {
        if self.is_started() {
            self.position -= 1;
            Signal::Moved(self.current().cloned())
        } else {
            Signal::AtStart
        }
    }
    /// Move straight to `index`, any of `0..=len`.
    pub fn jump(&mut self, index: usize) -> Result<Option<&Step>, OutOfRange> {
        if index > self.len() {
            log::debug!("rejected jump to {} of {}", index, self.len());
            Err(OutOfRange {
                index,
                len: self.len(),
            })
        } else {
            self.position = index;
            Ok(self.current())
        }
    }
    /// Back to before the first step. Already there reports `AtStart`.
    pub fn reset(&mut self) -> Signal {
        if self.is_started() {
            self.position = 0;
            Signal::Moved(None)
        } else {
            Signal::AtStart
        }
    }
    /// Per-node state of the search at the cursor.
    pub fn snapshot(&self, tree: &Tree) -> Snapshot {
        Snapshot::at(tree, &self.trace, self.position)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use abv_core::Arbitrary;
    use abv_search::Event;
    use abv_tree::leaf;
    use abv_tree::max;
    use abv_tree::min;
    use rand::Rng;

    fn textbook() -> Stepper {
        let tree = Tree::try_from(max([min([leaf(3.), leaf(5.)]), min([leaf(2.), leaf(9.)])])).unwrap();
        Stepper::from(Trace::from(&tree))
    }

    #[test]
    fn starts_before_first_step() {
        let stepper = textbook();
        assert_eq!(stepper.position(), 0);
        assert!(stepper.current().is_none());
        assert!(!stepper.is_complete());
    }

    #[test]
    fn forward_walks_every_step() {
        let mut stepper = textbook();
        let len = stepper.len();
        for i in 0..len {
            match stepper.forward() {
                Signal::Moved(Some(step)) => assert_eq!(step.index, i),
                other => panic!("unexpected {:?}", other),
            }
        }
        assert!(stepper.is_complete());
        assert_eq!(stepper.current().unwrap().event, Event::Backup);
        assert_eq!(stepper.forward(), Signal::AtEnd);
        assert_eq!(stepper.position(), len);
    }

    #[test]
    fn backward_at_start_is_a_no_op() {
        let mut stepper = textbook();
        assert_eq!(stepper.backward(), Signal::AtStart);
        assert_eq!(stepper.position(), 0);
        stepper.forward();
        assert_eq!(stepper.backward(), Signal::Moved(None));
        assert_eq!(stepper.backward(), Signal::AtStart);
    }

    #[test]
    fn forward_then_backward_is_identity() {
        let mut stepper = Stepper::from(Trace::from(&Tree::random()));
        for k in 0..stepper.len() {
            stepper.jump(k).unwrap();
            let before = stepper.current().cloned();
            assert!(stepper.forward().moved());
            assert!(stepper.backward().moved());
            assert_eq!(stepper.current().cloned(), before);
            assert_eq!(stepper.position(), k);
        }
    }

    #[test]
    fn jump_is_path_independent() {
        let ref mut rng = rand::rng();
        let mut direct = Stepper::from(Trace::from(&Tree::random()));
        let mut wander = direct.clone();
        let len = direct.len();
        for k in 0..=len {
            for _ in 0..8 {
                let detour = rng.random_range(0..=len);
                wander.jump(detour).unwrap();
                match rng.random_range(0..3) {
                    0 => drop(wander.forward()),
                    1 => drop(wander.backward()),
                    _ => drop(wander.reset()),
                }
            }
            wander.jump(k).unwrap();
            direct.reset();
            direct.jump(k).unwrap();
            assert_eq!(wander.current(), direct.current());
        }
    }

    #[test]
    fn jump_past_end_is_rejected() {
        let mut stepper = textbook();
        stepper.jump(3).unwrap();
        let len = stepper.len();
        assert_eq!(stepper.jump(len + 1), Err(OutOfRange { index: len + 1, len }));
        assert_eq!(stepper.position(), 3);
        assert!(stepper.jump(len).is_ok());
        assert!(stepper.is_complete());
    }

    #[test]
    fn reset_returns_to_start() {
        let mut stepper = textbook();
        stepper.jump(5).unwrap();
        assert_eq!(stepper.reset(), Signal::Moved(None));
        assert_eq!(stepper.position(), 0);
        assert!(stepper.current().is_none());
        assert_eq!(stepper.reset(), Signal::AtStart);
        assert_eq!(stepper.position(), 0);
    }

    #[test]
    fn navigation_never_touches_trace() {
        let mut stepper = textbook();
        let before = stepper.trace().as_ref().clone();
        stepper.forward();
        stepper.jump(4).unwrap();
        stepper.backward();
        stepper.reset();
        assert_eq!(stepper.trace().as_ref(), &before);
    }
}
