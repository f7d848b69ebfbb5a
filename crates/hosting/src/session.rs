use abv_search::Trace;
use abv_stepper::Snapshot;
use abv_stepper::Stepper;
use abv_tree::RawTree;
use abv_tree::Tree;
use abv_tree::ValidationError;
use std::sync::Arc;

/// One user's tree together with its trace and cursor.
#[derive(Debug, Clone)]
pub struct Session {
    tree: Arc<Tree>,
    stepper: Stepper,
}

impl From<Tree> for Session {
    fn from(tree: Tree) -> Self {
        let stepper = Stepper::from(Trace::from(&tree));
        Self {
            tree: Arc::new(tree),
            stepper,
        }
    }
}

impl TryFrom<RawTree> for Session {
    type Error = ValidationError;
    fn try_from(raw: RawTree) -> Result<Self, Self::Error> {
        Tree::try_from(raw).map(Self::from)
    }
}

impl Session {
    pub fn tree(&self) -> &Arc<Tree> {
        &self.tree
    }
    pub fn trace(&self) -> &Arc<Trace> {
        self.stepper.trace()
    }
    pub fn stepper(&self) -> &Stepper {
        &self.stepper
    }
    pub fn stepper_mut(&mut self) -> &mut Stepper {
        &mut self.stepper
    }
    pub fn snapshot(&self) -> Snapshot {
        self.stepper.snapshot(&self.tree)
    }
}
