use super::*;
use abv_core::Utility;
use abv_tree::NodeId;
use abv_tree::Tree;
use serde::Deserialize;
use serde::Serialize;

/// The complete, ordered record of one alpha-beta run.
///
/// Produced by [`Search`] in a single pass and immutable afterwards.
/// The last step is always the root's `BACKUP`, whose value is the
/// game value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Trace {
    #[serde(rename = "trace")]
    steps: Vec<Step>,
    #[serde(rename = "gameValue")]
    value: Utility,
}

impl Trace {
    pub(crate) fn new(steps: Vec<Step>, value: Utility) -> Self {
        debug_assert!(steps.last().is_some_and(|s| s.is(Event::Backup)));
        Self { steps, value }
    }
    pub fn steps(&self) -> &[Step] {
        &self.steps
    }
    pub fn len(&self) -> usize {
        self.steps.len()
    }
    /// Traces always end in the root's backup, so this is always false.
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }
    pub fn get(&self, index: usize) -> Option<&Step> {
        self.steps.get(index)
    }
    pub fn last(&self) -> Option<&Step> {
        self.steps.last()
    }
    /// The root's backed-up value.
    pub fn value(&self) -> Utility {
        self.value
    }
    /// Nodes the search descended into, in visiting order.
    pub fn entered(&self) -> Vec<NodeId> {
        self.steps
            .iter()
            .filter(|s| s.is(Event::Enter))
            .map(|s| s.node)
            .collect()
    }
    /// Roots of every skipped subtree, in pruning order.
    pub fn pruned(&self) -> Vec<NodeId> {
        self.steps
            .iter()
            .filter(|s| s.is(Event::Prune))
            .flat_map(|s| s.pruned.iter().copied())
            .collect()
    }
    pub fn summary(&self, tree: &Tree) -> Summary {
        Summary::from((tree, self))
    }
}

impl std::fmt::Display for Trace {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.steps.iter().try_for_each(|step| writeln!(f, "{}", step))?;
        write!(f, "game value {}", self.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use abv_tree::leaf;
    use abv_tree::max;
    use abv_tree::min;

    fn textbook() -> Trace {
        let tree = Tree::try_from(max([min([leaf(3.), leaf(5.)]), min([leaf(2.), leaf(9.)])])).unwrap();
        Trace::from(&tree)
    }

    #[test]
    fn wire_form_has_trace_and_game_value() {
        let json = serde_json::to_value(textbook()).unwrap();
        assert_eq!(json["gameValue"], 3.0);
        assert_eq!(json["trace"].as_array().unwrap().len(), textbook().len());
        assert_eq!(json["trace"][0]["alpha"], "-Infinity");
    }

    #[test]
    fn wire_form_reads_back() {
        let trace = textbook();
        let json = serde_json::to_string(&trace).unwrap();
        assert_eq!(serde_json::from_str::<Trace>(&json).unwrap(), trace);
    }

    #[test]
    fn entered_and_pruned() {
        let trace = textbook();
        let entered = trace.entered().into_iter().map(u32::from).collect::<Vec<_>>();
        assert_eq!(entered, vec![0, 1, 2, 3, 4, 5]);
        assert_eq!(trace.pruned(), vec![NodeId::from(6)]);
    }

    #[test]
    fn display_ends_with_value() {
        let text = textbook().to_string();
        assert!(text.ends_with("game value 3"));
        assert_eq!(text.lines().count(), textbook().len() + 1);
    }
}
