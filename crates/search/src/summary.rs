use super::*;
use abv_core::Utility;
use abv_tree::Tree;
use serde::Serialize;

/// Counts derived from a finished [`Trace`] and the [`Tree`] it ran on.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Summary {
    pub nodes: usize,
    pub steps: usize,
    pub entered: usize,
    pub evaluated: usize,
    pub updates: usize,
    pub cutoffs: usize,
    /// Nodes never entered because an ancestor (or they) were pruned.
    pub skipped: usize,
    pub value: Utility,
}

impl From<(&Tree, &Trace)> for Summary {
    fn from((tree, trace): (&Tree, &Trace)) -> Self {
        let count = |event: Event| trace.steps().iter().filter(|s| s.is(event)).count();
        let entered = count(Event::Enter);
        Self {
            nodes: tree.len(),
            steps: trace.len(),
            entered,
            evaluated: count(Event::Evaluate),
            updates: count(Event::UpdateBound),
            cutoffs: count(Event::Prune),
            skipped: tree.len().saturating_sub(entered),
            value: trace.value(),
        }
    }
}

impl std::fmt::Display for Summary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "nodes      {}", self.nodes)?;
        writeln!(f, "steps      {}", self.steps)?;
        writeln!(f, "entered    {}", self.entered)?;
        writeln!(f, "evaluated  {}", self.evaluated)?;
        writeln!(f, "updates    {}", self.updates)?;
        writeln!(f, "cutoffs    {}", self.cutoffs)?;
        writeln!(f, "skipped    {}", self.skipped)?;
        write!(f, "value      {}", self.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use abv_tree::leaf;
    use abv_tree::max;
    use abv_tree::min;

    #[test]
    fn textbook_counts() {
        let tree = Tree::try_from(max([min([leaf(3.), leaf(5.)]), min([leaf(2.), leaf(9.)])])).unwrap();
        let summary = Trace::from(&tree).summary(&tree);
        assert_eq!(summary.nodes, 7);
        assert_eq!(summary.entered, 6);
        assert_eq!(summary.evaluated, 3);
        assert_eq!(summary.cutoffs, 1);
        assert_eq!(summary.skipped, 1);
        assert_eq!(summary.updates, 3);
        assert_eq!(summary.value, 3.);
    }
}
