use super::*;
use abv_core::Utility;
use petgraph::Direction::Incoming;
use petgraph::Direction::Outgoing;
use petgraph::graph::DiGraph;
use petgraph::graph::NodeIndex;

/// A Node is a thin wrapper around a NodeIndex and a &Graph.
/// Cheap to Copy; holding the graph reference lets it navigate
/// to parents and children on its own.
///
/// Edge weights are child ordinals, so `children()` always comes back
/// in the order the author declared them.
#[derive(Debug, Clone, Copy)]
pub struct Node<'tree> {
    index: NodeIndex,
    graph: &'tree DiGraph<Data, usize>,
}

impl<'tree> From<(NodeIndex, &'tree DiGraph<Data, usize>)> for Node<'tree> {
    fn from((index, graph): (NodeIndex, &'tree DiGraph<Data, usize>)) -> Self {
        Self { index, graph }
    }
}

impl<'tree> Node<'tree> {
    fn spawn(&self, index: NodeIndex) -> Node<'tree> {
        Self::from((index, self.graph))
    }
    pub fn index(&self) -> NodeIndex {
        self.index
    }
    pub fn data(&self) -> &'tree Data {
        &self.graph[self.index]
    }
    pub fn id(&self) -> NodeId {
        self.data().id()
    }
    pub fn kind(&self) -> Kind {
        self.data().kind()
    }
    pub fn value(&self) -> Option<Utility> {
        self.data().value()
    }
    pub fn is_leaf(&self) -> bool {
        self.kind().is_leaf()
    }

    /// Navigational methods

    pub fn parent(&self) -> Option<Node<'tree>> {
        self.graph
            .neighbors_directed(self.index, Incoming)
            .next()
            .map(|index| self.spawn(index))
    }
    pub fn children(&self) -> Vec<Node<'tree>> {
        let mut edges = self
            .graph
            .edges_directed(self.index, Outgoing)
            .map(|edge| {
                use petgraph::visit::EdgeRef;
                (*edge.weight(), edge.target())
            })
            .collect::<Vec<_>>();
        edges.sort_by_key(|(ordinal, _)| *ordinal);
        edges
            .into_iter()
            .map(|(_, index)| self.spawn(index))
            .collect()
    }
    /// Every node strictly below this one, in preorder.
    pub fn descendants(&self) -> Vec<Node<'tree>> {
        let mut found = Vec::new();
        let mut stack = self.children();
        stack.reverse();
        while let Some(node) = stack.pop() {
            found.push(node);
            stack.extend(node.children().into_iter().rev());
        }
        found
    }
    /// Edges between this node and the root.
    pub fn depth(&self) -> usize {
        std::iter::successors(self.parent(), |node| node.parent()).count()
    }
}

impl PartialEq for Node<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.index == other.index && std::ptr::eq(self.graph, other.graph)
    }
}
impl Eq for Node<'_> {}
