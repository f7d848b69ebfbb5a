use super::*;
use abv_core::Depth;
use abv_core::Utility;
use petgraph::graph::DiGraph;
use petgraph::graph::NodeIndex;
use std::collections::HashMap;
use std::collections::HashSet;

/// A validated game tree.
///
/// Built only through [`TryFrom<RawTree>`], which rejects anything that is
/// not a single rooted tree with well-formed leaves and internal nodes.
/// Once built it is never mutated: editing means exporting with [`Tree::export`],
/// changing the raw form, and validating again.
///
/// # Structure
///
/// Internally wraps a petgraph `DiGraph`. Vertices are inserted in preorder,
/// so the root is always index 0 and `all()` walks the tree depth-first,
/// left to right. Edge weights hold each child's position under its parent.
#[derive(Debug, Clone)]
pub struct Tree {
    graph: DiGraph<Data, usize>,
    index: HashMap<NodeId, NodeIndex>,
}

impl Tree {
    /// Number of nodes in the tree.
    pub fn len(&self) -> usize {
        self.graph.node_count()
    }
    /// Validated trees always have a root, so this is always false.
    pub fn is_empty(&self) -> bool {
        self.graph.node_count() == 0
    }
    pub fn root(&self) -> Node<'_> {
        self.at(NodeIndex::new(0))
    }
    pub fn at(&self, index: NodeIndex) -> Node<'_> {
        Node::from((index, &self.graph))
    }
    pub fn get(&self, id: NodeId) -> Option<Node<'_>> {
        self.index.get(&id).map(|index| self.at(*index))
    }
    /// All nodes in preorder.
    pub fn all(&self) -> impl Iterator<Item = Node<'_>> {
        self.graph.node_indices().map(|index| self.at(index))
    }
    /// All node ids in preorder.
    pub fn ids(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.graph.node_weights().map(|data| data.id())
    }
    pub fn leaves(&self) -> impl Iterator<Item = Node<'_>> {
        self.all().filter(|node| node.is_leaf())
    }
    /// Longest root-to-leaf path, in edges.
    pub fn height(&self) -> Depth {
        self.depths().into_iter().max().unwrap_or(0)
    }
    /// Depth of every node by graph index. Preorder puts parents first.
    fn depths(&self) -> Vec<Depth> {
        let mut depths = vec![0; self.len()];
        for node in self.all() {
            if let Some(parent) = node.parent() {
                depths[node.index().index()] = depths[parent.index().index()] + 1;
            }
        }
        depths
    }

    /// Read-only traversal by id

    pub fn children(&self, id: NodeId) -> Option<Vec<NodeId>> {
        self.get(id)
            .map(|node| node.children().iter().map(|c| c.id()).collect())
    }
    pub fn kind(&self, id: NodeId) -> Option<Kind> {
        self.get(id).map(|node| node.kind())
    }
    /// Static value of a leaf. `None` for internal nodes and unknown ids.
    pub fn value(&self, id: NodeId) -> Option<Utility> {
        self.get(id).and_then(|node| node.value())
    }
    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.get(id)
            .and_then(|node| node.parent())
            .map(|node| node.id())
    }
    pub fn descendants(&self, id: NodeId) -> Vec<NodeId> {
        self.get(id)
            .map(|node| node.descendants().iter().map(|d| d.id()).collect())
            .unwrap_or_default()
    }

    /// Export back to raw form, e.g. to edit and resubmit.
    ///
    /// Nested while the tree is at most [`abv_core::NESTED_EXPORT_DEPTH`]
    /// tall, flat beyond that. Either form validates back to an equal tree.
    pub fn export(&self) -> RawTree {
        match self.height() <= abv_core::NESTED_EXPORT_DEPTH {
            true => RawTree::Nested(self.nested()),
            false => RawTree::Flat { nodes: self.flat() },
        }
    }
    fn flat(&self) -> Vec<RawEntry> {
        self.all()
            .map(|node| RawEntry {
                id: node.id(),
                kind: node.kind(),
                value: node.value(),
                children: node.children().iter().map(|c| c.id()).collect(),
            })
            .collect()
    }
    fn nested(&self) -> RawNode {
        let mut built = HashMap::<NodeIndex, RawNode>::new();
        for node in self.graph.node_indices().rev().map(|i| self.at(i)) {
            let children = node
                .children()
                .iter()
                .filter_map(|child| built.remove(&child.index()))
                .collect();
            built.insert(
                node.index(),
                RawNode {
                    id: node.id(),
                    kind: node.kind(),
                    value: node.value(),
                    children,
                },
            );
        }
        built
            .remove(&NodeIndex::new(0))
            .expect("root is built last")
    }

    /// display the Tree in a human-readable format
    fn draw(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let root = self.root();
        writeln!(f, "{}", root.data())?;
        // (node, prefix of its line, last sibling, depth)
        let mut stack = Self::fork(root, "", 1);
        while let Some((node, prefix, last, depth)) = stack.pop() {
            let stem = if last { "└" } else { "├" };
            let gaps = if last { "    " } else { "│   " };
            let below = format!("{}{}", prefix, gaps);
            writeln!(f, "{}{}── {}", prefix, stem, node.data())?;
            match node.is_leaf() {
                true => {}
                false if depth >= abv_core::DRAW_DEPTH => {
                    writeln!(f, "{}└── … {} more below", below, node.descendants().len())?
                }
                false => stack.extend(Self::fork(node, &below, depth + 1)),
            }
        }
        Ok(())
    }
    /// Children of `node` as draw entries, reversed so the first pops first.
    fn fork<'a>(node: Node<'a>, prefix: &str, depth: Depth) -> Vec<(Node<'a>, String, bool, Depth)> {
        let children = node.children();
        let n = children.len();
        children
            .into_iter()
            .enumerate()
            .rev()
            .map(|(i, child)| (child, prefix.to_string(), i + 1 == n, depth))
            .collect()
    }
}

impl std::fmt::Display for Tree {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.draw(f)
    }
}

impl TryFrom<RawNode> for Tree {
    type Error = ValidationError;
    fn try_from(root: RawNode) -> Result<Self, Self::Error> {
        Self::try_from(RawTree::from(root))
    }
}

impl TryFrom<RawTree> for Tree {
    type Error = ValidationError;
    fn try_from(raw: RawTree) -> Result<Self, Self::Error> {
        let entries = raw.entries();
        let root = Self::validate(&entries).map_err(ValidationError::from)?;
        let tree = Self::assemble(&entries, root);
        log::debug!("validated tree of {} nodes rooted at {}", tree.len(), root);
        Ok(tree)
    }
}

impl Tree {
    /// Collect every structural issue, or return the root id.
    fn validate(entries: &[RawEntry]) -> Result<NodeId, Vec<Issue>> {
        if entries.is_empty() {
            return Err(vec![Issue::Empty]);
        }
        let mut issues = Vec::new();
        let mut lookup = HashMap::<NodeId, &RawEntry>::new();
        for entry in entries {
            if lookup.contains_key(&entry.id) {
                issues.push(Issue::DuplicateId { id: entry.id });
            } else {
                lookup.insert(entry.id, entry);
            }
        }
        // first occurrence of each id, in input order
        let unique = entries
            .iter()
            .filter(|entry| std::ptr::eq(lookup[&entry.id], *entry))
            .collect::<Vec<_>>();
        let mut parents = HashMap::<NodeId, NodeId>::new();
        for entry in unique.iter() {
            let id = entry.id;
            match (entry.kind, entry.value) {
                (Kind::Leaf, None) => issues.push(Issue::MissingValue { id }),
                (Kind::Leaf, Some(v)) if !v.is_finite() => issues.push(Issue::NotFinite { id }),
                (Kind::Leaf, Some(_)) => {}
                (_, Some(_)) => issues.push(Issue::UnexpectedValue { id }),
                (_, None) => {}
            }
            match (entry.kind, entry.children.is_empty()) {
                (Kind::Leaf, false) => issues.push(Issue::LeafWithChildren { id }),
                (Kind::Max | Kind::Min, true) => issues.push(Issue::Childless { id }),
                _ => {}
            }
            for child in entry.children.iter().copied() {
                if !lookup.contains_key(&child) {
                    issues.push(Issue::UnknownChild { parent: id, child });
                } else if let Some(first) = parents.get(&child) {
                    issues.push(Issue::SharedChild {
                        child,
                        first: *first,
                        second: id,
                    });
                } else {
                    parents.insert(child, id);
                }
            }
        }
        let roots = unique
            .iter()
            .map(|entry| entry.id)
            .filter(|id| !parents.contains_key(id))
            .collect::<Vec<_>>();
        match roots.as_slice() {
            [] => issues.push(Issue::NoRoot),
            [_] => {}
            [root, rest @ ..] => issues.extend(rest.iter().map(|id| Issue::Orphan {
                id: *id,
                root: *root,
            })),
        }
        // anything unreachable from a parentless node hangs off a cycle
        let mut seen = HashSet::<NodeId>::new();
        let mut stack = roots.clone();
        while let Some(id) = stack.pop() {
            if seen.insert(id) {
                stack.extend(
                    lookup[&id]
                        .children
                        .iter()
                        .filter(|child| lookup.contains_key(*child))
                        .filter(|child| !seen.contains(*child)),
                );
            }
        }
        issues.extend(
            unique
                .iter()
                .map(|entry| entry.id)
                .filter(|id| !seen.contains(id))
                .map(|id| Issue::Cycle { id }),
        );
        let mut reported = HashSet::new();
        issues.retain(|issue| reported.insert(*issue));
        match (issues.is_empty(), roots.first()) {
            (true, Some(root)) => Ok(*root),
            _ => Err(issues),
        }
    }

    /// Insert vertices in preorder. Only called on validated entries.
    fn assemble(entries: &[RawEntry], root: NodeId) -> Self {
        let lookup = entries
            .iter()
            .map(|entry| (entry.id, entry))
            .collect::<HashMap<_, _>>();
        let mut graph = DiGraph::with_capacity(entries.len(), entries.len().saturating_sub(1));
        let mut index = HashMap::with_capacity(entries.len());
        let mut stack = vec![(root, None::<(NodeIndex, usize)>)];
        while let Some((id, from)) = stack.pop() {
            let entry = lookup[&id];
            let data = match (entry.kind, entry.value) {
                (Kind::Leaf, Some(value)) => Data::leaf(id, value),
                (kind, _) => Data::internal(id, kind),
            };
            let tail = graph.add_node(data);
            index.insert(id, tail);
            if let Some((head, ordinal)) = from {
                graph.add_edge(head, tail, ordinal);
            }
            stack.extend(
                entry
                    .children
                    .iter()
                    .enumerate()
                    .rev()
                    .map(|(ordinal, child)| (*child, Some((tail, ordinal)))),
            );
        }
        Self { graph, index }
    }
}
