use abv_core::Utility;
use abv_tree::Kind;
use abv_tree::NodeId;
use abv_tree::Tree;
use std::collections::HashMap;

/// Unpruned minimax value of the whole tree.
///
/// Visits every node bottom-up, so it is the ground truth the pruned
/// search must always agree with.
pub fn minimax(tree: &Tree) -> Utility {
    // preorder reversed visits children before parents
    let mut values = HashMap::<NodeId, Utility>::with_capacity(tree.len());
    let nodes = tree.all().collect::<Vec<_>>();
    for node in nodes.into_iter().rev() {
        let children = node.children();
        let backed = children.iter().map(|c| values[&c.id()]);
        let value = match node.kind() {
            Kind::Leaf => node.value().expect("validated leaves carry values"),
            Kind::Max => backed.fold(Utility::NEG_INFINITY, Utility::max),
            Kind::Min => backed.fold(Utility::INFINITY, Utility::min),
        };
        values.insert(node.id(), value);
    }
    values[&tree.root().id()]
}
