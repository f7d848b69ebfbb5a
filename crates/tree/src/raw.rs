use super::*;
use abv_core::Utility;
use serde::Deserialize;
use serde::Serialize;

/// Nested description of a node and everything below it.
///
/// This is the shape a client draws: `{ "id": 0, "kind": "max", "children": [..] }`
/// for internal nodes and `{ "id": 1, "kind": "leaf", "value": 3 }` for leaves.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawNode {
    pub id: NodeId,
    pub kind: Kind,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<RawNode>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<Utility>,
}

/// One row of the flat adjacency form. Children are referenced by id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawEntry {
    pub id: NodeId,
    pub kind: Kind,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<NodeId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<Utility>,
}

/// Untrusted tree input in either accepted form.
///
/// The flat form can describe shapes the nested form cannot (cycles,
/// shared children, orphans), which is why validation works on entries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawTree {
    Flat { nodes: Vec<RawEntry> },
    Nested(RawNode),
}

impl RawNode {
    pub fn leaf(id: u32, value: Utility) -> Self {
        Self {
            id: NodeId::from(id),
            kind: Kind::Leaf,
            children: Vec::new(),
            value: Some(value),
        }
    }
    pub fn internal(id: u32, kind: Kind, children: Vec<RawNode>) -> Self {
        Self {
            id: NodeId::from(id),
            kind,
            children,
            value: None,
        }
    }
}

impl RawTree {
    /// Preorder flattening. Nested input becomes one entry per node,
    /// with child references in declared order.
    pub fn entries(self) -> Vec<RawEntry> {
        match self {
            Self::Flat { nodes } => nodes,
            Self::Nested(root) => {
                let mut entries = Vec::new();
                let mut stack = vec![root];
                while let Some(node) = stack.pop() {
                    entries.push(RawEntry {
                        id: node.id,
                        kind: node.kind,
                        value: node.value,
                        children: node.children.iter().map(|c| c.id).collect(),
                    });
                    stack.extend(node.children.into_iter().rev());
                }
                entries
            }
        }
    }
}

impl From<RawNode> for RawTree {
    fn from(root: RawNode) -> Self {
        Self::Nested(root)
    }
}
impl From<Vec<RawEntry>> for RawTree {
    fn from(nodes: Vec<RawEntry>) -> Self {
        Self::Flat { nodes }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nested_json_parses() {
        let json = r#"{"id":0,"kind":"max","children":[{"id":1,"kind":"leaf","value":3},{"id":2,"kind":"leaf","value":5}]}"#;
        let raw = serde_json::from_str::<RawTree>(json).unwrap();
        assert!(matches!(raw, RawTree::Nested(_)));
    }

    #[test]
    fn flat_json_parses() {
        let json = r#"{"nodes":[{"id":0,"kind":"min","children":[1]},{"id":1,"kind":"leaf","value":-2.5}]}"#;
        let raw = serde_json::from_str::<RawTree>(json).unwrap();
        assert!(matches!(raw, RawTree::Flat { ref nodes } if nodes.len() == 2));
    }

    #[test]
    fn entries_are_preorder() {
        let raw = RawTree::from(RawNode::internal(
            0,
            Kind::Max,
            vec![
                RawNode::internal(1, Kind::Min, vec![RawNode::leaf(2, 1.), RawNode::leaf(3, 2.)]),
                RawNode::leaf(4, 3.),
            ],
        ));
        let ids = raw
            .entries()
            .into_iter()
            .map(|e| u32::from(e.id))
            .collect::<Vec<_>>();
        assert_eq!(ids, vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn leaves_omit_children_on_the_wire() {
        let json = serde_json::to_string(&RawNode::leaf(9, 1.)).unwrap();
        assert_eq!(json, r#"{"id":9,"kind":"leaf","value":1.0}"#);
    }
}
