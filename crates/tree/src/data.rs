use super::*;
use abv_core::Utility;

/// Vertex weight stored in the tree's graph.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Data {
    id: NodeId,
    kind: Kind,
    value: Option<Utility>,
}

impl Data {
    pub fn leaf(id: NodeId, value: Utility) -> Self {
        Self {
            id,
            kind: Kind::Leaf,
            value: Some(value),
        }
    }
    pub fn internal(id: NodeId, kind: Kind) -> Self {
        debug_assert!(!kind.is_leaf());
        Self {
            id,
            kind,
            value: None,
        }
    }
    pub fn id(&self) -> NodeId {
        self.id
    }
    pub fn kind(&self) -> Kind {
        self.kind
    }
    /// Static payoff. Present exactly for leaves.
    pub fn value(&self) -> Option<Utility> {
        self.value
    }
}

impl std::fmt::Display for Data {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.value {
            Some(value) => write!(f, "{} {} = {}", self.kind, self.id, value),
            None => write!(f, "{} {}", self.kind, self.id),
        }
    }
}
