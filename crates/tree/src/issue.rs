use super::*;
use serde::Serialize;

/// A single structural problem found in a [`RawTree`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "issue", rename_all = "snake_case")]
pub enum Issue {
    /// No nodes at all.
    Empty,
    /// Two entries share an id.
    DuplicateId { id: NodeId },
    /// A child reference names no entry.
    UnknownChild { parent: NodeId, child: NodeId },
    /// A node is listed as a child more than once.
    SharedChild { child: NodeId, first: NodeId, second: NodeId },
    /// A leaf lists children.
    LeafWithChildren { id: NodeId },
    /// A leaf has no static value.
    MissingValue { id: NodeId },
    /// A leaf value is NaN or infinite.
    NotFinite { id: NodeId },
    /// An internal node has no children.
    Childless { id: NodeId },
    /// An internal node carries a static value.
    UnexpectedValue { id: NodeId },
    /// Every node has a parent, so there is nowhere to start.
    NoRoot,
    /// More than one node has no parent.
    Orphan { id: NodeId, root: NodeId },
    /// The node's parent chain loops instead of reaching a root.
    Cycle { id: NodeId },
}

impl std::fmt::Display for Issue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Empty => write!(f, "tree has no nodes"),
            Self::DuplicateId { id } => write!(f, "node id {} is used more than once", id),
            Self::UnknownChild { parent, child } => {
                write!(f, "node {} lists unknown child {}", parent, child)
            }
            Self::SharedChild { child, first, second } => write!(
                f,
                "node {} is a child of both {} and {}",
                child, first, second
            ),
            Self::LeafWithChildren { id } => write!(f, "leaf {} has children", id),
            Self::MissingValue { id } => write!(f, "leaf {} has no value", id),
            Self::NotFinite { id } => write!(f, "leaf {} has a non-finite value", id),
            Self::Childless { id } => write!(f, "internal node {} has no children", id),
            Self::UnexpectedValue { id } => write!(f, "internal node {} has a static value", id),
            Self::NoRoot => write!(f, "tree has no root (every node has a parent)"),
            Self::Orphan { id, root } => {
                write!(f, "node {} is disconnected from root {}", id, root)
            }
            Self::Cycle { id } => write!(f, "node {} is part of or below a cycle", id),
        }
    }
}

/// Every [`Issue`] found in one validation pass.
///
/// Validation never stops at the first problem, so a client can fix all
/// of them before resubmitting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError(Vec<Issue>);

impl ValidationError {
    pub fn issues(&self) -> &[Issue] {
        &self.0
    }
    pub fn contains(&self, issue: &Issue) -> bool {
        self.0.contains(issue)
    }
}

impl From<Vec<Issue>> for ValidationError {
    fn from(issues: Vec<Issue>) -> Self {
        debug_assert!(!issues.is_empty());
        Self(issues)
    }
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "invalid tree ({} issues)", self.0.len())?;
        self.0.iter().try_for_each(|issue| write!(f, "; {}", issue))
    }
}

impl std::error::Error for ValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_lists_every_issue() {
        let error = ValidationError::from(vec![
            Issue::NoRoot,
            Issue::MissingValue { id: NodeId::from(4) },
        ]);
        let text = error.to_string();
        assert!(text.starts_with("invalid tree (2 issues)"));
        assert!(text.contains("leaf #4 has no value"));
    }

    #[test]
    fn serializes_with_tag() {
        let json = serde_json::to_value(Issue::Cycle { id: NodeId::from(1) }).unwrap();
        assert_eq!(json["issue"], "cycle");
        assert_eq!(json["id"], 1);
    }
}
