use super::*;
use abv_core::Utility;

/// Id-free tree shorthand for building trees in code.
///
/// Ids are handed out in preorder when the sketch is drawn, so
/// `max([leaf(3.), leaf(5.)])` becomes `MAX #0 → LEAF #1, LEAF #2`.
#[derive(Debug, Clone, PartialEq)]
pub enum Sketch {
    Leaf(Utility),
    Branch(Kind, Vec<Sketch>),
}

pub fn leaf(value: Utility) -> Sketch {
    Sketch::Leaf(value)
}
pub fn max<I: IntoIterator<Item = Sketch>>(children: I) -> Sketch {
    Sketch::Branch(Kind::Max, children.into_iter().collect())
}
pub fn min<I: IntoIterator<Item = Sketch>>(children: I) -> Sketch {
    Sketch::Branch(Kind::Min, children.into_iter().collect())
}

impl Sketch {
    /// Assign preorder ids starting at zero.
    pub fn draw(self) -> RawNode {
        let mut next = 0u32;
        self.label(&mut next)
    }
    fn label(self, next: &mut u32) -> RawNode {
        let id = *next;
        *next += 1;
        match self {
            Self::Leaf(value) => RawNode::leaf(id, value),
            Self::Branch(kind, children) => RawNode::internal(
                id,
                kind,
                children.into_iter().map(|c| c.label(next)).collect(),
            ),
        }
    }
}

impl TryFrom<Sketch> for Tree {
    type Error = ValidationError;
    fn try_from(sketch: Sketch) -> Result<Self, Self::Error> {
        Self::try_from(sketch.draw())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_are_preorder() {
        let raw = max([min([leaf(3.), leaf(5.)]), min([leaf(2.), leaf(9.)])]).draw();
        assert_eq!(raw.id, NodeId::from(0));
        assert_eq!(raw.children[0].id, NodeId::from(1));
        assert_eq!(raw.children[0].children[1].id, NodeId::from(3));
        assert_eq!(raw.children[1].id, NodeId::from(4));
        assert_eq!(raw.children[1].children[1].value, Some(9.));
    }

    #[test]
    fn childless_branch_fails_validation() {
        let error = Tree::try_from(max([leaf(1.), min([])])).unwrap_err();
        assert_eq!(error.issues(), &[Issue::Childless { id: NodeId::from(2) }]);
    }
}
