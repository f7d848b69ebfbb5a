use super::*;
use abv_core::Arbitrary;
use abv_core::Depth;
use abv_core::RANDOM_LEAF_CHANCE;
use abv_core::RANDOM_LEAF_RANGE;
use abv_core::RANDOM_TREE_DEPTH;
use abv_core::RANDOM_TREE_WIDTH;
use abv_core::Width;
use rand::Rng;

/// Parameters for random alternating trees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Shape {
    pub depth: Depth,
    pub width: Width,
    pub root: Kind,
}

impl Default for Shape {
    fn default() -> Self {
        Self {
            depth: RANDOM_TREE_DEPTH,
            width: RANDOM_TREE_WIDTH,
            root: Kind::Max,
        }
    }
}

impl Shape {
    /// Integer-valued leaves, kinds alternating from `root`. Every
    /// internal node gets between 1 and `width` children; below the root,
    /// a node may be cut short into a leaf before reaching `depth`.
    pub fn generate<R: Rng>(&self, rng: &mut R) -> Tree {
        Tree::try_from(self.sketch(rng, self.root, 0)).expect("generated trees are well formed")
    }
    fn sketch<R: Rng>(&self, rng: &mut R, kind: Kind, depth: Depth) -> Sketch {
        let bottom = depth >= self.depth || kind.is_leaf();
        let cut = depth > 0 && rng.random_bool(RANDOM_LEAF_CHANCE);
        if bottom || cut {
            Sketch::Leaf(rng.random_range(-RANDOM_LEAF_RANGE..=RANDOM_LEAF_RANGE) as f64)
        } else {
            let n = rng.random_range(1..=self.width.max(1));
            let children = (0..n)
                .map(|_| self.sketch(rng, kind.flip(), depth + 1))
                .collect();
            Sketch::Branch(kind, children)
        }
    }
}

impl Arbitrary for Tree {
    fn random() -> Self {
        Shape {
            root: Kind::random(),
            ..Shape::default()
        }
        .generate(&mut rand::rng())
    }
}
