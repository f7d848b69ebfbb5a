use abv_core::Depth;
use abv_core::Width;
use abv_tree::Kind;
use abv_tree::RawTree;
use abv_tree::Shape;
use abv_tree::Tree;
use anyhow::Context;
use clap::Parser;
use rand::SeedableRng;
use rand::rngs::SmallRng;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about = "Step through alpha-beta pruning on a game tree", long_about = None)]
pub struct Args {
    /// JSON tree, nested (`{"id":0,"kind":"max","children":[..]}`) or flat (`{"nodes":[..]}`)
    #[arg(conflicts_with = "random")]
    pub file: Option<PathBuf>,
    /// Generate a random tree (the default when no file is given)
    #[arg(long)]
    pub random: bool,
    #[arg(long, default_value_t = abv_core::RANDOM_TREE_DEPTH)]
    pub depth: Depth,
    #[arg(long, default_value_t = abv_core::RANDOM_TREE_WIDTH)]
    pub width: Width,
    /// Kind of the random root: max or min
    #[arg(long, default_value = "max", value_parser = root)]
    pub root: Kind,
    /// Seed for a reproducible random tree
    #[arg(long)]
    pub seed: Option<u64>,
}

fn root(s: &str) -> Result<Kind, String> {
    match Kind::try_from(s) {
        Ok(Kind::Leaf) | Err(_) => Err(format!("expected max or min, got '{}'", s)),
        Ok(kind) => Ok(kind),
    }
}

impl Args {
    pub fn tree(&self) -> anyhow::Result<Tree> {
        match self.file {
            Some(ref path) => Self::load(path),
            None => Ok(self.generate()),
        }
    }
    fn load(path: &PathBuf) -> anyhow::Result<Tree> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display()))?;
        let raw = serde_json::from_str::<RawTree>(&text)
            .with_context(|| format!("parsing {}", path.display()))?;
        let tree = Tree::try_from(raw)?;
        log::info!("loaded {} nodes from {}", tree.len(), path.display());
        Ok(tree)
    }
    fn generate(&self) -> Tree {
        let shape = Shape {
            depth: self.depth,
            width: self.width,
            root: self.root,
        };
        let tree = match self.seed {
            Some(seed) => shape.generate(&mut SmallRng::seed_from_u64(seed)),
            None => shape.generate(&mut rand::rng()),
        };
        log::info!("generated {} nodes (depth {}, width {})", tree.len(), self.depth, self.width);
        tree
    }
}
