//! Alpha-Beta Explorer Binary
//!
//! Loads a tree from a JSON file (nested or flat form) or generates a
//! random one, then steps through its alpha-beta trace interactively.
//!
//! Options: [FILE], --random, --depth, --width, --root, --seed
mod args;
mod explorer;
mod query;

use args::Args;
use clap::Parser;
use explorer::Explorer;

fn main() -> anyhow::Result<()> {
    abv_core::log();
    let args = Args::parse();
    let tree = args.tree()?;
    Explorer::from(tree).run()
}
