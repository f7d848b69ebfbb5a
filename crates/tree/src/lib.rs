//! Game trees authored by a user, validated once and immutable afterwards.
//!
//! ## Core Types
//!
//! - [`RawTree`] — Untrusted input, either nested or a flat adjacency list
//! - [`Tree`] — The validated tree, backed by a petgraph `DiGraph`
//! - [`Node`] — Cheap handle for navigating a [`Tree`]
//! - [`ValidationError`] — Every [`Issue`] found while validating a [`RawTree`]
//!
//! ## Construction
//!
//! - [`Sketch`] — Builder that assigns ids in preorder
//! - [`Shape`] — Parameters for random trees (see [`abv_core::Arbitrary`])
mod data;
mod id;
mod issue;
mod kind;
mod node;
mod random;
mod raw;
mod sketch;
mod tree;

pub use data::*;
pub use id::*;
pub use issue::*;
pub use kind::*;
pub use node::*;
pub use random::*;
pub use raw::*;
pub use sketch::*;
pub use tree::*;
