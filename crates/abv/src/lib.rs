//! Step-by-step alpha-beta pruning over user-authored game trees.
//!
//! This facade crate re-exports all public abv crates for convenient access.
//!
//! ## Crate Organization
//!
//! ### Engine
//! - [`core`] — Type aliases, constants, and shared traits
//! - [`tree`] — Tree model, raw input forms, validation
//! - [`search`] — Alpha-beta trace builder and reference minimax
//! - [`stepper`] — Cursor and snapshots over a finished trace
//!
//! ### Application (feature `server`)
//! - [`dto`] — API response types
//! - [`hosting`] — In-memory session registry
//! - [`server`] — actix-web backend

pub use abv_core        as core;
pub use abv_tree        as tree;
pub use abv_search      as search;
pub use abv_stepper     as stepper;
#[cfg(feature = "server")]
pub use abv_dto         as dto;
#[cfg(feature = "server")]
pub use abv_hosting     as hosting;
#[cfg(feature = "server")]
pub use abv_server      as server;

// Re-export commonly used types at the root
pub use abv_core::*;
pub use abv_search::Trace;
pub use abv_stepper::Stepper;
pub use abv_tree::Tree;
