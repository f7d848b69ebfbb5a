//! Alpha-beta search over a validated [`abv_tree::Tree`], recorded as a trace.
//!
//! The search runs exactly once per tree and appends one [`Step`] per
//! atomic event. Nothing is rendered or mutated afterwards; consumers
//! replay the [`Trace`] at whatever pace they like.
//!
//! ## Core Types
//!
//! - [`Search`] — Runs the algorithm and produces a [`Trace`]
//! - [`Step`] — Immutable record of one [`Event`] and the window around it
//! - [`Summary`] — Counts derived from a finished trace
//! - [`minimax`] — Unpruned reference value for cross-checking
pub mod bound;
mod event;
mod minimax;
mod search;
mod step;
mod summary;
mod trace;

pub use event::*;
pub use minimax::*;
pub use search::*;
pub use step::*;
pub use summary::*;
pub use trace::*;
