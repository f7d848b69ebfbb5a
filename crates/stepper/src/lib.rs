//! Navigation over a finished alpha-beta [`abv_search::Trace`].
//!
//! The trace is computed once; stepping only moves a cursor, so going
//! backwards or jumping anywhere costs the same as stepping forwards.
//!
//! - [`Stepper`] — The cursor
//! - [`Signal`] — Outcome of a relative move, including the boundary no-ops
//! - [`OutOfRange`] — The only navigation error
//! - [`Snapshot`] — Per-node state of the search at a cursor position
mod error;
mod signal;
mod snapshot;
mod stepper;

pub use error::*;
pub use signal::*;
pub use snapshot::*;
pub use stepper::*;
