//! Session hosting for the HTTP server.
//!
//! Each session owns one validated tree, the trace built from it, and a
//! cursor. Sessions are independent; the registry only guards the map.
mod error;
mod lobby;
mod session;

pub use error::*;
pub use lobby::*;
pub use session::*;
