//! Data transfer objects for API communication.
//!
//! Response bodies for the session API, serializable via `serde`. Request
//! bodies are [`abv_tree::RawTree`] itself, so there is no request module.
mod response;

pub use response::*;
