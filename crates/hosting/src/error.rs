use super::Session;
use abv_core::ID;
use abv_stepper::OutOfRange;
use abv_tree::ValidationError;

/// Everything a session request can fail with.
#[derive(Debug)]
pub enum SessionError {
    Invalid(ValidationError),
    NotFound(ID<Session>),
    /// The registry already holds its maximum number of sessions.
    Full(usize),
    OutOfRange(OutOfRange),
}

impl From<ValidationError> for SessionError {
    fn from(e: ValidationError) -> Self {
        Self::Invalid(e)
    }
}
impl From<OutOfRange> for SessionError {
    fn from(e: OutOfRange) -> Self {
        Self::OutOfRange(e)
    }
}

impl std::fmt::Display for SessionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Invalid(e) => write!(f, "{}", e),
            Self::NotFound(id) => write!(f, "session {} not found", id),
            Self::Full(cap) => write!(f, "session limit of {} reached", cap),
            Self::OutOfRange(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for SessionError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Invalid(e) => Some(e),
            Self::OutOfRange(e) => Some(e),
            _ => None,
        }
    }
}
