use abv_search::Step;
use serde::Serialize;

/// Outcome of a relative cursor move.
///
/// `AtStart` and `AtEnd` are not failures: the move was a no-op because
/// the cursor already sat on that boundary.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "signal", content = "step", rename_all = "snake_case")]
pub enum Signal {
    /// The cursor moved; carries the new current step (`None` once back
    /// before the first step).
    Moved(Option<Step>),
    AtStart,
    AtEnd,
}

impl Signal {
    pub fn moved(&self) -> bool {
        matches!(self, Self::Moved(_))
    }
}

impl std::fmt::Display for Signal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Moved(Some(step)) => write!(f, "{}", step),
            Self::Moved(None) => write!(f, "(not started)"),
            Self::AtStart => write!(f, "already at the start"),
            Self::AtEnd => write!(f, "already at the end"),
        }
    }
}
