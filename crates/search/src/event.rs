use serde::Deserialize;
use serde::Serialize;

/// What happened at one step of the search.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Event {
    /// The search descended into a node with the parent's window.
    Enter,
    /// A leaf's static value was read.
    Evaluate,
    /// A child's value strictly improved the node's running best.
    UpdateBound,
    /// The window closed; the remaining children will not be visited.
    Prune,
    /// The node is finished and hands its best value to its parent.
    Backup,
}

impl Event {
    pub const fn symbol(&self) -> &'static str {
        match self {
            Self::Enter => "ENTER",
            Self::Evaluate => "EVALUATE",
            Self::UpdateBound => "UPDATE_BOUND",
            Self::Prune => "PRUNE",
            Self::Backup => "BACKUP",
        }
    }
}

impl std::fmt::Display for Event {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}
