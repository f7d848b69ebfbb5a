use abv_core::Arbitrary;
use serde::Deserialize;
use serde::Serialize;

/// The role a node plays in the search.
///
/// Internal nodes are either maximizing or minimizing; leaves carry a
/// static payoff. Kinds usually alternate by depth, but nothing in the
/// workspace relies on that.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Kind {
    #[serde(alias = "MAX", alias = "Max")]
    Max,
    #[serde(alias = "MIN", alias = "Min")]
    Min,
    #[serde(alias = "LEAF", alias = "Leaf")]
    Leaf,
}

impl Kind {
    pub const fn is_leaf(&self) -> bool {
        matches!(self, Self::Leaf)
    }
    /// The opposing side. Leaves have no side and map to themselves.
    pub const fn flip(&self) -> Self {
        match self {
            Self::Max => Self::Min,
            Self::Min => Self::Max,
            Self::Leaf => Self::Leaf,
        }
    }
    pub const fn symbol(&self) -> &'static str {
        match self {
            Self::Max => "MAX",
            Self::Min => "MIN",
            Self::Leaf => "LEAF",
        }
    }
}

impl TryFrom<&str> for Kind {
    type Error = String;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        match s.trim().to_lowercase().as_str() {
            "max" => Ok(Self::Max),
            "min" => Ok(Self::Min),
            "leaf" => Ok(Self::Leaf),
            other => Err(format!("invalid node kind '{}'", other)),
        }
    }
}

/// A random internal kind; root of a random tree.
impl Arbitrary for Kind {
    fn random() -> Self {
        if rand::random::<bool>() {
            Self::Max
        } else {
            Self::Min
        }
    }
}

impl std::fmt::Display for Kind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}
