use super::*;
use abv_core::Utility;
use abv_tree::NodeId;
use serde::Deserialize;
use serde::Serialize;

/// The state of the search immediately after one atomic event.
///
/// Steps are created once by [`Search`] and never changed. On the wire
/// each step is a flat record; infinite bounds use the [`bound`] encoding.
///
/// - `value` is the leaf's static value on `EVALUATE` and the node's
///   backed-up value on `BACKUP`.
/// - `best` is the node's running best on `UPDATE_BOUND`, `PRUNE` and
///   `BACKUP`.
/// - `pruned` lists skipped children (left to right) on `PRUNE`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Step {
    #[serde(rename = "sequenceIndex")]
    pub index: usize,
    #[serde(rename = "eventKind")]
    pub event: Event,
    #[serde(rename = "nodeId")]
    pub node: NodeId,
    #[serde(with = "crate::bound")]
    pub alpha: Utility,
    #[serde(with = "crate::bound")]
    pub beta: Utility,
    #[serde(rename = "backedUpValue", default, skip_serializing_if = "Option::is_none")]
    pub value: Option<Utility>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub best: Option<Utility>,
    #[serde(rename = "prunedChildIds", default)]
    pub pruned: Vec<NodeId>,
}

impl Step {
    pub fn is(&self, event: Event) -> bool {
        self.event == event
    }
}

impl std::fmt::Display for Step {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{:>4}  {:<12} {:<5} α={:<4} β={:<4}",
            self.index,
            self.event.symbol(),
            self.node.to_string(),
            bound::show(self.alpha),
            bound::show(self.beta),
        )?;
        if let Some(value) = self.value {
            write!(f, " value={}", value)?;
        } else if let Some(best) = self.best {
            write!(f, " best={}", best)?;
        }
        if !self.pruned.is_empty() {
            let ids = self
                .pruned
                .iter()
                .map(|id| id.to_string())
                .collect::<Vec<_>>()
                .join(" ");
            write!(f, " pruned=[{}]", ids)?;
        }
        Ok(())
    }
}
