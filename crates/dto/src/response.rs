use abv_search::Step;
use abv_search::Trace;
use abv_stepper::Signal;
use abv_stepper::Stepper;
use abv_tree::Issue;
use abv_tree::ValidationError;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct ApiHealth {
    pub status: String,
    pub service: String,
    pub version: String,
}

/// A freshly built (or rebuilt) session: its id and the whole trace.
#[derive(Debug, Serialize)]
pub struct ApiSession {
    pub session: String,
    pub steps: usize,
    #[serde(flatten)]
    pub trace: Trace,
}

impl ApiSession {
    pub fn new(session: String, trace: &Trace) -> Self {
        Self {
            session,
            steps: trace.len(),
            trace: trace.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ApiCursor {
    pub position: usize,
    pub len: usize,
    pub complete: bool,
    pub current: Option<Step>,
}

impl From<&Stepper> for ApiCursor {
    fn from(stepper: &Stepper) -> Self {
        Self {
            position: stepper.position(),
            len: stepper.len(),
            complete: stepper.is_complete(),
            current: stepper.current().cloned(),
        }
    }
}

/// Result of a navigation request. The signal's tag and step sit at the
/// top level next to the cursor.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ApiMove {
    #[serde(flatten)]
    pub signal: Signal,
    pub cursor: ApiCursor,
}

#[derive(Debug, Serialize)]
pub struct ApiClosed {
    pub session: String,
    pub status: String,
}

#[derive(Debug, Serialize)]
pub struct ApiError {
    pub error: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub issues: Vec<Issue>,
}

impl ApiError {
    pub fn new(error: impl ToString) -> Self {
        Self {
            error: error.to_string(),
            issues: Vec::new(),
        }
    }
}

impl From<&ValidationError> for ApiError {
    fn from(invalid: &ValidationError) -> Self {
        Self {
            error: String::from("invalid tree"),
            issues: invalid.issues().to_vec(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use abv_tree::Tree;
    use abv_tree::leaf;
    use abv_tree::max;

    fn stepper() -> Stepper {
        let tree = Tree::try_from(max([leaf(3.), leaf(5.)])).unwrap();
        Stepper::from(Trace::from(&tree))
    }

    #[test]
    fn session_flattens_trace() {
        let tree = Tree::try_from(max([leaf(3.), leaf(5.)])).unwrap();
        let json = serde_json::to_value(ApiSession::new("s".into(), &Trace::from(&tree))).unwrap();
        assert_eq!(json["session"], "s");
        assert_eq!(json["steps"], 8);
        assert_eq!(json["gameValue"], 5.0);
        assert_eq!(json["trace"][0]["eventKind"], "ENTER");
    }

    #[test]
    fn move_puts_signal_beside_cursor() {
        let mut stepper = stepper();
        let signal = stepper.forward();
        let json = serde_json::to_value(ApiMove {
            signal,
            cursor: ApiCursor::from(&stepper),
        })
        .unwrap();
        assert_eq!(json["signal"], "moved");
        assert_eq!(json["step"]["nodeId"], 0);
        assert_eq!(json["cursor"]["position"], 1);
        assert_eq!(json["cursor"]["complete"], false);
    }

    #[test]
    fn boundary_move_has_no_step() {
        let mut stepper = stepper();
        let json = serde_json::to_value(ApiMove {
            signal: stepper.backward(),
            cursor: ApiCursor::from(&stepper),
        })
        .unwrap();
        assert_eq!(json["signal"], "at_start");
        assert!(json.get("step").is_none());
        assert!(json["cursor"]["current"].is_null());
    }

    #[test]
    fn plain_errors_omit_issues() {
        let json = serde_json::to_value(ApiError::new("session not found")).unwrap();
        assert_eq!(json["error"], "session not found");
        assert!(json.get("issues").is_none());
    }
}
