use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

/// A single answer, typed to match the question's response domain.
///
/// Serializes untagged, so a responses JSON file is a flat mapping:
/// ```json
/// {
///   "fairness_disparate_impact": "yes",
///   "security_drift_monitoring": "partial",
///   "coverage_level": 3,
///   "documented": true,
///   "safeguards": ["bias_testing", "human_review"]
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(untagged)]
pub enum ResponseValue {
    /// Answer to a boolean question
    Bool(bool),

    /// Answer to an ordinal question
    Ordinal(i64),

    /// Selected option id of a scale question
    Choice(String),

    /// Selected option ids of a multi-select question
    Selections(BTreeSet<String>),
}

impl ResponseValue {
    pub fn kind_name(&self) -> &'static str {
        match self {
            ResponseValue::Bool(_) => "boolean",
            ResponseValue::Ordinal(_) => "ordinal",
            ResponseValue::Choice(_) => "choice",
            ResponseValue::Selections(_) => "selections",
        }
    }
}

/// Responses keyed by question id. Partial completion is allowed: absent
/// keys are unanswered questions. A BTreeMap keeps iteration order stable
/// so derived results serialize identically across runs.
pub type ResponseSet = BTreeMap<String, ResponseValue>;
