use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::framework::Framework;
use crate::scoring::ScoreResult;

/// Structured export of one scoring run.
///
/// Carries the framework identity (id, name, edition) alongside the result
/// so an exported report states which regulatory release it was scored
/// against. Rendering to other document formats is the consumer's job;
/// this type only guarantees a stable JSON shape.
#[derive(Debug, Clone, Serialize)]
pub struct AssessmentReport {
    pub generated_at: DateTime<Utc>,
    pub framework: String,
    pub framework_name: String,
    pub edition: String,

    /// System under assessment (e.g. "Credit Decision Engine v2.0")
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub assessor: Option<String>,

    pub result: ScoreResult,
}

impl AssessmentReport {
    pub fn new(framework: &Framework, result: ScoreResult) -> Self {
        Self {
            generated_at: Utc::now(),
            framework: framework.id.clone(),
            framework_name: framework.name.clone(),
            edition: framework.edition.clone(),
            subject: None,
            assessor: None,
            result,
        }
    }

    pub fn with_subject(mut self, subject: Option<String>) -> Self {
        self.subject = subject;
        self
    }

    pub fn with_assessor(mut self, assessor: Option<String>) -> Self {
        self.assessor = assessor;
        self
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::framework::builtin;
    use crate::scoring::{score, ResponseSet, ResponseValue};

    fn sample_report() -> AssessmentReport {
        let fw = builtin::fintech_ai_risk();
        let mut responses = ResponseSet::new();
        responses.insert(
            "fairness_disparate_impact".to_string(),
            ResponseValue::Choice("yes".to_string()),
        );
        let result = score(&responses, &fw).unwrap();
        AssessmentReport::new(&fw, result)
            .with_subject(Some("Credit Decision Engine v2.0".to_string()))
            .with_assessor(Some("J. Doe".to_string()))
    }

    #[test]
    fn test_report_carries_framework_identity() {
        let report = sample_report();
        assert_eq!(report.framework, "fintech-ai-risk");
        assert_eq!(report.edition, "2025-11");
    }

    #[test]
    fn test_report_json_shape() {
        let json = sample_report().to_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["framework"], "fintech-ai-risk");
        assert_eq!(value["subject"], "Credit Decision Engine v2.0");
        assert!(value["result"]["categories"]["fairness"]["score"].is_number());
        // Unanswered categories export a null score, not zero
        assert!(value["result"]["categories"]["security"]["score"].is_null());
    }

    #[test]
    fn test_omitted_metadata_not_serialized() {
        let fw = builtin::fintech_ai_risk();
        let result = score(&ResponseSet::new(), &fw).unwrap();
        let json = AssessmentReport::new(&fw, result).to_json().unwrap();
        assert!(!json.contains("\"subject\""));
        assert!(!json.contains("\"assessor\""));
    }
}
