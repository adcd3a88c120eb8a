use chrono::{DateTime, Utc};

use crate::scoring::{ResponseSet, ResponseValue};

/// One user's in-flight questionnaire.
///
/// Mutated by input events and discarded at session end; nothing is
/// persisted. Scoring takes a borrowed snapshot of the responses, so a
/// session can keep changing while results are rendered.
#[derive(Debug, Clone)]
pub struct Session {
    pub id: String,
    pub framework_id: String,
    pub started_at: DateTime<Utc>,
    responses: ResponseSet,
}

impl Session {
    pub fn new(id: impl Into<String>, framework_id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            framework_id: framework_id.into(),
            started_at: Utc::now(),
            responses: ResponseSet::new(),
        }
    }

    /// Record an answer, replacing any previous answer to the same question.
    pub fn record(&mut self, question_id: impl Into<String>, value: ResponseValue) {
        self.responses.insert(question_id.into(), value);
    }

    /// Withdraw an answer. Returns true if the question had been answered.
    pub fn clear(&mut self, question_id: &str) -> bool {
        self.responses.remove(question_id).is_some()
    }

    pub fn answered(&self) -> usize {
        self.responses.len()
    }

    /// The current responses, suitable for passing to `scoring::score`.
    pub fn responses(&self) -> &ResponseSet {
        &self.responses
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_session_empty() {
        let session = Session::new("s1", "fintech-ai-risk");
        assert_eq!(session.answered(), 0);
        assert_eq!(session.framework_id, "fintech-ai-risk");
    }

    #[test]
    fn test_record_replaces_previous_answer() {
        let mut session = Session::new("s1", "fintech-ai-risk");
        session.record("q1", ResponseValue::Choice("no".to_string()));
        session.record("q1", ResponseValue::Choice("yes".to_string()));
        assert_eq!(session.answered(), 1);
        assert_eq!(
            session.responses()["q1"],
            ResponseValue::Choice("yes".to_string())
        );
    }

    #[test]
    fn test_clear_answer() {
        let mut session = Session::new("s1", "fintech-ai-risk");
        session.record("q1", ResponseValue::Bool(true));
        assert!(session.clear("q1"));
        assert!(!session.clear("q1"));
        assert_eq!(session.answered(), 0);
    }
}
