use thiserror::Error;

/// Invalid caller input: the only failure mode of the scoring engine.
///
/// Every variant is an integration defect in the caller (a well-behaved
/// presentation layer never submits unknown keys or out-of-domain values),
/// so these are surfaced immediately rather than coerced.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum InvalidInput {
    /// Response key does not reference any question in the framework
    #[error("unknown question: {question}")]
    UnknownQuestion { question: String },

    /// Selected option id is not part of the question's domain
    #[error("question {question}: unknown option '{option}'")]
    UnknownOption { question: String, option: String },

    /// Ordinal value outside the question's declared range
    #[error("question {question}: value {value} outside declared range {min}..={max}")]
    OutOfRange {
        question: String,
        value: i64,
        min: i64,
        max: i64,
    },

    /// Response value type does not match the question's domain
    #[error("question {question}: expected {expected} response, got {got}")]
    KindMismatch {
        question: String,
        expected: &'static str,
        got: &'static str,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_question_display() {
        let err = InvalidInput::UnknownQuestion {
            question: "q_missing".to_string(),
        };
        assert_eq!(err.to_string(), "unknown question: q_missing");
    }

    #[test]
    fn test_out_of_range_display() {
        let err = InvalidInput::OutOfRange {
            question: "q1".to_string(),
            value: 7,
            min: 0,
            max: 5,
        };
        assert_eq!(
            err.to_string(),
            "question q1: value 7 outside declared range 0..=5"
        );
    }

    #[test]
    fn test_kind_mismatch_display() {
        let err = InvalidInput::KindMismatch {
            question: "q1".to_string(),
            expected: "scale",
            got: "boolean",
        };
        assert_eq!(
            err.to_string(),
            "question q1: expected scale response, got boolean"
        );
    }
}
