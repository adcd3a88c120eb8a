use serde::{Deserialize, Serialize};

/// Upper end of the scoring scale. Category and overall scores live in
/// [0, SCALE_MAX]; tier bands must cover this range exactly.
pub const SCALE_MAX: f64 = 100.0;

/// An assessment framework: the immutable questionnaire definition a set of
/// responses is scored against.
///
/// Frameworks are versioned data tied to a named regulatory release (the
/// `edition` field). They are loaded once at startup and never mutated.
///
/// Example YAML:
/// ```yaml
/// id: fintech-ai-risk
/// name: FinTech AI Risk Assessment
/// edition: "2025-11"
/// categories:
///   - id: fairness
///     label: Fairness & Discrimination
///     weight: 1.0
///     questions:
///       - id: fairness_disparate_impact
///         prompt: "Have you conducted disparate impact testing?"
///         weight: 2
///         domain:
///           kind: scale
///           options:
///             - { id: "yes", label: "Yes - Fully Implemented", credit: 1.0 }
///             - { id: "no", label: "No - Not Addressed", credit: 0.0 }
/// tiers:
///   - { label: High Risk, min: 0, max: 60 }
///   - { label: Medium Risk, min: 60, max: 80 }
///   - { label: Low Risk, min: 80, max: 100 }
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Framework {
    pub id: String,

    /// Human-readable framework name used in reports
    pub name: String,

    /// Regulatory release this framework reflects (e.g. "2025-11")
    pub edition: String,

    pub categories: Vec<Category>,

    /// Tier bands in ascending score order. Bands are closed-lower /
    /// open-upper; the top band additionally includes its `max`.
    pub tiers: Vec<TierBand>,
}

impl Framework {
    /// Look up a question by id, together with its owning category.
    pub fn question(&self, question_id: &str) -> Option<(&Category, &Question)> {
        self.categories.iter().find_map(|category| {
            category
                .questions
                .iter()
                .find(|q| q.id == question_id)
                .map(|q| (category, q))
        })
    }

    /// Total number of questions across all categories.
    pub fn question_count(&self) -> usize {
        self.categories.iter().map(|c| c.questions.len()).sum()
    }

    /// Select the tier band containing `score`. Bands match on a
    /// closed-lower / open-upper basis, except the last band which also
    /// matches its upper bound (so exactly SCALE_MAX classifies).
    /// Assumes bands pass validation (ascending, contiguous).
    pub fn tier_for(&self, score: f64) -> Option<&TierBand> {
        let last = self.tiers.len().checked_sub(1)?;
        self.tiers.iter().enumerate().find_map(|(i, band)| {
            let upper_ok = score < band.max || (i == last && score <= band.max);
            (score >= band.min && upper_ok).then_some(band)
        })
    }
}

/// A named grouping of questions with an aggregate weight used when
/// combining category scores into the overall score.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Category {
    pub id: String,

    /// Label used in reports (e.g. "Fairness & Discrimination")
    pub label: String,

    /// Relative weight of this category in the overall score. Weights are
    /// renormalized over the categories that have at least one answer.
    pub weight: f64,

    pub questions: Vec<Question>,
}

/// A single assessment question. Belongs to exactly one category.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Question {
    pub id: String,

    pub prompt: String,

    /// Weight within the category, reflecting regulatory priority.
    pub weight: f64,

    pub domain: ResponseDomain,
}

/// The response domain of a question: what values are accepted and how a
/// raw answer maps onto the [0, 1] scale.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ResponseDomain {
    /// Yes/no question: true scores 1.0, false scores 0.0.
    Bool,

    /// Integer within an inclusive range, mapped linearly onto [0, 1].
    Ordinal { min: i64, max: i64 },

    /// Small enumerated scale. Each option carries a credit in [0, 1];
    /// an option without a credit is exempt (a "not applicable" answer):
    /// it counts as answered but contributes no weight to the score.
    Scale { options: Vec<ScaleOption> },

    /// Set of selectable options. The normalized value is the credit of
    /// the selected options over the total credit available.
    MultiSelect { options: Vec<SelectOption> },
}

impl ResponseDomain {
    pub fn kind_name(&self) -> &'static str {
        match self {
            ResponseDomain::Bool => "boolean",
            ResponseDomain::Ordinal { .. } => "ordinal",
            ResponseDomain::Scale { .. } => "scale",
            ResponseDomain::MultiSelect { .. } => "multi_select",
        }
    }
}

/// One option of a `Scale` domain.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ScaleOption {
    pub id: String,

    pub label: String,

    /// Credit in [0, 1] earned by selecting this option. `None` marks the
    /// option exempt: the question is excluded from both numerator and
    /// denominator of its category's weighted mean.
    #[serde(default)]
    pub credit: Option<f64>,
}

/// One option of a `MultiSelect` domain.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct SelectOption {
    pub id: String,

    pub label: String,

    /// Credit earned when this option is selected (default 1.0).
    #[serde(default = "default_credit")]
    pub credit: f64,
}

fn default_credit() -> f64 {
    1.0
}

/// A tier band: scores in [min, max) map to `label` (the top band also
/// includes its max).
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct TierBand {
    pub label: String,
    pub min: f64,
    pub max: f64,
}
