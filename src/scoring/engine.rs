use std::collections::BTreeMap;

use serde::Serialize;

use super::error::InvalidInput;
use super::response::{ResponseSet, ResponseValue};
use crate::framework::{Framework, ResponseDomain, SCALE_MAX};

/// Score of one category, with completeness counts for reporting.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryScore {
    /// Human-readable category label
    pub label: String,

    /// Weighted mean of answered questions on the 0-100 scale. `None` when
    /// no scoreable question in the category was answered: the category is
    /// undefined and excluded from the overall score, not zero-filled.
    pub score: Option<f64>,

    /// The category's configured weight (before renormalization)
    pub weight: f64,

    /// Questions with a recorded answer, exempt (N/A) answers included
    pub answered: u32,

    /// Total questions in the category
    pub total: u32,
}

/// Result of scoring one response set against a framework.
///
/// Pure data, recomputed on demand. Uses a BTreeMap so identical inputs
/// serialize to byte-identical output.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoreResult {
    /// Per-category results keyed by category id, all categories included
    pub categories: BTreeMap<String, CategoryScore>,

    /// Weight-renormalized mean over defined category scores; `None` when
    /// no category has a defined score
    pub overall: Option<f64>,

    /// Tier label for the overall score; `None` when overall is undefined
    pub tier: Option<String>,
}

/// Score a (possibly partial) response set against a framework.
///
/// Pure function of its inputs: no I/O, no shared state, deterministic.
/// Per category, the score is the weighted mean of answered questions'
/// normalized values; unanswered questions are excluded, and categories
/// with no scoreable answer are excluded from the overall weighted average
/// rather than counted as zero. Category weights are renormalized over the
/// categories that have a defined score.
///
/// # Errors
///
/// [`InvalidInput`] when a response key references no known question or a
/// value falls outside its question's declared domain.
pub fn score(responses: &ResponseSet, framework: &Framework) -> Result<ScoreResult, InvalidInput> {
    // Reject unknown keys before any aggregation, so the call fails
    // atomically with no partial result.
    for key in responses.keys() {
        if framework.question(key).is_none() {
            return Err(InvalidInput::UnknownQuestion {
                question: key.clone(),
            });
        }
    }

    let mut categories = BTreeMap::new();
    let mut overall_sum = 0.0;
    let mut overall_weight = 0.0;

    for category in &framework.categories {
        let mut credit_sum = 0.0;
        let mut credit_weight = 0.0;
        let mut answered = 0u32;

        for question in &category.questions {
            let Some(value) = responses.get(&question.id) else {
                continue;
            };
            answered += 1;

            // Exempt answers count as answered but carry no weight.
            if let Some(normalized) = normalize(&question.id, &question.domain, value)? {
                credit_sum += normalized * question.weight;
                credit_weight += question.weight;
            }
        }

        // Rounding in the weighted mean can land an epsilon outside the
        // scale; clamp so bounds hold and tier selection stays total.
        let category_score = if credit_weight > 0.0 {
            Some((SCALE_MAX * credit_sum / credit_weight).clamp(0.0, SCALE_MAX))
        } else {
            None
        };

        if let Some(s) = category_score {
            overall_sum += s * category.weight;
            overall_weight += category.weight;
        }

        categories.insert(
            category.id.clone(),
            CategoryScore {
                label: category.label.clone(),
                score: category_score,
                weight: category.weight,
                answered,
                total: category.questions.len() as u32,
            },
        );
    }

    let overall = if overall_weight > 0.0 {
        Some((overall_sum / overall_weight).clamp(0.0, SCALE_MAX))
    } else {
        None
    };

    let tier = overall
        .and_then(|s| framework.tier_for(s))
        .map(|band| band.label.clone());

    Ok(ScoreResult {
        categories,
        overall,
        tier,
    })
}

/// Map a raw response value onto the [0, 1] scale per its question's
/// domain. `Ok(None)` marks an exempt answer (a credit-less scale option).
fn normalize(
    question: &str,
    domain: &ResponseDomain,
    value: &ResponseValue,
) -> Result<Option<f64>, InvalidInput> {
    match (domain, value) {
        (ResponseDomain::Bool, ResponseValue::Bool(b)) => {
            Ok(Some(if *b { 1.0 } else { 0.0 }))
        }
        (ResponseDomain::Ordinal { min, max }, ResponseValue::Ordinal(v)) => {
            if v < min || v > max {
                return Err(InvalidInput::OutOfRange {
                    question: question.to_string(),
                    value: *v,
                    min: *min,
                    max: *max,
                });
            }
            if max > min {
                // Widen to i128: the span of an i64 range can overflow i64
                let span = (*max as i128 - *min as i128) as f64;
                let offset = (*v as i128 - *min as i128) as f64;
                Ok(Some(offset / span))
            } else {
                // Degenerate range; validation rejects it, but stay total.
                Ok(Some(1.0))
            }
        }
        (ResponseDomain::Scale { options }, ResponseValue::Choice(id)) => {
            let option = options.iter().find(|o| o.id == *id).ok_or_else(|| {
                InvalidInput::UnknownOption {
                    question: question.to_string(),
                    option: id.clone(),
                }
            })?;
            Ok(option.credit)
        }
        (ResponseDomain::MultiSelect { options }, ResponseValue::Selections(selected)) => {
            let mut earned = 0.0;
            for id in selected {
                let option = options.iter().find(|o| o.id == *id).ok_or_else(|| {
                    InvalidInput::UnknownOption {
                        question: question.to_string(),
                        option: id.clone(),
                    }
                })?;
                earned += option.credit;
            }
            let available: f64 = options.iter().map(|o| o.credit).sum();
            if available > 0.0 {
                Ok(Some((earned / available).min(1.0)))
            } else {
                // Validation rejects zero-credit domains; stay total.
                Ok(Some(0.0))
            }
        }
        (domain, value) => Err(InvalidInput::KindMismatch {
            question: question.to_string(),
            expected: domain.kind_name(),
            got: value.kind_name(),
        }),
    }
}
