use std::collections::HashSet;

use super::schema::{Framework, ResponseDomain, SCALE_MAX};

/// Validate a framework definition at startup.
/// Returns all validation errors at once (not just the first).
pub fn validate_framework(framework: &Framework) -> Result<(), Vec<String>> {
    let mut errors = Vec::new();

    if framework.id.is_empty() {
        errors.push("framework.id: must not be empty".to_string());
    }
    if framework.categories.is_empty() {
        errors.push("framework.categories: must not be empty".to_string());
    }

    let mut category_ids = HashSet::new();
    let mut question_ids = HashSet::new();
    let mut any_positive_weight = false;

    for (ci, category) in framework.categories.iter().enumerate() {
        let path = format!("categories[{}]", ci);

        if !category_ids.insert(category.id.as_str()) {
            errors.push(format!("{}.id: duplicate category id '{}'", path, category.id));
        }
        // NaN compares false to everything, so non-finite needs its own check
        if !category.weight.is_finite() || category.weight < 0.0 {
            errors.push(format!("{}.weight: must be non-negative and finite", path));
        }
        if category.weight > 0.0 {
            any_positive_weight = true;
        }
        if category.questions.is_empty() {
            errors.push(format!("{}.questions: must not be empty", path));
        }

        for (qi, question) in category.questions.iter().enumerate() {
            let path = format!("{}.questions[{}]", path, qi);

            if !question_ids.insert(question.id.as_str()) {
                errors.push(format!("{}.id: duplicate question id '{}'", path, question.id));
            }
            if !question.weight.is_finite() || question.weight <= 0.0 {
                errors.push(format!("{}.weight: must be positive and finite", path));
            }

            validate_domain(&question.domain, &path, &mut errors);
        }
    }

    if !framework.categories.is_empty() && !any_positive_weight {
        errors.push("categories: at least one category weight must be positive".to_string());
    }

    validate_tiers(framework, &mut errors);

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn validate_domain(domain: &ResponseDomain, path: &str, errors: &mut Vec<String>) {
    match domain {
        ResponseDomain::Bool => {}
        ResponseDomain::Ordinal { min, max } => {
            if min >= max {
                errors.push(format!(
                    "{}.domain: ordinal range must have min < max (got {}..={})",
                    path, min, max
                ));
            }
        }
        ResponseDomain::Scale { options } => {
            if options.is_empty() {
                errors.push(format!("{}.domain.options: must not be empty", path));
            }
            let mut ids = HashSet::new();
            let mut scoreable = false;
            for (oi, option) in options.iter().enumerate() {
                if !ids.insert(option.id.as_str()) {
                    errors.push(format!(
                        "{}.domain.options[{}]: duplicate option id '{}'",
                        path, oi, option.id
                    ));
                }
                match option.credit {
                    Some(credit) if !(0.0..=1.0).contains(&credit) => {
                        errors.push(format!(
                            "{}.domain.options[{}].credit: must be within [0, 1]",
                            path, oi
                        ));
                    }
                    Some(_) => scoreable = true,
                    None => {}
                }
            }
            if !options.is_empty() && !scoreable {
                errors.push(format!(
                    "{}.domain.options: at least one option must carry a credit",
                    path
                ));
            }
        }
        ResponseDomain::MultiSelect { options } => {
            if options.is_empty() {
                errors.push(format!("{}.domain.options: must not be empty", path));
            }
            let mut ids = HashSet::new();
            let mut total = 0.0;
            for (oi, option) in options.iter().enumerate() {
                if !ids.insert(option.id.as_str()) {
                    errors.push(format!(
                        "{}.domain.options[{}]: duplicate option id '{}'",
                        path, oi, option.id
                    ));
                }
                if !option.credit.is_finite() || option.credit < 0.0 {
                    errors.push(format!(
                        "{}.domain.options[{}].credit: must be non-negative and finite",
                        path, oi
                    ));
                }
                total += option.credit;
            }
            if !options.is_empty() && total <= 0.0 {
                errors.push(format!(
                    "{}.domain.options: total credit must be positive",
                    path
                ));
            }
        }
    }
}

/// Tier bands must be ascending, contiguous, and cover [0, SCALE_MAX]
/// exactly, so every reachable score maps to exactly one label.
fn validate_tiers(framework: &Framework, errors: &mut Vec<String>) {
    if framework.tiers.is_empty() {
        errors.push("tiers: must not be empty".to_string());
        return;
    }

    for (i, band) in framework.tiers.iter().enumerate() {
        if band.min >= band.max {
            errors.push(format!(
                "tiers[{}]: min must be below max (got [{}, {}))",
                i, band.min, band.max
            ));
        }
    }

    let first = &framework.tiers[0];
    if first.min != 0.0 {
        errors.push(format!("tiers[0].min: must be 0 (got {})", first.min));
    }

    for i in 1..framework.tiers.len() {
        let prev = &framework.tiers[i - 1];
        let band = &framework.tiers[i];
        if band.min != prev.max {
            errors.push(format!(
                "tiers[{}].min: must equal tiers[{}].max for contiguous bands (got {} vs {})",
                i,
                i - 1,
                band.min,
                prev.max
            ));
        }
    }

    if let Some(last) = framework.tiers.last() {
        if last.max != SCALE_MAX {
            errors.push(format!(
                "tiers[{}].max: must be {} to cover the full scale (got {})",
                framework.tiers.len() - 1,
                SCALE_MAX,
                last.max
            ));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::framework::schema::{Category, Question, ScaleOption, SelectOption, TierBand};

    fn minimal_framework() -> Framework {
        Framework {
            id: "test".to_string(),
            name: "Test".to_string(),
            edition: "2025-11".to_string(),
            categories: vec![Category {
                id: "cat".to_string(),
                label: "Category".to_string(),
                weight: 1.0,
                questions: vec![Question {
                    id: "q1".to_string(),
                    prompt: "Documented?".to_string(),
                    weight: 1.0,
                    domain: ResponseDomain::Bool,
                }],
            }],
            tiers: vec![
                TierBand {
                    label: "Low".to_string(),
                    min: 0.0,
                    max: 50.0,
                },
                TierBand {
                    label: "High".to_string(),
                    min: 50.0,
                    max: 100.0,
                },
            ],
        }
    }

    #[test]
    fn test_valid_framework() {
        assert!(validate_framework(&minimal_framework()).is_ok());
    }

    #[test]
    fn test_negative_category_weight() {
        let mut fw = minimal_framework();
        fw.categories[0].weight = -1.0;
        let errors = validate_framework(&fw).unwrap_err();
        assert!(errors.iter().any(|e| e.contains("weight: must be non-negative")));
    }

    #[test]
    fn test_nan_category_weight_rejected() {
        let mut fw = minimal_framework();
        fw.categories[0].weight = f64::NAN;
        let errors = validate_framework(&fw).unwrap_err();
        assert!(errors.iter().any(|e| e.contains("weight: must be non-negative")));
    }

    #[test]
    fn test_non_finite_question_weight_rejected() {
        let mut fw = minimal_framework();
        fw.categories[0].questions[0].weight = f64::INFINITY;
        let errors = validate_framework(&fw).unwrap_err();
        assert!(errors[0].contains("questions[0].weight"));
    }

    #[test]
    fn test_nan_multi_select_credit_rejected() {
        let mut fw = minimal_framework();
        fw.categories[0].questions[0].domain = ResponseDomain::MultiSelect {
            options: vec![SelectOption {
                id: "a".to_string(),
                label: "A".to_string(),
                credit: f64::NAN,
            }],
        };
        let errors = validate_framework(&fw).unwrap_err();
        assert!(errors[0].contains("credit: must be non-negative and finite"));
    }

    #[test]
    fn test_nan_scale_credit_rejected() {
        let mut fw = minimal_framework();
        fw.categories[0].questions[0].domain = ResponseDomain::Scale {
            options: vec![ScaleOption {
                id: "yes".to_string(),
                label: "Yes".to_string(),
                credit: Some(f64::NAN),
            }],
        };
        let errors = validate_framework(&fw).unwrap_err();
        assert!(errors.iter().any(|e| e.contains("within [0, 1]")));
    }

    #[test]
    fn test_all_category_weights_zero() {
        let mut fw = minimal_framework();
        fw.categories[0].weight = 0.0;
        let errors = validate_framework(&fw).unwrap_err();
        assert!(errors.iter().any(|e| e.contains("at least one category weight")));
    }

    #[test]
    fn test_zero_question_weight() {
        let mut fw = minimal_framework();
        fw.categories[0].questions[0].weight = 0.0;
        let errors = validate_framework(&fw).unwrap_err();
        assert!(errors[0].contains("questions[0].weight"));
    }

    #[test]
    fn test_duplicate_question_id_across_categories() {
        let mut fw = minimal_framework();
        let mut other = fw.categories[0].clone();
        other.id = "cat2".to_string();
        fw.categories.push(other);
        let errors = validate_framework(&fw).unwrap_err();
        assert!(errors.iter().any(|e| e.contains("duplicate question id 'q1'")));
    }

    #[test]
    fn test_ordinal_min_not_below_max() {
        let mut fw = minimal_framework();
        fw.categories[0].questions[0].domain = ResponseDomain::Ordinal { min: 5, max: 5 };
        let errors = validate_framework(&fw).unwrap_err();
        assert!(errors[0].contains("min < max"));
    }

    #[test]
    fn test_scale_needs_scoreable_option() {
        let mut fw = minimal_framework();
        fw.categories[0].questions[0].domain = ResponseDomain::Scale {
            options: vec![ScaleOption {
                id: "na".to_string(),
                label: "N/A".to_string(),
                credit: None,
            }],
        };
        let errors = validate_framework(&fw).unwrap_err();
        assert!(errors[0].contains("at least one option must carry a credit"));
    }

    #[test]
    fn test_scale_credit_out_of_bounds() {
        let mut fw = minimal_framework();
        fw.categories[0].questions[0].domain = ResponseDomain::Scale {
            options: vec![ScaleOption {
                id: "yes".to_string(),
                label: "Yes".to_string(),
                credit: Some(1.5),
            }],
        };
        let errors = validate_framework(&fw).unwrap_err();
        assert!(errors.iter().any(|e| e.contains("within [0, 1]")));
    }

    #[test]
    fn test_multi_select_zero_total_credit() {
        let mut fw = minimal_framework();
        fw.categories[0].questions[0].domain = ResponseDomain::MultiSelect {
            options: vec![SelectOption {
                id: "a".to_string(),
                label: "A".to_string(),
                credit: 0.0,
            }],
        };
        let errors = validate_framework(&fw).unwrap_err();
        assert!(errors[0].contains("total credit must be positive"));
    }

    #[test]
    fn test_tier_gap_rejected() {
        let mut fw = minimal_framework();
        fw.tiers[1].min = 55.0;
        let errors = validate_framework(&fw).unwrap_err();
        assert!(errors[0].contains("contiguous"));
    }

    #[test]
    fn test_tiers_must_start_at_zero() {
        let mut fw = minimal_framework();
        fw.tiers[0].min = 10.0;
        let errors = validate_framework(&fw).unwrap_err();
        assert!(errors[0].contains("tiers[0].min"));
    }

    #[test]
    fn test_tiers_must_cover_full_scale() {
        let mut fw = minimal_framework();
        fw.tiers[1].max = 90.0;
        let errors = validate_framework(&fw).unwrap_err();
        assert!(errors[0].contains("cover the full scale"));
    }

    #[test]
    fn test_empty_tiers_rejected() {
        let mut fw = minimal_framework();
        fw.tiers.clear();
        let errors = validate_framework(&fw).unwrap_err();
        assert!(errors[0].contains("tiers: must not be empty"));
    }

    #[test]
    fn test_collects_all_errors() {
        let mut fw = minimal_framework();
        fw.categories[0].questions[0].weight = 0.0; // Error 1
        fw.tiers[0].min = 10.0; // Error 2
        let errors = validate_framework(&fw).unwrap_err();
        assert_eq!(errors.len(), 2);
    }

    #[test]
    fn test_builtin_frameworks_validate() {
        for fw in crate::framework::builtin::all() {
            assert!(
                validate_framework(&fw).is_ok(),
                "builtin framework '{}' failed validation",
                fw.id
            );
        }
    }
}
