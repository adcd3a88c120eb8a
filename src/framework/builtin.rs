//! Shipped framework editions.
//!
//! These are the fixed, versioned weight tables the tool reflects. The
//! question weights and tier thresholds are part of the edition: changing
//! them means publishing a new edition, not mutating these at runtime.

use super::schema::{
    Category, Framework, Question, ResponseDomain, ScaleOption, TierBand, SCALE_MAX,
};

/// All builtin framework editions.
pub fn all() -> Vec<Framework> {
    vec![fintech_ai_risk(), governance_checklist()]
}

/// Look up a builtin framework by id.
pub fn find(id: &str) -> Option<Framework> {
    all().into_iter().find(|fw| fw.id == id)
}

/// Implementation-status scale used by the risk assessment: full credit for
/// implemented, half for in progress, none for not addressed. N/A is exempt.
fn implementation_scale() -> ResponseDomain {
    ResponseDomain::Scale {
        options: vec![
            scale_option("yes", "Yes - Fully Implemented", Some(1.0)),
            scale_option("partial", "Partial - In Progress", Some(0.5)),
            scale_option("no", "No - Not Addressed", Some(0.0)),
            scale_option("na", "N/A", None),
        ],
    }
}

/// Compliance-status scale used by the checklist. "Not assessed" items are
/// simply unanswered, so they do not appear as an option here.
fn compliance_scale() -> ResponseDomain {
    ResponseDomain::Scale {
        options: vec![
            scale_option("compliant", "Compliant", Some(1.0)),
            scale_option("partial", "Partial", Some(0.5)),
            scale_option("non_compliant", "Non-Compliant", Some(0.0)),
            scale_option("na", "N/A", None),
        ],
    }
}

fn scale_option(id: &str, label: &str, credit: Option<f64>) -> ScaleOption {
    ScaleOption {
        id: id.to_string(),
        label: label.to_string(),
        credit,
    }
}

fn question(id: &str, prompt: &str, weight: f64, domain: ResponseDomain) -> Question {
    Question {
        id: id.to_string(),
        prompt: prompt.to_string(),
        weight,
        domain,
    }
}

fn category(id: &str, label: &str, weight: f64, questions: Vec<Question>) -> Category {
    Category {
        id: id.to_string(),
        label: label.to_string(),
        weight,
        questions,
    }
}

/// A checklist item. Priority maps to question weight:
/// Critical 3, High 2, Medium 1, Low 0.5.
fn item(id: &str, prompt: &str, weight: f64) -> Question {
    question(id, prompt, weight, compliance_scale())
}

fn band(label: &str, min: f64, max: f64) -> TierBand {
    TierBand {
        label: label.to_string(),
        min,
        max,
    }
}

/// AI risk self-assessment for financial services (EU AI Act, NIST AI RMF,
/// UK FCA, Singapore MAS FEAT).
pub fn fintech_ai_risk() -> Framework {
    Framework {
        id: "fintech-ai-risk".to_string(),
        name: "FinTech AI Risk Assessment".to_string(),
        edition: "2025-11".to_string(),
        categories: vec![
            category(
                "fairness",
                "Fairness & Discrimination",
                1.0,
                vec![
                    question(
                        "fairness_decision_impact",
                        "Does the AI system make decisions that directly impact credit access or pricing?",
                        3.0,
                        implementation_scale(),
                    ),
                    question(
                        "fairness_demographic_proxies",
                        "Does the system use demographic data or proxies (zip codes, names)?",
                        3.0,
                        implementation_scale(),
                    ),
                    question(
                        "fairness_representative_data",
                        "Is the training data representative of all customer segments?",
                        2.0,
                        implementation_scale(),
                    ),
                    question(
                        "fairness_disparate_impact",
                        "Have you conducted disparate impact testing?",
                        2.0,
                        implementation_scale(),
                    ),
                    question(
                        "fairness_human_override",
                        "Can the system's decisions be overridden by human review?",
                        2.0,
                        implementation_scale(),
                    ),
                ],
            ),
            category(
                "transparency",
                "Transparency & Explainability",
                0.9,
                vec![
                    question(
                        "transparency_explain_decisions",
                        "Can you explain individual decisions to affected customers?",
                        3.0,
                        implementation_scale(),
                    ),
                    question(
                        "transparency_documented_logic",
                        "Is the model's logic documented and understandable?",
                        2.0,
                        implementation_scale(),
                    ),
                    question(
                        "transparency_adverse_action",
                        "Do you provide adverse action notices with specific reasons?",
                        3.0,
                        implementation_scale(),
                    ),
                    question(
                        "transparency_regulator_audit",
                        "Can regulators audit the decision-making process?",
                        2.0,
                        implementation_scale(),
                    ),
                    question(
                        "transparency_limitations",
                        "Is there documentation of model limitations?",
                        2.0,
                        implementation_scale(),
                    ),
                ],
            ),
            category(
                "data_privacy",
                "Data Quality & Privacy",
                0.85,
                vec![
                    question(
                        "data_consent",
                        "Is personal data collected with appropriate consent?",
                        3.0,
                        implementation_scale(),
                    ),
                    question(
                        "data_retention",
                        "Are data retention policies in place and enforced?",
                        2.0,
                        implementation_scale(),
                    ),
                    question(
                        "data_quality_checks",
                        "Is training data checked for quality and accuracy?",
                        2.0,
                        implementation_scale(),
                    ),
                    question(
                        "data_third_party_vetting",
                        "Are data sources from third parties properly vetted?",
                        2.0,
                        implementation_scale(),
                    ),
                    question(
                        "data_anonymization",
                        "Is data anonymization/pseudonymization used where appropriate?",
                        2.0,
                        implementation_scale(),
                    ),
                ],
            ),
            category(
                "security",
                "Security & Robustness",
                0.8,
                vec![
                    question(
                        "security_adversarial_testing",
                        "Is the AI system tested for adversarial attacks?",
                        2.0,
                        implementation_scale(),
                    ),
                    question(
                        "security_drift_monitoring",
                        "Are there monitoring systems for model drift?",
                        2.0,
                        implementation_scale(),
                    ),
                    question(
                        "security_input_anomalies",
                        "Is the system resilient to input anomalies?",
                        2.0,
                        implementation_scale(),
                    ),
                    question(
                        "security_cyber_measures",
                        "Are cybersecurity measures adequate for the data sensitivity?",
                        3.0,
                        implementation_scale(),
                    ),
                    question(
                        "security_disaster_recovery",
                        "Is there a disaster recovery plan for the AI system?",
                        2.0,
                        implementation_scale(),
                    ),
                ],
            ),
            category(
                "governance",
                "Accountability & Governance",
                0.9,
                vec![
                    question(
                        "governance_senior_manager",
                        "Is there a designated senior manager accountable for AI?",
                        3.0,
                        implementation_scale(),
                    ),
                    question(
                        "governance_escalation",
                        "Are there clear escalation procedures for AI issues?",
                        2.0,
                        implementation_scale(),
                    ),
                    question(
                        "governance_ethics_committee",
                        "Is there an AI ethics committee or review board?",
                        2.0,
                        implementation_scale(),
                    ),
                    question(
                        "governance_vendor_diligence",
                        "Are third-party AI providers subject to due diligence?",
                        2.0,
                        implementation_scale(),
                    ),
                    question(
                        "governance_board_reporting",
                        "Is there regular board/executive reporting on AI risks?",
                        2.0,
                        implementation_scale(),
                    ),
                ],
            ),
            category(
                "compliance",
                "Regulatory Compliance",
                1.0,
                vec![
                    question(
                        "compliance_regulation_mapping",
                        "Have you mapped AI use to applicable regulations?",
                        3.0,
                        implementation_scale(),
                    ),
                    question(
                        "compliance_eu_ai_act",
                        "Are you prepared for EU AI Act high-risk classification?",
                        3.0,
                        implementation_scale(),
                    ),
                    question(
                        "compliance_change_monitoring",
                        "Is there a process for regulatory change monitoring?",
                        2.0,
                        implementation_scale(),
                    ),
                    question(
                        "compliance_gap_analysis",
                        "Have you conducted a compliance gap analysis?",
                        2.0,
                        implementation_scale(),
                    ),
                    question(
                        "compliance_reporting_capability",
                        "Is regulatory reporting capability in place?",
                        2.0,
                        implementation_scale(),
                    ),
                ],
            ),
        ],
        tiers: vec![
            band("High Risk", 0.0, 60.0),
            band("Medium Risk", 60.0, 80.0),
            band("Low Risk", 80.0, SCALE_MAX),
        ],
    }
}

/// Ethical readiness checklist aligned with EU AI Act, NIST AI RMF, UK FCA
/// guidance, and Singapore MAS FEAT principles. Sections carry equal weight;
/// items are weighted by priority.
pub fn governance_checklist() -> Framework {
    Framework {
        id: "governance-checklist".to_string(),
        name: "Ethical Assessment Checklist".to_string(),
        edition: "2025-11".to_string(),
        categories: vec![
            category(
                "fairness",
                "Fairness & Non-Discrimination",
                1.0,
                vec![
                    item("check_1_1", "Protected characteristics (race, gender, age, etc.) are not used as direct inputs", 3.0),
                    item("check_1_2", "Proxy variables have been analyzed for correlation with protected characteristics", 3.0),
                    item("check_1_3", "Training data has been assessed for representation bias", 3.0),
                    item("check_1_4", "Disparate impact testing has been conducted", 3.0),
                    item("check_1_5", "Fairness metrics (demographic parity, equal opportunity) are monitored", 2.0),
                    item("check_1_6", "Adverse impact remediation procedures are documented", 2.0),
                    item("check_1_7", "Human override is available for edge cases", 2.0),
                    item("check_1_8", "Regular fairness audits are scheduled (at least annually)", 1.0),
                ],
            ),
            category(
                "transparency",
                "Transparency & Explainability",
                1.0,
                vec![
                    item("check_2_1", "Individual decisions can be explained to affected consumers", 3.0),
                    item("check_2_2", "Adverse action notices include specific, accurate reasons", 3.0),
                    item("check_2_3", "Model logic and key features are documented", 2.0),
                    item("check_2_4", "Explainability tools (LIME, SHAP) are implemented where appropriate", 2.0),
                    item("check_2_5", "Consumer-friendly explanations are available", 2.0),
                    item("check_2_6", "Regulators can audit the decision-making process", 3.0),
                    item("check_2_7", "Model limitations are documented and communicated", 1.0),
                    item("check_2_8", "Technical documentation meets EU AI Act standards (if applicable)", 2.0),
                ],
            ),
            category(
                "accountability",
                "Accountability & Governance",
                1.0,
                vec![
                    item("check_3_1", "A senior manager is designated as accountable for the AI system", 3.0),
                    item("check_3_2", "Roles and responsibilities are clearly defined and documented", 2.0),
                    item("check_3_3", "Escalation procedures for AI issues are established", 2.0),
                    item("check_3_4", "An AI ethics/governance committee reviews high-risk systems", 1.0),
                    item("check_3_5", "Third-party AI providers are subject to due diligence", 2.0),
                    item("check_3_6", "Contracts with AI vendors include appropriate liability provisions", 1.0),
                    item("check_3_7", "Regular board/executive reporting on AI risks is in place", 1.0),
                    item("check_3_8", "Audit trails capture all AI decisions and can be retrieved", 3.0),
                ],
            ),
            category(
                "data_privacy",
                "Data Quality & Privacy",
                1.0,
                vec![
                    item("check_4_1", "Personal data is collected with appropriate legal basis/consent", 3.0),
                    item("check_4_2", "Data minimization principles are applied", 2.0),
                    item("check_4_3", "Training data quality has been validated", 2.0),
                    item("check_4_4", "Data sources are documented and vetted", 2.0),
                    item("check_4_5", "Data retention policies are defined and enforced", 2.0),
                    item("check_4_6", "Data subject rights (access, deletion) can be fulfilled", 3.0),
                    item("check_4_7", "Privacy impact assessment has been conducted", 2.0),
                    item("check_4_8", "Cross-border data transfer requirements are met", 2.0),
                ],
            ),
            category(
                "security",
                "Security & Robustness",
                1.0,
                vec![
                    item("check_5_1", "The AI system has been tested for adversarial attacks", 2.0),
                    item("check_5_2", "Input validation and anomaly detection are implemented", 2.0),
                    item("check_5_3", "Model drift monitoring is in place", 2.0),
                    item("check_5_4", "Cybersecurity measures are appropriate for data sensitivity", 3.0),
                    item("check_5_5", "Disaster recovery/business continuity plans include AI systems", 2.0),
                    item("check_5_6", "Access controls limit who can modify the AI system", 2.0),
                    item("check_5_7", "Model versioning and rollback capabilities exist", 1.0),
                    item("check_5_8", "Stress testing under extreme conditions has been performed", 1.0),
                ],
            ),
            category(
                "human_oversight",
                "Human Oversight",
                1.0,
                vec![
                    item("check_6_1", "Human review is required for high-stakes decisions", 3.0),
                    item("check_6_2", "Staff can understand and challenge AI recommendations", 2.0),
                    item("check_6_3", "Override mechanisms are available and documented", 2.0),
                    item("check_6_4", "Staff receive training on AI system use and limitations", 2.0),
                    item("check_6_5", "Escalation paths for uncertain cases are defined", 1.0),
                    item("check_6_6", "Human reviewers have sufficient time and information", 1.0),
                    item("check_6_7", "Override decisions are logged and analyzed", 1.0),
                    item("check_6_8", "Alert thresholds trigger human review appropriately", 2.0),
                ],
            ),
            category(
                "consumer_protection",
                "Consumer Protection",
                1.0,
                vec![
                    item("check_7_1", "Consumers are informed when AI is used in decisions affecting them", 2.0),
                    item("check_7_2", "Complaint and appeal procedures are accessible", 3.0),
                    item("check_7_3", "Vulnerable consumers are identified and protected", 2.0),
                    item("check_7_4", "AI-driven products meet genuine customer needs", 2.0),
                    item("check_7_5", "Pricing decisions are fair and non-exploitative", 2.0),
                    item("check_7_6", "Marketing personalization respects consumer preferences", 1.0),
                    item("check_7_7", "Consumer support can address AI-related queries", 2.0),
                    item("check_7_8", "Redress mechanisms are available for AI errors", 3.0),
                ],
            ),
            category(
                "compliance",
                "Regulatory Compliance",
                1.0,
                vec![
                    item("check_8_1", "All applicable regulations have been identified and mapped", 3.0),
                    item("check_8_2", "EU AI Act classification and requirements are addressed (if applicable)", 3.0),
                    item("check_8_3", "Fair lending/ECOA requirements are met (if applicable)", 3.0),
                    item("check_8_4", "Sector-specific regulations are addressed", 2.0),
                    item("check_8_5", "Regulatory change monitoring process is in place", 2.0),
                    item("check_8_6", "Regulatory reporting capabilities are established", 2.0),
                    item("check_8_7", "Regulatory sandbox participation considered (if appropriate)", 0.5),
                    item("check_8_8", "Legal review of AI system compliance has been conducted", 2.0),
                ],
            ),
        ],
        tiers: vec![
            band("Not Ready", 0.0, 60.0),
            band("Needs Improvement", 60.0, 80.0),
            band("Ready for Production", 80.0, SCALE_MAX),
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_contains_both_editions() {
        let ids: Vec<String> = all().into_iter().map(|fw| fw.id).collect();
        assert_eq!(ids, vec!["fintech-ai-risk", "governance-checklist"]);
    }

    #[test]
    fn test_find_by_id() {
        assert!(find("fintech-ai-risk").is_some());
        assert!(find("governance-checklist").is_some());
        assert!(find("nope").is_none());
    }

    #[test]
    fn test_risk_framework_shape() {
        let fw = fintech_ai_risk();
        assert_eq!(fw.categories.len(), 6);
        assert_eq!(fw.question_count(), 30);
        assert_eq!(fw.tiers.len(), 3);
        // Category weights from the published edition
        let weights: Vec<f64> = fw.categories.iter().map(|c| c.weight).collect();
        assert_eq!(weights, vec![1.0, 0.9, 0.85, 0.8, 0.9, 1.0]);
    }

    #[test]
    fn test_checklist_shape() {
        let fw = governance_checklist();
        assert_eq!(fw.categories.len(), 8);
        assert_eq!(fw.question_count(), 64);
        assert!(fw.categories.iter().all(|c| c.weight == 1.0));
    }

    #[test]
    fn test_implementation_scale_has_exempt_option() {
        let fw = fintech_ai_risk();
        let (_, q) = fw.question("fairness_disparate_impact").unwrap();
        match &q.domain {
            ResponseDomain::Scale { options } => {
                let na = options.iter().find(|o| o.id == "na").unwrap();
                assert_eq!(na.credit, None);
            }
            other => panic!("expected scale domain, got {:?}", other),
        }
    }
}
