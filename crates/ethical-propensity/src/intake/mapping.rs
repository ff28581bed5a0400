use super::normalizer::normalize_name;
use crate::scoring::RawInputs;
use std::collections::HashMap;
use std::sync::OnceLock;

/// One counter of [`RawInputs`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputField {
    TotalDecisions,
    BiasComplaints,
    ExplainableAiDecisions,
    HumanReviewedDecisions,
    TotalDataTransactions,
    PolicyViolations,
    DiverseHires,
    TotalHires,
    PositiveFeedback,
    TotalFeedback,
}

impl InputField {
    pub const fn key(self) -> &'static str {
        match self {
            Self::TotalDecisions => "total_decisions",
            Self::BiasComplaints => "bias_complaints",
            Self::ExplainableAiDecisions => "explainable_ai_decisions",
            Self::HumanReviewedDecisions => "human_reviewed_decisions",
            Self::TotalDataTransactions => "total_data_transactions",
            Self::PolicyViolations => "policy_violations",
            Self::DiverseHires => "diverse_hires",
            Self::TotalHires => "total_hires",
            Self::PositiveFeedback => "positive_feedback",
            Self::TotalFeedback => "total_feedback",
        }
    }

    pub(crate) fn apply(self, inputs: &mut RawInputs, value: f64) {
        let slot = match self {
            Self::TotalDecisions => &mut inputs.total_decisions,
            Self::BiasComplaints => &mut inputs.bias_complaints,
            Self::ExplainableAiDecisions => &mut inputs.explainable_ai_decisions,
            Self::HumanReviewedDecisions => &mut inputs.human_reviewed_decisions,
            Self::TotalDataTransactions => &mut inputs.total_data_transactions,
            Self::PolicyViolations => &mut inputs.policy_violations,
            Self::DiverseHires => &mut inputs.diverse_hires,
            Self::TotalHires => &mut inputs.total_hires,
            Self::PositiveFeedback => &mut inputs.positive_feedback,
            Self::TotalFeedback => &mut inputs.total_feedback,
        };
        *slot = value;
    }
}

static FIELD_NAME_MAP: OnceLock<HashMap<String, InputField>> = OnceLock::new();

pub(crate) fn field_for_normalized(normalized_name: &str) -> Option<InputField> {
    field_name_map().get(normalized_name).copied()
}

fn field_name_map() -> &'static HashMap<String, InputField> {
    FIELD_NAME_MAP.get_or_init(|| {
        const NAME_TO_FIELD: &[(&str, InputField)] = &[
            // Decisions
            ("total_decisions", InputField::TotalDecisions),
            ("Total AI Decisions", InputField::TotalDecisions),
            ("bias_complaints", InputField::BiasComplaints),
            ("Number of Bias Complaints", InputField::BiasComplaints),
            ("explainable_ai_decisions", InputField::ExplainableAiDecisions),
            ("explainable_ai", InputField::ExplainableAiDecisions),
            ("Explainable AI Decisions", InputField::ExplainableAiDecisions),
            ("human_reviewed_decisions", InputField::HumanReviewedDecisions),
            ("human_reviewed", InputField::HumanReviewedDecisions),
            ("Human-Reviewed Decisions", InputField::HumanReviewedDecisions),
            // Data handling
            ("total_data_transactions", InputField::TotalDataTransactions),
            ("data_transactions", InputField::TotalDataTransactions),
            ("Total Data Transactions", InputField::TotalDataTransactions),
            ("policy_violations", InputField::PolicyViolations),
            ("Policy Violations Detected", InputField::PolicyViolations),
            // Hiring outcomes
            ("diverse_hires", InputField::DiverseHires),
            ("Number of Diverse Hires", InputField::DiverseHires),
            ("total_hires", InputField::TotalHires),
            ("Total Hires", InputField::TotalHires),
            // Feedback
            ("positive_feedback", InputField::PositiveFeedback),
            ("Positive Feedback (count)", InputField::PositiveFeedback),
            ("Positive Feedback", InputField::PositiveFeedback),
            ("total_feedback", InputField::TotalFeedback),
            ("Total Feedback (count)", InputField::TotalFeedback),
            ("Total Feedback", InputField::TotalFeedback),
        ];

        let mut map = HashMap::with_capacity(NAME_TO_FIELD.len());
        for (name, field) in NAME_TO_FIELD {
            map.insert(normalize_name(name), *field);
        }
        map
    })
}

#[cfg(test)]
pub(crate) fn lookup_for_tests(name: &str) -> Option<InputField> {
    let normalized = normalize_name(name);
    field_for_normalized(&normalized)
}
