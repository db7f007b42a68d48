//! Integrated planning pipeline: one quiz submission in, one report out.

use super::eligibility::{assess_eligibility, EligibilityResult};
use super::intake::QuizSubmission;
use super::medicare::{self, MedicareAssessment};
use super::protection::{DetailedProtectionPlan, ProtectionEstimate};
use super::rules::{StateRule, StateRuleTable};
use serde::{Deserialize, Serialize};

/// Subset of the state rules echoed into the report for display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StateRuleSummary {
    pub state: String,
    pub resource_limit_single: f64,
    pub resource_limit_married: f64,
    pub resource_limit_couple_sharing: f64,
    pub home_equity_limit: f64,
    pub look_back_period_months: u8,
    pub penalty_divisor: f64,
    pub average_nursing_home_cost: f64,
}

impl StateRuleSummary {
    fn new(state: Option<&str>, rule: &StateRule) -> Self {
        Self {
            state: state
                .filter(|value| !value.trim().is_empty())
                .unwrap_or("Unknown")
                .to_string(),
            resource_limit_single: rule.resource_limit_single,
            resource_limit_married: rule.resource_limit_married,
            resource_limit_couple_sharing: rule.resource_limit_couple_sharing,
            home_equity_limit: rule.home_equity_limit,
            look_back_period_months: rule.look_back_period_months,
            penalty_divisor: rule.penalty_divisor,
            average_nursing_home_cost: rule.average_nursing_home_cost,
        }
    }
}

/// Flat record the report views and the CRM payload builder consume.
/// Produced fresh per submission and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanningReport {
    pub total_assets: f64,
    pub countable_assets: f64,
    pub min_protection: f64,
    pub max_protection: f64,
    pub min_percentage: u32,
    pub max_percentage: u32,
    pub eligibility: EligibilityResult,
    pub medicare_coverage: MedicareAssessment,
    pub spend_down_amount: f64,
    pub planning_approach: String,
    pub planning_timeline: Vec<String>,
    pub miller_trust_required: bool,
    pub penalty_divisor: f64,
    pub detailed_protection_plan: DetailedProtectionPlan,
    pub state_rules: StateRuleSummary,
}

/// Stateless engine owning the immutable rule table. Safe to share across
/// concurrent submissions without coordination.
#[derive(Debug, Clone)]
pub struct PlanningEngine {
    rules: StateRuleTable,
}

impl PlanningEngine {
    pub fn new(rules: StateRuleTable) -> Self {
        Self { rules }
    }

    /// Engine over the built-in rule table.
    pub fn standard() -> Self {
        Self::new(StateRuleTable::standard())
    }

    pub fn rules(&self) -> &StateRuleTable {
        &self.rules
    }

    /// Run the full pipeline for one submission: normalize, look up the
    /// state rules, screen eligibility and Medicare, then estimate
    /// protection. Never fails; garbage input degrades to a zeroed-out
    /// estimate.
    pub fn assess(&self, submission: &QuizSubmission) -> PlanningReport {
        let client = submission.client_info();
        let assets = submission.asset_record();
        let income = submission.income_record();
        let state = submission.state();
        let rule = self.rules.get(state);

        let eligibility = assess_eligibility(&client, &assets, &income, state, rule);
        let medicare_coverage = medicare::assess(&client);
        let estimate = ProtectionEstimate::lead_magnet(
            eligibility.countable_assets,
            eligibility.spenddown_amount,
            &medicare_coverage,
        );

        PlanningReport {
            total_assets: eligibility.total_assets,
            countable_assets: eligibility.countable_assets,
            min_protection: estimate.min_protection,
            max_protection: estimate.max_protection,
            min_percentage: estimate.min_percentage,
            max_percentage: estimate.max_percentage,
            medicare_coverage,
            spend_down_amount: eligibility.spenddown_amount,
            planning_approach: estimate.planning_approach,
            planning_timeline: estimate.planning_timeline,
            miller_trust_required: eligibility.miller_trust_required,
            penalty_divisor: rule.penalty_divisor,
            detailed_protection_plan: estimate.detailed_protection_plan,
            state_rules: StateRuleSummary::new(submission.state.as_deref(), rule),
            eligibility,
        }
    }

    /// Protection numbers for the professional report view, computed
    /// against the spend-down excess instead of total countable assets.
    pub fn professional_estimate(&self, submission: &QuizSubmission) -> ProtectionEstimate {
        let client = submission.client_info();
        let assets = submission.asset_record();
        let income = submission.income_record();
        let state = submission.state();
        let rule = self.rules.get(state);

        let eligibility = assess_eligibility(&client, &assets, &income, state, rule);
        let medicare_coverage = medicare::assess(&client);
        ProtectionEstimate::professional(
            eligibility.countable_assets,
            eligibility.spenddown_amount,
            &medicare_coverage,
        )
    }
}
