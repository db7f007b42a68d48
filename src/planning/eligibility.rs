//! Resource and income screen: spend-down, spousal protections, copay, and
//! the recommended approach.

use super::assets::{AssetCategory, AssetRecord, IncomeRecord};
use super::intake::{ClientInfo, MaritalStatus};
use super::rules::StateRule;
use super::urgency::PlanningUrgency;
use serde::{Deserialize, Serialize};

/// Spend-down above this amount suggests self-funding over protection planning.
const SELF_FUNDING_THRESHOLD: f64 = 500_000.0;

pub const NO_SPENDDOWN_APPROACH: &str =
    "No asset spend-down needed. Focus on application and verification process.";
pub const SELF_FUNDING_APPROACH: &str =
    "Consider self-funding strategy. Restructure portfolio to maximize income.";
pub const PROTECTION_PLAN_APPROACH: &str =
    "Develop asset protection plan for Medicaid eligibility.";

/// Per-state constants echoed back so report views can cite them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StateSpecificDetails {
    /// Normalized (trimmed, lowercased) state identifier the rule lookup used.
    pub state: String,
    pub home_equity_exemption: f64,
    pub home_equity_limit: f64,
    pub personal_needs_allowance: f64,
    pub look_back_period_months: u8,
    pub penalty_divisor: f64,
    pub average_nursing_home_cost: f64,
}

/// Outcome of the eligibility screen for one submission. Read-only once
/// produced; holds no references back to its inputs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EligibilityResult {
    pub total_assets: f64,
    pub countable_assets: f64,
    pub non_countable_assets: f64,
    pub spenddown_amount: f64,
    pub estimated_monthly_copay: f64,
    pub recommended_approach: String,
    pub planning_urgency: PlanningUrgency,
    pub planning_urgency_guidance: String,
    pub years_to_review: u8,
    pub miller_trust_required: bool,
    /// Home equity above the exemption limit. Informational only; it is
    /// deliberately not folded into countable assets.
    pub home_equity_excess: f64,
    pub state_specific_details: StateSpecificDetails,
}

/// Resource limit applicable to the filing configuration. Widowed and
/// divorced applicants use the single limit.
pub(crate) fn resource_limit(rule: &StateRule, marital_status: MaritalStatus) -> f64 {
    match marital_status {
        MaritalStatus::MarriedBothApplying => rule.resource_limit_couple_sharing,
        MaritalStatus::MarriedOneApplying => rule.resource_limit_married,
        MaritalStatus::Single | MaritalStatus::Widowed | MaritalStatus::Divorced => {
            rule.resource_limit_single
        }
    }
}

/// Assess Medicaid eligibility: classify assets, compute the spend-down,
/// apply spousal income protections, and rate planning urgency.
///
/// Pure computation over its arguments; never fails. All numeric guards use
/// floor-at-zero so garbage input produces a plausible zeroed-out estimate.
pub fn assess_eligibility(
    client: &ClientInfo,
    assets: &AssetRecord,
    income: &IncomeRecord,
    state: &str,
    rule: &StateRule,
) -> EligibilityResult {
    let limit = resource_limit(rule, client.marital_status);

    let countable_assets = assets.countable();
    let non_countable_assets = assets.non_countable();
    let spenddown_amount = (countable_assets - limit).max(0.0);

    let total_income = income.total();

    // When only one spouse applies, the community spouse keeps income
    // between the state's maintenance-needs floor and ceiling.
    let patient_income = if client.marital_status == MaritalStatus::MarriedOneApplying {
        let needs = &rule.spousal_impoverishment_income;
        let spousal_income_needs = total_income.clamp(
            needs.minimum_monthly_maintenance_needs,
            needs.maximum_monthly_maintenance_needs,
        );
        (total_income - spousal_income_needs).max(0.0)
    } else {
        total_income
    };

    let miller_trust_required =
        rule.requires_miller_trust && patient_income > rule.miller_trust_threshold;

    let estimated_monthly_copay = (patient_income - rule.personal_needs_allowance).max(0.0);

    let home_value = assets.get(AssetCategory::Home);
    let home_equity_exemption = home_value.min(rule.home_equity_limit);
    let home_equity_excess = (home_value - rule.home_equity_limit).max(0.0);

    let planning_urgency =
        PlanningUrgency::classify(client.is_crisis, client.health_status, client.age);

    EligibilityResult {
        total_assets: countable_assets + non_countable_assets,
        countable_assets,
        non_countable_assets,
        spenddown_amount,
        estimated_monthly_copay,
        recommended_approach: recommended_approach(spenddown_amount).to_string(),
        planning_urgency,
        planning_urgency_guidance: planning_urgency.guidance().to_string(),
        years_to_review: years_to_review(client.age),
        miller_trust_required,
        home_equity_excess,
        state_specific_details: StateSpecificDetails {
            state: state.trim().to_ascii_lowercase(),
            home_equity_exemption,
            home_equity_limit: rule.home_equity_limit,
            personal_needs_allowance: rule.personal_needs_allowance,
            look_back_period_months: rule.look_back_period_months,
            penalty_divisor: rule.penalty_divisor,
            average_nursing_home_cost: rule.average_nursing_home_cost,
        },
    }
}

/// Years until the plan should be revisited, anchored to age 65 and kept
/// between one and five.
fn years_to_review(age: f64) -> u8 {
    let years_to_65 = (65.0 - age).max(0.0);
    let halved = (years_to_65 / 2.0).floor();
    (halved as u8).clamp(1, 5)
}

fn recommended_approach(spenddown_amount: f64) -> &'static str {
    if spenddown_amount <= 0.0 {
        NO_SPENDDOWN_APPROACH
    } else if spenddown_amount > SELF_FUNDING_THRESHOLD {
        SELF_FUNDING_APPROACH
    } else {
        PROTECTION_PLAN_APPROACH
    }
}
