//! State-specific Medicaid financial constants (2024 figures).
//!
//! The table is static configuration: built once, never mutated, and
//! injected into the engine so lookups stay testable. Unknown or empty
//! state identifiers resolve to the default entry rather than failing.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

mod table;

/// Income floor and ceiling the non-applying spouse may retain each month.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpousalIncomeProtection {
    pub minimum_monthly_maintenance_needs: f64,
    pub maximum_monthly_maintenance_needs: f64,
}

/// Asset floor and ceiling the non-applying spouse may retain.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpousalResourceAllowance {
    pub minimum: f64,
    pub maximum: f64,
}

/// Financial constants Medicaid applies in a given state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StateRule {
    /// Asset ceiling for a single applicant.
    pub resource_limit_single: f64,
    /// Asset ceiling when one spouse applies and the other stays in the community.
    pub resource_limit_married: f64,
    /// Asset ceiling when both spouses apply.
    pub resource_limit_couple_sharing: f64,
    /// Maximum exempt home equity.
    pub home_equity_limit: f64,
    /// Months the home stays exempt once the applicant enters a facility.
    pub home_exempt_period_months: u8,
    /// Monthly income ceiling for categorical eligibility.
    pub monthly_income_limit: f64,
    pub spousal_impoverishment_income: SpousalIncomeProtection,
    pub spousal_resource_allowance: SpousalResourceAllowance,
    /// Months of scrutinized asset transfers before application.
    pub look_back_period_months: u8,
    /// Dollar amount equating to one month of transfer penalty.
    pub penalty_divisor: f64,
    /// Monthly amount the applicant keeps after entering care.
    pub personal_needs_allowance: f64,
    /// Informational monthly reference cost.
    pub average_nursing_home_cost: f64,
    pub requires_miller_trust: bool,
    pub miller_trust_threshold: f64,
}

impl StateRule {
    /// Penalty period in months for improper transfers inside the look-back
    /// window, rounded up to two decimal places. Non-positive transfer
    /// amounts carry no penalty.
    pub fn transfer_penalty_months(&self, transfer_amount: f64) -> f64 {
        if transfer_amount <= 0.0 {
            return 0.0;
        }
        (transfer_amount / self.penalty_divisor * 100.0).ceil() / 100.0
    }
}

/// Immutable lookup table keyed by normalized state identifier.
#[derive(Debug, Clone)]
pub struct StateRuleTable {
    rules: HashMap<String, StateRule>,
    fallback: StateRule,
}

impl StateRuleTable {
    pub fn new(rules: HashMap<String, StateRule>, fallback: StateRule) -> Self {
        Self { rules, fallback }
    }

    /// Built-in table covering the states with published figures plus the
    /// default fallback entry.
    pub fn standard() -> Self {
        table::standard()
    }

    /// Look up the rules for a state identifier. Input is trimmed and
    /// lowercased before the lookup; anything unresolved falls back to the
    /// default entry, so this never fails.
    pub fn get(&self, state: &str) -> &StateRule {
        let normalized = state.trim().to_ascii_lowercase();
        self.rules.get(&normalized).unwrap_or(&self.fallback)
    }

    /// The default entry used for unknown states.
    pub fn fallback(&self) -> &StateRule {
        &self.fallback
    }
}
