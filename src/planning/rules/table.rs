//! Built-in 2024 rule data. Figures mirror published Medicaid eligibility
//! guidelines; they are illustrative planning inputs, not legal advice.

use super::{SpousalIncomeProtection, SpousalResourceAllowance, StateRule, StateRuleTable};
use std::collections::HashMap;

/// Baseline shared by most states; per-state entries override what differs.
fn baseline() -> StateRule {
    StateRule {
        resource_limit_single: 2_000.0,
        resource_limit_married: 3_000.0,
        resource_limit_couple_sharing: 3_000.0,
        home_equity_limit: 656_000.0,
        home_exempt_period_months: 6,
        monthly_income_limit: 2_742.0,
        spousal_impoverishment_income: SpousalIncomeProtection {
            minimum_monthly_maintenance_needs: 2_288.75,
            maximum_monthly_maintenance_needs: 3_715.50,
        },
        spousal_resource_allowance: SpousalResourceAllowance {
            minimum: 29_724.0,
            maximum: 148_620.0,
        },
        look_back_period_months: 60,
        penalty_divisor: 8_517.0,
        personal_needs_allowance: 60.0,
        average_nursing_home_cost: 8_517.0,
        requires_miller_trust: false,
        miller_trust_threshold: 0.0,
    }
}

pub(super) fn standard() -> StateRuleTable {
    let mut rules = HashMap::new();

    rules.insert(
        "alabama".to_string(),
        StateRule {
            penalty_divisor: 6_810.0,
            personal_needs_allowance: 30.0,
            average_nursing_home_cost: 7_118.0,
            requires_miller_trust: true,
            miller_trust_threshold: 2_742.0,
            ..baseline()
        },
    );

    rules.insert(
        "alaska".to_string(),
        StateRule {
            home_equity_limit: 984_000.0,
            penalty_divisor: 15_817.0,
            personal_needs_allowance: 200.0,
            average_nursing_home_cost: 33_994.0,
            requires_miller_trust: true,
            miller_trust_threshold: 2_742.0,
            ..baseline()
        },
    );

    rules.insert(
        "arizona".to_string(),
        StateRule {
            penalty_divisor: 9_284.0,
            personal_needs_allowance: 116.25,
            average_nursing_home_cost: 8_111.0,
            requires_miller_trust: true,
            miller_trust_threshold: 2_742.0,
            ..baseline()
        },
    );

    rules.insert(
        "arkansas".to_string(),
        StateRule {
            penalty_divisor: 5_950.0,
            personal_needs_allowance: 40.0,
            average_nursing_home_cost: 6_370.0,
            ..baseline()
        },
    );

    // California keeps a 30-month look-back and much higher resource limits.
    rules.insert(
        "california".to_string(),
        StateRule {
            resource_limit_single: 130_000.0,
            resource_limit_married: 195_000.0,
            resource_limit_couple_sharing: 195_000.0,
            home_equity_limit: 1_000_000.0,
            monthly_income_limit: 1_583.0,
            look_back_period_months: 30,
            penalty_divisor: 10_933.0,
            personal_needs_allowance: 35.0,
            average_nursing_home_cost: 10_798.0,
            ..baseline()
        },
    );

    StateRuleTable::new(rules, baseline())
}
