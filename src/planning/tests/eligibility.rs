use super::common::single_alabama_submission;
use crate::planning::eligibility::{
    assess_eligibility, NO_SPENDDOWN_APPROACH, PROTECTION_PLAN_APPROACH, SELF_FUNDING_APPROACH,
};
use crate::planning::intake::QuizSubmission;
use crate::planning::rules::StateRuleTable;
use crate::planning::urgency::PlanningUrgency;

fn assess(submission: &QuizSubmission) -> crate::planning::eligibility::EligibilityResult {
    let rules = StateRuleTable::standard();
    let state = submission.state();
    assess_eligibility(
        &submission.client_info(),
        &submission.asset_record(),
        &submission.income_record(),
        state,
        rules.get(state),
    )
}

#[test]
fn single_alabama_applicant_spends_down_to_the_limit() {
    let result = assess(&single_alabama_submission());

    assert_eq!(result.countable_assets, 50_000.0);
    assert_eq!(result.non_countable_assets, 0.0);
    assert_eq!(result.total_assets, 50_000.0);
    // Alabama single resource limit is $2,000.
    assert_eq!(result.spenddown_amount, 48_000.0);
    assert_eq!(result.recommended_approach, PROTECTION_PLAN_APPROACH);
}

#[test]
fn community_spouse_keeps_income_up_to_the_maintenance_floor() {
    let submission = QuizSubmission {
        marital_status: Some("married-one".to_string()),
        monthly_income: Some("1000".to_string()),
        spouse_monthly_income: Some("0".to_string()),
        ..single_alabama_submission()
    };

    let result = assess(&submission);

    // Total income 1000 clamps up to the 2288.75 maintenance floor, leaving
    // the applicant nothing; copay floors at zero after the $30 allowance.
    assert_eq!(result.estimated_monthly_copay, 0.0);
    assert!(!result.miller_trust_required);
}

#[test]
fn single_applicant_income_flows_straight_to_copay() {
    let submission = QuizSubmission {
        monthly_income: Some("2000".to_string()),
        ..single_alabama_submission()
    };

    let result = assess(&submission);
    // 2000 minus Alabama's $30 personal needs allowance.
    assert_eq!(result.estimated_monthly_copay, 1_970.0);
}

#[test]
fn miller_trust_flags_when_patient_income_exceeds_threshold() {
    let submission = QuizSubmission {
        monthly_income: Some("3000".to_string()),
        ..single_alabama_submission()
    };

    let result = assess(&submission);
    // Alabama requires a Miller Trust above $2,742 of patient income.
    assert!(result.miller_trust_required);
}

#[test]
fn married_both_uses_couple_sharing_limit() {
    let submission = QuizSubmission {
        marital_status: Some("married-both".to_string()),
        ..single_alabama_submission()
    };

    let result = assess(&submission);
    assert_eq!(result.spenddown_amount, 47_000.0);
}

#[test]
fn no_spenddown_when_assets_are_under_the_limit() {
    let submission = QuizSubmission {
        liquid_assets: Some("1500".to_string()),
        ..single_alabama_submission()
    };

    let result = assess(&submission);
    assert_eq!(result.spenddown_amount, 0.0);
    assert_eq!(result.recommended_approach, NO_SPENDDOWN_APPROACH);
}

#[test]
fn very_large_spenddown_recommends_self_funding() {
    let submission = QuizSubmission {
        liquid_assets: Some("900000".to_string()),
        ..single_alabama_submission()
    };

    let result = assess(&submission);
    assert_eq!(result.recommended_approach, SELF_FUNDING_APPROACH);
}

#[test]
fn home_equity_excess_is_informational_only() {
    let submission = QuizSubmission {
        owns_home: true,
        home_value: Some("800000".to_string()),
        ..single_alabama_submission()
    };

    let result = assess(&submission);
    // Alabama's exemption caps at $656,000; the rest is flagged but not
    // counted against the resource limit.
    assert_eq!(result.home_equity_excess, 144_000.0);
    assert_eq!(result.state_specific_details.home_equity_exemption, 656_000.0);
    assert_eq!(result.countable_assets, 50_000.0);
}

#[test]
fn years_to_review_stays_between_one_and_five() {
    let at_82 = assess(&QuizSubmission {
        age: Some("82".to_string()),
        ..single_alabama_submission()
    });
    assert_eq!(at_82.years_to_review, 1);
    assert_eq!(at_82.planning_urgency, PlanningUrgency::High);

    let at_40 = assess(&QuizSubmission {
        age: Some("40".to_string()),
        health_status: Some("stable".to_string()),
        ..single_alabama_submission()
    });
    assert_eq!(at_40.years_to_review, 5);

    let at_62 = assess(&QuizSubmission {
        age: Some("62".to_string()),
        ..single_alabama_submission()
    });
    // floor((65 - 62) / 2) = 1
    assert_eq!(at_62.years_to_review, 1);
}

#[test]
fn state_details_carry_the_normalized_identifier() {
    let submission = QuizSubmission {
        state: Some("  Alabama ".to_string()),
        ..single_alabama_submission()
    };

    let result = assess(&submission);
    assert_eq!(result.state_specific_details.state, "alabama");
    assert_eq!(result.state_specific_details.personal_needs_allowance, 30.0);
}

#[test]
fn unknown_state_assesses_against_default_rules() {
    let submission = QuizSubmission {
        state: Some("Atlantis".to_string()),
        ..single_alabama_submission()
    };

    let result = assess(&submission);
    assert_eq!(result.spenddown_amount, 48_000.0);
    assert_eq!(result.state_specific_details.personal_needs_allowance, 60.0);
}

#[test]
fn empty_submission_produces_a_zeroed_estimate() {
    let result = assess(&QuizSubmission::default());

    assert_eq!(result.total_assets, 0.0);
    assert_eq!(result.countable_assets, 0.0);
    assert_eq!(result.spenddown_amount, 0.0);
    assert_eq!(result.estimated_monthly_copay, 0.0);
    assert_eq!(result.recommended_approach, NO_SPENDDOWN_APPROACH);
}
