use super::common::single_alabama_submission;
use crate::planning::assets::AssetCategory;
use crate::planning::intake::{parse_amount, HealthStatus, MaritalStatus, QuizSubmission};

#[test]
fn parse_amount_reads_formatted_currency() {
    assert_eq!(parse_amount(Some("$1,234.56")), 1_234.56);
    assert_eq!(parse_amount(Some("250000")), 250_000.0);
    assert_eq!(parse_amount(Some("  42  ")), 42.0);
}

#[test]
fn parse_amount_degrades_to_zero_instead_of_failing() {
    assert_eq!(parse_amount(None), 0.0);
    assert_eq!(parse_amount(Some("")), 0.0);
    assert_eq!(parse_amount(Some("unknown")), 0.0);
    assert_eq!(parse_amount(Some("n/a")), 0.0);
    // Whole-string parse: double-dotted input is zero, not truncated to 12.3.
    assert_eq!(parse_amount(Some("12.3.4")), 0.0);
    assert_eq!(parse_amount(Some("-500")), 500.0);
}

#[test]
fn false_flags_zero_their_amount_fields() {
    let submission = QuizSubmission {
        has_retirement_accounts: false,
        retirement_value: Some("90000".to_string()),
        owns_home: false,
        home_value: Some("300000".to_string()),
        ..single_alabama_submission()
    };

    let assets = submission.asset_record();
    assert_eq!(assets.get(AssetCategory::Retirement), 0.0);
    assert_eq!(assets.get(AssetCategory::Home), 0.0);
    assert_eq!(assets.get(AssetCategory::BankAccounts), 50_000.0);
}

#[test]
fn unknown_life_insurance_value_contributes_zero() {
    let submission = QuizSubmission {
        has_life_insurance: true,
        life_insurance_value: Some("unknown".to_string()),
        ..single_alabama_submission()
    };

    let assets = submission.asset_record();
    assert_eq!(assets.get(AssetCategory::LifeInsurance), 0.0);
}

#[test]
fn marital_status_parses_tolerantly() {
    assert_eq!(
        MaritalStatus::from_answer("married-one"),
        MaritalStatus::MarriedOneApplying
    );
    assert_eq!(
        MaritalStatus::from_answer(" Married-Both "),
        MaritalStatus::MarriedBothApplying
    );
    assert_eq!(MaritalStatus::from_answer("widowed"), MaritalStatus::Widowed);
    assert_eq!(MaritalStatus::from_answer(""), MaritalStatus::Single);
    assert_eq!(
        MaritalStatus::from_answer("something-else"),
        MaritalStatus::Single
    );
}

#[test]
fn health_status_parses_tolerantly() {
    assert_eq!(HealthStatus::from_answer("critical"), HealthStatus::Critical);
    assert_eq!(
        HealthStatus::from_answer(" Declining"),
        HealthStatus::Declining
    );
    assert_eq!(HealthStatus::from_answer(""), HealthStatus::Stable);
    assert_eq!(HealthStatus::from_answer("great"), HealthStatus::Stable);
}

#[test]
fn partial_json_payload_deserializes_with_defaults() {
    let submission: QuizSubmission = serde_json::from_str(
        r#"{
            "firstName": "Ray",
            "state": "Alabama",
            "liquidAssets": "$12,000",
            "ownsHome": true,
            "homeValue": "180000"
        }"#,
    )
    .expect("partial payload deserializes");

    assert_eq!(submission.first_name.as_deref(), Some("Ray"));
    assert!(submission.owns_home);
    assert!(!submission.is_crisis);
    assert_eq!(submission.asset_record().get(AssetCategory::Home), 180_000.0);
}
