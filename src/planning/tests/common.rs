use crate::planning::intake::QuizSubmission;

/// Single Alabama applicant with $50k in the bank and nothing else,
/// the baseline fixture most tests tweak.
pub(super) fn single_alabama_submission() -> QuizSubmission {
    QuizSubmission {
        first_name: Some("Margaret".to_string()),
        age: Some("78".to_string()),
        marital_status: Some("single".to_string()),
        state: Some("alabama".to_string()),
        health_status: Some("stable".to_string()),
        liquid_assets: Some("50000".to_string()),
        ..QuizSubmission::default()
    }
}
