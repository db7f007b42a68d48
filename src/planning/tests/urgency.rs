use crate::planning::intake::HealthStatus;
use crate::planning::urgency::PlanningUrgency;

#[test]
fn crisis_flag_dominates_regardless_of_age_or_health() {
    assert_eq!(
        PlanningUrgency::classify(true, HealthStatus::Stable, 30.0),
        PlanningUrgency::High
    );
}

#[test]
fn age_eighty_is_high_even_when_otherwise_stable() {
    assert_eq!(
        PlanningUrgency::classify(false, HealthStatus::Stable, 85.0),
        PlanningUrgency::High
    );
    assert_eq!(
        PlanningUrgency::classify(false, HealthStatus::Stable, 80.0),
        PlanningUrgency::High
    );
}

#[test]
fn critical_health_is_high_at_any_age() {
    assert_eq!(
        PlanningUrgency::classify(false, HealthStatus::Critical, 45.0),
        PlanningUrgency::High
    );
}

#[test]
fn declining_health_or_age_seventy_is_medium() {
    assert_eq!(
        PlanningUrgency::classify(false, HealthStatus::Declining, 50.0),
        PlanningUrgency::Medium
    );
    assert_eq!(
        PlanningUrgency::classify(false, HealthStatus::Stable, 72.0),
        PlanningUrgency::Medium
    );
}

#[test]
fn otherwise_low() {
    assert_eq!(
        PlanningUrgency::classify(false, HealthStatus::Stable, 40.0),
        PlanningUrgency::Low
    );
}

#[test]
fn guidance_strings_match_report_copy() {
    assert_eq!(
        PlanningUrgency::High.guidance(),
        "High - Immediate crisis planning required"
    );
    assert_eq!(
        PlanningUrgency::Medium.guidance(),
        "Medium - Begin pre-planning soon"
    );
    assert_eq!(
        PlanningUrgency::Low.guidance(),
        "Low - Good candidate for long-term pre-planning"
    );
}
