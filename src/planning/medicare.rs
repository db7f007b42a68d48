//! Simplified Medicare coverage screen used to sequence planning advice.

use super::intake::ClientInfo;
use serde::{Deserialize, Serialize};

/// Skilled-nursing benefit available when Medicare applies before Medicaid.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MedicareCoverage {
    pub potential_coverage_days: u16,
    pub full_coverage_days: u16,
    pub co_insurance_days: u16,
    /// Daily co-insurance reference rate in USD; updated annually.
    pub co_insurance_rate: f64,
}

/// Outcome of the Medicare screen for one submission.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MedicareAssessment {
    pub eligible_for_medicare: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub coverage: Option<MedicareCoverage>,
}

/// Eligible only after a recent qualifying hospital stay that leads to
/// skilled care.
pub fn assess(client: &ClientInfo) -> MedicareAssessment {
    if client.recent_hospital_stay && client.requires_skilled_care {
        MedicareAssessment {
            eligible_for_medicare: true,
            coverage: Some(MedicareCoverage {
                potential_coverage_days: 100,
                full_coverage_days: 20,
                co_insurance_days: 80,
                co_insurance_rate: 200.0,
            }),
        }
    } else {
        MedicareAssessment {
            eligible_for_medicare: false,
            coverage: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::planning::intake::{HealthStatus, MaritalStatus};

    fn client(recent_hospital_stay: bool, requires_skilled_care: bool) -> ClientInfo {
        ClientInfo {
            name: "Test".to_string(),
            age: 72.0,
            marital_status: MaritalStatus::Single,
            health_status: HealthStatus::Stable,
            is_crisis: false,
            recent_hospital_stay,
            requires_skilled_care,
        }
    }

    #[test]
    fn requires_both_hospital_stay_and_skilled_care() {
        assert!(!assess(&client(false, false)).eligible_for_medicare);
        assert!(!assess(&client(true, false)).eligible_for_medicare);
        assert!(!assess(&client(false, true)).eligible_for_medicare);
        assert!(assess(&client(true, true)).eligible_for_medicare);
    }

    #[test]
    fn eligible_assessment_carries_coverage_days() {
        let assessment = assess(&client(true, true));
        let coverage = assessment.coverage.expect("coverage present when eligible");
        assert_eq!(coverage.potential_coverage_days, 100);
        assert_eq!(coverage.full_coverage_days, 20);
        assert_eq!(coverage.co_insurance_days, 80);
    }
}
