//! Facility Medicaid-compatibility screening.

use serde::{Deserialize, Serialize};

/// Details about the long-term care facility under consideration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FacilityInfo {
    pub is_medicaid_certified: bool,
    pub has_available_medicaid_bed: bool,
    /// Months of private pay the facility requires before a Medicaid bed.
    pub private_pay_requirement_months: u32,
}

/// Compatibility view echoed into the professional report.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FacilityCompatibility {
    pub is_medicaid_certified: bool,
    pub has_available_medicaid_bed: bool,
    pub private_pay_requirement_months: u32,
}

/// Outcome of the facility screen. Missing information is a warning value,
/// not an error.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "status", content = "details")]
pub enum FacilityAssessment {
    Compatible(FacilityCompatibility),
    MissingInformation,
}

impl FacilityAssessment {
    pub const fn warning(&self) -> Option<&'static str> {
        match self {
            Self::Compatible(_) => None,
            Self::MissingInformation => Some(
                "Facility information not provided. Unable to assess Medicaid compatibility.",
            ),
        }
    }
}

/// Screen the chosen facility for Medicaid certification and bed
/// availability.
pub fn assess(info: Option<&FacilityInfo>) -> FacilityAssessment {
    match info {
        Some(info) => FacilityAssessment::Compatible(FacilityCompatibility {
            is_medicaid_certified: info.is_medicaid_certified,
            has_available_medicaid_bed: info.has_available_medicaid_bed,
            private_pay_requirement_months: info.private_pay_requirement_months,
        }),
        None => FacilityAssessment::MissingInformation,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_info_yields_warning_not_error() {
        let assessment = assess(None);
        assert_eq!(assessment, FacilityAssessment::MissingInformation);
        assert!(assessment.warning().is_some());
    }

    #[test]
    fn provided_info_passes_through() {
        let info = FacilityInfo {
            is_medicaid_certified: true,
            has_available_medicaid_bed: false,
            private_pay_requirement_months: 3,
        };
        match assess(Some(&info)) {
            FacilityAssessment::Compatible(details) => {
                assert!(details.is_medicaid_certified);
                assert!(!details.has_available_medicaid_bed);
                assert_eq!(details.private_pay_requirement_months, 3);
            }
            other => panic!("expected compatibility details, got {other:?}"),
        }
    }
}
