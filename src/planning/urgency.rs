//! Qualitative planning-urgency classification.

use super::intake::HealthStatus;
use serde::{Deserialize, Serialize};

/// How soon the applicant should begin formal Medicaid planning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlanningUrgency {
    High,
    Medium,
    Low,
}

impl PlanningUrgency {
    /// Ordered rule evaluation, first match wins: an explicit crisis flag,
    /// critical health, or age 80+ is High; declining health or age 70+ is
    /// Medium; everything else is Low.
    pub fn classify(is_crisis: bool, health_status: HealthStatus, age: f64) -> Self {
        if is_crisis || health_status == HealthStatus::Critical || age >= 80.0 {
            Self::High
        } else if health_status == HealthStatus::Declining || age >= 70.0 {
            Self::Medium
        } else {
            Self::Low
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::High => "High",
            Self::Medium => "Medium",
            Self::Low => "Low",
        }
    }

    /// Display string shown alongside the rating in both report views.
    pub const fn guidance(self) -> &'static str {
        match self {
            Self::High => "High - Immediate crisis planning required",
            Self::Medium => "Medium - Begin pre-planning soon",
            Self::Low => "Low - Good candidate for long-term pre-planning",
        }
    }
}
