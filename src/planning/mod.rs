//! Estimation engine for Medicaid asset-protection planning.
//!
//! The engine is a pure, single-pass computation: a flat quiz submission
//! plus the static state rule table in, eligibility and protection records
//! out. It never raises errors for malformed input; unparseable numbers
//! degrade to zero and unknown states fall back to the default rule entry.

pub mod assets;
pub mod eligibility;
pub mod facility;
pub mod intake;
pub mod medicare;
pub mod protection;
pub mod report;
pub mod rules;
pub mod urgency;

#[cfg(test)]
mod tests;

pub use assets::{AssetCategory, AssetRecord, IncomeRecord};
pub use eligibility::{assess_eligibility, EligibilityResult, StateSpecificDetails};
pub use facility::{FacilityAssessment, FacilityCompatibility, FacilityInfo};
pub use intake::{parse_amount, ClientInfo, HealthStatus, MaritalStatus, QuizSubmission};
pub use medicare::{MedicareAssessment, MedicareCoverage};
pub use protection::{DetailedProtectionPlan, ProtectionEstimate};
pub use report::{PlanningEngine, PlanningReport, StateRuleSummary};
pub use rules::{SpousalIncomeProtection, SpousalResourceAllowance, StateRule, StateRuleTable};
pub use urgency::PlanningUrgency;
