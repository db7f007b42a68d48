//! Heuristic asset-protection estimates for the two report views.

use super::medicare::MedicareAssessment;
use serde::{Deserialize, Serialize};

const LEAD_MAGNET_MIN_RATE: f64 = 0.60;
const LEAD_MAGNET_MAX_RATE: f64 = 0.70;
const HALF_LOAF_RATE: f64 = 0.50;
const MIN_ANNUITY_RATE: f64 = 0.10;
const MAX_ANNUITY_RATE: f64 = 0.20;

pub const MEDICARE_FIRST_APPROACH: &str =
    "Utilize Medicare coverage before transitioning to Medicaid.";
pub const SPEND_DOWN_APPROACH: &str =
    "Develop spend-down strategy to reach Medicaid eligibility.";
pub const APPLY_NOW_APPROACH: &str = "Proceed with Medicaid application.";

/// Fixed milestone sequence shown in both report views.
pub const PLANNING_TIMELINE: [&str; 7] = [
    "Complete detailed asset and income verification.",
    "Develop and implement spend-down strategies (if needed).",
    "Verify Medicare coverage details (if eligible).",
    "Confirm facility Medicaid certification and bed availability.",
    "Prepare and file Medicaid application.",
    "Undergo Medicaid verification process.",
    "Follow up post-eligibility for estate planning review.",
];

/// Strategy-level breakdown computed against the spend-down excess.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DetailedProtectionPlan {
    /// Reverse half-a-loaf: roughly half the excess is giftable.
    pub half_loaf_protection: f64,
    pub min_annuity_protection: f64,
    pub max_annuity_protection: f64,
}

impl DetailedProtectionPlan {
    pub fn from_excess(excess: f64) -> Self {
        Self {
            half_loaf_protection: (excess * HALF_LOAF_RATE).round(),
            min_annuity_protection: (excess * MIN_ANNUITY_RATE).round(),
            max_annuity_protection: (excess * MAX_ANNUITY_RATE).round(),
        }
    }
}

/// Dollar range and percentages an asset-protection plan could preserve,
/// with the narrative approach and milestone timeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProtectionEstimate {
    pub min_protection: f64,
    pub max_protection: f64,
    pub min_percentage: u32,
    pub max_percentage: u32,
    pub detailed_protection_plan: DetailedProtectionPlan,
    pub planning_approach: String,
    pub planning_timeline: Vec<String>,
}

impl ProtectionEstimate {
    /// Simplified estimate for the lead-magnet report: a fixed 60-70% of
    /// countable assets.
    pub fn lead_magnet(
        countable_assets: f64,
        spenddown_amount: f64,
        medicare: &MedicareAssessment,
    ) -> Self {
        Self {
            min_protection: (countable_assets * LEAD_MAGNET_MIN_RATE).round(),
            max_protection: (countable_assets * LEAD_MAGNET_MAX_RATE).round(),
            min_percentage: (LEAD_MAGNET_MIN_RATE * 100.0).round() as u32,
            max_percentage: (LEAD_MAGNET_MAX_RATE * 100.0).round() as u32,
            detailed_protection_plan: DetailedProtectionPlan::from_excess(spenddown_amount),
            planning_approach: planning_approach(medicare, spenddown_amount).to_string(),
            planning_timeline: planning_timeline(),
        }
    }

    /// Detailed estimate for the professional report: half-a-loaf plus
    /// annuity strategies applied to the excess over the resource limit,
    /// with percentages expressed against countable assets.
    pub fn professional(
        countable_assets: f64,
        spenddown_amount: f64,
        medicare: &MedicareAssessment,
    ) -> Self {
        let plan = DetailedProtectionPlan::from_excess(spenddown_amount);
        let min_protection = plan.half_loaf_protection + plan.min_annuity_protection;
        let max_protection = plan.half_loaf_protection + plan.max_annuity_protection;
        Self {
            min_protection,
            max_protection,
            min_percentage: percentage_of(min_protection, countable_assets),
            max_percentage: percentage_of(max_protection, countable_assets),
            detailed_protection_plan: plan,
            planning_approach: planning_approach(medicare, spenddown_amount).to_string(),
            planning_timeline: planning_timeline(),
        }
    }
}

/// Share of countable assets protected. Short-circuits to zero when there
/// is nothing to divide by.
fn percentage_of(protection: f64, countable_assets: f64) -> u32 {
    if countable_assets <= 0.0 {
        return 0;
    }
    (protection / countable_assets * 100.0).round() as u32
}

/// Narrative sequencing: Medicare first when it applies, then the
/// spend-down strategy, otherwise straight to the application.
pub fn planning_approach(medicare: &MedicareAssessment, spenddown_amount: f64) -> &'static str {
    if medicare.eligible_for_medicare {
        MEDICARE_FIRST_APPROACH
    } else if spenddown_amount > 0.0 {
        SPEND_DOWN_APPROACH
    } else {
        APPLY_NOW_APPROACH
    }
}

pub fn planning_timeline() -> Vec<String> {
    PLANNING_TIMELINE.iter().map(|step| step.to_string()).collect()
}
