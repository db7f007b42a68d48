//! Raw quiz payload schema and tolerant normalization into engine inputs.
//!
//! The quiz wizard submits loosely-typed answers: dollar amounts arrive as
//! free-form strings and yes/no answers as booleans. Normalization never
//! fails; anything unparseable degrades to zero.

use super::assets::{AssetCategory, AssetRecord, IncomeRecord};
use serde::{Deserialize, Serialize};

/// Sentinel the quiz uses when the respondent cannot value an asset.
const UNKNOWN_SENTINEL: &str = "unknown";

/// Flat quiz answers exactly as the embedding form wizard submits them.
/// Every field defaults so partial payloads deserialize cleanly.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct QuizSubmission {
    pub first_name: Option<String>,
    pub age: Option<String>,
    pub marital_status: Option<String>,
    pub state: Option<String>,
    pub health_status: Option<String>,
    pub is_crisis: bool,
    pub recent_hospital_stay: bool,
    pub requires_skilled_care: bool,
    pub liquid_assets: Option<String>,
    pub owns_home: bool,
    pub home_value: Option<String>,
    pub has_vehicles: bool,
    pub vehicles_value: Option<String>,
    pub has_retirement_accounts: bool,
    pub retirement_value: Option<String>,
    pub has_spouse_retirement_accounts: bool,
    pub spouse_retirement_value: Option<String>,
    pub has_life_insurance: bool,
    pub life_insurance_value: Option<String>,
    pub owns_additional_property: bool,
    pub additional_property_value: Option<String>,
    pub monthly_income: Option<String>,
    pub spouse_monthly_income: Option<String>,
}

impl QuizSubmission {
    /// Essential client details for urgency and Medicare screening.
    pub fn client_info(&self) -> ClientInfo {
        ClientInfo {
            name: self.first_name.clone().unwrap_or_default(),
            age: parse_amount(self.age.as_deref()),
            marital_status: MaritalStatus::from_answer(
                self.marital_status.as_deref().unwrap_or_default(),
            ),
            health_status: HealthStatus::from_answer(
                self.health_status.as_deref().unwrap_or_default(),
            ),
            is_crisis: self.is_crisis,
            recent_hospital_stay: self.recent_hospital_stay,
            requires_skilled_care: self.requires_skilled_care,
        }
    }

    /// Canonical asset record. Has-X flags gate their amount fields: a false
    /// flag forces the amount to zero even if a stale value is present.
    pub fn asset_record(&self) -> AssetRecord {
        let mut assets = AssetRecord::new();
        assets.set(
            AssetCategory::BankAccounts,
            parse_amount(self.liquid_assets.as_deref()),
        );
        assets.set(AssetCategory::Investments, 0.0);
        assets.set(AssetCategory::Home, gated(self.owns_home, &self.home_value));
        assets.set(
            AssetCategory::Vehicle,
            gated(self.has_vehicles, &self.vehicles_value),
        );
        assets.set(
            AssetCategory::Retirement,
            gated(self.has_retirement_accounts, &self.retirement_value),
        );
        assets.set(
            AssetCategory::SpouseRetirement,
            gated(
                self.has_spouse_retirement_accounts,
                &self.spouse_retirement_value,
            ),
        );
        assets.set(
            AssetCategory::LifeInsurance,
            gated(self.has_life_insurance, &self.life_insurance_value),
        );
        assets.set(
            AssetCategory::AdditionalProperty,
            gated(self.owns_additional_property, &self.additional_property_value),
        );
        assets
    }

    pub fn income_record(&self) -> IncomeRecord {
        IncomeRecord {
            monthly: parse_amount(self.monthly_income.as_deref()),
            spouse_monthly: parse_amount(self.spouse_monthly_income.as_deref()),
        }
    }

    /// State identifier as answered; empty when unanswered.
    pub fn state(&self) -> &str {
        self.state.as_deref().unwrap_or_default()
    }
}

fn gated(flag: bool, value: &Option<String>) -> f64 {
    if flag {
        parse_amount(value.as_deref())
    } else {
        0.0
    }
}

/// Tolerant numeric parser for quiz amounts.
///
/// Missing input, empty strings, and the `"unknown"` sentinel all parse to
/// zero. Otherwise every character other than an ASCII digit or decimal
/// point is stripped before parsing, so `"$1,234.56"` reads as `1234.56`.
/// The stripped string must parse as a whole: a value with more than one
/// decimal point, like `"12.3.4"`, reads as zero rather than being salvaged
/// to its leading digits. Anything still unparseable is zero, never an
/// error.
pub fn parse_amount(raw: Option<&str>) -> f64 {
    let Some(raw) = raw else {
        return 0.0;
    };
    let trimmed = raw.trim();
    if trimmed.is_empty() || trimmed == UNKNOWN_SENTINEL {
        return 0.0;
    }
    let sanitized: String = trimmed
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.')
        .collect();
    sanitized.parse::<f64>().unwrap_or(0.0)
}

/// Marital and filing configuration the quiz collects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MaritalStatus {
    #[serde(rename = "single")]
    Single,
    #[serde(rename = "married-one")]
    MarriedOneApplying,
    #[serde(rename = "married-both")]
    MarriedBothApplying,
    #[serde(rename = "widowed")]
    Widowed,
    #[serde(rename = "divorced")]
    Divorced,
}

impl MaritalStatus {
    /// Tolerant parse of the quiz answer; anything unrecognized reads as
    /// single, which also covers widowed/divorced for resource limits.
    pub fn from_answer(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "married-one" => Self::MarriedOneApplying,
            "married-both" => Self::MarriedBothApplying,
            "widowed" => Self::Widowed,
            "divorced" => Self::Divorced,
            _ => Self::Single,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Single => "single",
            Self::MarriedOneApplying => "married-one",
            Self::MarriedBothApplying => "married-both",
            Self::Widowed => "widowed",
            Self::Divorced => "divorced",
        }
    }
}

/// Self-reported health trajectory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HealthStatus {
    Stable,
    Declining,
    Critical,
}

impl HealthStatus {
    pub fn from_answer(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "declining" => Self::Declining,
            "critical" => Self::Critical,
            _ => Self::Stable,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Stable => "stable",
            Self::Declining => "declining",
            Self::Critical => "critical",
        }
    }
}

/// Normalized client details threaded through the assessment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClientInfo {
    pub name: String,
    pub age: f64,
    pub marital_status: MaritalStatus,
    pub health_status: HealthStatus,
    pub is_crisis: bool,
    pub recent_hospital_stay: bool,
    pub requires_skilled_care: bool,
}
