//! Asset and income records plus the countable/exempt partition.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Asset categories collected by the quiz. Membership in the exempt set is
/// fixed policy, not configuration.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum AssetCategory {
    Home,
    Vehicle,
    BurialPlot,
    LifeInsurance,
    BankAccounts,
    Investments,
    Retirement,
    SpouseRetirement,
    AdditionalProperty,
}

impl AssetCategory {
    /// Exempt categories never count against the resource limit.
    pub const fn is_exempt(self) -> bool {
        matches!(
            self,
            Self::Home | Self::Vehicle | Self::BurialPlot | Self::LifeInsurance
        )
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Home => "Primary Residence",
            Self::Vehicle => "Primary Vehicle",
            Self::BurialPlot => "Burial Plot",
            Self::LifeInsurance => "Life Insurance (Cash Value)",
            Self::BankAccounts => "Liquid Assets (Cash, Savings)",
            Self::Investments => "Investments",
            Self::Retirement => "Retirement Accounts",
            Self::SpouseRetirement => "Spouse's Retirement Accounts",
            Self::AdditionalProperty => "Additional Property",
        }
    }
}

/// Dollar value per asset category for a single submission. Built once by
/// intake, then read-only; negative values are floored to zero on entry.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AssetRecord {
    values: BTreeMap<AssetCategory, f64>,
}

impl AssetRecord {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, category: AssetCategory, value: f64) {
        self.values.insert(category, value.max(0.0));
    }

    /// Value for a category; missing categories contribute zero.
    pub fn get(&self, category: AssetCategory) -> f64 {
        self.values.get(&category).copied().unwrap_or(0.0)
    }

    /// Sum of values that count against the resource limit.
    pub fn countable(&self) -> f64 {
        self.values
            .iter()
            .filter(|(category, _)| !category.is_exempt())
            .map(|(_, value)| value)
            .sum()
    }

    /// Sum of exempt values.
    pub fn non_countable(&self) -> f64 {
        self.values
            .iter()
            .filter(|(category, _)| category.is_exempt())
            .map(|(_, value)| value)
            .sum()
    }

    pub fn total(&self) -> f64 {
        self.countable() + self.non_countable()
    }
}

/// Monthly income by source.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct IncomeRecord {
    pub monthly: f64,
    pub spouse_monthly: f64,
}

impl IncomeRecord {
    pub fn total(self) -> f64 {
        self.monthly + self.spouse_monthly
    }
}
