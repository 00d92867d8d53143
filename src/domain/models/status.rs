//! Derived classifications produced by the synchronous evaluators.

use serde::{Deserialize, Serialize};

/// Emissions severity, judged against the unmargined ceiling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Severity {
    Normal,
    High,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Normal => "NORMAL",
            Self::High => "HIGH",
        }
    }
}

/// Outcome of an emissions safety check.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SafetyStatus {
    /// Emissions at or below the margin-adjusted threshold
    pub within_limits: bool,

    /// The evaluated emissions value
    pub current_value: f64,

    /// Margin-adjusted threshold used for `within_limits`
    pub threshold: f64,

    /// Margin applied, as a percentage
    pub margin_percentage: f64,

    /// Severity against the raw ceiling
    pub severity: Severity,
}

/// Overall resource criticality.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CriticalityLevel {
    Normal,
    Critical,
}

impl CriticalityLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Normal => "NORMAL",
            Self::Critical => "CRITICAL",
        }
    }
}

/// Individual criticality indicator. Declaration order is report order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CriticalityFlag {
    HighMaterialIntensity,
    SupplyChainRisk,
    LowCircularity,
}

impl CriticalityFlag {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::HighMaterialIntensity => "high_material_intensity",
            Self::SupplyChainRisk => "supply_chain_risk",
            Self::LowCircularity => "low_circularity",
        }
    }
}

/// Outcome of a resource criticality check.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CriticalityStatus {
    /// Raised indicators, in evaluation order
    pub critical_indicators: Vec<CriticalityFlag>,

    /// CRITICAL when any indicator is raised
    pub overall_status: CriticalityLevel,

    /// Weighted risk score, always within [0, 1]
    pub risk_score: f64,
}
