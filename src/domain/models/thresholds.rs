//! Fixed operational limits.
//!
//! These are design constants, not configuration. Margins from
//! `MonitorConfig` are applied on top of them by the evaluators.

/// Operational emissions ceiling (tCO2 per interval).
pub const CO2_CEILING: f64 = 50.0;

/// Fraction of the ceiling above which an urgent recommendation is issued.
pub const CO2_URGENT_FRACTION: f64 = 0.8;

/// Well-to-wake intensity (gCO2e/MJ) above which the supply chain is flagged.
pub const WELL_TO_WAKE_LIMIT: f64 = 50.0;

/// Maximum tolerable critical-material intensity.
pub const CRITICALITY_THRESHOLD: f64 = 0.8;

/// Supply-chain risk index above which a flag is raised.
pub const SUPPLY_RISK_LIMIT: f64 = 70.0;

/// Circularity indicator below which a flag is raised.
pub const MIN_CIRCULARITY: f64 = 0.3;

/// Risk score weight for material intensity.
pub const RISK_WEIGHT_MATERIAL: f64 = 0.3;

/// Risk score weight for normalized supply risk.
pub const RISK_WEIGHT_SUPPLY: f64 = 0.4;

/// Risk score weight for the circularity gap.
pub const RISK_WEIGHT_CIRCULARITY: f64 = 0.3;

/// Coverage percentage that must be exceeded before a phase may advance.
pub const READINESS_COVERAGE: f64 = 80.0;
