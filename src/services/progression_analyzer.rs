//! Lifecycle phase gating.

use crate::domain::models::thresholds::READINESS_COVERAGE;
use crate::domain::models::{PhaseCompletion, PhaseRecord, ProgressionAnalysis};

/// Evaluate whether a verified phase may advance.
///
/// Readiness needs a passed verification and coverage strictly above
/// 80%; missing coverage counts as zero.
pub fn analyze_progression(record: &PhaseRecord) -> ProgressionAnalysis {
    let coverage = record.coverage_or_zero();

    ProgressionAnalysis {
        phase_completion_status: if record.passed {
            PhaseCompletion::Passed
        } else {
            PhaseCompletion::Failed
        },
        trl_advancement: record.trl,
        verification_completeness: coverage,
        next_phase_readiness: record.passed && coverage > READINESS_COVERAGE,
    }
}
