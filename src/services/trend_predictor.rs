//! Windowed emissions trend prediction.
//!
//! The predictor owns the contract around a pluggable [`TrendModel`]:
//! history gating, direction derivation and confidence bounds. Swapping
//! the model never changes what the rest of the pipeline sees.

use std::fmt;
use std::sync::Arc;

use rand::Rng;

use crate::domain::errors::{MonitorError, MonitorResult};
use crate::domain::models::{
    EmissionMetric, Forecast, PredictionResult, PredictionStatus, TrendDirection,
};
use crate::domain::ports::TrendModel;

/// Samples required before the model is consulted.
pub const MIN_HISTORY: usize = 10;

/// Confidence reported by the placeholder projection.
const PLACEHOLDER_CONFIDENCE: f64 = 0.85;

/// Runs a trend model against a snapshot of recent history.
#[derive(Clone)]
pub struct TrendPredictor {
    model: Option<Arc<dyn TrendModel>>,
    horizon_hours: u32,
}

impl fmt::Debug for TrendPredictor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TrendPredictor")
            .field("model", &self.model.as_ref().map(|m| m.name().to_string()))
            .field("horizon_hours", &self.horizon_hours)
            .finish()
    }
}

impl TrendPredictor {
    pub fn new(model: Arc<dyn TrendModel>, horizon_hours: u32) -> Self {
        Self {
            model: Some(model),
            horizon_hours,
        }
    }

    /// A predictor with no model; every prediction is degraded.
    pub fn unavailable(horizon_hours: u32) -> Self {
        Self {
            model: None,
            horizon_hours,
        }
    }

    pub fn is_available(&self) -> bool {
        self.model.is_some()
    }

    pub const fn horizon_hours(&self) -> u32 {
        self.horizon_hours
    }

    /// Predict the emissions trend for `current`.
    ///
    /// `window` is the recent history snapshot, oldest first, and is expected
    /// to include `current` as its last entry. With fewer than
    /// [`MIN_HISTORY`] samples the result is neutral and the model is not
    /// invoked.
    pub fn predict(
        &self,
        window: &[EmissionMetric],
        current: &EmissionMetric,
    ) -> MonitorResult<PredictionResult> {
        let Some(model) = &self.model else {
            return Ok(PredictionResult::neutral(
                PredictionStatus::ModelNotAvailable,
                self.horizon_hours,
            ));
        };

        if window.len() < MIN_HISTORY {
            return Ok(PredictionResult::neutral(
                PredictionStatus::InsufficientHistory,
                self.horizon_hours,
            ));
        }

        let forecast = model.forecast(window, self.horizon_hours)?;
        if !forecast.predicted_emissions.is_finite() {
            return Err(MonitorError::Model(format!(
                "{} produced a non-finite forecast",
                model.name()
            )));
        }

        let direction = if forecast.predicted_emissions > current.absolute_emissions {
            TrendDirection::Increasing
        } else {
            TrendDirection::Decreasing
        };

        Ok(PredictionResult {
            status: PredictionStatus::Forecast,
            predicted_emissions: Some(forecast.predicted_emissions),
            horizon_hours: self.horizon_hours,
            trend: forecast.predicted_emissions - current.absolute_emissions,
            trend_direction: Some(direction),
            confidence: clamp_confidence(forecast.confidence),
        })
    }
}

fn clamp_confidence(confidence: f64) -> f64 {
    if confidence.is_nan() {
        0.0
    } else {
        confidence.clamp(0.0, 1.0)
    }
}

/// Placeholder linear projection with randomly drawn weights.
///
/// Projects from the latest emissions value by a weighted sum of the
/// flattened feature window. It is untrained and stands in until a real
/// forecasting model is plugged in through [`TrendModel`].
#[derive(Debug, Clone)]
pub struct RandomProjectionModel {
    weights: Vec<f64>,
    bias: f64,
}

impl RandomProjectionModel {
    /// Draw small weights from the thread-local RNG.
    pub fn random() -> Self {
        Self::from_rng(&mut rand::thread_rng())
    }

    pub fn from_rng<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let weights = (0..MIN_HISTORY * EmissionMetric::FEATURES)
            .map(|_| rng.gen_range(-0.01..0.01))
            .collect();
        Self {
            weights,
            bias: rng.gen_range(-0.5..0.5),
        }
    }

    pub fn with_parameters(weights: Vec<f64>, bias: f64) -> MonitorResult<Self> {
        if weights.is_empty() || weights.len() % EmissionMetric::FEATURES != 0 {
            return Err(MonitorError::model_init(
                "trend",
                format!(
                    "weight count {} is not a positive multiple of {}",
                    weights.len(),
                    EmissionMetric::FEATURES
                ),
            ));
        }
        Ok(Self { weights, bias })
    }

    /// Samples consumed per forecast.
    pub fn window_len(&self) -> usize {
        self.weights.len() / EmissionMetric::FEATURES
    }
}

impl TrendModel for RandomProjectionModel {
    fn name(&self) -> &str {
        "random-projection"
    }

    fn forecast(&self, window: &[EmissionMetric], _horizon_hours: u32) -> MonitorResult<Forecast> {
        let needed = self.window_len();
        if window.len() < needed {
            return Err(MonitorError::Model(format!(
                "projection needs {needed} samples, got {}",
                window.len()
            )));
        }

        let recent = &window[window.len() - needed..];
        let projection: f64 = recent
            .iter()
            .flat_map(EmissionMetric::features)
            .zip(&self.weights)
            .map(|(feature, weight)| feature * weight)
            .sum();
        let anchor = recent
            .last()
            .map_or(0.0, |metric| metric.absolute_emissions);

        Ok(Forecast {
            predicted_emissions: anchor + projection + self.bias,
            confidence: PLACEHOLDER_CONFIDENCE,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ports::FixedTrendModel;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn emission(absolute: f64) -> EmissionMetric {
        EmissionMetric {
            absolute_emissions: absolute,
            emission_intensity: 89.5,
            well_to_wake_intensity: 42.1,
            abatement_potential: 12.3,
            timestamp_utc: 1_700_000_000,
        }
    }

    fn history(len: usize) -> Vec<EmissionMetric> {
        (0..len).map(|i| emission(40.0 + i as f64)).collect()
    }

    #[test]
    fn test_insufficient_history_skips_model() {
        let model = Arc::new(FixedTrendModel::new(60.0, 0.9));
        let predictor = TrendPredictor::new(model.clone(), 24);
        let window = history(MIN_HISTORY - 1);

        let result = predictor.predict(&window, &window[window.len() - 1]).unwrap();

        assert_eq!(result.status, PredictionStatus::InsufficientHistory);
        assert!(result.trend.abs() < f64::EPSILON);
        assert!(result.confidence.abs() < f64::EPSILON);
        assert_eq!(model.calls(), 0);
    }

    #[test]
    fn test_increasing_forecast() {
        let model = Arc::new(FixedTrendModel::new(60.0, 0.9));
        let predictor = TrendPredictor::new(model.clone(), 24);
        let window = history(MIN_HISTORY);
        let current = window[window.len() - 1];

        let result = predictor.predict(&window, &current).unwrap();

        assert_eq!(result.status, PredictionStatus::Forecast);
        assert_eq!(result.trend_direction, Some(TrendDirection::Increasing));
        assert!((result.trend - (60.0 - current.absolute_emissions)).abs() < 1e-9);
        assert_eq!(result.horizon_hours, 24);
        assert_eq!(model.calls(), 1);
    }

    #[test]
    fn test_equal_forecast_is_decreasing() {
        let window = history(MIN_HISTORY);
        let current = window[window.len() - 1];
        let model = Arc::new(FixedTrendModel::new(current.absolute_emissions, 0.5));
        let predictor = TrendPredictor::new(model, 24);

        let result = predictor.predict(&window, &current).unwrap();
        assert_eq!(result.trend_direction, Some(TrendDirection::Decreasing));
    }

    #[test]
    fn test_confidence_is_clamped() {
        let window = history(MIN_HISTORY);
        let predictor = TrendPredictor::new(Arc::new(FixedTrendModel::new(10.0, 1.7)), 24);
        let result = predictor.predict(&window, &window[9]).unwrap();
        assert!((result.confidence - 1.0).abs() < f64::EPSILON);

        let predictor = TrendPredictor::new(Arc::new(FixedTrendModel::new(10.0, f64::NAN)), 24);
        let result = predictor.predict(&window, &window[9]).unwrap();
        assert!(result.confidence.abs() < f64::EPSILON);
    }

    #[test]
    fn test_non_finite_forecast_is_error() {
        let window = history(MIN_HISTORY);
        let predictor = TrendPredictor::new(Arc::new(FixedTrendModel::new(f64::NAN, 0.5)), 24);
        assert!(matches!(
            predictor.predict(&window, &window[9]),
            Err(MonitorError::Model(_))
        ));
    }

    #[test]
    fn test_unavailable_model_degrades() {
        let predictor = TrendPredictor::unavailable(12);
        let window = history(MIN_HISTORY);
        let result = predictor.predict(&window, &window[9]).unwrap();
        assert_eq!(result.status, PredictionStatus::ModelNotAvailable);
        assert_eq!(result.horizon_hours, 12);
        assert!(!result.is_increasing());
    }

    #[test]
    fn test_random_projection_is_seeded() {
        let window = history(MIN_HISTORY);
        let first = RandomProjectionModel::from_rng(&mut StdRng::seed_from_u64(7));
        let second = RandomProjectionModel::from_rng(&mut StdRng::seed_from_u64(7));

        let a = first.forecast(&window, 24).unwrap();
        let b = second.forecast(&window, 24).unwrap();
        assert!((a.predicted_emissions - b.predicted_emissions).abs() < f64::EPSILON);
        assert!((a.confidence - 0.85).abs() < f64::EPSILON);
        assert_eq!(first.window_len(), MIN_HISTORY);
    }

    #[test]
    fn test_projection_with_zero_weights_returns_latest() {
        let model = RandomProjectionModel::with_parameters(vec![0.0; 6], 0.0).unwrap();
        let window = history(4);
        let forecast = model.forecast(&window, 24).unwrap();
        assert!((forecast.predicted_emissions - 43.0).abs() < 1e-9);
    }

    #[test]
    fn test_projection_rejects_bad_parameters() {
        assert!(RandomProjectionModel::with_parameters(vec![0.1; 4], 0.0).is_err());
        assert!(RandomProjectionModel::with_parameters(Vec::new(), 0.0).is_err());
    }

    #[test]
    fn test_projection_rejects_short_window() {
        let model = RandomProjectionModel::with_parameters(vec![0.0; 30], 0.0).unwrap();
        assert!(model.forecast(&history(5), 24).is_err());
    }
}
