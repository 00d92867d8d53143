//! Factory for the reference model implementations.

use std::sync::Arc;

use rand::rngs::StdRng;
use rand::SeedableRng;

use super::resource_optimizer::HeuristicAllocationModel;
use super::trend_predictor::RandomProjectionModel;
use crate::domain::errors::MonitorResult;
use crate::domain::ports::{ModelFactory, OptimizationModel, TrendModel};

/// Builds the placeholder projection and the heuristic allocator.
#[derive(Debug, Clone, Copy, Default)]
pub struct ReferenceModelFactory {
    seed: Option<u64>,
}

impl ReferenceModelFactory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Draw projection weights from a seeded RNG for reproducible runs.
    pub fn with_seed(seed: u64) -> Self {
        Self { seed: Some(seed) }
    }
}

impl ModelFactory for ReferenceModelFactory {
    fn create_trend_model(&self) -> MonitorResult<Arc<dyn TrendModel>> {
        let model = match self.seed {
            Some(seed) => RandomProjectionModel::from_rng(&mut StdRng::seed_from_u64(seed)),
            None => RandomProjectionModel::random(),
        };
        Ok(Arc::new(model))
    }

    fn create_optimization_model(&self) -> MonitorResult<Arc<dyn OptimizationModel>> {
        Ok(Arc::new(HeuristicAllocationModel::new()))
    }
}
