use std::sync::OnceLock;

use shared::models::ClusterMaxima;

use crate::error::ScoreError;

/// Per-cycle state shared across node scoring calls.
///
/// The maxima collector publishes exactly once before the parallel scoring
/// phase; afterwards every call only reads, which keeps concurrent node
/// scoring safe without locks.
#[derive(Debug, Default)]
pub struct CycleState {
    maxima: OnceLock<ClusterMaxima>,
}

impl CycleState {
    pub fn new() -> Self {
        CycleState {
            maxima: OnceLock::new(),
        }
    }

    /// Shortcut for hosts that collect the maxima before building the state.
    pub fn with_maxima(maxima: ClusterMaxima) -> Self {
        let state = Self::new();
        let _ = state.maxima.set(maxima);
        state
    }

    pub fn publish_maxima(&self, maxima: ClusterMaxima) -> Result<(), ScoreError> {
        self.maxima
            .set(maxima)
            .map_err(|_| ScoreError::MaximaAlreadyPublished)
    }

    pub fn maxima(&self) -> Result<&ClusterMaxima, ScoreError> {
        self.maxima.get().ok_or(ScoreError::MissingMaxima)
    }
}
