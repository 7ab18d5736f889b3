pub mod cycle;
pub mod error;
pub mod filter;
pub mod most_allocated;
pub mod score;
pub mod weights;

pub use cycle::CycleState;
pub use error::ScoreError;
pub use filter::FitFilter;
pub use score::{MEMORY_ALLOCATION_LABEL, Scorer};
pub use weights::MetricWeights;
