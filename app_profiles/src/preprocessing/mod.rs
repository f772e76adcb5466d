pub mod enricher;
pub mod pipeline;

pub use enricher::{CoercionPolicy, FeatureDeriver};
pub use pipeline::{CleanResult, CleaningPipeline, StageShape};
