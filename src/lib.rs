pub mod activation;
pub mod error;
pub mod loss;
pub mod math;
pub mod model;
pub mod optim;
pub mod sampling;
pub mod session;
pub mod text;
pub mod train;

// Convenience re-exports
pub use error::{EngineError, EngineResult};
pub use math::matrix::Matrix;
pub use model::forward::ForwardTrace;
pub use model::model::Model;
pub use sampling::sampler::sample_from_probabilities;
pub use session::Session;
pub use text::corpus::Pair;
pub use train::config::TrainOptions;
pub use train::trainer::TrainReport;
