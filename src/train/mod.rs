pub mod config;
pub mod dataset;
pub mod trainer;

pub use config::TrainOptions;
pub use dataset::{build_training_data, TrainingSample};
pub use trainer::{mean_loss, train, TrainReport};
