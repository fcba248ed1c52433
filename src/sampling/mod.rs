pub mod sampler;

pub use sampler::sample_from_probabilities;
