//! A session is the explicit "current model" context: it owns at most one
//! [`Model`] and the RNG that drives initialization and answer sampling.
//! There is no process-global model, so several independent sessions can
//! coexist in one process and tests can seed each one.

use std::path::Path;

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::error::{EngineError, EngineResult};
use crate::model::model::Model;
use crate::sampling::sampler::sample_from_probabilities;
use crate::text::corpus::read_pairs;
use crate::text::vocab::{encode, extract_answers, extract_keywords};
use crate::train::config::TrainOptions;
use crate::train::dataset::build_training_data;
use crate::train::trainer::{train, TrainReport};

pub struct Session {
    model: Option<Model>,
    rng: StdRng,
}

impl Session {
    /// Session with an entropy-seeded RNG.
    pub fn new() -> Session {
        Session {
            model: None,
            rng: StdRng::from_entropy(),
        }
    }

    /// Session with a fixed seed; initialization and sampling are then fully
    /// reproducible.
    pub fn with_seed(seed: u64) -> Session {
        Session {
            model: None,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Trains a fresh model from a `question : answer` corpus file and makes
    /// it the session's current model.
    ///
    /// A corpus with no usable lines is a hard error; no degenerate model
    /// with empty vocabularies is ever produced.
    pub fn learn(&mut self, corpus_path: &Path, options: &TrainOptions) -> EngineResult<TrainReport> {
        options.validate()?;

        let pairs = read_pairs(corpus_path)?;
        if pairs.is_empty() {
            return Err(EngineError::EmptyCorpus {
                path: corpus_path.display().to_string(),
            });
        }

        let keywords = extract_keywords(&pairs);
        let answers = extract_answers(&pairs);
        tracing::debug!(
            "vocabulary: {} keyword(s), {} answer(s) from {} pair(s)",
            keywords.len(),
            answers.len(),
            pairs.len()
        );

        let samples = build_training_data(&pairs, &keywords, &answers)?;
        let mut model = Model::init(
            keywords,
            answers,
            options.hidden_size,
            options.init_limit,
            &mut self.rng,
        )?;
        let report = train(&mut model, &samples, options)?;

        self.model = Some(model);
        Ok(report)
    }

    /// Replaces the current model with one loaded from disk.
    pub fn load(&mut self, path: &Path) -> EngineResult<()> {
        self.model = Some(Model::load_file(path)?);
        Ok(())
    }

    /// Persists the current model.
    pub fn save(&self, path: &Path) -> EngineResult<()> {
        self.model
            .as_ref()
            .ok_or(EngineError::ModelNotLoaded)?
            .save_file(path)
    }

    /// Encodes the question, runs the forward pass at the given temperature,
    /// and samples one answer from the resulting distribution.
    pub fn ask(&mut self, question: &str, temperature: f64) -> EngineResult<String> {
        if !(temperature > 0.0) {
            return Err(EngineError::InvalidOptions(format!(
                "temperature must be > 0, got {temperature}"
            )));
        }
        let model = self.model.as_ref().ok_or(EngineError::ModelNotLoaded)?;

        let input = encode(question, &model.keywords);
        let trace = model.forward_with_temperature(&input, temperature);
        let index = sample_from_probabilities(&trace.probabilities, &mut self.rng);
        Ok(model.answers[index].clone())
    }

    pub fn model(&self) -> Option<&Model> {
        self.model.as_ref()
    }
}

impl Default for Session {
    fn default() -> Self {
        Session::new()
    }
}
