use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// Hyperparameters for one training run.
///
/// Defaults: 10 hidden units, 100 epochs, learning rate 0.1, initial weights
/// uniform in [-0.1, 0.1). Every field has
/// a serde default so a JSON options file may name only the values it wants
/// to change.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrainOptions {
    /// Hidden-layer width.
    #[serde(default = "default_hidden_size")]
    pub hidden_size: usize,
    /// Full passes over the training set.
    #[serde(default = "default_epochs")]
    pub epochs: usize,
    /// Constant SGD step size.
    #[serde(default = "default_learning_rate")]
    pub learning_rate: f64,
    /// Half-width of the uniform weight-initialization range.
    #[serde(default = "default_init_limit")]
    pub init_limit: f64,
}

fn default_hidden_size() -> usize {
    10
}

fn default_epochs() -> usize {
    100
}

fn default_learning_rate() -> f64 {
    0.1
}

fn default_init_limit() -> f64 {
    0.1
}

impl Default for TrainOptions {
    fn default() -> Self {
        TrainOptions {
            hidden_size: default_hidden_size(),
            epochs: default_epochs(),
            learning_rate: default_learning_rate(),
            init_limit: default_init_limit(),
        }
    }
}

impl TrainOptions {
    /// Rejects option sets the trainer cannot run with.
    pub fn validate(&self) -> EngineResult<()> {
        if self.hidden_size == 0 {
            return Err(EngineError::InvalidOptions(
                "hidden_size must be at least 1".to_string(),
            ));
        }
        if self.epochs == 0 {
            return Err(EngineError::InvalidOptions(
                "epochs must be at least 1".to_string(),
            ));
        }
        if !(self.learning_rate > 0.0) {
            return Err(EngineError::InvalidOptions(format!(
                "learning_rate must be > 0, got {}",
                self.learning_rate
            )));
        }
        if !(self.init_limit > 0.0) {
            return Err(EngineError::InvalidOptions(format!(
                "init_limit must be > 0, got {}",
                self.init_limit
            )));
        }
        Ok(())
    }

    /// Serializes the options to a pretty-printed JSON file.
    pub fn save_json(&self, path: &Path) -> EngineResult<()> {
        let file = std::fs::File::create(path)?;
        let writer = std::io::BufWriter::new(file);
        serde_json::to_writer_pretty(writer, self)
            .map_err(|e| EngineError::InvalidOptions(format!("cannot encode options: {e}")))
    }

    /// Deserializes options from a JSON file previously written by
    /// [`TrainOptions::save_json`], or hand-authored with a subset of fields.
    pub fn load_json(path: &Path) -> EngineResult<TrainOptions> {
        let file = std::fs::File::open(path)?;
        let reader = std::io::BufReader::new(file);
        serde_json::from_reader(reader).map_err(|e| {
            EngineError::InvalidOptions(format!("bad options file {}: {e}", path.display()))
        })
    }
}
