use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};
use crate::math::matrix::Matrix;

/// The trained parameter container: both vocabularies plus the weights and
/// biases of a single-hidden-layer network.
///
/// The position of a keyword or answer in its list is its permanent index —
/// input encoding and output decoding both depend on it, so neither list may
/// be reordered once a model exists. Weight orientation is input-to-output:
/// `weights_input_hidden` has one row per keyword and one column per hidden
/// unit, `weights_hidden_output` one row per hidden unit and one column per
/// answer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Model {
    pub keywords: Vec<String>,
    pub answers: Vec<String>,
    pub weights_input_hidden: Matrix,
    pub bias_hidden: Vec<f64>,
    pub weights_hidden_output: Matrix,
    pub bias_output: Vec<f64>,
}

impl Model {
    /// Creates a fresh model with every parameter drawn uniformly from
    /// `[-init_limit, init_limit)`.
    ///
    /// Empty vocabularies are rejected here rather than surfacing later as
    /// index-out-of-range panics; a zero-width hidden layer is likewise
    /// refused.
    pub fn init<R: Rng>(
        keywords: Vec<String>,
        answers: Vec<String>,
        hidden_size: usize,
        init_limit: f64,
        rng: &mut R,
    ) -> EngineResult<Model> {
        if keywords.is_empty() {
            return Err(EngineError::EmptyVocabulary { which: "keywords" });
        }
        if answers.is_empty() {
            return Err(EngineError::EmptyVocabulary { which: "answers" });
        }
        if hidden_size == 0 {
            return Err(EngineError::InvalidOptions(
                "hidden_size must be at least 1".to_string(),
            ));
        }

        let weights_input_hidden = Matrix::uniform(keywords.len(), hidden_size, init_limit, rng);
        let bias_hidden = uniform_vec(hidden_size, init_limit, rng);
        let weights_hidden_output = Matrix::uniform(hidden_size, answers.len(), init_limit, rng);
        let bias_output = uniform_vec(answers.len(), init_limit, rng);

        Ok(Model {
            keywords,
            answers,
            weights_input_hidden,
            bias_hidden,
            weights_hidden_output,
            bias_output,
        })
    }

    /// Feature count, i.e. the expected input vector length.
    pub fn input_size(&self) -> usize {
        self.keywords.len()
    }

    /// Hidden-layer width.
    pub fn hidden_size(&self) -> usize {
        self.bias_hidden.len()
    }

    /// Answer class count.
    pub fn output_size(&self) -> usize {
        self.answers.len()
    }

    /// Checks every dimension invariant of the struct. Freshly initialized
    /// models hold these by construction; deserialized ones are checked
    /// before use.
    pub fn validate(&self) -> EngineResult<()> {
        let fail = |details: String| Err(EngineError::CorruptModel { details });

        if self.keywords.is_empty() {
            return fail("keyword list is empty".to_string());
        }
        if self.answers.is_empty() {
            return fail("answer list is empty".to_string());
        }
        if !self.weights_input_hidden.shape_consistent() {
            return fail("input-hidden weight matrix has ragged data".to_string());
        }
        if !self.weights_hidden_output.shape_consistent() {
            return fail("hidden-output weight matrix has ragged data".to_string());
        }
        if self.weights_input_hidden.rows != self.keywords.len() {
            return fail(format!(
                "input-hidden weights have {} row(s) for {} keyword(s)",
                self.weights_input_hidden.rows,
                self.keywords.len()
            ));
        }
        if self.weights_input_hidden.cols != self.bias_hidden.len() {
            return fail(format!(
                "input-hidden weights have {} column(s) for {} hidden bias(es)",
                self.weights_input_hidden.cols,
                self.bias_hidden.len()
            ));
        }
        if self.weights_hidden_output.rows != self.bias_hidden.len() {
            return fail(format!(
                "hidden-output weights have {} row(s) for {} hidden unit(s)",
                self.weights_hidden_output.rows,
                self.bias_hidden.len()
            ));
        }
        if self.weights_hidden_output.cols != self.answers.len() {
            return fail(format!(
                "hidden-output weights have {} column(s) for {} answer(s)",
                self.weights_hidden_output.cols,
                self.answers.len()
            ));
        }
        if self.bias_output.len() != self.answers.len() {
            return fail(format!(
                "output bias has {} entry(ies) for {} answer(s)",
                self.bias_output.len(),
                self.answers.len()
            ));
        }
        Ok(())
    }
}

fn uniform_vec<R: Rng>(len: usize, limit: f64, rng: &mut R) -> Vec<f64> {
    (0..len).map(|_| rng.gen::<f64>() * 2.0 * limit - limit).collect()
}
