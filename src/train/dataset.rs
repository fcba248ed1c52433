use std::collections::HashMap;

use crate::error::{EngineError, EngineResult};
use crate::text::corpus::Pair;
use crate::text::vocab::encode;

/// One encoded training example: a bag-of-words input vector and the index of
/// the correct answer.
#[derive(Debug, Clone, PartialEq)]
pub struct TrainingSample {
    pub input: Vec<f64>,
    pub target: usize,
}

/// Encodes every pair against the fixed vocabularies, in corpus order.
///
/// A pair whose answer is missing from `answers` means the vocabularies were
/// not extracted from these pairs; that is an invariant violation and fails
/// the whole build rather than mis-labeling the sample.
pub fn build_training_data(
    pairs: &[Pair],
    keywords: &[String],
    answers: &[String],
) -> EngineResult<Vec<TrainingSample>> {
    let answer_index: HashMap<&str, usize> = answers
        .iter()
        .enumerate()
        .map(|(i, answer)| (answer.as_str(), i))
        .collect();

    pairs
        .iter()
        .map(|pair| {
            let target = *answer_index.get(pair.answer.as_str()).ok_or_else(|| {
                EngineError::UnknownAnswer {
                    answer: pair.answer.clone(),
                }
            })?;
            Ok(TrainingSample {
                input: encode(&pair.question, keywords),
                target,
            })
        })
        .collect()
}
