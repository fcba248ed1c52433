use crate::error::{EngineError, EngineResult};
use crate::activation::activation::sigmoid_derivative;
use crate::loss::cross_entropy::CrossEntropyLoss;
use crate::math::matrix::{hadamard, Matrix};
use crate::model::model::Model;
use crate::optim::sgd::Sgd;
use crate::train::config::TrainOptions;
use crate::train::dataset::TrainingSample;

/// Summary of a completed training run: mean training-set cross-entropy
/// before the first epoch and after the last one.
#[derive(Debug, Clone, PartialEq)]
pub struct TrainReport {
    pub epochs: usize,
    pub initial_loss: f64,
    pub final_loss: f64,
}

/// Trains `model` in place: `options.epochs` full passes over `samples` in
/// their given order, pure per-sample SGD with a constant learning rate.
///
/// No shuffling, no mini-batching, no momentum, no early stopping — every
/// sample's gradients are applied immediately before the next sample is seen.
/// Samples that do not fit the model's dimensions are rejected up front,
/// before any parameter is touched.
pub fn train(
    model: &mut Model,
    samples: &[TrainingSample],
    options: &TrainOptions,
) -> EngineResult<TrainReport> {
    options.validate()?;
    if samples.is_empty() {
        return Err(EngineError::InvalidOptions(
            "cannot train on an empty sample set".to_string(),
        ));
    }
    for sample in samples {
        if sample.target >= model.output_size() {
            return Err(EngineError::TargetOutOfRange {
                target: sample.target,
                classes: model.output_size(),
            });
        }
        if sample.input.len() != model.input_size() {
            return Err(EngineError::InvalidOptions(format!(
                "sample input has {} entry(ies) for {} keyword(s)",
                sample.input.len(),
                model.input_size()
            )));
        }
    }

    let sgd = Sgd::new(options.learning_rate);
    let initial_loss = mean_loss(model, samples);

    for epoch in 1..=options.epochs {
        let mut total_loss = 0.0;
        for sample in samples {
            let trace = model.forward(&sample.input);
            total_loss += CrossEntropyLoss::loss(&trace.probabilities, sample.target);

            // Combined softmax + cross-entropy delta at the output logits.
            let d_out = CrossEntropyLoss::derivative(&trace.probabilities, sample.target);
            let grad_hidden_output = Matrix::outer(&trace.hidden_act, &d_out);

            // Back through the output weights, then through the sigmoid.
            let d_hidden_act = model.weights_hidden_output.vec_mul_transpose(&d_out);
            let sigmoid_grad: Vec<f64> = trace
                .hidden_preact
                .iter()
                .map(|&z| sigmoid_derivative(z))
                .collect();
            let d_hidden_preact = hadamard(&d_hidden_act, &sigmoid_grad);
            let grad_input_hidden = Matrix::outer(&sample.input, &d_hidden_preact);

            sgd.step_weights(&mut model.weights_hidden_output, &grad_hidden_output);
            sgd.step_bias(&mut model.bias_output, &d_out);
            sgd.step_weights(&mut model.weights_input_hidden, &grad_input_hidden);
            sgd.step_bias(&mut model.bias_hidden, &d_hidden_preact);
        }

        tracing::debug!(
            "epoch {epoch}/{}: mean loss {:.6}",
            options.epochs,
            total_loss / samples.len() as f64
        );
    }

    let final_loss = mean_loss(model, samples);
    tracing::info!(
        "trained {} sample(s) for {} epoch(s): mean loss {:.6} -> {:.6}",
        samples.len(),
        options.epochs,
        initial_loss,
        final_loss
    );

    Ok(TrainReport {
        epochs: options.epochs,
        initial_loss,
        final_loss,
    })
}

/// Mean cross-entropy over the samples without updating any parameter.
pub fn mean_loss(model: &Model, samples: &[TrainingSample]) -> f64 {
    if samples.is_empty() {
        return 0.0;
    }
    let total: f64 = samples
        .iter()
        .map(|sample| {
            let trace = model.forward(&sample.input);
            CrossEntropyLoss::loss(&trace.probabilities, sample.target)
        })
        .sum();
    total / samples.len() as f64
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::text::corpus::Pair;
    use crate::text::vocab::{extract_answers, extract_keywords};
    use crate::train::dataset::build_training_data;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn tiny_setup(seed: u64) -> (Model, Vec<TrainingSample>) {
        let pairs = vec![
            Pair {
                question: "hello".to_string(),
                answer: "hi".to_string(),
            },
            Pair {
                question: "bye".to_string(),
                answer: "goodbye".to_string(),
            },
        ];
        let keywords = extract_keywords(&pairs);
        let answers = extract_answers(&pairs);
        let samples = build_training_data(&pairs, &keywords, &answers).unwrap();
        let mut rng = StdRng::seed_from_u64(seed);
        let model = Model::init(keywords, answers, 10, 0.1, &mut rng).unwrap();
        (model, samples)
    }

    #[test]
    fn test_training_lowers_the_loss() {
        let (mut model, samples) = tiny_setup(7);
        let report = train(&mut model, &samples, &TrainOptions::default()).unwrap();
        assert_eq!(report.epochs, 100);
        assert!(
            report.final_loss < report.initial_loss,
            "loss must drop: {} -> {}",
            report.initial_loss,
            report.final_loss
        );
    }

    #[test]
    fn test_trained_model_prefers_the_right_answer() {
        let (mut model, samples) = tiny_setup(7);
        // The two-sample problem needs more than the default 100 epochs to
        // push the target probabilities past 0.9.
        let options = TrainOptions {
            epochs: 500,
            ..Default::default()
        };
        train(&mut model, &samples, &options).unwrap();

        for sample in &samples {
            let probs = model.forward(&sample.input).probabilities;
            assert!(
                probs[sample.target] > 0.9,
                "target probability too low: {:?}",
                probs
            );
        }
    }

    #[test]
    fn test_training_is_reproducible_from_seed() {
        let run = || {
            let (mut model, samples) = tiny_setup(21);
            train(&mut model, &samples, &TrainOptions::default()).unwrap();
            model
        };
        assert_eq!(run(), run());
    }

    #[test]
    fn test_empty_sample_set_is_rejected() {
        let (mut model, _) = tiny_setup(1);
        let err = train(&mut model, &[], &TrainOptions::default()).unwrap_err();
        assert!(matches!(err, EngineError::InvalidOptions(_)));
    }

    #[test]
    fn test_out_of_range_target_fails_before_any_update() {
        let (mut model, mut samples) = tiny_setup(1);
        samples[0].target = 99;

        let before = model.clone();
        let err = train(&mut model, &samples, &TrainOptions::default()).unwrap_err();
        assert!(matches!(
            err,
            EngineError::TargetOutOfRange { target: 99, classes: 2 }
        ));
        assert_eq!(model, before);
    }

    #[test]
    fn test_mean_loss_of_empty_set_is_zero() {
        let (model, _) = tiny_setup(1);
        assert_eq!(mean_loss(&model, &[]), 0.0);
    }
}
