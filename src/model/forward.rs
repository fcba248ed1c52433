use crate::activation::activation::{sigmoid, softmax_with_temperature};
use crate::math::matrix::add;
use crate::model::model::Model;

/// Every intermediate value of one forward pass.
///
/// The trainer needs the hidden pre-activations (for the sigmoid derivative)
/// and hidden activations (for the output-weight gradient); inference only
/// reads `probabilities`. Returned by value — the model itself is not touched
/// by a forward pass.
#[derive(Debug, Clone)]
pub struct ForwardTrace {
    pub hidden_preact: Vec<f64>,
    pub hidden_act: Vec<f64>,
    pub output_preact: Vec<f64>,
    pub probabilities: Vec<f64>,
}

impl Model {
    /// Forward pass at temperature 1 — the form the trainer backpropagates
    /// through.
    pub fn forward(&self, input: &[f64]) -> ForwardTrace {
        self.forward_with_temperature(input, 1.0)
    }

    /// Forward pass with a temperature-scaled softmax output.
    ///
    /// `input` must have one entry per keyword; `temperature` must be
    /// positive.
    pub fn forward_with_temperature(&self, input: &[f64], temperature: f64) -> ForwardTrace {
        assert_eq!(
            input.len(),
            self.input_size(),
            "forward: input length must match keyword count"
        );

        let hidden_preact = add(&self.weights_input_hidden.vec_mul(input), &self.bias_hidden);
        let hidden_act: Vec<f64> = hidden_preact.iter().map(|&z| sigmoid(z)).collect();
        let output_preact = add(
            &self.weights_hidden_output.vec_mul(&hidden_act),
            &self.bias_output,
        );
        let probabilities = softmax_with_temperature(&output_preact, temperature);

        ForwardTrace {
            hidden_preact,
            hidden_act,
            output_preact,
            probabilities,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::matrix::Matrix;

    /// 2 keywords, 2 hidden units, 2 answers, with weights chosen so every
    /// intermediate value can be checked by hand.
    fn fixture() -> Model {
        Model {
            keywords: vec!["hello".to_string(), "bye".to_string()],
            answers: vec!["hi".to_string(), "goodbye".to_string()],
            weights_input_hidden: Matrix::from_data(vec![vec![1.0, 0.0], vec![0.0, 1.0]]),
            bias_hidden: vec![0.0, 0.0],
            weights_hidden_output: Matrix::from_data(vec![vec![2.0, 0.0], vec![0.0, 2.0]]),
            bias_output: vec![0.0, 0.0],
        }
    }

    #[test]
    fn test_forward_matches_hand_computation() {
        let model = fixture();
        let trace = model.forward(&[1.0, 0.0]);

        assert_eq!(trace.hidden_preact, vec![1.0, 0.0]);
        assert!((trace.hidden_act[0] - 0.7310585786300049).abs() < 1e-12);
        assert_eq!(trace.hidden_act[1], 0.5);
        assert!((trace.output_preact[0] - 2.0 * trace.hidden_act[0]).abs() < 1e-12);
        assert!((trace.output_preact[1] - 1.0).abs() < 1e-12);

        // Larger logit for the first answer, so it must dominate.
        assert!(trace.probabilities[0] > trace.probabilities[1]);
        assert!((trace.probabilities.iter().sum::<f64>() - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_forward_output_is_a_distribution() {
        let model = fixture();
        for input in [[0.0, 0.0], [1.0, 1.0], [0.0, 1.0]] {
            let probs = model.forward(&input).probabilities;
            assert_eq!(probs.len(), model.output_size());
            assert!(probs.iter().all(|&p| (0.0..=1.0).contains(&p)));
            assert!((probs.iter().sum::<f64>() - 1.0).abs() < 1e-9);
        }
    }

    #[test]
    fn test_high_temperature_flattens_the_output() {
        let model = fixture();
        let sharp = model.forward_with_temperature(&[1.0, 0.0], 0.5).probabilities;
        let flat = model.forward_with_temperature(&[1.0, 0.0], 5.0).probabilities;
        assert!(sharp[0] > flat[0]);
        assert!(flat[0] > 0.5); // still favors the first answer
    }

    #[test]
    #[should_panic(expected = "input length")]
    fn test_forward_rejects_wrong_input_length() {
        fixture().forward(&[1.0, 0.0, 0.0]);
    }
}
