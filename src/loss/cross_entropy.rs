/// Categorical cross-entropy loss for use with a Softmax output layer.
///
/// Targets are class indices rather than one-hot vectors, matching how the
/// trainer labels each question with the position of its answer.
pub struct CrossEntropyLoss;

/// Small epsilon added inside log() to prevent log(0) = -inf.
const EPS: f64 = 1e-12;

impl CrossEntropyLoss {
    /// Computes the scalar cross-entropy loss against a one-hot target:
    ///   L = -log(predicted[target] + eps)
    ///
    /// `predicted` — softmax probabilities, shape [n_classes]
    /// `target`    — index of the correct class
    pub fn loss(predicted: &[f64], target: usize) -> f64 {
        -(predicted[target] + EPS).ln()
    }

    /// Gradient of the combined Softmax + cross-entropy w.r.t. the pre-softmax
    /// logits. With a one-hot target the usual `predicted - expected` collapses
    /// to subtracting 1.0 at the target index:
    ///   ∂L/∂z_i = predicted[i] - [i == target]
    ///
    /// This is the initial delta passed into the backward pass by the trainer;
    /// no separate softmax derivative is applied on top of it.
    pub fn derivative(predicted: &[f64], target: usize) -> Vec<f64> {
        let mut delta = predicted.to_vec();
        delta[target] -= 1.0;
        delta
    }
}
