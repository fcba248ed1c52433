use std::f64::consts::E;

/// Logistic activation: squashes any real value into (0, 1).
pub fn sigmoid(z: f64) -> f64 {
    1.0 / (1.0 + E.powf(-z))
}

/// Derivative of [`sigmoid`] at pre-activation `z`: `σ(z)·(1 - σ(z))`.
pub fn sigmoid_derivative(z: f64) -> f64 {
    let s = sigmoid(z);
    s * (1.0 - s)
}

/// Softmax over raw logits; defined as [`softmax_with_temperature`] at `T = 1`.
pub fn softmax(logits: &[f64]) -> Vec<f64> {
    softmax_with_temperature(logits, 1.0)
}

/// Temperature-scaled softmax.
///
/// The max logit is subtracted before exponentiating so large logits cannot
/// overflow. `temperature` must be positive: values below 1 sharpen the
/// distribution toward the arg-max, values above 1 flatten it toward uniform.
pub fn softmax_with_temperature(logits: &[f64], temperature: f64) -> Vec<f64> {
    assert!(!logits.is_empty(), "softmax: empty logit vector");
    assert!(temperature > 0.0, "softmax: temperature must be > 0");

    let max = logits.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
    let exps: Vec<f64> = logits
        .iter()
        .map(|&z| E.powf((z - max) / temperature))
        .collect();
    let sum: f64 = exps.iter().sum();
    exps.iter().map(|&e| e / sum).collect()
}
