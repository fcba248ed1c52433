use crate::math::matrix::{self, Matrix};

/// Plain stochastic gradient descent with a constant learning rate.
///
/// The trainer calls one step per parameter per sample, so updates land
/// immediately rather than being accumulated and averaged.
pub struct Sgd {
    pub learning_rate: f64,
}

impl Sgd {
    pub fn new(learning_rate: f64) -> Sgd {
        Sgd { learning_rate }
    }

    /// In-place `weights -= learning_rate * gradient`.
    pub fn step_weights(&self, weights: &mut Matrix, gradient: &Matrix) {
        weights.sub_scaled(gradient, self.learning_rate);
    }

    /// In-place `bias -= learning_rate * gradient`.
    pub fn step_bias(&self, bias: &mut [f64], gradient: &[f64]) {
        matrix::sub_scaled(bias, gradient, self.learning_rate);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_step_moves_against_the_gradient() {
        let sgd = Sgd::new(0.1);

        let mut weights = Matrix::from_data(vec![vec![1.0, -1.0]]);
        sgd.step_weights(&mut weights, &Matrix::from_data(vec![vec![10.0, -10.0]]));
        assert_eq!(weights.data[0], vec![0.0, 0.0]);

        let mut bias = vec![0.5];
        sgd.step_bias(&mut bias, &[1.0]);
        assert!((bias[0] - 0.4).abs() < 1e-12);
    }
}
