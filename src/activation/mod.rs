pub mod activation;

pub use activation::{sigmoid, sigmoid_derivative, softmax, softmax_with_temperature};
