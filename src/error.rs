//! Crate-wide error type.
//!
//! Every fallible operation in the library returns [`EngineResult`]; the
//! binary prints the message and exits. Malformed corpus lines are the one
//! documented exception — they are skipped during parsing, not reported here.

use std::fmt;

/// Result alias used throughout the crate.
pub type EngineResult<T> = Result<T, EngineError>;

/// Errors produced while training, persisting, or querying a model.
#[derive(Debug)]
pub enum EngineError {
    /// Underlying I/O failure while reading a corpus or accessing a model file.
    Io(std::io::Error),
    /// The binary model codec failed to encode or decode.
    Serialization(bincode::Error),
    /// The corpus file contained no `question : answer` lines at all.
    EmptyCorpus { path: String },
    /// Vocabulary extraction produced no entries for the named list.
    EmptyVocabulary { which: &'static str },
    /// A training pair's answer is missing from the answer vocabulary.
    UnknownAnswer { answer: String },
    /// A training sample's target index does not fit the answer list.
    TargetOutOfRange { target: usize, classes: usize },
    /// Inference or save was requested before any model was trained or loaded.
    ModelNotLoaded,
    /// A model file decoded cleanly but violates the model's shape invariants.
    CorruptModel { details: String },
    /// A hyperparameter or temperature value is outside its valid range.
    InvalidOptions(String),
}

impl fmt::Display for EngineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EngineError::Io(err) => write!(f, "I/O failure: {err}"),
            EngineError::Serialization(err) => {
                write!(f, "failed to (de)serialize model: {err}")
            }
            EngineError::EmptyCorpus { path } => {
                write!(f, "no question/answer pairs found in {path}")
            }
            EngineError::EmptyVocabulary { which } => {
                write!(f, "cannot build a model with zero {which}")
            }
            EngineError::UnknownAnswer { answer } => {
                write!(f, "answer not present in the answer vocabulary: {answer:?}")
            }
            EngineError::TargetOutOfRange { target, classes } => {
                write!(f, "target index {target} out of range for {classes} answers")
            }
            EngineError::ModelNotLoaded => write!(f, "no model loaded"),
            EngineError::CorruptModel { details } => {
                write!(f, "model file has inconsistent structure: {details}")
            }
            EngineError::InvalidOptions(msg) => write!(f, "invalid options: {msg}"),
        }
    }
}

impl std::error::Error for EngineError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            EngineError::Io(err) => Some(err),
            EngineError::Serialization(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for EngineError {
    fn from(err: std::io::Error) -> Self {
        EngineError::Io(err)
    }
}

impl From<bincode::Error> for EngineError {
    fn from(err: bincode::Error) -> Self {
        EngineError::Serialization(err)
    }
}
