pub mod corpus;
pub mod vocab;

pub use corpus::{parse_line, read_pairs, Pair};
pub use vocab::{encode, extract_answers, extract_keywords};
