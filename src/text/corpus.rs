use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::error::EngineResult;

/// One `question : answer` training example.
#[derive(Debug, Clone, PartialEq)]
pub struct Pair {
    pub question: String,
    pub answer: String,
}

/// Parses one corpus line. The first colon is the split point and both sides
/// are trimmed; lines without a colon yield `None`.
pub fn parse_line(line: &str) -> Option<Pair> {
    let (question, answer) = line.split_once(':')?;
    Some(Pair {
        question: question.trim().to_string(),
        answer: answer.trim().to_string(),
    })
}

/// Reads every `question : answer` line from a corpus file.
///
/// Lines without a colon are silently skipped; the skip count only shows up
/// in the debug log. Deciding whether zero usable lines is an error is left
/// to the caller, which knows whether it is about to train on the result.
pub fn read_pairs(path: &Path) -> EngineResult<Vec<Pair>> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);

    let mut pairs = Vec::new();
    let mut skipped = 0usize;
    for line in reader.lines() {
        let line = line?;
        match parse_line(&line) {
            Some(pair) => pairs.push(pair),
            None => skipped += 1,
        }
    }

    tracing::debug!(
        "read {} pair(s) from {} ({} line(s) without a colon skipped)",
        pairs.len(),
        path.display(),
        skipped
    );
    Ok(pairs)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::EngineError;

    #[test]
    fn test_parse_line_splits_at_first_colon() {
        let pair = parse_line("  what time is it : 10:30 sharp ").unwrap();
        assert_eq!(pair.question, "what time is it");
        assert_eq!(pair.answer, "10:30 sharp");
    }

    #[test]
    fn test_parse_line_skips_lines_without_colon() {
        assert_eq!(parse_line("no delimiter here"), None);
        assert_eq!(parse_line(""), None);
    }

    #[test]
    fn test_parse_line_keeps_empty_sides() {
        // Empty answers survive as their own class.
        let pair = parse_line("hello :").unwrap();
        assert_eq!(pair.question, "hello");
        assert_eq!(pair.answer, "");
    }

    #[test]
    fn test_read_pairs_preserves_line_order() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("corpus.txt");
        std::fs::write(&path, "hello : hi\nthis line is noise\nbye : goodbye\n").unwrap();

        let pairs = read_pairs(&path).unwrap();
        assert_eq!(pairs.len(), 2);
        assert_eq!(pairs[0].question, "hello");
        assert_eq!(pairs[1].answer, "goodbye");
    }

    #[test]
    fn test_read_pairs_missing_file_is_io_error() {
        let err = read_pairs(Path::new("/nonexistent/corpus.txt")).unwrap_err();
        assert!(matches!(err, EngineError::Io(_)));
    }
}
