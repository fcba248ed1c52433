use std::collections::HashSet;

use crate::text::corpus::Pair;

/// Collects the distinct question words across the corpus, lowercased, in
/// first-seen order. The index of a word in the result is its feature slot.
pub fn extract_keywords(pairs: &[Pair]) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut keywords = Vec::new();
    for pair in pairs {
        for word in pair.question.to_lowercase().split_whitespace() {
            if !seen.contains(word) {
                seen.insert(word.to_string());
                keywords.push(word.to_string());
            }
        }
    }
    keywords
}

/// Collects the distinct answers, verbatim, in first-seen order. The index of
/// an answer in the result is its class label.
pub fn extract_answers(pairs: &[Pair]) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut answers = Vec::new();
    for pair in pairs {
        if !seen.contains(&pair.answer) {
            seen.insert(pair.answer.clone());
            answers.push(pair.answer.clone());
        }
    }
    answers
}

/// Encodes a question as a binary bag-of-words vector over `keywords`.
/// Presence only: repeated words still encode as 1.0.
pub fn encode(question: &str, keywords: &[String]) -> Vec<f64> {
    let lowered = question.to_lowercase();
    let words: HashSet<&str> = lowered.split_whitespace().collect();
    keywords
        .iter()
        .map(|k| if words.contains(k.as_str()) { 1.0 } else { 0.0 })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pair(question: &str, answer: &str) -> Pair {
        Pair {
            question: question.to_string(),
            answer: answer.to_string(),
        }
    }

    #[test]
    fn test_keywords_first_seen_order() {
        let pairs = vec![pair("hello there", "hi"), pair("there you are", "yes")];
        assert_eq!(extract_keywords(&pairs), ["hello", "there", "you", "are"]);
    }

    #[test]
    fn test_keywords_are_lowercased() {
        let pairs = vec![pair("Hello HELLO hello", "hi")];
        assert_eq!(extract_keywords(&pairs), ["hello"]);
    }

    #[test]
    fn test_answers_keep_case_and_dedup() {
        let pairs = vec![
            pair("hello", "Hi there!"),
            pair("hey", "Hi there!"),
            pair("bye", "See you"),
        ];
        assert_eq!(extract_answers(&pairs), ["Hi there!", "See you"]);
    }

    #[test]
    fn test_encode_marks_present_words() {
        let keywords: Vec<String> = ["hello", "there", "bye"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        assert_eq!(encode("Hello bye", &keywords), [1.0, 0.0, 1.0]);
    }

    #[test]
    fn test_encode_unknown_words_are_all_zero() {
        let keywords = vec!["hello".to_string()];
        assert_eq!(encode("completely novel input", &keywords), [0.0]);
    }

    #[test]
    fn test_encode_repeats_stay_binary() {
        let keywords = vec!["hello".to_string()];
        assert_eq!(encode("hello hello hello", &keywords), [1.0]);
    }
}
