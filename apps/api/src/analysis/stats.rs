//! Lexical statistics over raw résumé text.

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ContentStats {
    pub word_count: usize,
    pub sentence_count: usize,
    pub average_sentence_length: f64,
}

/// Words are whitespace-delimited tokens; sentences are non-blank segments
/// between runs of `.`, `!` or `?`.
pub fn compute_stats(text: &str) -> ContentStats {
    let word_count = text.split_whitespace().count();
    let sentence_count = text
        .split(&['.', '!', '?'][..])
        .filter(|segment| !segment.trim().is_empty())
        .count();

    let average_sentence_length = if word_count == 0 {
        0.0
    } else {
        word_count as f64 / sentence_count.max(1) as f64
    };

    ContentStats {
        word_count,
        sentence_count,
        average_sentence_length,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_text_is_all_zero() {
        let stats = compute_stats("");
        assert_eq!(stats.word_count, 0);
        assert_eq!(stats.sentence_count, 0);
        assert_eq!(stats.average_sentence_length, 0.0);
    }

    #[test]
    fn test_counts_words_across_mixed_whitespace() {
        let stats = compute_stats("  Led   a team\n\tof five ");
        assert_eq!(stats.word_count, 5);
    }

    #[test]
    fn test_consecutive_delimiters_collapse() {
        let stats = compute_stats("Shipped it!!! Really?! Yes... done.");
        assert_eq!(stats.sentence_count, 4);
    }

    #[test]
    fn test_text_without_delimiter_is_one_sentence() {
        let stats = compute_stats("Senior engineer with ten years in payments");
        assert_eq!(stats.sentence_count, 1);
        assert!((stats.average_sentence_length - 7.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_average_sentence_length() {
        let stats = compute_stats("One two three. Four five six seven eight nine.");
        assert_eq!(stats.word_count, 9);
        assert_eq!(stats.sentence_count, 2);
        assert!((stats.average_sentence_length - 4.5).abs() < f64::EPSILON);
    }

    #[test]
    fn test_whitespace_only_segments_are_dropped() {
        let stats = compute_stats(". . ! Built APIs.   ?");
        assert_eq!(stats.sentence_count, 1);
    }
}
