//! Scoring engine — turns content signals into score adjustments and the
//! overall-impression text.
//!
//! All adjustments land in one `ScoreLedger`, which the section feedback
//! generator also writes to. Final score = clamp(65 + Σ adjustments, 30, 98).

use crate::analysis::signals::ExtractedSignals;

pub const BASE_SCORE: i32 = 65;
pub const MIN_SCORE: i32 = 30;
pub const MAX_SCORE: i32 = 98;

const SHORT_RESUME_WORDS: usize = 200;
const LONG_RESUME_WORDS: usize = 700;
const LONG_SENTENCE_WORDS: f64 = 25.0;
const SHORT_SENTENCE_WORDS: f64 = 8.0;

/// One rule's contribution to the final score.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Adjustment {
    pub rule: &'static str,
    pub delta: i32,
}

/// Running total of score adjustments for a single analysis.
#[derive(Debug, Clone, Default)]
pub struct ScoreLedger {
    adjustments: Vec<Adjustment>,
}

impl ScoreLedger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn apply(&mut self, rule: &'static str, delta: i32) {
        self.adjustments.push(Adjustment { rule, delta });
    }

    pub fn total(&self) -> i32 {
        self.adjustments.iter().map(|a| a.delta).sum()
    }

    /// `rule:+delta` pairs in application order, for logging.
    pub fn breakdown(&self) -> String {
        self.adjustments
            .iter()
            .map(|a| format!("{}:{:+}", a.rule, a.delta))
            .collect::<Vec<_>>()
            .join(" ")
    }

    #[cfg(test)]
    pub fn delta_for(&self, rule: &str) -> Option<i32> {
        self.adjustments
            .iter()
            .find(|a| a.rule == rule)
            .map(|a| a.delta)
    }

    pub fn final_score(&self) -> u32 {
        (BASE_SCORE + self.total()).clamp(MIN_SCORE, MAX_SCORE) as u32
    }
}

/// Applies the four content rules (length, sentence length, quantified
/// achievements, action verbs) and returns the overall impression.
pub fn assess_content(signals: &ExtractedSignals, ledger: &mut ScoreLedger) -> String {
    let sentences = [
        assess_length(signals.stats.word_count, ledger),
        assess_sentence_length(signals.stats.average_sentence_length, ledger),
        assess_quantifiables(signals.quantifiable_count, ledger),
        assess_action_verbs(signals.action_verb_count, ledger),
    ];
    sentences.join(" ")
}

fn assess_length(word_count: usize, ledger: &mut ScoreLedger) -> String {
    if word_count < SHORT_RESUME_WORDS {
        ledger.apply("word_count", -10);
        format!(
            "Your resume appears quite brief at only about {word_count} words, which may not provide enough detail for recruiters."
        )
    } else if word_count > LONG_RESUME_WORDS {
        ledger.apply("word_count", -5);
        format!(
            "At over {word_count} words, your resume is quite detailed, though possibly too lengthy for quick scanning."
        )
    } else {
        ledger.apply("word_count", 5);
        format!(
            "Your resume is a good length at approximately {word_count} words, making it substantial yet scannable."
        )
    }
}

fn assess_sentence_length(average: f64, ledger: &mut ScoreLedger) -> String {
    let rounded = average.round() as u64;
    if average > LONG_SENTENCE_WORDS {
        ledger.apply("sentence_length", -5);
        format!(
            "Your sentences tend to be lengthy (averaging {rounded} words), which can make reading more difficult."
        )
    } else if average < SHORT_SENTENCE_WORDS {
        ledger.apply("sentence_length", -3);
        format!(
            "Your writing style uses quite short sentences (averaging {rounded} words), which may appear fragmented."
        )
    } else {
        ledger.apply("sentence_length", 3);
        format!(
            "Your writing style has good sentence structure, averaging {rounded} words per sentence."
        )
    }
}

fn assess_quantifiables(count: usize, ledger: &mut ScoreLedger) -> String {
    ledger.apply("quantifiable_achievements", quantifiable_adjustment(count));
    if count > 5 {
        format!(
            "Your resume effectively includes {count} quantifiable achievements, which strengthens your impact."
        )
    } else if count > 2 {
        format!(
            "You've included {count} quantifiable results, which is helpful, though more would strengthen your impact."
        )
    } else {
        format!(
            "With only {count} quantifiable achievements, your resume lacks the metrics needed to demonstrate your impact."
        )
    }
}

/// Tiered bonus for numeric-impact matches. Non-decreasing in `count`.
pub fn quantifiable_adjustment(count: usize) -> i32 {
    if count > 5 {
        10
    } else if count > 2 {
        5
    } else {
        -8
    }
}

fn assess_action_verbs(count: usize, ledger: &mut ScoreLedger) -> String {
    if count > 15 {
        ledger.apply("action_verbs", 8);
        format!(
            "You use strong action verbs throughout ({count} found), creating dynamic and engaging content."
        )
    } else if count > 8 {
        ledger.apply("action_verbs", 4);
        format!(
            "Your use of action verbs ({count} found) is adequate, though increasing their frequency would strengthen your descriptions."
        )
    } else {
        ledger.apply("action_verbs", -7);
        format!(
            "With {count} action verbs, your descriptions could benefit from more powerful verbs to convey your capabilities and achievements."
        )
    }
}
