//! Signal detection — pattern scans over flat résumé text.
//!
//! Nothing here parses structure. Every signal is a regex or whole-word
//! vocabulary hit, and a missing signal is a normal outcome.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::analysis::stats::{compute_stats, ContentStats};
use crate::analysis::vocabulary::{
    ACTION_VERBS, CORE_ACTION_VERBS, DOMAIN_SKILLS, SECTION_NAMES, SOFT_SKILLS, TECHNICAL_SKILLS,
};

/// Characters of leading text searched for value-proposition language.
const SUMMARY_WINDOW_CHARS: usize = 500;

static QUANTIFIABLE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\d+%|\$\d+|\d+ (?:years|months|users|customers|projects)")
        .expect("quantifiable pattern")
});

static ACTION_VERB_RE: Lazy<Regex> = Lazy::new(|| word_alternation(ACTION_VERBS));

static CORE_ACTION_VERB_RE: Lazy<Regex> = Lazy::new(|| word_alternation(CORE_ACTION_VERBS));

static DEGREE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)degree|bachelor|master|phd|diploma|certificate").expect("degree pattern")
});

static DATE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\b(?:19|20)\d{2}\b|(?i:\b(?:graduated|completed)\b)").expect("date pattern")
});

pub(crate) static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}").expect("email pattern")
});

static VALUE_LANGUAGE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)value|contribute|expertise|specialize|experienced in")
        .expect("value language pattern")
});

static LINKEDIN_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)linkedin\.com|linkedin profile").expect("linkedin pattern"));

static PROJECT_WORD_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\bprojects?\b").expect("project pattern"));

static TECHNICAL_ROLE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\b(?:developer|engineer|programmer|coding|software|web|app)\b")
        .expect("technical role pattern")
});

static SECTION_MATCHERS: Lazy<Vec<(&'static str, Regex)>> =
    Lazy::new(|| compile_terms(SECTION_NAMES));

pub(crate) static TECHNICAL_MATCHERS: Lazy<Vec<(&'static str, Regex)>> =
    Lazy::new(|| compile_terms(TECHNICAL_SKILLS));

pub(crate) static SOFT_MATCHERS: Lazy<Vec<(&'static str, Regex)>> =
    Lazy::new(|| compile_terms(SOFT_SKILLS));

pub(crate) static DOMAIN_MATCHERS: Lazy<Vec<(&'static str, Regex)>> =
    Lazy::new(|| compile_terms(DOMAIN_SKILLS));

/// Everything the scorers need to know about one résumé.
#[derive(Debug, Clone, PartialEq)]
pub struct ExtractedSignals {
    pub stats: ContentStats,
    /// Canonical section names found, in vocabulary order.
    pub sections: Vec<&'static str>,
    pub quantifiable_count: usize,
    pub action_verb_count: usize,
    pub technical_skills: Vec<&'static str>,
    pub soft_skills: Vec<&'static str>,
    pub domain_skills: Vec<&'static str>,
    pub has_degree: bool,
    pub has_date: bool,
    pub has_contact: bool,
    /// Value-proposition wording within the first 500 characters.
    pub has_value_language: bool,
    pub has_linkedin: bool,
    pub mentions_projects: bool,
    pub has_core_action_verb: bool,
    pub is_technical_role: bool,
}

impl ExtractedSignals {
    pub fn has_section(&self, name: &str) -> bool {
        self.sections.iter().any(|s| *s == name)
    }

    pub fn has_any_section(&self, names: &[&str]) -> bool {
        names.iter().any(|name| self.has_section(name))
    }
}

pub fn detect_signals(text: &str) -> ExtractedSignals {
    ExtractedSignals {
        stats: compute_stats(text),
        sections: matching_terms(&SECTION_MATCHERS, text),
        quantifiable_count: count_quantifiable(text),
        action_verb_count: ACTION_VERB_RE.find_iter(text).count(),
        technical_skills: matching_terms(&TECHNICAL_MATCHERS, text),
        soft_skills: matching_terms(&SOFT_MATCHERS, text),
        domain_skills: matching_terms(&DOMAIN_MATCHERS, text),
        has_degree: DEGREE_RE.is_match(text),
        has_date: DATE_RE.is_match(text),
        has_contact: EMAIL_RE.is_match(text),
        has_value_language: VALUE_LANGUAGE_RE.is_match(leading_chars(text, SUMMARY_WINDOW_CHARS)),
        has_linkedin: LINKEDIN_RE.is_match(text),
        mentions_projects: PROJECT_WORD_RE.is_match(text),
        has_core_action_verb: CORE_ACTION_VERB_RE.is_match(text),
        is_technical_role: TECHNICAL_ROLE_RE.is_match(text),
    }
}

/// Non-overlapping numeric-impact matches (percentages, currency, durations, counts).
pub fn count_quantifiable(text: &str) -> usize {
    QUANTIFIABLE_RE.find_iter(text).count()
}

/// Case-insensitive whole-word pattern for a vocabulary term.
///
/// Word boundaries are only asserted on sides where the term begins or ends
/// with a word character, so `c#` and `.net` still match. A hyphen inside the
/// term also matches whitespace (`problem-solving` ≈ `problem solving`).
pub(crate) fn term_pattern(term: &str) -> String {
    let body = term
        .split('-')
        .map(regex::escape)
        .collect::<Vec<_>>()
        .join(r"[\s-]");
    let is_word = |c: char| c.is_alphanumeric() || c == '_';
    let lead = if term.chars().next().is_some_and(is_word) {
        r"\b"
    } else {
        ""
    };
    let trail = if term.chars().last().is_some_and(is_word) {
        r"\b"
    } else {
        ""
    };
    format!("(?i){lead}{body}{trail}")
}

pub(crate) fn compile_terms(terms: &'static [&'static str]) -> Vec<(&'static str, Regex)> {
    terms
        .iter()
        .map(|&term| {
            let re = Regex::new(&term_pattern(term)).expect("vocabulary term pattern");
            (term, re)
        })
        .collect()
}

fn matching_terms(matchers: &[(&'static str, Regex)], text: &str) -> Vec<&'static str> {
    matchers
        .iter()
        .filter(|(_, re)| re.is_match(text))
        .map(|(term, _)| *term)
        .collect()
}

fn word_alternation(words: &[&str]) -> Regex {
    let alternation = words
        .iter()
        .map(|w| regex::escape(w))
        .collect::<Vec<_>>()
        .join("|");
    Regex::new(&format!(r"(?i)\b(?:{alternation})\b")).expect("word alternation pattern")
}

/// Longest prefix of `text` holding at most `n` characters.
fn leading_chars(text: &str, n: usize) -> &str {
    match text.char_indices().nth(n) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}
