//! ATS compatibility — keyword presence plus a fixed battery of formatting checks.
//!
//! overall = round(keyword pass rate × 40 + formatting pass rate × 60)

use once_cell::sync::Lazy;
use regex::Regex;

use crate::analysis::models::{AtsResult, FormattingResult, KeywordMatch};
use crate::analysis::signals::{compile_terms, EMAIL_RE};
use crate::analysis::vocabulary::ATS_KEYWORDS;

const KEYWORD_WEIGHT: f64 = 40.0;
const FORMATTING_WEIGHT: f64 = 60.0;
const MAX_RECOMMENDATIONS: usize = 5;

const GENERIC_TIPS: &[&str] = &[
    "Use a clean, simple format with standard section headers.",
    "Ensure your name and contact details are at the top of the resume.",
    "Avoid images, graphics, and text boxes as ATS cannot read these.",
    "Use standard fonts like Arial, Calibri, or Times New Roman.",
];

static KEYWORD_MATCHERS: Lazy<Vec<(&'static str, Regex)>> =
    Lazy::new(|| compile_terms(ATS_KEYWORDS));

static TABLE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\|\s*-+\s*\|").expect("table pattern"));

// Decorative glyphs that parsers routinely drop or mangle when used as bullets.
static EXOTIC_BULLET_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?m)^[ \t]*[➢➤►▶▸▪■□◆◇❖★☆✓✔✗✘→⇒◦○♦]").expect("bullet pattern")
});

static SECTION_HEADER_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?im)\b(?:experience|education|skills|projects)[ \t]*:?[ \t]*\r?$")
        .expect("section header pattern")
});

static DATE_RANGE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)(?:19|20)\d{2}\s*(?:-|–|—|to)\s*(?:19|20)\d{2}|\b(?:present|current|now)\b")
        .expect("date range pattern")
});

/// Whether a check passes when its pattern is found or when it is absent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CheckKind {
    /// Passing = pattern found.
    Required,
    /// Passing = pattern not found.
    Forbidden,
}

struct FormattingCheck {
    name: &'static str,
    pattern: &'static Lazy<Regex>,
    kind: CheckKind,
    remediation: &'static str,
}

impl FormattingCheck {
    fn passes(&self, text: &str) -> bool {
        let found = self.pattern.is_match(text);
        match self.kind {
            CheckKind::Required => found,
            CheckKind::Forbidden => !found,
        }
    }
}

static FORMATTING_CHECKS: [FormattingCheck; 5] = [
    FormattingCheck {
        name: "Complex tables",
        pattern: &TABLE_RE,
        kind: CheckKind::Forbidden,
        remediation: "Tables can confuse ATS systems. Use simple bullet points instead.",
    },
    FormattingCheck {
        name: "Uncommon bullet points",
        pattern: &EXOTIC_BULLET_RE,
        kind: CheckKind::Forbidden,
        remediation: "Exotic bullet points may not parse correctly. Use standard bullets.",
    },
    FormattingCheck {
        name: "Proper section headers",
        pattern: &SECTION_HEADER_RE,
        kind: CheckKind::Required,
        remediation: "Put each section header (Experience, Education, Skills) on its own line so ATS can categorize information correctly.",
    },
    FormattingCheck {
        name: "Contact information",
        pattern: &EMAIL_RE,
        kind: CheckKind::Required,
        remediation: "Add an email address so your contact information is easily identifiable.",
    },
    FormattingCheck {
        name: "Date formats",
        pattern: &DATE_RANGE_RE,
        kind: CheckKind::Required,
        remediation: "Write employment dates as standard ranges (e.g., 2019 - 2023 or 2021 - Present) that ATS can recognize.",
    },
];

pub fn check_ats_compatibility(text: &str) -> AtsResult {
    let keyword_results: Vec<KeywordMatch> = KEYWORD_MATCHERS
        .iter()
        .map(|(keyword, re)| KeywordMatch {
            keyword: keyword.to_string(),
            found: re.is_match(text),
        })
        .collect();

    let formatting: Vec<(&FormattingCheck, bool)> = FORMATTING_CHECKS
        .iter()
        .map(|check| (check, check.passes(text)))
        .collect();

    let keyword_rate = pass_rate(keyword_results.iter().map(|k| k.found));
    let formatting_rate = pass_rate(formatting.iter().map(|(_, passed)| *passed));
    let overall_score =
        (keyword_rate * KEYWORD_WEIGHT + formatting_rate * FORMATTING_WEIGHT).round() as u32;

    let missing: Vec<&str> = keyword_results
        .iter()
        .filter(|k| !k.found)
        .map(|k| k.keyword.as_str())
        .collect();

    let mut candidates: Vec<String> = Vec::new();
    if !missing.is_empty() {
        candidates.push(format!(
            "Consider adding clear section headers for: {}.",
            missing.join(", ")
        ));
    }
    candidates.extend(
        formatting
            .iter()
            .filter(|(_, passed)| !passed)
            .map(|(check, _)| check.remediation.to_string()),
    );
    candidates.extend(GENERIC_TIPS.iter().map(|tip| tip.to_string()));

    let mut recommendations: Vec<String> = Vec::with_capacity(MAX_RECOMMENDATIONS);
    for candidate in candidates {
        if recommendations.len() == MAX_RECOMMENDATIONS {
            break;
        }
        if !recommendations.contains(&candidate) {
            recommendations.push(candidate);
        }
    }

    let formatting_results = formatting
        .into_iter()
        .map(|(check, passed)| FormattingResult {
            check: check.name.to_string(),
            passed,
        })
        .collect();

    AtsResult {
        overall_score,
        keyword_results,
        formatting_results,
        recommendations,
    }
}

fn pass_rate(results: impl ExactSizeIterator<Item = bool>) -> f64 {
    let total = results.len();
    if total == 0 {
        return 0.0;
    }
    results.filter(|passed| *passed).count() as f64 / total as f64
}
