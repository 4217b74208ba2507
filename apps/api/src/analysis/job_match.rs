//! Job-match analysis — keyword overlap between a résumé and a job description.
//!
//! Algorithm:
//! 1. Keywords = vocabulary terms present in the JD (substring, case-insensitive)
//!    followed by phrases captured after "experience with", "knowledge of", …
//! 2. Deduplicate case-insensitively, cap at 10. No keywords → a fixed
//!    stride through the vocabulary.
//! 3. found = keyword is a case-insensitive substring of the résumé.
//! 4. overall_match = round(found / selected × 100) + min(5, quantified
//!    achievements in the résumé), clamped to 30–95.
//! 5. relevance = round(0.7 × overall + (5 + min(10, found)) + min(15, len / 500)),
//!    clamped to 40–98.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::analysis::models::{JobMatchResult, KeywordMatch};
use crate::analysis::signals::count_quantifiable;
use crate::analysis::vocabulary::JOB_KEYWORDS;
use crate::analysis::AnalysisError;

const MAX_KEYWORDS: usize = 10;
const EXTRA_MISSING: usize = 3;
const IMPROVEMENT_COUNT: usize = 5;
const MISSING_IN_FIRST_SUGGESTION: usize = 2;

const MIN_MATCH: i64 = 30;
const MAX_MATCH: i64 = 95;
const MIN_RELEVANCE: f64 = 40.0;
const MAX_RELEVANCE: f64 = 98.0;
const MAX_MATCH_BONUS: usize = 5;
const MAX_FOUND_BONUS: usize = 10;
const RELEVANCE_BASE_BONUS: f64 = 5.0;
const MAX_LENGTH_FACTOR: f64 = 15.0;
const CHARS_PER_LENGTH_POINT: f64 = 500.0;

/// Captured phrases must be 4–29 characters long.
const MIN_PHRASE_CHARS: usize = 4;
const MAX_PHRASE_CHARS: usize = 29;

const FALLBACK_IMPROVEMENT: &str =
    "Further develop your expertise in key technologies mentioned in the job description";

const GENERAL_IMPROVEMENTS: &[&str] = &[
    "Quantify your achievements with specific metrics and outcomes",
    "Highlight leadership roles or team collaboration examples",
    "Include specific examples of relevant projects you've completed",
    "Tailor your professional summary to better match the job requirements",
    "Reorganize your skills section to prioritize the most relevant technologies",
    "Add more industry-specific terminology throughout your resume",
    "Emphasize problem-solving abilities with concrete examples",
    "Include relevant certifications or continued education in your field",
    "Demonstrate your communication skills with specific examples",
    "Show progression and growth in your career history",
];

static REQUIREMENT_PHRASE_RES: Lazy<Vec<Regex>> = Lazy::new(|| {
    [
        r"experience (?:in|with) ([\w\s\-/]+?)(?:\.|,|\s(?:and|or)\b)",
        r"knowledge of ([\w\s\-/]+?)(?:\.|,|\s(?:and|or)\b)",
        r"proficiency (?:in|with) ([\w\s\-/]+?)(?:\.|,|\s(?:and|or)\b)",
        r"familiar with ([\w\s\-/]+?)(?:\.|,|\s(?:and|or)\b)",
        r"skills? (?:in|with) ([\w\s\-/]+?)(?:\.|,|\s(?:and|or)\b)",
    ]
    .iter()
    .map(|p| Regex::new(&format!("(?i){p}")).expect("requirement phrase pattern"))
    .collect()
});

pub fn analyze_job_match(
    resume_text: &str,
    job_description: &str,
) -> Result<JobMatchResult, AnalysisError> {
    if job_description.trim().is_empty() {
        return Err(AnalysisError::InvalidInput(
            "job description cannot be empty".to_string(),
        ));
    }
    if resume_text.trim().is_empty() {
        return Err(AnalysisError::InvalidInput(
            "resume text cannot be empty".to_string(),
        ));
    }

    let selected = select_keywords(job_description);
    let resume_lower = resume_text.to_lowercase();

    let keyword_matches: Vec<KeywordMatch> = selected
        .iter()
        .map(|keyword| KeywordMatch {
            keyword: keyword.clone(),
            found: resume_lower.contains(&keyword.to_lowercase()),
        })
        .collect();

    let found_count = keyword_matches.iter().filter(|m| m.found).count();
    let missing_keywords = collect_missing(&keyword_matches, &selected, &resume_lower);

    let raw_match = ((found_count as f64 / keyword_matches.len() as f64) * 100.0).round() as i64;
    let match_bonus = count_quantifiable(resume_text).min(MAX_MATCH_BONUS) as i64;
    let overall_match = (raw_match + match_bonus).clamp(MIN_MATCH, MAX_MATCH) as u32;

    let relevance_bonus = RELEVANCE_BASE_BONUS + found_count.min(MAX_FOUND_BONUS) as f64;
    let length_factor =
        (resume_text.chars().count() as f64 / CHARS_PER_LENGTH_POINT).min(MAX_LENGTH_FACTOR);
    let relevance_score = (overall_match as f64 * 0.7 + relevance_bonus + length_factor)
        .round()
        .clamp(MIN_RELEVANCE, MAX_RELEVANCE) as u32;

    let suggested_improvements = build_improvements(&missing_keywords, found_count);

    tracing::debug!(
        keywords = keyword_matches.len(),
        found = found_count,
        overall_match,
        relevance_score,
        "job match computed"
    );

    Ok(JobMatchResult {
        overall_match,
        keyword_matches,
        missing_keywords,
        suggested_improvements,
        relevance_score,
    })
}

/// Keywords for one job description: vocabulary hits, then requirement phrases.
pub fn select_keywords(job_description: &str) -> Vec<String> {
    let jd_lower = job_description.to_lowercase();

    let vocabulary_hits = JOB_KEYWORDS
        .iter()
        .filter(|k| jd_lower.contains(&k.to_lowercase()))
        .map(|k| k.to_string());

    let phrases = extract_requirement_phrases(job_description);

    let mut selected: Vec<String> = Vec::new();
    for keyword in vocabulary_hits.chain(phrases) {
        if selected.len() == MAX_KEYWORDS {
            break;
        }
        if !selected.iter().any(|s| s.eq_ignore_ascii_case(&keyword)) {
            selected.push(keyword);
        }
    }

    if selected.is_empty() {
        selected = fallback_keywords();
    }
    selected
}

/// Phrases following "experience with", "knowledge of" and similar lead-ins,
/// up to the next clause boundary.
pub fn extract_requirement_phrases(job_description: &str) -> Vec<String> {
    let mut phrases = Vec::new();
    for re in REQUIREMENT_PHRASE_RES.iter() {
        for caps in re.captures_iter(job_description) {
            let Some(raw) = caps.get(1) else { continue };
            let len = raw.as_str().chars().count();
            if (MIN_PHRASE_CHARS..=MAX_PHRASE_CHARS).contains(&len) {
                let phrase = raw.as_str().trim();
                if !phrase.is_empty() {
                    phrases.push(phrase.to_string());
                }
            }
        }
    }
    phrases
}

/// Evenly spaced vocabulary terms, so every domain is represented.
fn fallback_keywords() -> Vec<String> {
    let stride = (JOB_KEYWORDS.len() / MAX_KEYWORDS).max(1);
    JOB_KEYWORDS
        .iter()
        .step_by(stride)
        .take(MAX_KEYWORDS)
        .map(|k| k.to_string())
        .collect()
}

/// Not-found keywords, then up to three vocabulary terms that were neither
/// selected nor present in the résumé.
fn collect_missing(
    matches: &[KeywordMatch],
    selected: &[String],
    resume_lower: &str,
) -> Vec<String> {
    let mut missing: Vec<String> = matches
        .iter()
        .filter(|m| !m.found)
        .map(|m| m.keyword.clone())
        .collect();

    let extras = JOB_KEYWORDS
        .iter()
        .filter(|k| !selected.iter().any(|s| s.eq_ignore_ascii_case(k)))
        .filter(|k| !resume_lower.contains(&k.to_lowercase()))
        .take(EXTRA_MISSING)
        .map(|k| k.to_string());
    missing.extend(extras);
    missing
}

fn build_improvements(missing: &[String], found_count: usize) -> Vec<String> {
    let mut improvements = Vec::with_capacity(IMPROVEMENT_COUNT);

    if missing.is_empty() {
        improvements.push(FALLBACK_IMPROVEMENT.to_string());
    } else {
        let named: Vec<&str> = missing
            .iter()
            .take(MISSING_IN_FIRST_SUGGESTION)
            .map(String::as_str)
            .collect();
        improvements.push(format!("Add specific experience with {}", named.join(" and ")));
    }

    let start = found_count % GENERAL_IMPROVEMENTS.len();
    let rotated = GENERAL_IMPROVEMENTS[start..]
        .iter()
        .chain(&GENERAL_IMPROVEMENTS[..start]);
    for suggestion in rotated {
        if improvements.len() == IMPROVEMENT_COUNT {
            break;
        }
        if !improvements.iter().any(|s| s.as_str() == *suggestion) {
            improvements.push(suggestion.to_string());
        }
    }

    improvements
}
