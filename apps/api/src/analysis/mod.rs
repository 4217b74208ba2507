// Deterministic résumé analysis engine.
// Pure functions over immutable text: same input, byte-identical output.
// No I/O, no clock, no randomness. Vocabularies are read-only statics.

pub mod analytics;
pub mod ats;
pub mod handlers;
pub mod job_match;
pub mod models;
pub mod scoring;
pub mod sections;
pub mod signals;
pub mod stats;
pub mod suggestions;
pub mod vocabulary;

use thiserror::Error;

pub use analytics::analyze_resume_analytics;
pub use ats::check_ats_compatibility;
pub use job_match::analyze_job_match;
pub use models::{AtsResult, FeedbackResult, JobMatchResult, ResumeAnalytics};

use scoring::{assess_content, ScoreLedger};
use sections::{generate_section_feedback, placeholder_section_feedback};
use signals::detect_signals;
use suggestions::{default_suggestions, select_suggestions};

pub const EMPTY_RESUME_NOTICE: &str =
    "This appears to be an empty resume. Please upload your resume content for a detailed analysis.";

#[derive(Debug, Error)]
pub enum AnalysisError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

/// Full feedback for one résumé. Only the empty string takes the fixed empty
/// branch (score 0); whitespace-only text is analyzed like any other input.
pub fn analyze_resume(text: &str) -> FeedbackResult {
    if text.is_empty() {
        return FeedbackResult {
            overall_impression: EMPTY_RESUME_NOTICE.to_string(),
            section_feedback: placeholder_section_feedback(),
            suggestions: default_suggestions(),
            score: 0,
        };
    }

    let signals = detect_signals(text);
    let mut ledger = ScoreLedger::new();

    let overall_impression = assess_content(&signals, &mut ledger);
    let section_feedback = generate_section_feedback(&signals, &mut ledger);
    let suggestions = select_suggestions(&signals);
    let score = ledger.final_score();

    tracing::debug!(
        words = signals.stats.word_count,
        sentences = signals.stats.sentence_count,
        sections = signals.sections.len(),
        domain_skills = signals.domain_skills.len(),
        has_date = signals.has_date,
        has_contact = signals.has_contact,
        adjustment = ledger.total(),
        breakdown = %ledger.breakdown(),
        score,
        "resume analyzed"
    );

    FeedbackResult {
        overall_impression,
        section_feedback,
        suggestions,
        score,
    }
}
