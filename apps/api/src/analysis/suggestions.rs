//! Suggestion selection — a fixed pool reordered by detected weaknesses.
//!
//! Selection is deterministic: the first picks take the head of the
//! reordered pool (where promoted weaknesses sit), the remaining picks walk
//! the rest of the pool from an offset derived from the text's word count.

use crate::analysis::signals::ExtractedSignals;

pub const SUGGESTION_COUNT: usize = 5;

/// Picks drawn from the head of the reordered pool.
const PRIORITY_PICKS: usize = 3;
/// Head window the priority picks are confined to.
const PRIORITY_WINDOW: usize = 8;

const SUGGESTION_POOL: &[&str] = &[
    "Quantify your achievements with metrics (e.g., \"Increased sales by 25%\" instead of \"Increased sales\")",
    "Tailor your resume for each job application by emphasizing relevant skills and experience",
    "Add a LinkedIn profile and ensure it is consistent with your resume",
    "Consider adding a brief projects section if you have relevant work to showcase",
    "Use strong action verbs at the beginning of each bullet point (e.g., \"Implemented\", \"Developed\", \"Led\")",
    "Create a more focused professional summary that highlights your unique value proposition",
    "Remove outdated or irrelevant experience to keep your resume concise",
    "Incorporate industry keywords to help your resume pass through ATS systems",
    "Add specific technical skills with proficiency levels where applicable",
    "Include certifications and continuing education to demonstrate ongoing professional development",
    "Make your achievements more specific by including context, action, and results",
    "Ensure consistent formatting throughout your resume (fonts, bullet points, spacing)",
    "Consider a skills-based format if you're changing industries or have employment gaps",
    "Add a brief technologies/tools section for technical roles",
    "Use white space strategically to improve readability and visual appeal",
    "Replace generic phrases like \"team player\" with specific examples of collaboration",
    "Include relevant volunteer work, especially if it demonstrates transferable skills",
    "Eliminate pronouns like \"I\" and \"my\" to maintain a professional tone",
    "Adjust your resume length based on your experience level (1 page for early career, 2 pages for 10+ years)",
    "Have your resume reviewed by someone in your target industry for specialized feedback",
];

/// Returned when there is no résumé text to inspect.
pub const DEFAULT_SUGGESTIONS: [&str; SUGGESTION_COUNT] = [
    "Start by creating a clear and concise resume with your contact information at the top",
    "Include a strong professional summary that highlights your key qualifications",
    "Organize your experience section chronologically with most recent positions first",
    "Include a skills section that highlights both technical and soft skills",
    "Add your education and any relevant certifications or training",
];

const QUANTIFY_MARKER: &str = "Quantify your achievements";
const ACTION_VERB_MARKER: &str = "Use strong action verbs";
const LINKEDIN_MARKER: &str = "Add a LinkedIn profile";
const PROJECTS_MARKER: &str = "Consider adding a brief projects section";
const TOOLS_MARKER: &str = "Add a brief technologies/tools section";
const TECH_SKILLS_MARKER: &str = "Add specific technical skills";

pub fn select_suggestions(signals: &ExtractedSignals) -> Vec<String> {
    let mut pool: Vec<&str> = SUGGESTION_POOL.to_vec();

    if signals.quantifiable_count == 0 {
        move_to_front(&mut pool, QUANTIFY_MARKER);
    }
    if !signals.has_core_action_verb {
        move_to_front(&mut pool, ACTION_VERB_MARKER);
    }
    if !signals.has_linkedin {
        move_to_front(&mut pool, LINKEDIN_MARKER);
    }
    if !signals.mentions_projects {
        move_to_front(&mut pool, PROJECTS_MARKER);
    }
    if signals.is_technical_role {
        move_to_front(&mut pool, TOOLS_MARKER);
        move_to_front(&mut pool, TECH_SKILLS_MARKER);
    }

    pick(pool, signals.stats.word_count)
}

pub fn default_suggestions() -> Vec<String> {
    DEFAULT_SUGGESTIONS.iter().map(|s| s.to_string()).collect()
}

/// Moves the first entry starting with `marker` (case-insensitive) to index 0.
fn move_to_front(pool: &mut Vec<&str>, marker: &str) {
    let marker = marker.to_lowercase();
    if let Some(idx) = pool
        .iter()
        .position(|s| s.to_lowercase().starts_with(&marker))
    {
        let entry = pool.remove(idx);
        pool.insert(0, entry);
    }
}

fn pick(mut pool: Vec<&str>, seed: usize) -> Vec<String> {
    let mut picked = Vec::with_capacity(SUGGESTION_COUNT);

    let head = PRIORITY_PICKS.min(PRIORITY_WINDOW).min(pool.len());
    picked.extend(pool.drain(..head).map(str::to_string));

    let mut cursor = if pool.is_empty() { 0 } else { seed % pool.len() };
    while picked.len() < SUGGESTION_COUNT && !pool.is_empty() {
        cursor %= pool.len();
        picked.push(pool.remove(cursor).to_string());
    }

    picked
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;
    use crate::analysis::signals::detect_signals;

    #[test]
    fn test_pool_size() {
        assert!(SUGGESTION_POOL.len() >= 20);
    }

    #[test]
    fn test_exactly_five_unique() {
        for text in [
            "a",
            "Software engineer who led 3 projects and improved latency 40%",
            "linkedin.com/in/me",
        ] {
            let suggestions = select_suggestions(&detect_signals(text));
            assert_eq!(suggestions.len(), SUGGESTION_COUNT);
            let unique: HashSet<&String> = suggestions.iter().collect();
            assert_eq!(unique.len(), SUGGESTION_COUNT, "duplicate for {text:?}");
        }
    }

    #[test]
    fn test_weaknesses_lead_the_selection() {
        // No metrics, no core verbs, no LinkedIn, no projects, not technical.
        let suggestions = select_suggestions(&detect_signals("Cashier at a grocery store"));
        assert!(suggestions[0].starts_with(PROJECTS_MARKER));
        assert!(suggestions[1].starts_with(LINKEDIN_MARKER));
        assert!(suggestions[2].starts_with(ACTION_VERB_MARKER));
    }

    #[test]
    fn test_technical_role_promotes_technology_entries() {
        let text = "Software developer. Led 2 projects, grew usage 30%. linkedin.com/in/dev";
        let suggestions = select_suggestions(&detect_signals(text));
        assert!(suggestions[0].starts_with(TECH_SKILLS_MARKER));
        assert!(suggestions[1].starts_with(TOOLS_MARKER));
    }

    #[test]
    fn test_selection_is_deterministic() {
        let signals = detect_signals("Managed a warehouse team for 4 years");
        assert_eq!(select_suggestions(&signals), select_suggestions(&signals));
    }

    #[test]
    fn test_move_to_front_is_case_insensitive() {
        let mut pool = vec!["Alpha", "beta entry", "Gamma"];
        move_to_front(&mut pool, "Beta");
        assert_eq!(pool, vec!["beta entry", "Alpha", "Gamma"]);
    }

    #[test]
    fn test_move_to_front_missing_marker_is_noop() {
        let mut pool = vec!["Alpha", "Gamma"];
        move_to_front(&mut pool, "Delta");
        assert_eq!(pool, vec!["Alpha", "Gamma"]);
    }

    #[test]
    fn test_default_suggestions() {
        let defaults = default_suggestions();
        assert_eq!(defaults.len(), SUGGESTION_COUNT);
        assert!(defaults[0].contains("contact information"));
    }
}
