//! Result records produced by the analysis engine.
//!
//! Every record is built fresh per call and never mutated afterwards.
//! Field names serialize in camelCase so the JSON matches what the
//! presentation layer (and the external AI provider) exchange.

use std::fmt;

use serde::{
    de::{MapAccess, Visitor},
    ser::SerializeMap,
    Deserialize, Deserializer, Serialize, Serializer,
};

// ────────────────────────────────────────────────────────────────────────────
// Section feedback (insertion-ordered map)
// ────────────────────────────────────────────────────────────────────────────

/// Section name → commentary, kept in insertion order.
///
/// Serializes as a JSON object; the canonical sections always come first.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SectionFeedback {
    entries: Vec<(String, String)>,
}

impl SectionFeedback {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts or replaces the commentary for `section`. Replacing keeps the
    /// original position.
    pub fn insert(&mut self, section: impl Into<String>, commentary: impl Into<String>) {
        let section = section.into();
        let commentary = commentary.into();
        match self.entries.iter_mut().find(|(name, _)| *name == section) {
            Some(entry) => entry.1 = commentary,
            None => self.entries.push((section, commentary)),
        }
    }

    pub fn get(&self, section: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(name, _)| name == section)
            .map(|(_, commentary)| commentary.as_str())
    }

    pub fn contains(&self, section: &str) -> bool {
        self.get(section).is_some()
    }

    /// Case-insensitive key lookup, used to avoid near-duplicate headings.
    pub fn contains_ignore_case(&self, section: &str) -> bool {
        self.entries
            .iter()
            .any(|(name, _)| name.eq_ignore_ascii_case(section))
    }

    #[cfg(test)]
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(name, _)| name.as_str())
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.entries.len()
    }
}

impl Serialize for SectionFeedback {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (name, commentary) in &self.entries {
            map.serialize_entry(name, commentary)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for SectionFeedback {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct SectionFeedbackVisitor;

        impl<'de> Visitor<'de> for SectionFeedbackVisitor {
            type Value = SectionFeedback;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a map of section name to commentary")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
                let mut feedback = SectionFeedback::new();
                while let Some((name, commentary)) = access.next_entry::<String, String>()? {
                    feedback.insert(name, commentary);
                }
                Ok(feedback)
            }
        }

        deserializer.deserialize_map(SectionFeedbackVisitor)
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Feedback
// ────────────────────────────────────────────────────────────────────────────

/// Overall résumé review.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedbackResult {
    pub overall_impression: String,
    pub section_feedback: SectionFeedback,
    /// Exactly 5 unique entries.
    pub suggestions: Vec<String>,
    /// 30–98 for non-empty input, 0 for empty input.
    pub score: u32,
}

// ────────────────────────────────────────────────────────────────────────────
// Job match
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeywordMatch {
    pub keyword: String,
    pub found: bool,
}

/// Résumé vs job description comparison.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobMatchResult {
    /// 30–95
    pub overall_match: u32,
    pub keyword_matches: Vec<KeywordMatch>,
    pub missing_keywords: Vec<String>,
    /// Exactly 5 unique entries.
    pub suggested_improvements: Vec<String>,
    /// 40–98
    pub relevance_score: u32,
}

// ────────────────────────────────────────────────────────────────────────────
// ATS compatibility
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormattingResult {
    pub check: String,
    pub passed: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AtsResult {
    /// 0–100
    pub overall_score: u32,
    pub keyword_results: Vec<KeywordMatch>,
    pub formatting_results: Vec<FormattingResult>,
    /// At most 5 unique entries.
    pub recommendations: Vec<String>,
}

// ────────────────────────────────────────────────────────────────────────────
// Analytics
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SkillCategory {
    Technical,
    Soft,
    Domain,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillItem {
    pub name: String,
    pub count: usize,
    pub category: SkillCategory,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExperienceMetrics {
    pub total_years: Option<u32>,
    pub companies: usize,
    pub roles: usize,
    pub recent_role: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResumeAnalytics {
    pub skills: Vec<SkillItem>,
    pub experience: ExperienceMetrics,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_section_feedback_preserves_insertion_order() {
        let mut feedback = SectionFeedback::new();
        feedback.insert("Work Experience", "a");
        feedback.insert("Education", "b");
        feedback.insert("Awards", "c");
        let keys: Vec<&str> = feedback.keys().collect();
        assert_eq!(keys, vec!["Work Experience", "Education", "Awards"]);
    }

    #[test]
    fn test_section_feedback_replace_keeps_position() {
        let mut feedback = SectionFeedback::new();
        feedback.insert("Skills", "first");
        feedback.insert("Education", "second");
        feedback.insert("Skills", "updated");
        assert_eq!(feedback.len(), 2);
        assert_eq!(feedback.keys().next(), Some("Skills"));
        assert_eq!(feedback.get("Skills"), Some("updated"));
    }

    #[test]
    fn test_section_feedback_serializes_as_ordered_object() {
        let mut feedback = SectionFeedback::new();
        feedback.insert("Skills", "x");
        feedback.insert("Education", "y");
        let json = serde_json::to_string(&feedback).unwrap();
        assert_eq!(json, r#"{"Skills":"x","Education":"y"}"#);
    }

    #[test]
    fn test_feedback_result_deserializes_camel_case() {
        let json = r#"{
            "overallImpression": "Solid resume.",
            "sectionFeedback": {"Skills": "Good", "Education": "Fine"},
            "suggestions": ["a", "b"],
            "score": 81
        }"#;
        let result: FeedbackResult = serde_json::from_str(json).unwrap();
        assert_eq!(result.score, 81);
        assert_eq!(result.section_feedback.get("Education"), Some("Fine"));
        assert_eq!(result.suggestions.len(), 2);
    }

    #[test]
    fn test_contains_ignore_case() {
        let mut feedback = SectionFeedback::new();
        feedback.insert("Work History", "x");
        assert!(feedback.contains_ignore_case("work history"));
        assert!(!feedback.contains("work history"));
    }

    #[test]
    fn test_skill_category_serde_snake_case() {
        let json = serde_json::to_string(&SkillCategory::Technical).unwrap();
        assert_eq!(json, r#""technical""#);
    }
}
