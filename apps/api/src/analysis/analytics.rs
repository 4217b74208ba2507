//! Résumé analytics: skill frequencies and experience metrics.
//!
//! Every figure comes straight from the text. When nothing is found the
//! field is empty or `None`; no placeholder values are made up.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::analysis::models::{ExperienceMetrics, ResumeAnalytics, SkillCategory, SkillItem};
use crate::analysis::signals::{compile_terms, DOMAIN_MATCHERS, SOFT_MATCHERS, TECHNICAL_MATCHERS};
use crate::analysis::vocabulary::ROLE_TITLES;

pub const MAX_SKILLS: usize = 15;

static YEARS_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\b(\d{1,2})\+?\s*(?:years?|yrs?)\s+(?:of\s+)?(?:experience|exp)\b")
        .expect("years of experience pattern")
});

static COMPANY_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\b(?:inc|llc|ltd|corporation|corp|company)\b").expect("company pattern")
});

static ROLE_WORD_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)\b(?:senior|lead|principal|staff|director|manager|engineer|developer|analyst|specialist|consultant|architect)\b",
    )
    .expect("role word pattern")
});

static TITLE_MATCHERS: Lazy<Vec<(&'static str, Regex)>> =
    Lazy::new(|| compile_terms(ROLE_TITLES));

pub fn analyze_resume_analytics(text: &str) -> ResumeAnalytics {
    ResumeAnalytics {
        skills: extract_skills(text),
        experience: extract_experience(text),
    }
}

/// Vocabulary skills with occurrence counts, most frequent first.
pub fn extract_skills(text: &str) -> Vec<SkillItem> {
    let groups: [(&[(&'static str, Regex)], SkillCategory); 3] = [
        (TECHNICAL_MATCHERS.as_slice(), SkillCategory::Technical),
        (SOFT_MATCHERS.as_slice(), SkillCategory::Soft),
        (DOMAIN_MATCHERS.as_slice(), SkillCategory::Domain),
    ];

    // (category, vocabulary index, item) so ties fall back to vocabulary order.
    let mut found: Vec<(SkillCategory, usize, SkillItem)> = Vec::new();
    for (matchers, category) in groups {
        for (idx, (term, re)) in matchers.iter().enumerate() {
            let count = re.find_iter(text).count();
            if count > 0 {
                found.push((
                    category,
                    idx,
                    SkillItem {
                        name: term.to_string(),
                        count,
                        category,
                    },
                ));
            }
        }
    }

    found.sort_by(|a, b| {
        b.2.count
            .cmp(&a.2.count)
            .then(a.0.cmp(&b.0))
            .then(a.1.cmp(&b.1))
    });
    found
        .into_iter()
        .take(MAX_SKILLS)
        .map(|(_, _, item)| item)
        .collect()
}

pub fn extract_experience(text: &str) -> ExperienceMetrics {
    let total_years = YEARS_RE
        .captures(text)
        .and_then(|caps| caps.get(1))
        .and_then(|m| m.as_str().parse::<u32>().ok());

    let mut companies = COMPANY_RE.find_iter(text).count();

    let mut role_words: Vec<String> = Vec::new();
    for m in ROLE_WORD_RE.find_iter(text) {
        let word = m.as_str().to_lowercase();
        if !role_words.contains(&word) {
            role_words.push(word);
        }
    }
    let mut roles = role_words.len();

    if let Some(years) = total_years {
        companies = companies.min(years as usize + 1);
        roles = roles.min(years.max(1) as usize);
    }

    ExperienceMetrics {
        total_years,
        companies,
        roles,
        recent_role: recent_role(text),
    }
}

/// Title that appears earliest in the text. Résumés list the latest position first.
fn recent_role(text: &str) -> Option<String> {
    TITLE_MATCHERS
        .iter()
        .filter_map(|(title, re)| re.find(text).map(|m| (m.start(), *title)))
        .min_by_key(|(start, _)| *start)
        .map(|(_, title)| title.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_skills_sorted_by_count_then_category() {
        let text = "Python, Python, python. Leadership. SQL and leadership. Healthcare.";
        let skills = extract_skills(text);
        let names: Vec<&str> = skills.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["python", "leadership", "sql", "healthcare"]);
        assert_eq!(skills[0].count, 3);
        assert_eq!(skills[1].category, SkillCategory::Soft);
        assert_eq!(skills[3].category, SkillCategory::Domain);
    }

    #[test]
    fn test_equal_counts_keep_vocabulary_order() {
        let skills = extract_skills("docker react aws");
        let names: Vec<&str> = skills.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["react", "aws", "docker"]);
    }

    #[test]
    fn test_skills_capped() {
        let text = "javascript typescript react angular vue node express python django flask \
                    java spring php laravel html css sass tailwind";
        assert_eq!(extract_skills(text).len(), MAX_SKILLS);
    }

    #[test]
    fn test_no_skills_is_empty() {
        assert!(extract_skills("Worked the night shift").is_empty());
    }

    #[test]
    fn test_years_of_experience() {
        let exp = extract_experience("Engineer with 7+ years of experience in backend systems");
        assert_eq!(exp.total_years, Some(7));
        let exp = extract_experience("5 yrs exp in retail");
        assert_eq!(exp.total_years, Some(5));
    }

    #[test]
    fn test_missing_years_is_none() {
        let exp = extract_experience("Engineer at Acme Inc");
        assert_eq!(exp.total_years, None);
        assert_eq!(exp.companies, 1);
    }

    #[test]
    fn test_distinct_role_words() {
        let exp = extract_experience("Senior Engineer. Lead engineer. senior developer.");
        assert_eq!(exp.roles, 4);
    }

    #[test]
    fn test_counts_bounded_by_years() {
        let text = "1 year of experience. Acme Inc, Beta LLC, Gamma Ltd, Delta Corp. \
                    Senior Lead Principal Engineer";
        let exp = extract_experience(text);
        assert_eq!(exp.total_years, Some(1));
        assert_eq!(exp.companies, 2);
        assert_eq!(exp.roles, 1);
    }

    #[test]
    fn test_zero_years_allows_one_role() {
        let exp = extract_experience("0 years of experience. Junior developer and analyst");
        assert_eq!(exp.total_years, Some(0));
        assert_eq!(exp.roles, 1);
        assert_eq!(exp.companies, 0);
    }

    #[test]
    fn test_recent_role_is_earliest_title() {
        let exp = extract_experience("Product Manager 2022-2024\nSoftware Engineer 2018-2022");
        assert_eq!(exp.recent_role.as_deref(), Some("Product Manager"));
    }

    #[test]
    fn test_recent_role_hyphen_variant() {
        let exp = extract_experience("Front end developer at a startup");
        assert_eq!(exp.recent_role.as_deref(), Some("Front-end Developer"));
    }

    #[test]
    fn test_no_role_is_none() {
        assert_eq!(extract_experience("Barista").recent_role, None);
    }

    #[test]
    fn test_analytics_deterministic() {
        let text = "Senior Software Engineer, Acme Inc. 6 years experience with Rust and AWS.";
        assert_eq!(analyze_resume_analytics(text), analyze_resume_analytics(text));
    }
}
