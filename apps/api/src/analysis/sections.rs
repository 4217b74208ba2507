//! Section feedback — per-section commentary derived from detected signals.
//!
//! The four canonical sections are always present, in this order:
//! Professional Summary, Work Experience, Skills, Education. Optional
//! sections follow only when their heading was detected.

use crate::analysis::models::SectionFeedback;
use crate::analysis::scoring::ScoreLedger;
use crate::analysis::signals::ExtractedSignals;

pub const PROFESSIONAL_SUMMARY: &str = "Professional Summary";
pub const WORK_EXPERIENCE: &str = "Work Experience";
pub const SKILLS: &str = "Skills";
pub const EDUCATION: &str = "Education";

pub const CANONICAL_SECTIONS: [&str; 4] = [PROFESSIONAL_SUMMARY, WORK_EXPERIENCE, SKILLS, EDUCATION];

const SUMMARY_HEADINGS: &[&str] = &["professional summary", "summary", "objective", "profile"];
const EXPERIENCE_HEADINGS: &[&str] = &["experience", "work experience", "employment history"];
const EDUCATION_HEADINGS: &[&str] = &["education", "academic background"];
const CERTIFICATION_HEADINGS: &[&str] = &["certifications", "licenses"];

/// Headings already covered by a dedicated rule above.
const HANDLED_HEADINGS: &[&str] = &[
    "professional summary",
    "summary",
    "objective",
    "profile",
    "experience",
    "work experience",
    "employment history",
    "skills",
    "technical skills",
    "education",
    "academic background",
    "projects",
    "certifications",
    "licenses",
];

const STRONG_EXPERIENCE_QUANTIFIABLES: usize = 3;
const STRONG_TECHNICAL_SKILLS: usize = 4;
const STRONG_SOFT_SKILLS: usize = 3;
const SKILLS_LISTED_INLINE: usize = 3;

/// Fixed placeholder used for every canonical section of an empty résumé.
pub const UNABLE_TO_ANALYZE: &str = "Unable to analyze - no content provided";

pub fn generate_section_feedback(
    signals: &ExtractedSignals,
    ledger: &mut ScoreLedger,
) -> SectionFeedback {
    let mut feedback = SectionFeedback::new();

    feedback.insert(PROFESSIONAL_SUMMARY, summary_feedback(signals, ledger));
    feedback.insert(WORK_EXPERIENCE, experience_feedback(signals, ledger));
    feedback.insert(SKILLS, skills_feedback(signals, ledger));
    feedback.insert(EDUCATION, education_feedback(signals, ledger));

    if signals.has_section("projects") {
        feedback.insert(
            "Projects",
            "Including a projects section demonstrates initiative and practical application of your skills. Make sure each project highlights specific technologies used and measurable outcomes.",
        );
        ledger.apply("section_projects", 5);
    }

    if signals.has_any_section(CERTIFICATION_HEADINGS) {
        feedback.insert(
            "Certifications",
            "Your certifications add credibility to your qualifications. Keep these updated and ensure they're relevant to your target roles.",
        );
        ledger.apply("section_certifications", 4);
    }

    for heading in &signals.sections {
        if HANDLED_HEADINGS.contains(heading) {
            continue;
        }
        let title = title_case(heading);
        if !feedback.contains_ignore_case(&title) {
            let message = format!(
                "This {title} section adds dimension to your profile. Consider connecting these elements more explicitly to your professional value proposition."
            );
            feedback.insert(title, message);
        }
    }

    ensure_canonical_sections(&mut feedback, ledger);
    feedback
}

/// Feedback map for an empty résumé: every canonical section gets the placeholder.
pub fn placeholder_section_feedback() -> SectionFeedback {
    let mut feedback = SectionFeedback::new();
    for section in CANONICAL_SECTIONS {
        feedback.insert(section, UNABLE_TO_ANALYZE);
    }
    feedback
}

fn summary_feedback(signals: &ExtractedSignals, ledger: &mut ScoreLedger) -> String {
    if !signals.has_any_section(SUMMARY_HEADINGS) {
        ledger.apply("section_summary", -5);
        return missing_message(PROFESSIONAL_SUMMARY).to_string();
    }
    if signals.has_value_language {
        ledger.apply("section_summary", 5);
        "Your summary effectively communicates your value proposition and key expertise. Consider adding 1-2 more specific achievements to make it even stronger.".to_string()
    } else {
        ledger.apply("section_summary", -3);
        "Your summary would benefit from a clearer articulation of your unique value proposition and specific expertise. Currently, it's somewhat generic and doesn't immediately grab attention.".to_string()
    }
}

fn experience_feedback(signals: &ExtractedSignals, ledger: &mut ScoreLedger) -> String {
    if !signals.has_any_section(EXPERIENCE_HEADINGS) {
        ledger.apply("section_experience", -10);
        return missing_message(WORK_EXPERIENCE).to_string();
    }
    let count = signals.quantifiable_count;
    if count > STRONG_EXPERIENCE_QUANTIFIABLES {
        ledger.apply("section_experience", 8);
        format!(
            "Your experience section effectively uses quantifiable achievements ({count} instances noted) which demonstrates your impact. Continue using the STAR method to showcase results."
        )
    } else {
        ledger.apply("section_experience", -5);
        "While your experience section outlines your responsibilities, it would be significantly stronger with more measurable outcomes and specific accomplishments. Try adding metrics like percentages, dollar amounts, or other quantifiable results.".to_string()
    }
}

fn skills_feedback(signals: &ExtractedSignals, ledger: &mut ScoreLedger) -> String {
    let technical = &signals.technical_skills;
    let soft = &signals.soft_skills;

    if technical.is_empty() && soft.is_empty() {
        ledger.apply("section_skills", -8);
        return missing_message(SKILLS).to_string();
    }

    let technical_clause = if technical.len() >= STRONG_TECHNICAL_SKILLS {
        ledger.apply("skills_technical", 7);
        format!(
            "Good range of technical skills including {}, and {} more.",
            technical[..SKILLS_LISTED_INLINE].join(", "),
            technical.len() - SKILLS_LISTED_INLINE
        )
    } else if !technical.is_empty() {
        ledger.apply("skills_technical", 3);
        format!(
            "You mention some technical skills like {}, but consider expanding this list.",
            technical.join(", ")
        )
    } else {
        ledger.apply("skills_technical", -5);
        "Your resume could benefit from more specific technical skills relevant to your field."
            .to_string()
    };

    let soft_clause = if soft.len() >= STRONG_SOFT_SKILLS {
        ledger.apply("skills_soft", 5);
        format!(
            "You effectively highlight soft skills such as {}.",
            soft[..SKILLS_LISTED_INLINE].join(", ")
        )
    } else if !soft.is_empty() {
        ledger.apply("skills_soft", 2);
        format!(
            "You mention {} as soft skills, but should include more to show well-roundedness.",
            soft.join(", ")
        )
    } else {
        ledger.apply("skills_soft", -3);
        "Consider adding relevant soft skills to complement your technical abilities.".to_string()
    };

    format!("{technical_clause} {soft_clause}")
}

fn education_feedback(signals: &ExtractedSignals, ledger: &mut ScoreLedger) -> String {
    if !signals.has_any_section(EDUCATION_HEADINGS) {
        ledger.apply("section_education", -5);
        return missing_message(EDUCATION).to_string();
    }
    if signals.has_degree {
        ledger.apply("section_education", 4);
        "Your education section is clearly presented with necessary details. Consider adding any relevant coursework or academic achievements that relate to your target role.".to_string()
    } else {
        ledger.apply("section_education", 0);
        "Your education section could be enhanced with more details about your degrees, relevant coursework, or academic achievements.".to_string()
    }
}

fn missing_message(section: &str) -> &'static str {
    match section {
        PROFESSIONAL_SUMMARY => "Your resume appears to be missing a clear professional summary or objective section. Adding a concise 3-4 line summary would help recruiters quickly understand your value proposition.",
        WORK_EXPERIENCE => "The work experience section appears to be missing or not clearly defined. This is a critical section that should highlight your relevant roles, responsibilities, and especially your achievements.",
        SKILLS => "Your resume lacks a clear skills section or doesn't highlight specific competencies. Adding a well-organized skills section would help recruiters quickly identify your capabilities.",
        _ => "Your resume appears to be missing an education section. Even with extensive experience, including your educational background provides a complete picture.",
    }
}

fn missing_penalty(section: &str) -> i32 {
    match section {
        PROFESSIONAL_SUMMARY | EDUCATION => -5,
        WORK_EXPERIENCE => -10,
        _ => -8,
    }
}

/// Guard: every canonical key must be present, whatever the rules above did.
fn ensure_canonical_sections(feedback: &mut SectionFeedback, ledger: &mut ScoreLedger) {
    for section in CANONICAL_SECTIONS {
        if !feedback.contains(section) {
            feedback.insert(section, missing_message(section));
            ledger.apply("section_fallback", missing_penalty(section));
        }
    }
}

fn title_case(heading: &str) -> String {
    heading
        .split(' ')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
