//! Prompts for the external AI reviewer.

use crate::llm_client::prompts::json_system;

const REVIEWER_ROLE: &str = "You are an expert resume reviewer. \
    Tailor all feedback to the actual content of the resume. Never use generic feedback.";

const FEEDBACK_FORMAT: &str = r#"Analyze the resume below and answer in this JSON format:
{
  "overallImpression": "A concise, content-specific summary of strengths and weaknesses (3-5 sentences)",
  "sectionFeedback": {
    "Professional Summary": "Feedback specific to this section, or say if missing",
    "Work Experience": "Feedback specific to this section, or say if missing",
    "Skills": "Feedback specific to this section, or say if missing",
    "Education": "Feedback specific to this section, or say if missing"
  },
  "suggestions": ["5 actionable, resume-specific improvement suggestions"],
  "score": 0
}

Rules:
- "score" is an integer from 0 to 100 reflecting resume quality.
- Add further keys to "sectionFeedback" for any other section you find.
- If a section is missing, say so and suggest what to add."#;

const JOB_MATCH_FORMAT: &str = r#"Compare the resume with the job description and answer in this JSON format:
{
  "overallMatch": 0,
  "keywordMatches": [{"keyword": "a key requirement from the job description", "found": true}],
  "missingKeywords": ["requirements the resume does not cover"],
  "suggestedImprovements": ["5 specific changes that would improve the match"],
  "relevanceScore": 0
}

Rules:
- "overallMatch" and "relevanceScore" are integers from 0 to 100.
- List at most 10 keywords, each exactly once."#;

pub fn feedback_system() -> String {
    json_system(REVIEWER_ROLE)
}

pub fn job_match_system() -> String {
    json_system(&format!(
        "{REVIEWER_ROLE} You also assess how well a resume fits a specific job."
    ))
}

pub fn feedback_prompt(resume_text: &str) -> String {
    format!("{FEEDBACK_FORMAT}\n\nResume:\n{resume_text}\n")
}

pub fn job_match_prompt(resume_text: &str, job_description: &str) -> String {
    format!("{JOB_MATCH_FORMAT}\n\nResume:\n{resume_text}\n\nJob Description:\n{job_description}\n")
}
