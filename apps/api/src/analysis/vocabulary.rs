//! Fixed vocabularies shared by every analysis. Read-only; order is significant
//! wherever a result preserves "vocabulary order".

/// Section headings recognised in free text, in canonical order.
pub const SECTION_NAMES: &[&str] = &[
    "professional summary",
    "summary",
    "objective",
    "profile",
    "experience",
    "work experience",
    "employment history",
    "work history",
    "skills",
    "technical skills",
    "core competencies",
    "qualifications",
    "education",
    "academic background",
    "training",
    "projects",
    "portfolio",
    "achievements",
    "certifications",
    "licenses",
    "publications",
    "volunteering",
    "community service",
    "activities",
    "languages",
    "interests",
    "references",
];

pub const ACTION_VERBS: &[&str] = &[
    "led",
    "developed",
    "managed",
    "created",
    "implemented",
    "designed",
    "achieved",
    "improved",
    "increased",
    "decreased",
    "reduced",
    "saved",
    "delivered",
    "launched",
    "built",
    "optimized",
    "transformed",
];

/// Subset whose total absence triggers the "use strong action verbs" suggestion.
pub const CORE_ACTION_VERBS: &[&str] = &[
    "led",
    "developed",
    "managed",
    "created",
    "implemented",
    "designed",
    "achieved",
    "improved",
];

pub const TECHNICAL_SKILLS: &[&str] = &[
    "javascript",
    "typescript",
    "react",
    "angular",
    "vue",
    "node",
    "express",
    "python",
    "django",
    "flask",
    "java",
    "spring",
    "c#",
    ".net",
    "php",
    "laravel",
    "html",
    "css",
    "sass",
    "less",
    "tailwind",
    "bootstrap",
    "material ui",
    "jquery",
    "sql",
    "postgresql",
    "mysql",
    "mongodb",
    "firebase",
    "dynamodb",
    "redis",
    "aws",
    "azure",
    "gcp",
    "docker",
    "kubernetes",
    "terraform",
    "jenkins",
    "git",
    "rest",
    "graphql",
    "redux",
    "webpack",
    "babel",
    "jest",
    "cypress",
    "selenium",
    "api",
    "agile",
    "scrum",
];

/// Hyphenated entries also match with whitespace in place of the hyphen.
pub const SOFT_SKILLS: &[&str] = &[
    "leadership",
    "communication",
    "teamwork",
    "collaboration",
    "problem-solving",
    "critical thinking",
    "adaptability",
    "time management",
    "organization",
    "creativity",
    "attention to detail",
    "mentoring",
    "decision-making",
    "conflict resolution",
    "negotiation",
    "presentation",
    "project management",
];

pub const DOMAIN_SKILLS: &[&str] = &[
    "healthcare",
    "finance",
    "banking",
    "insurance",
    "e-commerce",
    "retail",
    "manufacturing",
    "logistics",
    "government",
    "media",
    "entertainment",
    "telecommunications",
    "automotive",
    "aerospace",
    "marketing",
    "sales",
    "human resources",
    "legal",
    "consulting",
    "research",
    "data science",
    "machine learning",
    "ai",
    "blockchain",
    "iot",
    "mobile",
    "security",
    "devops",
];

/// Job-match keyword vocabulary, grouped tech / business / design / general.
pub const JOB_KEYWORDS: &[&str] = &[
    // Tech / development
    "React",
    "TypeScript",
    "JavaScript",
    "Node.js",
    "API",
    "Python",
    "Java",
    "C#",
    "Ruby",
    "Git",
    "Agile",
    "Scrum",
    "Testing",
    "Frontend",
    "Backend",
    "Full Stack",
    "CI/CD",
    "AWS",
    "Azure",
    "Cloud",
    "Docker",
    "Kubernetes",
    "Database",
    "SQL",
    "NoSQL",
    // Business / marketing
    "Strategy",
    "Analytics",
    "Management",
    "Leadership",
    "Sales",
    "Marketing",
    "SEO",
    "Social Media",
    "Content",
    "Campaign",
    "Budget",
    "ROI",
    "KPI",
    "CRM",
    // Design / UX
    "UX",
    "UI",
    "User Experience",
    "User Interface",
    "Figma",
    "Sketch",
    "Adobe",
    "Photoshop",
    "Illustrator",
    "Wireframes",
    "Prototyping",
    "Responsive Design",
    // General professional
    "Communication",
    "Teamwork",
    "Project Management",
    "Problem Solving",
    "Critical Thinking",
    "Customer Service",
    "Time Management",
    "Stakeholder",
    "Presentation",
    "Negotiation",
];

/// Keywords an ATS parser looks for when splitting a résumé into fields.
pub const ATS_KEYWORDS: &[&str] = &[
    "experience",
    "education",
    "skills",
    "projects",
    "contact",
    "email",
    "phone",
    "address",
    "summary",
    "objective",
    "awards",
    "certifications",
];

/// Job titles scanned, in order, for the most recent role.
pub const ROLE_TITLES: &[&str] = &[
    "Software Engineer",
    "Front-end Developer",
    "Back-end Developer",
    "Full Stack Developer",
    "DevOps Engineer",
    "Data Scientist",
    "Product Manager",
    "Project Manager",
    "UI/UX Designer",
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn assert_unique(list: &[&str]) {
        let set: HashSet<String> = list.iter().map(|s| s.to_lowercase()).collect();
        assert_eq!(set.len(), list.len(), "duplicate entry in vocabulary");
    }

    #[test]
    fn test_vocabularies_have_no_duplicates() {
        assert_unique(SECTION_NAMES);
        assert_unique(ACTION_VERBS);
        assert_unique(TECHNICAL_SKILLS);
        assert_unique(SOFT_SKILLS);
        assert_unique(DOMAIN_SKILLS);
        assert_unique(JOB_KEYWORDS);
        assert_unique(ATS_KEYWORDS);
    }

    #[test]
    fn test_fixed_vocabulary_sizes() {
        assert_eq!(SECTION_NAMES.len(), 27);
        assert_eq!(ACTION_VERBS.len(), 17);
        assert_eq!(SOFT_SKILLS.len(), 17);
        assert_eq!(DOMAIN_SKILLS.len(), 28);
        assert_eq!(ATS_KEYWORDS.len(), 12);
        assert!(JOB_KEYWORDS.len() >= 45);
    }

    #[test]
    fn test_core_verbs_are_action_verbs() {
        for verb in CORE_ACTION_VERBS {
            assert!(ACTION_VERBS.contains(verb));
        }
    }
}
