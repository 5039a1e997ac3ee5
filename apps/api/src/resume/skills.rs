//! Skill detection: pure-Rust, deterministic, no LLM call.
//!
//! Algorithm:
//! 1. For each skill in `COMMON_SKILLS` mentioned in the job description,
//!    report it with `found` = mentioned in the résumé.
//! 2. Append the model's missing keywords that are not already listed,
//!    with `found = false`.
//!
//! Mentions are case-insensitive and bounded by non-alphanumeric characters,
//! so "C++" and "Node.js" match while "AI" does not match inside "maintain".

use std::sync::OnceLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

pub const COMMON_SKILLS: [&str; 29] = [
    "React",
    "JavaScript",
    "TypeScript",
    "Node.js",
    "Python",
    "Java",
    "C#",
    "C++",
    "AWS",
    "Azure",
    "GCP",
    "Docker",
    "Kubernetes",
    "CI/CD",
    "Git",
    "SQL",
    "NoSQL",
    "MongoDB",
    "PostgreSQL",
    "REST API",
    "GraphQL",
    "Agile",
    "Scrum",
    "DevOps",
    "Machine Learning",
    "AI",
    "Data Science",
    "Big Data",
    "Cloud Computing",
];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillMatch {
    pub name: String,
    pub found: bool,
}

fn skill_patterns() -> &'static [(&'static str, Regex)] {
    static PATTERNS: OnceLock<Vec<(&'static str, Regex)>> = OnceLock::new();
    PATTERNS.get_or_init(|| {
        COMMON_SKILLS
            .iter()
            .filter_map(|skill| mention_pattern(skill).map(|re| (*skill, re)))
            .collect()
    })
}

fn mention_pattern(term: &str) -> Option<Regex> {
    Regex::new(&format!(
        r"(?i)(?:^|[^A-Za-z0-9]){}(?:$|[^A-Za-z0-9])",
        regex::escape(term)
    ))
    .ok()
}

pub fn detect_skills(resume: &str, job_description: &str, keywords_missing: &[String]) -> Vec<SkillMatch> {
    let mut skills: Vec<SkillMatch> = skill_patterns()
        .iter()
        .filter(|(_, re)| re.is_match(job_description))
        .map(|(skill, re)| SkillMatch {
            name: skill.to_string(),
            found: re.is_match(resume),
        })
        .collect();

    for keyword in keywords_missing {
        let keyword = keyword.trim();
        if keyword.is_empty() {
            continue;
        }
        let already_listed = skills
            .iter()
            .any(|s| s.name.eq_ignore_ascii_case(keyword));
        if !already_listed {
            skills.push(SkillMatch {
                name: keyword.to_string(),
                found: false,
            });
        }
    }

    skills
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mentions(text: &str, term: &str) -> bool {
        mention_pattern(term).is_some_and(|re| re.is_match(text))
    }

    fn names(skills: &[SkillMatch]) -> Vec<&str> {
        skills.iter().map(|s| s.name.as_str()).collect()
    }

    #[test]
    fn test_all_common_skills_compile() {
        assert_eq!(skill_patterns().len(), COMMON_SKILLS.len());
    }

    #[test]
    fn test_only_jd_skills_are_reported() {
        let skills = detect_skills("Python and AWS", "Looking for Python developers", &[]);
        assert_eq!(
            skills,
            vec![SkillMatch {
                name: "Python".to_string(),
                found: true
            }]
        );
    }

    #[test]
    fn test_symbol_skills_match_on_token_boundaries() {
        assert!(mentions("Strong C++ and C# background", "C++"));
        assert!(mentions("Strong C++ and C# background", "C#"));
        assert!(mentions("APIs in Node.js, CI/CD pipelines", "Node.js"));
        assert!(mentions("APIs in Node.js, CI/CD pipelines", "CI/CD"));
    }

    #[test]
    fn test_short_skills_do_not_match_inside_words() {
        assert!(!mentions("maintain legacy systems", "AI"));
        assert!(!mentions("PostgreSQL tuning", "SQL"));
        assert!(!mentions("JavaScript frontends", "Java"));
        assert!(mentions("Applied AI team", "AI"));
    }

    #[test]
    fn test_mentions_are_case_insensitive() {
        assert!(mentions("experience with KUBERNETES clusters", "Kubernetes"));
    }

    #[test]
    fn test_missing_keywords_appended_once() {
        let skills = detect_skills(
            "Go developer",
            "Docker required",
            &["docker".to_string(), "Terraform".to_string(), " ".to_string()],
        );
        assert_eq!(names(&skills), vec!["Docker", "Terraform"]);
        assert!(!skills[0].found);
        assert!(!skills[1].found);
    }

    #[test]
    fn test_no_jd_skills_and_no_keywords_is_empty() {
        assert!(detect_skills("anything", "Bookkeeping role", &[]).is_empty());
    }
}
