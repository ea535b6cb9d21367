//! Document Extractor
//!
//! Turns already-decoded resume text into a structured `ResumeProfile`.
//! Extraction is a deterministic pattern/dictionary match with no failure
//! mode: any input string, including empty or binary garbage decoded as
//! text, yields a profile with empty fields where nothing was found.
//!
//! The caller owns file-format decoding; a document that could not be
//! decoded arrives here as an empty string.

use crate::engine::catalog::SkillDictionary;
use crate::engine::types::{
    title_case, EducationEntry, ExperienceEntry, ResumeProfile, Skill, SkillLevel,
};
use once_cell::sync::Lazy;
use regex::Regex;

/// Retained raw text is truncated to this many characters
const MAX_RAW_TEXT: usize = 5000;
/// The summary excerpt is the first slice of the same text
const SUMMARY_LEN: usize = 500;
/// Context window (chars each side) used to classify skill proficiency
const CONTEXT_WINDOW: usize = 100;

/// Context markers that upgrade a skill mention to advanced
const STRONG_MARKERS: [&str; 9] = [
    "expert", "advanced", "extensive", "deep", "senior", "lead", "proficient",
    "strong", "experienced",
];
/// Context markers that downgrade a skill mention to beginner
const WEAK_MARKERS: [&str; 5] = ["basic", "fundamental", "beginner", "learning", "familiar"];

static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}").unwrap());

static PHONE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\+?\(?[0-9]{1,4}\)?[-\s./0-9]{7,15}").unwrap());

// Lines carrying any of these are contact/boilerplate lines, never a name
static NOT_A_NAME_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"@|http|www|phone|email|address|resume|cv|curriculum").unwrap());

static EXPERIENCE_SECTION_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?is)(?:experience|work history|employment|professional background)(.*?)(?:education|skills|projects|certifications|$)",
    )
    .unwrap()
});

// Capitalized multi-word title ending in a role noun, then an organization
// fragment running to a year or line break
static ROLE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"([A-Z][a-zA-Z\s]+(?:Engineer|Developer|Manager|Analyst|Designer|Lead|Director|Architect|Consultant|Specialist|Intern|Associate))\s*(?:at|@|-|–|,|\|)?\s*([A-Za-z\s&.]+?)(?:\d{4}|\n)",
    )
    .unwrap()
});

static EDUCATION_SECTION_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?is)(?:education|academic|qualification)(.*?)(?:experience|skills|projects|$)")
        .unwrap()
});

static DEGREE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)((?:Bachelor|Master|PhD|B\.?S\.?|M\.?S\.?|B\.?Tech|M\.?Tech|B\.?E\.?|M\.?E\.?|MBA|B\.?A\.?|M\.?A\.?|Associate|Diploma)[^,\n]*)",
    )
    .unwrap()
});

/// Heuristic resume-text extractor over an injected skill dictionary
#[derive(Debug, Clone)]
pub struct ResumeExtractor {
    dictionary: SkillDictionary,
}

impl ResumeExtractor {
    pub fn new(dictionary: SkillDictionary) -> Self {
        Self { dictionary }
    }

    pub fn with_builtin() -> Self {
        Self::new(SkillDictionary::builtin())
    }

    /// Extract a structured profile from raw text. Total over any input.
    pub fn extract(&self, raw_text: &str) -> ResumeProfile {
        let mut profile = ResumeProfile::new();
        profile.name = extract_name(raw_text);
        profile.email = extract_email(raw_text);
        profile.phone = extract_phone(raw_text);
        profile.skills = self.extract_skills(raw_text);
        profile.experience = extract_experience(raw_text);
        profile.education = extract_education(raw_text);
        profile.raw_text = truncate_chars(raw_text, MAX_RAW_TEXT);
        profile.summary = truncate_chars(raw_text, SUMMARY_LEN);
        profile
    }

    /// Case-insensitive substring search for every dictionary term.
    /// Duplicates across categories are preserved on purpose: a term tagged
    /// under two categories yields two entries and downstream content
    /// scoring counts raw entries.
    fn extract_skills(&self, raw_text: &str) -> Vec<Skill> {
        let text_lower = raw_text.to_lowercase();
        let mut skills = Vec::new();
        for category in &self.dictionary.categories {
            for term in &category.terms {
                let Some(pos) = text_lower.find(term.as_str()) else {
                    continue;
                };
                let level = classify_level(&text_lower, pos);
                let bonus = match level {
                    SkillLevel::Advanced | SkillLevel::Expert => 0.5,
                    _ => 0.2,
                };
                skills.push(Skill {
                    name: title_case(term),
                    level,
                    category: category.name.clone(),
                    relevance_score: round2(0.5 + bonus),
                });
            }
        }
        skills
    }
}

/// Classify proficiency from the ±100-char context around the first mention
fn classify_level(text_lower: &str, pos: usize) -> SkillLevel {
    let context = context_window(text_lower, pos, CONTEXT_WINDOW);
    if STRONG_MARKERS.iter().any(|m| context.contains(m)) {
        SkillLevel::Advanced
    } else if WEAK_MARKERS.iter().any(|m| context.contains(m)) {
        SkillLevel::Beginner
    } else {
        SkillLevel::Intermediate
    }
}

/// Byte window around `pos`, snapped outward/inward to char boundaries
fn context_window(text: &str, pos: usize, radius: usize) -> &str {
    let mut start = pos.saturating_sub(radius);
    while start > 0 && !text.is_char_boundary(start) {
        start -= 1;
    }
    let mut end = (pos + radius).min(text.len());
    while end < text.len() && !text.is_char_boundary(end) {
        end += 1;
    }
    &text[start..end]
}

/// The name is usually one of the first lines: short, few tokens and free
/// of contact markers. No qualifying line yields an empty name.
fn extract_name(text: &str) -> String {
    for line in text.trim().lines().take(5) {
        let line = line.trim();
        if line.is_empty() || NOT_A_NAME_RE.is_match(&line.to_lowercase()) {
            continue;
        }
        if line.split_whitespace().count() <= 5 && line.chars().count() < 50 {
            return line.to_string();
        }
    }
    String::new()
}

fn extract_email(text: &str) -> String {
    EMAIL_RE
        .find(text)
        .map(|m| m.as_str().to_string())
        .unwrap_or_default()
}

fn extract_phone(text: &str) -> String {
    PHONE_RE
        .find(text)
        .map(|m| m.as_str().trim().to_string())
        .unwrap_or_default()
}

/// Locate the experience section and pull out up to 5 role/organization
/// pairs. When nothing parses structurally, exactly one placeholder entry
/// is emitted instead of an empty list.
fn extract_experience(text: &str) -> Vec<ExperienceEntry> {
    let mut entries = Vec::new();
    if let Some(section) = EXPERIENCE_SECTION_RE
        .captures(text)
        .and_then(|c| c.get(1))
    {
        for cap in ROLE_RE.captures_iter(section.as_str()).take(5) {
            let (Some(title), Some(company)) = (cap.get(1), cap.get(2)) else {
                continue;
            };
            entries.push(ExperienceEntry {
                title: title.as_str().trim().to_string(),
                company: company.as_str().trim().to_string(),
                duration: String::new(),
                description: String::new(),
            });
        }
    }
    if entries.is_empty() {
        entries.push(ExperienceEntry::placeholder());
    }
    entries
}

/// Locate the education section and match up to 3 degree phrases.
/// Unlike experience there is no placeholder: an empty list is valid.
fn extract_education(text: &str) -> Vec<EducationEntry> {
    let mut entries = Vec::new();
    if let Some(section) = EDUCATION_SECTION_RE.captures(text).and_then(|c| c.get(1)) {
        for cap in DEGREE_RE.captures_iter(section.as_str()).take(3) {
            let Some(degree) = cap.get(1) else { continue };
            entries.push(EducationEntry {
                degree: degree.as_str().trim().to_string(),
                institution: String::new(),
                year: String::new(),
                field: String::new(),
            });
        }
    }
    entries
}

fn truncate_chars(text: &str, max: usize) -> String {
    text.chars().take(max).collect()
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::catalog::SkillCategory;

    const SAMPLE: &str = "Jane Doe\njane@x.com\nSkills: Python, React, Docker\nExperience\nSoftware Engineer at Acme Corp 2020\nEducation\nBachelor of Science in Computer Science";

    fn extractor() -> ResumeExtractor {
        ResumeExtractor::with_builtin()
    }

    #[test]
    fn test_extract_is_total_over_noise() {
        let ext = extractor();
        for input in ["", "\n\n\n", "%PDF-1.4 \u{0}\u{1}\u{fffd} garbage", "ÿØÿà\u{fffd}"] {
            let profile = ext.extract(input);
            assert_eq!(profile.email, "");
            // Placeholder invariant keeps experience non-empty even here
            assert_eq!(profile.experience.len(), 1);
        }
        let empty = ext.extract("");
        assert_eq!(empty.name, "");
        assert!(empty.skills.is_empty());
        assert!(empty.education.is_empty());
    }

    #[test]
    fn test_extract_full_sample() {
        let profile = extractor().extract(SAMPLE);
        assert_eq!(profile.name, "Jane Doe");
        assert_eq!(profile.email, "jane@x.com");

        let names: Vec<&str> = profile.skills.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["Python", "React", "Docker"]);
        assert!(profile
            .skills
            .iter()
            .all(|s| s.level == SkillLevel::Intermediate));

        assert_eq!(profile.experience.len(), 1);
        assert_eq!(profile.experience[0].title, "Software Engineer");
        assert_eq!(profile.experience[0].company, "Acme Corp");

        assert_eq!(profile.education.len(), 1);
        assert!(profile.education[0].degree.contains("Bachelor of Science"));
    }

    #[test]
    fn test_name_skips_contact_lines() {
        let text = "resume\njohn@corp.com\nJohn Smith\nSenior things";
        assert_eq!(extract_name(text), "John Smith");
        let no_name = "jane@x.com\nhttp://example.com\nthis line has far too many tokens to ever qualify as a person name here";
        assert_eq!(extract_name(no_name), "");
    }

    #[test]
    fn test_phone_extraction() {
        assert_eq!(extract_phone("call (415) 555-0100 anytime"), "(415) 555-0100");
        assert_eq!(extract_phone("mobile: +41-79-555-01-23"), "+41-79-555-01-23");
        assert_eq!(extract_phone("no digits here"), "");
    }

    #[test]
    fn test_skill_level_from_context() {
        let ext = extractor();
        let advanced = ext.extract("Senior engineer with deep expertise in python");
        let python = advanced.skills.iter().find(|s| s.name == "Python").unwrap();
        assert_eq!(python.level, SkillLevel::Advanced);
        assert_eq!(python.relevance_score, 1.0);

        let beginner = ext.extract("Currently learning rust on weekends");
        let rust = beginner.skills.iter().find(|s| s.name == "Rust").unwrap();
        assert_eq!(rust.level, SkillLevel::Beginner);
        assert_eq!(rust.relevance_score, 0.7);
    }

    #[test]
    fn test_cross_category_term_yields_two_entries() {
        let dict = SkillDictionary::new(vec![
            SkillCategory {
                name: "programming".to_string(),
                terms: vec!["sql".to_string()],
            },
            SkillCategory {
                name: "databases".to_string(),
                terms: vec!["sql".to_string()],
            },
        ]);
        let profile = ResumeExtractor::new(dict).extract("I know SQL well");
        assert_eq!(profile.skills.len(), 2);
        assert_eq!(profile.skills[0].category, "programming");
        assert_eq!(profile.skills[1].category, "databases");
    }

    #[test]
    fn test_experience_placeholder_when_unparsed() {
        // Section heading present but no role pattern inside it
        let text = "Experience\nvarious odd jobs without titles\nEducation\nBS";
        let entries = extract_experience(text);
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].title, "Professional Experience Detected");
    }

    #[test]
    fn test_experience_caps_at_five() {
        let mut text = String::from("Experience\n");
        for name in ["Alpha", "Beta", "Gamma", "Delta", "Epsilon", "Zeta", "Eta", "Theta"] {
            text.push_str(&format!("Software Engineer at {} Corp 2020\n", name));
        }
        let entries = extract_experience(&text);
        assert_eq!(entries.len(), 5);
    }

    #[test]
    fn test_education_empty_without_section() {
        assert!(extract_education("just some text with no headings").is_empty());
    }

    #[test]
    fn test_raw_text_and_summary_truncation() {
        let long = "x".repeat(9000);
        let profile = extractor().extract(&long);
        assert_eq!(profile.raw_text.chars().count(), 5000);
        assert_eq!(profile.summary.chars().count(), 500);
    }
}
