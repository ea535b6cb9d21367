//! Core Data Model
//!
//! All structures produced by the analysis engine. A `ResumeProfile` is
//! created exactly once per uploaded document and never mutated; every
//! other type here (quality report, gaps, matches, roadmap) is a derived
//! view computed as a pure function of the profile and the catalogs.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ============================================================
// SKILLS
// ============================================================

/// Proficiency level inferred from textual context around a skill mention
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SkillLevel {
    Beginner,
    Intermediate,
    Advanced,
    Expert,
}

impl SkillLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            SkillLevel::Beginner => "beginner",
            SkillLevel::Intermediate => "intermediate",
            SkillLevel::Advanced => "advanced",
            SkillLevel::Expert => "expert",
        }
    }
}

/// A skill recognized in the resume text
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Skill {
    /// Canonical display form (title-cased dictionary term)
    pub name: String,
    pub level: SkillLevel,
    /// Dictionary category the term was matched under
    pub category: String,
    /// Relevance weight in 0.0..=1.0, derived from the inferred level
    pub relevance_score: f64,
}

// ============================================================
// EXPERIENCE & EDUCATION
// ============================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExperienceEntry {
    pub title: String,
    pub company: String,
    pub duration: String,
    pub description: String,
}

impl ExperienceEntry {
    /// Fixed entry emitted when an experience section could not be
    /// structurally parsed, so downstream scoring never sees an empty list.
    pub fn placeholder() -> Self {
        Self {
            title: "Professional Experience Detected".to_string(),
            company: "See Resume".to_string(),
            duration: String::new(),
            description: "Experience details extracted from resume".to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EducationEntry {
    pub degree: String,
    pub institution: String,
    pub year: String,
    pub field: String,
}

// ============================================================
// RESUME PROFILE
// ============================================================

/// Structured profile extracted from one uploaded document.
///
/// Identity fields are empty strings when nothing was found; absence is
/// never an error. `raw_text` is retained truncated for storage efficiency.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResumeProfile {
    pub id: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub summary: String,
    pub skills: Vec<Skill>,
    pub experience: Vec<ExperienceEntry>,
    pub education: Vec<EducationEntry>,
    pub raw_text: String,
    pub uploaded_at: DateTime<Utc>,
}

impl ResumeProfile {
    pub fn new() -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name: String::new(),
            email: String::new(),
            phone: String::new(),
            summary: String::new(),
            skills: Vec::new(),
            experience: Vec::new(),
            education: Vec::new(),
            raw_text: String::new(),
            uploaded_at: Utc::now(),
        }
    }
}

impl Default for ResumeProfile {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================
// QUALITY REPORT
// ============================================================

/// Multi-dimensional resume quality assessment, all scores in 0.0..=100.0
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QualityReport {
    pub overall_score: f64,
    pub structure_score: f64,
    pub content_score: f64,
    pub keyword_score: f64,
    pub ats_compatibility: f64,
    pub strengths: Vec<String>,
    pub improvements: Vec<String>,
    pub missing_sections: Vec<String>,
}

// ============================================================
// GAPS & MATCHES
// ============================================================

/// Gap priority. High is reserved for an archetype's core skills.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    High,
    Medium,
}

impl Priority {
    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::High => "high",
            Priority::Medium => "medium",
        }
    }
}

/// A required skill the profile lacks or holds at insufficient proficiency
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkillGap {
    pub skill: String,
    pub current_level: String,
    pub required_level: String,
    pub priority: Priority,
    pub category: String,
}

/// A ranked fit between a profile and a career archetype
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CareerMatch {
    pub title: String,
    /// 0.0..=98.0, clamped below certainty to avoid overclaiming fit
    pub match_score: f64,
    pub description: String,
    pub salary_range: String,
    pub growth_outlook: String,
    pub required_skills: Vec<String>,
    pub current_match_skills: Vec<String>,
    /// Highest-priority missing skills, capped at 5
    pub gap_skills: Vec<String>,
}

// ============================================================
// LEARNING ROADMAP
// ============================================================

/// A curated or synthesized learning recommendation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LearningResource {
    pub title: String,
    pub provider: String,
    pub url: String,
    pub duration: String,
    pub skill_target: String,
    pub priority: Priority,
    /// Kind: "course", "tutorial", "documentation", "book",
    /// "certification", "search"
    pub resource_type: String,
}

/// One fixed two-month time box of the roadmap
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoadmapPhase {
    pub phase: u32,
    pub title: String,
    pub duration: String,
    pub description: String,
    pub skills: Vec<String>,
    pub milestones: Vec<String>,
}

/// Phased learning plan toward a target archetype
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LearningRoadmap {
    pub career_target: String,
    pub timeline: String,
    pub phases: Vec<RoadmapPhase>,
    /// Capped at 12, in gap order (deliberately not re-sorted by priority)
    pub resources: Vec<LearningResource>,
}

// ============================================================
// HELPERS
// ============================================================

/// Title-case a dictionary term for display ("machine learning" ->
/// "Machine Learning", "node.js" -> "Node.Js"). Lowering the result
/// recovers the dictionary key, which gap/match lookups rely on.
pub fn title_case(term: &str) -> String {
    let mut out = String::with_capacity(term.len());
    let mut boundary = true;
    for c in term.chars() {
        if c.is_alphabetic() {
            if boundary {
                out.extend(c.to_uppercase());
            } else {
                out.extend(c.to_lowercase());
            }
            boundary = false;
        } else {
            out.push(c);
            boundary = true;
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_title_case_round_trips_to_key() {
        for term in ["python", "machine learning", "node.js", "ci/cd", "c++"] {
            assert_eq!(title_case(term).to_lowercase(), term);
        }
    }

    #[test]
    fn test_title_case_display_forms() {
        assert_eq!(title_case("machine learning"), "Machine Learning");
        assert_eq!(title_case("rest api"), "Rest Api");
        assert_eq!(title_case("aws"), "Aws");
    }

    #[test]
    fn test_placeholder_experience_is_fixed() {
        let entry = ExperienceEntry::placeholder();
        assert_eq!(entry.title, "Professional Experience Detected");
        assert_eq!(entry.company, "See Resume");
    }

    #[test]
    fn test_profile_ids_are_unique() {
        assert_ne!(ResumeProfile::new().id, ResumeProfile::new().id);
    }

    #[test]
    fn test_priority_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Priority::High).unwrap(), "\"high\"");
        assert_eq!(
            serde_json::to_string(&SkillLevel::Intermediate).unwrap(),
            "\"intermediate\""
        );
    }
}
