//! Gap & Match Engine
//!
//! Resolves a target career archetype for a profile, computes the skill
//! gap list against it, and ranks the whole catalog by fit. All operations
//! are pure functions of (profile, catalog, optional target string).

use crate::engine::catalog::{CareerArchetype, CareerCatalog};
use crate::engine::types::{
    title_case, CareerMatch, Priority, ResumeProfile, Skill, SkillGap, SkillLevel,
};
use std::collections::HashMap;

/// Weight of the skill-overlap fraction in a match score
const SKILL_WEIGHT: f64 = 70.0;
/// Score per keyword hit, and the cap on the keyword contribution
const KEYWORD_POINTS: f64 = 5.0;
const KEYWORD_CAP: f64 = 30.0;
/// Scores are clamped below certainty to avoid overclaiming fit
const SCORE_CEILING: f64 = 98.0;
/// Archetypes at or below this score are not reported as matches
const MATCH_THRESHOLD: f64 = 15.0;
/// At most this many matches are returned
const MAX_MATCHES: usize = 6;
/// At most this many missing skills are carried on a match
const MAX_GAP_SKILLS: usize = 5;

/// Career matching over an injected archetype catalog
#[derive(Debug, Clone)]
pub struct CareerMatcher {
    catalog: CareerCatalog,
}

impl CareerMatcher {
    pub fn new(catalog: CareerCatalog) -> Self {
        Self { catalog }
    }

    pub fn with_builtin() -> Self {
        Self::new(CareerCatalog::builtin())
    }

    pub fn catalog(&self) -> &CareerCatalog {
        &self.catalog
    }

    /// Resolve a target archetype for the profile.
    ///
    /// A non-empty target string selects the first archetype (in catalog
    /// order) whose title contains it, or one of whose keywords occurs in
    /// it. Otherwise archetypes are scored by required skills present plus
    /// keywords found in the raw text, first-seen winning ties; a catalog
    /// with no positive score falls back to the fixed default.
    pub fn resolve_target(&self, profile: &ResumeProfile, target: &str) -> &CareerArchetype {
        if !target.is_empty() {
            let target_lower = target.to_lowercase();
            for archetype in &self.catalog.archetypes {
                if archetype.title.to_lowercase().contains(&target_lower)
                    || archetype
                        .keywords
                        .iter()
                        .any(|k| target_lower.contains(k.as_str()))
                {
                    return archetype;
                }
            }
        }

        let current = skill_index(profile);
        let text_lower = profile.raw_text.to_lowercase();
        let mut best: Option<(&CareerArchetype, usize)> = None;
        for archetype in &self.catalog.archetypes {
            let skill_hits = archetype
                .required_skills
                .iter()
                .filter(|s| current.contains_key(s.as_str()))
                .count();
            let keyword_hits = archetype
                .keywords
                .iter()
                .filter(|k| text_lower.contains(k.as_str()))
                .count();
            let total = skill_hits + keyword_hits;
            if total > best.map(|(_, score)| score).unwrap_or(0) {
                best = Some((archetype, total));
            }
        }
        match best {
            Some((archetype, _)) => archetype,
            None => self.catalog.default_archetype(),
        }
    }

    /// Compute the skill gaps against the resolved target archetype,
    /// in the archetype's required-skill order.
    pub fn detect_gaps(&self, profile: &ResumeProfile, target: &str) -> Vec<SkillGap> {
        let archetype = self.resolve_target(profile, target);
        let current = skill_index(profile);
        let mut gaps = Vec::new();
        for (index, required) in archetype.required_skills.iter().enumerate() {
            match current.get(required.as_str()) {
                None => gaps.push(SkillGap {
                    skill: title_case(required),
                    current_level: "Not Found".to_string(),
                    required_level: "Intermediate".to_string(),
                    priority: if index < archetype.core_skill_count {
                        Priority::High
                    } else {
                        Priority::Medium
                    },
                    category: "technical".to_string(),
                }),
                Some(skill) if skill.level == SkillLevel::Beginner => gaps.push(SkillGap {
                    skill: title_case(required),
                    current_level: "Beginner".to_string(),
                    required_level: "Advanced".to_string(),
                    priority: Priority::Medium,
                    category: "technical".to_string(),
                }),
                Some(_) => {}
            }
        }
        gaps
    }

    /// Rank every archetype by fit: skill-overlap fraction (weight 70)
    /// plus capped keyword hits, clamped to 98. Archetypes above the
    /// threshold are kept, sorted descending with catalog order preserved
    /// on ties, truncated to the top 6.
    pub fn match_all(&self, profile: &ResumeProfile) -> Vec<CareerMatch> {
        let current = skill_index(profile);
        let text_lower = profile.raw_text.to_lowercase();
        let mut matches = Vec::new();

        for archetype in &self.catalog.archetypes {
            let matching: Vec<&String> = archetype
                .required_skills
                .iter()
                .filter(|s| current.contains_key(s.as_str()))
                .collect();
            let keyword_hits = archetype
                .keywords
                .iter()
                .filter(|k| text_lower.contains(k.as_str()))
                .count();

            let skill_score = matching.len() as f64
                / archetype.required_skills.len().max(1) as f64
                * SKILL_WEIGHT;
            let keyword_score = (keyword_hits as f64 * KEYWORD_POINTS).min(KEYWORD_CAP);
            let total = round1((skill_score + keyword_score).min(SCORE_CEILING));

            if total > MATCH_THRESHOLD {
                let gap_skills: Vec<String> = archetype
                    .required_skills
                    .iter()
                    .filter(|s| !current.contains_key(s.as_str()))
                    .take(MAX_GAP_SKILLS)
                    .map(|s| title_case(s))
                    .collect();
                matches.push(CareerMatch {
                    title: archetype.title.clone(),
                    match_score: total,
                    description: archetype.description.clone(),
                    salary_range: archetype.salary_range.clone(),
                    growth_outlook: archetype.growth_outlook.clone(),
                    required_skills: archetype
                        .required_skills
                        .iter()
                        .map(|s| title_case(s))
                        .collect(),
                    current_match_skills: matching.iter().map(|s| title_case(s)).collect(),
                    gap_skills,
                });
            }
        }

        // sort_by is stable, so equal scores keep catalog order
        matches.sort_by(|a, b| b.match_score.total_cmp(&a.match_score));
        matches.truncate(MAX_MATCHES);
        matches
    }
}

/// Profile skills indexed by lower-cased name. Later duplicates overwrite
/// earlier ones, which is fine: lookups only care about presence and level.
fn skill_index(profile: &ResumeProfile) -> HashMap<String, &Skill> {
    profile
        .skills
        .iter()
        .map(|s| (s.name.to_lowercase(), s))
        .collect()
}

fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::catalog::CareerArchetype;
    use crate::engine::extractor::ResumeExtractor;

    fn profile_for(text: &str) -> ResumeProfile {
        ResumeExtractor::with_builtin().extract(text)
    }

    fn fixture_archetype(title: &str, required: &[&str], keywords: &[&str]) -> CareerArchetype {
        CareerArchetype {
            title: title.to_string(),
            description: format!("{} description", title),
            salary_range: "$1 - $2".to_string(),
            growth_outlook: "flat".to_string(),
            required_skills: required.iter().map(|s| s.to_string()).collect(),
            keywords: keywords.iter().map(|s| s.to_string()).collect(),
            core_skill_count: 5,
        }
    }

    fn fixture_matcher() -> CareerMatcher {
        CareerMatcher::new(CareerCatalog::new(
            vec![
                fixture_archetype(
                    "Alpha Role",
                    &["python", "sql", "docker", "git", "linux", "bash", "aws"],
                    &["alpha", "ops"],
                ),
                fixture_archetype("Beta Role", &["python", "react"], &["beta", "web"]),
            ],
            "Alpha Role",
        ))
    }

    #[test]
    fn test_resolve_by_title_substring() {
        let matcher = fixture_matcher();
        let profile = ResumeProfile::new();
        assert_eq!(matcher.resolve_target(&profile, "beta").title, "Beta Role");
        // Keyword contained in the target string also resolves
        assert_eq!(
            matcher.resolve_target(&profile, "senior ops person").title,
            "Alpha Role"
        );
    }

    #[test]
    fn test_resolve_defaults_on_empty_profile() {
        let matcher = fixture_matcher();
        let profile = ResumeProfile::new();
        assert_eq!(matcher.resolve_target(&profile, "").title, "Alpha Role");
    }

    #[test]
    fn test_gap_priority_follows_core_prefix() {
        let matcher = fixture_matcher();
        // Zero skills: every required skill of Alpha Role becomes a gap
        let gaps = matcher.detect_gaps(&ResumeProfile::new(), "alpha role");
        assert_eq!(gaps.len(), 7);
        for (i, gap) in gaps.iter().enumerate() {
            let expected = if i < 5 { Priority::High } else { Priority::Medium };
            assert_eq!(gap.priority, expected, "gap {} ({})", i, gap.skill);
            assert_eq!(gap.current_level, "Not Found");
            assert_eq!(gap.required_level, "Intermediate");
        }
        // Order follows the archetype's required-skill list
        assert_eq!(gaps[0].skill, "Python");
        assert_eq!(gaps[6].skill, "Aws");
    }

    #[test]
    fn test_beginner_skill_becomes_medium_gap() {
        let matcher = fixture_matcher();
        // Padding keeps "learning" out of the context window around react
        let text = format!("learning python basics {}react", "x ".repeat(60));
        let profile = profile_for(&text);
        let gaps = matcher.detect_gaps(&profile, "beta");
        let python = gaps.iter().find(|g| g.skill == "Python").unwrap();
        assert_eq!(python.current_level, "Beginner");
        assert_eq!(python.required_level, "Advanced");
        assert_eq!(python.priority, Priority::Medium);
        // react is present at intermediate level: no gap
        assert!(gaps.iter().all(|g| g.skill != "React"));
    }

    #[test]
    fn test_match_all_empty_profile_is_empty() {
        let matcher = CareerMatcher::with_builtin();
        let matches = matcher.match_all(&ResumeProfile::new());
        assert!(matches.is_empty());
    }

    #[test]
    fn test_default_gaps_for_empty_profile() {
        // Empty profile falls back to Full Stack Developer and reports
        // every required skill with position-based priority
        let matcher = CareerMatcher::with_builtin();
        let gaps = matcher.detect_gaps(&ResumeProfile::new(), "");
        let default = matcher.catalog().default_archetype();
        assert_eq!(gaps.len(), default.required_skills.len());
        assert!(gaps[..5].iter().all(|g| g.priority == Priority::High));
        assert!(gaps[5..].iter().all(|g| g.priority == Priority::Medium));
    }

    #[test]
    fn test_match_scores_sorted_clamped_thresholded() {
        let matcher = CareerMatcher::with_builtin();
        let profile = profile_for(
            "Full stack web developer.\nSkills: javascript, react, node.js, python, sql, git, rest api, docker, html, css, typescript\nbackend and frontend work",
        );
        let matches = matcher.match_all(&profile);
        assert!(!matches.is_empty());
        assert!(matches.len() <= 6);
        for pair in matches.windows(2) {
            assert!(pair[0].match_score >= pair[1].match_score);
        }
        for m in &matches {
            assert!(m.match_score <= 98.0);
            assert!(m.match_score > 15.0);
            assert!(m.gap_skills.len() <= 5);
        }
        assert_eq!(matches[0].title, "Full Stack Developer");
    }

    #[test]
    fn test_tied_scores_keep_catalog_order() {
        let matcher = CareerMatcher::new(CareerCatalog::new(
            vec![
                fixture_archetype("First", &["python"], &[]),
                fixture_archetype("Second", &["python"], &[]),
            ],
            "First",
        ));
        let matches = matcher.match_all(&profile_for("python"));
        assert_eq!(matches.len(), 2);
        assert_eq!(matches[0].match_score, matches[1].match_score);
        assert_eq!(matches[0].title, "First");
        assert_eq!(matches[1].title, "Second");
    }
}
