//! Learning Roadmap Generator
//!
//! Turns a profile's skill gaps into a three-phase, six-month learning
//! plan with curated (or synthesized) resources attached.

use crate::engine::catalog::ResourceCatalog;
use crate::engine::matcher::CareerMatcher;
use crate::engine::types::{
    LearningResource, LearningRoadmap, Priority, ResumeProfile, RoadmapPhase, SkillGap,
};

/// Resource list is capped here regardless of gap count
const MAX_RESOURCES: usize = 12;

/// Builds phased roadmaps from the gap engine's output and a resource catalog
#[derive(Debug, Clone)]
pub struct RoadmapBuilder {
    matcher: CareerMatcher,
    resources: ResourceCatalog,
}

impl RoadmapBuilder {
    pub fn new(matcher: CareerMatcher, resources: ResourceCatalog) -> Self {
        Self { matcher, resources }
    }

    pub fn with_builtin() -> Self {
        Self::new(CareerMatcher::with_builtin(), ResourceCatalog::builtin())
    }

    /// Build a roadmap toward the given target career. An empty target
    /// falls back to the profile's best career match, then to the
    /// catalog default. Gaps are computed against the resolved target.
    pub fn build(&self, profile: &ResumeProfile, target: &str) -> LearningRoadmap {
        let career_target = if !target.is_empty() {
            target.to_string()
        } else {
            match self.matcher.match_all(profile).first() {
                Some(top) => top.title.clone(),
                None => self.matcher.catalog().default_archetype().title.clone(),
            }
        };

        let gaps = self.matcher.detect_gaps(profile, &career_target);
        let phases = build_phases(&gaps);
        let resources = self.collect_resources(&gaps);

        LearningRoadmap {
            career_target,
            timeline: "6 months".to_string(),
            phases,
            resources,
        }
    }

    fn collect_resources(&self, gaps: &[SkillGap]) -> Vec<LearningResource> {
        let mut out = Vec::new();
        for gap in gaps {
            let key = gap.skill.to_lowercase();
            match self.resources.lookup(&key) {
                Some(curated) => out.extend(curated.iter().cloned()),
                None => out.push(generic_resource(gap)),
            }
            if out.len() >= MAX_RESOURCES {
                break;
            }
        }
        out.truncate(MAX_RESOURCES);
        out
    }
}

fn build_phases(gaps: &[SkillGap]) -> Vec<RoadmapPhase> {
    let high: Vec<&SkillGap> = gaps.iter().filter(|g| g.priority == Priority::High).collect();
    let medium: Vec<&SkillGap> = gaps
        .iter()
        .filter(|g| g.priority == Priority::Medium)
        .collect();

    let first_milestone = match high.first() {
        Some(gap) => format!("Complete foundational course in {}", gap.skill),
        None => "Identify core skills".to_string(),
    };

    vec![
        RoadmapPhase {
            phase: 1,
            title: "Foundation Building".to_string(),
            duration: "Month 1-2".to_string(),
            description: "Master the fundamental skills required for your target role".to_string(),
            skills: high.iter().take(3).map(|g| g.skill.clone()).collect(),
            milestones: vec![
                first_milestone,
                "Build a portfolio project demonstrating new skills".to_string(),
                "Join relevant professional communities".to_string(),
            ],
        },
        RoadmapPhase {
            phase: 2,
            title: "Skill Deepening".to_string(),
            duration: "Month 3-4".to_string(),
            description: "Deepen expertise and build intermediate-level proficiency".to_string(),
            skills: medium.iter().take(3).map(|g| g.skill.clone()).collect(),
            milestones: vec![
                "Complete intermediate projects".to_string(),
                "Contribute to open-source projects".to_string(),
                "Start building a professional portfolio".to_string(),
            ],
        },
        RoadmapPhase {
            phase: 3,
            title: "Advanced Practice & Portfolio".to_string(),
            duration: "Month 5-6".to_string(),
            description: "Build advanced projects and prepare for your career transition"
                .to_string(),
            skills: gaps.iter().take(4).map(|g| g.skill.clone()).collect(),
            milestones: vec![
                "Complete a capstone project".to_string(),
                "Earn a relevant certification".to_string(),
                "Update resume and LinkedIn profile".to_string(),
                "Begin targeted job applications".to_string(),
            ],
        },
    ]
}

/// Fallback resource for skills with no curated entry
fn generic_resource(gap: &SkillGap) -> LearningResource {
    LearningResource {
        title: format!("Learn {} - Comprehensive Guide", gap.skill),
        provider: "Multiple Platforms".to_string(),
        url: format!(
            "https://www.google.com/search?q=learn+{}",
            gap.skill.replace(' ', "+")
        ),
        duration: "Self-paced".to_string(),
        skill_target: gap.skill.clone(),
        priority: gap.priority,
        resource_type: "search".to_string(),
    }
}
