//! Quality Scorer
//!
//! Computes a multi-dimensional quality assessment of a resume profile.
//! Pure and deterministic: the same profile always yields the same report,
//! every score lands in 0.0..=100.0 and there is no failure mode.

use crate::engine::types::{title_case, QualityReport, ResumeProfile};

/// Canonical section headings looked for in the raw text
const SECTION_HEADINGS: [&str; 6] = [
    "experience",
    "education",
    "skills",
    "summary",
    "projects",
    "certifications",
];

/// Action verbs counted for the keyword score
const ACTION_VERBS: [&str; 12] = [
    "developed",
    "managed",
    "implemented",
    "designed",
    "led",
    "created",
    "built",
    "optimized",
    "improved",
    "delivered",
    "architected",
    "launched",
];

/// Score a profile's structure, content, keyword usage and ATS fit
pub fn score(profile: &ResumeProfile) -> QualityReport {
    let text = profile.raw_text.to_lowercase();

    // Structure: fraction of canonical section headings present
    let mut present = 0usize;
    let mut missing_sections = Vec::new();
    for section in SECTION_HEADINGS {
        if text.contains(section) {
            present += 1;
        } else {
            missing_sections.push(title_case(section));
        }
    }
    let structure_score =
        round1(present as f64 / SECTION_HEADINGS.len() as f64 * 100.0).min(100.0);

    // Content: additive tiers over skills, experience, length and education
    let skill_count = profile.skills.len();
    let experience_count = profile.experience.len();
    let mut content: f64 = 0.0;
    content += match skill_count {
        n if n >= 5 => 30.0,
        n if n >= 3 => 20.0,
        _ => 10.0,
    };
    content += match experience_count {
        n if n >= 2 => 30.0,
        n if n >= 1 => 20.0,
        _ => 5.0,
    };
    // Length tiers count characters, not bytes, so multibyte text is
    // tiered the same as its ASCII transliteration
    let char_count = text.chars().count();
    content += if char_count > 500 {
        20.0
    } else if char_count > 200 {
        15.0
    } else {
        5.0
    };
    content += if profile.education.is_empty() { 5.0 } else { 20.0 };
    let content_score = content.min(100.0);

    // Keyword: distinct action verbs found
    let verb_count = ACTION_VERBS.iter().filter(|v| text.contains(*v)).count();
    let keyword_score =
        round1(verb_count as f64 / ACTION_VERBS.len() as f64 * 100.0).min(100.0);

    let ats_compatibility =
        round1(structure_score * 0.4 + keyword_score * 0.3 + content_score * 0.3);
    let overall_score =
        round1((structure_score + content_score + keyword_score + ats_compatibility) / 4.0);

    let mut strengths = Vec::new();
    if skill_count >= 5 {
        strengths.push(format!(
            "Strong skill profile with {} identified technical competencies",
            skill_count
        ));
    }
    if verb_count >= 4 {
        strengths.push("Effective use of action verbs that demonstrate impact".to_string());
    }
    if experience_count >= 2 {
        strengths.push("Solid work experience section with multiple roles".to_string());
    }
    if !profile.education.is_empty() {
        strengths.push("Education section well documented".to_string());
    }
    if structure_score > 60.0 {
        strengths.push("Good resume structure with clear sections".to_string());
    }
    if strengths.is_empty() {
        strengths.push("Resume uploaded successfully for analysis".to_string());
    }

    let mut improvements = Vec::new();
    if skill_count < 5 {
        improvements.push("Add more technical skills with proficiency levels".to_string());
    }
    if verb_count < 4 {
        improvements.push(
            "Use more action verbs (developed, implemented, optimized) to describe achievements"
                .to_string(),
        );
    }
    if !text.contains("projects") {
        improvements.push("Add a Projects section to showcase hands-on work".to_string());
    }
    if !text.contains("certification") {
        improvements.push("Consider adding relevant certifications".to_string());
    }
    if char_count < 500 {
        improvements.push(
            "Expand resume content with more details about responsibilities and achievements"
                .to_string(),
        );
    }
    // Unconditional, so the list is never empty
    improvements
        .push("Quantify achievements with metrics (e.g., 'increased efficiency by 30%')".to_string());

    QualityReport {
        overall_score,
        structure_score,
        content_score,
        keyword_score,
        ats_compatibility,
        strengths,
        improvements,
        missing_sections,
    }
}

fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::extractor::ResumeExtractor;
    use crate::engine::types::ResumeProfile;

    const SAMPLE: &str = "Jane Doe\njane@x.com\nSkills: Python, React, Docker\nExperience\nSoftware Engineer at Acme Corp 2020\nEducation\nBachelor of Science in Computer Science";

    fn profile_for(text: &str) -> ResumeProfile {
        ResumeExtractor::with_builtin().extract(text)
    }

    #[test]
    fn test_structure_score_counts_sections() {
        // skills + experience + education = 3 of 6 headings
        let report = score(&profile_for(SAMPLE));
        assert_eq!(report.structure_score, 50.0);
        assert_eq!(report.missing_sections.len(), 3);
        assert!(report.missing_sections.contains(&"Summary".to_string()));
        assert!(report.missing_sections.contains(&"Projects".to_string()));
        assert!(report.missing_sections.contains(&"Certifications".to_string()));
    }

    #[test]
    fn test_scores_in_range_for_arbitrary_input() {
        let long = "verylongnoise ".repeat(600);
        for input in ["", "x", long.as_str()] {
            let report = score(&profile_for(input));
            for value in [
                report.overall_score,
                report.structure_score,
                report.content_score,
                report.keyword_score,
                report.ats_compatibility,
            ] {
                assert!((0.0..=100.0).contains(&value), "out of range: {}", value);
            }
        }
    }

    #[test]
    fn test_keyword_score_monotone_in_verbs() {
        let base = "Experience\nworked on things";
        let with_one = format!("{} developed", base);
        let with_two = format!("{} developed managed", base);
        let s0 = score(&profile_for(base)).keyword_score;
        let s1 = score(&profile_for(&with_one)).keyword_score;
        let s2 = score(&profile_for(&with_two)).keyword_score;
        assert!(s1 > s0);
        assert!(s2 > s1);
        // Repeating an already-counted verb changes nothing
        let repeated = format!("{} developed developed", base);
        assert_eq!(score(&profile_for(&repeated)).keyword_score, s1);
    }

    #[test]
    fn test_content_skill_tier_steps_up() {
        // 3 skills -> tier 20, 5 skills -> tier 30; everything else fixed
        let three = profile_for("python react docker");
        let five = profile_for("python react docker aws sql");
        assert_eq!(three.skills.len(), 3);
        assert_eq!(five.skills.len(), 5);
        let diff = score(&five).content_score - score(&three).content_score;
        assert_eq!(diff, 10.0);
    }

    #[test]
    fn test_content_score_caps_at_hundred() {
        // Max tiers: 30 + 30 + 20 + 20 stays within the cap
        let report = score(&profile_for(SAMPLE));
        assert!(report.content_score <= 100.0);
        assert!(report.content_score > 0.0);
    }

    #[test]
    fn test_length_tiers_count_chars_not_bytes() {
        // 300 two-byte chars and 300 ASCII chars land in the same tier
        let multibyte = "é".repeat(300);
        let ascii = "e".repeat(300);
        assert_eq!(
            score(&profile_for(&multibyte)).content_score,
            score(&profile_for(&ascii)).content_score
        );
    }

    #[test]
    fn test_strengths_fallback_never_empty() {
        let report = score(&ResumeProfile::new());
        assert_eq!(
            report.strengths,
            vec!["Resume uploaded successfully for analysis".to_string()]
        );
    }

    #[test]
    fn test_improvements_always_include_metrics_advice() {
        let weak = score(&profile_for(""));
        let strong = score(&profile_for(SAMPLE));
        for report in [weak, strong] {
            assert!(report
                .improvements
                .last()
                .map(|last| last.contains("Quantify achievements"))
                .unwrap_or(false));
        }
    }

    #[test]
    fn test_ats_is_weighted_blend() {
        let report = score(&profile_for(SAMPLE));
        let blend = report.structure_score * 0.4
            + report.keyword_score * 0.3
            + report.content_score * 0.3;
        assert!((report.ats_compatibility - blend).abs() <= 0.05);
        let mean = (report.structure_score
            + report.content_score
            + report.keyword_score
            + report.ats_compatibility)
            / 4.0;
        assert!((report.overall_score - mean).abs() <= 0.05);
    }
}
