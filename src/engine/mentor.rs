//! Mentor Reply Engine
//!
//! Canned career guidance routed by keywords in the user's message.
//! Routes are an ordered list of (keyword set, handler) pairs checked
//! against the lower-cased message; the first route whose keywords hit
//! wins, and a general handler answers everything else. Handlers can
//! personalize their reply from the caller's resume profile.

use crate::engine::types::ResumeProfile;

type Handler = fn(Option<&ResumeProfile>) -> String;

struct Route {
    keywords: &'static [&'static str],
    handler: Handler,
}

/// Keyword-routed mentor. Routing order is fixed: resume advice first,
/// greetings near the end, general fallback last.
pub struct Mentor {
    routes: Vec<Route>,
}

impl Default for Mentor {
    fn default() -> Self {
        Self::new()
    }
}

impl Mentor {
    pub fn new() -> Self {
        let route = |keywords: &'static [&'static str], handler: Handler| Route {
            keywords,
            handler,
        };
        Self {
            routes: vec![
                route(&["resume", "cv", "improve", "review", "feedback"], resume_advice),
                route(&["interview", "prepare", "question"], interview_advice),
                route(&["salary", "negotiate", "compensation", "pay"], salary_advice),
                route(
                    &["skill", "learn", "course", "certification", "study"],
                    learning_advice,
                ),
                route(
                    &["career", "path", "transition", "switch", "change"],
                    career_advice,
                ),
                route(&["project", "portfolio", "github", "build"], project_advice),
                route(
                    &["job", "apply", "application", "search", "hunt"],
                    job_search_advice,
                ),
                route(&["hello", "hi", "hey", "start", "help"], greeting),
            ],
        }
    }

    pub fn reply(&self, message: &str, profile: Option<&ResumeProfile>) -> String {
        let msg_lower = message.to_lowercase();
        for route in &self.routes {
            if route.keywords.iter().any(|k| msg_lower.contains(k)) {
                return (route.handler)(profile);
            }
        }
        general_advice(profile)
    }
}

fn top_skills(profile: Option<&ResumeProfile>, count: usize) -> Vec<String> {
    profile
        .map(|p| p.skills.iter().take(count).map(|s| s.name.clone()).collect())
        .unwrap_or_default()
}

fn greeting(profile: Option<&ResumeProfile>) -> String {
    let name = profile
        .map(|p| p.name.as_str())
        .filter(|n| !n.is_empty())
        .unwrap_or("there");
    let skills = top_skills(profile, 5);
    let skills_text = if skills.is_empty() {
        String::new()
    } else {
        format!(
            "\n\nI can see from your profile that you have experience with **{}**. That's a great foundation!",
            skills.join(", ")
        )
    };
    format!(
        "**Hello {}! Welcome to CareerMentor!**\n\nI'm your personal career advisor.{}\n\nI can help with career strategy, resume optimization, skill development, interview prep, salary insights, and portfolio projects. What would you like to focus on today?",
        name, skills_text
    )
}

fn resume_advice(profile: Option<&ResumeProfile>) -> String {
    match profile {
        None => "**Resume Improvement Tips**\n\n1. Use a clean, ATS-friendly format with standard headings\n2. Lead with action verbs: Developed, Architected, Optimized, Led\n3. Quantify achievements: 'Increased performance by 40%' beats 'Improved performance'\n4. Tailor keywords to each job description\n5. Keep it to 1-2 pages, prioritizing recent experience\n\nUpload your resume for a personalized analysis!".to_string(),
        Some(p) => {
            let skills = top_skills(Some(p), 8);
            let name = if p.name.is_empty() { "You" } else { p.name.as_str() };
            format!(
                "**Personalized Resume Analysis for {}**\n\nWhat's working: {} technical skills identified ({}), and {} experience entr{}.\n\nKey improvements:\n1. Strengthen your summary into a 2-3 line value proposition\n2. Quantify your impact with concrete metrics\n3. Mirror exact keywords from target job descriptions for ATS\n4. Add a projects section with problem, technologies, and outcomes\n5. Keep formatting and section headers consistent",
                name,
                p.skills.len(),
                skills.join(", "),
                p.experience.len(),
                if p.experience.len() == 1 { "y" } else { "ies" },
            )
        }
    }
}

fn interview_advice(profile: Option<&ResumeProfile>) -> String {
    let skills = top_skills(profile, 5);
    let skills_text = if skills.is_empty() {
        String::new()
    } else {
        format!(
            "\n\nBased on your skills ({}), expect technical deep dives on each of them.",
            skills.join(", ")
        )
    };
    format!(
        "**Interview Preparation**\n\n1. Research the company, product, and recent news\n2. Practice the STAR method for behavioral questions\n3. Prepare 2-3 stories that show impact with numbers\n4. Rehearse explaining past projects out loud\n5. Have thoughtful questions ready for your interviewer{}",
        skills_text
    )
}

fn salary_advice(_profile: Option<&ResumeProfile>) -> String {
    "**Salary Negotiation**\n\n1. Benchmark your role and region before any numbers are discussed\n2. Let the employer name a figure first when possible\n3. Negotiate total compensation, not just base salary\n4. Anchor with your market research, not your current pay\n5. Get the final offer in writing".to_string()
}

fn learning_advice(profile: Option<&ResumeProfile>) -> String {
    let skills = top_skills(profile, 5);
    let skills_text = if skills.is_empty() {
        String::new()
    } else {
        format!(
            "\n\nYou already have {} on your profile; deepening one of those often beats starting from zero.",
            skills.join(", ")
        )
    };
    format!(
        "**Skill Development**\n\n1. Pick one high-demand skill and go deep before going wide\n2. Learn by building: small projects beat passive courses\n3. Set a weekly practice schedule you can sustain\n4. Earn a recognized certification where it matters for the role\n5. Teach what you learn to make it stick{}",
        skills_text
    )
}

fn career_advice(profile: Option<&ResumeProfile>) -> String {
    let skills = top_skills(profile, 5);
    let skills_text = if skills.is_empty() {
        String::new()
    } else {
        format!(
            "\n\nWith {} on your profile, look for roles where those skills transfer directly.",
            skills.join(", ")
        )
    };
    format!(
        "**Career Path Planning**\n\n1. Define where you want to be in 2-3 years, then work backwards\n2. Map the skill gap between your current and target role\n3. Make the transition gradually: projects and responsibilities before titles\n4. Talk to people already doing the job you want\n5. Revisit the plan quarterly{}",
        skills_text
    )
}

fn project_advice(profile: Option<&ResumeProfile>) -> String {
    let skills = top_skills(profile, 3);
    let skills_text = if skills.is_empty() {
        String::new()
    } else {
        format!(
            "\n\nGood starting points given your skills: something that combines {}.",
            skills.join(" and ")
        )
    };
    format!(
        "**Portfolio Projects**\n\n1. Build something you would actually use; motivation carries projects to completion\n2. Ship it: a deployed project beats ten unfinished repos\n3. Write a clear README with the problem, the stack, and a demo\n4. Keep commit history clean; reviewers do look\n5. Two or three polished projects beat a dozen tutorials{}",
        skills_text
    )
}

fn job_search_advice(_profile: Option<&ResumeProfile>) -> String {
    "**Job Search Strategy**\n\n1. Quality over quantity: tailor every application\n2. Apply within the first few days of a posting\n3. Use referrals; they multiply response rates\n4. Track applications in a spreadsheet with follow-up dates\n5. Treat each interview as practice for the next one".to_string()
}

fn general_advice(profile: Option<&ResumeProfile>) -> String {
    let name = profile
        .map(|p| p.name.as_str())
        .filter(|n| !n.is_empty())
        .map(|n| format!(" {}", n))
        .unwrap_or_default();
    format!(
        "Thanks for your message{}! I can help with resume feedback, interview preparation, salary negotiation, skill development, career planning, portfolio projects, and job search strategy. Ask me about any of those to get started.",
        name
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::types::{Skill, SkillLevel};

    fn profile_with_skills(names: &[&str]) -> ResumeProfile {
        let mut profile = ResumeProfile::new();
        profile.name = "Jane Doe".to_string();
        profile.skills = names
            .iter()
            .map(|n| Skill {
                name: n.to_string(),
                level: SkillLevel::Intermediate,
                category: "programming".to_string(),
                relevance_score: 1.0,
            })
            .collect();
        profile
    }

    #[test]
    fn test_routing_first_match_wins() {
        let mentor = Mentor::new();
        // "resume" outranks "interview" in the route order
        let reply = mentor.reply("review my resume before the interview", None);
        assert!(reply.contains("Resume Improvement Tips"));
    }

    #[test]
    fn test_routing_is_case_insensitive() {
        let mentor = Mentor::new();
        let reply = mentor.reply("SALARY negotiation please", None);
        assert!(reply.contains("Salary Negotiation"));
    }

    #[test]
    fn test_greeting_interpolates_profile() {
        let mentor = Mentor::new();
        let profile = profile_with_skills(&["Python", "React"]);
        let reply = mentor.reply("hello", Some(&profile));
        assert!(reply.contains("Hello Jane Doe"));
        assert!(reply.contains("Python, React"));
    }

    #[test]
    fn test_greeting_without_profile() {
        let mentor = Mentor::new();
        let reply = mentor.reply("hi", None);
        assert!(reply.contains("Hello there"));
    }

    #[test]
    fn test_fallback_for_unroutable_message() {
        let mentor = Mentor::new();
        let reply = mentor.reply("what is the meaning of life", None);
        assert!(reply.contains("Thanks for your message"));
    }

    #[test]
    fn test_personalized_resume_advice() {
        let mentor = Mentor::new();
        let profile = profile_with_skills(&["Python", "Docker", "Sql"]);
        let reply = mentor.reply("improve my cv", Some(&profile));
        assert!(reply.contains("Personalized Resume Analysis for Jane Doe"));
        assert!(reply.contains("3 technical skills"));
    }
}
