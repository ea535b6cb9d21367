//! Static Catalogs
//!
//! Read-only reference data for the analysis engine: the skill dictionary,
//! the career archetype catalog and the curated learning resources.
//!
//! None of these are module-level singletons. Each is constructed once at
//! startup and passed (by reference or shared ownership) into the engine
//! components, so tests can substitute small fixture catalogs.

use crate::engine::types::{LearningResource, Priority};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

// ============================================================
// SKILL DICTIONARY
// ============================================================

/// One ordered dictionary category with its recognizable terms,
/// all stored lower-cased.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkillCategory {
    pub name: String,
    pub terms: Vec<String>,
}

/// Categorized catalog of recognizable skill terms. Category order is
/// significant: extraction iterates categories in declaration order and a
/// term present in two categories yields two skill entries (intentional
/// multi-tagging, downstream scoring counts raw entries).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkillDictionary {
    pub categories: Vec<SkillCategory>,
}

impl SkillDictionary {
    pub fn new(categories: Vec<SkillCategory>) -> Self {
        Self { categories }
    }

    pub fn builtin() -> Self {
        let category = |name: &str, terms: &[&str]| SkillCategory {
            name: name.to_string(),
            terms: terms.iter().map(|t| t.to_string()).collect(),
        };
        Self::new(vec![
            category(
                "programming",
                &[
                    // no bare "r": a one-letter term matches any text under
                    // substring search
                    "python", "javascript", "typescript", "java", "c++", "c#", "go",
                    "rust", "ruby", "php", "swift", "kotlin", "scala", "matlab",
                    "sql", "html", "css", "bash", "powershell",
                ],
            ),
            category(
                "frameworks",
                &[
                    "react", "angular", "vue", "next.js", "django", "flask", "fastapi",
                    "spring", "express", "node.js", "rails", ".net", "laravel",
                    "svelte", "nuxt", "gatsby", "electron", "react native", "flutter",
                ],
            ),
            category(
                "data_science",
                &[
                    "tensorflow", "pytorch", "scikit-learn", "pandas", "numpy", "keras",
                    "opencv", "nltk", "spacy", "huggingface", "langchain",
                    "machine learning", "deep learning", "nlp", "computer vision",
                    "data analysis", "statistics", "data visualization",
                ],
            ),
            category(
                "cloud",
                &[
                    "aws", "azure", "gcp", "google cloud", "docker", "kubernetes",
                    "terraform", "jenkins", "ci/cd", "devops", "microservices",
                    "serverless", "lambda", "ec2", "s3",
                ],
            ),
            category(
                "databases",
                &[
                    "mysql", "postgresql", "mongodb", "redis", "elasticsearch",
                    "dynamodb", "cassandra", "firebase", "sqlite", "oracle", "neo4j",
                    "graphql",
                ],
            ),
            category(
                "tools",
                &[
                    "git", "github", "gitlab", "jira", "confluence", "figma",
                    "postman", "vs code", "linux", "agile", "scrum", "rest api",
                    "api design",
                ],
            ),
            category(
                "soft_skills",
                &[
                    "leadership", "communication", "teamwork", "problem solving",
                    "project management", "mentoring", "presentation", "analytical",
                    "critical thinking", "time management",
                ],
            ),
        ])
    }
}

// ============================================================
// CAREER CATALOG
// ============================================================

/// A named career-role template with its required-skill and keyword profile.
///
/// `core_skill_count` marks the prefix of `required_skills` treated as core:
/// gaps inside the prefix are high priority, gaps beyond it medium. The
/// prefix length is an explicit field rather than a slice convention so the
/// contract survives catalog edits.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CareerArchetype {
    pub title: String,
    pub description: String,
    pub salary_range: String,
    pub growth_outlook: String,
    /// Priority-ordered required skills (lower-cased dictionary keys)
    pub required_skills: Vec<String>,
    /// Free-text keywords matched against resume text, lower-cased
    pub keywords: Vec<String>,
    pub core_skill_count: usize,
}

/// Ordered registry of career archetypes. Iteration order is declaration
/// order; target resolution and score ties depend on it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CareerCatalog {
    pub archetypes: Vec<CareerArchetype>,
    /// Title of the archetype used when nothing else resolves
    pub default_title: String,
}

impl CareerCatalog {
    pub fn new(archetypes: Vec<CareerArchetype>, default_title: &str) -> Self {
        Self {
            archetypes,
            default_title: default_title.to_string(),
        }
    }

    /// The fallback archetype. The catalog is only valid if `default_title`
    /// names one of its archetypes; `builtin()` guarantees this.
    pub fn default_archetype(&self) -> &CareerArchetype {
        self.archetypes
            .iter()
            .find(|a| a.title == self.default_title)
            .unwrap_or(&self.archetypes[0])
    }

    pub fn builtin() -> Self {
        let archetype = |title: &str,
                         description: &str,
                         salary_range: &str,
                         growth_outlook: &str,
                         required_skills: &[&str],
                         keywords: &[&str]| CareerArchetype {
            title: title.to_string(),
            description: description.to_string(),
            salary_range: salary_range.to_string(),
            growth_outlook: growth_outlook.to_string(),
            required_skills: required_skills.iter().map(|s| s.to_string()).collect(),
            keywords: keywords.iter().map(|s| s.to_string()).collect(),
            core_skill_count: 5,
        };
        Self::new(
            vec![
                archetype(
                    "Full Stack Developer",
                    "Build end-to-end web applications handling both frontend interfaces and backend systems. Lead architecture decisions and deliver scalable solutions.",
                    "$85,000 - $160,000",
                    "22% growth expected (Much faster than average)",
                    &["javascript", "react", "node.js", "python", "sql", "git", "rest api", "docker", "html", "css", "typescript"],
                    &["web", "frontend", "backend", "full stack", "fullstack", "javascript", "react", "node"],
                ),
                archetype(
                    "Data Scientist",
                    "Extract insights from complex datasets using statistical analysis, machine learning, and AI techniques to drive business decisions.",
                    "$95,000 - $175,000",
                    "35% growth expected (Much faster than average)",
                    &["python", "machine learning", "statistics", "sql", "tensorflow", "pandas", "numpy", "data visualization", "r", "deep learning"],
                    &["data", "machine learning", "ml", "ai", "analytics", "statistics", "tensorflow", "pytorch"],
                ),
                archetype(
                    "ML Engineer",
                    "Design, build, and deploy machine learning models at scale. Bridge the gap between data science research and production systems.",
                    "$110,000 - $200,000",
                    "40% growth expected (Explosive demand)",
                    &["python", "tensorflow", "pytorch", "docker", "kubernetes", "machine learning", "deep learning", "aws", "mlops", "sql"],
                    &["machine learning", "ml", "deep learning", "ai", "model", "training", "tensorflow", "pytorch"],
                ),
                archetype(
                    "DevOps Engineer",
                    "Automate and streamline development operations, manage CI/CD pipelines, and ensure reliable infrastructure at scale.",
                    "$90,000 - $165,000",
                    "25% growth expected (Faster than average)",
                    &["docker", "kubernetes", "aws", "terraform", "jenkins", "ci/cd", "linux", "python", "bash", "git"],
                    &["devops", "cloud", "infrastructure", "docker", "kubernetes", "aws", "ci/cd", "deployment"],
                ),
                archetype(
                    "Cloud Architect",
                    "Design and oversee cloud computing strategies, including cloud adoption plans, cloud application design, and cloud management.",
                    "$130,000 - $220,000",
                    "28% growth expected (Faster than average)",
                    &["aws", "azure", "gcp", "terraform", "kubernetes", "microservices", "serverless", "docker", "python", "networking"],
                    &["cloud", "aws", "azure", "gcp", "architect", "infrastructure", "serverless"],
                ),
                archetype(
                    "Frontend Developer",
                    "Create responsive, accessible, and performant user interfaces. Master modern JavaScript frameworks and design principles.",
                    "$75,000 - $145,000",
                    "20% growth expected (Faster than average)",
                    &["javascript", "react", "typescript", "css", "html", "vue", "angular", "figma", "git", "rest api"],
                    &["frontend", "react", "angular", "vue", "ui", "ux", "javascript", "css", "html"],
                ),
                archetype(
                    "Backend Developer",
                    "Build server-side logic, APIs, and database architectures that power applications and handle business logic at scale.",
                    "$85,000 - $155,000",
                    "21% growth expected (Faster than average)",
                    &["python", "java", "sql", "postgresql", "rest api", "docker", "redis", "mongodb", "git", "microservices"],
                    &["backend", "api", "server", "database", "python", "java", "node.js", "sql"],
                ),
                archetype(
                    "Cybersecurity Analyst",
                    "Protect organizations from cyber threats by monitoring, analyzing, and responding to security incidents and vulnerabilities.",
                    "$80,000 - $150,000",
                    "32% growth expected (Much faster than average)",
                    &["networking", "linux", "python", "security tools", "incident response", "vulnerability assessment", "firewalls", "encryption"],
                    &["security", "cyber", "penetration", "vulnerability", "firewall", "encryption", "incident"],
                ),
                archetype(
                    "Product Manager",
                    "Define product vision, strategy, and roadmap. Work cross-functionally to deliver products that solve customer problems.",
                    "$100,000 - $180,000",
                    "18% growth expected (Faster than average)",
                    &["project management", "agile", "communication", "leadership", "data analysis", "jira", "scrum", "presentation", "problem solving"],
                    &["product", "management", "agile", "scrum", "stakeholder", "roadmap", "strategy"],
                ),
                archetype(
                    "AI/LLM Engineer",
                    "Build applications powered by large language models and generative AI. Design prompt engineering systems and AI agents.",
                    "$130,000 - $250,000",
                    "50%+ growth expected (Explosive demand)",
                    &["python", "langchain", "huggingface", "nlp", "deep learning", "machine learning", "rest api", "docker", "pytorch", "tensorflow"],
                    &["llm", "gpt", "ai", "generative", "langchain", "nlp", "transformer", "prompt engineering"],
                ),
            ],
            "Full Stack Developer",
        )
    }
}

// ============================================================
// LEARNING RESOURCES
// ============================================================

/// Curated learning resources keyed by lower-cased skill name. Skills with
/// no curated entry get a synthesized web-search recommendation instead.
#[derive(Debug, Clone)]
pub struct ResourceCatalog {
    resources: HashMap<String, Vec<LearningResource>>,
}

impl ResourceCatalog {
    pub fn new(resources: HashMap<String, Vec<LearningResource>>) -> Self {
        Self { resources }
    }

    pub fn lookup(&self, skill_key: &str) -> Option<&[LearningResource]> {
        self.resources.get(skill_key).map(|r| r.as_slice())
    }

    pub fn builtin() -> Self {
        let resource = |title: &str,
                        provider: &str,
                        url: &str,
                        duration: &str,
                        skill_target: &str,
                        priority: Priority,
                        resource_type: &str| LearningResource {
            title: title.to_string(),
            provider: provider.to_string(),
            url: url.to_string(),
            duration: duration.to_string(),
            skill_target: skill_target.to_string(),
            priority,
            resource_type: resource_type.to_string(),
        };
        let mut resources = HashMap::new();
        resources.insert(
            "python".to_string(),
            vec![
                resource("Python for Everybody Specialization", "Coursera", "https://coursera.org/python", "8 months", "Python", Priority::High, "course"),
                resource("Automate the Boring Stuff with Python", "Udemy", "https://udemy.com/automate-python", "10 hours", "Python", Priority::Medium, "course"),
            ],
        );
        resources.insert(
            "javascript".to_string(),
            vec![
                resource("The Complete JavaScript Course", "Udemy", "https://udemy.com/javascript", "69 hours", "JavaScript", Priority::High, "course"),
                resource("JavaScript.info", "Free", "https://javascript.info", "Self-paced", "JavaScript", Priority::Medium, "tutorial"),
            ],
        );
        resources.insert(
            "react".to_string(),
            vec![
                resource("React - The Complete Guide", "Udemy", "https://udemy.com/react-complete", "48 hours", "React", Priority::High, "course"),
                resource("Official React Documentation", "Meta", "https://react.dev", "Self-paced", "React", Priority::High, "documentation"),
            ],
        );
        resources.insert(
            "machine learning".to_string(),
            vec![
                resource("Machine Learning Specialization", "Coursera (Stanford)", "https://coursera.org/ml", "3 months", "Machine Learning", Priority::High, "course"),
                resource("Hands-On ML with Scikit-Learn", "O'Reilly", "https://oreilly.com/ml-book", "Self-paced", "Machine Learning", Priority::Medium, "book"),
            ],
        );
        resources.insert(
            "docker".to_string(),
            vec![resource("Docker Mastery", "Udemy", "https://udemy.com/docker-mastery", "20 hours", "Docker", Priority::High, "course")],
        );
        resources.insert(
            "aws".to_string(),
            vec![resource("AWS Certified Solutions Architect", "A Cloud Guru", "https://acloudguru.com/aws", "40 hours", "AWS", Priority::High, "certification")],
        );
        resources.insert(
            "sql".to_string(),
            vec![resource("The Complete SQL Bootcamp", "Udemy", "https://udemy.com/sql-bootcamp", "9 hours", "SQL", Priority::High, "course")],
        );
        resources.insert(
            "tensorflow".to_string(),
            vec![resource("TensorFlow Developer Certificate", "Coursera", "https://coursera.org/tensorflow", "4 months", "TensorFlow", Priority::High, "certification")],
        );
        resources.insert(
            "kubernetes".to_string(),
            vec![resource("Kubernetes for Developers", "Linux Foundation", "https://linuxfoundation.org/k8s", "30 hours", "Kubernetes", Priority::High, "certification")],
        );
        resources.insert(
            "typescript".to_string(),
            vec![resource("Understanding TypeScript", "Udemy", "https://udemy.com/typescript", "15 hours", "TypeScript", Priority::Medium, "course")],
        );
        resources.insert(
            "deep learning".to_string(),
            vec![resource("Deep Learning Specialization", "Coursera (DeepLearning.AI)", "https://coursera.org/deep-learning", "5 months", "Deep Learning", Priority::High, "course")],
        );
        Self::new(resources)
    }
}
