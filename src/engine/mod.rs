//! Engine Module - Core of the Career Mentor
//!
//! Everything that turns raw resume text into career guidance:
//! - Catalog: skill dictionary, career archetypes, learning resources
//! - Extractor: heuristic resume parsing (contact, skills, experience, education)
//! - Scorer: multi-factor resume quality report
//! - Matcher: target resolution, skill gaps, career ranking
//! - Roadmap: phased learning plans with curated resources
//! - Mentor: keyword-routed chat replies

pub mod catalog;
pub mod extractor;
pub mod matcher;
pub mod mentor;
pub mod roadmap;
pub mod scorer;
pub mod types;

pub use catalog::*;
pub use extractor::*;
pub use matcher::*;
pub use mentor::*;
pub use roadmap::*;
pub use scorer::*;
pub use types::*;
