//! Career Mentor Backend
//!
//! A resume-analysis engine with:
//! - Heuristic resume extraction (contact, skills, experience, education)
//! - Multi-factor quality scoring
//! - Career matching and skill-gap detection
//! - Phased learning roadmaps
//! - Keyword-routed mentor chat

pub mod api;
pub mod engine;

pub use api::*;
pub use engine::*;
