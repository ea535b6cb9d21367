//! Web API Module
//!
//! Exposes RESTful endpoints for the Career Mentor frontend.
//! All endpoints return JSON and require no authentication (prototype mode).
//! Resume uploads arrive as already-decoded plain text; the frontend is
//! responsible for turning PDF/DOCX files into text first.

use crate::engine::{
    catalog::ResourceCatalog,
    matcher::CareerMatcher,
    mentor::Mentor,
    extractor::ResumeExtractor,
    roadmap::RoadmapBuilder,
    scorer,
    types::ResumeProfile,
};
use actix_cors::Cors;
use actix_web::{web, App, HttpResponse, HttpServer, Responder, ResponseError};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use thiserror::Error;

// ============================================================
// APPLICATION STATE
// ============================================================

/// Shared application state
pub struct AppState {
    pub extractor: ResumeExtractor,
    pub matcher: CareerMatcher,
    pub roadmaps: RoadmapBuilder,
    pub mentor: Mentor,
    pub profiles: Mutex<HashMap<String, ResumeProfile>>,
}

impl AppState {
    pub fn new() -> Self {
        let matcher = CareerMatcher::with_builtin();
        Self {
            extractor: ResumeExtractor::with_builtin(),
            roadmaps: RoadmapBuilder::new(matcher.clone(), ResourceCatalog::builtin()),
            matcher,
            mentor: Mentor::new(),
            profiles: Mutex::new(HashMap::new()),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================
// API REQUEST/RESPONSE TYPES
// ============================================================

#[derive(Deserialize)]
pub struct UploadResumeRequest {
    /// Already-decoded resume text (may be empty if decoding failed upstream)
    pub content: String,
    pub filename: Option<String>,
}

#[derive(Deserialize)]
pub struct ChatRequest {
    pub message: String,
    /// Profile to personalize the reply with, if one was uploaded
    pub resume_id: Option<String>,
}

#[derive(Serialize)]
pub struct ChatResponse {
    pub response: String,
}

#[derive(Serialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub data: Option<T>,
    pub error: Option<String>,
}

impl<T: Serialize> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }

    pub fn error(message: &str) -> ApiResponse<()> {
        ApiResponse {
            success: false,
            data: None,
            error: Some(message.to_string()),
        }
    }
}

/// Handler errors, rendered as the JSON envelope with the matching status
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Resume not found. Upload a resume first.")]
    ProfileNotFound,
}

impl ResponseError for ApiError {
    fn error_response(&self) -> HttpResponse {
        match self {
            ApiError::ProfileNotFound => {
                HttpResponse::NotFound().json(ApiResponse::<()>::error(&self.to_string()))
            }
        }
    }
}

// ============================================================
// API HANDLERS
// ============================================================

/// Service banner
async fn index() -> impl Responder {
    HttpResponse::Ok().json(serde_json::json!({
        "message": "Career Mentor API",
        "version": "0.1.0"
    }))
}

/// Health check endpoint
async fn health_check() -> impl Responder {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "healthy",
        "service": "Career Mentor API",
        "version": "0.1.0"
    }))
}

fn get_profile(data: &AppState, id: &str) -> Result<ResumeProfile, ApiError> {
    let profiles = data.profiles.lock().unwrap();
    profiles.get(id).cloned().ok_or(ApiError::ProfileNotFound)
}

/// Upload resume text, extract a profile, store it under a fresh id
async fn upload_resume(
    data: web::Data<Arc<AppState>>,
    req: web::Json<UploadResumeRequest>,
) -> impl Responder {
    let profile = data.extractor.extract(&req.content);
    log::info!(
        "extracted profile {} ({} skills, file {:?})",
        profile.id,
        profile.skills.len(),
        req.filename
    );

    {
        let mut profiles = data.profiles.lock().unwrap();
        profiles.insert(profile.id.clone(), profile.clone());
    }

    HttpResponse::Ok().json(ApiResponse::success(profile))
}

/// Get a stored profile
async fn get_resume(
    data: web::Data<Arc<AppState>>,
    path: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    let profile = get_profile(&data, &path.into_inner())?;
    Ok(HttpResponse::Ok().json(ApiResponse::success(profile)))
}

/// Score resume quality
async fn analyze_resume(
    data: web::Data<Arc<AppState>>,
    path: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    let profile = get_profile(&data, &path.into_inner())?;
    let report = scorer::score(&profile);
    Ok(HttpResponse::Ok().json(ApiResponse::success(report)))
}

#[derive(Deserialize)]
struct SkillGapQuery {
    #[serde(default)]
    target_role: String,
}

/// Skill gaps against a target role (or the auto-resolved one)
async fn skill_gaps(
    data: web::Data<Arc<AppState>>,
    path: web::Path<String>,
    query: web::Query<SkillGapQuery>,
) -> Result<HttpResponse, ApiError> {
    let profile = get_profile(&data, &path.into_inner())?;
    let gaps = data.matcher.detect_gaps(&profile, &query.target_role);
    Ok(HttpResponse::Ok().json(ApiResponse::success(gaps)))
}

/// Ranked career matches for a profile
async fn career_paths(
    data: web::Data<Arc<AppState>>,
    path: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    let profile = get_profile(&data, &path.into_inner())?;
    let matches = data.matcher.match_all(&profile);
    Ok(HttpResponse::Ok().json(ApiResponse::success(matches)))
}

#[derive(Deserialize)]
struct RoadmapQuery {
    #[serde(default)]
    target_career: String,
}

/// Phased learning roadmap toward a target career
async fn learning_roadmap(
    data: web::Data<Arc<AppState>>,
    path: web::Path<String>,
    query: web::Query<RoadmapQuery>,
) -> Result<HttpResponse, ApiError> {
    let profile = get_profile(&data, &path.into_inner())?;
    let roadmap = data.roadmaps.build(&profile, &query.target_career);
    Ok(HttpResponse::Ok().json(ApiResponse::success(roadmap)))
}

/// Everything the frontend dashboard needs in one call
async fn dashboard(
    data: web::Data<Arc<AppState>>,
    path: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    let profile = get_profile(&data, &path.into_inner())?;
    let quality = scorer::score(&profile);
    let matches = data.matcher.match_all(&profile);
    let gaps = data.matcher.detect_gaps(&profile, "");
    let roadmap = data.roadmaps.build(&profile, "");

    Ok(HttpResponse::Ok().json(ApiResponse::success(serde_json::json!({
        "profile": profile,
        "quality": quality,
        "career_matches": matches,
        "skill_gaps": gaps,
        "roadmap": roadmap,
    }))))
}

/// Mentor chat, optionally personalized with a stored profile
async fn chat(data: web::Data<Arc<AppState>>, req: web::Json<ChatRequest>) -> impl Responder {
    let profile = req.resume_id.as_ref().and_then(|id| {
        let profiles = data.profiles.lock().unwrap();
        profiles.get(id).cloned()
    });
    let response = data.mentor.reply(&req.message, profile.as_ref());
    HttpResponse::Ok().json(ApiResponse::success(ChatResponse { response }))
}

// ============================================================
// SERVER CONFIGURATION
// ============================================================

/// Configure and run the API server
pub async fn run_server(host: &str, port: u16) -> std::io::Result<()> {
    let state = Arc::new(AppState::new());

    log::info!("Career Mentor API starting at http://{}:{}", host, port);
    log::info!("  POST /api/resume                - Upload resume text");
    log::info!("  GET  /api/resume/:id            - Get extracted profile");
    log::info!("  GET  /api/analyze/:id           - Resume quality report");
    log::info!("  GET  /api/skill-gaps/:id        - Skill gaps (?target_role=)");
    log::info!("  GET  /api/career-paths/:id      - Ranked career matches");
    log::info!("  GET  /api/learning-roadmap/:id  - Learning roadmap (?target_career=)");
    log::info!("  GET  /api/dashboard/:id         - Aggregate dashboard");
    log::info!("  POST /api/chat                  - Mentor chat");

    HttpServer::new(move || {
        let cors = Cors::default()
            .allow_any_origin()
            .allow_any_method()
            .allow_any_header();

        App::new()
            .wrap(cors)
            .app_data(web::Data::new(state.clone()))
            .route("/", web::get().to(index))
            .route("/health", web::get().to(health_check))
            .route("/api/resume", web::post().to(upload_resume))
            .route("/api/resume/{id}", web::get().to(get_resume))
            .route("/api/analyze/{id}", web::get().to(analyze_resume))
            .route("/api/skill-gaps/{id}", web::get().to(skill_gaps))
            .route("/api/career-paths/{id}", web::get().to(career_paths))
            .route("/api/learning-roadmap/{id}", web::get().to(learning_roadmap))
            .route("/api/dashboard/{id}", web::get().to(dashboard))
            .route("/api/chat", web::post().to(chat))
    })
    .bind((host, port))?
    .run()
    .await
}
