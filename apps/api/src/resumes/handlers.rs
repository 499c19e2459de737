use std::sync::Arc;

use axum::{
    extract::{Multipart, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use crate::analysis::catalog::SkillSet;
use crate::analysis::fields::{extract_candidate_name, extract_certifications, CandidateName};
use crate::errors::AppError;
use crate::extractors::{AppPath, AppQuery};
use crate::resumes::store::{ResumeRecord, ResumeSummary};
use crate::resumes::upload::{decode, resolve_kind, UploadForm};
use crate::state::AppState;

/// `{"name": "..."}` when found, `{"error": "Name not found"}` otherwise. Both are 200.
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum NameResponse {
    Found { name: String },
    NotFound { error: String },
}

impl From<CandidateName> for NameResponse {
    fn from(name: CandidateName) -> Self {
        match name {
            CandidateName::Found(name) => NameResponse::Found { name },
            CandidateName::NotFound => NameResponse::NotFound {
                error: CandidateName::NotFound.to_string(),
            },
        }
    }
}

#[derive(Debug, Serialize)]
pub struct SkillsResponse {
    pub skills: SkillSet,
}

#[derive(Debug, Serialize)]
pub struct CertificationsResponse {
    pub certifications: Vec<String>,
}

#[derive(Debug, Deserialize)]
pub struct CertificationsQuery {
    pub max: Option<usize>,
}

pub(crate) async fn load_resume(state: &AppState, id: Uuid) -> Result<Arc<ResumeRecord>, AppError> {
    state
        .resumes
        .get(id)
        .await
        .ok_or(AppError::ResumeNotFound(id))
}

/// POST /resumes
/// Multipart: `file` plus optional `type`. Decodes once and returns a handle.
pub async fn handle_upload(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<(StatusCode, Json<ResumeSummary>), AppError> {
    let mut form = UploadForm::read(multipart, state.config.max_upload_bytes).await?;
    let file = form.take_file()?;
    let kind = resolve_kind(&file, form.type_tag.as_deref())?;

    let file_name = file.file_name.clone();
    let size = file.bytes.len();
    let document = decode(file, kind).await?;

    let record = state
        .resumes
        .insert(ResumeRecord::new(file_name, document))
        .await;
    let stored = state.resumes.len().await;
    info!(
        resume_id = %record.id,
        %kind,
        size,
        pages = record.document.page_count(),
        stored,
        "Resume uploaded"
    );

    Ok((StatusCode::CREATED, Json(record.summary())))
}

/// GET /resumes/:handle
pub async fn handle_get_resume(
    State(state): State<AppState>,
    AppPath(handle): AppPath<Uuid>,
) -> Result<Json<ResumeSummary>, AppError> {
    let record = load_resume(&state, handle).await?;
    Ok(Json(record.summary()))
}

/// POST /resumes/:handle/name
pub async fn handle_name(
    State(state): State<AppState>,
    AppPath(handle): AppPath<Uuid>,
) -> Result<Json<NameResponse>, AppError> {
    let record = load_resume(&state, handle).await?;
    let name = extract_candidate_name(record.document.first_page());
    Ok(Json(name.into()))
}

/// POST /resumes/:handle/skills
pub async fn handle_skills(
    State(state): State<AppState>,
    AppPath(handle): AppPath<Uuid>,
) -> Result<Json<SkillsResponse>, AppError> {
    let record = load_resume(&state, handle).await?;
    let skills = state.catalog.extract(&record.document.text());
    Ok(Json(SkillsResponse { skills }))
}

/// POST /resumes/:handle/certifications?max=N
pub async fn handle_certifications(
    State(state): State<AppState>,
    AppPath(handle): AppPath<Uuid>,
    AppQuery(query): AppQuery<CertificationsQuery>,
) -> Result<Json<CertificationsResponse>, AppError> {
    let record = load_resume(&state, handle).await?;
    let max = query
        .max
        .unwrap_or(state.config.default_max_certifications);
    let certifications = extract_certifications(&record.document.text(), max)?;
    Ok(Json(CertificationsResponse { certifications }))
}
