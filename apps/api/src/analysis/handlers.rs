use axum::{
    extract::{Multipart, State},
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use crate::analysis::catalog::SkillSet;
use crate::analysis::fields::{extract_candidate_name, extract_certifications};
use crate::analysis::matcher::{match_job_description, MatchResult};
use crate::errors::AppError;
use crate::extractors::AppJson;
use crate::extraction::DocumentKind;
use crate::resumes::handlers::load_resume;
use crate::resumes::upload::{decode, parse_max_certifications, resolve_kind, UploadForm};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct MatchRequest {
    pub resume_handle: Uuid,
    pub job_description: String,
}

/// Everything the one-shot analysis produces for a single upload.
#[derive(Debug, Serialize)]
pub struct AnalysisReport {
    pub file_name: Option<String>,
    pub kind: DocumentKind,
    pub page_count: usize,
    /// "Name not found" when no name-shaped span is on the first page.
    pub candidate_name: String,
    pub skills: SkillSet,
    /// `null` when the resume has no CERTIFICATES section.
    pub certifications: Option<Vec<String>>,
    #[serde(rename = "match")]
    pub match_result: MatchResult,
}

fn require_job_description(text: Option<&str>) -> Result<&str, AppError> {
    match text {
        Some(text) if !text.trim().is_empty() => Ok(text),
        _ => Err(AppError::InputMissing(
            "Please enter a job description to analyze".to_string(),
        )),
    }
}

/// POST /match
pub async fn handle_match(
    State(state): State<AppState>,
    AppJson(req): AppJson<MatchRequest>,
) -> Result<Json<MatchResult>, AppError> {
    let job_description = require_job_description(Some(req.job_description.as_str()))?;
    let record = load_resume(&state, req.resume_handle).await?;

    let candidate = state.catalog.extract(&record.document.text());
    let result = match_job_description(&state.catalog, &candidate, job_description);

    info!(
        resume_id = %record.id,
        score = result.score,
        common = result.common_skills.len(),
        "Match computed"
    );
    Ok(Json(result))
}

/// POST /analyze
/// Multipart: `file`, optional `type`, `job_description`, optional `max_certifications`.
/// Stateless: nothing is stored.
pub async fn handle_analyze(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<Json<AnalysisReport>, AppError> {
    let mut form = UploadForm::read(multipart, state.config.max_upload_bytes).await?;
    let file = form.take_file()?;
    let job_description = require_job_description(form.job_description.as_deref())?.to_string();
    let max_certifications = parse_max_certifications(
        form.max_certifications.as_deref(),
        state.config.default_max_certifications,
    )?;
    let kind = resolve_kind(&file, form.type_tag.as_deref())?;

    let file_name = file.file_name.clone();
    let document = decode(file, kind).await?;
    let text = document.text();

    let skills = state.catalog.extract(&text);
    let match_result = match_job_description(&state.catalog, &skills, &job_description);
    let candidate_name = extract_candidate_name(document.first_page()).to_string();
    let certifications = extract_certifications(&text, max_certifications).ok();

    info!(
        %kind,
        score = match_result.score,
        skills = skills.len(),
        "Resume analyzed"
    );

    Ok(Json(AnalysisReport {
        file_name,
        kind,
        page_count: document.page_count(),
        candidate_name,
        skills,
        certifications,
        match_result,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_job_description_is_input_missing() {
        assert!(matches!(
            require_job_description(None),
            Err(AppError::InputMissing(_))
        ));
        assert!(matches!(
            require_job_description(Some("   \n")),
            Err(AppError::InputMissing(_))
        ));
        assert_eq!(require_job_description(Some("Rust")).unwrap(), "Rust");
    }
}
