//! Multipart upload handling shared by `POST /resumes` and `POST /analyze`.

use axum::extract::Multipart;
use bytes::Bytes;
use tracing::{debug, warn};

use crate::errors::AppError;
use crate::extraction::{self, DocumentKind, ExtractedDocument};

const OCTET_STREAM: &str = "application/octet-stream";

/// The uploaded file part.
#[derive(Debug, Clone)]
pub struct UploadedFile {
    pub file_name: Option<String>,
    pub content_type: Option<String>,
    pub bytes: Bytes,
}

/// All fields a resume upload form may carry.
#[derive(Debug, Default)]
pub struct UploadForm {
    pub file: Option<UploadedFile>,
    /// Explicit type tag; overrides the part's content type.
    pub type_tag: Option<String>,
    pub job_description: Option<String>,
    pub max_certifications: Option<String>,
}

impl UploadForm {
    /// Drains the multipart stream. Unknown fields are skipped.
    /// `limit` is the body cap, reported back when the stream is cut off.
    pub async fn read(mut multipart: Multipart, limit: usize) -> Result<Self, AppError> {
        let mut form = UploadForm::default();
        let fail = move |err| AppError::from_multipart(err, limit);

        while let Some(field) = multipart.next_field().await.map_err(fail)? {
            let name = field.name().unwrap_or_default().to_string();
            match name.as_str() {
                "file" | "resume" => {
                    let file_name = field.file_name().map(String::from);
                    let content_type = field.content_type().map(String::from);
                    let bytes = field.bytes().await.map_err(fail)?;
                    form.file = Some(UploadedFile {
                        file_name,
                        content_type,
                        bytes,
                    });
                }
                "type" => form.type_tag = non_blank(field.text().await.map_err(fail)?),
                "job_description" => {
                    form.job_description = non_blank(field.text().await.map_err(fail)?)
                }
                "max_certifications" => {
                    form.max_certifications = non_blank(field.text().await.map_err(fail)?)
                }
                other => debug!("Ignoring unknown multipart field '{other}'"),
            }
        }

        Ok(form)
    }

    pub fn take_file(&mut self) -> Result<UploadedFile, AppError> {
        self.file
            .take()
            .ok_or_else(|| AppError::InputMissing("Please upload a resume first".to_string()))
    }
}

/// Picks the document kind: explicit tag, then content type, then file extension.
/// A tag or content type that is present but unrecognised is an error, never a fallback.
pub fn resolve_kind(file: &UploadedFile, type_tag: Option<&str>) -> Result<DocumentKind, AppError> {
    if let Some(tag) = type_tag {
        return Ok(DocumentKind::from_tag(tag)?);
    }

    if let Some(content_type) = file.content_type.as_deref() {
        if !content_type.trim().eq_ignore_ascii_case(OCTET_STREAM) {
            return Ok(DocumentKind::from_tag(content_type)?);
        }
    }

    file.file_name
        .as_deref()
        .and_then(DocumentKind::from_file_name)
        .ok_or_else(|| {
            AppError::InputMissing(
                "Document type is missing: send a `type` field or a PDF/DOCX content type"
                    .to_string(),
            )
        })
}

/// Decodes the upload off the async executor.
pub async fn decode(file: UploadedFile, kind: DocumentKind) -> Result<ExtractedDocument, AppError> {
    let bytes = file.bytes;
    let decoded = tokio::task::spawn_blocking(move || extraction::extract_document(&bytes, kind))
        .await
        .map_err(|e| AppError::Extraction(format!("decoder task failed: {e}")))?;

    decoded.map_err(|e| {
        warn!(%kind, file_name = ?file.file_name, "Failed to decode upload: {e}");
        AppError::from(e)
    })
}

pub fn parse_max_certifications(raw: Option<&str>, default: usize) -> Result<usize, AppError> {
    match raw {
        None => Ok(default),
        Some(raw) => raw.trim().parse::<usize>().map_err(|_| {
            AppError::Validation(format!(
                "max_certifications must be a non-negative integer, got '{raw}'"
            ))
        }),
    }
}

fn non_blank(value: String) -> Option<String> {
    if value.trim().is_empty() {
        None
    } else {
        Some(value)
    }
}
