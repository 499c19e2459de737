use axum::{
    extract::{
        multipart::MultipartError,
        rejection::{JsonRejection, PathRejection, QueryRejection},
    },
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;
use uuid::Uuid;

use crate::analysis::fields::SectionNotFound;
use crate::extraction::ExtractError;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    InputMissing(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("{0}")]
    UnsupportedFormat(String),

    #[error("{0}")]
    PayloadTooLarge(String),

    #[error("{0}")]
    SectionNotFound(String),

    #[error("Resume {0} not found")]
    ResumeNotFound(Uuid),

    #[error("Extraction error: {0}")]
    Extraction(String),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::InputMissing(_)
            | AppError::Validation(_)
            | AppError::UnsupportedFormat(_) => StatusCode::BAD_REQUEST,
            AppError::PayloadTooLarge(_) => StatusCode::PAYLOAD_TOO_LARGE,
            AppError::SectionNotFound(_) | AppError::ResumeNotFound(_) => StatusCode::NOT_FOUND,
            AppError::Extraction(_) | AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            AppError::InputMissing(_) => "INPUT_MISSING",
            AppError::Validation(_) => "VALIDATION_ERROR",
            AppError::UnsupportedFormat(_) => "UNSUPPORTED_FORMAT",
            AppError::PayloadTooLarge(_) => "PAYLOAD_TOO_LARGE",
            AppError::SectionNotFound(_) => "SECTION_NOT_FOUND",
            AppError::ResumeNotFound(_) => "RESUME_NOT_FOUND",
            AppError::Extraction(_) => "EXTRACTION_ERROR",
            AppError::Internal(_) => "INTERNAL_ERROR",
        }
    }
}

impl From<ExtractError> for AppError {
    fn from(err: ExtractError) -> Self {
        match err {
            ExtractError::UnsupportedFormat(_) => AppError::UnsupportedFormat(err.to_string()),
            ExtractError::Empty => AppError::InputMissing(err.to_string()),
            ExtractError::Pdf(_) | ExtractError::Docx(_) => AppError::Extraction(err.to_string()),
        }
    }
}

impl From<SectionNotFound> for AppError {
    fn from(err: SectionNotFound) -> Self {
        AppError::SectionNotFound(err.to_string())
    }
}

impl AppError {
    /// Maps a multipart stream failure; `limit` is the configured upload cap.
    pub fn from_multipart(err: MultipartError, limit: usize) -> Self {
        if err.status() == StatusCode::PAYLOAD_TOO_LARGE {
            AppError::PayloadTooLarge(format!(
                "Upload exceeds the {limit} byte limit. Upload a smaller file."
            ))
        } else {
            AppError::Validation(format!("Invalid multipart upload: {}", err.body_text()))
        }
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        let detail = rejection.body_text();
        if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE {
            return AppError::PayloadTooLarge(detail);
        }
        match rejection {
            JsonRejection::JsonDataError(_) if detail.contains("missing field") => {
                AppError::InputMissing(detail)
            }
            _ => AppError::Validation(detail),
        }
    }
}

impl From<PathRejection> for AppError {
    fn from(rejection: PathRejection) -> Self {
        match rejection {
            PathRejection::FailedToDeserializePathParams(_) => {
                AppError::Validation(format!("Invalid resume handle: {}", rejection.body_text()))
            }
            _ => AppError::Internal(anyhow::anyhow!(rejection.body_text())),
        }
    }
}

impl From<QueryRejection> for AppError {
    fn from(rejection: QueryRejection) -> Self {
        AppError::Validation(rejection.body_text())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = match &self {
            AppError::Extraction(msg) => {
                tracing::error!("Extraction error: {msg}");
                self.to_string()
            }
            AppError::Internal(e) => {
                tracing::error!("Internal error: {e:?}");
                "An internal server error occurred".to_string()
            }
            _ => self.to_string(),
        };

        let body = Json(json!({
            "error": message,
            "code": self.code(),
        }));

        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        assert_eq!(
            AppError::InputMissing("x".into()).status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AppError::UnsupportedFormat("x".into()).status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AppError::SectionNotFound("x".into()).status(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            AppError::ResumeNotFound(Uuid::nil()).status(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            AppError::Extraction("x".into()).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_extract_errors_map_to_taxonomy() {
        let unsupported: AppError = ExtractError::UnsupportedFormat("txt".into()).into();
        assert!(matches!(unsupported, AppError::UnsupportedFormat(ref m) if m.contains("txt")));

        let empty: AppError = ExtractError::Empty.into();
        assert!(matches!(empty, AppError::InputMissing(_)));

        let pdf: AppError = ExtractError::Pdf("bad xref".into()).into();
        assert!(matches!(pdf, AppError::Extraction(ref m) if m.contains("bad xref")));
    }

    #[test]
    fn test_payload_too_large_is_413() {
        let err = AppError::PayloadTooLarge("Upload exceeds the 64 byte limit".into());
        assert_eq!(err.status(), StatusCode::PAYLOAD_TOO_LARGE);
        assert_eq!(err.code(), "PAYLOAD_TOO_LARGE");
    }

    #[test]
    fn test_section_not_found_maps_to_404() {
        let err: AppError = SectionNotFound.into();
        assert_eq!(err.status(), StatusCode::NOT_FOUND);
        assert_eq!(err.code(), "SECTION_NOT_FOUND");
    }

    #[tokio::test]
    async fn test_error_body_shape() {
        let response = AppError::UnsupportedFormat("Unsupported document type 'txt'".into())
            .into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["error"], "Unsupported document type 'txt'");
        assert_eq!(body["code"], "UNSUPPORTED_FORMAT");
    }

    #[tokio::test]
    async fn test_internal_error_detail_is_not_leaked() {
        let response = AppError::Internal(anyhow::anyhow!("task join failure")).into_response();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["error"], "An internal server error occurred");
    }
}
