use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use diesel::result::{DatabaseErrorKind, Error as DieselError};
use serde_json::json;

use crate::utils::errors::TrackerError;

#[derive(Debug)]
pub enum ApiError {
    BadRequest(String),
    Unauthorized(String),
    NotFound(String),
    InternalError(String),
    DatabaseError(String),
}

impl ApiError {
    pub fn bad_request(msg: impl Into<String>) -> Self {
        Self::BadRequest(msg.into())
    }

    pub fn unauthorized(msg: impl Into<String>) -> Self {
        Self::Unauthorized(msg.into())
    }

    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }

    pub fn internal_error(msg: impl Into<String>) -> Self {
        Self::InternalError(msg.into())
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::InternalError(_) => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::DatabaseError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Faults keep their detail in the logs; the caller only sees a generic message.
    pub fn message(&self) -> String {
        match self {
            ApiError::BadRequest(msg) => msg.clone(),
            ApiError::Unauthorized(msg) => msg.clone(),
            ApiError::NotFound(msg) => format!("{} not found", msg),
            ApiError::InternalError(_) => "Internal server error".to_string(),
            ApiError::DatabaseError(_) => "Failed to access the data store".to_string(),
        }
    }
}

impl From<TrackerError> for ApiError {
    fn from(err: TrackerError) -> Self {
        match err {
            TrackerError::NotFound(what) => ApiError::NotFound(what),
            TrackerError::Validation(msg) => ApiError::BadRequest(msg),
        }
    }
}

impl From<anyhow::Error> for ApiError {
    fn from(err: anyhow::Error) -> Self {
        if let Some(domain) = err.downcast_ref::<TrackerError>() {
            return domain.clone().into();
        }

        if let Some(db_err) = err.downcast_ref::<DieselError>() {
            match db_err {
                DieselError::NotFound => return ApiError::not_found("Record"),
                DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _) => {
                    return ApiError::bad_request("Record already exists");
                }
                DieselError::DatabaseError(DatabaseErrorKind::ForeignKeyViolation, _) => {
                    return ApiError::bad_request("Referenced record does not exist");
                }
                _ => {}
            }
        }

        ApiError::DatabaseError(format!("{:#}", err))
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        match &self {
            ApiError::InternalError(detail) | ApiError::DatabaseError(detail) => {
                tracing::error!(error = %detail, "request failed");
            }
            other => {
                tracing::debug!(status = %status, message = %other.message(), "request rejected");
            }
        }

        (status, Json(json!({ "error": self.message() }))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::anyhow;

    #[test]
    fn test_domain_errors_map_to_status() {
        let not_found: ApiError = anyhow::Error::from(TrackerError::not_found("Expense")).into();
        assert_eq!(not_found.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(not_found.message(), "Expense not found");

        let invalid: ApiError =
            anyhow::Error::from(TrackerError::validation("Cannot delete default categories")).into();
        assert_eq!(invalid.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(invalid.message(), "Cannot delete default categories");
    }

    #[test]
    fn test_diesel_not_found_maps_to_404() {
        let err: ApiError = anyhow::Error::from(DieselError::NotFound).into();
        assert_eq!(err.status_code(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_faults_hide_detail() {
        let err: ApiError = anyhow!("connection refused (os error 111)").into();
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert!(!err.message().contains("os error"));
    }

    #[test]
    fn test_response_body_shape() {
        let response = ApiError::bad_request("amount is required").into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
