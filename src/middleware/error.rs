use std::fmt;

use axum::{http::StatusCode, response::IntoResponse};
use serde::{Deserialize, Serialize};
use tracing::error;
use uuid::Uuid;

#[derive(Debug, PartialEq, Eq, Clone)]
pub struct CtxError {
    pub error: AppError,
    pub req_id: Uuid,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum AppError {
    Generic { description: String },
    ValidationFail { description: String },
    Serde { source: String },
    StoreUnavailable { source: String },
    TransactionConflict { source: String },
    LocalStorageUnavailable { source: String },
    LikeUpdateFail { project_id: String, reason: String },
}

/// ApiError has to have the req_id to report to the client and implements IntoResponse.
pub type CtxResult<T> = core::result::Result<T, CtxError>;
/// Any error for storing before composing a response.
pub type AppResult<T> = core::result::Result<T, AppError>;

impl std::error::Error for AppError {}

impl AppError {
    /// Store errors that mean the write did not take effect.
    pub fn is_store_failure(&self) -> bool {
        matches!(
            self,
            AppError::StoreUnavailable { .. } | AppError::TransactionConflict { .. }
        )
    }
}

impl From<AppError> for CtxError {
    fn from(value: AppError) -> Self {
        CtxError {
            req_id: Uuid::new_v4(),
            error: value,
        }
    }
}

const INTERNAL: &str = "Internal error";

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Generic { description } => write!(f, "{description}"),
            Self::ValidationFail { description } => write!(f, "{description}"),
            Self::Serde { source } => write!(f, "Serde error - {source}"),
            Self::StoreUnavailable { .. } => write!(f, "Like store is unavailable"),
            Self::TransactionConflict { .. } => write!(f, "Like store is busy, try again"),
            Self::LocalStorageUnavailable { .. } => write!(f, "{INTERNAL}"),
            Self::LikeUpdateFail { project_id, .. } => {
                write!(f, "Could not update likes for project {project_id}")
            }
        }
    }
}

#[derive(Serialize, Deserialize, Debug)]
pub struct ErrorResponseBody {
    error: String,
    req_id: String,
}

impl ErrorResponseBody {
    pub fn new(error: String, req_id: Option<String>) -> Self {
        ErrorResponseBody {
            error,
            req_id: req_id.unwrap_or_else(|| Uuid::new_v4().to_string()),
        }
    }
}

// REST error response
impl IntoResponse for CtxError {
    fn into_response(self) -> axum::response::Response {
        error!("->> {:<12} - into_response - {self:?}", "ERROR");
        let status_code = match self.error {
            AppError::ValidationFail { .. } | AppError::Serde { .. } => StatusCode::BAD_REQUEST,
            AppError::StoreUnavailable { .. }
            | AppError::TransactionConflict { .. }
            | AppError::LikeUpdateFail { .. } => StatusCode::SERVICE_UNAVAILABLE,
            AppError::Generic { .. } | AppError::LocalStorageUnavailable { .. } => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };
        let err = self.error.clone();
        let body = ErrorResponseBody::new(self.error.to_string(), Some(self.req_id.to_string()));
        let mut response = (status_code, axum::Json(body)).into_response();
        // Insert the real Error into the response - for the logger
        response.extensions_mut().insert(err);
        response
    }
}

// External Errors
impl From<serde_json::Error> for AppError {
    fn from(value: serde_json::Error) -> Self {
        Self::Serde {
            source: value.to_string(),
        }
    }
}

impl From<surrealdb::Error> for AppError {
    fn from(value: surrealdb::Error) -> Self {
        let source = value.to_string();
        let lowered = source.to_lowercase();
        // the engine reports the losing side of a write-write race this way
        if lowered.contains("can be retried") || lowered.contains("conflict") {
            Self::TransactionConflict { source }
        } else {
            Self::StoreUnavailable { source }
        }
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(value: validator::ValidationErrors) -> Self {
        Self::ValidationFail {
            description: value.to_string(),
        }
    }
}
