use axum::response::{IntoResponse, Response};
use axum_helpers::AppError;
use sea_orm::DbErr;
use std::time::Duration;
use thiserror::Error;

/// Failures reported by a [`CrudRepository`](crate::CrudRepository).
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("no matching row")]
    NotFound,

    #[error("store call exceeded {0:?}")]
    Timeout(Duration),

    #[error(transparent)]
    Database(#[from] DbErr),
}

pub type StoreResult<T> = Result<T, StoreError>;

/// Message sent to clients for every store failure; the cause stays in the logs.
pub const INTERNAL_MESSAGE: &str = "internal server error";

/// Domain error of a CRUD operation, tagged with the operation's trace code.
#[derive(Debug, Error)]
pub enum CrudError {
    #[error("[{trace_id}] {message}")]
    Invalid {
        trace_id: &'static str,
        message: String,
    },

    #[error("[{trace_id}] {message}")]
    NotFound {
        trace_id: &'static str,
        message: String,
    },

    #[error("[{trace_id}] internal server error")]
    Internal {
        trace_id: &'static str,
        #[source]
        source: StoreError,
    },
}

pub type CrudResult<T> = Result<T, CrudError>;

impl CrudError {
    pub fn invalid(trace_id: &'static str, message: impl Into<String>) -> Self {
        Self::Invalid {
            trace_id,
            message: message.into(),
        }
    }

    pub fn trace_id(&self) -> &'static str {
        match self {
            Self::Invalid { trace_id, .. }
            | Self::NotFound { trace_id, .. }
            | Self::Internal { trace_id, .. } => trace_id,
        }
    }
}

impl From<CrudError> for AppError {
    fn from(err: CrudError) -> Self {
        match err {
            CrudError::Invalid { trace_id, message } => AppError::bad_request(trace_id, message),
            CrudError::NotFound { trace_id, message } => AppError::not_found(trace_id, message),
            CrudError::Internal { trace_id, .. } => AppError::internal(trace_id, INTERNAL_MESSAGE),
        }
    }
}

impl IntoResponse for CrudError {
    fn into_response(self) -> Response {
        AppError::from(self).into_response()
    }
}
