use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use std::fmt;

pub const CONNECTION_FAILED: &str = "Database connection failed";

#[derive(Debug)]
pub enum AppError {
    ConnectionFailed(sqlx::Error),
    DatabaseError(sqlx::Error),
    ConfigError(String),
    NotFound(String),
    BadRequest(String),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::ConnectionFailed(_)
            | AppError::DatabaseError(_)
            | AppError::ConfigError(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
        }
    }

    pub fn is_connection_failure(&self) -> bool {
        matches!(self, AppError::ConnectionFailed(_))
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::ConnectionFailed(_) => f.write_str(CONNECTION_FAILED),
            // The database's own text is passed through untouched.
            AppError::DatabaseError(e) => match e.as_database_error() {
                Some(db) => f.write_str(db.message()),
                None => write!(f, "{}", e),
            },
            AppError::ConfigError(msg) => write!(f, "Configuration error: {}", msg),
            AppError::NotFound(msg) | AppError::BadRequest(msg) => f.write_str(msg),
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::ConnectionFailed(e) | AppError::DatabaseError(e) => Some(e),
            _ => None,
        }
    }
}

impl From<sqlx::Error> for AppError {
    fn from(err: sqlx::Error) -> Self {
        if is_connection_error(&err) {
            AppError::ConnectionFailed(err)
        } else {
            AppError::DatabaseError(err)
        }
    }
}

impl From<std::env::VarError> for AppError {
    fn from(err: std::env::VarError) -> Self {
        AppError::ConfigError(err.to_string())
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::ConnectionFailed(ref e) => {
                tracing::error!("{}: {}", CONNECTION_FAILED, e);
            }
            AppError::DatabaseError(ref e) => {
                tracing::debug!("Database error: {:?}", e);
            }
            AppError::ConfigError(ref msg) => {
                tracing::error!("Configuration error: {}", msg);
            }
            AppError::NotFound(_) | AppError::BadRequest(_) => {}
        }

        let body = Json(json!({
            "error": self.to_string(),
        }));

        (self.status(), body).into_response()
    }
}

/// Whether the error means a connection could not be established or kept,
/// as opposed to a statement the server rejected.
fn is_connection_error(err: &sqlx::Error) -> bool {
    match err {
        sqlx::Error::Io(_)
        | sqlx::Error::Tls(_)
        | sqlx::Error::PoolTimedOut
        | sqlx::Error::PoolClosed
        | sqlx::Error::WorkerCrashed => true,
        sqlx::Error::Database(db) => db.code().is_some_and(|code| is_connection_sqlstate(&code)),
        _ => false,
    }
}

// 08: connection exception, 28: invalid authorization, 3D000: unknown database
fn is_connection_sqlstate(code: &str) -> bool {
    code.starts_with("08") || code.starts_with("28") || code == "3D000"
}
