use axum::http::StatusCode;

/// Failures of the fact loading and selection core.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FactError {
    #[error("failed to load {resource}: {reason}")]
    Load { resource: String, reason: String },

    #[error("no facts available")]
    EmptyStore,
}

impl FactError {
    pub fn load(resource: impl Into<String>, reason: impl ToString) -> Self {
        Self::Load {
            resource: resource.into(),
            reason: reason.to_string(),
        }
    }
}

#[derive(Debug)]
pub struct AppError {
    pub status: StatusCode,
    pub message: String,
}

impl AppError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            message: message.into(),
        }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::NOT_FOUND,
            message: message.into(),
        }
    }

    pub fn internal(err: impl std::error::Error) -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            message: err.to_string(),
        }
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        Self::internal(err)
    }
}

impl From<FactError> for AppError {
    fn from(err: FactError) -> Self {
        let status = match err {
            FactError::Load { .. } => StatusCode::SERVICE_UNAVAILABLE,
            FactError::EmptyStore => StatusCode::NOT_FOUND,
        };
        Self {
            status,
            message: err.to_string(),
        }
    }
}

impl axum::response::IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        (self.status, self.message).into_response()
    }
}
