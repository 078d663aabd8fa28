use axum::extract::multipart::MultipartError;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use sqlx::Error as SqlxError;
use thiserror::Error as ThisError;
use tracing::error;

#[derive(Debug, ThisError)]
pub enum AdminError {
    #[error("Database error: {0}")]
    Database(#[from] SqlxError),

    #[error("Filesystem error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Malformed multipart body: {0}")]
    Multipart(#[from] MultipartError),

    #[error("Missing field `{0}`")]
    MissingField(&'static str),

    #[error("Invalid value for field `{0}`")]
    InvalidField(&'static str),

    #[error("Values cannot be negative: `{0}`")]
    NegativeField(&'static str),

    #[error("Unknown entity type `{0}`")]
    UnknownEntityType(String),

    #[error("{0} not found")]
    NotFound(&'static str),

    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Sign in required")]
    SignInRequired,

    #[error("Admin rights required")]
    AdminRequired,

    #[error("Login `{0}` is already taken")]
    LoginTaken(String),
}

impl IntoResponse for AdminError {
    fn into_response(self) -> axum::response::Response {
        let status = match &self {
            AdminError::Database(e) => {
                error!(error = %e, "database operation failed");
                StatusCode::INTERNAL_SERVER_ERROR
            }
            AdminError::Io(e) => {
                error!(error = %e, "filesystem operation failed");
                StatusCode::INTERNAL_SERVER_ERROR
            }
            AdminError::Multipart(_)
            | AdminError::MissingField(_)
            | AdminError::InvalidField(_)
            | AdminError::NegativeField(_)
            | AdminError::UnknownEntityType(_) => StatusCode::BAD_REQUEST,
            AdminError::NotFound(_) => StatusCode::NOT_FOUND,
            AdminError::InvalidCredentials | AdminError::SignInRequired => StatusCode::UNAUTHORIZED,
            AdminError::AdminRequired => StatusCode::FORBIDDEN,
            AdminError::LoginTaken(_) => StatusCode::CONFLICT,
        };

        let body = match status {
            // Internal failure details stay in the logs.
            StatusCode::INTERNAL_SERVER_ERROR => "Internal server error".to_string(),
            _ => self.to_string(),
        };
        (status, body).into_response()
    }
}
