use crate::config::ConfigError;
use crate::telemetry::TelemetryError;
use crate::workflows::apply::SubmissionError;
use crate::workflows::search::{InputError, PayloadError, SearchError};
use crate::workflows::session::{SessionError, UnknownDetailView};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use std::fmt;

#[derive(Debug)]
pub enum AppError {
    Config(ConfigError),
    Telemetry(TelemetryError),
    Io(std::io::Error),
    Server(axum::Error),
    Input(InputError),
    Payload(PayloadError),
    Search(SearchError),
    Submission(SubmissionError),
    Session(SessionError),
    UnknownView(UnknownDetailView),
    SearchInFlight,
    SubmissionInFlight,
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Config(err) => write!(f, "configuration error: {}", err),
            AppError::Telemetry(err) => write!(f, "telemetry error: {}", err),
            AppError::Io(err) => write!(f, "io error: {}", err),
            AppError::Server(err) => write!(f, "server error: {}", err),
            AppError::Input(err) => write!(f, "invalid submission: {}", err),
            AppError::Payload(err) => write!(f, "invalid payload: {}", err),
            AppError::Search(err) => write!(f, "search failed: {}", err),
            AppError::Submission(err) => write!(f, "submission failed: {}", err),
            AppError::Session(err) => write!(f, "{}", err),
            AppError::UnknownView(err) => write!(f, "{}", err),
            AppError::SearchInFlight => f.write_str("a search is already in progress"),
            AppError::SubmissionInFlight => {
                f.write_str("an application submission is already in progress")
            }
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::Config(err) => Some(err),
            AppError::Telemetry(err) => Some(err),
            AppError::Io(err) => Some(err),
            AppError::Server(err) => Some(err),
            AppError::Input(err) => Some(err),
            AppError::Payload(err) => Some(err),
            AppError::Search(err) => Some(err),
            AppError::Submission(err) => Some(err),
            AppError::Session(err) => Some(err),
            AppError::UnknownView(err) => Some(err),
            AppError::SearchInFlight | AppError::SubmissionInFlight => None,
        }
    }
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Input(_) | AppError::Payload(_) => StatusCode::BAD_REQUEST,
            AppError::UnknownView(_) => StatusCode::NOT_FOUND,
            AppError::SearchInFlight | AppError::SubmissionInFlight | AppError::Session(_) => {
                StatusCode::CONFLICT
            }
            AppError::Search(_) | AppError::Submission(_) => StatusCode::BAD_GATEWAY,
            AppError::Config(_)
            | AppError::Telemetry(_)
            | AppError::Io(_)
            | AppError::Server(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = Json(json!({ "error": self.to_string() }));
        (status, body).into_response()
    }
}

impl From<ConfigError> for AppError {
    fn from(value: ConfigError) -> Self {
        Self::Config(value)
    }
}

impl From<TelemetryError> for AppError {
    fn from(value: TelemetryError) -> Self {
        Self::Telemetry(value)
    }
}

impl From<std::io::Error> for AppError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<axum::Error> for AppError {
    fn from(value: axum::Error) -> Self {
        Self::Server(value)
    }
}

impl From<InputError> for AppError {
    fn from(value: InputError) -> Self {
        Self::Input(value)
    }
}

impl From<PayloadError> for AppError {
    fn from(value: PayloadError) -> Self {
        Self::Payload(value)
    }
}

impl From<SearchError> for AppError {
    fn from(value: SearchError) -> Self {
        Self::Search(value)
    }
}

impl From<SubmissionError> for AppError {
    fn from(value: SubmissionError) -> Self {
        Self::Submission(value)
    }
}

impl From<SessionError> for AppError {
    fn from(value: SessionError) -> Self {
        Self::Session(value)
    }
}

impl From<UnknownDetailView> for AppError {
    fn from(value: UnknownDetailView) -> Self {
        Self::UnknownView(value)
    }
}
