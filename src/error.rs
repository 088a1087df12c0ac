use crate::envelope::{ApiError, ApiResponse};
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};

#[derive(thiserror::Error, Debug)]
pub enum AppError {
    #[error("Route not found")]
    RouteNotFound,

    #[error("Slide index {index} out of range (deck has {len} slides)")]
    SlideOutOfRange { index: usize, len: usize },

    #[error("Deck contains no slides")]
    EmptyDeck,

    #[error("Failed to read deck {path}: {source}")]
    DeckIo {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse deck {path}: {source}")]
    DeckParse {
        path: String,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl AppError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::RouteNotFound => StatusCode::NOT_FOUND,
            AppError::SlideOutOfRange { .. } => StatusCode::BAD_REQUEST,
            AppError::EmptyDeck
            | AppError::DeckIo { .. }
            | AppError::DeckParse { .. }
            | AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn to_api_error(&self) -> ApiError {
        ApiError {
            status_code: self.status_code().as_u16(),
            message: self.to_string(),
            details: None,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let ApiError {
            status_code,
            message,
            ..
        } = self.to_api_error();
        let status = StatusCode::from_u16(status_code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        if status.is_server_error() {
            tracing::error!("{}", message);
        }

        let body: ApiResponse = ApiResponse::failure(message);
        (status, Json(body)).into_response()
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
