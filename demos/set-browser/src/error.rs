use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use ygoprodeck_browser::render::render_notice;

/// Error page with an HTTP status code.
pub struct AppError {
    pub status: StatusCode,
    pub message: String,
}

impl AppError {
    pub fn internal(msg: impl Into<String>) -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            message: msg.into(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        log::error!("{}", self.message);
        let body = render_notice(&self.message)
            .unwrap_or_else(|_| "<p>Internal server error</p>".to_string());
        (self.status, Html(body)).into_response()
    }
}

impl From<ygoprodeck_browser::YgoError> for AppError {
    fn from(e: ygoprodeck_browser::YgoError) -> Self {
        AppError::internal(e.to_string())
    }
}
