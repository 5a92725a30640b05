use actix_web::{HttpResponse, ResponseError};
use askama::Template;
use std::fmt;

#[derive(Debug)]
pub enum AppError {
    /// Transport-level failure talking to the remote backend.
    Http(reqwest::Error),
    /// Non-2xx backend response, with the message mined from its body.
    Api { status: u16, message: String },
    Template(askama::Error),
    Session(String),
    Forbidden(String),
    /// The cached record changed under the caller; the list was re-fetched.
    Stale,
    NotFound,
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Http(e) => write!(f, "Backend request error: {e}"),
            AppError::Api { status, message } => {
                write!(f, "Backend error {status}: {message}")
            }
            AppError::Template(e) => write!(f, "Template error: {e}"),
            AppError::Session(e) => write!(f, "Session error: {e}"),
            AppError::Forbidden(e) => write!(f, "Forbidden: {e}"),
            AppError::Stale => write!(f, "Record changed since it was loaded"),
            AppError::NotFound => write!(f, "Not found"),
        }
    }
}

impl AppError {
    /// Short text shown to the user in a flash message. Server-provided
    /// messages are surfaced verbatim, everything else gets a generic line.
    pub fn user_message(&self) -> String {
        match self {
            AppError::Api { message, .. } => message.clone(),
            AppError::Http(_) => {
                "Unable to reach the studio backend. Please try again.".to_string()
            }
            AppError::Stale => {
                "That entry changed in the meantime — the list was refreshed.".to_string()
            }
            AppError::NotFound => "Not found".to_string(),
            _ => "Something went wrong. Please try again.".to_string(),
        }
    }
}

impl ResponseError for AppError {
    fn error_response(&self) -> HttpResponse {
        match self {
            AppError::NotFound => HttpResponse::NotFound().body("Not Found"),
            AppError::Forbidden(_) => HttpResponse::Forbidden().body("Forbidden"),
            _ => {
                log::error!("{self}");
                HttpResponse::InternalServerError().body("Internal Server Error")
            }
        }
    }
}

impl From<reqwest::Error> for AppError {
    fn from(e: reqwest::Error) -> Self {
        AppError::Http(e)
    }
}

impl From<askama::Error> for AppError {
    fn from(e: askama::Error) -> Self {
        AppError::Template(e)
    }
}

/// Render an askama template into a 200 HTML response.
pub fn render<T: Template>(tmpl: T) -> Result<HttpResponse, AppError> {
    let body = tmpl.render()?;
    Ok(HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(body))
}
