use std::convert::Infallible;

use bytes::Bytes;
use dara_holiday_config::ConfigError;
use headers::{ContentType, HeaderMapExt as _};
use http::{Response, StatusCode};
use http_body_util::Full;
use tracing::{debug, error};

#[derive(thiserror::Error, Debug)]
pub enum AppError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("webserver error: {0}")]
    Hyper(#[from] hyper::Error),
    #[error("http error: {0}")]
    Http(#[from] http::Error),
    #[error("render error: {0}")]
    Render(#[from] handlebars::RenderError),
    #[error("template error: {0}")]
    Template(#[from] Box<handlebars::TemplateError>),
    #[error("form submission error: {0}")]
    Form(#[from] serde_urlencoded::de::Error),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("request body error: {0}")]
    Body(Box<dyn std::error::Error + Send + Sync>),
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),
    #[error("wrong csrf token")]
    WrongCsrfToken,
    #[error("not found")]
    NotFound,
    #[error("method not allowed")]
    MethodNotAllowed,
    #[error("unsupported language {0:?}")]
    InvalidLanguage(String),
    #[error("failed to deliver contact request: {0}")]
    Contact(String),
}

impl From<Infallible> for AppError {
    fn from(value: Infallible) -> Self {
        match value {}
    }
}

impl From<handlebars::TemplateError> for AppError {
    fn from(value: handlebars::TemplateError) -> Self {
        Self::Template(Box::new(value))
    }
}

impl AppError {
    #[must_use]
    pub const fn status(&self) -> StatusCode {
        match self {
            Self::Form(_) | Self::Body(_) | Self::InvalidLanguage(_) => StatusCode::BAD_REQUEST,
            Self::WrongCsrfToken => StatusCode::FORBIDDEN,
            Self::NotFound => StatusCode::NOT_FOUND,
            Self::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            Self::Contact(_) => StatusCode::BAD_GATEWAY,
            Self::Io(_)
            | Self::Hyper(_)
            | Self::Http(_)
            | Self::Render(_)
            | Self::Template(_)
            | Self::Json(_)
            | Self::Config(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Minimal error page that does not go through the template registry.
    #[must_use]
    pub fn into_response(self) -> Response<Full<Bytes>> {
        let status = self.status();
        if status.is_server_error() {
            error!("{self}");
        } else {
            debug!("{self}");
        }
        let reason = status.canonical_reason().unwrap_or("Error");
        let body = format!(
            "<!doctype html>\n<html lang=\"it\">\n<head><meta charset=\"utf-8\"><title>{code} \
             {reason}</title><link rel=\"stylesheet\" href=\"/bundle.css\"></head>\n<body \
             class=\"error-page\"><main><h1>{code} {reason}</h1><p>{message}</p><p><a \
             href=\"/\">DaraHoliday Apartments</a></p></main></body>\n</html>\n",
            code = status.as_u16(),
            message = handlebars::html_escape(&self.to_string()),
        );
        let mut response = Response::new(Full::new(Bytes::from(body)));
        *response.status_mut() = status;
        response.headers_mut().typed_insert(ContentType::html());
        response
    }
}

#[cfg(test)]
mod tests {
    use http_body_util::BodyExt as _;

    use super::*;

    #[test]
    fn statuses() {
        assert_eq!(AppError::NotFound.status(), StatusCode::NOT_FOUND);
        assert_eq!(AppError::WrongCsrfToken.status(), StatusCode::FORBIDDEN);
        assert_eq!(
            AppError::MethodNotAllowed.status(),
            StatusCode::METHOD_NOT_ALLOWED
        );
        assert_eq!(
            AppError::InvalidLanguage("xx".to_owned()).status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AppError::Io(std::io::Error::other("disk")).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[tokio::test]
    async fn error_page_escapes_message() {
        let response = AppError::InvalidLanguage("<script>".to_owned()).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = response.into_body().collect().await.unwrap().to_bytes();
        let body = String::from_utf8(body.to_vec()).unwrap();
        assert!(body.contains("&lt;script&gt;"));
        assert!(!body.contains("<script>"));
    }
}
