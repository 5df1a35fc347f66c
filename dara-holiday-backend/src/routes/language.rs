use bytes::Bytes;
use http::header::LOCATION;
use http::{Method, Request, Response, StatusCode, Uri};
use http_body_util::Full;
use serde::Deserialize;
use tracing::debug;

use crate::error::AppError;
use crate::form::{CsrfSafeForm, CsrfToken};
use crate::language::{plan_switch, RequestedLanguage};
use crate::router::Route;
use crate::session::{ResponseSessionExt as _, Session};

#[derive(Deserialize)]
pub struct LanguagePayload {
    csrf_token: String,
    lang: String,
    #[serde(default)]
    return_to: String,
}

impl CsrfToken for LanguagePayload {
    fn csrf_token(&self) -> &str {
        &self.csrf_token
    }
}

/// Only local pages are valid targets, anything else goes home.
fn redirect_target(return_to: &str) -> &str {
    let is_page = return_to
        .parse::<Uri>()
        .ok()
        .filter(|uri| uri.scheme().is_none() && uri.authority().is_none())
        .is_some_and(|uri| {
            uri.path().starts_with('/') && Route::parse(&Method::GET, uri.path()).is_page()
        });
    if is_page { return_to } else { "/" }
}

pub fn switch_language(
    request: &Request<Bytes>,
    mut session: Session,
) -> Result<Response<Full<Bytes>>, AppError> {
    let form = CsrfSafeForm::<LanguagePayload>::from_request(request, &session)?;
    let requested: RequestedLanguage = form.value.lang.parse()?;

    let current = session.language_mode();
    let steps = plan_switch(&current, requested);
    debug!(?current, ?steps, "switching language");
    session.apply_switch(steps);

    Ok(Response::builder()
        .status(StatusCode::SEE_OTHER)
        .header(LOCATION, redirect_target(&form.value.return_to))
        .with_session(&session)
        .body(Full::default())?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn redirect_targets() {
        assert_eq!(redirect_target("/camere?guests=4"), "/camere?guests=4");
        assert_eq!(redirect_target("/camere/101?photo=2"), "/camere/101?photo=2");
        assert_eq!(redirect_target("/"), "/");
        assert_eq!(redirect_target("https://evil.example/"), "/");
        assert_eq!(redirect_target("//evil.example/camere"), "/");
        assert_eq!(redirect_target("/lingua"), "/");
        assert_eq!(redirect_target("/bundle.css"), "/");
        assert_eq!(redirect_target(""), "/");
    }
}
