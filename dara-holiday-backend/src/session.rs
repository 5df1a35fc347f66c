use cookie::time::Duration as CookieDuration;
use cookie::{Cookie, SameSite};
use http::header::{ACCEPT_LANGUAGE, COOKIE, SET_COOKIE};
use http::HeaderMap;
use rand::{thread_rng, Rng as _};
use tracing::debug;

use crate::i18n::Language;
use crate::language::{LanguageMode, OverlayLanguage, SwitchStep};

const COOKIE_NAME_CSRF_TOKEN: &str = "__Host_csrf_token";
const COOKIE_NAME_LANGUAGE: &str = "dh_lang";
/// Read by the external translation widget, so it can't be `HttpOnly`.
const COOKIE_NAME_OVERLAY: &str = "googtrans";

/// The cookies of one request. Every value carries a flag that is true when
/// the value was changed and has to be written back.
#[derive(Clone, Debug)]
#[must_use]
pub struct Session {
    csrf_token: (String, bool),
    language: (Option<Language>, bool),
    overlay: (Option<OverlayLanguage>, bool),
    /// A `googtrans` cookie came with the request, even one that didn't parse.
    overlay_cookie_sent: bool,
    accept_language: Option<String>,
}

impl Session {
    pub fn new(headers: &HeaderMap) -> Self {
        let mut csrf_token = None;
        let mut language = None;
        let mut overlay = None;
        let mut overlay_cookie_sent = false;
        headers
            .get_all(COOKIE)
            .into_iter()
            .filter_map(|value| value.to_str().ok())
            .map(std::borrow::ToOwned::to_owned)
            .flat_map(Cookie::split_parse)
            .filter_map(std::result::Result::ok)
            .for_each(|cookie| match cookie.name() {
                COOKIE_NAME_CSRF_TOKEN => csrf_token = Some((cookie.value().to_owned(), false)),
                COOKIE_NAME_LANGUAGE => {
                    language = Language::parse(cookie.value());
                    if language.is_none() {
                        debug!("ignoring language cookie {}", cookie.value());
                    }
                }
                COOKIE_NAME_OVERLAY => {
                    overlay_cookie_sent = true;
                    overlay = OverlayLanguage::from_cookie_value(cookie.value());
                    if overlay.is_none() {
                        debug!("ignoring overlay cookie {}", cookie.value());
                    }
                }
                _ => {
                    // ignore the cookies that are not interesting for us
                }
            });
        let csrf_token = csrf_token.unwrap_or_else(|| {
            (
                thread_rng()
                    .sample_iter(&rand::distributions::Alphanumeric)
                    .take(30)
                    .map(char::from)
                    .collect(),
                true,
            )
        });
        let accept_language = headers
            .get(ACCEPT_LANGUAGE)
            .and_then(|value| value.to_str().ok())
            .map(ToOwned::to_owned);
        Self {
            csrf_token,
            language: (language, false),
            overlay: (overlay, false),
            overlay_cookie_sent,
            accept_language,
        }
    }

    #[must_use]
    pub fn csrf_token(&self) -> &str {
        &self.csrf_token.0
    }

    #[must_use]
    pub const fn language_preference(&self) -> Option<Language> {
        self.language.0
    }

    #[must_use]
    pub const fn overlay(&self) -> Option<&OverlayLanguage> {
        self.overlay.0.as_ref()
    }

    #[must_use]
    pub fn language_mode(&self) -> LanguageMode {
        LanguageMode::resolve(
            self.language.0,
            self.overlay.0.as_ref(),
            self.accept_language.as_deref(),
        )
    }

    /// Applies the steps in order. Applying a core language also removes a
    /// `googtrans` cookie that was sent but never resolved to an overlay.
    pub fn apply_switch(&mut self, steps: Vec<SwitchStep>) {
        for step in steps {
            debug!(?step, "language switch");
            match step {
                SwitchStep::ClearOverlay => self.overlay = (None, true),
                SwitchStep::ResetCore => self.language = (Some(Language::BASE), true),
                SwitchStep::ApplyCore(lang) => {
                    self.language = (Some(lang), true);
                    if self.overlay_cookie_sent && self.overlay.0.is_none() {
                        self.overlay = (None, true);
                    }
                }
                SwitchStep::ActivateOverlay(overlay) => self.overlay = (Some(overlay), true),
            }
        }
    }
}

pub trait ResponseSessionExt {
    #[must_use]
    fn with_session(self, session: &Session) -> Self;
}

impl ResponseSessionExt for http::response::Builder {
    fn with_session(self, session: &Session) -> Self {
        let mut this = self;
        if let (value, true) = &session.csrf_token {
            let cookie = Cookie::build((COOKIE_NAME_CSRF_TOKEN, value.clone()))
                .path("/")
                .http_only(true)
                .same_site(SameSite::Strict)
                .build();
            this = this.header(SET_COOKIE, cookie.to_string());
        }
        if let (value, true) = &session.language {
            let cookie = value.map_or_else(
                || removal(COOKIE_NAME_LANGUAGE),
                |lang| {
                    Cookie::build((COOKIE_NAME_LANGUAGE, lang.code()))
                        .path("/")
                        .same_site(SameSite::Lax)
                        .max_age(CookieDuration::days(365))
                        .build()
                },
            );
            this = this.header(SET_COOKIE, cookie.to_string());
        }
        if let (value, true) = &session.overlay {
            let cookie = value.as_ref().map_or_else(
                || removal(COOKIE_NAME_OVERLAY),
                |overlay| {
                    Cookie::build((COOKIE_NAME_OVERLAY, overlay.cookie_value()))
                        .path("/")
                        .same_site(SameSite::Lax)
                        .build()
                },
            );
            this = this.header(SET_COOKIE, cookie.to_string());
        }
        this
    }
}

fn removal(name: &'static str) -> Cookie<'static> {
    let mut cookie = Cookie::build(name).path("/").build();
    cookie.make_removal();
    cookie
}

#[cfg(test)]
mod tests {
    use http::{HeaderValue, Response};

    use super::*;
    use crate::language::{plan_switch, RequestedLanguage};

    fn headers(cookie: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(COOKIE, HeaderValue::from_str(cookie).unwrap());
        headers
    }

    fn set_cookies(session: &Session) -> Vec<String> {
        let response = Response::builder().with_session(session).body(()).unwrap();
        response
            .headers()
            .get_all(SET_COOKIE)
            .iter()
            .map(|value| value.to_str().unwrap().to_owned())
            .collect()
    }

    #[test]
    fn fresh_session_gets_csrf_token() {
        let session = Session::new(&HeaderMap::new());
        assert_eq!(session.csrf_token().len(), 30);
        let cookies = set_cookies(&session);
        assert_eq!(cookies.len(), 1);
        assert!(cookies[0].starts_with("__Host_csrf_token="));
        assert!(cookies[0].contains("HttpOnly"));
    }

    #[test]
    fn existing_cookies_are_not_written_back() {
        let session = Session::new(&headers("__Host_csrf_token=abc; dh_lang=de; googtrans=/it/nl"));
        assert_eq!(session.csrf_token(), "abc");
        assert_eq!(session.language_preference(), Some(Language::De));
        assert_eq!(session.overlay().map(OverlayLanguage::tag), Some("nl"));
        assert!(set_cookies(&session).is_empty());
    }

    #[test]
    fn garbage_language_cookie_is_ignored() {
        let session = Session::new(&headers("__Host_csrf_token=abc; dh_lang=xx; googtrans=junk"));
        assert_eq!(session.language_preference(), None);
        assert_eq!(session.overlay(), None);
        assert_eq!(session.language_mode(), LanguageMode::Core(Language::It));
    }

    #[test]
    fn accept_language_is_used_without_preference() {
        let mut headers = headers("__Host_csrf_token=abc");
        headers.insert(ACCEPT_LANGUAGE, HeaderValue::from_static("es-ES,es;q=0.9"));
        let session = Session::new(&headers);
        assert_eq!(session.language_mode(), LanguageMode::Core(Language::Es));
    }

    #[test]
    fn switching_to_core_removes_overlay_cookie() {
        let mut session = Session::new(&headers("__Host_csrf_token=abc; googtrans=/it/nl"));
        session.apply_switch(vec![
            SwitchStep::ClearOverlay,
            SwitchStep::ApplyCore(Language::En),
        ]);
        assert_eq!(session.language_mode(), LanguageMode::Core(Language::En));
        let cookies = set_cookies(&session);
        assert!(cookies.iter().any(|c| c.starts_with("dh_lang=en")));
        let overlay = cookies
            .iter()
            .find(|c| c.starts_with("googtrans="))
            .unwrap();
        assert!(overlay.contains("Max-Age=0"));
    }

    #[test]
    fn switching_to_core_removes_unparsed_overlay_cookie() {
        for value in ["/it/en", "/auto/de", "/it/nl/x", "junk"] {
            let mut session =
                Session::new(&headers(&format!("__Host_csrf_token=abc; googtrans={value}")));
            assert_eq!(session.language_mode(), LanguageMode::Core(Language::It));
            let steps = plan_switch(&session.language_mode(), RequestedLanguage::Core(Language::De));
            session.apply_switch(steps);
            let cookies = set_cookies(&session);
            assert!(cookies.iter().any(|c| c.starts_with("dh_lang=de")));
            let overlay = cookies
                .iter()
                .find(|c| c.starts_with("googtrans="))
                .unwrap_or_else(|| panic!("googtrans={value} survived the switch"));
            assert!(overlay.contains("Max-Age=0"));
        }
    }

    #[test]
    fn core_switch_without_overlay_cookie_leaves_it_alone() {
        let mut session = Session::new(&headers("__Host_csrf_token=abc; dh_lang=fr"));
        session.apply_switch(vec![SwitchStep::ApplyCore(Language::En)]);
        let cookies = set_cookies(&session);
        assert_eq!(cookies.len(), 1);
        assert!(cookies[0].starts_with("dh_lang=en"));
    }

    #[test]
    fn switching_to_overlay_resets_preference() {
        let mut session = Session::new(&headers("__Host_csrf_token=abc; dh_lang=fr"));
        session.apply_switch(vec![
            SwitchStep::ResetCore,
            SwitchStep::ActivateOverlay(OverlayLanguage::parse("ja").unwrap()),
        ]);
        let cookies = set_cookies(&session);
        assert!(cookies.iter().any(|c| c.starts_with("dh_lang=it")));
        assert!(cookies.iter().any(|c| c.starts_with("googtrans=/it/ja")));
    }
}
