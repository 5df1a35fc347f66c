use bytes::Bytes;
use dara_holiday_config::ContactConfig;
use handlebars::Handlebars;
use headers::{CacheControl, ContentType};
use http::{Response, StatusCode, Uri};
use http_body_util::Full;
use serde::Serialize;
use serde_json::Value;

use crate::error::AppError;
use crate::i18n::Language;
use crate::language::{LanguageMode, OVERLAY_CHOICES};
use crate::routes::bundlecss::BUNDLE_CSS_VERSION;
use crate::session::{ResponseSessionExt as _, Session};
use crate::{AppState, ResponseTypedHeaderExt as _};

const PARTIALS: [(&str, &str); 2] = [
    ("layout", include_str!("../templates/layout.hbs")),
    ("room_card", include_str!("../templates/room_card.hbs")),
];

const TEMPLATES: [(&str, &str); 5] = [
    ("home", include_str!("../templates/home.hbs")),
    ("rooms", include_str!("../templates/rooms.hbs")),
    ("room_detail", include_str!("../templates/room_detail.hbs")),
    ("gallery", include_str!("../templates/gallery.hbs")),
    ("contacts", include_str!("../templates/contacts.hbs")),
];

/// Registry with every page template compiled in.
pub fn handlebars() -> Result<Handlebars<'static>, AppError> {
    let mut registry = Handlebars::new();
    for (name, source) in PARTIALS {
        registry.register_partial(name, source)?;
    }
    for (name, source) in TEMPLATES {
        registry.register_template_string(name, source)?;
    }
    Ok(registry)
}

#[derive(Serialize)]
pub struct LanguageOption {
    code: &'static str,
    name: &'static str,
    active: bool,
}

#[derive(Serialize)]
pub struct OverlayNotice {
    tag: String,
    note: String,
}

#[derive(Serialize)]
pub struct TemplateWrapper<'a, T> {
    pub t: &'a Value,
    pub lang: &'static str,
    pub page_title: String,
    pub nav: &'static str,
    pub csrf_token: &'a str,
    pub return_to: &'a str,
    pub booking_url: &'a str,
    pub contact: &'a ContactConfig,
    pub bundle_css_version: String,
    pub core_languages: Vec<LanguageOption>,
    pub overlay_languages: Vec<LanguageOption>,
    pub overlay: Option<OverlayNotice>,
    #[serde(flatten)]
    pub inner: T,
}

/// Per request rendering context: the resolved language and the session
/// whose cookie changes go out with the page.
pub struct PageContext<'a> {
    state: &'a AppState,
    session: &'a Session,
    mode: LanguageMode,
    return_to: String,
}

impl<'a> PageContext<'a> {
    pub fn new(state: &'a AppState, session: &'a Session, uri: &Uri) -> Self {
        Self {
            state,
            session,
            mode: session.language_mode(),
            return_to: uri
                .path_and_query()
                .map_or_else(|| "/".to_owned(), ToString::to_string),
        }
    }

    #[must_use]
    pub const fn language(&self) -> Language {
        self.mode.text_language()
    }

    #[must_use]
    pub fn t(&self, key: &str) -> String {
        self.state.translations.translate(self.language(), key, &[])
    }

    #[must_use]
    pub fn t_with(&self, key: &str, params: &[(&str, &str)]) -> String {
        self.state.translations.translate(self.language(), key, params)
    }

    fn core_languages(&self) -> Vec<LanguageOption> {
        Language::ALL
            .into_iter()
            .map(|lang| LanguageOption {
                code: lang.code(),
                name: lang.native_name(),
                active: self.mode == LanguageMode::Core(lang),
            })
            .collect()
    }

    fn overlay_languages(&self) -> Vec<LanguageOption> {
        let current = self.mode.overlay().map(|overlay| overlay.tag());
        OVERLAY_CHOICES
            .into_iter()
            .map(|(code, name)| LanguageOption {
                code,
                name,
                active: current == Some(code),
            })
            .collect()
    }

    /// Renders `template` inside the shared layout.
    pub fn render<T: Serialize>(
        &self,
        status: StatusCode,
        template: &str,
        nav: &'static str,
        page_title: String,
        inner: T,
    ) -> Result<Response<Full<Bytes>>, AppError> {
        let overlay = self.mode.overlay().map(|overlay| OverlayNotice {
            tag: overlay.tag().to_owned(),
            note: self.t_with(
                "language.overlay_note",
                &[("language", overlay.native_name())],
            ),
        });
        let body = self.state.handlebars.render(
            template,
            &TemplateWrapper {
                t: self.state.translations.tree(self.language()),
                lang: self.language().code(),
                page_title,
                nav,
                csrf_token: self.session.csrf_token(),
                return_to: &self.return_to,
                booking_url: &self.state.config.booking_url,
                contact: &self.state.config.contact,
                bundle_css_version: BUNDLE_CSS_VERSION.to_string(),
                core_languages: self.core_languages(),
                overlay_languages: self.overlay_languages(),
                overlay,
                inner,
            },
        )?;
        Ok(Response::builder()
            .status(status)
            .with_session(self.session)
            .typed_header(ContentType::html())
            .typed_header(CacheControl::new().with_no_cache())
            .body(Full::new(Bytes::from(body)))?)
    }
}
