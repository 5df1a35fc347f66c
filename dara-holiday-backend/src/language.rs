//! Language mode of a visitor and the ordered steps to move between modes.
//!
//! A visitor reads either one of the static tables ([`LanguageMode::Core`])
//! or the Italian page run through the external machine translation widget
//! ([`LanguageMode::Overlay`]). The two never apply at the same time.

use std::fmt;

use serde::Serialize;

use crate::error::AppError;
use crate::i18n::Language;

/// Machine translated languages offered in the language menu.
pub const OVERLAY_CHOICES: [(&str, &str); 6] = [
    ("nl", "Nederlands"),
    ("pt", "Português"),
    ("pl", "Polski"),
    ("ru", "Русский"),
    ("ja", "日本語"),
    ("zh-CN", "中文"),
];

/// A syntactically valid language tag without a static table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct OverlayLanguage(String);

impl OverlayLanguage {
    #[must_use]
    pub fn parse(tag: &str) -> Option<Self> {
        let tag = tag.trim();
        let (primary, region) = match tag.split_once('-') {
            Some((primary, region)) => (primary, Some(region)),
            None => (tag, None),
        };
        let primary_ok =
            (2..=3).contains(&primary.len()) && primary.chars().all(|c| c.is_ascii_alphabetic());
        let region_ok = region.map_or(true, |region| {
            (2..=4).contains(&region.len()) && region.chars().all(|c| c.is_ascii_alphanumeric())
        });
        (primary_ok && region_ok && Language::parse(primary).is_none())
            .then(|| Self(tag.to_owned()))
    }

    /// Reads the `googtrans` cookie value, `/{source}/{target}`.
    #[must_use]
    pub fn from_cookie_value(value: &str) -> Option<Self> {
        let mut segments = value.strip_prefix('/')?.splitn(2, '/');
        let _source = segments.next()?;
        Self::parse(segments.next()?)
    }

    #[must_use]
    pub fn cookie_value(&self) -> String {
        format!("/{}/{}", Language::BASE, self.0)
    }

    #[must_use]
    pub fn tag(&self) -> &str {
        &self.0
    }

    /// Menu label, or the bare tag for languages outside the menu.
    #[must_use]
    pub fn native_name(&self) -> &str {
        OVERLAY_CHOICES
            .iter()
            .find(|(tag, _)| *tag == self.0)
            .map_or(self.0.as_str(), |(_, name)| name)
    }
}

impl fmt::Display for OverlayLanguage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// What the visitor picked in the language menu.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RequestedLanguage {
    Core(Language),
    Overlay(OverlayLanguage),
}

impl std::str::FromStr for RequestedLanguage {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // exact codes only, "en-US" in the menu form would be a bug
        if let Some(lang) = Language::ALL.into_iter().find(|lang| lang.code() == s) {
            return Ok(Self::Core(lang));
        }
        OverlayLanguage::parse(s)
            .map(Self::Overlay)
            .ok_or_else(|| AppError::InvalidLanguage(s.to_owned()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LanguageMode {
    Core(Language),
    Overlay(OverlayLanguage),
}

impl LanguageMode {
    /// An overlay cookie wins over everything. Otherwise the stored
    /// preference, then the first core language in `Accept-Language`.
    #[must_use]
    pub fn resolve(
        preference: Option<Language>,
        overlay: Option<&OverlayLanguage>,
        accept_language: Option<&str>,
    ) -> Self {
        if let Some(overlay) = overlay {
            return Self::Overlay(overlay.clone());
        }
        Self::Core(
            preference
                .or_else(|| accept_language.and_then(negotiate))
                .unwrap_or(Language::BASE),
        )
    }

    /// Language of the static strings on the page.
    #[must_use]
    pub const fn text_language(&self) -> Language {
        match self {
            Self::Core(lang) => *lang,
            Self::Overlay(_) => Language::BASE,
        }
    }

    #[must_use]
    pub const fn overlay(&self) -> Option<&OverlayLanguage> {
        match self {
            Self::Core(_) => None,
            Self::Overlay(overlay) => Some(overlay),
        }
    }
}

/// First core language in an `Accept-Language` header, in listed order.
fn negotiate(header: &str) -> Option<Language> {
    header
        .split(',')
        .filter_map(|entry| entry.split(';').next())
        .find_map(Language::parse)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SwitchStep {
    /// Remove the machine translation cookie.
    ClearOverlay,
    /// Store the base language as preference.
    ResetCore,
    ApplyCore(Language),
    ActivateOverlay(OverlayLanguage),
}

/// The ordered steps that move `current` to `requested`.
///
/// Picking a core language while the overlay is active clears the overlay
/// first. Picking an overlay language resets the static table to the base
/// language before the overlay takes over.
#[must_use]
pub fn plan_switch(current: &LanguageMode, requested: RequestedLanguage) -> Vec<SwitchStep> {
    match (current, requested) {
        (LanguageMode::Overlay(_), RequestedLanguage::Core(lang)) => {
            vec![SwitchStep::ClearOverlay, SwitchStep::ApplyCore(lang)]
        }
        (LanguageMode::Core(_), RequestedLanguage::Core(lang)) => vec![SwitchStep::ApplyCore(lang)],
        (_, RequestedLanguage::Overlay(overlay)) => {
            vec![SwitchStep::ResetCore, SwitchStep::ActivateOverlay(overlay)]
        }
    }
}
