use std::borrow::Cow;

use http::Method;

/// Every page and resource the site serves.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Home,
    Rooms,
    RoomDetail(String),
    Gallery,
    Contacts,
    ContactSubmit,
    SwitchLanguage,
    BundleCss,
    Favicon,
    /// Path below the static root, including the leading directory.
    Asset(String),
    MethodNotAllowed,
    NotFound,
}

const ASSET_DIRECTORIES: [&str; 3] = ["foto", "images", "videos"];

impl Route {
    #[must_use]
    pub fn parse(method: &Method, path: &str) -> Self {
        let trimmed = path.trim_end_matches('/');
        let segments: Vec<&str> = trimmed.split('/').skip(1).collect();
        let get = method == Method::GET || method == Method::HEAD;
        let post = method == Method::POST;

        let (route, allowed) = match segments.as_slice() {
            [] => (Self::Home, get),
            ["camere"] => (Self::Rooms, get),
            ["camere" | "room", id] if !id.is_empty() => (Self::RoomDetail((*id).to_owned()), get),
            ["galleria"] => (Self::Gallery, get),
            ["contatti"] if post => (Self::ContactSubmit, true),
            ["contatti"] => (Self::Contacts, get),
            ["lingua"] => (Self::SwitchLanguage, post),
            ["bundle.css"] => (Self::BundleCss, get),
            ["favicon.svg"] => (Self::Favicon, get),
            [directory, rest @ ..]
                if ASSET_DIRECTORIES.contains(directory) && !rest.is_empty() =>
            {
                (Self::Asset(trimmed.trim_start_matches('/').to_owned()), get)
            }
            _ => return Self::NotFound,
        };
        if allowed { route } else { Self::MethodNotAllowed }
    }

    /// Canonical path for links.
    #[must_use]
    pub fn href(&self) -> Cow<'static, str> {
        match self {
            Self::Home => Cow::Borrowed("/"),
            Self::Rooms => Cow::Borrowed("/camere"),
            Self::RoomDetail(id) => Cow::Owned(format!("/camere/{id}")),
            Self::Gallery => Cow::Borrowed("/galleria"),
            Self::Contacts | Self::ContactSubmit => Cow::Borrowed("/contatti"),
            Self::SwitchLanguage => Cow::Borrowed("/lingua"),
            Self::BundleCss => Cow::Borrowed("/bundle.css"),
            Self::Favicon => Cow::Borrowed("/favicon.svg"),
            Self::Asset(path) => Cow::Owned(format!("/{path}")),
            Self::MethodNotAllowed | Self::NotFound => Cow::Borrowed("/"),
        }
    }

    /// Pages that can be returned to after a language switch.
    #[must_use]
    pub const fn is_page(&self) -> bool {
        matches!(
            self,
            Self::Home | Self::Rooms | Self::RoomDetail(_) | Self::Gallery | Self::Contacts
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pages() {
        assert_eq!(Route::parse(&Method::GET, "/"), Route::Home);
        assert_eq!(Route::parse(&Method::GET, ""), Route::Home);
        assert_eq!(Route::parse(&Method::GET, "/camere"), Route::Rooms);
        assert_eq!(Route::parse(&Method::GET, "/camere/"), Route::Rooms);
        assert_eq!(Route::parse(&Method::GET, "/galleria"), Route::Gallery);
        assert_eq!(Route::parse(&Method::GET, "/contatti"), Route::Contacts);
        assert_eq!(Route::parse(&Method::POST, "/contatti"), Route::ContactSubmit);
        assert_eq!(Route::parse(&Method::POST, "/lingua"), Route::SwitchLanguage);
        assert_eq!(Route::parse(&Method::HEAD, "/bundle.css"), Route::BundleCss);
        assert_eq!(Route::parse(&Method::GET, "/favicon.svg"), Route::Favicon);
    }

    #[test]
    fn both_detail_paths_are_equivalent() {
        let camere = Route::parse(&Method::GET, "/camere/204");
        let room = Route::parse(&Method::GET, "/room/204");
        assert_eq!(camere, Route::RoomDetail("204".to_owned()));
        assert_eq!(camere, room);
        assert_eq!(room.href(), "/camere/204");
    }

    #[test]
    fn assets() {
        assert_eq!(
            Route::parse(&Method::GET, "/foto/cam101/1.webp"),
            Route::Asset("foto/cam101/1.webp".to_owned())
        );
        assert_eq!(
            Route::parse(&Method::GET, "/videos/render-13.mp4"),
            Route::Asset("videos/render-13.mp4".to_owned())
        );
        assert_eq!(Route::parse(&Method::GET, "/images"), Route::NotFound);
    }

    #[test]
    fn wrong_method_and_unknown_paths() {
        assert_eq!(Route::parse(&Method::POST, "/camere"), Route::MethodNotAllowed);
        assert_eq!(Route::parse(&Method::GET, "/lingua"), Route::MethodNotAllowed);
        assert_eq!(Route::parse(&Method::DELETE, "/contatti"), Route::MethodNotAllowed);
        assert_eq!(Route::parse(&Method::GET, "/admin"), Route::NotFound);
        assert_eq!(Route::parse(&Method::GET, "/camere/101/extra"), Route::NotFound);
    }

    #[test]
    fn hrefs_parse_back() {
        for route in [
            Route::Home,
            Route::Rooms,
            Route::RoomDetail("301".to_owned()),
            Route::Gallery,
            Route::Contacts,
        ] {
            assert_eq!(Route::parse(&Method::GET, &route.href()), route);
        }
    }
}
