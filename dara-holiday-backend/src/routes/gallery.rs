use bytes::Bytes;
use dara_holiday_catalog::gallery::filter_by_category;
use dara_holiday_catalog::{MediaCategory, MediaItem, MediaKind};
use http::{Request, Response, StatusCode};
use http_body_util::Full;
use serde::{Deserialize, Serialize};

use super::navigate;
use crate::error::AppError;
use crate::form::{index_param, query};
use crate::session::Session;
use crate::templating::PageContext;
use crate::AppState;

#[derive(Deserialize, Default)]
struct GalleryQuery {
    category: Option<String>,
    item: Option<String>,
    key: Option<String>,
}

#[derive(Serialize)]
struct CategoryTab {
    value: &'static str,
    label: String,
    active: bool,
}

#[derive(Serialize)]
struct GalleryEntry {
    index: usize,
    video: bool,
    src: &'static str,
    alt: &'static str,
}

impl GalleryEntry {
    fn new(index: usize, item: &'static MediaItem) -> Self {
        Self {
            index,
            video: item.kind == MediaKind::Video,
            src: item.src,
            alt: item.alt,
        }
    }
}

#[derive(Serialize)]
struct OpenItem {
    entry: GalleryEntry,
    previous: usize,
    next: usize,
    number: usize,
    total: usize,
}

#[derive(Serialize)]
struct GalleryPage {
    category: &'static str,
    tabs: Vec<CategoryTab>,
    items: Vec<GalleryEntry>,
    lightbox: Option<OpenItem>,
}

pub fn gallery(
    state: &AppState,
    request: &Request<Bytes>,
    session: &Session,
) -> Result<Response<Full<Bytes>>, AppError> {
    let page = PageContext::new(state, session, request.uri());
    let params: GalleryQuery = query(request.uri());
    let category = params
        .category
        .as_deref()
        .and_then(|category| category.parse::<MediaCategory>().ok())
        .unwrap_or_default();

    let media = filter_by_category(category);

    // only a valid item opens the lightbox, navigation stays inside the category
    let requested = index_param(params.item.as_deref()).filter(|index| *index < media.len());
    let lightbox = requested.and_then(|_| {
        let (cursor, lightbox) = navigate(
            media.len(),
            params.item.as_deref(),
            true,
            params.key.as_deref(),
        )?;
        let item = media.get(cursor.index()).copied()?;
        lightbox.is_open().then(|| OpenItem {
            entry: GalleryEntry::new(cursor.index(), item),
            previous: cursor.peek_previous(),
            next: cursor.peek_next(),
            number: cursor.index() + 1,
            total: cursor.len(),
        })
    });

    let tabs = MediaCategory::ALL
        .into_iter()
        .map(|tab| CategoryTab {
            value: tab.as_str(),
            label: page.t(&format!("gallery.{}", tab.as_str())),
            active: tab == category,
        })
        .collect();
    let items = media
        .iter()
        .copied()
        .enumerate()
        .map(|(index, item)| GalleryEntry::new(index, item))
        .collect();

    page.render(
        StatusCode::OK,
        "gallery",
        "gallery",
        page.t("gallery.title"),
        GalleryPage {
            category: category.as_str(),
            tabs,
            items,
            lightbox,
        },
    )
}
