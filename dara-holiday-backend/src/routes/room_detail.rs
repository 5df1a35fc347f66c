use bytes::Bytes;
use dara_holiday_catalog::RoomEntity;
use http::{Request, Response, StatusCode};
use http_body_util::Full;
use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};
use serde::{Deserialize, Serialize};

use super::{navigate, SliderView};
use crate::error::AppError;
use crate::form::query;
use crate::router::Route;
use crate::session::Session;
use crate::templating::PageContext;
use crate::AppState;

#[derive(Deserialize, Default)]
struct DetailQuery {
    photo: Option<String>,
    lightbox: Option<String>,
    key: Option<String>,
}

#[derive(Serialize)]
struct RoomView<'a> {
    id: &'a str,
    name: &'a str,
    kind: &'a str,
    description: &'a str,
    capacity_label: String,
    size_message: String,
    floor: &'static str,
    outdoor: &'a str,
    features: &'a [&'a str],
    amenities: &'a [&'a str],
    href: String,
    share_href: String,
    photo_label: String,
    slide: SliderView,
    lightbox: bool,
}

#[derive(Serialize)]
struct RoomDetailPage<'a> {
    room: Option<RoomView<'a>>,
}

/// `mailto:` link carrying the absolute room url, the share fallback for
/// browsers without a share sheet.
fn share_href(page: &PageContext<'_>, base_url: &str, room: &RoomEntity, href: &str) -> String {
    let subject = page.t_with("detail.share_subject", &[("name", room.name)]);
    let url = format!("{}{href}", base_url.trim_end_matches('/'));
    format!(
        "mailto:?subject={}&body={}",
        utf8_percent_encode(&subject, NON_ALPHANUMERIC),
        utf8_percent_encode(&url, NON_ALPHANUMERIC),
    )
}

pub fn room_detail(
    state: &AppState,
    request: &Request<Bytes>,
    session: &Session,
    id: &str,
) -> Result<Response<Full<Bytes>>, AppError> {
    let page = PageContext::new(state, session, request.uri());

    let Some(room) = state.catalog.find(id) else {
        return page.render(
            StatusCode::NOT_FOUND,
            "room_detail",
            "rooms",
            page.t("detail.not_found"),
            RoomDetailPage { room: None },
        );
    };

    let params: DetailQuery = query(request.uri());
    let slides = room.slides();
    let (cursor, lightbox) = navigate(
        slides.len(),
        params.photo.as_deref(),
        params.lightbox.as_deref() == Some("1"),
        params.key.as_deref(),
    )
    .ok_or(AppError::NotFound)?;

    let href = Route::RoomDetail(room.id.to_owned()).href().into_owned();
    let view = RoomView {
        id: room.id,
        name: room.name,
        kind: room.kind,
        description: &room.description,
        capacity_label: page.t_with("rooms.capacity", &[("count", &room.capacity.to_string())]),
        size_message: page.t_with("detail.size", &[("size", &room.size.to_string())]),
        floor: room.floor.label(),
        outdoor: room.outdoor,
        features: room.features,
        amenities: room.amenities,
        share_href: share_href(&page, &state.config.url, room, &href),
        photo_label: page.t_with(
            "detail.photo",
            &[
                ("current", &(cursor.index() + 1).to_string()),
                ("total", &cursor.len().to_string()),
            ],
        ),
        href,
        slide: SliderView::new(cursor, &slides),
        lightbox: lightbox.is_open(),
    };

    page.render(
        StatusCode::OK,
        "room_detail",
        "rooms",
        room.name.to_owned(),
        RoomDetailPage { room: Some(view) },
    )
}
