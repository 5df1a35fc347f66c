use bytes::Bytes;
use dara_holiday_catalog::{filter_by_capacity, CapacitySelector, RoomEntity, CAPACITY_CHOICES};
use http::{Request, Response, StatusCode};
use http_body_util::Full;
use serde::{Deserialize, Serialize};

use crate::error::AppError;
use crate::form::query;
use crate::router::Route;
use crate::session::Session;
use crate::templating::PageContext;
use crate::AppState;

#[derive(Deserialize, Default)]
struct RoomsQuery {
    guests: Option<String>,
}

#[derive(Serialize)]
struct Choice {
    value: String,
    label: String,
    active: bool,
}

#[derive(Serialize)]
pub struct RoomCard<'a> {
    href: String,
    main_image: &'a str,
    name: &'a str,
    kind: &'a str,
    capacity_label: String,
    size: u16,
}

impl<'a> RoomCard<'a> {
    pub fn new(page: &PageContext<'_>, room: &'a RoomEntity) -> Self {
        Self {
            href: Route::RoomDetail(room.id.to_owned()).href().into_owned(),
            main_image: &room.main_image,
            name: room.name,
            kind: room.kind,
            capacity_label: page.t_with("rooms.capacity", &[("count", &room.capacity.to_string())]),
            size: room.size,
        }
    }
}

#[derive(Serialize)]
struct RoomsPage<'a> {
    choices: Vec<Choice>,
    count_message: String,
    rooms: Vec<RoomCard<'a>>,
}

fn choice_label(page: &PageContext<'_>, selector: CapacitySelector) -> String {
    match selector {
        CapacitySelector::All => page.t("rooms.filter_all"),
        CapacitySelector::Exactly(count) => {
            page.t_with("rooms.filter_guests", &[("count", &count.to_string())])
        }
    }
}

pub fn rooms(
    state: &AppState,
    request: &Request<Bytes>,
    session: &Session,
) -> Result<Response<Full<Bytes>>, AppError> {
    let page = PageContext::new(state, session, request.uri());
    let params: RoomsQuery = query(request.uri());
    let selector = params
        .guests
        .as_deref()
        .and_then(|guests| guests.parse::<CapacitySelector>().ok())
        .unwrap_or_default();

    let filtered = filter_by_capacity(state.catalog.rooms(), selector);
    let count = filtered.len().to_string();
    let count_message = page.t_with(
        if filtered.len() == 1 {
            "rooms.count_one"
        } else {
            "rooms.count_other"
        },
        &[("count", &count)],
    );

    let choices = CAPACITY_CHOICES
        .into_iter()
        .map(|choice| Choice {
            value: choice.to_string(),
            label: choice_label(&page, choice),
            active: choice == filtered.selector(),
        })
        .collect();
    let rooms = filtered
        .rooms()
        .iter()
        .map(|room| RoomCard::new(&page, room))
        .collect();

    page.render(
        StatusCode::OK,
        "rooms",
        "rooms",
        page.t("navbar.rooms"),
        RoomsPage {
            choices,
            count_message,
            rooms,
        },
    )
}
