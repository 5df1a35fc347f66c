use bytes::Bytes;
use dara_holiday_catalog::gallery::WELCOME_IMAGES;
use dara_holiday_catalog::reviews::REVIEWS;
use dara_holiday_catalog::CarouselCursor;
use http::{Request, Response, StatusCode};
use http_body_util::Full;
use serde::{Deserialize, Serialize};

use super::{apply_key, SliderView};
use crate::error::AppError;
use crate::form::{index_param, query};
use crate::session::Session;
use crate::templating::PageContext;
use crate::AppState;

#[derive(Deserialize, Default)]
struct HomeQuery {
    slide: Option<String>,
    key: Option<String>,
}

#[derive(Serialize)]
struct ReviewView {
    author: &'static str,
    stars: String,
    rating_label: String,
    text: &'static str,
    date: &'static str,
}

#[derive(Serialize)]
struct HomePage {
    slide: SliderView,
    reviews: Vec<ReviewView>,
}

pub fn index(
    state: &AppState,
    request: &Request<Bytes>,
    session: &Session,
) -> Result<Response<Full<Bytes>>, AppError> {
    let page = PageContext::new(state, session, request.uri());
    let params: HomeQuery = query(request.uri());

    // an explicit slide wins, otherwise show where the autoplay is
    let mut cursor = index_param(params.slide.as_deref())
        .and_then(|index| CarouselCursor::at(WELCOME_IMAGES.len(), index))
        .unwrap_or_else(|| state.welcome_slider.get());
    apply_key(&mut cursor, params.key.as_deref());

    let reviews = REVIEWS
        .iter()
        .map(|review| ReviewView {
            author: review.author,
            stars: "★".repeat(usize::from(review.rating)),
            rating_label: page.t_with("reviews.rating", &[("rating", &review.rating.to_string())]),
            text: review.text,
            date: review.date,
        })
        .collect();

    page.render(
        StatusCode::OK,
        "home",
        "home",
        page.t("hero.title"),
        HomePage {
            slide: SliderView::new(cursor, WELCOME_IMAGES),
            reviews,
        },
    )
}
