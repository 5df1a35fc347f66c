pub mod assets;
pub mod bundlecss;
pub mod contacts;
pub mod embedded;
pub mod favicon;
pub mod gallery;
pub mod index;
pub mod language;
pub mod room_detail;
pub mod rooms;

use dara_holiday_catalog::{CarouselCursor, KeyCommand, Lightbox};
use serde::Serialize;

use crate::form::index_param;

#[derive(Serialize, Debug, PartialEq, Eq)]
pub struct Dot {
    index: usize,
    number: usize,
    active: bool,
}

/// What a template needs to draw one position of a slider.
#[derive(Serialize, Debug)]
pub struct SliderView {
    pub src: String,
    pub index: usize,
    pub number: usize,
    pub total: usize,
    pub previous: usize,
    pub next: usize,
    pub dots: Vec<Dot>,
}

impl SliderView {
    #[must_use]
    pub fn new(cursor: CarouselCursor, slides: &[&str]) -> Self {
        Self {
            src: slides
                .get(cursor.index())
                .copied()
                .unwrap_or_default()
                .to_owned(),
            index: cursor.index(),
            number: cursor.index() + 1,
            total: cursor.len(),
            previous: cursor.peek_previous(),
            next: cursor.peek_next(),
            dots: (0..cursor.len())
                .map(|index| Dot {
                    index,
                    number: index + 1,
                    active: index == cursor.index(),
                })
                .collect(),
        }
    }
}

/// Cursor and lightbox state from the query string of a slider page.
///
/// `index` falls back to the first slide when it is missing or outside the
/// sequence. `key` is applied last, so `?photo=4&key=ArrowRight` shows the
/// first photo again.
#[must_use]
pub fn navigate(
    len: usize,
    index: Option<&str>,
    open: bool,
    key: Option<&str>,
) -> Option<(CarouselCursor, Lightbox)> {
    let mut cursor = index_param(index)
        .and_then(|index| CarouselCursor::at(len, index))
        .or_else(|| CarouselCursor::at(len, 0))?;
    let mut lightbox = if open {
        Lightbox::Open(cursor)
    } else {
        Lightbox::Closed
    };
    if lightbox.is_open() {
        if let Some(command) = parse_key(key) {
            lightbox.apply(command);
        }
    } else {
        apply_key(&mut cursor, key);
    }
    if let Lightbox::Open(open) = lightbox {
        cursor = open;
    }
    Some((cursor, lightbox))
}

fn parse_key(key: Option<&str>) -> Option<KeyCommand> {
    key.and_then(|key| key.parse().ok())
}

/// Arrow keys on a slider without lightbox. `Escape` has nothing to close.
pub fn apply_key(cursor: &mut CarouselCursor, key: Option<&str>) {
    match parse_key(key) {
        Some(KeyCommand::Previous) => cursor.previous(),
        Some(KeyCommand::Next) => cursor.next(),
        Some(KeyCommand::Close) | None => {}
    }
}
