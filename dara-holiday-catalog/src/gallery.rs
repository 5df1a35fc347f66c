use core::str::FromStr;

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaKind {
    Image,
    Video,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaCategory {
    #[default]
    Marsala,
    Renders,
}

impl MediaCategory {
    pub const ALL: [Self; 2] = [Self::Marsala, Self::Renders];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Marsala => "marsala",
            Self::Renders => "renders",
        }
    }
}

impl FromStr for MediaCategory {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "marsala" => Ok(Self::Marsala),
            "renders" => Ok(Self::Renders),
            _ => Err(()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MediaItem {
    pub id: u16,
    pub kind: MediaKind,
    pub src: &'static str,
    pub category: MediaCategory,
    pub alt: &'static str,
}

const fn image(id: u16, src: &'static str, alt: &'static str) -> MediaItem {
    MediaItem {
        id,
        kind: MediaKind::Image,
        src,
        category: MediaCategory::Marsala,
        alt,
    }
}

const fn video(id: u16, src: &'static str, category: MediaCategory, alt: &'static str) -> MediaItem {
    MediaItem {
        id,
        kind: MediaKind::Video,
        src,
        category,
        alt,
    }
}

pub const GALLERY_ITEMS: &[MediaItem] = &[
    video(101, "/videos/marsala/hero.mp4", MediaCategory::Marsala, "Saline di Marsala"),
    video(102, "/videos/marsala/kitesurf.mp4", MediaCategory::Marsala, "Kitesurf allo Stagnone"),
    image(103, "/images/welcome-1.jpg", "Tramonto Saline dello Stagnone"),
    image(104, "/images/welcome-2.jpg", "Favignana Cala Rossa"),
    image(105, "/images/welcome-3.jpg", "Tramonto Saline dello Stagnone"),
    image(106, "/images/welcome-4.jpg", "Kitesurf allo Stagnone"),
    image(107, "/images/welcome-5.jpg", "Tramonto Saline"),
    image(108, "/images/welcome-6.jpg", "Isola Lunga"),
    image(109, "/images/welcome-7.jpg", "Amerigo Vespucci da Favignana"),
    image(110, "/images/welcome-8.jpg", "Favignana"),
    image(111, "/images/welcome-9.jpg", "Saline dello Stagnone"),
    image(112, "/images/home-main.jpg", "Saline dello Stagnone"),
    video(201, "/videos/render/CLIP 13.mp4", MediaCategory::Renders, "Clip Render 13"),
    video(202, "/videos/render/CLIP 14.mp4", MediaCategory::Renders, "Clip Render 14"),
    video(203, "/videos/render/esterno-1.mp4", MediaCategory::Renders, "Esterno Diurno"),
    video(204, "/videos/render/esterno-2.mp4", MediaCategory::Renders, "Esterno Dettagli"),
    video(205, "/videos/render/esterno-3.mp4", MediaCategory::Renders, "Esterno Panoramica"),
    video(206, "/videos/render/esterno-4.mp4", MediaCategory::Renders, "Esterno Sera"),
    video(208, "/videos/render/terrazzo-2.mp4", MediaCategory::Renders, "Vista Terrazzo"),
    video(209, "/videos/render/volo-uccello.mp4", MediaCategory::Renders, "Vista Aerea"),
];

/// Images of the welcome slider on the home page.
pub const WELCOME_IMAGES: &[&str] = &[
    "/images/welcome-1.jpg",
    "/images/welcome-2.jpg",
    "/images/welcome-3.jpg",
    "/images/welcome-4.jpg",
    "/images/welcome-5.jpg",
    "/images/welcome-6.jpg",
    "/images/welcome-7.jpg",
    "/images/welcome-8.jpg",
    "/images/welcome-9.jpg",
];

#[must_use]
pub fn filter_by_category(category: MediaCategory) -> Vec<&'static MediaItem> {
    GALLERY_ITEMS
        .iter()
        .filter(|item| item.category == category)
        .collect()
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn categories_partition_the_gallery() {
        let marsala = filter_by_category(MediaCategory::Marsala);
        let renders = filter_by_category(MediaCategory::Renders);
        assert_eq!(marsala.len(), 12);
        assert_eq!(renders.len(), 8);
        assert_eq!(marsala.len() + renders.len(), GALLERY_ITEMS.len());
        assert!(renders.iter().all(|item| item.kind == MediaKind::Video));
    }

    #[test]
    fn ids_are_unique() {
        let ids: HashSet<_> = GALLERY_ITEMS.iter().map(|item| item.id).collect();
        assert_eq!(ids.len(), GALLERY_ITEMS.len());
    }

    #[test]
    fn category_round_trips_through_query_value() {
        for category in MediaCategory::ALL {
            assert_eq!(category.as_str().parse::<MediaCategory>(), Ok(category));
        }
        assert!("apartments".parse::<MediaCategory>().is_err());
    }
}
