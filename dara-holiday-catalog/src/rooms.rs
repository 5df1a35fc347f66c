use crate::record::{Floor, RoomRecord};

/// Amenities every apartment has. Per-room extras live in
/// [`RoomRecord::features`] and are never merged into this list.
pub const DEFAULT_AMENITIES: &[&str] = &[
    "Wifi",
    "Aria Condizionata",
    "Riscaldamento",
    "Cucina",
    "Frigorifero",
    "Macchina Caffè",
    "TV",
    "Asciugacapelli",
];

#[allow(clippy::too_many_arguments)]
const fn room(
    id: &'static str,
    name: &'static str,
    kind: &'static str,
    capacity: u8,
    floor: Floor,
    size: u16,
    outdoor: &'static str,
    features: &'static [&'static str],
) -> RoomRecord {
    RoomRecord {
        id,
        name,
        kind,
        capacity,
        floor,
        size,
        outdoor,
        features,
    }
}

/// The apartments as they exist in the building, in the order they are listed
/// on the website.
pub const ROOMS: &[RoomRecord] = &[
    // ground floor
    room("101", "Appartamento 101", "Deluxe", 2, Floor::Ground, 55, "Terrazza", &[]),
    room("102", "Appartamento 102", "Standard", 2, Floor::Ground, 48, "Terrazza", &[]),
    room("103", "Appartamento 103", "Deluxe", 4, Floor::Ground, 59, "Terrazza", &["Sofa"]),
    room("106", "Appartamento 106", "Deluxe", 2, Floor::Ground, 59, "Terrazza", &[]),
    room("107", "Appartamento 107", "Deluxe", 2, Floor::Ground, 60, "Terrazza", &[]),
    room("108", "Appartamento 108", "Deluxe", 2, Floor::Ground, 53, "Terrazza", &[]),
    // first floor, wing A
    room("201", "Appartamento 201", "Standard", 2, Floor::First, 46, "Balcone", &[]),
    room("202", "Appartamento 202", "Deluxe", 2, Floor::First, 60, "Balcone", &[]),
    room("203", "Appartamento 203", "Standard", 2, Floor::First, 46, "Balcone", &[]),
    room("204", "Appartamento 204", "Deluxe", 2, Floor::First, 52, "Balcone", &[]),
    room("205", "Appartamento 205", "Deluxe", 2, Floor::First, 53, "Balcone", &[]),
    room("206", "Appartamento 206", "Standard", 2, Floor::First, 45, "Balcone", &[]),
    room("207", "Appartamento 207", "Standard", 2, Floor::First, 47, "Balcone", &[]),
    room("208", "Appartamento 208", "Deluxe", 2, Floor::First, 56, "Balcone", &[]),
    // ground floor, courtyard
    room("301", "Appartamento 301", "Deluxe", 4, Floor::Ground, 63, "Terrazza", &["Sofa"]),
    room("302", "Appartamento 302", "Deluxe", 4, Floor::Ground, 63, "Terrazza", &["Twinbed (2)"]),
    room("303", "Appartamento 303", "Deluxe", 4, Floor::Ground, 58, "Terrazza", &["Sofa"]),
    room("304", "Appartamento 304", "Standard", 2, Floor::Ground, 49, "Terrazza", &[]),
    room("305", "Appartamento 305", "Deluxe", 2, Floor::Ground, 58, "Terrazza", &[]),
    room("306", "Appartamento 306", "Deluxe", 3, Floor::Ground, 63, "Terrazza", &["Singlebed (1)"]),
    room("307", "Appartamento 307", "Standard", 2, Floor::Ground, 49, "Terrazza", &[]),
    room("308", "Appartamento 308", "Deluxe", 4, Floor::Ground, 57, "Terrazza", &["Sofa"]),
    // first floor, wing B
    room("401", "Appartamento 401", "Deluxe", 2, Floor::First, 71, "Balcone", &[]),
    room("402", "Appartamento 402", "Deluxe", 4, Floor::First, 73, "Balcone", &["Sofa"]),
    room("403", "Appartamento 403", "Deluxe", 4, Floor::First, 68, "Balcone", &["Sofa"]),
    room("404", "Appartamento 404", "Deluxe", 2, Floor::First, 52, "Balcone", &[]),
    room("405", "Appartamento 405", "Deluxe", 2, Floor::First, 57, "Balcone", &[]),
    room("406", "Appartamento 406", "Deluxe", 2, Floor::First, 50, "Balcone", &[]),
    room("407", "Appartamento 407", "Standard", 2, Floor::First, 49, "Balcone", &[]),
    room("408", "Appartamento 408", "Deluxe", 2, Floor::First, 58, "Balcone", &[]),
];
