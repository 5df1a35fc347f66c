use once_cell::sync::Lazy;
use serde::Serialize;

use crate::record::{outdoor_label, Floor, RoomRecord};
use crate::rooms::{DEFAULT_AMENITIES, ROOMS};

/// A room as the pages show it: the static record plus everything derived
/// from it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RoomEntity {
    pub id: &'static str,
    pub name: &'static str,
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub capacity: u8,
    pub floor: Floor,
    pub size: u16,
    pub outdoor: &'static str,
    pub features: &'static [&'static str],
    pub description: String,
    /// Always 0, prices are only known by the booking provider.
    pub price: u32,
    pub amenities: &'static [&'static str],
    pub main_image: String,
    pub gallery: [String; 4],
}

impl RoomEntity {
    /// Main image followed by the gallery, the sequence every room slider
    /// cycles through.
    #[must_use]
    pub fn slides(&self) -> Vec<&str> {
        core::iter::once(self.main_image.as_str())
            .chain(self.gallery.iter().map(String::as_str))
            .collect()
    }
}

fn photo(id: &str, number: u8) -> String {
    format!("/foto/cam{id}/{number}.webp")
}

fn derive_room(record: &RoomRecord) -> RoomEntity {
    let description = format!(
        "{} apartment on the {} with {}.",
        record.kind,
        record.floor.label(),
        outdoor_label(record.outdoor),
    );
    RoomEntity {
        id: record.id,
        name: record.name,
        kind: record.kind,
        capacity: record.capacity,
        floor: record.floor,
        size: record.size,
        outdoor: record.outdoor,
        features: record.features,
        description,
        price: 0,
        amenities: DEFAULT_AMENITIES,
        main_image: photo(record.id, 1),
        gallery: [2, 3, 4, 5].map(|number| photo(record.id, number)),
    }
}

/// Turns the static table into display-ready rooms, one per record, in table
/// order.
#[must_use]
pub fn derive_catalog(records: &[RoomRecord]) -> Vec<RoomEntity> {
    records.iter().map(derive_room).collect()
}

static SHIPPED: Lazy<Catalog> = Lazy::new(|| Catalog::new(ROOMS));

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    rooms: Vec<RoomEntity>,
}

impl Catalog {
    #[must_use]
    pub fn new(records: &[RoomRecord]) -> Self {
        Self {
            rooms: derive_catalog(records),
        }
    }

    /// The catalog of the shipped room table, derived on first use.
    #[must_use]
    pub fn shipped() -> &'static Self {
        &SHIPPED
    }

    #[must_use]
    pub fn rooms(&self) -> &[RoomEntity] {
        &self.rooms
    }

    #[must_use]
    pub fn find(&self, id: &str) -> Option<&RoomEntity> {
        self.rooms.iter().find(|room| room.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_entity_per_record_in_order() {
        let catalog = derive_catalog(ROOMS);
        assert_eq!(catalog.len(), ROOMS.len());
        for (record, entity) in ROOMS.iter().zip(&catalog) {
            assert_eq!(record.id, entity.id);
            assert_eq!(entity.main_image, format!("/foto/cam{}/1.webp", record.id));
        }
    }

    #[test]
    fn gallery_has_four_numbered_photos() {
        for entity in Catalog::shipped().rooms() {
            assert_eq!(entity.gallery.len(), 4);
            for (k, path) in entity.gallery.iter().enumerate() {
                assert_eq!(*path, format!("/foto/cam{}/{}.webp", entity.id, k + 2));
            }
        }
    }

    #[test]
    fn description_uses_floor_and_outdoor_labels() {
        let catalog = Catalog::shipped();
        let ground = catalog.find("101").unwrap();
        assert_eq!(ground.description, "Deluxe apartment on the ground floor with terrace.");
        let first = catalog.find("201").unwrap();
        assert_eq!(first.description, "Standard apartment on the first floor with balcony.");
    }

    #[test]
    fn unknown_outdoor_is_kept_verbatim() {
        let record = RoomRecord {
            id: "901",
            name: "Appartamento 901",
            kind: "Suite",
            capacity: 2,
            floor: Floor::First,
            size: 40,
            outdoor: "Giardino",
            features: &[],
        };
        let entity = &derive_catalog(&[record])[0];
        assert_eq!(entity.description, "Suite apartment on the first floor with Giardino.");
    }

    #[test]
    fn amenities_are_shared_and_features_kept_apart() {
        let catalog = Catalog::shipped();
        for entity in catalog.rooms() {
            assert_eq!(entity.amenities, DEFAULT_AMENITIES);
            assert_eq!(entity.price, 0);
        }
        let with_sofa = catalog.find("103").unwrap();
        assert_eq!(with_sofa.features, &["Sofa"]);
        assert!(!with_sofa.amenities.contains(&"Sofa"));
    }

    #[test]
    fn derivation_is_repeatable() {
        assert_eq!(derive_catalog(ROOMS), derive_catalog(ROOMS));
        assert!(core::ptr::eq(Catalog::shipped(), Catalog::shipped()));
    }

    #[test]
    fn slides_start_with_main_image() {
        let room = Catalog::shipped().find("302").unwrap();
        assert_eq!(
            room.slides(),
            [
                "/foto/cam302/1.webp",
                "/foto/cam302/2.webp",
                "/foto/cam302/3.webp",
                "/foto/cam302/4.webp",
                "/foto/cam302/5.webp",
            ]
        );
    }

    #[test]
    fn unknown_room_is_absent() {
        assert!(Catalog::shipped().find("999").is_none());
    }

    #[test]
    fn serializes_type_and_floor_like_the_table() {
        let room = Catalog::shipped().find("201").unwrap();
        let value = serde_json::to_value(room).unwrap();
        assert_eq!(value["type"], "Standard");
        assert_eq!(value["floor"], 1);
        assert_eq!(value["main_image"], "/foto/cam201/1.webp");
    }
}
