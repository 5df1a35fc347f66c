use serde::Serialize;

use crate::error::CatalogError;

/// Floor of a room. Only the ground and the first floor exist in the building.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(into = "u8")]
pub enum Floor {
    Ground,
    First,
}

impl Floor {
    #[must_use]
    pub const fn ordinal(self) -> u8 {
        match self {
            Self::Ground => 0,
            Self::First => 1,
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Ground => "ground floor",
            Self::First => "first floor",
        }
    }
}

impl From<Floor> for u8 {
    fn from(value: Floor) -> Self {
        value.ordinal()
    }
}

impl TryFrom<u8> for Floor {
    type Error = CatalogError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::Ground),
            1 => Ok(Self::First),
            other => Err(CatalogError::UnsupportedFloor(other)),
        }
    }
}

/// One row of the static room table.
///
/// `id` doubles as the name of the photo folder (`/foto/cam{id}/`), so it must
/// never change for an existing room.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RoomRecord {
    pub id: &'static str,
    pub name: &'static str,
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub capacity: u8,
    pub floor: Floor,
    pub size: u16,
    pub outdoor: &'static str,
    pub features: &'static [&'static str],
}

/// Label used in generated descriptions. Unknown kinds of outdoor space are
/// shown as they are written in the table.
#[must_use]
pub fn outdoor_label(outdoor: &str) -> &str {
    match outdoor {
        "Terrazza" => "terrace",
        "Balcone" => "balcony",
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn floor_from_ordinal() {
        assert_eq!(Floor::try_from(0), Ok(Floor::Ground));
        assert_eq!(Floor::try_from(1), Ok(Floor::First));
        assert_eq!(Floor::try_from(2), Err(CatalogError::UnsupportedFloor(2)));
    }

    #[test]
    fn outdoor_labels_fall_back_to_input() {
        assert_eq!(outdoor_label("Terrazza"), "terrace");
        assert_eq!(outdoor_label("Balcone"), "balcony");
        assert_eq!(outdoor_label("Giardino"), "Giardino");
    }
}
