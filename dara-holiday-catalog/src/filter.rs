use core::fmt;
use core::num::ParseIntError;
use core::str::FromStr;

use crate::catalog::RoomEntity;

/// Guest filter of the listing page.
///
/// `Exactly` matches the room capacity exactly, a room for four guests is not
/// offered to a party of three.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CapacitySelector {
    #[default]
    All,
    Exactly(u8),
}

/// The selector pills shown on the listing page, in order.
pub const CAPACITY_CHOICES: [CapacitySelector; 4] = [
    CapacitySelector::All,
    CapacitySelector::Exactly(2),
    CapacitySelector::Exactly(3),
    CapacitySelector::Exactly(4),
];

impl FromStr for CapacitySelector {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("all") {
            Ok(Self::All)
        } else {
            s.parse().map(Self::Exactly)
        }
    }
}

impl fmt::Display for CapacitySelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => f.write_str("all"),
            Self::Exactly(capacity) => write!(f, "{capacity}"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct FilteredRooms<'a> {
    selector: CapacitySelector,
    rooms: Vec<&'a RoomEntity>,
}

impl<'a> FilteredRooms<'a> {
    #[must_use]
    pub const fn selector(&self) -> CapacitySelector {
        self.selector
    }

    #[must_use]
    pub fn rooms(&self) -> &[&'a RoomEntity] {
        &self.rooms
    }

    #[must_use]
    pub const fn is_unfiltered(&self) -> bool {
        matches!(self.selector, CapacitySelector::All)
    }

    /// A filter that matched nothing. Not the same as an empty catalog
    /// without a filter.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rooms.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.rooms.len()
    }
}

#[must_use]
pub fn filter_by_capacity(catalog: &[RoomEntity], selector: CapacitySelector) -> FilteredRooms<'_> {
    let rooms = catalog
        .iter()
        .filter(|room| match selector {
            CapacitySelector::All => true,
            CapacitySelector::Exactly(capacity) => room.capacity == capacity,
        })
        .collect();
    FilteredRooms { selector, rooms }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;

    fn ids(filtered: &FilteredRooms<'_>) -> Vec<&'static str> {
        filtered.rooms().iter().map(|room| room.id).collect()
    }

    #[test]
    fn all_keeps_the_catalog() {
        let catalog = Catalog::shipped().rooms();
        let filtered = filter_by_capacity(catalog, CapacitySelector::All);
        assert!(filtered.is_unfiltered());
        assert_eq!(
            ids(&filtered),
            catalog.iter().map(|room| room.id).collect::<Vec<_>>()
        );
    }

    #[test]
    fn four_guests_is_an_exact_match() {
        let filtered = filter_by_capacity(Catalog::shipped().rooms(), CapacitySelector::Exactly(4));
        assert_eq!(
            ids(&filtered),
            ["103", "301", "302", "303", "308", "402", "403"]
        );
        assert!(!filtered.is_unfiltered());
    }

    #[test]
    fn larger_rooms_are_not_offered_to_smaller_parties() {
        let filtered = filter_by_capacity(Catalog::shipped().rooms(), CapacitySelector::Exactly(3));
        assert_eq!(ids(&filtered), ["306"]);
    }

    #[test]
    fn no_match_is_empty_but_filtered() {
        let filtered = filter_by_capacity(Catalog::shipped().rooms(), CapacitySelector::Exactly(9));
        assert!(filtered.is_empty());
        assert!(!filtered.is_unfiltered());
    }

    #[test]
    fn parse_and_display() {
        assert_eq!("all".parse::<CapacitySelector>(), Ok(CapacitySelector::All));
        assert_eq!("ALL".parse::<CapacitySelector>(), Ok(CapacitySelector::All));
        assert_eq!("2".parse::<CapacitySelector>(), Ok(CapacitySelector::Exactly(2)));
        assert!("two".parse::<CapacitySelector>().is_err());
        assert_eq!(CapacitySelector::Exactly(3).to_string(), "3");
        assert_eq!(CapacitySelector::All.to_string(), "all");
    }
}
