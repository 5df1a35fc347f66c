//! Static content of the DaraHoliday website: the room catalog, the media
//! tables and the cursor used by every slider and lightbox.

pub mod carousel;
pub mod catalog;
pub mod error;
pub mod filter;
pub mod gallery;
pub mod record;
pub mod reviews;
pub mod rooms;

pub use carousel::{CarouselCursor, KeyCommand, Lightbox};
pub use catalog::{derive_catalog, Catalog, RoomEntity};
pub use error::CatalogError;
pub use filter::{filter_by_capacity, CapacitySelector, FilteredRooms, CAPACITY_CHOICES};
pub use gallery::{MediaCategory, MediaItem, MediaKind};
pub use record::{Floor, RoomRecord};
pub use reviews::Review;
