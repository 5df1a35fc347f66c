//! Wrapping cursor shared by the welcome slider, the room slider and both
//! lightboxes. All navigation goes through [`CarouselCursor::next`] and
//! [`CarouselCursor::previous`] so every slider wraps the same way.

use core::num::NonZeroUsize;
use core::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CarouselCursor {
    index: usize,
    len: NonZeroUsize,
}

impl CarouselCursor {
    #[must_use]
    pub const fn new(len: NonZeroUsize) -> Self {
        Self { index: 0, len }
    }

    /// Cursor at `index`, or `None` if there is nothing to show or the index
    /// is outside the sequence.
    #[must_use]
    pub fn at(len: usize, index: usize) -> Option<Self> {
        let len = NonZeroUsize::new(len)?;
        (index < len.get()).then_some(Self { index, len })
    }

    #[must_use]
    pub const fn index(self) -> usize {
        self.index
    }

    #[must_use]
    pub const fn len(self) -> usize {
        self.len.get()
    }

    pub fn next(&mut self) {
        self.index = (self.index + 1) % self.len.get();
    }

    pub fn previous(&mut self) {
        let len = self.len.get();
        self.index = (self.index + len - 1) % len;
    }

    /// # Panics
    ///
    /// If `index` is outside the sequence.
    pub fn jump_to(&mut self, index: usize) {
        assert!(
            index < self.len.get(),
            "carousel index {index} out of range for {} items",
            self.len
        );
        self.index = index;
    }

    /// Index the next call to [`Self::next`] would move to.
    #[must_use]
    pub fn peek_next(self) -> usize {
        let mut cursor = self;
        cursor.next();
        cursor.index
    }

    /// Index the next call to [`Self::previous`] would move to.
    #[must_use]
    pub fn peek_previous(self) -> usize {
        let mut cursor = self;
        cursor.previous();
        cursor.index
    }
}

/// Keyboard input understood by sliders and lightboxes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyCommand {
    Previous,
    Next,
    Close,
}

impl FromStr for KeyCommand {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ArrowLeft" => Ok(Self::Previous),
            "ArrowRight" => Ok(Self::Next),
            "Escape" => Ok(Self::Close),
            _ => Err(()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Lightbox {
    #[default]
    Closed,
    Open(CarouselCursor),
}

impl Lightbox {
    #[must_use]
    pub const fn is_open(self) -> bool {
        matches!(self, Self::Open(_))
    }

    pub fn apply(&mut self, command: KeyCommand) {
        if let Self::Open(cursor) = self {
            match command {
                KeyCommand::Previous => cursor.previous(),
                KeyCommand::Next => cursor.next(),
                KeyCommand::Close => *self = Self::Closed,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cursor(len: usize, index: usize) -> CarouselCursor {
        CarouselCursor::at(len, index).unwrap()
    }

    #[test]
    fn next_len_times_returns_to_start() {
        for len in 1..=9 {
            for start in 0..len {
                let mut cursor = cursor(len, start);
                for _ in 0..len {
                    cursor.next();
                }
                assert_eq!(cursor.index(), start, "len {len} start {start}");
            }
        }
    }

    #[test]
    fn previous_from_zero_wraps_to_last() {
        for len in 1..=9 {
            let mut cursor = cursor(len, 0);
            cursor.previous();
            assert_eq!(cursor.index(), len - 1);
        }
    }

    #[test]
    fn single_item_stays_put() {
        let mut cursor = cursor(1, 0);
        cursor.next();
        assert_eq!(cursor.index(), 0);
        cursor.previous();
        assert_eq!(cursor.index(), 0);
    }

    #[test]
    fn checked_constructor_rejects_out_of_range() {
        assert!(CarouselCursor::at(0, 0).is_none());
        assert!(CarouselCursor::at(5, 5).is_none());
        assert_eq!(CarouselCursor::at(5, 4).map(CarouselCursor::index), Some(4));
    }

    #[test]
    fn peeking_does_not_move() {
        let cursor = cursor(5, 4);
        assert_eq!(cursor.peek_next(), 0);
        assert_eq!(cursor.peek_previous(), 3);
        assert_eq!(cursor.index(), 4);
    }

    #[test]
    fn jump_to_in_range() {
        let mut cursor = cursor(5, 0);
        cursor.jump_to(3);
        assert_eq!(cursor.index(), 3);
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn jump_to_out_of_range_panics() {
        cursor(5, 0).jump_to(5);
    }

    #[test]
    fn keys_drive_the_lightbox() {
        let mut lightbox = Lightbox::Open(cursor(3, 0));
        lightbox.apply("ArrowLeft".parse().unwrap());
        assert_eq!(lightbox, Lightbox::Open(cursor(3, 2)));
        lightbox.apply("ArrowRight".parse().unwrap());
        assert_eq!(lightbox, Lightbox::Open(cursor(3, 0)));
        lightbox.apply("Escape".parse().unwrap());
        assert_eq!(lightbox, Lightbox::Closed);
        lightbox.apply(KeyCommand::Next);
        assert!(!lightbox.is_open());
        assert!("Enter".parse::<KeyCommand>().is_err());
    }
}
