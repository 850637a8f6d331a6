//! Position sets packed into 5-bit masks
//!
//! A subset of the five word positions is encoded as a 5-bit integer, with
//! the most significant of the five bits standing for position 1. The mask
//! value doubles as a package version (`"{mask}.0.0"`), so the encoding has
//! to be a total bijection over the 32 possible subsets.

use std::fmt;

/// Number of letters in a word, and of positions in a position set
pub const WORD_LEN: u8 = 5;

/// Number of distinct position masks (2^5)
pub const MASK_COUNT: u8 = 32;

/// A subset of the word positions `1..=5`, stored as a 5-bit mask
///
/// # Examples
/// ```
/// use wordle_depsolve::core::PositionSet;
///
/// let set = PositionSet::encode([1, 3]);
/// assert!(set.contains(1));
/// assert!(!set.contains(2));
/// assert_eq!(set.mask(), 0b10100);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PositionSet(u8);

impl PositionSet {
    /// The empty set (mask 0)
    pub const EMPTY: Self = Self(0);

    /// All five positions (mask 31)
    pub const ALL: Self = Self(0b11111);

    /// Mask bit for a single position, MSB of the 5-bit field = position 1
    const fn bit(position: u8) -> u8 {
        debug_assert!(position >= 1 && position <= WORD_LEN);
        1 << (WORD_LEN - position)
    }

    /// Create a set from a raw mask value
    ///
    /// # Panics
    /// Panics in debug mode if `mask` >= 32
    #[inline]
    #[must_use]
    pub const fn from_mask(mask: u8) -> Self {
        debug_assert!(mask < MASK_COUNT, "Position mask must be < 32");
        Self(mask)
    }

    /// Encode a collection of positions (`1..=5`) into a set
    #[must_use]
    pub fn encode(positions: impl IntoIterator<Item = u8>) -> Self {
        let mut mask = 0;
        for position in positions {
            mask |= Self::bit(position);
        }
        Self(mask)
    }

    /// The raw mask value (0..=31)
    #[inline]
    #[must_use]
    pub const fn mask(self) -> u8 {
        self.0
    }

    /// Whether `position` (`1..=5`) is in the set
    #[inline]
    #[must_use]
    pub const fn contains(self, position: u8) -> bool {
        self.0 & Self::bit(position) != 0
    }

    /// Add `position` (`1..=5`) to the set
    #[inline]
    pub const fn insert(&mut self, position: u8) {
        self.0 |= Self::bit(position);
    }

    /// Decode the set back into ascending positions
    ///
    /// Exact inverse of [`PositionSet::encode`].
    pub fn positions(self) -> impl Iterator<Item = u8> {
        (1..=WORD_LEN).filter(move |&p| self.contains(p))
    }

    /// Whether the set is empty
    #[inline]
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Set difference
    #[inline]
    #[must_use]
    pub const fn without(self, other: Self) -> Self {
        Self(self.0 & !other.0)
    }

    /// Whether the two sets share at least one position
    #[inline]
    #[must_use]
    pub const fn overlaps(self, other: Self) -> bool {
        self.0 & other.0 != 0
    }

    /// Iterate over all 32 masks, including the empty one
    pub fn all_masks() -> impl Iterator<Item = Self> {
        (0..MASK_COUNT).map(Self)
    }
}

impl fmt::Display for PositionSet {
    /// Positions concatenated as digits, e.g. `{3,4,5}` prints as `345`
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for position in self.positions() {
            write!(f, "{position}")?;
        }
        Ok(())
    }
}
