//! Image pairing - which image completes which.
//!
//! The pairing is built from the unshuffled deck: the first half lists every
//! image once and the second half repeats them at the same offsets, so the
//! image at offset `i` of one half is the partner of the image at offset `i`
//! of the other.

use std::collections::BTreeMap;

use crate::error::{ConfigurationError, Result};
use crate::types::ImageId;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImagePairing {
    partners: BTreeMap<ImageId, ImageId>,
}

impl ImagePairing {
    /// Build the pairing from an unshuffled deck.
    ///
    /// Fails with [`ConfigurationError::MisalignedPairs`] if the two halves do
    /// not line up, since that would pair two different pictures.
    pub fn from_halves(deck: &[ImageId]) -> Result<Self> {
        let half = deck.len() / 2;
        let (first, second) = deck.split_at(half);

        let mut partners = BTreeMap::new();
        for (index, (&a, &b)) in first.iter().zip(second).enumerate() {
            if a != b {
                return Err(ConfigurationError::MisalignedPairs { index });
            }
            partners.insert(a, b);
            partners.insert(b, a);
        }

        Ok(Self { partners })
    }

    pub fn partner(&self, image: ImageId) -> Option<ImageId> {
        self.partners.get(&image).copied()
    }

    /// Check if `second` completes the pair started by `first`
    pub fn is_match(&self, first: ImageId, second: ImageId) -> bool {
        self.partner(first) == Some(second)
    }

    pub fn len(&self) -> usize {
        self.partners.len()
    }

    pub fn is_empty(&self) -> bool {
        self.partners.is_empty()
    }
}

/// Build the unshuffled deck for a set of distinct images: every image once,
/// then every image again in the same order.
///
/// ```
/// use tui_memory_core::deck_from_images;
/// use tui_memory_types::ImageId;
///
/// let deck = deck_from_images(&[ImageId(1), ImageId(2)]);
/// assert_eq!(deck, vec![ImageId(1), ImageId(2), ImageId(1), ImageId(2)]);
/// ```
pub fn deck_from_images(images: &[ImageId]) -> Vec<ImageId> {
    let mut deck = Vec::with_capacity(images.len() * 2);
    deck.extend_from_slice(images);
    deck.extend_from_slice(images);
    deck
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn halves_pair_index_aligned() {
        let deck = deck_from_images(&[ImageId(1), ImageId(2), ImageId(3)]);
        let pairing = ImagePairing::from_halves(&deck).unwrap();

        assert_eq!(pairing.partner(ImageId(1)), Some(ImageId(1)));
        assert!(pairing.is_match(ImageId(2), ImageId(2)));
        assert!(!pairing.is_match(ImageId(2), ImageId(3)));
        assert_eq!(pairing.partner(ImageId(9)), None);
    }

    #[test]
    fn misaligned_halves_are_rejected() {
        let deck = [ImageId(1), ImageId(2), ImageId(2), ImageId(1)];
        assert_eq!(
            ImagePairing::from_halves(&deck),
            Err(ConfigurationError::MisalignedPairs { index: 0 })
        );
    }

    #[test]
    fn empty_deck_gives_empty_pairing() {
        let pairing = ImagePairing::from_halves(&[]).unwrap();
        assert!(pairing.is_empty());
    }
}
