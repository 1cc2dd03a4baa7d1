//! Compact set of selected interval indices.

use std::cmp::Ordering;

/// Bitset over original interval indices.
///
/// Besides membership it defines the tie-break between equally profitable
/// selections: see [`SelectionMask::preference`].
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct SelectionMask {
    words: Box<[u64]>,
}

impl SelectionMask {
    /// Empty selection able to hold indices `0..len`.
    pub fn with_len(len: usize) -> Self {
        Self {
            words: vec![0u64; len.div_ceil(64)].into_boxed_slice(),
        }
    }

    #[inline]
    pub fn insert(&mut self, index: usize) {
        self.words[index / 64] |= 1u64 << (index % 64);
    }

    #[inline]
    pub fn contains(&self, index: usize) -> bool {
        self.words
            .get(index / 64)
            .is_some_and(|w| (w >> (index % 64)) & 1 == 1)
    }

    /// Number of selected indices.
    pub fn count(&self) -> usize {
        self.words.iter().map(|w| w.count_ones() as usize).sum()
    }

    /// Selected indices in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.words.iter().enumerate().flat_map(|(wi, &word)| {
            let mut bits = word;
            std::iter::from_fn(move || {
                if bits == 0 {
                    return None;
                }
                let bit = bits.trailing_zeros() as usize;
                bits &= bits - 1;
                Some(wi * 64 + bit)
            })
        })
    }

    /// Tie-break between two selections of equal profit.
    ///
    /// The lowest index present in exactly one of the two decides: the mask
    /// containing it is `Greater` (preferred). Adding the same disjoint
    /// indices to both masks never changes the outcome.
    pub fn preference(&self, other: &Self) -> Ordering {
        for (a, b) in self.words.iter().zip(other.words.iter()) {
            let diff = a ^ b;
            if diff != 0 {
                let bit = diff.trailing_zeros();
                return if (a >> bit) & 1 == 1 {
                    Ordering::Greater
                } else {
                    Ordering::Less
                };
            }
        }
        Ordering::Equal
    }
}
