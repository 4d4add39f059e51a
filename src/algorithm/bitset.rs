use bitvec::prelude::*;
use std::fmt;

/// Fixed-size bitset of physical tile slots
///
/// Tracks which physical tiles are currently placed during the search. Slots
/// are 0-based positions in the tile set; a slot marks every orientation of
/// that tile as unavailable.
#[derive(Clone, Debug)]
pub struct TileBitset {
    bits: BitVec,
}

impl TileBitset {
    /// Create a bitset with no slots marked
    pub fn new(capacity: usize) -> Self {
        Self {
            bits: bitvec![0; capacity],
        }
    }

    /// Number of slots the set can track
    pub fn capacity(&self) -> usize {
        self.bits.len()
    }

    /// Mark a slot; returns false if it was already marked or out of range
    pub fn insert(&mut self, slot: usize) -> bool {
        if slot >= self.capacity() || self.contains(slot) {
            return false;
        }
        self.bits.set(slot, true);
        true
    }

    /// Clear a slot; returns whether it was marked
    pub fn remove(&mut self, slot: usize) -> bool {
        if !self.contains(slot) {
            return false;
        }
        self.bits.set(slot, false);
        true
    }

    /// Test slot membership
    pub fn contains(&self, slot: usize) -> bool {
        self.bits.get(slot).as_deref() == Some(&true)
    }

    /// Test if no slots are marked
    pub fn is_empty(&self) -> bool {
        self.bits.not_any()
    }

    /// Count marked slots
    pub fn count(&self) -> usize {
        self.bits.count_ones()
    }

    /// Extract all marked slots in ascending order
    pub fn to_vec(&self) -> Vec<usize> {
        self.bits.iter_ones().collect()
    }
}

impl fmt::Display for TileBitset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TileBitset({} tiles: {:?})", self.count(), self.to_vec())
    }
}
