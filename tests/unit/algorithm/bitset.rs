//! Tests for `TileBitset` slot tracking

#[cfg(test)]
mod tests {
    use tilestitch::algorithm::bitset::TileBitset;

    // Verifies new TileBitset is empty with count 0
    // Verified by initializing bitset with all bits set to 1
    #[test]
    fn test_new_bitset() {
        let bitset = TileBitset::new(10);
        assert_eq!(bitset.count(), 0);
        assert!(bitset.is_empty());
        assert_eq!(bitset.capacity(), 10);
    }

    // Tests insertion and containment checking
    // Verified by removing the bit-setting logic from insert method
    #[test]
    fn test_insert_and_contains() {
        let mut bitset = TileBitset::new(10);
        assert!(bitset.insert(5));
        assert!(bitset.contains(5));
        assert!(!bitset.contains(3));
        assert_eq!(bitset.count(), 1);
    }

    // Tests repeated and out-of-range inserts report false
    #[test]
    fn test_insert_rejects_repeats_and_overflow() {
        let mut bitset = TileBitset::new(4);
        assert!(bitset.insert(0));
        assert!(!bitset.insert(0));
        assert!(!bitset.insert(4));
        assert!(!bitset.contains(4));
        assert_eq!(bitset.count(), 1);
    }

    // Tests removal clears only the given slot
    // Verified by clearing every slot on remove
    #[test]
    fn test_remove() {
        let mut bitset = TileBitset::new(8);
        bitset.insert(1);
        bitset.insert(6);
        assert!(bitset.remove(1));
        assert!(!bitset.remove(1));
        assert!(!bitset.remove(20));
        assert_eq!(bitset.to_vec(), vec![6]);
    }

    // Tests slots come back in ascending order
    #[test]
    fn test_to_vec_sorted() {
        let mut bitset = TileBitset::new(16);
        for slot in [9, 2, 15, 0] {
            bitset.insert(slot);
        }
        assert_eq!(bitset.to_vec(), vec![0, 2, 9, 15]);
        assert_eq!(bitset.to_string(), "TileBitset(4 tiles: [0, 2, 9, 15])");
    }
}
