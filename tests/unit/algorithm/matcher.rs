//! Tests for edge compatibility rules

#[cfg(test)]
mod tests {
    use tilestitch::algorithm::matcher::{fits_below, fits_right_of, matches, shares_edge};
    use tilestitch::spatial::orientation::{EdgeSignature, OrientedTile, Side, orient_tile};
    use tilestitch::spatial::tiles::PhysicalTile;

    fn identity(slot: usize, id: &str, rows: &[&str]) -> OrientedTile {
        let tile = PhysicalTile::from_rows(id, rows).expect("valid tile");
        orient_tile(slot, &tile)
            .into_iter()
            .next()
            .expect("identity variant")
    }

    // Tests a tile whose left column equals another's right column fits beside it
    // Verified by comparing against the candidate's right edge
    #[test]
    fn test_fits_right_of() {
        let left = identity(0, "1", &["..#", "...", "..."]);
        let right = identity(1, "2", &["#.#", "...", "..."]);
        assert!(fits_right_of(&left, &right));
        assert!(!fits_right_of(&right, &left));
    }

    // Tests a tile whose top row equals another's bottom row fits below it
    #[test]
    fn test_fits_below() {
        let above = identity(0, "1", &["...", "...", ".##"]);
        let below = identity(1, "2", &[".##", "...", "#.."]);
        assert!(fits_below(&above, &below));
        assert!(!fits_below(&below, &above));
    }

    // Tests matching is exact: a reversed edge does not match
    #[test]
    fn test_matches_is_not_reversal_tolerant() {
        let tile = identity(0, "1", &["##.", "...", "..."]);
        let up = tile.edge(Side::Up);
        assert!(matches(up, up));
        assert!(!matches(up, &up.reversed()));
        assert!(shares_edge(up, &up.reversed()));
    }

    // Tests shares_edge rejects unrelated edges
    #[test]
    fn test_shares_edge_rejects_different_edges() {
        let tile = identity(0, "1", &["##.", "...", "#.."]);
        let up: &EdgeSignature = tile.edge(Side::Up);
        let down = tile.edge(Side::Down);
        assert!(!shares_edge(up, down));
    }
}
