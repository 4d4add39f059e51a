//! Tests for the search progress spinner

#[cfg(test)]
mod tests {
    use tilestitch::algorithm::search::{SearchObserver, search_layout};
    use tilestitch::io::progress::SearchProgress;
    use tilestitch::spatial::orientation::OrientationCatalog;
    use tilestitch::spatial::synthetic::scrambled_puzzle;
    use tilestitch::spatial::tiles::TileSet;

    // Tests a hidden spinner still tracks steps and depth during a search
    // Verified by not decrementing the placed count on backtrack
    #[test]
    fn test_hidden_progress_tracks_search() {
        let puzzle = scrambled_puzzle(2, 8, 21).expect("puzzle");
        let catalog = OrientationCatalog::build(&TileSet::new(puzzle.tiles).expect("valid set"));
        let mut progress = SearchProgress::hidden(4);

        let outcome = search_layout(&catalog, None, &mut progress).expect("solvable");
        progress.finish();

        assert_eq!(progress.steps(), outcome.steps);
        assert_eq!(progress.deepest(), 4);
    }

    // Tests depth tracking never goes below zero
    #[test]
    fn test_progress_events_directly() {
        let puzzle = scrambled_puzzle(1, 8, 3).expect("puzzle");
        let catalog = OrientationCatalog::build(&TileSet::new(puzzle.tiles).expect("valid set"));
        let tile = catalog.variants().first().expect("variant");
        let mut progress = SearchProgress::hidden(1);

        progress.on_backtrack(0, 0, tile);
        progress.on_place(0, 0, tile);
        progress.on_step(256);

        assert_eq!(progress.deepest(), 1);
        assert_eq!(progress.steps(), 256);
    }
}
