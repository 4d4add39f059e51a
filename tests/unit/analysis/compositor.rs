//! Tests for stitching a layout into a composite image

#[cfg(test)]
mod tests {
    use tilestitch::TileError;
    use tilestitch::analysis::compositor::compose;
    use tilestitch::spatial::grid::TileGrid;
    use tilestitch::spatial::orientation::{OrientedTile, orient_tile};
    use tilestitch::spatial::tiles::PhysicalTile;

    fn identity(slot: usize, id: &str, rows: &[&str]) -> OrientedTile {
        let tile = PhysicalTile::from_rows(id, rows).expect("valid tile");
        orient_tile(slot, &tile)
            .into_iter()
            .next()
            .expect("identity variant")
    }

    fn quadrant_tiles() -> Vec<OrientedTile> {
        vec![
            identity(0, "1", &["####", ".#..", "....", "...."]),
            identity(1, "2", &["....", "..#.", "....", "...#"]),
            identity(2, "3", &["....", "....", ".#..", "#..."]),
            identity(3, "4", &["....", "....", "..#.", "...."]),
        ]
    }

    // Tests interiors land in their blocks and borders are dropped
    // Verified by offsetting block reads by zero instead of one
    #[test]
    fn test_compose_places_trimmed_interiors() {
        let tiles = quadrant_tiles();
        let mut grid = TileGrid::new(2, 2);
        for (cell, tile) in tiles.iter().enumerate() {
            grid.place(cell / 2, cell % 2, tile).expect("in range");
        }

        let image = compose(&grid).expect("complete layout");
        assert_eq!(image.side(), 4);
        assert_eq!(image.to_string(), "#..#\n....\n....\n#..#\n");
    }

    // Tests an unplaced cell is a precondition error
    #[test]
    fn test_compose_rejects_incomplete_layout() {
        let tiles = quadrant_tiles();
        let mut grid = TileGrid::new(2, 2);
        grid.place(0, 0, tiles.first().expect("tile")).expect("in range");
        assert!(matches!(
            compose(&grid),
            Err(TileError::Precondition { .. })
        ));
    }

    // Tests a non-square layout is a precondition error
    #[test]
    fn test_compose_rejects_non_square_layout() {
        let tiles = quadrant_tiles();
        let mut grid = TileGrid::new(1, 2);
        grid.place(0, 0, tiles.first().expect("tile")).expect("in range");
        grid.place(0, 1, tiles.get(1).expect("tile")).expect("in range");
        assert!(compose(&grid).is_err());
    }

    // Tests a 3x3 tile contributes a single interior cell
    #[test]
    fn test_compose_minimum_tile_size() {
        let tile = identity(0, "9", &["###", "#.#", "###"]);
        let mut grid = TileGrid::new(1, 1);
        grid.place(0, 0, &tile).expect("in range");
        let image = compose(&grid).expect("complete layout");
        assert_eq!(image.side(), 1);
        assert_eq!(image.count_set(), 0);
    }
}
