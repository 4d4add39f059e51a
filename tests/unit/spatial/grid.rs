//! Tests for the layout grid of placed oriented tiles

#[cfg(test)]
mod tests {
    use tilestitch::TileError;
    use tilestitch::spatial::grid::{Placement, TileGrid};
    use tilestitch::spatial::orientation::{OrientedTile, orient_tile};
    use tilestitch::spatial::pixels::PixelGrid;
    use tilestitch::spatial::tiles::PhysicalTile;

    fn variants(ids: &[&str]) -> Vec<OrientedTile> {
        ids.iter()
            .enumerate()
            .flat_map(|(slot, id)| orient_tile(slot, &PhysicalTile::new(*id, PixelGrid::blank(3))))
            .collect()
    }

    // Tests placing and removing tiles updates occupancy
    #[test]
    fn test_place_and_remove() {
        let tiles = variants(&["11", "13"]);
        let first = tiles.first().expect("variant");
        let mut grid = TileGrid::new(2, 2);

        assert_eq!(grid.placed_count(), 0);
        assert!(grid.place(1, 0, first).expect("in range").is_none());
        assert_eq!(grid.placed_count(), 1);
        assert_eq!(grid.get(1, 0).map(OrientedTile::id), Some("11"));

        assert!(grid.remove(1, 0).is_some());
        assert!(grid.get(1, 0).is_none());
        assert!(grid.remove(1, 0).is_none());
    }

    // Tests placing outside the grid is a precondition error
    #[test]
    fn test_place_out_of_range() {
        let tiles = variants(&["11"]);
        let mut grid = TileGrid::new(1, 1);
        let result = grid.place(1, 0, tiles.first().expect("variant"));
        assert!(matches!(result, Err(TileError::Precondition { .. })));
    }

    // Tests corners and the layout snapshot of a full grid
    // Verified by swapping the top-right and bottom-left corner lookups
    #[test]
    fn test_corners_and_layout() {
        let tiles = variants(&["2", "3", "5", "7"]);
        let mut grid = TileGrid::new(2, 2);
        for (cell, tile) in tiles.iter().step_by(8).enumerate() {
            grid.place(cell / 2, cell % 2, tile).expect("in range");
        }
        assert!(grid.is_complete());

        let corners = grid.corners().expect("complete grid");
        let ids: Vec<&str> = corners.iter().map(|tile| tile.id()).collect();
        assert_eq!(ids, vec!["2", "3", "5", "7"]);
        assert_eq!(grid.corner_product().ok(), Some(210));

        let layout = grid.layout().expect("complete grid");
        assert_eq!(
            layout.get(1).and_then(|row| row.first()),
            Some(&Placement {
                id: "5".to_string(),
                orientation: 0
            })
        );
        assert_eq!(grid.placed().count(), 4);
    }

    // Tests incomplete grids cannot report corners or layouts
    #[test]
    fn test_incomplete_grid_errors() {
        let tiles = variants(&["2"]);
        let mut grid = TileGrid::new(2, 2);
        grid.place(0, 0, tiles.first().expect("variant")).expect("in range");

        assert!(!grid.is_complete());
        assert!(grid.corners().is_err());
        assert!(grid.layout().is_err());
        assert!(TileGrid::new(0, 0).corners().is_err());
    }
}
