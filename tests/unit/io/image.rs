//! Tests for PNG export of composite images

#[cfg(test)]
mod tests {
    use std::collections::HashSet;
    use tilestitch::TileError;
    use tilestitch::io::configuration::{
        EXPORT_CELL_SCALE, PATTERN_COLOR, SET_COLOR, UNSET_COLOR,
    };
    use tilestitch::io::image::export_image_as_png;
    use tilestitch::spatial::pixels::PixelGrid;

    // Tests the exported image is scaled and coloured per cell
    // Verified by ignoring the covered set when colouring
    #[test]
    fn test_export_colours_cells() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("nested").join("composite.png");
        let grid = PixelGrid::from_rows(&["#.", ".#"]).expect("valid grid");
        let covered: HashSet<(usize, usize)> = [(1, 1)].into_iter().collect();

        export_image_as_png(&grid, &covered, &path).expect("export succeeds");

        let img = image::open(&path).expect("readable png").to_rgba8();
        assert_eq!(img.dimensions(), (2 * EXPORT_CELL_SCALE, 2 * EXPORT_CELL_SCALE));
        assert_eq!(img.get_pixel(0, 0).0, SET_COLOR);
        assert_eq!(img.get_pixel(EXPORT_CELL_SCALE, 0).0, UNSET_COLOR);
        assert_eq!(
            img.get_pixel(EXPORT_CELL_SCALE, EXPORT_CELL_SCALE).0,
            PATTERN_COLOR
        );
    }

    // Tests an empty image is refused
    #[test]
    fn test_export_rejects_empty_image() {
        let dir = tempfile::tempdir().expect("temp dir");
        let result = export_image_as_png(
            &PixelGrid::blank(0),
            &HashSet::new(),
            &dir.path().join("empty.png"),
        );
        assert!(matches!(result, Err(TileError::Precondition { .. })));
    }
}
