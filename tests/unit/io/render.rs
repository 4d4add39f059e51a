//! Tests for plain-text rendering

#[cfg(test)]
mod tests {
    use std::collections::HashSet;
    use tilestitch::io::render::{render_layout, render_marked};
    use tilestitch::spatial::grid::Placement;
    use tilestitch::spatial::pixels::PixelGrid;

    fn placement(id: &str, orientation: usize) -> Placement {
        Placement {
            id: id.to_string(),
            orientation,
        }
    }

    // Tests covered cells are drawn with the mark character
    #[test]
    fn test_render_marked() {
        let grid = PixelGrid::from_rows(&["#.", "##"]).expect("valid grid");
        let marked: HashSet<(usize, usize)> = [(1, 0)].into_iter().collect();
        assert_eq!(render_marked(&grid, &marked), "#.\nO#\n");
    }

    // Tests an empty mark set renders the plain image
    #[test]
    fn test_render_unmarked_matches_display() {
        let grid = PixelGrid::from_rows(&["#..", ".#.", "..#"]).expect("valid grid");
        assert_eq!(render_marked(&grid, &HashSet::new()), grid.to_string());
    }

    // Tests layout cells are aligned in columns
    #[test]
    fn test_render_layout() {
        let layout = vec![
            vec![placement("1951", 4), placement("2311", 0)],
            vec![placement("7", 2), placement("3079", 7)],
        ];
        assert_eq!(render_layout(&layout), "1951/4 2311/0\n7/2    3079/7\n");
    }
}
