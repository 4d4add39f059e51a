//! Tests for solver constants and configuration defaults

#[cfg(test)]
mod tests {
    use tilestitch::io::configuration::{
        MIN_TILE_SIZE, ORIENTATION_COUNT, ROTATION_COUNT, SEA_MONSTER, SYNTHETIC_ID_MAX,
        SYNTHETIC_ID_MIN, SolverConfig,
    };
    use tilestitch::spatial::synthetic::scrambled_puzzle;

    // Tests the default configuration searches without a budget
    #[test]
    fn test_solver_config_default() {
        let config = SolverConfig::default();
        assert!(config.run_search);
        assert_eq!(config.max_steps, None);
    }

    // Tests orientation constants describe the eight square symmetries
    #[test]
    fn test_orientation_constants() {
        assert_eq!(ORIENTATION_COUNT, 2 * ROTATION_COUNT);
        assert_eq!(MIN_TILE_SIZE, 3);
    }

    // Tests the sea monster rows share one width
    #[test]
    fn test_sea_monster_rows_rectangular() {
        let widths: Vec<usize> = SEA_MONSTER.iter().map(|row| row.len()).collect();
        assert_eq!(widths, vec![20, 20, 20]);
    }

    // Tests synthetic identifiers are drawn from the configured range
    #[test]
    fn test_synthetic_id_range() {
        let puzzle = scrambled_puzzle(3, 10, 6).expect("puzzle");
        for tile in &puzzle.tiles {
            let id = tile.numeric_id().expect("numeric id");
            assert!((SYNTHETIC_ID_MIN..SYNTHETIC_ID_MAX).contains(&id));
        }
    }
}
