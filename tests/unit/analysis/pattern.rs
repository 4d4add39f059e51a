//! Tests for pattern parsing and the built-in sea monster

#[cfg(test)]
mod tests {
    use tilestitch::TileError;
    use tilestitch::analysis::pattern::Pattern;

    // Tests the sea monster has 15 marks spread 1/8/6 over three rows
    #[test]
    fn test_sea_monster_shape() {
        let monster = Pattern::sea_monster();
        assert_eq!(monster.height(), 3);
        assert_eq!(monster.width(), 20);
        assert_eq!(monster.mark_count(), 15);
        assert_eq!(monster.marks_per_row(), vec![1, 8, 6]);
        assert_eq!(monster.marks().first(), Some(&(0, 18)));
    }

    // Tests the parsed sea monster text equals the built-in one
    #[test]
    fn test_parse_matches_builtin() {
        let parsed = Pattern::parse(&[
            "                  # ",
            "#    ##    ##    ###",
            " #  #  #  #  #  #   ",
        ])
        .expect("valid pattern");
        assert_eq!(parsed, Pattern::sea_monster());
    }

    // Tests dots and spaces are both unconstrained
    #[test]
    fn test_parse_free_cells() {
        let pattern = Pattern::parse(&["#. ", " .#"]).expect("valid pattern");
        assert_eq!(pattern.marks(), &[(0, 0), (1, 2)]);
        assert_eq!(pattern.width(), 3);
    }

    // Tests malformed patterns are rejected
    // Verified by skipping the row length check
    #[test]
    fn test_parse_rejects_malformed() {
        assert!(Pattern::parse::<&str>(&[]).is_err());
        assert!(Pattern::parse(&["##", "#"]).is_err());
        assert!(Pattern::parse(&["#x"]).is_err());
        assert!(matches!(
            Pattern::parse(&["..", "  "]),
            Err(TileError::Validation { .. })
        ));
    }
}
