//! Tests for error types including source chaining and message formatting

#[cfg(test)]
mod tests {
    use std::error::Error;
    use tilestitch::TileError;
    use tilestitch::io::error::{computation_error, invalid_parameter, validation_error};

    // Tests error source chaining works correctly
    // Verified by breaking source chain
    #[test]
    fn test_error_source_chain() {
        let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let error = TileError::FileSystem {
            path: "/tmp/tiles.txt".into(),
            operation: "read",
            source: io_error,
        };

        assert!(error.source().is_some());
        assert!(error.to_string().contains("/tmp/tiles.txt"));
    }

    // Tests NoSolution formatting names the layout and the work done
    #[test]
    fn test_no_solution_error() {
        let error = TileError::NoSolution {
            grid_dimensions: (12, 12),
            steps: 4096,
        };

        let message = error.to_string();
        assert!(message.contains("12x12"));
        assert!(message.contains("4096"));
        assert!(error.source().is_none());
    }

    // Tests InvalidParameter error contains all fields
    // Verified by omitting value from message
    #[test]
    fn test_invalid_parameter_error() {
        let error = invalid_parameter("tile_size", &"-1", &"must be positive");

        let message = error.to_string();
        assert!(message.contains("tile_size"));
        assert!(message.contains("-1"));
        assert!(message.contains("must be positive"));
    }

    // Tests validation messages with and without a tile identifier
    #[test]
    fn test_validation_error_messages() {
        let named = validation_error(Some("2311"), &"not square");
        assert_eq!(named.to_string(), "Invalid tile 2311: not square");

        let unnamed = validation_error(None, &"no tiles supplied");
        assert_eq!(unnamed.to_string(), "Invalid tile set: no tiles supplied");
    }

    // Tests ImageExport error with IO source
    // Verified by excluding source error from message
    #[test]
    fn test_image_export_error() {
        let image_error = image::ImageError::IoError(std::io::Error::new(
            std::io::ErrorKind::PermissionDenied,
            "access denied",
        ));
        let error = TileError::ImageExport {
            path: "/tmp/out.png".into(),
            source: image_error,
        };

        assert!(error.to_string().contains("access denied"));
        assert!(error.source().is_some());
    }

    // Tests remaining variants render their key fields
    #[test]
    fn test_other_messages() {
        assert!(
            TileError::BudgetExceeded { limit: 500 }
                .to_string()
                .contains("500")
        );
        assert!(
            TileError::NoPatternFound {
                orientations_scanned: 8
            }
            .to_string()
            .contains('8')
        );
        assert!(
            TileError::Parse {
                line: 14,
                reason: "bad header".to_string()
            }
            .to_string()
            .contains("line 14")
        );
        assert!(
            computation_error("corner product", &"overflow")
                .to_string()
                .contains("corner product")
        );
    }

    // Tests io errors convert through the question mark operator
    #[test]
    fn test_from_io_error() {
        fn fails() -> tilestitch::Result<()> {
            Err(std::io::Error::other("boom"))?;
            Ok(())
        }

        assert!(matches!(fails(), Err(TileError::FileSystem { .. })));
    }
}
