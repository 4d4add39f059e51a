//! Input/output, configuration and error handling

/// Command-line interface and batch file processing
pub mod cli;
/// Constants and runtime configuration
pub mod configuration;
/// Error types and constructors
pub mod error;
/// PNG export of composite images
pub mod image;
/// Tile corpus and pattern file parsing
pub mod parser;
/// Terminal spinner for running searches
pub mod progress;
/// Plain-text rendering of layouts and images
pub mod render;
