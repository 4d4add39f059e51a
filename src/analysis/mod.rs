//! Composite image assembly and pattern scanning

/// Stitching a solved layout into one border-trimmed image
pub mod compositor;
/// Pattern masks built from text rows
pub mod pattern;
/// Orientation-aware occurrence search and roughness
pub mod scanner;
