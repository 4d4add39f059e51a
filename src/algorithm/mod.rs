//! Placement search and the checks it is built from

/// Fixed-capacity bitset of used tile slots
pub mod bitset;
/// Search-free corner detection from edge-sharing neighbour counts
pub mod corners;
/// End-to-end solver pipeline
pub mod executor;
/// Edge compatibility rules between neighbouring tiles
pub mod matcher;
/// Backtracking layout search with observer hooks and a step budget
pub mod search;
