//! Spinner feedback for long placement searches

use crate::algorithm::search::SearchObserver;
use crate::io::configuration::PROGRESS_TICK_INTERVAL;
use crate::spatial::orientation::OrientedTile;
use indicatif::{ProgressBar, ProgressStyle};
use std::path::Path;
use std::sync::LazyLock;
use std::time::Duration;

static SPINNER_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_spinner()
        .template("{spinner:.cyan} [{elapsed_precise}] {prefix} {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_spinner())
});

/// Search observer that drives a terminal spinner
///
/// The spinner shows steps taken and how many cells are currently placed.
/// Redraws happen every [`PROGRESS_TICK_INTERVAL`] steps.
pub struct SearchProgress {
    bar: ProgressBar,
    total_cells: usize,
    placed: usize,
    deepest: usize,
    steps: u64,
}

impl SearchProgress {
    /// Start a spinner for one input file
    pub fn new(path: &Path, total_cells: usize) -> Self {
        let bar = ProgressBar::new_spinner();
        bar.set_style(SPINNER_STYLE.clone());
        bar.set_prefix(
            path.file_name()
                .unwrap_or_default()
                .to_string_lossy()
                .to_string(),
        );
        bar.enable_steady_tick(Duration::from_millis(120));

        let mut progress = Self {
            bar,
            total_cells,
            placed: 0,
            deepest: 0,
            steps: 0,
        };
        progress.refresh();
        progress
    }

    /// Spinner that draws nothing, for quiet runs
    pub fn hidden(total_cells: usize) -> Self {
        Self {
            bar: ProgressBar::hidden(),
            total_cells,
            placed: 0,
            deepest: 0,
            steps: 0,
        }
    }

    /// Steps reported so far
    pub const fn steps(&self) -> u64 {
        self.steps
    }

    /// Largest number of cells placed at once
    pub const fn deepest(&self) -> usize {
        self.deepest
    }

    /// Stop the spinner and clear it from the terminal
    pub fn finish(&self) {
        self.bar.finish_and_clear();
    }

    fn refresh(&mut self) {
        self.bar.set_message(format!(
            "{} steps, {}/{} placed (deepest {})",
            self.steps, self.placed, self.total_cells, self.deepest
        ));
    }
}

impl SearchObserver for SearchProgress {
    fn on_step(&mut self, steps: u64) {
        self.steps = steps;
        if steps % PROGRESS_TICK_INTERVAL == 0 {
            self.refresh();
        }
    }

    fn on_place(&mut self, _row: usize, _col: usize, _tile: &OrientedTile) {
        self.placed += 1;
        self.deepest = self.deepest.max(self.placed);
    }

    fn on_backtrack(&mut self, _row: usize, _col: usize, _tile: &OrientedTile) {
        self.placed = self.placed.saturating_sub(1);
    }
}
