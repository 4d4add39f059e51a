//! Command-line interface for solving tile corpora and scanning for a pattern

use crate::algorithm::corners::corner_product_by_edges;
use crate::algorithm::executor::{PuzzleReport, Solver, solve_puzzle};
use crate::analysis::pattern::Pattern;
use crate::io::configuration::{INPUT_EXTENSION, OUTPUT_SUFFIX, SolverConfig};
use crate::io::error::{Result, TileError, invalid_parameter};
use crate::io::image::export_image_as_png;
use crate::io::parser::{read_pattern, read_tiles};
use crate::io::progress::SearchProgress;
use crate::io::render::{render_layout, render_marked};
use clap::Parser;
use std::collections::HashSet;
use std::fmt::Write;
use std::path::{Path, PathBuf};
use std::time::Instant;

#[derive(Parser, Debug)]
#[command(name = "tilestitch")]
#[command(
    author,
    version,
    about = "Reassemble scrambled square tiles and scan the stitched image for a pattern"
)]
/// Command-line arguments for the tile solver
// Each flag toggles an independent output or stage
#[allow(clippy::struct_excessive_bools)]
pub struct Cli {
    /// Tile corpus file, or a directory of `.txt` corpora
    #[arg(value_name = "TARGET")]
    pub target: PathBuf,

    /// Pattern file to scan for instead of the sea monster
    #[arg(short, long, value_name = "FILE")]
    pub pattern: Option<PathBuf>,

    /// Only validate and orient the tiles, skip the placement search
    #[arg(short, long)]
    pub no_search: bool,

    /// Give up after this many candidate placements
    #[arg(short, long, value_name = "N")]
    pub max_steps: Option<u64>,

    /// Report the corner product from edge counts without searching
    #[arg(short, long)]
    pub corners_only: bool,

    /// Print the layout and the marked composite image
    #[arg(long)]
    pub print: bool,

    /// Export the marked composite as `<input>_result.png`
    #[arg(short, long)]
    pub export: bool,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// Solver switches selected by the flags
    pub const fn solver_config(&self) -> SolverConfig {
        SolverConfig {
            run_search: !self.no_search,
            max_steps: self.max_steps,
        }
    }
}

/// Orchestrates solving one corpus file or a directory of them
pub struct FileProcessor {
    cli: Cli,
}

impl FileProcessor {
    /// Create a new file processor with the given CLI arguments
    pub const fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Process files according to CLI arguments
    ///
    /// # Errors
    ///
    /// Returns an error if the target or pattern cannot be read, or if any
    /// corpus fails to validate, solve or scan
    pub fn process(&self) -> Result<()> {
        let pattern = self.load_pattern()?;
        let files = self.collect_files()?;

        for file in &files {
            self.process_file(file, &pattern)?;
        }

        Ok(())
    }

    /// The pattern to scan for
    ///
    /// # Errors
    ///
    /// Returns an error if a pattern file was given and cannot be read or parsed
    pub fn load_pattern(&self) -> Result<Pattern> {
        self.cli
            .pattern
            .as_deref()
            .map_or_else(|| Ok(Pattern::sea_monster()), read_pattern)
    }

    /// Corpus files named by the target, sorted by path
    ///
    /// # Errors
    ///
    /// Returns an error if the target is neither a file nor a directory, or
    /// the directory cannot be listed
    pub fn collect_files(&self) -> Result<Vec<PathBuf>> {
        let target = &self.cli.target;
        if target.is_file() {
            return Ok(vec![target.clone()]);
        }
        if !target.is_dir() {
            return Err(invalid_parameter(
                "target",
                &target.display(),
                &"must be a tile corpus file or a directory",
            ));
        }

        let listing_error = |source| TileError::FileSystem {
            path: target.clone(),
            operation: "list directory",
            source,
        };
        let mut files = Vec::new();
        for entry in std::fs::read_dir(target).map_err(listing_error)? {
            let path = entry.map_err(listing_error)?.path();
            if path.is_file() && path.extension().and_then(|s| s.to_str()) == Some(INPUT_EXTENSION)
            {
                files.push(path);
            }
        }
        files.sort();
        Ok(files)
    }

    // Allow print for the per-file result report
    #[allow(clippy::print_stdout)]
    fn process_file(&self, input_path: &Path, pattern: &Pattern) -> Result<()> {
        let start_time = Instant::now();
        let tiles = read_tiles(input_path)?;
        let config = self.cli.solver_config();

        if self.cli.corners_only {
            let solver = Solver::new(tiles, config)?;
            let product = corner_product_by_edges(solver.catalog())?;
            println!("{}: corner product {product}", input_path.display());
            return Ok(());
        }

        let total_cells = tiles.len();
        let mut progress = if self.cli.should_show_progress() {
            SearchProgress::new(input_path, total_cells)
        } else {
            SearchProgress::hidden(total_cells)
        };
        let report = solve_puzzle(tiles, pattern, config, &mut progress);
        progress.finish();
        let report = report?;

        print!("{}", format_report(input_path, &report, pattern, self.cli.print)?);

        if self.cli.export {
            self.export_report(input_path, &report, pattern)?;
        }

        self.note(&format!(
            "{}: done in {:.2?}",
            input_path.display(),
            start_time.elapsed()
        ));
        Ok(())
    }

    fn export_report(
        &self,
        input_path: &Path,
        report: &PuzzleReport,
        pattern: &Pattern,
    ) -> Result<()> {
        let Some(scan) = &report.scan else {
            self.note(&format!(
                "{}: nothing to export without a search",
                input_path.display()
            ));
            return Ok(());
        };

        let output_path = output_path(input_path);
        export_image_as_png(&scan.image, &scan.covered_cells(pattern), &output_path)?;
        self.note(&format!("Exported {}", output_path.display()));
        Ok(())
    }

    // Allow print for user feedback
    #[allow(clippy::print_stderr)]
    fn note(&self, message: &str) {
        if !self.cli.quiet {
            eprintln!("{message}");
        }
    }
}

/// Path of the exported image for an input corpus
pub fn output_path(input_path: &Path) -> PathBuf {
    let stem = input_path.file_stem().unwrap_or_default();
    let output_name = format!("{}{OUTPUT_SUFFIX}.png", stem.to_string_lossy());

    if let Some(parent) = input_path.parent() {
        parent.join(output_name)
    } else {
        PathBuf::from(output_name)
    }
}

/// Text summary of one run
///
/// With `detailed`, the layout table and the marked composite follow the
/// summary lines.
///
/// # Errors
///
/// Returns a computation error if the corner identifiers are not numeric or
/// their product overflows
pub fn format_report(
    input_path: &Path,
    report: &PuzzleReport,
    pattern: &Pattern,
    detailed: bool,
) -> Result<String> {
    let mut out = String::new();
    // Writing to a String cannot fail
    let _ = writeln!(
        out,
        "{}: {} tiles in a {side}x{side} layout",
        input_path.display(),
        report.tile_count,
        side = report.layout_side
    );

    let (Some(solved), Some(scan)) = (&report.solved, &report.scan) else {
        let _ = writeln!(out, "  search skipped");
        return Ok(out);
    };

    let _ = writeln!(out, "  corner product: {}", solved.corner_product()?);
    let _ = writeln!(out, "  search steps: {}", solved.steps);
    let _ = writeln!(
        out,
        "  pattern: {} occurrences in orientation {}",
        scan.occurrences(),
        scan.orientation
    );
    let _ = writeln!(out, "  roughness: {}", scan.roughness);
    let _ = writeln!(out, "  uncovered cells: {}", scan.uncovered);

    if detailed {
        let _ = writeln!(out);
        out.push_str(&render_layout(&solved.layout));
        let _ = writeln!(out);
        let covered: HashSet<(usize, usize)> = scan.covered_cells(pattern);
        out.push_str(&render_marked(&scan.image, &covered));
    }

    Ok(out)
}
