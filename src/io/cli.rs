//! Command-line interface for laying out and rendering item files

use crate::algorithm::layout::{compute_sorted_layout, try_compute_layout};
use crate::analysis::quality::{check_partition, measure};
use crate::geometry::rectangle::Rectangle;
use crate::io::configuration::{
    DEFAULT_CORNER_RADIUS, DEFAULT_HEIGHT, DEFAULT_TILE_GAP, DEFAULT_WIDTH, GEOMETRY_TOLERANCE,
    INPUT_EXTENSION, MAX_IMAGE_DIMENSION, OUTPUT_EXTENSION, OUTPUT_SUFFIX,
};
use crate::io::error::{Result, TreemapError, invalid_parameter};
use crate::io::image::{RenderOptions, export_tiles_as_png};
use crate::io::items::{pair_tiles, read_items, weights};
use crate::io::progress::ProgressManager;
use crate::io::report::{write_quality, write_report};
use clap::Parser;
use std::io::Write;
use std::path::{Path, PathBuf};

#[derive(Parser, Debug)]
#[command(name = "squarify")]
#[command(
    author,
    version,
    about = "Lay out weighted items as a squarified treemap"
)]
/// Command-line arguments for the treemap tool
// CLI tools commonly need multiple boolean flags for various features and user preferences
#[allow(clippy::struct_excessive_bools)]
pub struct Cli {
    /// Item file or directory of item files to process
    #[arg(value_name = "TARGET")]
    pub target: PathBuf,

    /// Layout width in pixels
    #[arg(short = 'w', long, default_value_t = DEFAULT_WIDTH)]
    pub width: f64,

    /// Layout height in pixels
    #[arg(short = 'H', long, default_value_t = DEFAULT_HEIGHT)]
    pub height: f64,

    /// Horizontal offset of the layout region
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    pub x_offset: f64,

    /// Vertical offset of the layout region
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    pub y_offset: f64,

    /// Place larger items first (output order still follows the input)
    #[arg(short, long)]
    pub sort: bool,

    /// Print aspect-ratio statistics and partition checks
    #[arg(short = 'S', long)]
    pub stats: bool,

    /// Skip PNG rendering
    #[arg(long)]
    pub no_image: bool,

    /// Pixels of background left between tiles
    #[arg(long, default_value_t = DEFAULT_TILE_GAP)]
    pub gap: u32,

    /// Corner radius of rendered tiles in pixels
    #[arg(long, default_value_t = DEFAULT_CORNER_RADIUS)]
    pub corner_radius: u32,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Process files even if output exists
    #[arg(short, long)]
    pub no_skip: bool,

    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Check if existing output files should be skipped
    pub const fn skip_existing(&self) -> bool {
        !self.no_skip && !self.no_image
    }

    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// Rendering settings selected on the command line
    pub fn render_options(&self) -> RenderOptions {
        RenderOptions {
            gap: self.gap,
            corner_radius: self.corner_radius,
            ..RenderOptions::default()
        }
    }

    /// Region covered by the layout
    pub fn bounds(&self) -> Rectangle {
        Rectangle::from_origin_size(self.x_offset, self.y_offset, self.width, self.height)
    }
}

/// Orchestrates batch processing of item files with progress tracking
pub struct FileProcessor {
    cli: Cli,
    progress_manager: Option<ProgressManager>,
}

impl FileProcessor {
    /// Create a new file processor with the given CLI arguments
    pub fn new(cli: Cli) -> Self {
        let progress_manager = cli.should_show_progress().then(ProgressManager::new);

        Self {
            cli,
            progress_manager,
        }
    }

    /// Process files according to CLI arguments, reporting to stdout
    ///
    /// # Errors
    ///
    /// Returns an error if target validation or file processing fails
    pub fn process(&mut self) -> Result<()> {
        let stdout = std::io::stdout();
        let mut out = stdout.lock();
        self.process_into(&mut out)
    }

    /// Process files according to CLI arguments, reporting to `out`
    ///
    /// # Errors
    ///
    /// Returns an error if target validation, layout, rendering or writing
    /// the report fails
    pub fn process_into(&mut self, out: &mut impl Write) -> Result<()> {
        let files = self.collect_files()?;

        if files.is_empty() {
            return Ok(());
        }

        if let Some(ref mut pm) = self.progress_manager {
            pm.initialize(files.len());
        }

        for file in &files {
            self.process_file(file, out)?;
        }

        if let Some(ref pm) = self.progress_manager {
            pm.finish();
        }

        Ok(())
    }

    fn collect_files(&self) -> Result<Vec<PathBuf>> {
        if self.cli.target.is_file() {
            if self.should_process_file(&self.cli.target) {
                Ok(vec![self.cli.target.clone()])
            } else {
                Ok(vec![])
            }
        } else if self.cli.target.is_dir() {
            let mut files = Vec::new();
            let entries =
                std::fs::read_dir(&self.cli.target).map_err(|e| TreemapError::FileSystem {
                    path: self.cli.target.clone(),
                    operation: "read directory",
                    source: e,
                })?;
            for entry in entries {
                let path = entry?.path();
                if path.extension().and_then(|s| s.to_str()) == Some(INPUT_EXTENSION)
                    && self.should_process_file(&path)
                {
                    files.push(path);
                }
            }
            files.sort();
            Ok(files)
        } else {
            Err(invalid_parameter(
                "target",
                &self.cli.target.display(),
                &"must be an item file or a directory",
            ))
        }
    }

    fn should_process_file(&self, input_path: &Path) -> bool {
        if !self.cli.skip_existing() {
            return true;
        }

        let output_path = Self::get_output_path(input_path);
        if output_path.exists() {
            if !self.cli.quiet {
                tracing::info!(file = %input_path.display(), "skipping, output exists");
            }
            false
        } else {
            true
        }
    }

    fn process_file(&mut self, input_path: &Path, out: &mut impl Write) -> Result<()> {
        if let Some(ref pm) = self.progress_manager {
            pm.start_file(input_path);
        }

        let items = read_items(input_path)?;
        let weights = weights(&items);
        let cli = &self.cli;

        let rects = if cli.sort {
            compute_sorted_layout(&weights, cli.width, cli.height, cli.x_offset, cli.y_offset)?
        } else {
            try_compute_layout(&weights, cli.width, cli.height, cli.x_offset, cli.y_offset)?
        };
        let tiles = pair_tiles(&items, &rects);

        tracing::info!(
            file = %input_path.display(),
            items = items.len(),
            "layout computed"
        );

        let write_failed = |e| TreemapError::FileSystem {
            path: PathBuf::from("<stdout>"),
            operation: "write report",
            source: e,
        };
        writeln!(out, "# {}", input_path.display()).map_err(write_failed)?;
        write_report(out, &tiles).map_err(write_failed)?;

        if cli.stats {
            let quality = measure(&rects);
            write_quality(out, &quality).map_err(write_failed)?;
            for issue in check_partition(&rects, &cli.bounds(), GEOMETRY_TOLERANCE) {
                tracing::warn!(?issue, file = %input_path.display(), "partition check failed");
            }
        }

        if !cli.no_image {
            let canvas_width = canvas_dimension("width", cli.x_offset + cli.width)?;
            let canvas_height = canvas_dimension("height", cli.y_offset + cli.height)?;
            let output_path = Self::get_output_path(input_path);
            export_tiles_as_png(
                &tiles,
                canvas_width,
                canvas_height,
                &cli.render_options(),
                &output_path,
            )?;
            tracing::debug!(output = %output_path.display(), "treemap rendered");
        }

        if let Some(ref mut pm) = self.progress_manager {
            pm.complete_file();
        }

        Ok(())
    }

    /// Path of the rendered treemap for an input file
    pub fn get_output_path(input_path: &Path) -> PathBuf {
        let stem = input_path.file_stem().unwrap_or_default();
        let output_name = format!(
            "{}{}.{}",
            stem.to_string_lossy(),
            OUTPUT_SUFFIX,
            OUTPUT_EXTENSION
        );

        if let Some(parent) = input_path.parent() {
            parent.join(output_name)
        } else {
            PathBuf::from(output_name)
        }
    }
}

// The canvas spans from the image origin to the far edge of the layout region
fn canvas_dimension(parameter: &'static str, extent: f64) -> Result<u32> {
    if !extent.is_finite() || extent < 1.0 || extent > f64::from(MAX_IMAGE_DIMENSION) {
        return Err(invalid_parameter(
            parameter,
            &extent,
            &format!("canvas must span between 1 and {MAX_IMAGE_DIMENSION} pixels"),
        ));
    }
    Ok(extent.ceil() as u32)
}
