//! File and directory processing around the recolor pass.

use std::path::{Path, PathBuf};

use image::{ImageFormat, RgbaImage};

use crate::error::{Error, Result};
use crate::recolor;

/// Options controlling processing output.
#[derive(Debug, Clone, Default)]
pub struct ProcessOptions {
    /// Enable verbose logging.
    pub verbose: bool,
    /// Suppress non-error output.
    pub quiet: bool,
}

/// Result of processing a single image file.
#[derive(Debug)]
pub struct ProcessResult {
    /// Path of the processed file.
    pub path: PathBuf,
    /// Path the result was written to.
    pub output: PathBuf,
    /// Whether processing succeeded.
    pub success: bool,
    /// Number of pixels turned transparent.
    pub replaced: usize,
    /// Total number of pixels in the image.
    pub total: usize,
    /// Human-readable status message.
    pub message: String,
}

impl ProcessResult {
    fn new(input: &Path, output: &Path) -> Self {
        Self {
            path: input.to_path_buf(),
            output: output.to_path_buf(),
            success: false,
            replaced: 0,
            total: 0,
            message: String::new(),
        }
    }

    fn failed(path: &Path, message: String) -> Self {
        let mut result = Self::new(path, path);
        result.message = message;
        result
    }
}

/// Process a single image file: load, convert to RGBA, recolor, save as PNG.
///
/// `input` and `output` may be the same path, in which case the original is
/// overwritten without a backup. Failures are reported in the returned
/// [`ProcessResult`] rather than as an error.
#[must_use]
pub fn process_file(input: &Path, output: &Path, opts: &ProcessOptions) -> ProcessResult {
    let mut result = ProcessResult::new(input, output);

    let mut img = match image::open(input) {
        Ok(img) => img.to_rgba8(),
        Err(e) => {
            result.message = format!("Failed to load: {e}");
            return result;
        }
    };

    result.total = img.pixels().len();
    result.replaced = recolor::whiten_to_transparent(&mut img);

    if opts.verbose && !opts.quiet {
        eprintln!(
            "  {}: {}x{}, {} near-white pixels",
            input.display(),
            img.width(),
            img.height(),
            result.replaced
        );
    }

    if let Some(parent) = output.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            if let Err(e) = std::fs::create_dir_all(parent) {
                result.message = format!("Failed to create output directory: {e}");
                return result;
            }
        }
    }

    match save_png(&img, output) {
        Ok(()) => {
            result.success = true;
            result.message = "White background replaced with transparency".to_string();
        }
        Err(e) => {
            result.message = format!("Failed to save: {e}");
        }
    }

    result
}

/// Process an image file and overwrite it with the result.
#[must_use]
pub fn process_in_place(path: &Path, opts: &ProcessOptions) -> ProcessResult {
    process_file(path, path, opts)
}

/// Process all PNG files in a directory.
///
/// Each file is written to `output_dir` under its original name; passing the
/// same directory for both rewrites the files in place. Uses parallel
/// iteration when the `cli` feature is enabled (via rayon).
#[must_use]
pub fn process_directory(
    input_dir: &Path,
    output_dir: &Path,
    opts: &ProcessOptions,
) -> Vec<ProcessResult> {
    let entries = match list_pngs(input_dir) {
        Ok(entries) => entries,
        Err(e) => {
            return vec![ProcessResult::failed(
                input_dir,
                format!("Failed to read directory: {e}"),
            )];
        }
    };

    if !output_dir.exists() {
        if let Err(e) = std::fs::create_dir_all(output_dir) {
            return vec![ProcessResult::failed(
                output_dir,
                format!("Failed to create output directory: {e}"),
            )];
        }
    }

    let process_one = |input_path: &PathBuf| {
        let output_path = match input_path.file_name() {
            Some(name) => output_dir.join(name),
            None => input_path.clone(),
        };
        process_file(input_path, &output_path, opts)
    };

    #[cfg(feature = "cli")]
    {
        use rayon::prelude::*;
        entries.par_iter().map(process_one).collect()
    }

    #[cfg(not(feature = "cli"))]
    {
        entries.iter().map(process_one).collect()
    }
}

/// List the regular `.png` files directly inside `dir`, sorted by path.
fn list_pngs(dir: &Path) -> Result<Vec<PathBuf>> {
    if !dir.is_dir() {
        return Err(Error::NotADirectory(dir.to_path_buf()));
    }

    let mut entries: Vec<PathBuf> = std::fs::read_dir(dir)?
        .filter_map(std::result::Result::ok)
        .filter(|e| e.file_type().map(|ft| ft.is_file()).unwrap_or(false))
        .map(|e| e.path())
        .filter(|p| is_png(p))
        .collect();
    entries.sort();
    Ok(entries)
}

/// Check if a file has a `.png` extension (case-insensitive).
#[must_use]
pub fn is_png(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("png"))
}

/// Save an RGBA image as PNG, whatever the extension of `path`.
///
/// # Errors
///
/// Returns an error if the file cannot be created or encoding fails.
pub fn save_png(img: &RgbaImage, path: &Path) -> Result<()> {
    img.save_with_format(path, ImageFormat::Png)?;
    Ok(())
}
