use std::path::{Path, PathBuf};
use std::process;

use clap::Parser;

use png_whiteout::{process_directory, process_file, ProcessOptions, ProcessResult};

const COMPLETION_MESSAGE: &str = "Process completed: White background replaced with transparency.";

#[derive(Parser)]
#[command(
    name = "png-whiteout",
    about = "Replace near-white pixels in PNG images with full transparency",
    version,
    after_help = "Simple usage: png-whiteout <image>  (overwrites the image in-place)\n\n\
                  A pixel is replaced with transparent white when its red, green and blue\n\
                  channels are all above 240. The original file is not backed up."
)]
struct Cli {
    /// Input image file or directory of PNG files
    input: PathBuf,

    /// Output file or directory (default: overwrite the input)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Suppress all non-error output
    #[arg(short, long)]
    quiet: bool,
}

fn main() {
    let cli = Cli::parse();

    let opts = ProcessOptions {
        verbose: cli.verbose,
        quiet: cli.quiet,
    };

    let input_path = cli.input.as_path();
    if !input_path.exists() {
        eprintln!("Error: Input path does not exist: {}", input_path.display());
        process::exit(1);
    }

    let output_path = cli.output.as_deref().unwrap_or(input_path);

    let results = if input_path.is_dir() {
        process_directory(input_path, output_path, &opts)
    } else {
        vec![process_file(input_path, output_path, &opts)]
    };

    if results.is_empty() {
        if !opts.quiet {
            eprintln!("No PNG files found in {}", input_path.display());
        }
        return;
    }

    let mut success_count = 0u32;
    let mut fail_count = 0u32;

    for r in &results {
        print_result(r, &opts);
        if r.success {
            success_count += 1;
        } else {
            fail_count += 1;
        }
    }

    if results.len() > 1 && !opts.quiet {
        eprintln!();
        eprint!("[Summary] Processed: {success_count}");
        if fail_count > 0 {
            eprint!(", Failed: {fail_count}");
        }
        eprintln!(" (Total: {})", results.len());
    }

    if fail_count > 0 {
        process::exit(1);
    }

    if success_count > 0 && !opts.quiet {
        println!("{COMPLETION_MESSAGE}");
    }
}

fn print_result(result: &ProcessResult, opts: &ProcessOptions) {
    if opts.quiet && result.success {
        return;
    }

    let filename = display_name(&result.path);

    if result.success {
        eprintln!(
            "[OK] {filename} ({} of {} pixels made transparent)",
            result.replaced, result.total
        );
        if opts.verbose && result.output != result.path {
            eprintln!("  -> {}", result.output.display());
        }
    } else {
        eprintln!("[FAIL] {filename}: {}", result.message);
    }
}

fn display_name(path: &Path) -> String {
    path.file_name().map_or_else(
        || path.display().to_string(),
        |f| f.to_string_lossy().to_string(),
    )
}
