use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;

use unpaste::{DEFAULT_MARKER, InputSource, Segmenter, resolve_input, write_segments};

/// Split a pasted multi-file code blob into real files.
///
/// The input is one text blob holding several file bodies, each introduced by
/// a delimiter line such as `/// src/main.rs`. Every block is written to its
/// path, relative to the output directory, with parent directories created as
/// needed. Existing files are overwritten.
#[derive(Parser, Debug)]
#[command(name = "unpaste", version, about)]
struct Cli {
    /// Source file to read instead of the clipboard
    source: Option<PathBuf>,

    /// Comment prefix that introduces a delimiter line
    #[arg(short, long, default_value = DEFAULT_MARKER)]
    marker: String,

    /// Directory the extracted files are rooted under
    #[arg(short, long, default_value = ".")]
    out_dir: PathBuf,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("✗ {}", err);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    let (blob, origin) = resolve_input(cli.source.as_deref())?;
    match &origin {
        InputSource::File(path) => println!("Reading content from source file: {}", path),
        InputSource::Clipboard => println!("Reading content from clipboard..."),
    }

    let segments = Segmenter::new(&cli.marker).split(&blob);
    if segments.is_empty() {
        anyhow::bail!(
            "no valid file blocks found matching the '{} <file path>' pattern",
            cli.marker
        );
    }

    let total = segments.len();
    println!(
        "Writing {} file(s) under {}...\n",
        total,
        cli.out_dir.display()
    );

    let mut failures = 0;
    for (i, outcome) in write_segments(&segments, &cli.out_dir).iter().enumerate() {
        match &outcome.result {
            Ok(written) => println!("  ✓ [{}/{}] Wrote: {}", i + 1, total, written.display()),
            Err(err) => {
                failures += 1;
                eprintln!("  ✗ [{}/{}] {}: {}", i + 1, total, outcome.path, err);
            }
        }
    }

    if failures > 0 {
        println!("\nDone, {} of {} file(s) failed.", failures, total);
    } else {
        println!("\nAll operations complete.");
    }

    Ok(())
}
