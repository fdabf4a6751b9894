//! bmpfx - apply one filter to a 24-bit BMP
//!
//! Reads the input bitmap, runs exactly one of grayscale, sepia, reflect or
//! blur over it, and writes the result with the input's header fields.

use anyhow::{Context, Result};
use bmpfx_io::{BmpReader, BmpWriter, IoError};
use bmpfx_ops::Filter;
use clap::{ArgAction, ArgGroup, Parser};
use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{debug, info};

mod error;
mod exit;
mod logging;

use error::CliError;
use exit::Exit;

#[derive(Parser, Debug)]
#[command(name = "bmpfx")]
#[command(author, version, about = "Apply an image filter to a 24-bit BMP")]
#[command(long_about = "
Applies one filter to a 24-bit uncompressed BMP and writes a new BMP.

Examples:
  bmpfx -g yard.bmp gray.bmp         # Grayscale
  bmpfx -s yard.bmp sepia.bmp        # Sepia tone
  bmpfx -r yard.bmp mirror.bmp       # Mirror horizontally
  bmpfx -b -j 4 yard.bmp soft.bmp    # Box blur on 4 threads
")]
#[command(group(
    ArgGroup::new("filter")
        .required(true)
        .args(["blur", "grayscale", "reflect", "sepia"])
))]
struct Cli {
    /// Blur each pixel with its in-bounds 3x3 neighborhood
    #[arg(short = 'b', long)]
    blur: bool,

    /// Convert to grayscale
    #[arg(short = 'g', long)]
    grayscale: bool,

    /// Mirror each row left to right
    #[arg(short = 'r', long)]
    reflect: bool,

    /// Apply a sepia tone
    #[arg(short = 's', long)]
    sepia: bool,

    /// Input BMP
    input: PathBuf,

    /// Output BMP
    output: PathBuf,

    /// Verbose output (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,

    /// Number of threads (0 = auto)
    #[arg(short = 'j', long, default_value = "0")]
    threads: usize,

    /// Run the single-threaded transforms
    #[arg(long)]
    serial: bool,

    /// Also write logs to this file
    #[arg(long, value_name = "FILE")]
    log: Option<PathBuf>,
}

impl Cli {
    /// The selected filter; the required group guarantees at most one.
    fn filter(&self) -> Option<Filter> {
        [
            (self.blur, Filter::Blur),
            (self.grayscale, Filter::Grayscale),
            (self.reflect, Filter::Reflect),
            (self.sepia, Filter::Sepia),
        ]
        .into_iter()
        .find_map(|(selected, filter)| selected.then_some(filter))
    }
}

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            let exit = Exit::from_clap(err.kind());
            let _ = err.print();
            return exit.into();
        }
    };

    let _guard = match logging::init(cli.verbose, cli.log.as_deref()) {
        Ok(guard) => guard,
        Err(err) => {
            eprintln!("bmpfx: {err:#}");
            return Exit::Usage.into();
        }
    };

    match run(&cli) {
        Ok(()) => Exit::Success.into(),
        Err(err) => {
            eprintln!("bmpfx: {err:#}");
            let exit = Exit::from_error(&err);
            debug!(?exit, "exiting");
            exit.into()
        }
    }
}

fn run(cli: &Cli) -> Result<()> {
    if cli.threads > 0 {
        rayon::ThreadPoolBuilder::new()
            .num_threads(cli.threads)
            .build_global()
            .context("Failed to configure thread pool")?;
    }

    let filter = cli.filter().context("No filter selected")?;

    let input = File::open(&cli.input).map_err(|source| CliError::OpenInput {
        path: cli.input.clone(),
        source,
    })?;
    let output = File::create(&cli.output).map_err(|source| CliError::CreateOutput {
        path: cli.output.clone(),
        source,
    })?;

    let mut bitmap = BmpReader::new()
        .read_from(&mut BufReader::new(input))
        .map_err(|source| CliError::Decode {
            path: cli.input.clone(),
            source,
        })?;

    let (width, height) = bitmap.image.dimensions();
    info!(
        filter = filter.name(),
        width,
        height,
        serial = cli.serial,
        input = %cli.input.display(),
        "Applying filter"
    );

    if cli.serial {
        filter.apply(&mut bitmap.image);
    } else {
        filter.apply_parallel(&mut bitmap.image);
    }

    let mut writer = BufWriter::new(output);
    BmpWriter::new()
        .write_to(&mut writer, &bitmap)
        .and_then(|()| writer.flush().map_err(IoError::from))
        .map_err(|source| CliError::Encode {
            path: cli.output.clone(),
            source,
        })?;

    debug!(output = %cli.output.display(), "Done");
    Ok(())
}
