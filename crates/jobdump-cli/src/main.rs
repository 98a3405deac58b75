//! jobdump - Dump the contents of legacy Windows Task Scheduler `.job` files
//!
//! This tool decodes `.job` files, either one at a time or every `.job`
//! file in a directory, and prints a plain-text report for each.

use anyhow::{bail, Context, Result};
use clap::{Args, Parser};
use jobdump_core::{
    Decoder, DecoderConfig, Report, ReservedDataHandling, StringDecoding, MAX_JOB_FILE_SIZE,
};
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, info, trace, warn, Level};
use tracing_subscriber::EnvFilter;
use walkdir::WalkDir;

/// Rule printed around each report in directory mode
const RULE_WIDTH: usize = 72;

/// Dump the contents of Windows Task Scheduler .job files
#[derive(Parser, Debug)]
#[command(name = "jobdump")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    #[command(flatten)]
    input: InputMode,

    /// Descend into subdirectories in directory mode
    #[arg(short, long)]
    recursive: bool,

    /// Decode strings as UTF-16LE instead of dropping zero bytes
    #[arg(long)]
    utf16: bool,

    /// Skip the reserved data payload before reading the trailer
    #[arg(long)]
    skip_reserved_data: bool,

    /// Print the BLAKE3 digest of each input file
    #[arg(long)]
    hash: bool,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Args, Debug)]
#[group(required = true, multiple = false)]
struct InputMode {
    /// Path to a single .job file
    #[arg(short, long)]
    file: Option<PathBuf>,

    /// Path to a directory of .job files
    #[arg(short, long)]
    directory: Option<PathBuf>,
}

impl Cli {
    fn decoder_config(&self) -> DecoderConfig {
        let strings = if self.utf16 {
            StringDecoding::Utf16
        } else {
            StringDecoding::StripZeroBytes
        };
        let reserved = if self.skip_reserved_data {
            ReservedDataHandling::Skip
        } else {
            ReservedDataHandling::Unskipped
        };
        DecoderConfig::new()
            .string_decoding(strings)
            .reserved_data(reserved)
    }
}

/// Outcome counts for a directory run
#[derive(Debug, Default)]
struct BatchStats {
    decoded: usize,
    failed: usize,
}

/// A `.job` file read from disk, capped for decoding
#[derive(Debug)]
struct JobFile {
    data: Vec<u8>,
    digest: blake3::Hash,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing
    let level = match cli.verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(level.into()))
        .with_target(false)
        .init();

    // Dispatch based on input mode
    if let Some(ref file) = cli.input.file {
        process_single_file(&cli, file)
    } else if let Some(ref directory) = cli.input.directory {
        process_directory(&cli, directory)
    } else {
        bail!("Either --file or --directory must be specified")
    }
}

/// Decode and print a single job file
fn process_single_file(cli: &Cli, file: &Path) -> Result<()> {
    if !file.exists() {
        bail!("Input file does not exist: {}", file.display());
    }
    if !file.is_file() {
        bail!("Input path is not a file: {}", file.display());
    }

    let decoder = Decoder::with_config(cli.decoder_config());
    let report = render_job(cli, &decoder, file)?;
    print!("{}", report);

    Ok(())
}

/// Decode and print every job file in a directory
fn process_directory(cli: &Cli, directory: &Path) -> Result<()> {
    if !directory.exists() {
        bail!("Directory does not exist: {}", directory.display());
    }
    if !directory.is_dir() {
        bail!("Path is not a directory: {}", directory.display());
    }

    info!("Scanning directory: {}", directory.display());

    let files = collect_job_files(directory, cli.recursive);
    let stdout = io::stdout();
    let stats = process_batch(cli, &files, &mut stdout.lock())?;

    info!(
        "Summary: {} decoded, {} failed",
        stats.decoded, stats.failed
    );

    Ok(())
}

/// Decode each file in turn, writing framed reports to `out`.
///
/// A file that fails to read or decode is reported by name and skipped.
fn process_batch(cli: &Cli, files: &[PathBuf], out: &mut impl Write) -> Result<BatchStats> {
    let decoder = Decoder::with_config(cli.decoder_config());
    let rule = "*".repeat(RULE_WIDTH);
    let mut stats = BatchStats::default();

    for path in files {
        debug!("Processing job file: {}", path.display());
        match render_job(cli, &decoder, path) {
            Ok(report) => {
                writeln!(out, "{}", rule)?;
                writeln!(out, "File: {}", path.display())?;
                write!(out, "{}", report)?;
                writeln!(out, "{}", rule)?;
                stats.decoded += 1;
            }
            Err(e) => {
                writeln!(out, "Unable to process file: {}", path.display())?;
                warn!("Error processing {}: {:#}", path.display(), e);
                stats.failed += 1;
            }
        }
    }

    Ok(stats)
}

/// Lists `.job` files under `directory` in sorted order
fn collect_job_files(directory: &Path, recursive: bool) -> Vec<PathBuf> {
    let max_depth = if recursive { usize::MAX } else { 1 };

    let mut files: Vec<PathBuf> = WalkDir::new(directory)
        .min_depth(1)
        .max_depth(max_depth)
        .follow_links(false)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|entry| entry.file_type().is_file())
        .map(|entry| entry.into_path())
        .filter(|path| is_job_file(path))
        .collect();

    files.sort();
    files
}

/// Matches the `.job` extension, ignoring case
fn is_job_file(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| e.eq_ignore_ascii_case("job"))
        .unwrap_or(false)
}

/// Read a job file and cap it at [`MAX_JOB_FILE_SIZE`]
fn read_job_file(path: &Path) -> Result<JobFile> {
    trace!("Reading {}", path.display());
    let mut data =
        fs::read(path).with_context(|| format!("Failed to read job file: {}", path.display()))?;

    let digest = blake3::hash(&data);
    if data.len() > MAX_JOB_FILE_SIZE {
        debug!(
            "Truncating {} from {} to {} bytes",
            path.display(),
            data.len(),
            MAX_JOB_FILE_SIZE
        );
        data.truncate(MAX_JOB_FILE_SIZE);
    }

    Ok(JobFile { data, digest })
}

/// Read, decode and render one job file
fn render_job(cli: &Cli, decoder: &Decoder, path: &Path) -> Result<String> {
    let job = read_job_file(path)?;
    let record = decoder
        .decode(&job.data)
        .with_context(|| format!("Failed to decode job file: {}", path.display()))?;

    let mut report = String::new();
    if cli.hash {
        report.push_str(&format!("BLAKE3: {}\n", job.digest.to_hex()));
    }
    report.push_str(&Report::new(&record).to_string());
    Ok(report)
}
