//! A binary for running the interval algebra over BED files.
//!
//! ```shell
//! cargo run --release --bin=annotate --features=binaries -- merge peaks.bed.gz
//! ```
//!
//! The following subcommands are available:
//!
//! * `merge`: collapses every run of overlapping records into one.
//! * `stitch`: joins records that lie within a maximum gap of one another.
//! * `subtract`: removes the portions of each record covered by another file.
//! * `intersect`: keeps only the portions of each record covered by another
//!   file.
//!
//! Results are written to standard output as BED records.

use std::fs::File;
use std::io::BufRead;
use std::io::BufReader;
use std::io::BufWriter;
use std::io::Write;
use std::path::Path;
use std::path::PathBuf;

use anyhow::Context;
use anyhow::Result;
use clap::Parser;
use clap::Subcommand;
use clap_verbosity_flag::Verbosity;
use flate2::read::GzDecoder;
use genomic_annotation::Annotation;
use genomic_annotation::algebra;
use genomic_annotation::annotation::factory::BedFactory;
use genomic_annotation::annotation::factory::Factory as _;
use genomic_annotation::core::Buffer;
use genomic_annotation::core::Located as _;
use genomic_annotation::core::Orientable as _;
use genomic_annotation::core::Scored as _;
use genomic_annotation::index;
use tracing::debug;
use tracing::info;
use tracing_log::AsTrace as _;
use tracing_subscriber::EnvFilter;

////////////////////////////////////////////////////////////////////////////////////////
// Reading and writing
////////////////////////////////////////////////////////////////////////////////////////

/// Returns whether a line holds no record (a blank, comment, `track` or
/// `browser` line).
fn is_header_or_blank(line: &str) -> bool {
    let line = line.trim();
    line.is_empty()
        || line.starts_with('#')
        || line.starts_with("track")
        || line.starts_with("browser")
}

/// Reads every record of a (possibly gzipped) BED file.
fn read_bed(path: &Path) -> Result<Vec<Annotation>> {
    let file =
        File::open(path).with_context(|| format!("opening BED file: {}", path.display()))?;

    let reader: Box<dyn BufRead> = match path.extension().and_then(|ext| ext.to_str()) {
        Some("gz") => Box::new(BufReader::new(GzDecoder::new(file))),
        _ => Box::new(BufReader::new(file)),
    };

    let mut annotations = Vec::new();

    for (i, result) in reader.lines().enumerate() {
        let line = result.with_context(|| format!("reading BED file: {}", path.display()))?;

        if is_header_or_blank(&line) {
            continue;
        }

        let annotation = BedFactory
            .create_from_line(&line)
            .with_context(|| format!("parsing line {} of {}", i + 1, path.display()))?;
        annotations.push(annotation);
    }

    info!(
        "read {} records from {}",
        annotations.len(),
        path.display()
    );

    Ok(annotations)
}

/// Formats an annotation as a six column BED record.
fn to_bed(annotation: &Annotation) -> String {
    format!(
        "{}\t{}\t{}\t{}\t{}\t{}",
        annotation.chromosome().unwrap_or_default(),
        annotation.start(),
        annotation.end(),
        annotation.name(),
        annotation.score(),
        annotation.orientation()
    )
}

/// Writes the annotations to standard output as BED records.
fn write_bed<'a, I>(annotations: I) -> Result<()>
where
    I: IntoIterator<Item = &'a Annotation>,
{
    let stdout = std::io::stdout();
    let mut writer = BufWriter::new(stdout.lock());

    for annotation in annotations {
        writeln!(writer, "{}", to_bed(annotation)).context("writing to standard output")?;
    }

    writer.flush().context("writing to standard output")?;
    Ok(())
}

////////////////////////////////////////////////////////////////////////////////////////
// Main
////////////////////////////////////////////////////////////////////////////////////////

/// A command to run.
#[derive(Subcommand)]
enum Command {
    /// Merges every run of overlapping records.
    Merge {
        /// The BED file to merge.
        input: PathBuf,
    },

    /// Stitches records that lie within a maximum gap of one another.
    Stitch {
        /// The BED file to stitch.
        input: PathBuf,

        /// The maximum gap between stitched records.
        #[arg(short, long, default_value_t = 0, allow_negative_numbers = true)]
        max_gap: Buffer,
    },

    /// Removes the portions of each record covered by another BED file.
    Subtract {
        /// The BED file to subtract from.
        input: PathBuf,

        /// The BED file of regions to remove.
        obstacles: PathBuf,
    },

    /// Keeps only the portions of each record covered by another BED file.
    Intersect {
        /// The BED file to intersect.
        input: PathBuf,

        /// The BED file of regions to keep.
        regions: PathBuf,
    },
}

/// Runs the interval algebra over BED files.
#[derive(Parser)]
struct Args {
    /// The command to run.
    #[command(subcommand)]
    command: Command,

    #[command(flatten)]
    verbose: Verbosity,
}

fn run(args: Args) -> Result<()> {
    match args.command {
        Command::Merge { input } => {
            let mut annotations = read_bed(&input)?;
            annotations.sort();

            let merged = algebra::merge_all_overlappers(&annotations);
            debug!("merged {} records into {}", annotations.len(), merged.len());

            write_bed(&merged)
        }
        Command::Stitch { input, max_gap } => {
            let mut annotations = read_bed(&input)?;
            annotations.sort();

            let stitched = algebra::stitch_list(annotations, max_gap);
            write_bed(&stitched)
        }
        Command::Subtract { input, obstacles } => {
            let annotations = read_bed(&input)?;
            let index = index::Builder
                .try_build_from(read_bed(&obstacles)?)
                .with_context(|| format!("indexing {}", obstacles.display()))?;

            let pieces = annotations
                .iter()
                .flat_map(|annotation| index.subtract(annotation))
                .collect::<Vec<_>>();

            write_bed(&pieces)
        }
        Command::Intersect { input, regions } => {
            let annotations = read_bed(&input)?;
            let index = index::Builder
                .try_build_from(read_bed(&regions)?)
                .with_context(|| format!("indexing {}", regions.display()))?;

            let pieces = annotations
                .iter()
                .flat_map(|annotation| index.intersect(annotation))
                .collect::<Vec<_>>();

            write_bed(&pieces)
        }
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    match std::env::var("RUST_LOG") {
        Ok(_) => tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::from_default_env())
            .with_writer(std::io::stderr)
            .init(),
        Err(_) => tracing_subscriber::fmt()
            .with_max_level(args.verbose.log_level_filter().as_trace())
            .with_writer(std::io::stderr)
            .init(),
    };

    run(args)
}
