use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use log::{LevelFilter, Log, Metadata, Record};

use boxnote::{Config, FsStore};

#[derive(Parser)]
#[command(name = "boxnote")]
#[command(about = "Convert Box notes to XHTML")]
struct Cli {
    /// Box note files
    notes: Vec<PathBuf>,

    /// Config file
    #[arg(short, long, default_value = "boxnote.toml")]
    config: PathBuf,

    /// Output extension (defaults to html)
    #[arg(short, long)]
    extension: Option<String>,

    /// Directory for output files (defaults to next to each note)
    #[arg(short, long)]
    output_dir: Option<PathBuf>,

    /// Log more; repeat for more detail
    #[arg(short, long, action = clap::ArgAction::Count, conflicts_with = "quiet")]
    verbose: u8,

    /// Only log errors
    #[arg(short, long)]
    quiet: bool,
}

struct StderrLogger;

impl Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            eprintln!("{}: {}", record.level().as_str().to_lowercase(), record.args());
        }
    }

    fn flush(&self) {}
}

static LOGGER: StderrLogger = StderrLogger;

fn log_level(base: LevelFilter, verbose: u8, quiet: bool) -> LevelFilter {
    if quiet {
        return LevelFilter::Error;
    }
    LevelFilter::iter()
        .find(|level| *level as usize == (base as usize + verbose as usize).min(5))
        .unwrap_or(LevelFilter::Trace)
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Installed before loading config so config warnings are shown
    if log::set_logger(&LOGGER).is_ok() {
        log::set_max_level(LevelFilter::Warn);
    }

    let mut config = Config::load(&cli.config);
    if let Some(extension) = cli.extension {
        config.output.extension = extension;
    }
    if cli.output_dir.is_some() {
        config.output.directory = cli.output_dir;
    }

    log::set_max_level(log_level(
        config.log.level_filter(),
        cli.verbose,
        cli.quiet,
    ));

    let mut failed = Vec::new();
    for conversion in boxnote::convert_notes(&cli.notes[..], &mut FsStore, &config) {
        match conversion.result {
            Ok(output) => println!("Created {}", output.display()),
            Err(e) => failed.push(e.path().display().to_string()),
        }
    }

    if failed.is_empty() {
        return ExitCode::SUCCESS;
    }
    log::error!(
        "{} of {} notes failed: {}",
        failed.len(),
        cli.notes.len(),
        failed.join(", ")
    );
    ExitCode::FAILURE
}
