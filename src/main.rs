use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Args, Parser};
use convert_uni::{Direction, Settings, convert_sources};
use log::LevelFilter;

/// Exit status when any source fails, the same byte as an exit(-1)
const FAILURE_EXIT_CODE: u8 = 255;

/// Converts .uni files between utf-16 and utf-8
#[derive(Parser)]
#[command(version, about, long_about = None)]
struct Cli {
    /// [uni file | directory]
    #[arg(required = true, num_args = 1..)]
    source: Vec<PathBuf>,
    #[command(flatten)]
    target: TargetEncoding,
    /// Log more detail (-v info, -vv debug)
    #[arg(short = 'v', long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Args, Clone)]
#[group(required = false, multiple = false)]
struct TargetEncoding {
    /// Convert from utf-16 to utf-8 [default]
    #[arg(long = "utf-8")]
    utf_8: bool,
    /// Convert from utf-8 to utf-16
    #[arg(long = "utf-16")]
    utf_16: bool,
}

impl Cli {
    fn settings(&self) -> Settings {
        let direction = match (self.target.utf_8, self.target.utf_16) {
            (false, true) => Direction::ToUtf16,
            _ => Direction::ToUtf8,
        };

        Settings {
            direction,
            verbose: self.verbose,
        }
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        _ => LevelFilter::Debug,
    };

    env_logger::Builder::new()
        .filter_level(level)
        .format_timestamp(None)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let settings = cli.settings();

    init_logging(settings.verbose);
    log::info!(
        "converting {} source(s) from {} to {}",
        cli.source.len(),
        settings.direction.source_encoding(),
        settings.direction.target_encoding()
    );

    if convert_sources(settings.direction, &cli.source) {
        ExitCode::SUCCESS
    } else {
        ExitCode::from(FAILURE_EXIT_CODE)
    }
}
