// crates/roundtrip-cli/src/main.rs

use std::ffi::OsString;
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use tracing::debug;

use roundtrip_core::report::EXIT_FAILURE;
use roundtrip_core::{parse_args, run_with, BloscCodec, HarnessError, Outcome, Report};

#[derive(Parser, Debug)]
#[command(name = "test_compress_roundtrip")]
#[command(about = "Blosc compress + decompress round trip check", long_about = None)]
// No -h/-V: every token is a value for a numbered slot.
#[command(disable_help_flag = true, disable_version_flag = true)]
struct Cli {
    /// TYPE_SIZE ELEMENT_COUNT BUFFER_ALIGNMENT COMPRESSION_LEVEL SHUFFLE_ENABLED THREAD_COUNT
    #[arg(
        value_name = "VALUE",
        num_args = 0..,
        allow_hyphen_values = true,
        trailing_var_arg = true
    )]
    values: Vec<OsString>,
}

fn main() -> ExitCode {
    init_logging();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            eprintln!("{e}");
            return ExitCode::from(EXIT_FAILURE);
        }
    };

    match run(&cli) {
        Ok(outcome) => Report::from_outcome(outcome).emit(),
        Err(err) => report_error(&err),
    }
}

fn run(cli: &Cli) -> anyhow::Result<Outcome> {
    let config = parse_args(&cli.values)?;
    debug!(?config, "configuration accepted");

    let outcome = run_with(BloscCodec::new(), &config).with_context(|| {
        format!(
            "round trip aborted (type_size={} elements={} align={} level={} shuffle={} threads={})",
            config.type_size,
            config.element_count,
            config.buffer_alignment,
            config.compression_level,
            config.shuffle_enabled as u8,
            config.thread_count
        )
    })?;
    Ok(outcome)
}

fn report_error(err: &anyhow::Error) -> ExitCode {
    match err.downcast_ref::<HarnessError>() {
        Some(e) if e.is_argument_error() => Report::from_error(e).emit(),
        _ => {
            eprintln!("{err:#}");
            ExitCode::from(EXIT_FAILURE)
        }
    }
}

fn init_logging() {
    // stderr only, and only codec failures: a passing run or a mismatch
    // prints nothing.
    let _ = tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(tracing::Level::ERROR)
        .with_target(false)
        .try_init();
}
