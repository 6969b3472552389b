//! CLI entry point for dirinfo

use std::io::IsTerminal;
use std::path::PathBuf;
use std::process;

use clap::{Parser, ValueEnum};
use dirinfo::{OutputConfig, OutputFormat, TreeWalker, WalkerConfig, stdout_sink};
use tracing_subscriber::EnvFilter;

/// Color output mode
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
enum ColorMode {
    /// Auto-detect based on terminal and environment
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

/// Determine whether to use color output based on mode and environment.
fn should_use_color(mode: ColorMode) -> bool {
    match mode {
        ColorMode::Always => true,
        ColorMode::Never => false,
        ColorMode::Auto => {
            // https://no-color.org/
            if std::env::var_os("NO_COLOR").is_some() {
                return false;
            }
            if std::env::var_os("FORCE_COLOR").is_some() {
                return true;
            }
            if std::env::var("TERM").map(|t| t == "dumb").unwrap_or(false) {
                return false;
            }
            std::io::stdout().is_terminal()
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "dirinfo")]
#[command(about = "Report size, child counts and modification time for the entries of a directory")]
#[command(version)]
struct Args {
    /// Directory to inspect
    #[arg(default_value = ".")]
    path: PathBuf,

    /// Output one JSON object per entry instead of text records
    #[arg(long = "json")]
    json: bool,

    /// Control color output: auto, always, never
    #[arg(long = "color", value_name = "WHEN", default_value = "auto")]
    color: ColorMode,

    /// Visit entries in name order instead of filesystem order
    #[arg(short = 's', long = "sort")]
    sort: bool,

    /// Log traversal details to stderr
    #[arg(short = 'v', long = "verbose")]
    verbose: bool,
}

/// Install the stderr logger. `RUST_LOG` takes precedence over `--verbose`.
fn setup_logging(verbose: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if verbose {
            EnvFilter::new("dirinfo=debug,warn")
        } else {
            EnvFilter::new("warn")
        }
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() {
    let args = Args::parse();
    setup_logging(args.verbose);

    if !args.path.exists() {
        println!("Path {:?} does not exist.", args.path.display().to_string());
        process::exit(1);
    }

    let output_config = OutputConfig {
        use_color: !args.json && should_use_color(args.color),
        format: if args.json {
            OutputFormat::Json
        } else {
            OutputFormat::Text
        },
    };
    let walker = TreeWalker::new(WalkerConfig { sorted: args.sort });

    let mut sink = stdout_sink(&output_config);
    if let Err(e) = walker.report(sink.as_mut(), &args.path) {
        // Keep the records written before the failure.
        let _ = sink.finish();
        eprintln!("dirinfo: {}", e);
        process::exit(1);
    }
}
