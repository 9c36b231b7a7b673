use std::{io, path::PathBuf, process};

use clap::{error::ErrorKind, Parser};
use minijs::{
    display_error,
    environment::environment::LookupPolicy,
    errors::errors::{Error, ErrorImpl},
    interpret,
    interpreter::interpreter::read_script,
    Options,
};
use tracing_subscriber::EnvFilter;

/// Runs a script of numeric `let` bindings, arithmetic, and `console.log` calls.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Path to the script to run.
    script: PathBuf,

    /// Resolve a redeclared name to its latest `let` instead of its first.
    #[arg(long)]
    newest_wins: bool,

    /// Log more to stderr (-v: debug, -vv: trace). Ignored when RUST_LOG is set.
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level)))
        .with_writer(io::stderr)
        .init();
}

fn main() {
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => e.exit(),
        Err(e) => {
            let error = Error::without_position(ErrorImpl::UsageError {
                usage: e.render().to_string().trim_end().to_string(),
            });
            // Usage problems go to stdout.
            println!("{}", error.get_tip());
            process::exit(error.exit_code());
        }
    };

    init_logging(args.verbose);

    let options = Options {
        lookup_policy: if args.newest_wins {
            LookupPolicy::NewestWins
        } else {
            LookupPolicy::OldestWins
        },
    };

    let source = match read_script(&args.script) {
        Ok(source) => source,
        Err(error) => {
            eprintln!("{}", display_error(&error, ""));
            process::exit(error.exit_code());
        }
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();
    // A successful run has already flushed `out`.
    let result = interpret(&source, Some(args.script.display().to_string()), &options, &mut out);

    if let Err(error) = result {
        eprintln!("{}", display_error(&error, &source));
        process::exit(error.exit_code());
    }
}
