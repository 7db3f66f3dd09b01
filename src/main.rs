use std::{
    fs::File,
    io::{self, BufReader},
    path::PathBuf,
};

use clap::Parser;
use prefix_calc::{interpreter::session::SessionConfig, run_session, util::num::DEFAULT_PRECISION};

/// prefix-calc builds prefix-notation expression trees and evaluates them in
/// integer or floating-point mode.
///
/// Lines of the form `= <tokens>` replace the expression, `i` and `d` print its
/// integer and floating-point value, and `end` stops.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Reads commands from this file instead of standard input.
    #[arg(short, long)]
    file: Option<PathBuf>,

    /// Number of decimals printed for floating-point results.
    #[arg(short, long, default_value_t = DEFAULT_PRECISION)]
    precision: usize,

    /// Writes a diagnostic for every failed command to standard error.
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let args = Args::parse();
    let config = SessionConfig { precision: args.precision,
                                 verbose:   args.verbose, };

    let stdout = io::stdout();
    let mut output = stdout.lock();

    let result = if let Some(path) = &args.file {
        let file = File::open(path).unwrap_or_else(|_| {
                                       eprintln!("Failed to read the input file '{}'. Perhaps this file does not exist?",
                                                 path.display());
                                       std::process::exit(1);
                                   });
        run_session(BufReader::new(file), &mut output, config)
    } else {
        run_session(io::stdin().lock(), &mut output, config)
    };

    if let Err(e) = result {
        eprintln!("{e}");
        std::process::exit(1);
    }
}
