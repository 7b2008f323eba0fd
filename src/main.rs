mod logging;

use clap::Parser;
use cpu_time::ProcessTime;
use lox_scanner::{LoxError, SAMPLE_PROGRAM, ScanOutput, Scanner, debug};
use std::fs;
use std::io::{BufRead, Write, stdin, stdout};
use std::path::{Path, PathBuf};
use std::process;
use tracing::info;

#[derive(Parser)]
#[command(name = "lox-scan", about = "Tokenize Lox source and print the tokens", version)]
struct Cli {
    /// Source file to scan
    #[arg(value_name = "PATH", conflicts_with_all = ["repl", "sample"])]
    path: Option<PathBuf>,

    /// Scan each line typed at the prompt
    #[arg(long)]
    repl: bool,

    /// Scan the built-in sample program (default when no PATH is given)
    #[arg(long, conflicts_with = "repl")]
    sample: bool,

    /// Log level used when RUST_LOG is unset
    #[arg(long, value_name = "LEVEL", default_value = logging::DEFAULT_LEVEL)]
    log_level: String,

    /// Log the CPU time spent scanning
    #[arg(long)]
    timings: bool,
}

fn scan_timed(source: &str, timings: bool) -> ScanOutput<'_> {
    let started = ProcessTime::now();
    let output = Scanner::new(source).scan_tokens();
    if timings {
        info!(elapsed = ?started.elapsed(), bytes = source.len(), "scanned");
    }
    output
}

fn report(output: &ScanOutput, name: &str) {
    debug::print_tokens(&output.tokens, name);
    eprint!("{}", debug::error_listing(&output.errors));
}

fn run_source(source: &str, name: &str, timings: bool) -> Result<(), LoxError> {
    let output = scan_timed(source, timings);
    report(&output, name);
    output.status()
}

fn run_file(path: &Path, timings: bool) -> Result<(), LoxError> {
    let source = fs::read_to_string(path).map_err(|source| LoxError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    run_source(&source, &path.display().to_string(), timings)
}

fn repl(timings: bool) {
    let mut line = String::new();
    let mut input = stdin().lock();

    loop {
        print!("> ");
        if let Err(e) = stdout().flush() {
            eprintln!("{}", e);
            break;
        }

        line.clear();
        match input.read_line(&mut line) {
            Ok(0) => break,
            Ok(_) => {}
            Err(e) => {
                eprintln!("{}", e);
                break;
            }
        }

        let entry = line.trim();
        if entry.eq_ignore_ascii_case("quit") || entry.eq_ignore_ascii_case("exit") {
            break;
        }

        // Errors were already printed; the session keeps going.
        let output = scan_timed(entry, timings);
        report(&output, "repl");
    }

    println!("Exiting.");
}

fn main() {
    let cli = Cli::parse();
    logging::init(&cli.log_level);

    let result = match &cli.path {
        _ if cli.repl => {
            repl(cli.timings);
            Ok(())
        }
        Some(path) if !cli.sample => run_file(path, cli.timings),
        _ => run_source(SAMPLE_PROGRAM, "sample", cli.timings),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        process::exit(e.exit_code());
    }
}
