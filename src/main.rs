// Main application entry point.
// Parses arguments, sets up logging, then formats every value from the
// command line (or stdin) through a single printer.

use nanofmt::cli;
use nanofmt::config::{Config, ValueKind};
use nanofmt::input;
use nanofmt::telemetry;
use nanofmt::Printer;
use serde::Serialize;
use std::io::{self, BufRead, BufWriter, ErrorKind, Write};
use std::process::ExitCode;
use tracing::{debug, error, trace};

/// Exit status when at least one value could not be parsed.
const EXIT_BAD_INPUT: u8 = 2;
/// Exit status when reading stdin or writing stdout fails.
const EXIT_IO: u8 = 3;

/// One line of `--json` output.
#[derive(Serialize)]
struct Record<'a> {
    input: &'a str,
    value: i64,
    formatted: &'a str,
}

fn main() -> ExitCode {
    let args = cli::parse_args();
    let cfg = Config::from_args_and_env(&args, std::env::var("RUST_LOG").ok());
    telemetry::init_tracing(&cfg);

    let mut printer = Printer::new().with_micro_unit(cfg.micro);
    let mut out = BufWriter::new(io::stdout().lock());

    let outcome = if args.values.is_empty() {
        debug!("No values on the command line, reading stdin");
        format_stdin(&mut printer, &cfg, &mut out)
    } else {
        format_all(&mut printer, &cfg, args.values.iter().map(String::as_str), &mut out)
    };

    match outcome.and_then(|failures| out.flush().map(|_| failures)) {
        Ok(0) => ExitCode::SUCCESS,
        Ok(failures) => {
            debug!(failures, "Some values were rejected");
            ExitCode::from(EXIT_BAD_INPUT)
        }
        // The reader went away (e.g. `| head`); nothing left to report.
        Err(e) if e.kind() == ErrorKind::BrokenPipe => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %e, "I/O error");
            ExitCode::from(EXIT_IO)
        }
    }
}

fn format_stdin(printer: &mut Printer, cfg: &Config, out: &mut impl Write) -> io::Result<u64> {
    let mut failures = 0;
    for line in io::stdin().lock().lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        if !format_one(printer, cfg, &line, out)? {
            failures += 1;
        }
    }
    Ok(failures)
}

fn format_all<'a>(
    printer: &mut Printer,
    cfg: &Config,
    values: impl Iterator<Item = &'a str>,
    out: &mut impl Write,
) -> io::Result<u64> {
    let mut failures = 0;
    for text in values {
        if !format_one(printer, cfg, text, out)? {
            failures += 1;
        }
    }
    Ok(failures)
}

/// Formats and prints one value. Returns `Ok(false)` when the value was rejected.
fn format_one(printer: &mut Printer, cfg: &Config, text: &str, out: &mut impl Write) -> io::Result<bool> {
    let value = match input::parse_value(cfg.kind, text) {
        Ok(v) => v,
        Err(e) => {
            error!(error = %e, "Skipping value");
            return Ok(false);
        }
    };

    let formatted = match cfg.kind {
        ValueKind::Duration => printer.duration(value),
        ValueKind::Size => printer.size(value),
    };
    trace!(input = text, value, formatted = %formatted, "Formatted value");

    if cfg.json {
        let record = Record {
            input: text.trim(),
            value,
            formatted: formatted.as_str(),
        };
        serde_json::to_writer(&mut *out, &record).map_err(io::Error::from)?;
        writeln!(out)?;
    } else {
        writeln!(out, "{formatted}")?;
    }
    Ok(true)
}
