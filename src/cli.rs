use clap::{Parser, ValueEnum};

/// Command-line spelling of the microsecond suffix.
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum MicroArg {
    /// `us`
    Ascii,
    /// `µs`
    Sign,
}

/// Formats nanosecond durations or byte counts into short human-readable strings.
/// Values come from the command line, or one per line on stdin when none are given.
#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Values to format. Durations accept integer nanoseconds or humantime text
    /// (`250ms`, `1h 2m`, optionally prefixed with `-`). Sizes accept integer bytes.
    #[arg(value_name = "VALUE", allow_hyphen_values = true, allow_negative_numbers = true)]
    pub values: Vec<String>,

    /// Treat values as byte counts instead of durations.
    #[arg(short, long, action = clap::ArgAction::SetTrue)]
    pub size: bool,

    /// Microsecond suffix. Defaults to `ascii`, or `sign` in builds with the
    /// `micro-sign` feature.
    #[arg(long, value_enum, value_name = "UNIT")]
    pub micro_unit: Option<MicroArg>,

    /// Shorthand for `--micro-unit sign`.
    #[arg(long, action = clap::ArgAction::SetTrue, conflicts_with = "micro_unit")]
    pub micro_sign: bool,

    /// Emit one JSON object per value on stdout.
    #[arg(long, action = clap::ArgAction::SetTrue)]
    pub json: bool,

    /// Enable verbose logging (includes log targets).
    #[arg(short, long, action = clap::ArgAction::SetTrue)]
    pub verbose: bool,

    /// Log filter directive (overrides RUST_LOG).
    #[arg(long, value_name = "FILTER")]
    pub log_filter: Option<String>,
}

/// Parses command line arguments using clap.
pub fn parse_args() -> Args {
    Args::parse()
}
