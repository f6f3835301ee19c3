use anyhow::{Context, Result};
use clap::{CommandFactory, Parser};
use clap_complete::{generate, Shell};
use clap_complete_nushell::Nushell;
use clap_mangen::Man;
use nanofmt::cli::Args; // Import Args from the library

use std::io::Write;
use std::{
    env, fs,
    path::{Path, PathBuf},
    process::Command,
};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct XtaskArgs {
    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Subcommand, Debug)]
enum Commands {
    /// Generate man page and shell completions.
    GenerateDocs,
    /// Run cargo check.
    Check,
    /// Run cargo test, with and without the micro-sign feature.
    Test,
    /// Run cargo clippy.
    Clippy,
    /// Run cargo fmt --check.
    FmtCheck,
    /// Run the criterion benchmarks.
    Bench,
}

fn main() -> Result<()> {
    let args = XtaskArgs::parse();

    match args.command {
        Commands::GenerateDocs => generate_docs().context("Failed to generate docs"),
        Commands::Check => run_cargo("check", &["--workspace", "--all-targets"]).context("cargo check failed"),
        Commands::Test => {
            run_cargo("test", &["--workspace"]).context("cargo test failed")?;
            run_cargo("test", &["--features", "micro-sign"]).context("cargo test --features micro-sign failed")
        }
        Commands::Clippy => {
            run_cargo("clippy", &["--workspace", "--all-targets", "--", "-D", "warnings"])
                .context("cargo clippy failed")
        }
        Commands::FmtCheck => run_cargo("fmt", &["--all", "--", "--check"]).context("cargo fmt failed"),
        Commands::Bench => run_cargo("bench", &["--bench", "format"]).context("cargo bench failed"),
    }
}

fn run_cargo(command: &str, args: &[&str]) -> Result<()> {
    let cargo = env::var("CARGO").unwrap_or_else(|_| "cargo".to_string());
    let mut cmd = Command::new(cargo);
    cmd.arg(command).args(args).current_dir(project_root()?);

    let status = cmd
        .status()
        .with_context(|| format!("Failed to execute cargo {command}"))?;
    if !status.success() {
        anyhow::bail!("cargo {command} exited with {status}");
    }
    Ok(())
}

fn project_root() -> Result<PathBuf> {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .map(Path::to_path_buf)
        .context("xtask manifest has no parent directory")
}

fn generate_docs() -> Result<()> {
    let docs_dir = project_root()?.join("docs");
    let man_dir = docs_dir.join("man");
    let completions_dir = docs_dir.join("completions");

    fs::create_dir_all(&man_dir).context("Failed to create man directory")?;
    fs::create_dir_all(&completions_dir).context("Failed to create completions directory")?;

    let cmd = Args::command().name("nanofmt");

    let man_path = man_dir.join(format!("{}.1", cmd.get_name()));
    println!("Generating man page: {man_path:?}");
    generate_man_page(&cmd, &man_path)?;

    generate_completions(&cmd, &completions_dir)?;

    println!("Generated man page and completions in: {}", docs_dir.display());
    Ok(())
}

// --- Man Page Content Constants ---
// roff formatting: \fB...\fR = bold, \fI...\fR = italic, \- = hyphen, \(bu = bullet

const MAN_UNITS: &str = r#"
Durations are given in nanoseconds and printed in the first unit that fits:
.IP \(bu 4
below 1 microsecond: \fIN\fR ns
.IP \(bu 4
below 1 millisecond: \fIN.FF\fR us (or \(mcs with \fB\-\-micro\-unit sign\fR)
.IP \(bu 4
below 1 second: \fIN.FF\fR ms
.IP \(bu 4
below 1 minute: \fIN.FF\fR s
.IP \(bu 4
below 1 hour: \fIm:ss.f\fR
.IP \(bu 4
below 1 day: \fIh:mm:ss\fR
.IP \(bu 4
otherwise: \fIN\fRd\fIhh:mm:ss\fR
.PP
Byte counts below 10000 are printed exactly as \fIN\fR bytes. Larger counts use the smallest of KB, MB, GB and TB (powers of 1024) that keeps the number below 10000, with at most two decimals.
"#;

const MAN_ROUNDING: &str = r#"
Fractions are rounded half up using integer arithmetic. Trailing zeros after the decimal point are never printed, and a fraction that rounds to zero is dropped entirely, so 1000 ns prints as \fB1 us\fR and 1500 ns as \fB1.5 us\fR.
Seconds in the \fIm:ss.f\fR form that round up to 60 carry into the minutes (and from 59:59.95 into \fB1:00:00\fR).
"#;

const MAN_EXAMPLES: &str = r#"
.TP
.B {bin_name} 1500 61500000000
Prints \fB1.5 us\fR and \fB1:01.5\fR.
.TP
.B {bin_name} "1h 2m 3s" -250ms
Humantime input; prints \fB1:02:03\fR and \fB\-250 ms\fR.
.TP
.B {bin_name} \-\-size 10240 \-52428800
Prints \fB10 KB\fR and \fB\-50 MB\fR.
.TP
.B seq 0 1000 10000 | {bin_name} \-\-json
Reads values from standard input and writes one JSON object per line.
"#;

const MAN_EXIT_STATUS: &str = r#"
.TP
.B 0
All values were formatted.
.TP
.B 2
At least one value could not be parsed. The remaining values are still printed.
.TP
.B 3
Reading standard input or writing standard output failed.
"#;

const MAN_ENVIRONMENT: &str = r#"
.TP
.B RUST_LOG
Log filter directive used when \fB\-\-log\-filter\fR is not given. Defaults to \fBnanofmt=warn\fR.
"#;

/// Generates the man page with custom sections.
fn generate_man_page(cmd: &clap::Command, path: &Path) -> Result<()> {
    let version = env!("CARGO_PKG_VERSION");
    let date = chrono::Local::now().format("%B %d, %Y").to_string();
    let bin_name = cmd.get_name();

    let mut buffer: Vec<u8> = Vec::new();
    writeln!(buffer, r#".TH "{}" 1 "{}" "{}" "User Commands""#, bin_name.to_uppercase(), date, version)?;
    Man::new(cmd.clone()).render(&mut buffer)?;

    let custom_sections = [
        ("UNITS", MAN_UNITS),
        ("ROUNDING", MAN_ROUNDING),
        ("EXAMPLES", MAN_EXAMPLES),
        ("EXIT STATUS", MAN_EXIT_STATUS),
        ("ENVIRONMENT", MAN_ENVIRONMENT),
    ];
    for (title, content_template) in custom_sections {
        writeln!(buffer, ".SH {title}")?;
        writeln!(buffer, "{}", content_template.replace("{bin_name}", bin_name))?;
    }

    fs::write(path, buffer).with_context(|| format!("Failed to write man page to {path:?}"))?;
    Ok(())
}

/// Generates shell completion files.
fn generate_completions(cmd: &clap::Command, completions_dir: &Path) -> Result<()> {
    let bin_name = cmd.get_name().to_string();

    for (shell, ext) in [
        (Shell::Bash, "bash"),
        (Shell::Elvish, "elv"),
        (Shell::Fish, "fish"),
        (Shell::PowerShell, "ps1"),
        (Shell::Zsh, "zsh"),
    ] {
        let completions_path = completions_dir.join(format!("{bin_name}.{ext}"));
        println!("Generating completion file: {completions_path:?}");
        let mut file = fs::File::create(&completions_path)
            .with_context(|| format!("Failed to create completion file: {completions_path:?}"))?;
        generate(shell, &mut cmd.clone(), bin_name.clone(), &mut file);
    }

    let nu_path = completions_dir.join(format!("{bin_name}.nu"));
    println!("Generating Nushell completion file: {nu_path:?}");
    let mut nu_file = fs::File::create(&nu_path)
        .with_context(|| format!("Failed to create Nushell completion file: {nu_path:?}"))?;
    generate(Nushell, &mut cmd.clone(), bin_name, &mut nu_file);

    Ok(())
}
