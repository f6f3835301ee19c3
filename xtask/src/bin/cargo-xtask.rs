use anyhow::{bail, Context, Result};
use std::env;
use std::path::PathBuf;
use std::process::{Command, ExitCode};

/// Lets the tasks run as `cargo xtask <cmd>` instead of
/// `cargo run --package xtask -- <cmd>`.
fn main() -> Result<ExitCode> {
    // Cargo passes "xtask" as the first argument.
    let args: Vec<String> = env::args().skip_while(|arg| arg != "xtask").skip(1).collect();

    if args.is_empty() {
        println!("Running xtask without arguments - use 'cargo xtask help' to see available commands");
    }

    let cargo = env::var("CARGO").unwrap_or_else(|_| "cargo".to_string());
    let xtask_path = workspace_root(&cargo)?.join("target/debug/xtask");

    if !xtask_path.exists() {
        println!("Building xtask first...");
        let built = Command::new(&cargo)
            .args(["build", "--package", "xtask"])
            .status()
            .context("Failed to build xtask")?;
        if !built.success() {
            bail!("Failed to build xtask");
        }
    }

    let status = Command::new(&xtask_path)
        .args(&args)
        .status()
        .with_context(|| format!("Failed to run {}", xtask_path.display()))?;

    let code = status.code().and_then(|c| u8::try_from(c).ok()).unwrap_or(1);
    Ok(ExitCode::from(code))
}

fn workspace_root(cargo: &str) -> Result<PathBuf> {
    let output = Command::new(cargo)
        .args(["locate-project", "--workspace", "--message-format=plain"])
        .output()
        .context("Failed to run cargo locate-project")?;

    let manifest = String::from_utf8(output.stdout).context("cargo locate-project printed invalid UTF-8")?;
    PathBuf::from(manifest.trim())
        .parent()
        .map(PathBuf::from)
        .context("Workspace manifest has no parent directory")
}
