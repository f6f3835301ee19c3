// src/bin/generate_cli_files.rs
// Renders the nanofmt man page and shell completions into $OUT_DIR
// (or target/generated when run by hand).
use clap::CommandFactory;
use clap_complete::{generate, Shell};
use clap_complete_nushell::Nushell;
use clap_mangen::Man;
use nanofmt::cli::Args;
use std::{env, fs, io::Error, path::Path};

const BIN_NAME: &str = "nanofmt";

fn main() -> Result<(), Error> {
    let outdir = env::var_os("OUT_DIR").unwrap_or_else(|| "target/generated".into());
    let out_path = Path::new(&outdir);
    fs::create_dir_all(out_path)?;

    let mut cmd = Args::command().name(BIN_NAME);

    let man_path = out_path.join(format!("{BIN_NAME}.1"));
    println!("Generating man page: {man_path:?}");
    Man::new(cmd.clone()).render(&mut fs::File::create(&man_path)?)?;

    for (shell, ext) in [
        (Shell::Bash, "bash"),
        (Shell::Elvish, "elv"),
        (Shell::Fish, "fish"),
        (Shell::PowerShell, "ps1"),
        (Shell::Zsh, "zsh"),
    ] {
        let path = out_path.join(format!("{BIN_NAME}.{ext}"));
        println!("Generating completion file: {path:?}");
        generate(shell, &mut cmd, BIN_NAME, &mut fs::File::create(&path)?);
    }

    let nu_path = out_path.join(format!("{BIN_NAME}.nu"));
    println!("Generating Nushell completion file: {nu_path:?}");
    generate(Nushell, &mut cmd, BIN_NAME, &mut fs::File::create(&nu_path)?);

    println!("Generated man page and completions in: {}", out_path.display());
    Ok(())
}
