use vergen::EmitBuilder;

// Emits the build timestamp and short git sha that nanofmt logs at startup.
fn main() -> Result<(), Box<dyn std::error::Error>> {
    EmitBuilder::builder()
        .build_timestamp()
        .git_sha(true) // VERGEN_GIT_SHA, abbreviated
        .emit()?;
    Ok(())
}
