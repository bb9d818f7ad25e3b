//! `gsbatch run` command.

use std::io::Write;
use std::path::Path;

use crate::adapters::live::LiveProcessSpawner;
use crate::batch;
use crate::config::{Overrides, Settings};
use crate::invocation::Invocation;
use crate::ports::process::ProcessSpawner;

/// Execute the `run` command with the live spawner.
///
/// # Errors
///
/// Returns an error string if settings cannot be loaded or the executable
/// cannot be spawned.
pub fn run(
    commands: &[String],
    colors: bool,
    executable: Option<&Path>,
    settings_path: Option<&Path>,
    json: bool,
) -> Result<(), String> {
    run_with_spawner(commands, colors, executable, settings_path, json, &LiveProcessSpawner)
}

/// Execute the `run` command against an explicit spawner.
///
/// The child's stdout is relayed to stdout and its stderr to stderr, both
/// verbatim; with `json` the captured result is emitted as one JSON object
/// instead. A spawned child means success regardless of its exit code.
///
/// # Errors
///
/// Returns an error string if settings cannot be loaded or the executable
/// cannot be spawned.
pub fn run_with_spawner(
    commands: &[String],
    colors: bool,
    executable: Option<&Path>,
    settings_path: Option<&Path>,
    json: bool,
    spawner: &dyn ProcessSpawner,
) -> Result<(), String> {
    let settings = Settings::load(&Overrides {
        executable,
        colors: colors.then_some(true),
        settings_path,
    })?;
    let invocation = Invocation::new(
        &settings.executable,
        commands,
        settings.colors,
        settings.passphrase_present(),
    );

    let output = batch::run_batch(spawner, &invocation, settings.passphrase.as_deref())?;

    if json {
        let rendered = serde_json::to_string_pretty(&output)
            .map_err(|e| format!("Failed to render result as JSON: {e}"))?;
        println!("{rendered}");
    } else {
        print!("{}", output.stdout);
        eprint!("{}", output.stderr);
        let _ = std::io::stdout().flush();
        let _ = std::io::stderr().flush();
    }
    Ok(())
}
