//! `gsbatch print` command.

use std::path::Path;

use crate::config::{Overrides, Settings};
use crate::invocation::Invocation;

/// Execute the `print` command.
///
/// Prints the composed invocation line exactly as `run` would spawn it,
/// without creating any process.
///
/// # Errors
///
/// Returns an error string if settings cannot be loaded.
pub fn run(
    commands: &[String],
    colors: bool,
    executable: Option<&Path>,
    settings_path: Option<&Path>,
) -> Result<(), String> {
    println!("{}", composed_line(commands, colors, executable, settings_path)?);
    Ok(())
}

/// Renders the invocation line for the given CLI values.
///
/// # Errors
///
/// Returns an error string if settings cannot be loaded.
pub fn composed_line(
    commands: &[String],
    colors: bool,
    executable: Option<&Path>,
    settings_path: Option<&Path>,
) -> Result<String, String> {
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
    Ok(invocation.command_line())
}
