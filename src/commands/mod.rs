//! Command dispatch and handlers.

pub mod print;
pub mod run;

use crate::cli::Command;

/// Dispatch a parsed command to its handler.
///
/// # Errors
///
/// Returns an error string if the selected command handler fails.
pub fn dispatch(command: &Command) -> Result<(), String> {
    match command {
        Command::Run { commands, colors, executable, settings, json } => run::run(
            commands,
            *colors,
            executable.as_deref(),
            settings.as_deref(),
            *json,
        ),
        Command::Print { commands, colors, executable, settings } => {
            print::run(commands, *colors, executable.as_deref(), settings.as_deref())
        }
    }
}
