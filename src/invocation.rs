//! Invocation assembly and shell quoting for the external executable.
//!
//! An invocation always has the shape `<program> [-c] [-s] (-b <command>)+`:
//! `-c` disables colored output and is omitted when colors are requested,
//! `-s` announces that a secret follows on stdin, and each batch command is
//! forwarded behind its own `-b` flag, in input order.

use std::path::{Path, PathBuf};

/// Flag preceding every batch command.
const BATCH_FLAG: &str = "-b";
/// Flag disabling colored output.
const NO_COLOR_FLAG: &str = "-c";
/// Flag announcing that a secret follows on stdin.
const SECRET_FLAG: &str = "-s";

/// One composed invocation of the external executable.
#[derive(Debug, Clone)]
pub struct Invocation {
    program: PathBuf,
    colors: bool,
    secret_on_stdin: bool,
    commands: Vec<String>,
}

impl Invocation {
    /// Composes an invocation for the given batch.
    ///
    /// Commands are treated as opaque strings; an empty batch is accepted and
    /// renders no `-b` pairs.
    #[must_use]
    pub fn new(program: &Path, commands: &[String], colors: bool, secret_on_stdin: bool) -> Self {
        Self {
            program: program.to_path_buf(),
            colors,
            secret_on_stdin,
            commands: commands.to_vec(),
        }
    }

    /// The program to spawn.
    #[must_use]
    pub fn program(&self) -> &Path {
        &self.program
    }

    /// Arguments in spawn order: `[-c] [-s] (-b <command>)+`.
    ///
    /// Each command stays one argument regardless of its content, so embedded
    /// spaces or quotes can never change the flag count.
    #[must_use]
    pub fn args(&self) -> Vec<String> {
        let mut args = Vec::new();
        if !self.colors {
            args.push(NO_COLOR_FLAG.to_string());
        }
        if self.secret_on_stdin {
            args.push(SECRET_FLAG.to_string());
        }
        for command in &self.commands {
            args.push(BATCH_FLAG.to_string());
            args.push(command.clone());
        }
        args
    }

    /// Renders the invocation as a single copy-pasteable shell line.
    ///
    /// Batch commands are single-quoted with [`quote`] so the rendered line
    /// parses back to the same argument list.
    #[must_use]
    pub fn command_line(&self) -> String {
        let mut line = self.program.display().to_string();
        if !self.colors {
            line.push(' ');
            line.push_str(NO_COLOR_FLAG);
        }
        if self.secret_on_stdin {
            line.push(' ');
            line.push_str(SECRET_FLAG);
        }
        for command in &self.commands {
            line.push(' ');
            line.push_str(BATCH_FLAG);
            line.push(' ');
            line.push_str(&quote(command));
        }
        line
    }
}

/// Single-quotes `arg` for the POSIX shell.
///
/// Every embedded single quote is rewritten as `'\''` (close quote, escaped
/// quote, reopen quote), so any byte sequence survives as one shell word.
#[must_use]
pub fn quote(arg: &str) -> String {
    let mut quoted = String::with_capacity(arg.len() + 2);
    quoted.push('\'');
    for ch in arg.chars() {
        if ch == '\'' {
            quoted.push_str("'\\''");
        } else {
            quoted.push(ch);
        }
    }
    quoted.push('\'');
    quoted
}
