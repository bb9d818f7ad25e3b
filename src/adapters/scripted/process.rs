//! Scripted process spawner for tests.
//!
//! Serves a canned child in place of the real executable and records every
//! interaction in order, so tests can assert on the spawned argument list,
//! the exact bytes written to stdin, and the relative ordering of stream
//! operations.

use std::io::{Cursor, Read, Write};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use crate::ports::process::{ChildProcess, ProcessSpawner};

/// One observed interaction with a scripted child.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChildEvent {
    /// A child was created for this program and argument list.
    Spawned {
        /// The program path passed to the spawner.
        program: PathBuf,
        /// The argument list passed to the spawner.
        args: Vec<String>,
    },
    /// Bytes written to the child's stdin.
    StdinWrite(Vec<u8>),
    /// The child's stdin handle was dropped, closing the stream.
    StdinClosed,
    /// The child's stdout handle was taken for draining.
    StdoutTaken,
    /// The child's stderr handle was taken for draining.
    StderrTaken,
    /// The child was waited on.
    Waited,
}

/// Shared interaction log, inspected by tests after a run.
pub type EventLog = Arc<Mutex<Vec<ChildEvent>>>;

/// Scripted spawner whose children produce fixed output.
pub struct ScriptedSpawner {
    stdout: String,
    stderr: String,
    exit_code: Option<i32>,
    spawn_error: Option<String>,
    events: EventLog,
}

impl ScriptedSpawner {
    /// Creates a spawner whose children emit the given streams and exit code.
    #[must_use]
    pub fn new(stdout: &str, stderr: &str, exit_code: Option<i32>) -> Self {
        Self {
            stdout: stdout.to_string(),
            stderr: stderr.to_string(),
            exit_code,
            spawn_error: None,
            events: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Creates a spawner that fails every spawn with the given message.
    #[must_use]
    pub fn failing(message: &str) -> Self {
        Self {
            stdout: String::new(),
            stderr: String::new(),
            exit_code: None,
            spawn_error: Some(message.to_string()),
            events: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Handle to the shared interaction log.
    #[must_use]
    pub fn events(&self) -> EventLog {
        Arc::clone(&self.events)
    }
}

impl ProcessSpawner for ScriptedSpawner {
    fn spawn(
        &self,
        program: &Path,
        args: &[String],
    ) -> Result<Box<dyn ChildProcess>, Box<dyn std::error::Error + Send + Sync>> {
        if let Some(message) = &self.spawn_error {
            return Err(message.clone().into());
        }
        record(&self.events, ChildEvent::Spawned {
            program: program.to_path_buf(),
            args: args.to_vec(),
        });
        Ok(Box::new(ScriptedChild {
            stdout: Some(self.stdout.clone()),
            stderr: Some(self.stderr.clone()),
            exit_code: self.exit_code,
            stdin_taken: false,
            events: Arc::clone(&self.events),
        }))
    }
}

fn record(events: &EventLog, event: ChildEvent) {
    events.lock().expect("event log lock poisoned").push(event);
}

/// Canned child handing out logging stream endpoints.
struct ScriptedChild {
    stdout: Option<String>,
    stderr: Option<String>,
    exit_code: Option<i32>,
    stdin_taken: bool,
    events: EventLog,
}

impl ChildProcess for ScriptedChild {
    fn take_stdin(&mut self) -> Option<Box<dyn Write + Send>> {
        if self.stdin_taken {
            return None;
        }
        self.stdin_taken = true;
        Some(Box::new(LoggingStdin { events: Arc::clone(&self.events) }))
    }

    fn take_stdout(&mut self) -> Option<Box<dyn Read + Send>> {
        let text = self.stdout.take()?;
        record(&self.events, ChildEvent::StdoutTaken);
        Some(Box::new(Cursor::new(text.into_bytes())))
    }

    fn take_stderr(&mut self) -> Option<Box<dyn Read + Send>> {
        let text = self.stderr.take()?;
        record(&self.events, ChildEvent::StderrTaken);
        Some(Box::new(Cursor::new(text.into_bytes())))
    }

    fn wait(&mut self) -> Result<Option<i32>, Box<dyn std::error::Error + Send + Sync>> {
        record(&self.events, ChildEvent::Waited);
        Ok(self.exit_code)
    }
}

/// Stdin endpoint that logs writes and its own closing.
struct LoggingStdin {
    events: EventLog,
}

impl Write for LoggingStdin {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        record(&self.events, ChildEvent::StdinWrite(buf.to_vec()));
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

impl Drop for LoggingStdin {
    fn drop(&mut self) {
        record(&self.events, ChildEvent::StdinClosed);
    }
}
