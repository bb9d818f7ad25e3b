//! Live process spawner using `std::process::Command`.

use std::io::{Read, Write};
use std::path::Path;
use std::process::{Child, Command, Stdio};

use crate::ports::process::{ChildProcess, ProcessSpawner};

/// Live spawner that launches the executable as a real child process.
///
/// The program is spawned directly with an argv vector, never through an
/// intermediate shell, so a missing or non-executable target surfaces as a
/// spawn error rather than as shell diagnostics on stderr.
pub struct LiveProcessSpawner;

impl ProcessSpawner for LiveProcessSpawner {
    fn spawn(
        &self,
        program: &Path,
        args: &[String],
    ) -> Result<Box<dyn ChildProcess>, Box<dyn std::error::Error + Send + Sync>> {
        tracing::debug!(program = %program.display(), ?args, "spawning child process");
        let child = Command::new(program)
            .args(args)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()?;
        Ok(Box::new(LiveChild { child }))
    }
}

/// Wraps a spawned `std::process::Child`, handing out its piped streams.
struct LiveChild {
    child: Child,
}

impl ChildProcess for LiveChild {
    fn take_stdin(&mut self) -> Option<Box<dyn Write + Send>> {
        self.child.stdin.take().map(|s| Box::new(s) as Box<dyn Write + Send>)
    }

    fn take_stdout(&mut self) -> Option<Box<dyn Read + Send>> {
        self.child.stdout.take().map(|s| Box::new(s) as Box<dyn Read + Send>)
    }

    fn take_stderr(&mut self) -> Option<Box<dyn Read + Send>> {
        self.child.stderr.take().map(|s| Box::new(s) as Box<dyn Read + Send>)
    }

    fn wait(&mut self) -> Result<Option<i32>, Box<dyn std::error::Error + Send + Sync>> {
        let status = self.child.wait()?;
        Ok(status.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(items: &[&str]) -> Vec<String> {
        items.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn spawns_and_captures_stdout() {
        let spawner = LiveProcessSpawner;
        let mut child = spawner.spawn(Path::new("echo"), &args(&["hello"])).unwrap();
        drop(child.take_stdin());

        let mut stdout = String::new();
        child.take_stdout().unwrap().read_to_string(&mut stdout).unwrap();

        assert_eq!(stdout, "hello\n");
        assert_eq!(child.wait().unwrap(), Some(0));
    }

    #[test]
    fn stdin_round_trips_through_cat() {
        let spawner = LiveProcessSpawner;
        let mut child = spawner.spawn(Path::new("cat"), &[]).unwrap();

        let mut stdin = child.take_stdin().unwrap();
        stdin.write_all(b"round trip").unwrap();
        drop(stdin);

        let mut stdout = String::new();
        child.take_stdout().unwrap().read_to_string(&mut stdout).unwrap();

        assert_eq!(stdout, "round trip");
        assert_eq!(child.wait().unwrap(), Some(0));
    }

    #[test]
    fn captures_nonzero_exit_code() {
        let spawner = LiveProcessSpawner;
        let mut child = spawner.spawn(Path::new("sh"), &args(&["-c", "exit 42"])).unwrap();
        drop(child.take_stdin());
        assert_eq!(child.wait().unwrap(), Some(42));
    }

    #[test]
    fn captures_stderr_separately() {
        let spawner = LiveProcessSpawner;
        let mut child = spawner
            .spawn(Path::new("sh"), &args(&["-c", "echo out; echo err >&2"]))
            .unwrap();
        drop(child.take_stdin());

        let mut stdout = String::new();
        child.take_stdout().unwrap().read_to_string(&mut stdout).unwrap();
        let mut stderr = String::new();
        child.take_stderr().unwrap().read_to_string(&mut stderr).unwrap();

        assert_eq!(stdout, "out\n");
        assert_eq!(stderr, "err\n");
        assert_eq!(child.wait().unwrap(), Some(0));
    }

    #[test]
    fn missing_program_is_a_spawn_error() {
        let spawner = LiveProcessSpawner;
        let result = spawner.spawn(Path::new("/nonexistent/gsconf"), &[]);
        assert!(result.is_err());
    }

    #[test]
    fn stream_endpoints_are_taken_once() {
        let spawner = LiveProcessSpawner;
        let mut child = spawner.spawn(Path::new("echo"), &args(&["x"])).unwrap();
        assert!(child.take_stdout().is_some());
        assert!(child.take_stdout().is_none());
        child.wait().unwrap();
    }
}
