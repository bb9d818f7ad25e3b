//! Layered settings for locating and driving the executable.
//!
//! Precedence, lowest to highest: built-in defaults, YAML settings file,
//! environment variables, CLI flags. The passphrase is intentionally not a
//! CLI flag: arguments show up in process listings, which is exactly what
//! stdin delivery avoids. It is read from `GSBATCH_PASSPHRASE` only (a local
//! `.env` file works through `dotenvy`).

use std::env;
use std::path::{Path, PathBuf};

use serde::Deserialize;

/// Executable used when nothing else is configured.
const DEFAULT_EXECUTABLE: &str = "./gsconf";
/// Settings file consulted when no explicit path is given.
const DEFAULT_SETTINGS_FILE: &str = ".gsbatch.yml";

/// Resolved settings for one invocation.
#[derive(Debug, Clone)]
pub struct Settings {
    /// Path of the executable to spawn.
    pub executable: PathBuf,
    /// Whether the child keeps colored output enabled.
    pub colors: bool,
    /// Secret to deliver over the child's stdin, if any.
    pub passphrase: Option<String>,
}

impl Settings {
    /// Loads settings from file, environment, and CLI overrides.
    ///
    /// An explicitly named settings file must exist; the default
    /// `.gsbatch.yml` is skipped silently when absent.
    ///
    /// # Errors
    ///
    /// Returns an error string if the settings file cannot be read or parsed.
    pub fn load(overrides: &Overrides) -> Result<Self, String> {
        let file = load_file(overrides.settings_path)?;
        Ok(merge(overrides, EnvValues::capture(), file))
    }

    /// True when a non-empty passphrase will be written to the child.
    #[must_use]
    pub fn passphrase_present(&self) -> bool {
        self.passphrase.as_deref().is_some_and(|s| !s.is_empty())
    }
}

/// CLI-level overrides applied on top of file and environment values.
#[derive(Debug, Default)]
pub struct Overrides<'a> {
    /// Executable path from the command line.
    pub executable: Option<&'a Path>,
    /// Colors flag from the command line; `None` defers to env and file.
    pub colors: Option<bool>,
    /// Explicit settings file path from the command line.
    pub settings_path: Option<&'a Path>,
}

/// File-backed settings.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct SettingsFile {
    executable: Option<PathBuf>,
    colors: Option<bool>,
}

/// Environment-backed settings.
#[derive(Debug, Default)]
struct EnvValues {
    executable: Option<PathBuf>,
    colors: Option<bool>,
    passphrase: Option<String>,
}

impl EnvValues {
    fn capture() -> Self {
        Self {
            executable: env::var("GSBATCH_EXECUTABLE").ok().map(PathBuf::from),
            colors: env::var("GSBATCH_COLORS").ok().map(|v| parse_bool(&v)),
            passphrase: env::var("GSBATCH_PASSPHRASE").ok().filter(|s| !s.is_empty()),
        }
    }
}

fn parse_bool(value: &str) -> bool {
    matches!(value.trim().to_ascii_lowercase().as_str(), "1" | "true" | "yes" | "on")
}

fn merge(overrides: &Overrides, env_values: EnvValues, file: SettingsFile) -> Settings {
    let executable = overrides
        .executable
        .map(Path::to_path_buf)
        .or(env_values.executable)
        .or(file.executable)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_EXECUTABLE));
    let colors = overrides
        .colors
        .or(env_values.colors)
        .or(file.colors)
        .unwrap_or(false);
    Settings { executable, colors, passphrase: env_values.passphrase }
}

fn load_file(explicit: Option<&Path>) -> Result<SettingsFile, String> {
    let env_path = env::var("GSBATCH_SETTINGS").ok().map(PathBuf::from);
    let (path, required) = match explicit {
        Some(p) => (p.to_path_buf(), true),
        None => match env_path {
            Some(p) => (p, true),
            None => (PathBuf::from(DEFAULT_SETTINGS_FILE), false),
        },
    };

    let contents = match std::fs::read_to_string(&path) {
        Ok(contents) => contents,
        Err(_) if !required => return Ok(SettingsFile::default()),
        Err(e) => return Err(format!("Failed to read settings file {}: {e}", path.display())),
    };
    serde_yaml::from_str(&contents)
        .map_err(|e| format!("Failed to parse settings file {}: {e}", path.display()))
}
