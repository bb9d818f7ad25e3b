//! Scripted adapters serving canned children for tests.

pub mod process;

pub use process::{ChildEvent, EventLog, ScriptedSpawner};
