//! Adapter implementations of the process port.
//!
//! `live` spawns real children; `scripted` serves canned children and records
//! every interaction for assertions in tests.

pub mod live;
pub mod scripted;
