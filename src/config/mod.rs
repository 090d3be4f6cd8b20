//! Configuration management for Scoper.
//!
//! Default scope and exclusion file paths can come from an optional JSON
//! settings file in the XDG config directory. Flags and environment
//! variables override it.

mod settings;

pub use settings::{Paths, Settings, DEFAULT_EXCLUDE_FILE, DEFAULT_SCOPE_FILE};
