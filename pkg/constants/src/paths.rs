//! Filesystem path constants.

/// Default chart values file read by the CLI.
pub const DEFAULT_VALUES_FILE: &str = "values.yaml";
