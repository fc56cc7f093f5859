//! Chart identity and label constants.

/// Chart name, used for fullname derivation and the `chart` label.
pub const CHART_NAME: &str = "airflow";

/// Chart version stamped into the `chart` label.
pub const CHART_VERSION: &str = "1.16.0";

/// Value of the `heritage` label (the release service).
pub const RELEASE_SERVICE: &str = "Helm";

/// Value of the `tier` label.
pub const TIER: &str = "airflow";

/// Executor selected when values don't name one.
pub const DEFAULT_EXECUTOR: &str = "CeleryExecutor";

// ─── Label keys ───────────────────────────────────────────────────────────

pub const LABEL_TIER: &str = "tier";
pub const LABEL_RELEASE: &str = "release";
pub const LABEL_CHART: &str = "chart";
pub const LABEL_HERITAGE: &str = "heritage";
