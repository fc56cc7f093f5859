use anyhow::bail;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing::debug;

// --- Executor name ---

/// A strategy by which scheduled work is dispatched to runners.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ExecutorName {
    LocalExecutor,
    CeleryExecutor,
    KubernetesExecutor,
    LocalKubernetesExecutor,
    CeleryKubernetesExecutor,
}

impl ExecutorName {
    pub const ALL: [ExecutorName; 5] = [
        ExecutorName::LocalExecutor,
        ExecutorName::CeleryExecutor,
        ExecutorName::KubernetesExecutor,
        ExecutorName::LocalKubernetesExecutor,
        ExecutorName::CeleryKubernetesExecutor,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ExecutorName::LocalExecutor => "LocalExecutor",
            ExecutorName::CeleryExecutor => "CeleryExecutor",
            ExecutorName::KubernetesExecutor => "KubernetesExecutor",
            ExecutorName::LocalKubernetesExecutor => "LocalKubernetesExecutor",
            ExecutorName::CeleryKubernetesExecutor => "CeleryKubernetesExecutor",
        }
    }
}

impl std::fmt::Display for ExecutorName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ExecutorName {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match ExecutorName::ALL.iter().find(|e| e.as_str() == s) {
            Some(executor) => Ok(*executor),
            None => bail!("unknown executor '{}'", s),
        }
    }
}

// --- Executor selection ---

/// The executors named by a comma-separated configuration value, in the
/// order they were written. Unknown tokens are kept aside, never rejected.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExecutorSelection {
    executors: Vec<ExecutorName>,
    ignored: Vec<String>,
}

impl ExecutorSelection {
    /// Parse `"CeleryExecutor,KubernetesExecutor"` style values.
    ///
    /// Tokens are trimmed and empty tokens dropped. Duplicates are kept.
    pub fn parse(raw: &str) -> Self {
        let mut selection = ExecutorSelection::default();
        for token in raw.split(',').map(str::trim).filter(|t| !t.is_empty()) {
            match token.parse::<ExecutorName>() {
                Ok(executor) => selection.executors.push(executor),
                Err(_) => {
                    debug!("Ignoring unrecognized executor token '{}'", token);
                    selection.ignored.push(token.to_string());
                }
            }
        }
        selection
    }

    pub fn executors(&self) -> &[ExecutorName] {
        &self.executors
    }

    /// Tokens that named no known executor.
    pub fn ignored(&self) -> &[String] {
        &self.ignored
    }

    pub fn iter(&self) -> impl Iterator<Item = ExecutorName> + '_ {
        self.executors.iter().copied()
    }

    pub fn is_empty(&self) -> bool {
        self.executors.is_empty()
    }
}

impl FromIterator<ExecutorName> for ExecutorSelection {
    fn from_iter<I: IntoIterator<Item = ExecutorName>>(iter: I) -> Self {
        ExecutorSelection {
            executors: iter.into_iter().collect(),
            ignored: Vec::new(),
        }
    }
}

impl std::fmt::Display for ExecutorSelection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let names: Vec<&str> = self.executors.iter().map(ExecutorName::as_str).collect();
        write!(f, "{}", names.join(","))
    }
}
