use anyhow::Context;
use pkg_constants::chart::DEFAULT_EXECUTOR;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// The slice of chart values that decides the pod-launcher binding.
///
/// Keys follow the chart's camelCase spelling; anything else in the file
/// is ignored. Example `values.yaml`:
/// ```yaml
/// executor: CeleryExecutor,KubernetesExecutor
/// multiNamespaceMode: false
/// allowPodLaunching: true
/// rbac:
///   create: true
/// workers:
///   useWorkerDedicatedServiceAccounts: true
/// labels:
///   team: data
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ChartValues {
    pub executor: String,
    pub multi_namespace_mode: bool,
    pub allow_pod_launching: bool,
    pub rbac: RbacValues,
    pub scheduler: SchedulerValues,
    pub workers: WorkerValues,
    pub fullname_override: Option<String>,
    pub name_override: Option<String>,
    pub labels: BTreeMap<String, String>,
}

impl Default for ChartValues {
    fn default() -> Self {
        Self {
            executor: DEFAULT_EXECUTOR.to_string(),
            multi_namespace_mode: false,
            allow_pod_launching: true,
            rbac: RbacValues::default(),
            scheduler: SchedulerValues::default(),
            workers: WorkerValues::default(),
            fullname_override: None,
            name_override: None,
            labels: BTreeMap::new(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RbacValues {
    pub create: bool,
}

impl Default for RbacValues {
    fn default() -> Self {
        Self { create: true }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ServiceAccountValues {
    pub name: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SchedulerValues {
    pub service_account: ServiceAccountValues,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct WorkerValues {
    pub use_worker_dedicated_service_accounts: bool,
    pub service_account: ServiceAccountValues,
    pub celery: WorkerFlavorValues,
    pub kubernetes: WorkerFlavorValues,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct WorkerFlavorValues {
    pub service_account: ServiceAccountValues,
}

/// Load a YAML values file, returning the default if the file doesn't exist.
pub fn load_config_file<T: serde::de::DeserializeOwned + Default>(path: &str) -> anyhow::Result<T> {
    let content = match std::fs::read_to_string(path) {
        Ok(c) => c,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            return Ok(T::default());
        }
        Err(e) => return Err(e).with_context(|| format!("failed to read {}", path)),
    };
    // An empty values file is valid and means "all defaults".
    if content.trim().is_empty() {
        return Ok(T::default());
    }
    let config: T =
        serde_yaml::from_str(&content).with_context(|| format!("failed to parse {}", path))?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn temp_values(name: &str, content: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!(
            "launchrbac-{}-{}.yaml",
            name,
            std::process::id()
        ));
        std::fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn defaults() {
        let values = ChartValues::default();
        assert_eq!(values.executor, "CeleryExecutor");
        assert!(values.allow_pod_launching);
        assert!(values.rbac.create);
        assert!(!values.multi_namespace_mode);
        assert!(!values.workers.use_worker_dedicated_service_accounts);
    }

    #[test]
    fn missing_file_yields_defaults() {
        let values: ChartValues =
            load_config_file("/nonexistent/launchrbac/values.yaml").unwrap();
        assert_eq!(values.executor, "CeleryExecutor");
    }

    #[test]
    fn empty_file_yields_defaults() {
        let path = temp_values("empty", "");
        let values: ChartValues = load_config_file(path.to_str().unwrap()).unwrap();
        assert!(values.rbac.create);
        std::fs::remove_file(path).ok();
    }

    #[test]
    fn parses_nested_values_and_ignores_unknown_keys() {
        let path = temp_values(
            "nested",
            r#"
executor: "LocalExecutor,KubernetesExecutor"
multiNamespaceMode: true
allowPodLaunching: true
rbac:
  create: false
scheduler:
  serviceAccount:
    name: sched-sa
workers:
  useWorkerDedicatedServiceAccounts: true
  replicas: 3
  celery:
    serviceAccount:
      name: celery-sa
fullnameOverride: pipelines
labels:
  team: data
images:
  airflow:
    tag: "2.10.0"
"#,
        );
        let values: ChartValues = load_config_file(path.to_str().unwrap()).unwrap();
        assert_eq!(values.executor, "LocalExecutor,KubernetesExecutor");
        assert!(values.multi_namespace_mode);
        assert!(!values.rbac.create);
        assert_eq!(values.scheduler.service_account.name.as_deref(), Some("sched-sa"));
        assert!(values.workers.use_worker_dedicated_service_accounts);
        assert_eq!(
            values.workers.celery.service_account.name.as_deref(),
            Some("celery-sa")
        );
        assert!(values.workers.kubernetes.service_account.name.is_none());
        assert_eq!(values.fullname_override.as_deref(), Some("pipelines"));
        assert_eq!(values.labels.get("team").map(String::as_str), Some("data"));
        std::fs::remove_file(path).ok();
    }

    #[test]
    fn malformed_file_is_an_error() {
        let path = temp_values("malformed", "executor: [unterminated");
        let result: anyhow::Result<ChartValues> = load_config_file(path.to_str().unwrap());
        assert!(result.is_err());
        std::fs::remove_file(path).ok();
    }
}
