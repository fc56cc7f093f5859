use pkg_constants::chart::CHART_NAME;
use pkg_constants::rbac::{
    CELERY_WORKER_ACCOUNT_SUFFIX, KUBERNETES_WORKER_ACCOUNT_SUFFIX, MAX_NAME_LEN,
    SCHEDULER_ACCOUNT_SUFFIX, WORKER_ACCOUNT_SUFFIX,
};
use pkg_types::config::ChartValues;
use pkg_types::rbac::ServiceAccountRef;

/// The kinds of identity a pod-launcher binding can name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IdentityKind {
    Scheduler,
    /// Single account shared by all worker types.
    Worker,
    CeleryWorker,
    KubernetesWorker,
}

impl std::fmt::Display for IdentityKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IdentityKind::Scheduler => write!(f, "scheduler"),
            IdentityKind::Worker => write!(f, "worker"),
            IdentityKind::CeleryWorker => write!(f, "celery-worker"),
            IdentityKind::KubernetesWorker => write!(f, "kubernetes-worker"),
        }
    }
}

/// Resolved service account for every identity kind of one release.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdentityNames {
    pub scheduler: ServiceAccountRef,
    pub worker: ServiceAccountRef,
    pub celery_worker: ServiceAccountRef,
    pub kubernetes_worker: ServiceAccountRef,
}

impl IdentityNames {
    pub fn get(&self, kind: IdentityKind) -> &ServiceAccountRef {
        match kind {
            IdentityKind::Scheduler => &self.scheduler,
            IdentityKind::Worker => &self.worker,
            IdentityKind::CeleryWorker => &self.celery_worker,
            IdentityKind::KubernetesWorker => &self.kubernetes_worker,
        }
    }
}

/// Release/deployment context the canonical names are derived from.
#[derive(Debug, Clone, Default)]
pub struct ReleaseContext {
    pub release_name: String,
    pub namespace: String,
    pub fullname_override: Option<String>,
    pub name_override: Option<String>,
    pub scheduler_account: Option<String>,
    pub worker_account: Option<String>,
    pub celery_worker_account: Option<String>,
    pub kubernetes_worker_account: Option<String>,
}

impl ReleaseContext {
    pub fn new(release_name: impl Into<String>, namespace: impl Into<String>) -> Self {
        Self {
            release_name: release_name.into(),
            namespace: namespace.into(),
            ..Default::default()
        }
    }

    /// Build a context from a release plus the naming overrides in `values`.
    pub fn from_values(
        release_name: impl Into<String>,
        namespace: impl Into<String>,
        values: &ChartValues,
    ) -> Self {
        Self {
            release_name: release_name.into(),
            namespace: namespace.into(),
            fullname_override: values.fullname_override.clone(),
            name_override: values.name_override.clone(),
            scheduler_account: values.scheduler.service_account.name.clone(),
            worker_account: values.workers.service_account.name.clone(),
            celery_worker_account: values.workers.celery.service_account.name.clone(),
            kubernetes_worker_account: values.workers.kubernetes.service_account.name.clone(),
        }
    }

    /// Chart name, honouring `nameOverride`.
    pub fn chart_name(&self) -> &str {
        non_empty(&self.name_override).unwrap_or(CHART_NAME)
    }

    /// Fully qualified release name every object name is prefixed with.
    ///
    /// A release whose name already contains the chart name is used as-is,
    /// so `airflow` or `prod-airflow` do not become `prod-airflow-airflow`.
    pub fn fullname(&self) -> String {
        let full = match non_empty(&self.fullname_override) {
            Some(name) => name.to_string(),
            None => {
                let chart = self.chart_name();
                if self.release_name.contains(chart) {
                    self.release_name.clone()
                } else {
                    format!("{}-{}", self.release_name, chart)
                }
            }
        };
        truncate_name(&full)
    }

    fn account(&self, explicit: &Option<String>, suffix: &str) -> ServiceAccountRef {
        let name = match non_empty(explicit) {
            Some(name) => name.to_string(),
            None => format!("{}-{}", self.fullname(), suffix),
        };
        ServiceAccountRef::new(name, self.namespace.clone())
    }

    pub fn identity_names(&self) -> IdentityNames {
        IdentityNames {
            scheduler: self.account(&self.scheduler_account, SCHEDULER_ACCOUNT_SUFFIX),
            worker: self.account(&self.worker_account, WORKER_ACCOUNT_SUFFIX),
            celery_worker: self.account(&self.celery_worker_account, CELERY_WORKER_ACCOUNT_SUFFIX),
            kubernetes_worker: self.account(
                &self.kubernetes_worker_account,
                KUBERNETES_WORKER_ACCOUNT_SUFFIX,
            ),
        }
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

/// Cut to the label length limit and drop any trailing hyphens left behind.
fn truncate_name(name: &str) -> String {
    let cut = match name.char_indices().nth(MAX_NAME_LEN) {
        Some((idx, _)) => &name[..idx],
        None => name,
    };
    cut.trim_end_matches('-').to_string()
}
