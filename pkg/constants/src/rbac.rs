//! RBAC object constants.

/// API group of every RBAC object.
pub const RBAC_API_GROUP: &str = "rbac.authorization.k8s.io";

/// `apiVersion` written on rendered bindings.
pub const RBAC_API_VERSION: &str = "rbac.authorization.k8s.io/v1";

pub const KIND_ROLE_BINDING: &str = "RoleBinding";
pub const KIND_CLUSTER_ROLE_BINDING: &str = "ClusterRoleBinding";
pub const KIND_ROLE: &str = "Role";
pub const KIND_CLUSTER_ROLE: &str = "ClusterRole";
pub const KIND_SERVICE_ACCOUNT: &str = "ServiceAccount";

/// Suffix appended to the release fullname for the pod-launcher role.
pub const POD_LAUNCHER_ROLE_SUFFIX: &str = "pod-launcher-role";

/// Suffix appended to the release fullname for the pod-launcher binding.
pub const POD_LAUNCHER_BINDING_SUFFIX: &str = "pod-launcher-rolebinding";

// ─── Service account suffixes ─────────────────────────────────────────────

pub const SCHEDULER_ACCOUNT_SUFFIX: &str = "scheduler";
pub const WORKER_ACCOUNT_SUFFIX: &str = "worker";
pub const CELERY_WORKER_ACCOUNT_SUFFIX: &str = "worker-celery";
pub const KUBERNETES_WORKER_ACCOUNT_SUFFIX: &str = "worker-kubernetes";

/// DNS-1123 labels (namespaces, release names, chart fullnames) are capped at this length.
pub const MAX_NAME_LEN: usize = 63;

/// Object names (DNS-1123 subdomains) are capped at this length.
pub const MAX_SUBDOMAIN_LEN: usize = 253;
