use pkg_constants::rbac::{
    KIND_CLUSTER_ROLE, KIND_CLUSTER_ROLE_BINDING, KIND_ROLE, KIND_ROLE_BINDING,
};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

// --- Identity ---

/// A service account an RBAC binding can grant permissions to.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ServiceAccountRef {
    pub name: String,
    pub namespace: String,
}

impl ServiceAccountRef {
    pub fn new(name: impl Into<String>, namespace: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            namespace: namespace.into(),
        }
    }
}

impl std::fmt::Display for ServiceAccountRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.namespace, self.name)
    }
}

// --- Scope ---

/// Whether a binding applies to the release namespace or the whole cluster.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BindingScope {
    Namespaced,
    ClusterWide,
}

impl BindingScope {
    /// Kind of the binding object for this scope.
    pub fn binding_kind(&self) -> &'static str {
        match self {
            BindingScope::Namespaced => KIND_ROLE_BINDING,
            BindingScope::ClusterWide => KIND_CLUSTER_ROLE_BINDING,
        }
    }

    /// Kind of the role the binding refers to.
    pub fn role_kind(&self) -> &'static str {
        match self {
            BindingScope::Namespaced => KIND_ROLE,
            BindingScope::ClusterWide => KIND_CLUSTER_ROLE,
        }
    }
}

impl std::fmt::Display for BindingScope {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BindingScope::Namespaced => write!(f, "Namespaced"),
            BindingScope::ClusterWide => write!(f, "ClusterWide"),
        }
    }
}

// --- Subject ---

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum SubjectKind {
    User,
    ServiceAccount,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Subject {
    pub kind: SubjectKind,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub namespace: Option<String>,
}

impl From<&ServiceAccountRef> for Subject {
    fn from(account: &ServiceAccountRef) -> Self {
        Subject {
            kind: SubjectKind::ServiceAccount,
            name: account.name.clone(),
            namespace: Some(account.namespace.clone()),
        }
    }
}

// --- RoleBinding / ClusterRoleBinding ---

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ObjectMeta {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub namespace: Option<String>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub labels: BTreeMap<String, String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoleRef {
    pub api_group: String,
    pub kind: String,
    pub name: String,
}

/// A `RoleBinding` or `ClusterRoleBinding` manifest; `kind` tells which.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoleBinding {
    pub kind: String,
    pub api_version: String,
    pub metadata: ObjectMeta,
    pub role_ref: RoleRef,
    #[serde(default)]
    pub subjects: Vec<Subject>,
}
