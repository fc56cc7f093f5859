use anyhow::{Context, Result};
use pkg_constants::chart::{
    CHART_NAME, CHART_VERSION, LABEL_CHART, LABEL_HERITAGE, LABEL_RELEASE, LABEL_TIER,
    RELEASE_SERVICE, TIER,
};
use pkg_constants::rbac::{
    POD_LAUNCHER_BINDING_SUFFIX, POD_LAUNCHER_ROLE_SUFFIX, RBAC_API_GROUP, RBAC_API_VERSION,
};
use pkg_types::config::ChartValues;
use pkg_types::executor::ExecutorSelection;
use pkg_types::rbac::{
    BindingScope, ObjectMeta, RoleBinding, RoleRef, ServiceAccountRef, Subject,
};
use pkg_types::validate::{validate_label, validate_object_name};
use std::collections::BTreeMap;
use tracing::{info, warn};

use crate::naming::ReleaseContext;
use crate::resolver::{binding_scope, resolve};

/// Everything a pod-launcher binding is made of, before it becomes a manifest.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedBinding {
    pub scope: BindingScope,
    pub binding_name: String,
    pub role_name: String,
    pub accounts: Vec<ServiceAccountRef>,
}

/// Resolve scope, object names and subjects for a release, validated.
///
/// Returns `Ok(None)` when RBAC creation or pod launching is switched off.
pub fn resolve_binding(
    values: &ChartValues,
    ctx: &ReleaseContext,
) -> Result<Option<ResolvedBinding>> {
    if !(values.rbac.create && values.allow_pod_launching) {
        info!(
            "Pod-launcher binding disabled (rbac.create={}, allowPodLaunching={})",
            values.rbac.create, values.allow_pod_launching
        );
        return Ok(None);
    }

    validate_label("release name", &ctx.release_name)?;
    validate_label("namespace", &ctx.namespace)?;

    let selection = ExecutorSelection::parse(&values.executor);
    for token in selection.ignored() {
        warn!("Unrecognized executor '{}' grants no pod-launcher subjects", token);
    }

    let scope = binding_scope(values.multi_namespace_mode);
    let accounts = resolve(
        &selection,
        values.workers.use_worker_dedicated_service_accounts,
        &ctx.identity_names(),
    );
    for account in &accounts {
        validate_object_name(&account.name)
            .with_context(|| format!("invalid service account name for {}", account))?;
    }

    let (binding_name, role_name) = object_names(ctx, scope);
    validate_object_name(&binding_name)?;
    validate_object_name(&role_name)?;

    Ok(Some(ResolvedBinding {
        scope,
        binding_name,
        role_name,
        accounts,
    }))
}

/// Build the pod-launcher binding for a release.
///
/// Returns `Ok(None)` when RBAC creation or pod launching is switched off.
pub fn build_binding(values: &ChartValues, ctx: &ReleaseContext) -> Result<Option<RoleBinding>> {
    let Some(resolved) = resolve_binding(values, ctx)? else {
        return Ok(None);
    };
    let ResolvedBinding {
        scope,
        binding_name,
        role_name,
        accounts,
    } = resolved;

    info!(
        "Rendering {} {} with {} subject(s)",
        scope.binding_kind(),
        binding_name,
        accounts.len()
    );

    Ok(Some(RoleBinding {
        kind: scope.binding_kind().to_string(),
        api_version: RBAC_API_VERSION.to_string(),
        metadata: ObjectMeta {
            name: binding_name,
            namespace: match scope {
                BindingScope::Namespaced => Some(ctx.namespace.clone()),
                BindingScope::ClusterWide => None,
            },
            labels: labels(values, ctx),
        },
        role_ref: RoleRef {
            api_group: RBAC_API_GROUP.to_string(),
            kind: scope.role_kind().to_string(),
            name: role_name,
        },
        subjects: accounts.iter().map(Subject::from).collect(),
    }))
}

/// `(binding name, role name)`. Cluster-wide objects are shared by every
/// release namespace, so their names carry the namespace as a prefix.
fn object_names(ctx: &ReleaseContext, scope: BindingScope) -> (String, String) {
    let prefix = match scope {
        BindingScope::Namespaced => ctx.fullname(),
        BindingScope::ClusterWide => format!("{}-{}", ctx.namespace, ctx.fullname()),
    };
    (
        format!("{}-{}", prefix, POD_LAUNCHER_BINDING_SUFFIX),
        format!("{}-{}", prefix, POD_LAUNCHER_ROLE_SUFFIX),
    )
}

/// Standard chart labels with user labels merged on top.
fn labels(values: &ChartValues, ctx: &ReleaseContext) -> BTreeMap<String, String> {
    let mut labels = BTreeMap::from([
        (LABEL_TIER.to_string(), TIER.to_string()),
        (LABEL_RELEASE.to_string(), ctx.release_name.clone()),
        (
            LABEL_CHART.to_string(),
            format!("{}-{}", CHART_NAME, CHART_VERSION),
        ),
        (LABEL_HERITAGE.to_string(), RELEASE_SERVICE.to_string()),
    ]);
    labels.extend(values.labels.clone());
    labels
}

/// Serialize a binding as a YAML document.
pub fn render_yaml(binding: &RoleBinding) -> Result<String> {
    serde_yaml::to_string(binding).context("failed to serialize binding as YAML")
}

/// Serialize a binding as pretty-printed JSON.
pub fn render_json(binding: &RoleBinding) -> Result<String> {
    serde_json::to_string_pretty(binding).context("failed to serialize binding as JSON")
}
