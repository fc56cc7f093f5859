//! Subject resolution: executor selection in, pod-launcher subjects out.
//!
//! Pure and total. Unknown executors were already set aside by
//! [`ExecutorSelection::parse`] and simply never match a policy table.

use pkg_types::executor::ExecutorSelection;
use pkg_types::rbac::{BindingScope, ServiceAccountRef};
use tracing::debug;

use crate::naming::{IdentityKind, IdentityNames};
use crate::policy::{triggers_scheduler, triggers_worker};

/// Identity kinds that need the pod-launcher role, scheduler first.
///
/// Each table is scanned only until its first match, so any number of
/// triggering executors adds at most one scheduler and one worker group.
pub fn resolve_kinds(
    selection: &ExecutorSelection,
    dedicated_worker_accounts: bool,
) -> Vec<IdentityKind> {
    let mut kinds = Vec::with_capacity(3);

    if let Some(executor) = selection.iter().find(|e| triggers_scheduler(*e)) {
        debug!("{} requires the scheduler to launch pods", executor);
        kinds.push(IdentityKind::Scheduler);
    }

    if let Some(executor) = selection.iter().find(|e| triggers_worker(*e)) {
        debug!("{} requires workers to launch pods", executor);
        if dedicated_worker_accounts {
            kinds.push(IdentityKind::CeleryWorker);
            kinds.push(IdentityKind::KubernetesWorker);
        } else {
            kinds.push(IdentityKind::Worker);
        }
    }

    kinds
}

/// Service accounts to bind, in `[scheduler] [worker(s)]` order.
pub fn resolve(
    selection: &ExecutorSelection,
    dedicated_worker_accounts: bool,
    names: &IdentityNames,
) -> Vec<ServiceAccountRef> {
    resolve_kinds(selection, dedicated_worker_accounts)
        .into_iter()
        .map(|kind| names.get(kind).clone())
        .collect()
}

pub fn binding_scope(multi_namespace_mode: bool) -> BindingScope {
    if multi_namespace_mode {
        BindingScope::ClusterWide
    } else {
        BindingScope::Namespaced
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::naming::ReleaseContext;
    use pkg_types::executor::ExecutorName;

    fn names() -> IdentityNames {
        ReleaseContext::new("prod", "data").identity_names()
    }

    fn kinds(raw: &str, dedicated: bool) -> Vec<IdentityKind> {
        resolve_kinds(&ExecutorSelection::parse(raw), dedicated)
    }

    fn count(kinds: &[IdentityKind], kind: IdentityKind) -> usize {
        kinds.iter().filter(|k| **k == kind).count()
    }

    #[test]
    fn empty_selection_resolves_to_nothing() {
        let selection = ExecutorSelection::default();
        assert!(resolve(&selection, false, &names()).is_empty());
        assert!(resolve(&selection, true, &names()).is_empty());
    }

    #[test]
    fn local_executor_binds_scheduler() {
        let names = names();
        let subjects = resolve(&ExecutorSelection::parse("LocalExecutor"), false, &names);
        assert_eq!(subjects, vec![names.scheduler.clone()]);
    }

    #[test]
    fn celery_executor_binds_shared_worker() {
        let names = names();
        let subjects = resolve(&ExecutorSelection::parse("CeleryExecutor"), false, &names);
        assert_eq!(subjects, vec![names.worker.clone()]);
    }

    #[test]
    fn celery_kubernetes_executor_binds_dedicated_workers() {
        let names = names();
        let subjects = resolve(
            &ExecutorSelection::parse("CeleryKubernetesExecutor"),
            true,
            &names,
        );
        assert_eq!(
            subjects,
            vec![names.celery_worker.clone(), names.kubernetes_worker.clone()]
        );
    }

    #[test]
    fn local_kubernetes_executor_triggers_both_tables() {
        let names = names();
        let subjects = resolve(
            &ExecutorSelection::parse("LocalKubernetesExecutor"),
            true,
            &names,
        );
        assert_eq!(
            subjects,
            vec![
                names.scheduler.clone(),
                names.celery_worker.clone(),
                names.kubernetes_worker.clone(),
            ]
        );
    }

    #[test]
    fn repeated_triggers_do_not_accumulate() {
        let all = "LocalExecutor,KubernetesExecutor,LocalKubernetesExecutor,CeleryExecutor,\
                   CeleryKubernetesExecutor,KubernetesExecutor";
        assert_eq!(
            kinds(all, false),
            vec![IdentityKind::Scheduler, IdentityKind::Worker]
        );
        assert_eq!(
            kinds(all, true),
            vec![
                IdentityKind::Scheduler,
                IdentityKind::CeleryWorker,
                IdentityKind::KubernetesWorker,
            ]
        );
    }

    #[test]
    fn output_order_is_fixed_regardless_of_input_order() {
        assert_eq!(
            kinds("CeleryExecutor,LocalExecutor", false),
            vec![IdentityKind::Scheduler, IdentityKind::Worker]
        );
        assert_eq!(
            kinds("LocalExecutor,CeleryExecutor", false),
            vec![IdentityKind::Scheduler, IdentityKind::Worker]
        );
    }

    #[test]
    fn unknown_tokens_are_ignored() {
        assert!(kinds("SequentialExecutor,bogus", false).is_empty());
        assert_eq!(
            kinds("bogus,CeleryExecutor", false),
            vec![IdentityKind::Worker]
        );
    }

    #[test]
    fn scheduler_count_follows_scheduler_table() {
        let selections: &[&[ExecutorName]] = &[
            &[ExecutorName::LocalExecutor],
            &[ExecutorName::KubernetesExecutor, ExecutorName::LocalExecutor],
            &[ExecutorName::CeleryExecutor],
            &[ExecutorName::CeleryKubernetesExecutor, ExecutorName::CeleryExecutor],
            &[
                ExecutorName::LocalKubernetesExecutor,
                ExecutorName::LocalKubernetesExecutor,
                ExecutorName::KubernetesExecutor,
            ],
        ];
        for executors in selections {
            let selection: ExecutorSelection = executors.iter().copied().collect();
            let expected = usize::from(executors.iter().any(|e| triggers_scheduler(*e)));
            for dedicated in [false, true] {
                let kinds = resolve_kinds(&selection, dedicated);
                assert_eq!(count(&kinds, IdentityKind::Scheduler), expected, "{selection}");
            }
        }
    }

    #[test]
    fn worker_count_follows_dedicated_flag() {
        for executor in ExecutorName::ALL {
            let selection: ExecutorSelection = [executor, executor].into_iter().collect();
            let shared = resolve_kinds(&selection, false);
            let dedicated = resolve_kinds(&selection, true);
            if triggers_worker(executor) {
                assert_eq!(count(&shared, IdentityKind::Worker), 1);
                assert_eq!(count(&dedicated, IdentityKind::CeleryWorker), 1);
                assert_eq!(count(&dedicated, IdentityKind::KubernetesWorker), 1);
                assert_eq!(count(&dedicated, IdentityKind::Worker), 0);
            } else {
                assert!(!shared.iter().any(|k| *k != IdentityKind::Scheduler));
                assert!(!dedicated.iter().any(|k| *k != IdentityKind::Scheduler));
            }
        }
    }

    #[test]
    fn subjects_carry_release_namespace() {
        let subjects = resolve(
            &ExecutorSelection::parse("LocalKubernetesExecutor"),
            false,
            &names(),
        );
        assert!(subjects.iter().all(|s| s.namespace == "data"));
    }

    #[test]
    fn scope_follows_multi_namespace_mode() {
        assert_eq!(binding_scope(true), BindingScope::ClusterWide);
        assert_eq!(binding_scope(false), BindingScope::Namespaced);
    }
}
