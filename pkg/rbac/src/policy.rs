//! Which executors need which identity to be able to launch pods.

use pkg_types::executor::ExecutorName;

/// Executors whose scheduler launches pods itself.
pub const SCHEDULER_TRIGGERING: &[ExecutorName] = &[
    ExecutorName::LocalExecutor,
    ExecutorName::LocalKubernetesExecutor,
    ExecutorName::KubernetesExecutor,
];

/// Executors whose workers launch pods.
pub const WORKER_TRIGGERING: &[ExecutorName] = &[
    ExecutorName::CeleryExecutor,
    ExecutorName::CeleryKubernetesExecutor,
    ExecutorName::LocalKubernetesExecutor,
    ExecutorName::KubernetesExecutor,
];

pub fn triggers_scheduler(executor: ExecutorName) -> bool {
    SCHEDULER_TRIGGERING.contains(&executor)
}

pub fn triggers_worker(executor: ExecutorName) -> bool {
    WORKER_TRIGGERING.contains(&executor)
}
