//! Pod-launcher RBAC: which service accounts may launch pods, and the
//! RoleBinding / ClusterRoleBinding that grants it.
//!
//! [`resolver`] is the pure core. [`naming`] supplies the identity names it
//! needs and [`manifest`] turns its output into a binding object.

pub mod manifest;
pub mod naming;
pub mod policy;
pub mod resolver;

pub use manifest::{ResolvedBinding, build_binding, render_json, render_yaml, resolve_binding};
pub use naming::{IdentityKind, IdentityNames, ReleaseContext};
pub use resolver::{binding_scope, resolve, resolve_kinds};
