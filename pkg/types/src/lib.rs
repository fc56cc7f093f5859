//! Shared data model: executor selection, RBAC binding objects and chart values.

pub mod config;
pub mod executor;
pub mod rbac;
pub mod validate;
