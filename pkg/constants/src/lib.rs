//! Centralized constants for launchrbac.
//!
//! Every fixed string that ends up in a rendered binding lives here.

pub mod chart;
pub mod paths;
pub mod rbac;
