//! Authorization
//!
//! This module provides role resolution and permission gating.

pub mod rbac;
