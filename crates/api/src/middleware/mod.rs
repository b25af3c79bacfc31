//! Request middleware: authentication and role-based access control
//! extractors.

pub mod auth;
pub mod rbac;
