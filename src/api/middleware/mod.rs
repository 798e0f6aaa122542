//! HTTP middleware for request processing and protection.
//!
//! Provides authentication, request deadline and observability middleware.

pub mod auth;
pub mod timeout;
pub mod tracing;
