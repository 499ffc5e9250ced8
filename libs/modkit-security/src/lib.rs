#![cfg_attr(coverage_nightly, feature(coverage_attribute))]
//! Caller identity and access scoping primitives shared by account-scoped modules.
//!
//! - [`SecurityContext`]: authentication state (selected user id, effective principals)
//! - [`CallerContext`]: immutable per-request caller view consumed by ownership decisions
//! - [`ScopeSelector`]: which records of a collection an operation may touch

pub mod access_scope;
pub mod caller_ctx;
pub mod constants;
pub mod context;
pub mod principal;

pub use access_scope::ScopeSelector;
pub use caller_ctx::{CallerContext, CallerContextBuilder, Target};
pub use context::{SecurityContext, SecurityContextBuilder};
pub use principal::Principal;
