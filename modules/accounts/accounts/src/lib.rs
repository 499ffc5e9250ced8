//! Accounts module.
//!
//! - [`domain::ownership`]: pure ownership and scoping decisions
//! - [`domain::service::Service`]: resource handler applying those decisions to storage
//! - [`infra::storage::InMemoryAccountsRepository`]: linearizable in-memory storage
//! - [`local_client::AccountsLocalClient`]: `AccountsApi` implementation for in-process consumers
//! - [`api::error`]: mapping of domain errors to RFC 9457 problems

pub mod api;
pub mod config;
pub mod domain;
pub mod errors;
pub mod infra;
pub mod local_client;

pub use config::{AccountsConfig, ConfigError, ConfigProvider};
pub use domain::service::{Service, ServiceConfig};
pub use infra::storage::InMemoryAccountsRepository;
pub use local_client::AccountsLocalClient;

/// Module name used to look up configuration.
pub const MODULE_NAME: &str = "accounts";
