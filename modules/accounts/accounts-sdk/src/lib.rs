//! Accounts SDK
//!
//! This crate provides the public API for the `accounts` module:
//! - `AccountsApi` trait
//! - Model types for account records
//! - Error type (`AccountsError`)
//!
//! ## Usage
//!
//! ```ignore
//! use accounts_sdk::{AccountsApi, NewAccount};
//!
//! let created = client.create_account(&ctx, NewAccount::with_id("carol")).await?;
//! let mine = client.list_accounts(&ctx).await?;
//! ```

#![forbid(unsafe_code)]
#![deny(rust_2018_idioms)]

pub mod api;
pub mod errors;
pub mod models;

pub use api::AccountsApi;
pub use errors::AccountsError;
pub use models::{Account, AccountData, AccountPatch, CreateOutcome, CreatedAccount, NewAccount};
