//! `AccountsApi` trait definition.

use async_trait::async_trait;
use modkit_security::SecurityContext;

use crate::errors::AccountsError;
use crate::models::{Account, AccountData, AccountPatch, CreatedAccount, NewAccount};

/// Public API trait for the `accounts` module.
///
/// Every method takes the request's `SecurityContext`. Which records a call
/// may touch is decided inside the module: administrators reach every account,
/// authenticated users only their own, anonymous callers may only
/// self-register.
#[async_trait]
pub trait AccountsApi: Send + Sync {
    /// List the accounts visible to the caller.
    async fn list_accounts(&self, ctx: &SecurityContext) -> Result<Vec<Account>, AccountsError>;

    /// Get one account by id.
    async fn get_account(&self, ctx: &SecurityContext, id: &str)
    -> Result<Account, AccountsError>;

    /// Create an account through the collection (id taken from the payload).
    async fn create_account(
        &self,
        ctx: &SecurityContext,
        new_account: NewAccount,
    ) -> Result<CreatedAccount, AccountsError>;

    /// Create an account at a given id, or replace its data if it exists.
    async fn put_account(
        &self,
        ctx: &SecurityContext,
        id: &str,
        data: AccountData,
    ) -> Result<CreatedAccount, AccountsError>;

    /// Merge fields into an existing account.
    async fn update_account(
        &self,
        ctx: &SecurityContext,
        id: &str,
        patch: AccountPatch,
    ) -> Result<Account, AccountsError>;

    /// Delete an account by id.
    async fn delete_account(&self, ctx: &SecurityContext, id: &str) -> Result<(), AccountsError>;
}
