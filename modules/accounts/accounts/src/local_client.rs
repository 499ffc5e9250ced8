//! In-process implementation of `AccountsApi` backed by the domain service.

use std::sync::Arc;

use accounts_sdk::{
    Account, AccountData, AccountPatch, AccountsApi, AccountsError, CreatedAccount, NewAccount,
};
use async_trait::async_trait;
use modkit_security::{SecurityContext, SecurityContextBuilder};

use crate::domain::service::Service;

/// Local client adapter implementing the SDK API trait.
#[derive(Clone)]
pub struct AccountsLocalClient {
    service: Arc<Service>,
}

impl AccountsLocalClient {
    #[must_use]
    pub fn new(service: Arc<Service>) -> Self {
        Self { service }
    }

    /// See [`Service::security_context_builder`].
    #[must_use]
    pub fn security_context_builder(&self) -> SecurityContextBuilder {
        self.service.security_context_builder()
    }
}

#[async_trait]
impl AccountsApi for AccountsLocalClient {
    async fn list_accounts(&self, ctx: &SecurityContext) -> Result<Vec<Account>, AccountsError> {
        Ok(self.service.list_accounts(ctx).await?)
    }

    async fn get_account(
        &self,
        ctx: &SecurityContext,
        id: &str,
    ) -> Result<Account, AccountsError> {
        Ok(self.service.get_account(ctx, id).await?)
    }

    async fn create_account(
        &self,
        ctx: &SecurityContext,
        new_account: NewAccount,
    ) -> Result<CreatedAccount, AccountsError> {
        Ok(self.service.create_account(ctx, new_account).await?)
    }

    async fn put_account(
        &self,
        ctx: &SecurityContext,
        id: &str,
        data: AccountData,
    ) -> Result<CreatedAccount, AccountsError> {
        Ok(self.service.put_account(ctx, id, data).await?)
    }

    async fn update_account(
        &self,
        ctx: &SecurityContext,
        id: &str,
        patch: AccountPatch,
    ) -> Result<Account, AccountsError> {
        Ok(self.service.update_account(ctx, id, patch).await?)
    }

    async fn delete_account(&self, ctx: &SecurityContext, id: &str) -> Result<(), AccountsError> {
        Ok(self.service.delete_account(ctx, id).await?)
    }
}
