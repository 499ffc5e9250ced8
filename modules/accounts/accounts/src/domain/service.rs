use std::sync::Arc;

use accounts_sdk::{
    Account, AccountData, AccountPatch, CreateOutcome, CreatedAccount, NewAccount,
};
use modkit_security::constants::DEFAULT_ACCOUNT_PREFIX;
use modkit_security::{
    CallerContext, Principal, ScopeSelector, SecurityContext, SecurityContextBuilder, Target,
};
use time::OffsetDateTime;
use tracing::{debug, info, instrument, warn};
use uuid::Uuid;

use crate::domain::error::DomainError;
use crate::domain::ownership::{
    enforce_creation_uniqueness, enforce_identifier_match, finalize_owner_on_create,
    may_access_existing, resolve_scope,
};
use crate::domain::repo::AccountsRepository;

/// Resource handler for the account collection.
///
/// Builds a `CallerContext` per call, asks the ownership resolver for a scope,
/// and only then talks to the repository.
#[derive(Clone)]
pub struct Service {
    repo: Arc<dyn AccountsRepository>,
    config: ServiceConfig,
}

/// Configuration for the domain service
#[derive(Debug, Clone)]
pub struct ServiceConfig {
    pub principal_prefix: String,
    pub write_grantees: Vec<Principal>,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            principal_prefix: DEFAULT_ACCOUNT_PREFIX.to_owned(),
            write_grantees: Vec::new(),
        }
    }
}

fn db_error(e: &anyhow::Error) -> DomainError {
    DomainError::database(e.to_string())
}

fn require_account_id(id: &str) -> Result<(), DomainError> {
    if id.trim().is_empty() {
        return Err(DomainError::validation("data.id", "account id must not be empty"));
    }
    Ok(())
}

impl Service {
    #[must_use]
    pub fn new(repo: Arc<dyn AccountsRepository>, config: ServiceConfig) -> Self {
        Self { repo, config }
    }

    /// `SecurityContext` builder in this collection's principal namespace.
    ///
    /// Authentication layers should start from it so that user principals,
    /// record owners and `write_grantees` all use the configured prefix.
    #[must_use]
    pub fn security_context_builder(&self) -> SecurityContextBuilder {
        SecurityContext::builder().principal_prefix(&self.config.principal_prefix)
    }

    fn caller(&self, security: &SecurityContext, target: Target) -> CallerContext {
        CallerContext::from_security(security, &self.config.write_grantees, target)
    }

    /// List the accounts the caller's scope matches.
    ///
    /// # Errors
    /// Returns `DomainError::Database` if storage fails.
    #[instrument(skip(self, security))]
    pub async fn list_accounts(
        &self,
        security: &SecurityContext,
    ) -> Result<Vec<Account>, DomainError> {
        let ctx = self.caller(security, Target::collection(None));
        let scope = resolve_scope(&ctx);
        if scope.is_empty() {
            return Ok(Vec::new());
        }

        let accounts = self.repo.list(&scope).await.map_err(|e| db_error(&e))?;
        debug!(count = accounts.len(), "listed accounts");
        Ok(accounts)
    }

    /// # Errors
    /// Returns `DomainError::NotFound` when the record is missing or outside
    /// the caller's scope, `DomainError::Database` if storage fails.
    #[instrument(skip(self, security), fields(account_id = %id))]
    pub async fn get_account(
        &self,
        security: &SecurityContext,
        id: &str,
    ) -> Result<Account, DomainError> {
        let ctx = self.caller(security, Target::record(id));
        if !may_access_existing(&ctx) {
            return Err(DomainError::not_found(id));
        }
        let scope = resolve_scope(&ctx);

        self.repo
            .find(&scope, id)
            .await
            .map_err(|e| db_error(&e))?
            .ok_or_else(|| DomainError::not_found(id))
    }

    /// Create through the collection endpoint.
    ///
    /// The id comes from the payload; without one it is the id the scope is
    /// pinned to, or a generated one for administrators. Anonymous callers
    /// must name the account they register.
    ///
    /// # Errors
    /// Returns `DomainError::Validation` for a missing or mismatched id,
    /// `DomainError::Forbidden` when anonymous registration hits an existing
    /// account, `DomainError::Database` if storage fails.
    #[instrument(skip(self, security, new_account), fields(payload_id = ?new_account.id))]
    pub async fn create_account(
        &self,
        security: &SecurityContext,
        new_account: NewAccount,
    ) -> Result<CreatedAccount, DomainError> {
        let ctx = self.caller(security, Target::collection(new_account.id.as_deref()));
        let scope = resolve_scope(&ctx);

        let id = match (new_account.id, scope.exact_id()) {
            (Some(id), _) => id,
            (None, Some(scoped)) => scoped.to_owned(),
            (None, None) if scope.is_unrestricted() => Uuid::new_v4().to_string(),
            (None, None) => {
                return Err(DomainError::validation(
                    "data.id",
                    "account id is required for self-registration",
                ));
            }
        };
        require_account_id(&id)?;

        let owner = finalize_owner_on_create(&ctx, &id, &self.config.principal_prefix);
        let draft = Account {
            id,
            owner: owner.into_principal(),
            data: new_account.data,
            last_modified: OffsetDateTime::now_utc(),
        };
        let draft = enforce_identifier_match(&ctx, draft)?;

        self.insert(&ctx, &scope, draft).await
    }

    /// Create at a given id, or replace the data of the existing record.
    ///
    /// # Errors
    /// Same as [`Service::create_account`]; additionally `DomainError::NotFound`
    /// if the record vanished between creation attempt and replacement.
    #[instrument(skip(self, security, data), fields(account_id = %id))]
    pub async fn put_account(
        &self,
        security: &SecurityContext,
        id: &str,
        data: AccountData,
    ) -> Result<CreatedAccount, DomainError> {
        require_account_id(id)?;
        let ctx = self.caller(security, Target::record(id));
        let scope = resolve_scope(&ctx);

        let owner = finalize_owner_on_create(&ctx, id, &self.config.principal_prefix);
        let draft = Account {
            id: id.to_owned(),
            owner: owner.into_principal(),
            data,
            last_modified: OffsetDateTime::now_utc(),
        };
        let draft = enforce_identifier_match(&ctx, draft)?;

        let created = self.insert(&ctx, &scope, draft.clone()).await?;
        if created.outcome == CreateOutcome::Created {
            return Ok(created);
        }

        let replacement = Account {
            owner: created.account.owner,
            ..draft
        };
        let account = self
            .repo
            .replace(&scope, replacement)
            .await
            .map_err(|e| db_error(&e))?
            .ok_or_else(|| DomainError::not_found(id))?;
        info!("replaced account data");

        Ok(CreatedAccount {
            account,
            outcome: CreateOutcome::AlreadyExisted,
        })
    }

    /// Merge `patch` into an existing account; `null` values remove keys.
    ///
    /// # Errors
    /// Returns `DomainError::NotFound` outside the caller's scope,
    /// `DomainError::Validation` on an identifier mismatch,
    /// `DomainError::Database` if storage fails.
    #[instrument(skip(self, security, patch), fields(account_id = %id))]
    pub async fn update_account(
        &self,
        security: &SecurityContext,
        id: &str,
        patch: AccountPatch,
    ) -> Result<Account, DomainError> {
        let ctx = self.caller(security, Target::record(id));
        if !may_access_existing(&ctx) {
            return Err(DomainError::not_found(id));
        }
        let scope = resolve_scope(&ctx);

        let mut account = self
            .repo
            .find(&scope, id)
            .await
            .map_err(|e| db_error(&e))?
            .ok_or_else(|| DomainError::not_found(id))?;

        for (key, value) in patch.data {
            if value.is_null() {
                account.data.remove(&key);
            } else {
                account.data.insert(key, value);
            }
        }
        account.last_modified = OffsetDateTime::now_utc();
        let account = enforce_identifier_match(&ctx, account)?;

        self.repo
            .replace(&scope, account)
            .await
            .map_err(|e| db_error(&e))?
            .ok_or_else(|| DomainError::not_found(id))
    }

    /// # Errors
    /// Returns `DomainError::NotFound` outside the caller's scope,
    /// `DomainError::Database` if storage fails.
    #[instrument(skip(self, security), fields(account_id = %id))]
    pub async fn delete_account(
        &self,
        security: &SecurityContext,
        id: &str,
    ) -> Result<(), DomainError> {
        let ctx = self.caller(security, Target::record(id));
        if !may_access_existing(&ctx) {
            return Err(DomainError::not_found(id));
        }
        let scope = resolve_scope(&ctx);

        if self.repo.delete(&scope, id).await.map_err(|e| db_error(&e))? {
            info!("account deleted");
            Ok(())
        } else {
            Err(DomainError::not_found(id))
        }
    }

    async fn insert(
        &self,
        ctx: &CallerContext,
        scope: &ScopeSelector,
        draft: Account,
    ) -> Result<CreatedAccount, DomainError> {
        let (account, outcome) = self
            .repo
            .create_if_absent(scope, draft)
            .await
            .map_err(|e| db_error(&e))?;

        if let Err(e) = enforce_creation_uniqueness(ctx.is_anonymous(), outcome, &account.id) {
            warn!(account_id = %account.id, "anonymous registration hit an existing account");
            return Err(e);
        }

        match outcome {
            CreateOutcome::Created => info!(account_id = %account.id, owner = %account.owner, "account created"),
            CreateOutcome::AlreadyExisted => debug!(account_id = %account.id, "account already existed"),
        }
        Ok(CreatedAccount { account, outcome })
    }
}
