use accounts_sdk::{Account, CreateOutcome};
use async_trait::async_trait;
use modkit_security::ScopeSelector;

/// Port for the domain layer: persistence operations the domain needs.
///
/// Every operation takes the resolved `ScopeSelector` and must only see or
/// touch records the selector matches.
#[async_trait]
pub trait AccountsRepository: Send + Sync {
    /// All accounts matched by the scope. `NoMatch` yields an empty list.
    async fn list(&self, scope: &ScopeSelector) -> anyhow::Result<Vec<Account>>;

    /// Load one account if it exists and is within scope.
    async fn find(&self, scope: &ScopeSelector, id: &str) -> anyhow::Result<Option<Account>>;

    /// Insert the account unless its id is already taken.
    ///
    /// Must be linearizable: among concurrent calls for the same id exactly one
    /// reports `Created`, the others `AlreadyExisted` together with the stored
    /// record. Fails if the id lies outside the scope.
    async fn create_if_absent(
        &self,
        scope: &ScopeSelector,
        account: Account,
    ) -> anyhow::Result<(Account, CreateOutcome)>;

    /// Replace an existing in-scope account. Returns `None` if there is none.
    async fn replace(
        &self,
        scope: &ScopeSelector,
        account: Account,
    ) -> anyhow::Result<Option<Account>>;

    /// Delete by id. Returns true if an in-scope record was removed.
    async fn delete(&self, scope: &ScopeSelector, id: &str) -> anyhow::Result<bool>;
}
