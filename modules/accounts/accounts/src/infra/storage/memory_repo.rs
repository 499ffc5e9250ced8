use accounts_sdk::{Account, CreateOutcome};
use async_trait::async_trait;
use dashmap::DashMap;
use dashmap::mapref::entry::Entry;
use modkit_security::ScopeSelector;

use crate::domain::repo::AccountsRepository;

/// In-memory account storage keyed by account id.
///
/// `create_if_absent` goes through the map's entry API, which holds the shard
/// lock for the whole check-and-insert.
#[derive(Default)]
pub struct InMemoryAccountsRepository {
    accounts: DashMap<String, Account>,
}

impl InMemoryAccountsRepository {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.accounts.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }
}

#[async_trait]
impl AccountsRepository for InMemoryAccountsRepository {
    async fn list(&self, scope: &ScopeSelector) -> anyhow::Result<Vec<Account>> {
        let mut items: Vec<Account> = match scope {
            ScopeSelector::NoMatch => Vec::new(),
            ScopeSelector::ExactId(id) => self
                .accounts
                .get(id)
                .map(|a| vec![a.value().clone()])
                .unwrap_or_default(),
            ScopeSelector::All => self.accounts.iter().map(|a| a.value().clone()).collect(),
        };
        items.sort_by(|a, b| a.id.cmp(&b.id));
        Ok(items)
    }

    async fn find(&self, scope: &ScopeSelector, id: &str) -> anyhow::Result<Option<Account>> {
        if !scope.matches(id) {
            return Ok(None);
        }
        Ok(self.accounts.get(id).map(|a| a.value().clone()))
    }

    async fn create_if_absent(
        &self,
        scope: &ScopeSelector,
        account: Account,
    ) -> anyhow::Result<(Account, CreateOutcome)> {
        if !scope.matches(&account.id) {
            anyhow::bail!("account '{}' is outside scope {scope:?}", account.id);
        }

        match self.accounts.entry(account.id.clone()) {
            Entry::Occupied(existing) => Ok((existing.get().clone(), CreateOutcome::AlreadyExisted)),
            Entry::Vacant(slot) => {
                slot.insert(account.clone());
                Ok((account, CreateOutcome::Created))
            }
        }
    }

    async fn replace(
        &self,
        scope: &ScopeSelector,
        account: Account,
    ) -> anyhow::Result<Option<Account>> {
        if !scope.matches(&account.id) {
            return Ok(None);
        }
        let Some(mut slot) = self.accounts.get_mut(&account.id) else {
            return Ok(None);
        };
        *slot = account.clone();
        Ok(Some(account))
    }

    async fn delete(&self, scope: &ScopeSelector, id: &str) -> anyhow::Result<bool> {
        if !scope.matches(id) {
            return Ok(false);
        }
        Ok(self.accounts.remove(id).is_some())
    }
}
