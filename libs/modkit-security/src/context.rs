use std::collections::BTreeSet;

use crate::constants::DEFAULT_ACCOUNT_PREFIX;
use crate::principal::Principal;

/// `SecurityContext` carries the authentication state of a request as produced
/// by the authentication layer: the selected user id and the caller's
/// effective principals.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct SecurityContext {
    user_id: Option<String>,
    user_principal: Option<Principal>,
    principals: BTreeSet<Principal>,
}

impl SecurityContext {
    /// Create a new `SecurityContext` builder
    #[must_use]
    pub fn builder() -> SecurityContextBuilder {
        SecurityContextBuilder::default()
    }

    /// Create an anonymous `SecurityContext`: no user id, only `system.Everyone`
    #[must_use]
    pub fn anonymous() -> Self {
        SecurityContextBuilder::default().build()
    }

    /// Selected user id; present only when the caller is authenticated
    #[must_use]
    pub fn user_id(&self) -> Option<&str> {
        self.user_id.as_deref()
    }

    /// Namespaced principal of the authenticated user (e.g. `account:alice`)
    #[must_use]
    pub fn user_principal(&self) -> Option<&Principal> {
        self.user_principal.as_ref()
    }

    /// Effective principals of the caller, always including `system.Everyone`
    #[must_use]
    pub fn principals(&self) -> &BTreeSet<Principal> {
        &self.principals
    }

    /// True when no user id was selected.
    #[must_use]
    pub fn is_anonymous(&self) -> bool {
        self.user_id.is_none()
    }

    /// True if any effective principal appears in `grantees`.
    #[must_use]
    pub fn intersects<'a, I>(&self, grantees: I) -> bool
    where
        I: IntoIterator<Item = &'a Principal>,
    {
        grantees.into_iter().any(|g| self.principals.contains(g))
    }
}

#[derive(Default)]
pub struct SecurityContextBuilder {
    user_id: Option<String>,
    principal_prefix: Option<String>,
    principals: Vec<Principal>,
}

impl SecurityContextBuilder {
    /// Mark the caller as authenticated with the given user id.
    #[must_use]
    pub fn user_id(mut self, user_id: &str) -> Self {
        self.user_id = Some(user_id.to_owned());
        self
    }

    /// Namespace used to derive the user principal (defaults to `account`).
    #[must_use]
    pub fn principal_prefix(mut self, prefix: &str) -> Self {
        self.principal_prefix = Some(prefix.to_owned());
        self
    }

    /// Add an extra effective principal (group membership, role, ...).
    #[must_use]
    pub fn add_principal(mut self, principal: impl Into<Principal>) -> Self {
        self.principals.push(principal.into());
        self
    }

    /// `system.Authenticated` is only ever derived from a selected user id; an
    /// explicitly added one is dropped when no user id is set.
    #[must_use]
    pub fn build(self) -> SecurityContext {
        let mut principals: BTreeSet<Principal> = self.principals.into_iter().collect();
        principals.insert(Principal::everyone());
        if self.user_id.is_none() {
            principals.remove(&Principal::authenticated());
        }

        let user_principal = self.user_id.as_deref().map(|id| {
            let prefix = self
                .principal_prefix
                .as_deref()
                .unwrap_or(DEFAULT_ACCOUNT_PREFIX);
            Principal::account(prefix, id)
        });

        if let Some(p) = &user_principal {
            principals.insert(Principal::authenticated());
            principals.insert(p.clone());
        }

        SecurityContext {
            user_id: self.user_id,
            user_principal,
            principals,
        }
    }
}
