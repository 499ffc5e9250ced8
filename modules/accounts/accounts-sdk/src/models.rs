//! Public models for the `accounts` module.
//!
//! Transport-agnostic data structures shared between the module and its consumers.

use modkit_security::Principal;
use time::OffsetDateTime;

/// Free-form account fields.
pub type AccountData = serde_json::Map<String, serde_json::Value>;

/// A stored account record.
///
/// `id` is the account's principal name and is unique in the collection.
#[derive(Debug, Clone, PartialEq)]
pub struct Account {
    pub id: String,
    /// Principal granted write on this record.
    pub owner: Principal,
    pub data: AccountData,
    pub last_modified: OffsetDateTime,
}

/// Data for creating a new account through the collection endpoint.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct NewAccount {
    /// Identifier submitted in the payload, if any.
    pub id: Option<String>,
    pub data: AccountData,
}

impl NewAccount {
    #[must_use]
    pub fn with_id(id: &str) -> Self {
        Self {
            id: Some(id.to_owned()),
            data: AccountData::new(),
        }
    }
}

/// Partial update of an account's fields. Keys set to `null` are removed.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AccountPatch {
    pub data: AccountData,
}

/// Which case the storage layer's create-if-absent primitive hit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CreateOutcome {
    Created,
    AlreadyExisted,
}

impl CreateOutcome {
    #[must_use]
    pub fn existed_already(self) -> bool {
        matches!(self, Self::AlreadyExisted)
    }
}

/// Result of a creation request.
#[derive(Debug, Clone, PartialEq)]
pub struct CreatedAccount {
    pub account: Account,
    pub outcome: CreateOutcome,
}
