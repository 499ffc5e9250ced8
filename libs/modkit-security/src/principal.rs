use std::fmt;

use crate::constants::{AUTHENTICATED, EVERYONE};

/// Identity string representing a caller or a grantee.
///
/// Well-known principals are [`Principal::everyone`] and
/// [`Principal::authenticated`]; per-account principals are namespaced as
/// `<prefix>:<account id>`.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct Principal(String);

impl Principal {
    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    #[must_use]
    pub fn everyone() -> Self {
        Self::new(EVERYONE)
    }

    #[must_use]
    pub fn authenticated() -> Self {
        Self::new(AUTHENTICATED)
    }

    /// Account-scoped principal, e.g. `account:alice`.
    #[must_use]
    pub fn account(prefix: &str, account_id: &str) -> Self {
        Self(format!("{prefix}:{account_id}"))
    }

    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[must_use]
    pub fn is_everyone(&self) -> bool {
        self.0 == EVERYONE
    }
}

impl fmt::Display for Principal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Principal {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for Principal {
    fn from(value: String) -> Self {
        Self(value)
    }
}
