use crate::constants::{ALL_PATTERN, NO_MATCH_SENTINEL};

/// Scope selector defining which records of a collection an operation may touch.
///
/// Exactly one variant is produced per resolution. `NoMatch` is a "deny all"
/// selector that yields an empty result instead of an error.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "kind", content = "id", rename_all = "snake_case")]
pub enum ScopeSelector {
    /// No restriction.
    All,
    /// Restrict to exactly one identifier.
    ExactId(String),
    /// Restrict to an identifier guaranteed not to exist.
    NoMatch,
}

impl ScopeSelector {
    #[must_use]
    pub fn exact(id: impl Into<String>) -> Self {
        Self::ExactId(id.into())
    }

    /// Returns true if a record with this identifier is visible in the scope.
    #[must_use]
    pub fn matches(&self, id: &str) -> bool {
        match self {
            Self::All => true,
            Self::ExactId(scoped) => scoped == id,
            Self::NoMatch => false,
        }
    }

    /// The single identifier this scope is pinned to, if any.
    #[must_use]
    pub fn exact_id(&self) -> Option<&str> {
        match self {
            Self::ExactId(id) => Some(id),
            Self::All | Self::NoMatch => None,
        }
    }

    #[must_use]
    pub fn is_unrestricted(&self) -> bool {
        matches!(self, Self::All)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        matches!(self, Self::NoMatch)
    }

    /// Storage-layer rendering of the selector as a parent pattern:
    /// `*`, the identifier itself, or the no-match sentinel.
    #[must_use]
    pub fn parent_pattern(&self) -> &str {
        match self {
            Self::All => ALL_PATTERN,
            Self::ExactId(id) => id,
            Self::NoMatch => NO_MATCH_SENTINEL,
        }
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;

    #[test]
    fn all_matches_everything() {
        let scope = ScopeSelector::All;
        assert!(scope.matches("alice"));
        assert!(scope.matches(NO_MATCH_SENTINEL));
        assert!(scope.is_unrestricted());
        assert_eq!(scope.parent_pattern(), "*");
    }

    #[test]
    fn exact_id_matches_only_itself() {
        let scope = ScopeSelector::exact("alice");
        assert!(scope.matches("alice"));
        assert!(!scope.matches("bob"));
        assert_eq!(scope.exact_id(), Some("alice"));
        assert_eq!(scope.parent_pattern(), "alice");
    }

    #[test]
    fn no_match_matches_nothing() {
        let scope = ScopeSelector::NoMatch;
        assert!(!scope.matches("alice"));
        assert!(!scope.matches(NO_MATCH_SENTINEL));
        assert!(scope.is_empty());
        assert_eq!(scope.parent_pattern(), NO_MATCH_SENTINEL);
    }

    #[test]
    fn sentinel_ids_stay_distinguishable_in_debug_output() {
        assert_ne!(
            format!("{:?}", ScopeSelector::exact(ALL_PATTERN)),
            format!("{:?}", ScopeSelector::All)
        );
        assert_ne!(
            format!("{:?}", ScopeSelector::exact(NO_MATCH_SENTINEL)),
            format!("{:?}", ScopeSelector::NoMatch)
        );
    }

    #[test]
    fn serializes_with_kind_tag() {
        let json = serde_json::to_string(&ScopeSelector::exact("carol")).unwrap();
        assert_eq!(json, r#"{"kind":"exact_id","id":"carol"}"#);

        let json = serde_json::to_string(&ScopeSelector::NoMatch).unwrap();
        assert_eq!(json, r#"{"kind":"no_match"}"#);
    }
}
