//! Ownership resolver for the account collection.
//!
//! Pure functions of a [`CallerContext`]: no I/O, no shared state. The
//! resource handler calls them before touching storage and enforces whatever
//! they return.

use accounts_sdk::{Account, CreateOutcome};
use modkit_security::{CallerContext, Principal, ScopeSelector};
use tracing::debug;

use crate::domain::error::DomainError;

/// Who owns (holds write on) a freshly created account.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OwnerAssignment {
    /// The creator was authenticated and stays the owner.
    Retained(Principal),
    /// The creator was anonymous; ownership is pinned to the new account's own principal.
    Pinned(Principal),
}

impl OwnerAssignment {
    #[must_use]
    pub fn principal(&self) -> &Principal {
        match self {
            Self::Retained(p) | Self::Pinned(p) => p,
        }
    }

    #[must_use]
    pub fn into_principal(self) -> Principal {
        match self {
            Self::Retained(p) | Self::Pinned(p) => p,
        }
    }
}

/// Decide which records the current operation may see or touch.
///
/// Rules are checked in order, first match wins:
/// 1. administrators get every account on the collection, and the literal
///    path id on a single record;
/// 2. authenticated users only ever get their own account;
/// 3. anonymous callers get the path id, else the payload id, else nothing.
#[must_use]
pub fn resolve_scope(ctx: &CallerContext) -> ScopeSelector {
    let scope = if ctx.is_administrator() {
        // No pattern matching for administrators on a single record.
        match ctx.path_id() {
            Some(path_id) => ScopeSelector::exact(path_id),
            None => ScopeSelector::All,
        }
    } else if let Some(caller_id) = ctx.caller_id() {
        ScopeSelector::exact(caller_id)
    } else if let Some(path_id) = ctx.path_id() {
        ScopeSelector::exact(path_id)
    } else if let Some(payload_id) = ctx.payload_id() {
        ScopeSelector::exact(payload_id)
    } else {
        ScopeSelector::NoMatch
    };

    debug!(
        administrator = ctx.is_administrator(),
        authenticated = ctx.is_authenticated(),
        collection = ctx.is_collection_operation(),
        scope = ?scope,
        "resolved account scope"
    );
    scope
}

/// Pin the owner of a record created with identifier `created_id`.
///
/// Must only be called once the identifier is known. An authenticated creator
/// keeps the principal it authenticated as. An anonymous creator cannot own
/// anything, so the record is handed to its own account principal.
#[must_use]
pub fn finalize_owner_on_create(
    ctx: &CallerContext,
    created_id: &str,
    principal_prefix: &str,
) -> OwnerAssignment {
    match ctx.caller_principal() {
        Some(principal) => OwnerAssignment::Retained(principal.clone()),
        None => OwnerAssignment::Pinned(Principal::account(principal_prefix, created_id)),
    }
}

/// Refuse anonymous creation that landed on an existing account.
///
/// Authenticated and administrator creation keep the storage layer's
/// idempotent behavior.
///
/// # Errors
/// Returns `DomainError::Forbidden` naming `id` when `anonymous` is set and the
/// record already existed.
pub fn enforce_creation_uniqueness(
    anonymous: bool,
    outcome: CreateOutcome,
    id: &str,
) -> Result<(), DomainError> {
    if anonymous && outcome.existed_already() {
        return Err(DomainError::already_exists(id));
    }
    Ok(())
}

/// Require the written record to carry the caller's own id.
///
/// Administrators may write other accounts; anonymous creators have no
/// identity to compare against yet.
///
/// # Errors
/// Returns `DomainError::Validation` on field `data` when the ids differ.
pub fn enforce_identifier_match(
    ctx: &CallerContext,
    record: Account,
) -> Result<Account, DomainError> {
    if ctx.is_administrator() {
        return Ok(record);
    }
    match ctx.caller_id() {
        None => Ok(record),
        Some(caller_id) if caller_id == record.id => Ok(record),
        Some(_) => Err(DomainError::identifier_mismatch()),
    }
}

/// Whether the caller may act on an already stored record.
///
/// Anonymous callers hold no permission on existing accounts; the only thing
/// they can do is register a new one.
#[must_use]
pub fn may_access_existing(ctx: &CallerContext) -> bool {
    ctx.is_administrator() || ctx.is_authenticated()
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;
    use accounts_sdk::AccountData;
    use time::OffsetDateTime;

    fn account(id: &str) -> Account {
        Account {
            id: id.to_owned(),
            owner: Principal::account("account", id),
            data: AccountData::new(),
            last_modified: OffsetDateTime::UNIX_EPOCH,
        }
    }

    fn admin() -> modkit_security::CallerContextBuilder {
        CallerContext::builder().caller_id("admin").administrator(true)
    }

    #[test]
    fn admin_on_collection_sees_all() {
        for payload in [None, Some("carol")] {
            let ctx = admin().collection(payload).build();
            assert_eq!(resolve_scope(&ctx), ScopeSelector::All);
        }
    }

    #[test]
    fn admin_on_record_uses_path_id_verbatim() {
        let ctx = admin().record("nonexistent").build();
        assert_eq!(resolve_scope(&ctx), ScopeSelector::exact("nonexistent"));
    }

    #[test]
    fn anonymous_admin_is_still_admin() {
        let ctx = CallerContext::builder().administrator(true).build();
        assert_eq!(resolve_scope(&ctx), ScopeSelector::All);
    }

    #[test]
    fn authenticated_user_only_sees_own_account() {
        let on_other = CallerContext::builder().caller_id("alice").record("bob").build();
        let on_payload = CallerContext::builder()
            .caller_id("alice")
            .collection(Some("bob"))
            .build();
        let on_list = CallerContext::builder().caller_id("alice").build();

        for ctx in [on_other, on_payload, on_list] {
            assert_eq!(resolve_scope(&ctx), ScopeSelector::exact("alice"));
        }
    }

    #[test]
    fn anonymous_put_uses_path_id() {
        let ctx = CallerContext::builder().record("carol").build();
        assert_eq!(resolve_scope(&ctx), ScopeSelector::exact("carol"));
    }

    #[test]
    fn anonymous_post_uses_payload_id() {
        let ctx = CallerContext::builder().collection(Some("carol")).build();
        assert_eq!(resolve_scope(&ctx), ScopeSelector::exact("carol"));
    }

    #[test]
    fn anonymous_without_ids_matches_nothing() {
        let ctx = CallerContext::builder().collection(None).build();
        assert_eq!(resolve_scope(&ctx), ScopeSelector::NoMatch);
    }

    #[test]
    fn anonymous_creator_is_pinned_to_new_account() {
        let ctx = CallerContext::builder().collection(Some("carol")).build();
        let owner = finalize_owner_on_create(&ctx, "carol", "account");
        assert_eq!(owner, OwnerAssignment::Pinned(Principal::new("account:carol")));
        assert!(!owner.principal().is_everyone());
    }

    #[test]
    fn authenticated_creator_keeps_ownership() {
        let ctx = admin().collection(Some("bob")).build();
        let owner = finalize_owner_on_create(&ctx, "bob", "account");
        assert_eq!(owner, OwnerAssignment::Retained(Principal::new("account:admin")));
    }

    #[test]
    fn retained_owner_is_the_authenticated_principal() {
        let ctx = CallerContext::builder()
            .caller_id("alice")
            .caller_principal("ldap:alice")
            .collection(Some("alice"))
            .build();
        let owner = finalize_owner_on_create(&ctx, "alice", "account");
        assert_eq!(owner, OwnerAssignment::Retained(Principal::new("ldap:alice")));
    }

    #[test]
    fn pinned_owner_uses_configured_prefix() {
        let ctx = CallerContext::builder().record("dave").build();
        let owner = finalize_owner_on_create(&ctx, "dave", "ldap");
        assert_eq!(owner.into_principal().as_str(), "ldap:dave");
    }

    #[test]
    fn anonymous_collision_is_forbidden() {
        let err = enforce_creation_uniqueness(true, CreateOutcome::AlreadyExisted, "carol")
            .unwrap_err();
        match err {
            DomainError::Forbidden { message } => assert!(message.contains("carol")),
            other => panic!("expected Forbidden, got {other:?}"),
        }
    }

    #[test]
    fn uniqueness_allows_everything_else() {
        assert!(enforce_creation_uniqueness(true, CreateOutcome::Created, "carol").is_ok());
        assert!(enforce_creation_uniqueness(false, CreateOutcome::Created, "carol").is_ok());
        assert!(enforce_creation_uniqueness(false, CreateOutcome::AlreadyExisted, "carol").is_ok());
    }

    #[test]
    fn identifier_mismatch_is_invalid_on_data() {
        let ctx = CallerContext::builder().caller_id("alice").build();
        let err = enforce_identifier_match(&ctx, account("bob")).unwrap_err();
        match err {
            DomainError::Validation { field, message } => {
                assert_eq!(field, "data");
                assert!(message.contains("do not match"));
            }
            other => panic!("expected Validation, got {other:?}"),
        }
    }

    #[test]
    fn identifier_match_accepts_own_id() {
        let ctx = CallerContext::builder().caller_id("alice").build();
        let record = enforce_identifier_match(&ctx, account("alice")).unwrap();
        assert_eq!(record.id, "alice");
    }

    #[test]
    fn administrators_and_anonymous_are_exempt_from_match() {
        let admin_ctx = admin().record("bob").build();
        assert!(enforce_identifier_match(&admin_ctx, account("bob")).is_ok());

        let anon_ctx = CallerContext::builder().collection(Some("bob")).build();
        assert!(enforce_identifier_match(&anon_ctx, account("bob")).is_ok());
    }

    #[test]
    fn anonymous_cannot_access_existing_records() {
        assert!(!may_access_existing(&CallerContext::builder().record("bob").build()));
        assert!(may_access_existing(&CallerContext::builder().caller_id("bob").build()));
        assert!(may_access_existing(&CallerContext::builder().administrator(true).build()));
    }
}
