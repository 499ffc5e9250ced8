use crate::constants::DEFAULT_ACCOUNT_PREFIX;
use crate::context::SecurityContext;
use crate::principal::Principal;

/// What the current operation is aimed at.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Target {
    /// List or create against the collection endpoint, with the identifier
    /// submitted in the payload (if any).
    Collection { payload_id: Option<String> },
    /// Single-record operation addressed by its path identifier.
    Record { path_id: String },
}

impl Target {
    #[must_use]
    pub fn collection(payload_id: Option<&str>) -> Self {
        Self::Collection {
            payload_id: payload_id.map(ToOwned::to_owned),
        }
    }

    #[must_use]
    pub fn record(path_id: &str) -> Self {
        Self::Record {
            path_id: path_id.to_owned(),
        }
    }
}

/// Immutable per-request view of the caller used by ownership decisions.
///
/// Built once (from a [`SecurityContext`] and the collection's write grantees,
/// or explicitly through the builder) and passed by reference to every
/// resolver call. Nothing mutates it afterwards.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CallerContext {
    caller: Option<Caller>,
    is_administrator: bool,
    target: Target,
}

/// Authenticated caller: account id plus the principal it authenticated as.
#[derive(Clone, Debug, PartialEq, Eq)]
struct Caller {
    id: String,
    principal: Principal,
}

impl CallerContext {
    #[must_use]
    pub fn builder() -> CallerContextBuilder {
        CallerContextBuilder::default()
    }

    /// Derive the caller context from the authentication state.
    ///
    /// The caller is an administrator when any of its effective principals is
    /// among `write_grantees`.
    #[must_use]
    pub fn from_security(
        security: &SecurityContext,
        write_grantees: &[Principal],
        target: Target,
    ) -> Self {
        let caller = security
            .user_id()
            .zip(security.user_principal())
            .map(|(id, principal)| Caller {
                id: id.to_owned(),
                principal: principal.clone(),
            });

        Self {
            caller,
            is_administrator: security.intersects(write_grantees),
            target,
        }
    }

    #[inline]
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.caller.is_some()
    }

    #[inline]
    #[must_use]
    pub fn is_anonymous(&self) -> bool {
        self.caller.is_none()
    }

    #[inline]
    #[must_use]
    pub fn is_administrator(&self) -> bool {
        self.is_administrator
    }

    /// The caller's own account identifier, present only if authenticated.
    #[must_use]
    pub fn caller_id(&self) -> Option<&str> {
        self.caller.as_ref().map(|c| c.id.as_str())
    }

    /// The principal the caller authenticated as (e.g. `account:alice`).
    #[must_use]
    pub fn caller_principal(&self) -> Option<&Principal> {
        self.caller.as_ref().map(|c| &c.principal)
    }

    #[must_use]
    pub fn target(&self) -> &Target {
        &self.target
    }

    #[must_use]
    pub fn is_collection_operation(&self) -> bool {
        matches!(self.target, Target::Collection { .. })
    }

    #[must_use]
    pub fn path_id(&self) -> Option<&str> {
        match &self.target {
            Target::Record { path_id } => Some(path_id),
            Target::Collection { .. } => None,
        }
    }

    #[must_use]
    pub fn payload_id(&self) -> Option<&str> {
        match &self.target {
            Target::Collection { payload_id } => payload_id.as_deref(),
            Target::Record { .. } => None,
        }
    }

    /// Identifier named by the request: the path id for single-record
    /// operations, the payload id for collection operations.
    #[must_use]
    pub fn requested_id(&self) -> Option<&str> {
        self.path_id().or_else(|| self.payload_id())
    }
}

pub struct CallerContextBuilder {
    caller_id: Option<String>,
    caller_principal: Option<Principal>,
    is_administrator: bool,
    target: Target,
}

impl Default for CallerContextBuilder {
    fn default() -> Self {
        Self {
            caller_id: None,
            caller_principal: None,
            is_administrator: false,
            target: Target::Collection { payload_id: None },
        }
    }
}

impl CallerContextBuilder {
    /// Mark the caller as authenticated with the given account id.
    #[must_use]
    pub fn caller_id(mut self, caller_id: &str) -> Self {
        self.caller_id = Some(caller_id.to_owned());
        self
    }

    /// Principal of the authenticated caller; defaults to `account:<caller id>`.
    #[must_use]
    pub fn caller_principal(mut self, principal: impl Into<Principal>) -> Self {
        self.caller_principal = Some(principal.into());
        self
    }

    #[must_use]
    pub fn administrator(mut self, is_administrator: bool) -> Self {
        self.is_administrator = is_administrator;
        self
    }

    #[must_use]
    pub fn collection(mut self, payload_id: Option<&str>) -> Self {
        self.target = Target::collection(payload_id);
        self
    }

    #[must_use]
    pub fn record(mut self, path_id: &str) -> Self {
        self.target = Target::record(path_id);
        self
    }

    #[must_use]
    pub fn build(self) -> CallerContext {
        let principal = self.caller_principal;
        let caller = self.caller_id.map(|id| Caller {
            principal: principal
                .unwrap_or_else(|| Principal::account(DEFAULT_ACCOUNT_PREFIX, &id)),
            id,
        });

        CallerContext {
            caller,
            is_administrator: self.is_administrator,
            target: self.target,
        }
    }
}
