/// Principal held by every caller, anonymous or not.
pub const EVERYONE: &str = "system.Everyone";

/// Principal held by every caller that presented a verified identity.
pub const AUTHENTICATED: &str = "system.Authenticated";

/// Default namespace for per-account principals (`account:<id>`).
pub const DEFAULT_ACCOUNT_PREFIX: &str = "account";

/// Parent pattern that matches every record of a collection.
pub const ALL_PATTERN: &str = "*";

/// Identifier guaranteed not to match any stored record.
pub const NO_MATCH_SENTINEL: &str = "__no_match__";
