//! Error catalog for the accounts module.

use http::StatusCode;
use modkit_errors::ErrDef;

pub struct ErrorCode;

impl ErrorCode {
    pub const NOT_FOUND: ErrDef = ErrDef {
        status: StatusCode::NOT_FOUND,
        title: "Account not found",
        code: "gts.x.core.errors.err.v1~x.accounts.account.not_found.v1",
        type_url: "gts://gts.x.core.errors.err.v1~x.accounts.account.not_found.v1",
    };

    pub const FORBIDDEN: ErrDef = ErrDef {
        status: StatusCode::FORBIDDEN,
        title: "Forbidden",
        code: "gts.x.core.errors.err.v1~x.accounts.account.forbidden.v1",
        type_url: "gts://gts.x.core.errors.err.v1~x.accounts.account.forbidden.v1",
    };

    pub const INVALID: ErrDef = ErrDef {
        status: StatusCode::BAD_REQUEST,
        title: "Invalid parameters",
        code: "gts.x.core.errors.err.v1~x.accounts.account.invalid.v1",
        type_url: "gts://gts.x.core.errors.err.v1~x.accounts.account.invalid.v1",
    };

    pub const INTERNAL: ErrDef = ErrDef {
        status: StatusCode::INTERNAL_SERVER_ERROR,
        title: "Internal Server Error",
        code: "gts.x.core.errors.err.v1~x.accounts.internal.v1",
        type_url: "gts://gts.x.core.errors.err.v1~x.accounts.internal.v1",
    };
}
