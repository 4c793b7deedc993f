//! Mock usage tokens issued for approved licenses.
//!
//! A token is an opaque string with no cryptographic meaning. It only
//! records that a license was in the `approved` status when authorised.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::requests::{LicenseStatus, Request};
use crate::types::{RecordId, Timestamp};

/// Prefix of every issued token.
pub const TOKEN_PREFIX: &str = "utk_";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UsageToken {
    pub token: String,
    pub request_id: RecordId,
    pub issued_at: Timestamp,
}

/// Issue a token for a license request. Only approved licenses qualify.
pub fn issue(request: &Request<LicenseStatus>, now: Timestamp) -> Result<UsageToken, CoreError> {
    if request.status != LicenseStatus::Approved {
        return Err(CoreError::Conflict(format!(
            "License {} is '{}'; only approved licenses can be authorised",
            request.id, request.status
        )));
    }
    Ok(UsageToken {
        token: format!("{TOKEN_PREFIX}{}", uuid::Uuid::new_v4().simple()),
        request_id: request.id,
        issued_at: now,
    })
}

/// Shape check for a presented token.
pub fn is_well_formed(token: &str) -> bool {
    token
        .strip_prefix(TOKEN_PREFIX)
        .is_some_and(|rest| rest.len() == 32 && rest.chars().all(|c| c.is_ascii_hexdigit()))
}
