//! Event type names published on the bus.

pub const REQUEST_SUBMITTED: &str = "request.submitted";
pub const REQUEST_ADVANCED: &str = "request.advanced";
pub const REQUEST_WITHDRAWN: &str = "request.withdrawn";
pub const USAGE_TOKEN_ISSUED: &str = "usage_token.issued";

pub const SESSION_SIGNED_IN: &str = "session.signed_in";
pub const SESSION_SIGNED_OUT: &str = "session.signed_out";

pub const CASTING_APPLIED: &str = "casting.applied";
pub const CASTING_WITHDRAWN: &str = "casting.withdrawn";

pub const VAULT_ASSET_UPLOADED: &str = "vault.asset_uploaded";
pub const VAULT_ASSET_DELETED: &str = "vault.asset_deleted";

pub const ONBOARDING_STEP_CHANGED: &str = "onboarding.step_changed";
pub const ONBOARDING_COMPLETED: &str = "onboarding.completed";

pub const MESSAGE_SENT: &str = "message.sent";
pub const MESSAGE_RECEIVED: &str = "message.received";

pub const CONTRACT_REVIEWED: &str = "contract.reviewed";
