//! Storage keys.

use castline_core::requests::RequestKind;

pub const CURRENT_USER: &str = "castline.current_user";
pub const VAULT_ASSETS: &str = "castline.vault_assets";
pub const ONBOARDING_STEP: &str = "castline.onboarding_step";
pub const APPLIED_CASTING_CALLS: &str = "castline.applied_casting_calls";
pub const ACTIVITY: &str = "castline.activity";

/// Key holding the request list of one kind.
pub fn requests(kind: RequestKind) -> &'static str {
    match kind {
        RequestKind::License => "castline.requests.license",
        RequestKind::Access => "castline.requests.access",
        RequestKind::Collaboration => "castline.requests.collaboration",
        RequestKind::Intro => "castline.requests.intro",
    }
}
