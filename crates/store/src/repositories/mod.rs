//! Typed repositories over [`Store`](crate::Store) keys.
//!
//! Each repository is a zero-sized type with associated async functions
//! taking the store handle, one per storage key family.

pub mod activity;
pub mod casting;
pub mod onboarding;
pub mod requests;
pub mod session;
pub mod vault;

pub use activity::{ActivityEntry, ActivityRepo};
pub use casting::CastingRepo;
pub use onboarding::OnboardingRepo;
pub use requests::RequestRepo;
pub use session::SessionRepo;
pub use vault::VaultRepo;
