//! One desk per simulated flow.

pub mod auth;
pub mod casting;
pub mod chat;
pub mod contracts;
pub mod onboarding;
pub mod requests;
pub mod tokens;
pub mod vault;

pub use auth::AuthDesk;
pub use casting::CastingDesk;
pub use chat::ChatDesk;
pub use contracts::ContractDesk;
pub use onboarding::OnboardingDesk;
pub use requests::RequestDesk;
pub use tokens::TokenDesk;
pub use vault::VaultDesk;
