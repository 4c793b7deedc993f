//! Castline domain logic.
//!
//! Pure, I/O-free building blocks shared by the store, gateway and API
//! crates: the mock catalog, faceted search, the request lifecycle state
//! machine, pre-submission checks and the smaller flows (messaging,
//! onboarding, vault, contract review).

pub mod catalog;
pub mod contract;
pub mod error;
pub mod facets;
pub mod lifecycle;
pub mod messaging;
pub mod onboarding;
pub mod precheck;
pub mod requests;
pub mod search;
pub mod session;
pub mod types;
pub mod usage_token;
pub mod vault;
