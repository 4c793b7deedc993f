//! Simulated asynchronous gateway.
//!
//! Stands in for a remote backend. Every simulated operation goes through an
//! [`ActionTracker`], which exposes an [`ActionState`] (`idle`, `loading`,
//! `success`, `error`), waits out an artificial latency, and takes the
//! scripted failure branch when the input contains the failure trigger.
//!
//! The per-flow desks in [`desks`] are assembled into one [`Gateway`].

pub mod action;
pub mod desks;
pub mod error;
pub mod gateway;
pub mod latency;
pub mod trigger;

pub use action::{ActionState, ActionTracker};
pub use error::GatewayError;
pub use gateway::{Context, Gateway, RequestDeskKind};
pub use latency::LatencyProfile;
