//! Request handlers for the marketplace API.
//!
//! Each submodule provides async handler functions for one area of the
//! marketplace. Handlers delegate to the matching gateway desk and map
//! errors via [`AppError`](crate::error::AppError).

pub mod actions;
pub mod activity;
pub mod auth;
pub mod casting;
pub mod catalog;
pub mod contracts;
pub mod conversations;
pub mod onboarding;
pub mod requests;
pub mod vault;
