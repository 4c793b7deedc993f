//! Key-value persistence shim.
//!
//! Every piece of client state (current user, vault assets, request lists,
//! onboarding progress, applied casting calls, activity) lives under a
//! string key as a JSON document. There is no schema versioning: a value
//! that no longer deserializes is reported as a [`StoreError`].
//!
//! - [`KvStore`] is the backend seam, with [`MemoryStore`] and
//!   [`FileStore`] implementations.
//! - [`Store`] adds typed JSON access and serialized read-modify-write.
//! - [`repositories`] provides the typed operations the rest of the
//!   workspace uses.

pub mod backend;
pub mod error;
pub mod file;
pub mod keys;
pub mod repositories;
pub mod store;

pub use backend::{KvStore, MemoryStore};
pub use error::StoreError;
pub use file::FileStore;
pub use repositories::{
    ActivityEntry, ActivityRepo, CastingRepo, OnboardingRepo, RequestRepo, SessionRepo, VaultRepo,
};
pub use store::Store;
