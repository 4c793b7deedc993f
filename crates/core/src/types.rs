/// Catalog primary keys (actors, studios, agencies, casting calls, users).
pub type DbId = i64;

/// Identifier for client-created records (requests, vault assets).
pub type RecordId = uuid::Uuid;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;
