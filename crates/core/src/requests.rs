//! License, access, collaboration and intro requests.
//!
//! All four request kinds share one record shape ([`Request`]) and differ
//! only in their status sequence.

use serde::{Deserialize, Serialize};

use crate::catalog::SubjectRef;
use crate::error::CoreError;
use crate::facets::{Geography, UseCase};
use crate::lifecycle::{LifecycleStatus, Tracked, TrackedList};
use crate::types::{RecordId, Timestamp};

// ---------------------------------------------------------------------------
// Request kinds and their lifecycles
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RequestKind {
    License,
    Access,
    Collaboration,
    Intro,
}

/// Valid request kind strings.
pub const VALID_REQUEST_KINDS: &[&str] = &["license", "access", "collaboration", "intro"];

impl RequestKind {
    pub fn parse(s: &str) -> Result<Self, CoreError> {
        match s {
            "license" => Ok(Self::License),
            "access" => Ok(Self::Access),
            "collaboration" => Ok(Self::Collaboration),
            "intro" => Ok(Self::Intro),
            other => Err(CoreError::Validation(format!(
                "Invalid request kind '{other}'. Must be one of: {}",
                VALID_REQUEST_KINDS.join(", ")
            ))),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::License => "license",
            Self::Access => "access",
            Self::Collaboration => "collaboration",
            Self::Intro => "intro",
        }
    }

    /// License and access requests must carry usage terms.
    pub fn requires_terms(self) -> bool {
        matches!(self, Self::License | Self::Access)
    }
}

crate::define_lifecycle! {
    /// Likeness/voice license.
    LicenseStatus ("license") {
        Requested = "requested",
        Approved = "approved",
        Expired = "expired",
        Revoked = "revoked",
    }
}

crate::define_lifecycle! {
    /// Access to protected vault assets.
    AccessStatus ("access") {
        Pending = "pending",
        InReview = "in_review",
        Accepted = "accepted",
    }
}

crate::define_lifecycle! {
    CollaborationStatus ("collaboration") {
        Proposed = "proposed",
        InDiscussion = "in_discussion",
        Confirmed = "confirmed",
    }
}

crate::define_lifecycle! {
    IntroStatus ("intro") {
        Requested = "requested",
        Introduced = "introduced",
        Connected = "connected",
    }
}

/// Binds a status sequence to its request kind.
pub trait RequestLifecycle: LifecycleStatus + Serialize + for<'de> Deserialize<'de> {
    const KIND: RequestKind;
}

impl RequestLifecycle for LicenseStatus {
    const KIND: RequestKind = RequestKind::License;
}

impl RequestLifecycle for AccessStatus {
    const KIND: RequestKind = RequestKind::Access;
}

impl RequestLifecycle for CollaborationStatus {
    const KIND: RequestKind = RequestKind::Collaboration;
}

impl RequestLifecycle for IntroStatus {
    const KIND: RequestKind = RequestKind::Intro;
}

// ---------------------------------------------------------------------------
// Drafts and records
// ---------------------------------------------------------------------------

/// Requested use of a target's likeness or voice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UsageTerms {
    pub use_case: UseCase,
    pub territory: Geography,
    pub duration: String,
}

/// User-submitted request form, before pre-check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequestDraft {
    pub subject: SubjectRef,
    pub requester: String,
    pub project_name: String,
    pub note: String,
    #[serde(default)]
    pub terms: Option<UsageTerms>,
}

/// A submitted request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Request<S> {
    pub id: RecordId,
    pub kind: RequestKind,
    pub subject: SubjectRef,
    pub requester: String,
    pub project_name: String,
    pub note: String,
    pub terms: Option<UsageTerms>,
    pub status: S,
    pub created_at: Timestamp,
}

impl<S: RequestLifecycle> Request<S> {
    /// Create a request in its initial status from an already-checked draft.
    pub fn from_draft(draft: RequestDraft, created_at: Timestamp) -> Self {
        Self {
            id: uuid::Uuid::new_v4(),
            kind: S::KIND,
            subject: draft.subject,
            requester: draft.requester.trim().to_string(),
            project_name: draft.project_name.trim().to_string(),
            note: draft.note.trim().to_string(),
            terms: draft.terms,
            status: S::initial(),
            created_at,
        }
    }
}

impl<S: RequestLifecycle> Tracked for Request<S> {
    type Status = S;
    const ENTITY: &'static str = "request";

    fn id(&self) -> RecordId {
        self.id
    }

    fn status(&self) -> S {
        self.status
    }

    fn set_status(&mut self, status: S) {
        self.status = status;
    }
}

/// A caller's requests of one kind, newest first.
pub type RequestList<S> = TrackedList<Request<S>>;

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
