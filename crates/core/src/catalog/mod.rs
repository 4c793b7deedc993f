//! Marketplace catalog: actors, studios, agencies and casting calls.
//!
//! Catalog records are read-only at runtime. The only mutable bit of catalog
//! state, the per-user `applied` flag on casting calls, is tracked outside
//! the catalog (see `castline_store::CastingRepo`) and overlaid on read.

pub mod fixtures;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::facets::{Accent, AgeRange, Clearance, Gender, Geography, UseCase};
use crate::types::DbId;

// ---------------------------------------------------------------------------
// Usage policy
// ---------------------------------------------------------------------------

/// Terms a target (actor, studio or agency) accepts requests under.
///
/// A usage request passes policy only if its use case, territory and
/// duration are each declared here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UsagePolicy {
    pub use_cases: Vec<UseCase>,
    pub territories: Vec<Geography>,
    pub durations: Vec<String>,
}

impl UsagePolicy {
    /// Whether `duration` is one of the declared durations (case-insensitive,
    /// surrounding whitespace ignored).
    pub fn allows_duration(&self, duration: &str) -> bool {
        let wanted = duration.trim();
        self.durations.iter().any(|d| d.eq_ignore_ascii_case(wanted))
    }
}

// ---------------------------------------------------------------------------
// Entities
// ---------------------------------------------------------------------------

/// Precomputed facet metadata for an actor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActorFacets {
    pub clearance: Clearance,
    pub age_range: AgeRange,
    pub gender: Gender,
    pub accent: Accent,
    pub geography: Geography,
    pub permitted_uses: Vec<UseCase>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Actor {
    pub id: DbId,
    pub name: String,
    pub specialty: String,
    pub bio: String,
    pub skills: Vec<String>,
    pub location: String,
    /// 0.0 - 5.0
    pub rating: f32,
    pub rate_range: String,
    pub verified: bool,
    pub facets: ActorFacets,
    pub policy: UsagePolicy,
}

impl Actor {
    /// Whether any searchable field (name, specialty, location, accent
    /// label or a skill) contains `query`.
    ///
    /// `query` must already be lowercased. Each field is matched on its own,
    /// so a query never spans two fields.
    pub fn matches_text(&self, query: &str) -> bool {
        let contains = |field: &str| field.to_lowercase().contains(query);
        contains(&self.name)
            || contains(&self.specialty)
            || contains(&self.location)
            || contains(self.facets.accent.label())
            || self.skills.iter().any(|skill| contains(skill))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Studio {
    pub id: DbId,
    pub name: String,
    pub description: String,
    pub location: String,
    pub studio_type: String,
    pub project_count: u32,
    pub verified: bool,
    pub policy: UsagePolicy,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Agency {
    pub id: DbId,
    pub name: String,
    pub description: String,
    pub location: String,
    pub specialties: Vec<String>,
    pub roster_size: u32,
    pub verified: bool,
    pub policy: UsagePolicy,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CastingCall {
    pub id: DbId,
    pub title: String,
    pub studio: String,
    pub role: String,
    pub description: String,
    pub requirements: Vec<String>,
    pub budget: String,
    pub deadline: NaiveDate,
    #[serde(default)]
    pub applied: bool,
}

// ---------------------------------------------------------------------------
// Subject references
// ---------------------------------------------------------------------------

/// Kind of catalog entity a request or conversation refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SubjectKind {
    Actor,
    Studio,
    Agency,
}

impl SubjectKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Actor => "actor",
            Self::Studio => "studio",
            Self::Agency => "agency",
        }
    }
}

/// Reference to a catalog entity by kind and id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SubjectRef {
    pub kind: SubjectKind,
    pub id: DbId,
}

impl SubjectRef {
    pub const fn actor(id: DbId) -> Self {
        Self {
            kind: SubjectKind::Actor,
            id,
        }
    }

    pub const fn studio(id: DbId) -> Self {
        Self {
            kind: SubjectKind::Studio,
            id,
        }
    }

    pub const fn agency(id: DbId) -> Self {
        Self {
            kind: SubjectKind::Agency,
            id,
        }
    }
}

// ---------------------------------------------------------------------------
// Catalog
// ---------------------------------------------------------------------------

/// The full read-only entity catalog.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Catalog {
    pub actors: Vec<Actor>,
    pub studios: Vec<Studio>,
    pub agencies: Vec<Agency>,
    pub casting_calls: Vec<CastingCall>,
}

impl Catalog {
    pub fn actor(&self, id: DbId) -> Result<&Actor, CoreError> {
        self.actors
            .iter()
            .find(|a| a.id == id)
            .ok_or(CoreError::NotFound { entity: "actor", id })
    }

    pub fn studio(&self, id: DbId) -> Result<&Studio, CoreError> {
        self.studios
            .iter()
            .find(|s| s.id == id)
            .ok_or(CoreError::NotFound {
                entity: "studio",
                id,
            })
    }

    pub fn agency(&self, id: DbId) -> Result<&Agency, CoreError> {
        self.agencies
            .iter()
            .find(|a| a.id == id)
            .ok_or(CoreError::NotFound {
                entity: "agency",
                id,
            })
    }

    pub fn casting_call(&self, id: DbId) -> Result<&CastingCall, CoreError> {
        self.casting_calls
            .iter()
            .find(|c| c.id == id)
            .ok_or(CoreError::NotFound {
                entity: "casting_call",
                id,
            })
    }

    /// Resolve the usage policy of any subject.
    pub fn policy_for(&self, subject: SubjectRef) -> Result<&UsagePolicy, CoreError> {
        match subject.kind {
            SubjectKind::Actor => self.actor(subject.id).map(|a| &a.policy),
            SubjectKind::Studio => self.studio(subject.id).map(|s| &s.policy),
            SubjectKind::Agency => self.agency(subject.id).map(|a| &a.policy),
        }
    }

    /// Display name of any subject.
    pub fn subject_name(&self, subject: SubjectRef) -> Result<&str, CoreError> {
        match subject.kind {
            SubjectKind::Actor => self.actor(subject.id).map(|a| a.name.as_str()),
            SubjectKind::Studio => self.studio(subject.id).map(|s| s.name.as_str()),
            SubjectKind::Agency => self.agency(subject.id).map(|a| a.name.as_str()),
        }
    }
}
