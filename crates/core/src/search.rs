//! Catalog search and matching.
//!
//! Two entry points:
//!
//! - [`search_actors`]: faceted actor search with a heuristic match score.
//! - [`search_catalog`]: plain text search across every entity kind.
//!
//! Lives in `core` so the API and any future CLI tooling rank results the
//! same way.

use serde::{Deserialize, Serialize};

use crate::catalog::{Actor, Agency, CastingCall, Catalog, Studio};
use crate::error::CoreError;
use crate::facets::FacetSelection;

// ---------------------------------------------------------------------------
// Score weights
// ---------------------------------------------------------------------------

/// Points per rating star (ratings are 0.0 - 5.0).
pub const SCORE_PER_RATING_POINT: f32 = 15.0;

/// Bonus for the most permissive clearance tier.
pub const SCORE_CLEARANCE_BONUS: u8 = 10;

/// Bonus when the selected use case is in the actor's permitted uses.
pub const SCORE_USE_CASE_BONUS: u8 = 8;

/// Bonus when the query text appears in one of the actor's searchable fields.
pub const SCORE_TEXT_BONUS: u8 = 6;

/// Upper bound of any match score.
pub const MAX_MATCH_SCORE: u8 = 99;

// ---------------------------------------------------------------------------
// Pagination defaults
// ---------------------------------------------------------------------------

/// Default number of search results per page.
pub const DEFAULT_SEARCH_LIMIT: i64 = 20;

/// Maximum number of search results per page.
pub const MAX_SEARCH_LIMIT: i64 = 100;

// ---------------------------------------------------------------------------
// Entity type constants
// ---------------------------------------------------------------------------

/// Valid entity types for unified search.
pub const SEARCHABLE_ENTITY_TYPES: &[&str] = &["actor", "studio", "agency", "casting_call"];

/// Check whether an entity type is searchable.
pub fn is_valid_entity_type(entity_type: &str) -> bool {
    SEARCHABLE_ENTITY_TYPES.contains(&entity_type)
}

// ---------------------------------------------------------------------------
// Query normalisation
// ---------------------------------------------------------------------------

/// Trim and lowercase a raw query. Blank input yields `None`, which matches
/// everything.
pub fn normalize_query(query: &str) -> Option<String> {
    let trimmed = query.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_lowercase())
    }
}

/// Clamp a user-provided limit to valid bounds.
pub fn clamp_limit(limit: Option<i64>, default: i64, max: i64) -> i64 {
    limit.unwrap_or(default).max(1).min(max)
}

/// Clamp a user-provided offset to non-negative.
pub fn clamp_offset(offset: Option<i64>) -> i64 {
    offset.unwrap_or(0).max(0)
}

// ---------------------------------------------------------------------------
// Actor search
// ---------------------------------------------------------------------------

/// An actor that matched a search, with its score.
#[derive(Debug, Clone, Serialize)]
pub struct ActorMatch<'a> {
    pub actor: &'a Actor,
    pub score: u8,
}

/// Whether an actor's facet metadata satisfies every selected facet.
pub fn matches_facets(actor: &Actor, facets: &FacetSelection) -> bool {
    let meta = &actor.facets;
    facets.clearance.matches(meta.clearance)
        && facets.age_range.matches(meta.age_range)
        && facets.gender.matches(meta.gender)
        && facets.accent.matches(meta.accent)
        && facets.geography.matches(meta.geography)
        && facets.use_case.matches_any(&meta.permitted_uses)
}

/// Heuristic match score in `0..=MAX_MATCH_SCORE`.
///
/// `query` must already be normalised (see [`normalize_query`]).
pub fn match_score(actor: &Actor, facets: &FacetSelection, query: Option<&str>) -> u8 {
    let rating = if actor.rating.is_finite() {
        actor.rating.clamp(0.0, 5.0)
    } else {
        0.0
    };
    let mut score = (rating * SCORE_PER_RATING_POINT).round() as u32;

    if actor.facets.clearance.is_most_permissive() {
        score += u32::from(SCORE_CLEARANCE_BONUS);
    }
    if let Some(use_case) = facets.use_case.selected() {
        if actor.facets.permitted_uses.contains(&use_case) {
            score += u32::from(SCORE_USE_CASE_BONUS);
        }
    }
    if let Some(q) = query {
        if actor.matches_text(q) {
            score += u32::from(SCORE_TEXT_BONUS);
        }
    }

    score.min(u32::from(MAX_MATCH_SCORE)) as u8
}

/// Filter and rank actors.
///
/// An actor is kept when it satisfies every non-`all` facet and, for a
/// non-blank query, one of its searchable fields contains the query
/// case-insensitively. Results are ordered by non-increasing score; equal
/// scores keep catalog order.
pub fn search_actors<'a>(
    actors: &'a [Actor],
    query: &str,
    facets: &FacetSelection,
) -> Vec<ActorMatch<'a>> {
    let query = normalize_query(query);

    let mut matches: Vec<ActorMatch<'a>> = actors
        .iter()
        .filter(|actor| matches_facets(actor, facets))
        .filter(|actor| match &query {
            Some(q) => actor.matches_text(q),
            None => true,
        })
        .map(|actor| ActorMatch {
            actor,
            score: match_score(actor, facets, query.as_deref()),
        })
        .collect();

    // `sort_by` is stable, so ties keep catalog order.
    matches.sort_by(|a, b| b.score.cmp(&a.score));
    matches
}

// ---------------------------------------------------------------------------
// Unified catalog search
// ---------------------------------------------------------------------------

/// A hit from [`search_catalog`], tagged by entity type.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "entity_type", content = "entity", rename_all = "snake_case")]
pub enum CatalogHit<'a> {
    Actor(&'a Actor),
    Studio(&'a Studio),
    Agency(&'a Agency),
    CastingCall(&'a CastingCall),
}

/// Entity kind restriction for [`search_catalog`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityKind {
    Actor,
    Studio,
    Agency,
    CastingCall,
}

impl EntityKind {
    /// Parse an entity type string (see [`SEARCHABLE_ENTITY_TYPES`]).
    pub fn parse(entity_type: &str) -> Result<Self, CoreError> {
        match entity_type {
            "actor" => Ok(Self::Actor),
            "studio" => Ok(Self::Studio),
            "agency" => Ok(Self::Agency),
            "casting_call" => Ok(Self::CastingCall),
            other => Err(CoreError::Validation(format!(
                "Invalid entity_type '{other}'. Must be one of: {}",
                SEARCHABLE_ENTITY_TYPES.join(", ")
            ))),
        }
    }
}

fn contains(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(needle)
}

fn studio_matches(studio: &Studio, q: &str) -> bool {
    contains(&studio.name, q)
        || contains(&studio.description, q)
        || contains(&studio.location, q)
        || contains(&studio.studio_type, q)
}

fn agency_matches(agency: &Agency, q: &str) -> bool {
    contains(&agency.name, q)
        || contains(&agency.description, q)
        || contains(&agency.location, q)
        || agency.specialties.iter().any(|s| contains(s, q))
}

fn casting_call_matches(call: &CastingCall, q: &str) -> bool {
    contains(&call.title, q)
        || contains(&call.studio, q)
        || contains(&call.role, q)
        || contains(&call.description, q)
}

/// Text search across the whole catalog, optionally limited to one kind.
///
/// Hits are grouped by kind (actors, studios, agencies, casting calls), each
/// group in catalog order.
pub fn search_catalog<'a>(
    catalog: &'a Catalog,
    query: &str,
    kind: Option<EntityKind>,
) -> Vec<CatalogHit<'a>> {
    let query = normalize_query(query);
    let q = query.as_deref();
    let wanted = |k: EntityKind| kind.map_or(true, |only| only == k);

    let mut hits = Vec::new();

    if wanted(EntityKind::Actor) {
        hits.extend(
            catalog
                .actors
                .iter()
                .filter(|a| q.map_or(true, |q| a.matches_text(q)))
                .map(CatalogHit::Actor),
        );
    }
    if wanted(EntityKind::Studio) {
        hits.extend(
            catalog
                .studios
                .iter()
                .filter(|s| q.map_or(true, |q| studio_matches(s, q)))
                .map(CatalogHit::Studio),
        );
    }
    if wanted(EntityKind::Agency) {
        hits.extend(
            catalog
                .agencies
                .iter()
                .filter(|a| q.map_or(true, |q| agency_matches(a, q)))
                .map(CatalogHit::Agency),
        );
    }
    if wanted(EntityKind::CastingCall) {
        hits.extend(
            catalog
                .casting_calls
                .iter()
                .filter(|c| q.map_or(true, |q| casting_call_matches(c, q)))
                .map(CatalogHit::CastingCall),
        );
    }

    hits
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
