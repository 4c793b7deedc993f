//! Handlers for catalog browsing and search.
//!
//! The catalog is read-only fixture data shared through the gateway
//! context; search is synchronous and never goes through an action tracker.

use std::collections::BTreeMap;

use axum::extract::{Path, Query, State};
use axum::response::{IntoResponse, Response};
use axum::Json;
use castline_core::facets::{
    Accent, AgeRange, Clearance, FacetValue, Gender, Geography, UseCase, ALL,
};
use castline_core::search::{search_actors, search_catalog, EntityKind};
use castline_core::types::DbId;

use crate::error::AppResult;
use crate::query::{ActorSearchParams, CatalogSearchParams};
use crate::response::{DataResponse, Page};
use crate::state::AppState;

// ---------------------------------------------------------------------------
// GET /actors
// ---------------------------------------------------------------------------

/// Faceted actor search, ranked by match score.
///
/// Matches borrow from the shared catalog, so the response is rendered here.
pub async fn list_actors(
    State(state): State<AppState>,
    Query(params): Query<ActorSearchParams>,
) -> AppResult<Response> {
    let facets = params.facets()?;
    let (limit, offset) = params.page().resolve();
    let catalog = &state.gateway.context().catalog;

    let matches = search_actors(&catalog.actors, &params.q, &facets);
    tracing::debug!(
        query = %params.q,
        unfiltered = facets.is_unfiltered(),
        hits = matches.len(),
        "Actor search"
    );

    Ok(Json(DataResponse {
        data: Page::from_all(matches, limit, offset),
    })
    .into_response())
}

// ---------------------------------------------------------------------------
// GET /actors/{id}, /studios, /agencies
// ---------------------------------------------------------------------------

pub async fn get_actor(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let actor = state.gateway.context().catalog.actor(id)?.clone();
    Ok(Json(DataResponse { data: actor }))
}

pub async fn list_studios(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let studios = state.gateway.context().catalog.studios.clone();
    Ok(Json(DataResponse { data: studios }))
}

pub async fn get_studio(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let studio = state.gateway.context().catalog.studio(id)?.clone();
    Ok(Json(DataResponse { data: studio }))
}

pub async fn list_agencies(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let agencies = state.gateway.context().catalog.agencies.clone();
    Ok(Json(DataResponse { data: agencies }))
}

pub async fn get_agency(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let agency = state.gateway.context().catalog.agency(id)?.clone();
    Ok(Json(DataResponse { data: agency }))
}

// ---------------------------------------------------------------------------
// GET /facets
// ---------------------------------------------------------------------------

fn options<T: FacetValue>() -> (&'static str, Vec<&'static str>) {
    let mut values = vec![ALL];
    values.extend(T::options().iter().map(|v| v.as_str()));
    (T::NAME, values)
}

/// Every facet with its selectable wire values, `all` first.
pub async fn list_facets() -> AppResult<impl IntoResponse> {
    let facets: BTreeMap<&'static str, Vec<&'static str>> = [
        options::<Clearance>(),
        options::<AgeRange>(),
        options::<Gender>(),
        options::<Accent>(),
        options::<Geography>(),
        options::<UseCase>(),
    ]
    .into_iter()
    .collect();
    Ok(Json(DataResponse { data: facets }))
}

// ---------------------------------------------------------------------------
// GET /search
// ---------------------------------------------------------------------------

/// Text search across actors, studios, agencies and casting calls.
pub async fn search_all(
    State(state): State<AppState>,
    Query(params): Query<CatalogSearchParams>,
) -> AppResult<Response> {
    let kind = match params.entity_type.as_deref().map(str::trim) {
        None | Some("") | Some(ALL) => None,
        Some(raw) => Some(EntityKind::parse(raw)?),
    };
    let (limit, offset) = params.page().resolve();

    let hits = search_catalog(&state.gateway.context().catalog, &params.q, kind);
    Ok(Json(DataResponse {
        data: Page::from_all(hits, limit, offset),
    })
    .into_response())
}
