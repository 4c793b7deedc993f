//! Shared query parameter types for API handlers.

use castline_core::error::CoreError;
use castline_core::facets::{Facet, FacetSelection};
use castline_core::search::{clamp_limit, clamp_offset, DEFAULT_SEARCH_LIMIT, MAX_SEARCH_LIMIT};
use serde::Deserialize;

/// Pagination parameters for list endpoints.
#[derive(Debug, Default, Deserialize)]
pub struct PaginationParams {
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}

impl PaginationParams {
    /// `(limit, offset)` after clamping to the search defaults.
    pub fn resolve(&self) -> (i64, i64) {
        (
            clamp_limit(self.limit, DEFAULT_SEARCH_LIMIT, MAX_SEARCH_LIMIT),
            clamp_offset(self.offset),
        )
    }
}

/// Query parameters for `GET /actors`.
///
/// Every facet accepts `all` (or omission) to mean no filtering.
#[derive(Debug, Default, Deserialize)]
pub struct ActorSearchParams {
    #[serde(default)]
    pub q: String,
    pub clearance: Option<String>,
    pub age_range: Option<String>,
    pub gender: Option<String>,
    pub accent: Option<String>,
    pub geography: Option<String>,
    pub use_case: Option<String>,
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}

impl ActorSearchParams {
    /// Parse the raw facet strings, rejecting unknown values.
    pub fn facets(&self) -> Result<FacetSelection, CoreError> {
        Ok(FacetSelection {
            clearance: Facet::parse(self.clearance.as_deref())?,
            age_range: Facet::parse(self.age_range.as_deref())?,
            gender: Facet::parse(self.gender.as_deref())?,
            accent: Facet::parse(self.accent.as_deref())?,
            geography: Facet::parse(self.geography.as_deref())?,
            use_case: Facet::parse(self.use_case.as_deref())?,
        })
    }

    pub fn page(&self) -> PaginationParams {
        PaginationParams {
            limit: self.limit,
            offset: self.offset,
        }
    }
}

/// Query parameters for `GET /search`.
#[derive(Debug, Default, Deserialize)]
pub struct CatalogSearchParams {
    #[serde(default)]
    pub q: String,
    pub entity_type: Option<String>,
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}

impl CatalogSearchParams {
    pub fn page(&self) -> PaginationParams {
        PaginationParams {
            limit: self.limit,
            offset: self.offset,
        }
    }
}

/// Query parameter to include archived conversations in list results.
#[derive(Debug, Default, Deserialize)]
pub struct IncludeArchivedParams {
    #[serde(default)]
    pub include_archived: bool,
}

/// Query parameter for `GET /activity`.
#[derive(Debug, Default, Deserialize)]
pub struct ActivityParams {
    pub limit: Option<i64>,
}

#[cfg(test)]
mod tests {
    use castline_core::facets::{Accent, Gender};

    use super::*;

    #[test]
    fn missing_facets_mean_all() {
        let params = ActorSearchParams::default();
        assert!(params.facets().unwrap().is_unfiltered());
    }

    #[test]
    fn facets_parse_wire_values() {
        let params = ActorSearchParams {
            gender: Some("female".into()),
            accent: Some("all".into()),
            ..Default::default()
        };
        let facets = params.facets().unwrap();
        assert_eq!(facets.gender, Facet::<Gender>::Only(Gender::Female));
        assert_eq!(facets.accent, Facet::<Accent>::All);
    }

    #[test]
    fn unknown_facet_is_rejected() {
        let params = ActorSearchParams {
            clearance: Some("maybe".into()),
            ..Default::default()
        };
        assert!(params.facets().is_err());
    }

    #[test]
    fn pagination_is_clamped() {
        let page = PaginationParams {
            limit: Some(10_000),
            offset: Some(-4),
        };
        assert_eq!(page.resolve(), (MAX_SEARCH_LIMIT, 0));
    }
}
