//! Shared response envelope types for API handlers.
//!
//! All API responses use a `{ "data": ... }` envelope.

use serde::Serialize;

/// Standard `{ "data": T }` response envelope.
#[derive(Debug, Serialize)]
pub struct DataResponse<T: Serialize> {
    pub data: T,
}

/// One page of a longer result list.
#[derive(Debug, Serialize)]
pub struct Page<T: Serialize> {
    pub total: usize,
    pub limit: i64,
    pub offset: i64,
    pub items: Vec<T>,
}

impl<T: Serialize> Page<T> {
    /// Slice `items` by `limit`/`offset`, keeping the unpaged total.
    pub fn from_all(items: Vec<T>, limit: i64, offset: i64) -> Self {
        let total = items.len();
        let items = items
            .into_iter()
            .skip(usize::try_from(offset).unwrap_or(0))
            .take(usize::try_from(limit).unwrap_or(0))
            .collect();
        Self {
            total,
            limit,
            offset,
            items,
        }
    }
}
