//! List page state: filters, sort, pagination snapshot and loaded ads.
//!
//! SYSTEM CONTEXT
//! ==============
//! The list page holds one `RwSignal<ListState>`. A memo over [`ListState::query`]
//! drives refetching, so only changes to filters, sort or the current page
//! issue a request.
//!
//! DESIGN
//! ======
//! Every request is tagged with `request_seq`. A response is applied only if
//! its tag is still the latest one, so a slow response for an old filter set
//! cannot overwrite a newer result.

#[cfg(test)]
#[path = "list_test.rs"]
mod list_test;

use crate::net::error::ApiError;
use crate::net::query::{AdsQuery, SortOption};
use crate::net::types::{AdStatus, AdsResponse, Advertisement, PaginationResponse};

/// Page size of the ad list.
pub const PAGE_SIZE: u32 = 10;

/// How many ads are sampled at mount to build the category options.
pub const CATEGORY_SAMPLE_LIMIT: u32 = 100;

/// User-editable list filters. Empty fields are not sent.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FilterState {
    pub statuses: Vec<AdStatus>,
    pub category_id: Option<u64>,
    pub min_price: Option<f64>,
    pub max_price: Option<f64>,
    pub search: String,
}

impl FilterState {
    /// Copy with `status` added or removed, keeping selection order.
    pub fn with_status_toggled(&self, status: AdStatus) -> Self {
        let mut next = self.clone();
        if let Some(pos) = next.statuses.iter().position(|s| *s == status) {
            next.statuses.remove(pos);
        } else {
            next.statuses.push(status);
        }
        next
    }
}

/// One entry of the category `<select>`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CategoryOption {
    pub id: u64,
    pub name: String,
}

/// Distinct categories of `ads` in first-seen order.
///
/// When the same id appears with different names the last name wins.
pub fn derive_categories(ads: &[Advertisement]) -> Vec<CategoryOption> {
    let mut options: Vec<CategoryOption> = Vec::new();
    for ad in ads {
        match options.iter_mut().find(|option| option.id == ad.category_id) {
            Some(option) => option.name.clone_from(&ad.category),
            None => options.push(CategoryOption { id: ad.category_id, name: ad.category.clone() }),
        }
    }
    options
}

/// Complete list page state.
#[derive(Clone, Debug, PartialEq)]
pub struct ListState {
    pub ads: Vec<Advertisement>,
    pub loading: bool,
    pub filters: FilterState,
    pub sort: SortOption,
    pub pagination: PaginationResponse,
    pub categories: Vec<CategoryOption>,
    pub request_seq: u64,
}

impl Default for ListState {
    fn default() -> Self {
        Self {
            ads: Vec::new(),
            loading: false,
            filters: FilterState::default(),
            sort: SortOption::default(),
            pagination: PaginationResponse {
                current_page: 1,
                total_pages: 0,
                total_items: 0,
                items_per_page: PAGE_SIZE,
            },
            categories: Vec::new(),
            request_seq: 0,
        }
    }
}

impl ListState {
    /// Request parameters for the current filters, sort and page.
    pub fn query(&self) -> AdsQuery {
        AdsQuery {
            page: Some(self.pagination.current_page),
            limit: Some(self.pagination.items_per_page),
            statuses: self.filters.statuses.clone(),
            category_id: self.filters.category_id,
            min_price: self.filters.min_price,
            max_price: self.filters.max_price,
            search: Some(self.filters.search.clone()),
            ..AdsQuery::default()
        }
        .sorted(self.sort.field(), self.sort.order())
    }

    /// Replace the filters and go back to the first page.
    pub fn set_filters(&mut self, filters: FilterState) {
        self.filters = filters;
        self.pagination.current_page = 1;
    }

    pub fn set_sort(&mut self, sort: SortOption) {
        self.sort = sort;
    }

    pub fn set_page(&mut self, page: u32) {
        self.pagination.current_page = page.max(1);
    }

    /// Mark a request as in flight and return its sequence tag.
    pub fn begin_request(&mut self) -> u64 {
        self.request_seq += 1;
        self.loading = true;
        self.request_seq
    }

    /// Apply a list response tagged `seq`.
    ///
    /// Returns `false` (and changes nothing) when a newer request has been
    /// issued since. On failure the list degrades to a single empty page.
    pub fn apply_response(&mut self, seq: u64, result: Result<AdsResponse, ApiError>) -> bool {
        if seq != self.request_seq {
            return false;
        }
        match result {
            Ok(response) => {
                let pagination = response
                    .pagination
                    .unwrap_or_else(|| self.synthesized_pagination(response.ads.len()));
                self.ads = response.ads;
                self.pagination = pagination;
            }
            Err(_) => {
                self.ads.clear();
                self.pagination.total_pages = 1;
                self.pagination.total_items = 0;
            }
        }
        self.loading = false;
        true
    }

    fn synthesized_pagination(&self, count: usize) -> PaginationResponse {
        let total_items = u32::try_from(count).unwrap_or(u32::MAX);
        let per_page = self.pagination.items_per_page.max(1);
        PaginationResponse {
            total_pages: total_items.div_ceil(per_page),
            total_items,
            ..self.pagination
        }
    }
}
