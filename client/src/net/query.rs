//! Query-parameter builders for the list and stats endpoints.
//!
//! Only non-empty filters are serialized. Status lists use the bracketed
//! `status[]` key repeated once per value, which is what the moderation
//! service's query parser expects for arrays.

#[cfg(test)]
#[path = "query_test.rs"]
mod query_test;

use super::types::AdStatus;

/// Sortable fields of `GET /ads`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SortField {
    #[default]
    CreatedAt,
    Price,
    Priority,
}

impl SortField {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::CreatedAt => "createdAt",
            Self::Price => "price",
            Self::Priority => "priority",
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SortOrder {
    Asc,
    #[default]
    Desc,
}

impl SortOrder {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Asc => "asc",
            Self::Desc => "desc",
        }
    }
}

/// The sort choices offered by the list page.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SortOption {
    #[default]
    NewestFirst,
    OldestFirst,
    PriceDesc,
    PriceAsc,
    PriorityDesc,
}

impl SortOption {
    pub const ALL: [Self; 5] = [
        Self::NewestFirst,
        Self::OldestFirst,
        Self::PriceDesc,
        Self::PriceAsc,
        Self::PriorityDesc,
    ];

    pub fn field(self) -> SortField {
        match self {
            Self::NewestFirst | Self::OldestFirst => SortField::CreatedAt,
            Self::PriceDesc | Self::PriceAsc => SortField::Price,
            Self::PriorityDesc => SortField::Priority,
        }
    }

    pub fn order(self) -> SortOrder {
        match self {
            Self::OldestFirst | Self::PriceAsc => SortOrder::Asc,
            Self::NewestFirst | Self::PriceDesc | Self::PriorityDesc => SortOrder::Desc,
        }
    }

    /// `<select>` option value, e.g. `createdAt-desc`.
    pub fn value(self) -> String {
        format!("{}-{}", self.field().as_str(), self.order().as_str())
    }

    pub fn from_value(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|option| option.value() == value)
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::NewestFirst => "Новые сначала",
            Self::OldestFirst => "Старые сначала",
            Self::PriceDesc => "Цена по убыванию",
            Self::PriceAsc => "Цена по возрастанию",
            Self::PriorityDesc => "По приоритету",
        }
    }
}

/// Parameters of `GET /ads`. `None`/empty fields are left off the wire.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AdsQuery {
    pub page: Option<u32>,
    pub limit: Option<u32>,
    pub statuses: Vec<AdStatus>,
    pub category_id: Option<u64>,
    pub min_price: Option<f64>,
    pub max_price: Option<f64>,
    pub search: Option<String>,
    pub sort_by: Option<SortField>,
    pub sort_order: Option<SortOrder>,
}

impl AdsQuery {
    /// A bare `limit=` query with no paging, filters or sort.
    pub fn limited(limit: u32) -> Self {
        Self { limit: Some(limit), ..Self::default() }
    }

    #[must_use]
    pub fn sorted(mut self, field: SortField, order: SortOrder) -> Self {
        self.sort_by = Some(field);
        self.sort_order = Some(order);
        self
    }

    /// Flatten into ordered `(key, value)` pairs.
    ///
    /// Falsy filter values (zero category id, zero prices, blank search) are
    /// treated as unset.
    pub fn to_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(page) = self.page {
            pairs.push(("page", page.to_string()));
        }
        if let Some(limit) = self.limit {
            pairs.push(("limit", limit.to_string()));
        }
        if let Some(field) = self.sort_by {
            pairs.push(("sortBy", field.as_str().to_owned()));
        }
        if let Some(order) = self.sort_order {
            pairs.push(("sortOrder", order.as_str().to_owned()));
        }
        for status in &self.statuses {
            pairs.push(("status[]", status.as_str().to_owned()));
        }
        if let Some(category_id) = self.category_id.filter(|id| *id != 0) {
            pairs.push(("categoryId", category_id.to_string()));
        }
        if let Some(min_price) = self.min_price.filter(|v| *v != 0.0) {
            pairs.push(("minPrice", min_price.to_string()));
        }
        if let Some(max_price) = self.max_price.filter(|v| *v != 0.0) {
            pairs.push(("maxPrice", max_price.to_string()));
        }
        if let Some(search) = self.search.as_deref().filter(|s| !s.is_empty()) {
            pairs.push(("search", search.to_owned()));
        }
        pairs
    }
}

/// Period parameter accepted by every stats endpoint.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PeriodParam {
    Today,
    #[default]
    Week,
    Month,
    Custom,
}

impl PeriodParam {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Today => "today",
            Self::Week => "week",
            Self::Month => "month",
            Self::Custom => "custom",
        }
    }
}

/// Parameters shared by the four stats endpoints.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StatsQuery {
    pub period: PeriodParam,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
}

impl StatsQuery {
    pub fn for_period(period: PeriodParam) -> Self {
        Self { period, start_date: None, end_date: None }
    }

    pub fn to_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = vec![("period", self.period.as_str().to_owned())];
        if let Some(start) = &self.start_date {
            pairs.push(("startDate", start.clone()));
        }
        if let Some(end) = &self.end_date {
            pairs.push(("endDate", end.clone()));
        }
        pairs
    }
}
