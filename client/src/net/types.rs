//! Wire DTOs for the moderation REST API.
//!
//! DESIGN
//! ======
//! These types mirror the external service's JSON payloads (camelCase) so that
//! serde round-trips stay lossless. Status, priority, action and reason values
//! are closed enums: a payload carrying an unknown value fails to decode
//! instead of leaking stringly-typed state into the UI.
//!
//! Object-shaped maps whose key order matters for display (`characteristics`,
//! category counts) decode into ordered pair lists rather than hash maps.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use std::fmt;
use std::marker::PhantomData;

use serde::de::{Error as _, MapAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Moderation status of an advertisement. Transitions are decided server-side.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AdStatus {
    Pending,
    Approved,
    Rejected,
    Draft,
}

impl AdStatus {
    /// All statuses in filter display order.
    pub const ALL: [Self; 4] = [Self::Pending, Self::Approved, Self::Rejected, Self::Draft];

    /// Query-string value.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Approved => "approved",
            Self::Rejected => "rejected",
            Self::Draft => "draft",
        }
    }

    /// Russian display label.
    pub fn label(self) -> &'static str {
        match self {
            Self::Pending => "На модерации",
            Self::Approved => "Одобрено",
            Self::Rejected => "Отклонено",
            Self::Draft => "Черновик",
        }
    }

    /// CSS modifier used by status chips.
    pub fn tone(self) -> &'static str {
        match self {
            Self::Pending => "warning",
            Self::Approved => "success",
            Self::Rejected => "error",
            Self::Draft => "default",
        }
    }
}

/// Review priority of an advertisement.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AdPriority {
    #[default]
    Normal,
    Urgent,
}

impl AdPriority {
    pub fn label(self) -> &'static str {
        match self {
            Self::Normal => "Обычное",
            Self::Urgent => "Срочное",
        }
    }

    pub fn tone(self) -> &'static str {
        match self {
            Self::Normal => "default",
            Self::Urgent => "error",
        }
    }
}

/// Kind of decision recorded in an ad's moderation history.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ModerationAction {
    Approved,
    Rejected,
    RequestChanges,
}

impl ModerationAction {
    pub fn label(self) -> &'static str {
        match self {
            Self::Approved => "Одобрено",
            Self::Rejected => "Отклонено",
            Self::RequestChanges => "На доработку",
        }
    }

    /// Chip tone, borrowed from the status the action resolves to.
    pub fn tone(self) -> &'static str {
        match self {
            Self::Approved => AdStatus::Approved.tone(),
            Self::Rejected => AdStatus::Rejected.tone(),
            Self::RequestChanges => AdStatus::Pending.tone(),
        }
    }
}

/// Fixed reason list accepted by the reject and request-changes endpoints.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RejectReason {
    #[serde(rename = "Запрещенный товар")]
    ProhibitedItem,
    #[serde(rename = "Неверная категория")]
    WrongCategory,
    #[serde(rename = "Некорректное описание")]
    InvalidDescription,
    #[serde(rename = "Проблемы с фото")]
    PhotoProblems,
    #[serde(rename = "Подозрение на мошенничество")]
    SuspectedFraud,
    /// Requires a free-text comment.
    #[serde(rename = "Другое")]
    Other,
}

impl RejectReason {
    pub const ALL: [Self; 6] = [
        Self::ProhibitedItem,
        Self::WrongCategory,
        Self::InvalidDescription,
        Self::PhotoProblems,
        Self::SuspectedFraud,
        Self::Other,
    ];

    /// Exact wire string, also used as the display label.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::ProhibitedItem => "Запрещенный товар",
            Self::WrongCategory => "Неверная категория",
            Self::InvalidDescription => "Некорректное описание",
            Self::PhotoProblems => "Проблемы с фото",
            Self::SuspectedFraud => "Подозрение на мошенничество",
            Self::Other => "Другое",
        }
    }

    pub fn from_wire(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|reason| reason.as_str() == value)
    }

    pub fn requires_comment(self) -> bool {
        self == Self::Other
    }
}

impl fmt::Display for RejectReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Seller summary embedded in an advertisement.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Seller {
    pub id: u64,
    pub name: String,
    /// String-encoded rating, displayed verbatim.
    pub rating: String,
    #[serde(deserialize_with = "deserialize_u64_from_number")]
    pub total_ads: u64,
    pub registered_at: String,
}

/// One append-only moderation log entry.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModerationHistoryEntry {
    pub id: u64,
    pub moderator_id: u64,
    pub moderator_name: String,
    pub action: ModerationAction,
    #[serde(default)]
    pub reason: Option<RejectReason>,
    #[serde(default)]
    pub comment: Option<String>,
    pub timestamp: String,
}

/// A marketplace listing under review.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Advertisement {
    pub id: u64,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub price: f64,
    pub category: String,
    pub category_id: u64,
    pub status: AdStatus,
    #[serde(default)]
    pub priority: AdPriority,
    pub created_at: String,
    pub updated_at: String,
    #[serde(default)]
    pub images: Vec<String>,
    pub seller: Seller,
    /// Free-form attributes in server order.
    #[serde(
        default,
        deserialize_with = "deserialize_ordered_pairs",
        serialize_with = "serialize_ordered_pairs"
    )]
    pub characteristics: Vec<(String, String)>,
    #[serde(default)]
    pub moderation_history: Vec<ModerationHistoryEntry>,
}

/// Server-computed pagination snapshot.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginationResponse {
    pub current_page: u32,
    pub total_pages: u32,
    pub total_items: u32,
    pub items_per_page: u32,
}

/// `GET /ads` response. Both fields tolerate absence; the list page
/// synthesizes pagination when the server omits it.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct AdsResponse {
    #[serde(default)]
    pub ads: Vec<Advertisement>,
    #[serde(default)]
    pub pagination: Option<PaginationResponse>,
}

/// Body of `POST /ads/:id/reject` and `POST /ads/:id/request-changes`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModerationRequest {
    pub reason: RejectReason,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
}

impl ModerationRequest {
    /// Build a request body. The comment is carried only for
    /// [`RejectReason::Other`]; for fixed reasons it is dropped.
    pub fn new(reason: RejectReason, comment: &str) -> Self {
        let comment = reason.requires_comment().then(|| comment.to_owned());
        Self { reason, comment }
    }
}

/// Response of the three moderation action endpoints.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ActionResponse {
    pub message: String,
    pub ad: Advertisement,
}

/// `GET /stats/summary` response.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatsSummary {
    #[serde(deserialize_with = "deserialize_u64_from_number")]
    pub total_reviewed: u64,
    #[serde(default, deserialize_with = "deserialize_u64_from_number")]
    pub total_reviewed_today: u64,
    #[serde(default, deserialize_with = "deserialize_u64_from_number")]
    pub total_reviewed_this_week: u64,
    #[serde(default, deserialize_with = "deserialize_u64_from_number")]
    pub total_reviewed_this_month: u64,
    pub approved_percentage: f64,
    pub rejected_percentage: f64,
    #[serde(default)]
    pub request_changes_percentage: f64,
    /// Average review time as reported by the service (seconds).
    pub average_review_time: f64,
}

/// One day of the activity series.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivityData {
    pub date: String,
    #[serde(deserialize_with = "deserialize_u64_from_number")]
    pub approved: u64,
    #[serde(deserialize_with = "deserialize_u64_from_number")]
    pub rejected: u64,
    #[serde(deserialize_with = "deserialize_u64_from_number")]
    pub request_changes: u64,
}

/// Totals of the three decision kinds.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DecisionsData {
    #[serde(deserialize_with = "deserialize_u64_from_number")]
    pub approved: u64,
    #[serde(deserialize_with = "deserialize_u64_from_number")]
    pub rejected: u64,
    #[serde(deserialize_with = "deserialize_u64_from_number")]
    pub request_changes: u64,
}

/// Category name → count mapping, kept in the order the server sent it.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CategoryCounts(pub Vec<(String, u64)>);

impl CategoryCounts {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
        self.0.iter().map(|(name, count)| (name.as_str(), *count))
    }
}

impl<'de> Deserialize<'de> for CategoryCounts {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserialize_ordered_pairs::<D, CountValue>(deserializer)
            .map(|pairs| Self(pairs.into_iter().map(|(name, CountValue(count))| (name, count)).collect()))
    }
}

impl Serialize for CategoryCounts {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serialize_ordered_pairs(&self.0, serializer)
    }
}

/// Per-moderator aggregate counters.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModeratorStats {
    #[serde(default, deserialize_with = "deserialize_u64_from_number")]
    pub total_reviewed: u64,
    #[serde(default, deserialize_with = "deserialize_u64_from_number")]
    pub today_reviewed: u64,
    #[serde(default, deserialize_with = "deserialize_u64_from_number")]
    pub this_week_reviewed: u64,
    #[serde(default, deserialize_with = "deserialize_u64_from_number")]
    pub this_month_reviewed: u64,
    #[serde(default)]
    pub average_review_time: f64,
    #[serde(default)]
    pub approval_rate: f64,
}

/// The moderator operating the console, from `GET /moderators/me`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Moderator {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub role: String,
    #[serde(default)]
    pub statistics: ModeratorStats,
    #[serde(default)]
    pub permissions: Vec<String>,
}

/// Integer-compatible count used inside ordered maps.
struct CountValue(u64);

impl<'de> Deserialize<'de> for CountValue {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserialize_u64_from_number(deserializer).map(CountValue)
    }
}

fn deserialize_ordered_pairs<'de, D, V>(deserializer: D) -> Result<Vec<(String, V)>, D::Error>
where
    D: Deserializer<'de>,
    V: Deserialize<'de>,
{
    struct PairsVisitor<V>(PhantomData<V>);

    impl<'de, V> Visitor<'de> for PairsVisitor<V>
    where
        V: Deserialize<'de>,
    {
        type Value = Vec<(String, V)>;

        fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("a JSON object")
        }

        fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
        where
            A: MapAccess<'de>,
        {
            let mut pairs = Vec::with_capacity(map.size_hint().unwrap_or(0));
            while let Some((key, value)) = map.next_entry::<String, V>()? {
                pairs.push((key, value));
            }
            Ok(pairs)
        }
    }

    deserializer.deserialize_map(PairsVisitor(PhantomData))
}

#[allow(clippy::ptr_arg)]
fn serialize_ordered_pairs<S, V>(pairs: &Vec<(String, V)>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
    V: Serialize,
{
    serializer.collect_map(pairs.iter().map(|(key, value)| (key, value)))
}

fn deserialize_u64_from_number<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    match value {
        serde_json::Value::Number(number) => {
            if let Some(int) = number.as_u64() {
                return Ok(int);
            }
            #[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation, clippy::cast_sign_loss)]
            if let Some(float) = number.as_f64()
                && float.is_finite()
                && float.fract() == 0.0
                && float >= 0.0
                && float <= u64::MAX as f64
            {
                return Ok(float as u64);
            }
            Err(D::Error::custom("expected non-negative integer-compatible number"))
        }
        _ => Err(D::Error::custom("expected number")),
    }
}
