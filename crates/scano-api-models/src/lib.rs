#![forbid(unsafe_code)]
#![deny(
    warnings,
    dead_code,
    unused,
    unused_imports,
    unused_must_use,
    unreachable_pub,
    clippy::all,
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    rustdoc::broken_intra_doc_links,
    rustdoc::bare_urls,
    missing_docs
)]
//! Shared HTTP DTOs for the Scano monitoring API.
//!
//! The remote service owns every business rule (matching, sentiment scoring,
//! aggregation); these types only pin down the wire contract the web client
//! consumes. Ids are Mongo-style hex strings minted by the server and are kept
//! as plain `String`s on purpose.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// RFC9457-compatible problem document returned on request failures.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ProblemDetails {
    #[serde(rename = "type", default)]
    /// URI reference identifying the problem type.
    pub kind: Option<String>,
    /// Short, human-readable summary of the failure.
    pub title: String,
    /// HTTP status code associated with the failure.
    pub status: u16,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    /// Detailed diagnostic message when the server provides one.
    pub detail: Option<String>,
}

/// Sentiment label attached to a matched material.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum SentimentLabel {
    /// Positive tone.
    Positive,
    /// Negative tone.
    Negative,
    /// No clear tone.
    Neutral,
}

impl SentimentLabel {
    /// Wire/CSS token for the label.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Positive => "positive",
            Self::Negative => "negative",
            Self::Neutral => "neutral",
        }
    }

    /// All labels in display order.
    #[must_use]
    pub const fn all() -> [Self; 3] {
        [Self::Positive, Self::Negative, Self::Neutral]
    }
}

/// Per-sentiment counters rolled up by the server.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct SentimentCounters {
    /// Materials scored positive.
    #[serde(default)]
    pub positive: u64,
    /// Materials scored negative.
    #[serde(default)]
    pub negative: u64,
    /// Materials with no clear tone.
    #[serde(default)]
    pub neutral: u64,
    /// Total matched materials.
    #[serde(default)]
    pub total: u64,
}

/// Rolling counter windows surfaced on the theme dashboard.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ThemeCounters {
    /// Counters for the current day.
    #[serde(default)]
    pub today: SentimentCounters,
    /// Counters for the trailing week.
    #[serde(default)]
    pub week: SentimentCounters,
    /// Counters since the theme was created.
    #[serde(default)]
    pub total: SentimentCounters,
}

/// What a theme monitors.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ThemeKind {
    /// Free keyword query.
    Keywords,
    /// Mentions of an organisation.
    Company,
    /// Mentions of a person.
    Person,
}

/// Source channel classes a theme can filter on.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum SourceKind {
    /// Social networks.
    Social,
    /// Online news outlets.
    News,
    /// Blogs and personal sites.
    Blog,
    /// Messenger channels.
    Messenger,
    /// Video platforms.
    Video,
}

/// Material classes a theme can filter on.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum MaterialKind {
    /// Original post or article.
    Post,
    /// Comment under a post.
    Comment,
    /// Repost/share of an existing material.
    Repost,
}

/// Search domains a theme query runs against.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum SearchDomain {
    /// Everything the collector indexes.
    All,
    /// News outlets only.
    News,
    /// Social content only.
    Social,
}

/// Compact theme snapshot used by pickers and the reference cache.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ThemeSummary {
    #[serde(rename = "_id")]
    /// Server-assigned theme id.
    pub id: String,
    /// Display name of the theme.
    pub name: String,
}

/// Saved monitoring query with its rolling counters.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Theme {
    #[serde(rename = "_id")]
    /// Server-assigned theme id.
    pub id: String,
    /// Display name of the theme.
    pub name: String,
    /// What the theme monitors.
    pub kind: ThemeKind,
    /// Keywords that must match.
    #[serde(default)]
    pub keywords: Vec<String>,
    /// Keywords that exclude a material when present.
    #[serde(default)]
    pub minus_keywords: Vec<String>,
    /// Source channel classes to include.
    #[serde(default)]
    pub source_kinds: Vec<SourceKind>,
    /// Material classes to include.
    #[serde(default)]
    pub material_kinds: Vec<MaterialKind>,
    /// Search domains the query runs against.
    #[serde(default)]
    pub search_domains: Vec<SearchDomain>,
    /// Content language filter (ISO 639-1), when restricted.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub language: Option<String>,
    /// Source names excluded from matching.
    #[serde(default)]
    pub excluded_sources: Vec<String>,
    /// Rolling aggregate counters.
    #[serde(default)]
    pub counters: ThemeCounters,
}

impl Theme {
    /// Compact snapshot for pickers and the reference cache.
    #[must_use]
    pub fn summary(&self) -> ThemeSummary {
        ThemeSummary {
            id: self.id.clone(),
            name: self.name.clone(),
        }
    }
}

/// Create/update payload for a theme.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ThemePayload {
    /// Display name of the theme.
    pub name: String,
    /// What the theme monitors.
    pub kind: ThemeKind,
    /// Keywords that must match.
    pub keywords: Vec<String>,
    /// Keywords that exclude a material when present.
    pub minus_keywords: Vec<String>,
    /// Source channel classes to include.
    pub source_kinds: Vec<SourceKind>,
    /// Material classes to include.
    pub material_kinds: Vec<MaterialKind>,
    /// Search domains the query runs against.
    pub search_domains: Vec<SearchDomain>,
    /// Content language filter, when restricted.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    /// Source names excluded from matching.
    pub excluded_sources: Vec<String>,
}

/// Origin descriptor attached to a material.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MaterialSource {
    /// Source display name.
    pub name: String,
    /// Source site/channel URL.
    pub url: String,
    /// Source channel class.
    pub kind: SourceKind,
}

/// A single matched content item under a theme.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Material {
    #[serde(rename = "_id")]
    /// Server-assigned material id.
    pub id: String,
    /// Owning theme id.
    pub theme_id: String,
    /// Material headline.
    pub title: String,
    /// Body text or summary.
    #[serde(default)]
    pub description: String,
    /// Canonical URL of the content.
    pub url: String,
    /// Origin descriptor.
    pub source: MaterialSource,
    /// Server-scored sentiment.
    pub sentiment: SentimentLabel,
    /// Operator-applied tags.
    #[serde(default)]
    pub tags: Vec<String>,
    /// Lead image URL, when extracted.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub image: Option<String>,
    /// When the collector indexed the material.
    pub created_at: DateTime<Utc>,
    /// When the source published it, when known.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub published_at: Option<DateTime<Utc>>,
}

/// Patch payload for operator edits on a material.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MaterialPatch {
    /// Replacement sentiment, when re-toned by an operator.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sentiment: Option<SentimentLabel>,
    /// Replacement tag set.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
}

/// Operator/admin role within an organisation.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    /// Full access incl. user management.
    Admin,
    /// Can edit themes and materials.
    Moderator,
    /// Read-only access.
    Guest,
}

impl UserRole {
    /// Wire token for the role.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::Moderator => "moderator",
            Self::Guest => "guest",
        }
    }

    /// All roles in privilege order.
    #[must_use]
    pub const fn all() -> [Self; 3] {
        [Self::Admin, Self::Moderator, Self::Guest]
    }
}

/// Operator account scoped to an organisation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct User {
    #[serde(rename = "_id")]
    /// Server-assigned user id.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Login email.
    pub email: String,
    /// Access role.
    pub role: UserRole,
    /// Whether the account may sign in.
    #[serde(default = "default_true")]
    pub active: bool,
    /// Avatar image URL, when uploaded.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub avatar: Option<String>,
    /// IANA timezone for report scheduling.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub timezone: Option<String>,
    /// Themes the account may access.
    #[serde(default)]
    pub theme_ids: Vec<String>,
}

/// Create/update payload for a user account.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UserPayload {
    /// Display name.
    pub name: String,
    /// Login email.
    pub email: String,
    /// Access role.
    pub role: UserRole,
    /// Whether the account may sign in.
    pub active: bool,
    /// IANA timezone for report scheduling.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timezone: Option<String>,
    /// Themes the account may access.
    pub theme_ids: Vec<String>,
    /// Initial password; omitted on updates that keep the old one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
}

/// Operator-defined tag over a theme's materials.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Tag {
    #[serde(rename = "_id")]
    /// Server-assigned tag id.
    pub id: String,
    /// Owning theme id.
    pub theme_id: String,
    /// Tag display name.
    pub name: String,
    /// Keywords that auto-apply the tag.
    #[serde(default)]
    pub keywords: Vec<String>,
    /// Sentiment counters over tagged materials.
    #[serde(default)]
    pub counters: SentimentCounters,
}

/// Create/update payload for a tag.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TagPayload {
    /// Owning theme id.
    pub theme_id: String,
    /// Tag display name.
    pub name: String,
    /// Keywords that auto-apply the tag.
    pub keywords: Vec<String>,
}

/// Delivery channels bound to a theme for instant alerts.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NotificationPlan {
    #[serde(rename = "_id")]
    /// Server-assigned plan id.
    pub id: String,
    /// Theme the plan watches.
    pub theme_id: String,
    /// Recipient email addresses.
    #[serde(default)]
    pub emails: Vec<String>,
    /// Telegram channel ids.
    #[serde(default)]
    pub telegram_channels: Vec<String>,
    /// Whether the plan is currently delivering.
    #[serde(default = "default_true")]
    pub active: bool,
}

/// Create/update payload for a notification plan.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NotificationPayload {
    /// Theme the plan watches.
    pub theme_id: String,
    /// Recipient email addresses.
    pub emails: Vec<String>,
    /// Telegram channel ids.
    pub telegram_channels: Vec<String>,
    /// Whether the plan is currently delivering.
    pub active: bool,
}

/// Export file formats for scheduled reports.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    /// Word document.
    Docx,
    /// Excel workbook.
    Xlsx,
    /// PDF document.
    Pdf,
}

impl ExportFormat {
    /// Wire token / file extension for the format.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Docx => "docx",
            Self::Xlsx => "xlsx",
            Self::Pdf => "pdf",
        }
    }

    /// All supported formats in display order.
    #[must_use]
    pub const fn all() -> [Self; 3] {
        [Self::Docx, Self::Xlsx, Self::Pdf]
    }
}

/// Scheduled report subscription for a theme.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Subscription {
    #[serde(rename = "_id")]
    /// Server-assigned subscription id.
    pub id: String,
    /// Theme the reports cover.
    pub theme_id: String,
    /// Recipient email addresses.
    #[serde(default)]
    pub emails: Vec<String>,
    /// File formats to generate.
    #[serde(default)]
    pub formats: Vec<ExportFormat>,
    /// Report header line.
    #[serde(default)]
    pub header: String,
    /// Report subheader line.
    #[serde(default)]
    pub subheader: String,
    /// Whether the subscription is currently delivering.
    #[serde(default = "default_true")]
    pub active: bool,
}

/// Create/update payload for a subscription.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SubscriptionPayload {
    /// Theme the reports cover.
    pub theme_id: String,
    /// Recipient email addresses.
    pub emails: Vec<String>,
    /// File formats to generate.
    pub formats: Vec<ExportFormat>,
    /// Report header line.
    pub header: String,
    /// Report subheader line.
    pub subheader: String,
    /// Whether the subscription is currently delivering.
    pub active: bool,
}

/// One slice of a server-computed aggregate (source mix, geography, tags, ...).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NameValue {
    /// Slice label.
    pub name: String,
    /// Slice magnitude.
    pub value: u64,
}

/// Credentials posted to the login endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LoginRequest {
    /// Login email.
    pub email: String,
    /// Plain password; the transport is TLS.
    pub password: String,
}

/// Token issued by the login endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LoginResponse {
    /// Bearer token for subsequent requests.
    pub access_token: String,
}

/// Profile of the signed-in operator.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UserProfile {
    #[serde(rename = "_id")]
    /// Server-assigned user id.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Login email.
    pub email: String,
    /// Access role.
    pub role: UserRole,
    /// Avatar image URL, when uploaded.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub avatar: Option<String>,
    /// IANA timezone for report scheduling.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub timezone: Option<String>,
}

const fn default_true() -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::{
        ExportFormat, SentimentLabel, Theme, ThemeCounters, ThemeKind, ThemeSummary, User,
        UserRole,
    };

    #[test]
    fn theme_summary_uses_mongo_id_field() {
        let summary = ThemeSummary {
            id: "t1".to_string(),
            name: "Almaty".to_string(),
        };
        let encoded = serde_json::to_string(&summary).expect("encode");
        assert_eq!(encoded, r#"{"_id":"t1","name":"Almaty"}"#);
        let decoded: ThemeSummary = serde_json::from_str(&encoded).expect("decode");
        assert_eq!(decoded, summary);
    }

    #[test]
    fn theme_defaults_cover_missing_collections() {
        let theme: Theme = serde_json::from_str(
            r#"{"_id":"t1","name":"Almaty","kind":"keywords"}"#,
        )
        .expect("decode");
        assert!(theme.keywords.is_empty());
        assert!(theme.excluded_sources.is_empty());
        assert_eq!(theme.counters, ThemeCounters::default());
        assert_eq!(theme.kind, ThemeKind::Keywords);
        assert_eq!(theme.summary().id, "t1");
    }

    #[test]
    fn sentiment_and_format_tokens_round_trip() {
        for label in SentimentLabel::all() {
            let encoded = serde_json::to_string(&label).expect("encode");
            assert_eq!(encoded, format!("\"{}\"", label.as_str()));
        }
        for format in ExportFormat::all() {
            let encoded = serde_json::to_string(&format).expect("encode");
            assert_eq!(encoded, format!("\"{}\"", format.as_str()));
        }
    }

    #[test]
    fn user_active_defaults_on() {
        let user: User = serde_json::from_str(
            r#"{"_id":"u1","name":"Aliya","email":"a@scano.kz","role":"moderator"}"#,
        )
        .expect("decode");
        assert!(user.active);
        assert_eq!(user.role, UserRole::Moderator);
        assert!(user.theme_ids.is_empty());
    }
}
