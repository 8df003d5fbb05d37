// crates/docmill-api/src/dataset.rs
// ============================================================================
// Module: Docmill Dataset Contract
// Description: Dataset resource object and request payloads for the dataset
//              endpoints.
// Purpose: Model the wire contract with closed enums where the service is
//          closed and open strings where it is deployment-dependent.
// Dependencies: serde
// ============================================================================

//! ## Overview
//! The dataset resource carries a mix of mutable settings and read-only
//! service bookkeeping. Chunk methods and permissions are closed sets and
//! modeled as enums; embedding models are deployment-dependent and stay
//! strings. Update payloads serialize only the fields that were set, so a
//! default [`DatasetUpdate`] is an empty JSON object.
//!
//! Invariants:
//! - Enum wire forms match the service's snake_case vocabulary exactly.
//! - [`DeleteDatasetsRequest`] always serializes its `ids` field; JSON null
//!   is the wire form for "delete everything".

use std::fmt;

use serde::Deserialize;
use serde::Serialize;

// ============================================================================
// SECTION: Service Limits
// ============================================================================

/// Maximum dataset name length the service accepts, in characters.
pub const DATASET_NAME_LIMIT: usize = 128;

// ============================================================================
// SECTION: Closed Vocabularies
// ============================================================================

/// Document segmentation strategies selectable per dataset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChunkMethod {
    /// General-purpose segmentation; the service default.
    Naive,
    /// Manually curated chunks.
    Manual,
    /// Question/answer pair extraction.
    Qa,
    /// Table-oriented extraction.
    Table,
    /// Academic-paper layout.
    Paper,
    /// Book layout.
    Book,
    /// Legal-document layout.
    Laws,
    /// Slide-deck layout.
    Presentation,
    /// Image-centric extraction.
    Picture,
    /// Whole document as a single chunk.
    One,
    /// Email message layout.
    Email,
    /// Tag extraction.
    Tag,
}

impl ChunkMethod {
    /// Every method the service accepts, in the order the service lists them.
    pub const ALL: [Self; 12] = [
        Self::Naive,
        Self::Manual,
        Self::Qa,
        Self::Table,
        Self::Paper,
        Self::Book,
        Self::Laws,
        Self::Presentation,
        Self::Picture,
        Self::One,
        Self::Email,
        Self::Tag,
    ];

    /// Returns the wire form of the method.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Naive => "naive",
            Self::Manual => "manual",
            Self::Qa => "qa",
            Self::Table => "table",
            Self::Paper => "paper",
            Self::Book => "book",
            Self::Laws => "laws",
            Self::Presentation => "presentation",
            Self::Picture => "picture",
            Self::One => "one",
            Self::Email => "email",
            Self::Tag => "tag",
        }
    }
}

impl fmt::Display for ChunkMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Dataset visibility scopes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Permission {
    /// Visible to the owning tenant only; the service default.
    Me,
    /// Visible to the owning tenant's team.
    Team,
}

impl Permission {
    /// Every scope the service accepts.
    pub const ALL: [Self; 2] = [Self::Me, Self::Team];

    /// Returns the wire form of the scope.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Me => "me",
            Self::Team => "team",
        }
    }
}

impl fmt::Display for Permission {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// SECTION: Dataset Resource
// ============================================================================

/// Dataset resource object as the service returns it.
///
/// Counter and ranking fields default to zero so listings of legacy datasets
/// that omit them still decode.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    /// Service-assigned dataset identifier. Read-only.
    pub id: String,

    /// Display name, unique per tenant (case-insensitive).
    pub name: String,

    /// Base64-encoded avatar image, when one was uploaded.
    #[serde(default)]
    pub avatar: Option<String>,

    /// Free-text description, when one was set.
    #[serde(default)]
    pub description: Option<String>,

    /// Embedding model applied to newly ingested documents.
    pub embedding_model: String,

    /// Segmentation strategy applied to newly ingested documents.
    pub chunk_method: ChunkMethod,

    /// Visibility scope.
    pub permission: Permission,

    /// Retrieval boost weight.
    #[serde(default)]
    pub pagerank: i64,

    /// Retrieval similarity cutoff.
    #[serde(default)]
    pub similarity_threshold: f64,

    /// Weight of vector similarity in hybrid scoring.
    #[serde(default)]
    pub vector_similarity_weight: f64,

    /// Number of stored chunks. Read-only.
    #[serde(default)]
    pub chunk_count: u64,

    /// Number of stored documents. Read-only.
    #[serde(default)]
    pub document_count: u64,

    /// Number of embedded tokens. Read-only.
    #[serde(default)]
    pub token_num: u64,

    /// Creation date in the service's RFC 1123 form. Read-only.
    pub create_date: String,

    /// Creation time in epoch milliseconds. Read-only.
    pub create_time: u64,

    /// Identifier of the creating user. Read-only.
    pub created_by: String,

    /// Service-side status flag. Read-only.
    pub status: String,

    /// Owning tenant identifier. Read-only.
    pub tenant_id: String,

    /// Last-update date in the service's RFC 1123 form. Read-only.
    pub update_date: String,

    /// Last-update time in epoch milliseconds. Read-only.
    pub update_time: u64,
}

// ============================================================================
// SECTION: Request Payloads
// ============================================================================

/// Creation payload for `POST /api/v1/datasets`.
///
/// Only the name is required; every other setting starts at the service
/// default and is exercised through updates.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CreateDatasetRequest {
    /// Display name for the new dataset.
    pub name: String,
}

impl CreateDatasetRequest {
    /// Creates a request for the given display name.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// Update payload for `PUT /api/v1/datasets/{dataset_id}`.
///
/// Unset fields are omitted from the serialized body, so a default update is
/// an empty object. Payloads the typed form cannot express, such as unknown
/// fields or wrongly typed values, go through
/// [`crate::DatasetApiClient::update_dataset_json`] instead.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct DatasetUpdate {
    /// New display name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// New base64-encoded avatar image.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,

    /// New free-text description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// New embedding model.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub embedding_model: Option<String>,

    /// New segmentation strategy.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub chunk_method: Option<ChunkMethod>,

    /// New retrieval boost weight.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pagerank: Option<i64>,

    /// New visibility scope.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub permission: Option<Permission>,

    /// New retrieval similarity cutoff.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub similarity_threshold: Option<f64>,

    /// New weight of vector similarity in hybrid scoring.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vector_similarity_weight: Option<f64>,
}

impl DatasetUpdate {
    /// Creates an update that changes nothing.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the display name.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Sets the avatar image.
    #[must_use]
    pub fn with_avatar(mut self, avatar: impl Into<String>) -> Self {
        self.avatar = Some(avatar.into());
        self
    }

    /// Sets the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the embedding model.
    #[must_use]
    pub fn with_embedding_model(mut self, embedding_model: impl Into<String>) -> Self {
        self.embedding_model = Some(embedding_model.into());
        self
    }

    /// Sets the segmentation strategy.
    #[must_use]
    pub fn with_chunk_method(mut self, chunk_method: ChunkMethod) -> Self {
        self.chunk_method = Some(chunk_method);
        self
    }

    /// Sets the retrieval boost weight.
    #[must_use]
    pub fn with_pagerank(mut self, pagerank: i64) -> Self {
        self.pagerank = Some(pagerank);
        self
    }

    /// Sets the visibility scope.
    #[must_use]
    pub fn with_permission(mut self, permission: Permission) -> Self {
        self.permission = Some(permission);
        self
    }

    /// Sets the retrieval similarity cutoff.
    #[must_use]
    pub fn with_similarity_threshold(mut self, similarity_threshold: f64) -> Self {
        self.similarity_threshold = Some(similarity_threshold);
        self
    }

    /// Sets the weight of vector similarity in hybrid scoring.
    #[must_use]
    pub fn with_vector_similarity_weight(mut self, vector_similarity_weight: f64) -> Self {
        self.vector_similarity_weight = Some(vector_similarity_weight);
        self
    }
}

/// Query parameters for `GET /api/v1/datasets`.
///
/// Unset fields are omitted from the query string and the service applies its
/// own paging defaults.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ListDatasetsQuery {
    /// Restrict the page to a single dataset id.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Restrict the page to a single dataset name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// One-based page number.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u64>,

    /// Number of datasets per page.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_size: Option<u64>,

    /// Sort key, either `create_time` or `update_time`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub orderby: Option<String>,

    /// Sort direction; true for descending.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub desc: Option<bool>,
}

impl ListDatasetsQuery {
    /// Creates an unfiltered query with the service's paging defaults.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a query filtered to one dataset id.
    #[must_use]
    pub fn by_id(id: impl Into<String>) -> Self {
        Self {
            id: Some(id.into()),
            ..Self::default()
        }
    }
}

/// Deletion payload for `DELETE /api/v1/datasets`.
///
/// The `ids` field is always serialized: a JSON null tells the service to
/// delete every dataset the caller owns, which the fixtures use to reset the
/// test tenant.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DeleteDatasetsRequest {
    /// Dataset ids to delete, or null for every dataset the caller owns.
    pub ids: Option<Vec<String>>,
}

impl DeleteDatasetsRequest {
    /// Deletes exactly the listed dataset ids.
    #[must_use]
    pub fn by_ids(ids: Vec<String>) -> Self {
        Self { ids: Some(ids) }
    }

    /// Deletes every dataset the caller owns.
    #[must_use]
    pub const fn all() -> Self {
        Self { ids: None }
    }
}
