// crates/docmill-api/src/lib.rs
// ============================================================================
// Module: Docmill Dataset API Library
// Description: Typed wire contract and async HTTP client for the Docmill
//              dataset-management endpoints.
// Purpose: Give the system-test suites a thin, transcript-capturing access
//          path to the live dataset API.
// Dependencies: reqwest, serde, serde_json, thiserror, tokio, url
// ============================================================================

//! ## Overview
//! The Docmill dataset API wraps every response in a `{code, message, data}`
//! envelope and reports application-level failures beside an HTTP 200 status
//! line. This crate models that contract with [`ApiEnvelope`], the dataset
//! resource and payload types in [`dataset`], and [`DatasetApiClient`], an
//! async client that records every exchange into a shared transcript.
//!
//! Invariants:
//! - The HTTP status line is never treated as the success signal; only
//!   `code == 0` means the operation succeeded.
//! - Nonzero envelope codes are data, not client errors; callers assert on
//!   them directly.
//! - Transcript entries are appended in request order and shared across
//!   clones of a client.
//!
//! Security posture: the deployment under test is remote and untrusted, so
//! all response payloads are decoded fail-closed.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod client;
pub mod dataset;
pub mod envelope;
pub mod error;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use client::DatasetApiClient;
pub use client::TranscriptEntry;
pub use dataset::ChunkMethod;
pub use dataset::CreateDatasetRequest;
pub use dataset::DATASET_NAME_LIMIT;
pub use dataset::Dataset;
pub use dataset::DatasetUpdate;
pub use dataset::DeleteDatasetsRequest;
pub use dataset::ListDatasetsQuery;
pub use dataset::Permission;
pub use envelope::ApiEnvelope;
pub use envelope::CODE_AUTH_ERROR;
pub use envelope::CODE_FIELD_ERROR;
pub use envelope::CODE_READONLY_FIELD;
pub use envelope::CODE_SUCCESS;
pub use envelope::CODE_VALIDATION_ERROR;
pub use error::ApiClientError;

// ============================================================================
// SECTION: Tests
// ============================================================================
