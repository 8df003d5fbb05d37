// system-tests/src/config/env.rs
// ============================================================================
// Module: System Test Environment
// Description: Environment-backed configuration for system tests.
// Purpose: Centralize env parsing with strict UTF-8 validation.
// Dependencies: std
// ============================================================================

//! ## Overview
//! Environment values are parsed with strict UTF-8 enforcement to avoid silent
//! misconfiguration. Invalid UTF-8 fails closed. The deployment base URL is
//! the only setting with a default; everything else is explicit.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::num::NonZeroU64;
use std::path::PathBuf;
use std::time::Duration;

// ============================================================================
// SECTION: Environment Constants
// ============================================================================

/// Base URL used when no override is set; matches a local deployment.
pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8620";

/// Environment keys for system test configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SystemTestEnv {
    /// Optional base URL override for the deployment under test.
    BaseUrl,
    /// API key of the disposable tenant the suites run against.
    ApiKey,
    /// Optional timeout override in seconds (positive integer).
    TimeoutSeconds,
    /// Optional run root override for test artifacts.
    RunRoot,
    /// Keep fixture datasets after a run (`true`/`false` or `1`/`0`).
    KeepDatasets,
}

impl SystemTestEnv {
    /// Returns the canonical environment variable name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::BaseUrl => "DOCMILL_SYSTEM_TEST_BASE_URL",
            Self::ApiKey => "DOCMILL_SYSTEM_TEST_API_KEY",
            Self::TimeoutSeconds => "DOCMILL_SYSTEM_TEST_TIMEOUT_SEC",
            Self::RunRoot => "DOCMILL_SYSTEM_TEST_RUN_ROOT",
            Self::KeepDatasets => "DOCMILL_SYSTEM_TEST_KEEP_DATASETS",
        }
    }
}

// ============================================================================
// SECTION: Config Types
// ============================================================================

/// Typed system test configuration derived from environment variables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SystemTestConfig {
    /// Base URL of the deployment under test.
    pub base_url: String,
    /// API key of the test tenant, when provided.
    pub api_key: Option<String>,
    /// Optional timeout override in seconds (positive integer).
    pub timeout: Option<Duration>,
    /// Optional run root override for test artifacts.
    pub run_root: Option<PathBuf>,
    /// Keep fixture datasets after a run for post-mortem inspection.
    pub keep_datasets: bool,
}

impl SystemTestConfig {
    /// Loads configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error when an environment value is not valid UTF-8, is empty,
    /// or fails validation (for example, an invalid timeout or boolean value).
    pub fn load() -> Result<Self, String> {
        let base_url = read_env_nonempty(SystemTestEnv::BaseUrl.as_str())?
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        let api_key = read_env_nonempty(SystemTestEnv::ApiKey.as_str())?;
        let timeout = read_env_nonempty(SystemTestEnv::TimeoutSeconds.as_str())?
            .map(|value| parse_timeout_seconds(SystemTestEnv::TimeoutSeconds.as_str(), &value))
            .transpose()?;
        let run_root = read_env_nonempty(SystemTestEnv::RunRoot.as_str())?.map(PathBuf::from);
        let keep_datasets = parse_bool_env(
            SystemTestEnv::KeepDatasets.as_str(),
            read_env_nonempty(SystemTestEnv::KeepDatasets.as_str())?,
        )?;
        Ok(Self {
            base_url,
            api_key,
            timeout,
            run_root,
            keep_datasets,
        })
    }
}

// ============================================================================
// SECTION: Helpers
// ============================================================================

/// Reads an environment variable, insisting on valid UTF-8.
///
/// # Errors
///
/// Returns an error when the variable holds bytes that are not UTF-8.
fn read_env_strict(name: &str) -> Result<Option<String>, String> {
    let Some(raw) = std::env::var_os(name) else {
        return Ok(None);
    };
    raw.into_string().map(Some).map_err(|_| format!("{name} must be valid UTF-8"))
}

/// Reads an environment variable, treating set-but-blank as a mistake.
///
/// # Errors
///
/// Returns an error when the variable is set but empty or whitespace.
fn read_env_nonempty(name: &str) -> Result<Option<String>, String> {
    match read_env_strict(name)? {
        Some(value) if value.trim().is_empty() => Err(format!("{name} must not be empty")),
        other => Ok(other),
    }
}

/// Parses a timeout override in whole seconds.
///
/// # Errors
///
/// Returns an error unless the value is a positive integer.
fn parse_timeout_seconds(name: &str, raw: &str) -> Result<Duration, String> {
    raw.trim()
        .parse::<NonZeroU64>()
        .map(|secs| Duration::from_secs(secs.get()))
        .map_err(|_| format!("{name} must be a positive integer number of seconds"))
}

/// Parses a boolean environment variable; unset means false.
///
/// # Errors
///
/// Returns an error when the value is not a recognized boolean literal.
fn parse_bool_env(name: &str, raw: Option<String>) -> Result<bool, String> {
    let Some(value) = raw else {
        return Ok(false);
    };
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "1" => Ok(true),
        "false" | "0" => Ok(false),
        _ => Err(format!("{name} must be 1, 0, true, or false")),
    }
}
