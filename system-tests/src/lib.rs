// system-tests/src/lib.rs
// ============================================================================
// Module: Docmill System Tests Library
// Description: Shared configuration for the live-deployment test suites.
// Purpose: Provide common environment settings for Docmill system-test binaries.
// Dependencies: std
// ============================================================================

//! ## Overview
//! This crate hosts the environment-backed configuration shared by the
//! Docmill system-test binaries in `system-tests/tests`. The suites drive a
//! live deployment over HTTP, so every setting arrives via environment
//! variables.
//! Security posture: environment inputs and deployment responses are
//! untrusted; parsing fails closed.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod config;
