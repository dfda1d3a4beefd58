// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Error types for lantern.
//!
//! None of these ever reach the page as an exception. Feed failures disable the
//! search inputs, storage failures are logged, and configuration errors are
//! reported once from `mount()`.

use thiserror::Error;

/// Why the search feed could not become an index.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The request never produced a response (offline, CORS, DNS)
    #[error("Feed request failed: {0}")]
    Network(String),
    /// The server answered with a non-2xx status
    #[error("Feed returned HTTP {status}")]
    Http { status: u16 },
    /// The body was not a JSON array of documents
    #[error("Feed is not a valid document array: {0}")]
    MalformedFeed(#[from] serde_json::Error),
    /// The feed parsed but the index options were rejected
    #[error("Invalid index configuration: {0}")]
    Config(#[from] ConfigError),
}

/// Rejected widget or index configuration.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("threshold must be within 0.0..=1.0, got {0}")]
    Threshold(f64),
    #[error("{field} must be at least 1")]
    Zero { field: &'static str },
    #[error("at least one search key is required")]
    NoKeys,
}

/// Browser-local storage refused a read or write.
#[derive(Debug, Clone, Error)]
pub enum StorageError {
    /// localStorage is missing (privacy mode, sandboxed iframe)
    #[error("Local storage unavailable")]
    Unavailable,
    /// The write itself threw (quota exceeded, security error)
    #[error("Failed to write '{key}': {reason}")]
    Write { key: String, reason: String },
}

/// Convert from LoadError to String for the WASM boundary
impl From<LoadError> for String {
    fn from(err: LoadError) -> String {
        err.to_string()
    }
}

/// Convert from ConfigError to String for the WASM boundary
impl From<ConfigError> for String {
    fn from(err: ConfigError) -> String {
        err.to_string()
    }
}
