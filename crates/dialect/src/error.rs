// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! # Dialect errors

use thiserror::Error;

/// Result type alias for dialect operations
pub type DialectResult<T> = Result<T, DialectError>;

/// Errors raised while loading or looking up dialect descriptors
#[derive(Debug, Error)]
pub enum DialectError {
    /// JSON descriptor could not be decoded
    #[error("Invalid JSON dialect descriptor: {0}")]
    Json(#[from] serde_json::Error),

    /// YAML descriptor could not be decoded
    #[error("Invalid YAML dialect descriptor: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// Descriptor has no name
    #[error("Dialect descriptor is missing a name")]
    MissingName,

    /// No dialect registered under this name
    #[error("Unknown dialect: {0}")]
    UnknownDialect(String),
}
