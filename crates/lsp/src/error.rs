// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! # Service error types

use lsp_types::Position;
use thiserror::Error;

use crate::config::ConfigError;

/// Result type alias for service operations
pub type ServiceResult<T> = Result<T, ServiceError>;

/// Errors raised by [`LanguageService`](crate::LanguageService)
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Position lies outside the document
    #[error("Invalid position: {0:?}")]
    InvalidPosition(Position),
}

impl ServiceError {
    /// Whether the client should simply receive an empty response
    pub fn should_return_empty(&self) -> bool {
        matches!(self, ServiceError::InvalidPosition(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ServiceError::from(ConfigError::UnknownDialect("oracle9".to_string()));
        assert_eq!(err.to_string(), "Configuration error: Unknown dialect: oracle9");
        assert!(!err.should_return_empty());
        assert!(ServiceError::InvalidPosition(Position::new(3, 0)).should_return_empty());
    }
}
