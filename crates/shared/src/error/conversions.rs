//! Error conversions - From implementations for common error types

use super::app_error::AppError;
use super::kind::ErrorKind;
use crate::id::DomainIdError;

impl From<std::fmt::Error> for AppError {
    fn from(err: std::fmt::Error) -> Self {
        AppError::internal("Formatting error").with_source(err)
    }
}

impl From<std::num::ParseIntError> for AppError {
    fn from(err: std::num::ParseIntError) -> Self {
        AppError::invalid_input("Invalid integer format").with_source(err)
    }
}

impl From<hex::FromHexError> for AppError {
    fn from(err: hex::FromHexError) -> Self {
        AppError::invalid_input(format!("Invalid hex: {}", err)).with_source(err)
    }
}

impl From<DomainIdError> for AppError {
    fn from(err: DomainIdError) -> Self {
        AppError::invalid_input(format!("Invalid domain id: {}", err)).with_source(err)
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        if err.is_syntax() || err.is_data() || err.is_eof() {
            AppError::new(ErrorKind::Decode, format!("JSON parse error: {}", err)).with_source(err)
        } else {
            AppError::internal("JSON serialization error").with_source(err)
        }
    }
}
