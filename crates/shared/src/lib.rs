//! Shared Kernel - Vocabulary shared by every ZNS crate
//!
//! This crate contains the "smallest core" of the naming vocabulary:
//! - Common error types and result aliases
//! - The fixed-width domain identifier value object
//!
//! **Design Principle**: Only include things that are "hard to change"
//! and have consistent meaning across all crates.

pub mod error {
    pub mod app_error;
    pub mod conversions;
    pub mod kind;
}
pub mod id;

pub use error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};
pub use id::{DomainId, DomainIdError};
