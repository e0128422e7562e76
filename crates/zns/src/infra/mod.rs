//! Infrastructure Layer
//!
//! Concrete implementations of the domain's collaborator traits.

pub mod memory;
