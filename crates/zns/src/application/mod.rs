//! Application Layer - Use Cases
//!
//! This layer orchestrates domain logic and external collaborators.

pub mod config;
pub mod feed;
pub mod metadata_service;
