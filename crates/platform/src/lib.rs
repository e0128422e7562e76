//! Platform Crate - Technical Infrastructure
//!
//! This crate provides shared technical foundations:
//! - Cryptographic utilities (Keccak-256, 32-byte pair hashing, hex)
//! - HTTP fetching of JSON documents behind the [`http::HttpFetcher`] capability

pub mod crypto;
pub mod http;
