//! Shared types and configuration for Podryad.
//!
//! This crate provides common pieces used across all other crates:
//! - Money formatting with decimal precision
//! - Configuration management

pub mod config;
pub mod types;

pub use config::AppConfig;
pub use types::money::{format_amount, format_amount_or_zero};
