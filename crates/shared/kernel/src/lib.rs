//! Kernel utilities shared across the codebook crates.
//! Keep this crate lightweight; today it owns configuration loading.
//!
//! ## Config loading
//! ```rust,no_run
//! use codebook_kernel::config::load_settings;
//!
//! let settings = load_settings(Some("config/local.toml")).unwrap();
//! assert!(!settings.app.name.is_empty());
//! ```
pub mod config;

pub use codebook_domain as domain;
