//! # Domain Models
//!
//! Small closed value sets with a stable integer encoding and a canonical display name.
//!
//! * [`enumeration`] covers plain enumerations ([`Status`], [`Priority`], [`HttpMethod`],
//!   [`Color`]). Rendering a raw code never fails: codes outside the case set render as the
//!   type's fallback string.
//! * [`flags`] covers bit-flag sets ([`Permission`], [`ConfigFlags`]) with a containment test
//!   and a deterministic rendering of the active subset.
//!
//! Keep it lean: no I/O here, just data and pure helpers.
//!
//! ```rust
//! use codebook_domain::{Enumeration, FlagSet, Permission, Priority};
//!
//! assert_eq!(Priority::render(3), "High");
//! assert_eq!(Priority::render(0), "Unknown");
//!
//! let set = Permission::READ | Permission::EXECUTE;
//! assert!(!set.has(Permission::WRITE));
//! assert_eq!(set.render(), "Read|Execute");
//! ```

pub mod color;
pub mod config;
pub mod config_flags;
pub mod constants;
pub mod enumeration;
mod error;
pub mod flags;
pub mod http_method;
pub mod permission;
pub mod priority;
pub mod status;

pub use crate::color::Color;
pub use crate::config_flags::ConfigFlags;
pub use crate::enumeration::Enumeration;
pub use crate::error::{DomainError, DomainErrorExt};
pub use crate::flags::FlagSet;
pub use crate::http_method::HttpMethod;
pub use crate::permission::Permission;
pub use crate::priority::Priority;
pub use crate::status::Status;
