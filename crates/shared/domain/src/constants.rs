//! Named defaults for the application settings.

pub const DEFAULT_APP_NAME: &str = "GoMaster";
pub const DEFAULT_VERSION: &str = "1.0.0";
pub const DEFAULT_AUTHOR: &str = "Anonymous";
pub const DEFAULT_MAX_RETRIES: u32 = 3;
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Fallback string for enumerations rendered in title case.
pub const UNKNOWN: &str = "Unknown";
/// Fallback string for enumerations rendered in upper case.
pub const UNKNOWN_UPPER: &str = "UNKNOWN";
/// Rendering of a flag set with no known flag present.
pub const NONE: &str = "None";
