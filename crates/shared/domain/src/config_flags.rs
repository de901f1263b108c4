use crate::flags::{FlagSet, flag_set_impls};
use bitflags::bitflags;

bitflags! {
    /// Runtime switches of a service. Any combination is valid.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
    pub struct ConfigFlags: u32 {
        const LOG_REQUESTS = 1 << 0;
        const ENABLE_METRICS = 1 << 1;
        const ENABLE_CACHE = 1 << 2;
        const ENABLE_DEBUG = 1 << 3;
        const MAINTENANCE_MODE = 1 << 4;
    }
}

impl FlagSet for ConfigFlags {
    const KIND: &'static str = "ConfigFlags";
    const SEPARATOR: &'static str = ",";
    const LABELS: &'static [(Self, &'static str)] = &[
        (Self::LOG_REQUESTS, "LogRequests"),
        (Self::ENABLE_METRICS, "EnableMetrics"),
        (Self::ENABLE_CACHE, "EnableCache"),
        (Self::ENABLE_DEBUG, "EnableDebug"),
        (Self::MAINTENANCE_MODE, "MaintenanceMode"),
    ];
}

flag_set_impls!(ConfigFlags);

impl Default for ConfigFlags {
    fn default() -> Self {
        Self::LOG_REQUESTS
    }
}

impl From<u32> for ConfigFlags {
    fn from(bits: u32) -> Self {
        Self::from_bits_retain(bits)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cache_and_debug() {
        assert_eq!(ConfigFlags::render_bits(4 | 8), "EnableCache,EnableDebug");
    }

    #[test]
    fn bit_values_are_stable() {
        assert_eq!(ConfigFlags::LOG_REQUESTS.bits(), 1);
        assert_eq!(ConfigFlags::ENABLE_METRICS.bits(), 2);
        assert_eq!(ConfigFlags::ENABLE_CACHE.bits(), 4);
        assert_eq!(ConfigFlags::ENABLE_DEBUG.bits(), 8);
        assert_eq!(ConfigFlags::MAINTENANCE_MODE.bits(), 16);
    }

    #[test]
    fn bits_past_the_last_flag_are_ignored() {
        assert_eq!(ConfigFlags::render_bits(32), "None");
        assert_eq!(ConfigFlags::render_bits(16 | 64), "MaintenanceMode");
    }

    #[test]
    fn parse_accepts_spaces_and_none() {
        assert_eq!(
            ConfigFlags::parse(" LogRequests , MaintenanceMode "),
            Ok(ConfigFlags::LOG_REQUESTS | ConfigFlags::MAINTENANCE_MODE)
        );
        assert_eq!(ConfigFlags::parse("None"), Ok(ConfigFlags::empty()));
        assert!(ConfigFlags::parse("EnableCache,Turbo").is_err());
    }
}
