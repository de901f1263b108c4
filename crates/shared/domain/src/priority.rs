use crate::constants::UNKNOWN;
use crate::enumeration::u8_enumeration;
use serde::{Deserialize, Serialize};
use strum_macros::{EnumCount, EnumIter, FromRepr, IntoStaticStr};

/// Urgency of a task.
///
/// Codes start at 1. Code 0 is deliberately left unassigned so that a zeroed field reads as
/// "unset"; use `Option<Priority>` where a priority may be missing.
#[derive(
    Debug,
    Default,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    EnumIter,
    EnumCount,
    FromRepr,
    IntoStaticStr,
    Serialize,
    Deserialize,
)]
#[serde(try_from = "u8", into = "u8")]
#[repr(u8)]
pub enum Priority {
    Low = 1,
    #[default]
    Medium = 2,
    High = 3,
    Critical = 4,
}

u8_enumeration!(Priority, fallback = UNKNOWN);
