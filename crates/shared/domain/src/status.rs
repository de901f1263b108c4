use crate::constants::UNKNOWN;
use crate::enumeration::u8_enumeration;
use serde::{Deserialize, Serialize};
use strum_macros::{EnumCount, EnumIter, FromRepr, IntoStaticStr};

/// Lifecycle state of a request. Codes start at 0.
#[derive(
    Debug,
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
pub enum Status {
    Pending = 0,
    Approved = 1,
    Rejected = 2,
    Cancelled = 3,
}

u8_enumeration!(Status, fallback = UNKNOWN);
