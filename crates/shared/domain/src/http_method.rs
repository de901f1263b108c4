use crate::constants::UNKNOWN_UPPER;
use crate::enumeration::u8_enumeration;
use serde::{Deserialize, Serialize};
use strum_macros::{EnumCount, EnumIter, FromRepr, IntoStaticStr};

/// HTTP request method tag. Codes start at 1, code 0 is unassigned.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    EnumIter,
    EnumCount,
    FromRepr,
    IntoStaticStr,
    Serialize,
    Deserialize,
)]
#[serde(try_from = "u8", into = "u8")]
#[strum(serialize_all = "UPPERCASE")]
#[repr(u8)]
pub enum HttpMethod {
    Get = 1,
    Post = 2,
    Put = 3,
    Delete = 4,
    Patch = 5,
}

u8_enumeration!(HttpMethod, fallback = UNKNOWN_UPPER);
