use crate::constants::UNKNOWN;
use crate::enumeration::u8_enumeration;
use serde::{Deserialize, Serialize};
use strum_macros::{EnumCount, EnumIter, FromRepr, IntoStaticStr};

/// Primary display color. Codes start at 0.
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
#[repr(u8)]
pub enum Color {
    Red = 0,
    Green = 1,
    Blue = 2,
}

u8_enumeration!(Color, fallback = UNKNOWN);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{DomainError, Enumeration};

    #[test]
    fn render_table() {
        assert_eq!(Color::render(0), "Red");
        assert_eq!(Color::render(1), "Green");
        assert_eq!(Color::render(2), "Blue");
        assert_eq!(Color::render(3), "Unknown");
    }

    #[test]
    fn errors_name_the_type() {
        assert_eq!(
            Color::try_from(3_u8),
            Err(DomainError::UnknownCode { kind: "Color", code: 3, context: None })
        );
        assert_eq!(
            "Purple".parse::<Color>(),
            Err(DomainError::UnknownName { kind: "Color", name: "Purple".into(), context: None })
        );
    }
}
