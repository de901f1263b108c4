//! Closed enumerations with a positional integer encoding.
//!
//! Every case has a fixed code and a canonical name. Two directions are offered:
//!
//! * [`Enumeration::render`] is total over the underlying integer type. Codes that do not
//!   map to a case render as [`Enumeration::FALLBACK`] instead of failing.
//! * `TryFrom<u8>` / `FromStr` are strict: the enum value itself can only hold a declared case.

use strum::IntoEnumIterator;

/// A closed set of integer-coded cases with a display name per case.
pub trait Enumeration: Copy + Eq + IntoEnumIterator + Into<&'static str> + 'static {
    /// Underlying integer encoding.
    type Code: Copy + Eq;

    /// Rendering used for codes outside the case set.
    const FALLBACK: &'static str;

    /// Short type name used in error messages.
    const KIND: &'static str;

    /// Maps a raw code back to its case, if any.
    fn from_code(code: Self::Code) -> Option<Self>;

    /// The stable integer encoding of this case.
    fn code(self) -> Self::Code;

    /// Canonical display name of this case.
    fn name(self) -> &'static str {
        self.into()
    }

    /// Renders any raw code: the case name, or [`Self::FALLBACK`] when unmapped.
    fn render(code: Self::Code) -> &'static str {
        Self::from_code(code).map_or(Self::FALLBACK, Self::name)
    }

    /// Finds the case whose canonical name is exactly `name`.
    fn from_name(name: &str) -> Option<Self> {
        Self::iter().find(|case| case.name() == name)
    }
}

/// Free-standing form of [`Enumeration::render`].
///
/// ```rust
/// use codebook_domain::{Status, enumeration};
///
/// assert_eq!(enumeration::render::<Status>(2), "Rejected");
/// assert_eq!(enumeration::render::<Status>(200), "Unknown");
/// ```
pub fn render<E: Enumeration>(code: E::Code) -> &'static str {
    E::render(code)
}

/// Implements [`Enumeration`] and the strict conversions for a `#[repr(u8)]` enum deriving
/// `strum_macros::{EnumIter, IntoStaticStr, FromRepr}`.
macro_rules! u8_enumeration {
    ($ty:ident, fallback = $fallback:expr) => {
        impl $crate::enumeration::Enumeration for $ty {
            type Code = u8;

            const FALLBACK: &'static str = $fallback;
            const KIND: &'static str = stringify!($ty);

            fn from_code(code: u8) -> Option<Self> {
                Self::from_repr(code)
            }

            fn code(self) -> u8 {
                self as u8
            }
        }

        impl TryFrom<u8> for $ty {
            type Error = $crate::DomainError;

            fn try_from(code: u8) -> Result<Self, Self::Error> {
                Self::from_repr(code).ok_or($crate::DomainError::UnknownCode {
                    kind: <Self as $crate::enumeration::Enumeration>::KIND,
                    code: u64::from(code),
                    context: None,
                })
            }
        }

        impl From<$ty> for u8 {
            fn from(value: $ty) -> Self {
                value as Self
            }
        }

        impl ::std::fmt::Display for $ty {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str($crate::enumeration::Enumeration::name(*self))
            }
        }

        impl ::std::str::FromStr for $ty {
            type Err = $crate::DomainError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                <Self as $crate::enumeration::Enumeration>::from_name(s).ok_or_else(|| {
                    $crate::DomainError::UnknownName {
                        kind: <Self as $crate::enumeration::Enumeration>::KIND,
                        name: s.to_owned().into(),
                        context: None,
                    }
                })
            }
        }
    };
}

pub(crate) use u8_enumeration;
