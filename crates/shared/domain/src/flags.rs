//! Bit-flag sets: independent boolean capabilities packed into one integer.
//!
//! Flag values are pairwise distinct powers of two. New flags take the next free power of two
//! and are appended to [`FlagSet::LABELS`]; existing bits are never renumbered.

use crate::DomainError;
use bitflags::Flags;
use serde::de::{self, Unexpected, Visitor};
use std::fmt;
use std::marker::PhantomData;

/// A `bitflags` type with display labels, a containment test and a deterministic rendering.
pub trait FlagSet: Flags + Copy {
    /// Short type name used in error messages.
    const KIND: &'static str;

    /// Joins the labels of the active flags.
    const SEPARATOR: &'static str;

    /// Rendering of a set without any known flag.
    const NONE: &'static str = crate::constants::NONE;

    /// Every flag with its label, in rendering order.
    const LABELS: &'static [(Self, &'static str)];

    /// True iff every bit of `required` is also set in `self`.
    ///
    /// This is containment, not equality: `required` may combine several flags, and the empty
    /// requirement is contained in every set.
    fn has(self, required: Self) -> bool {
        self.contains(required)
    }

    /// Labels of the active flags in [`Self::LABELS`] order, joined by [`Self::SEPARATOR`].
    ///
    /// Bits without a label are ignored. A set with no labelled bit renders as [`Self::NONE`].
    fn render(self) -> String {
        let labels: Vec<&str> = Self::LABELS
            .iter()
            .filter(|(flag, _)| self.contains(*flag))
            .map(|(_, label)| *label)
            .collect();

        if labels.is_empty() { Self::NONE.to_owned() } else { labels.join(Self::SEPARATOR) }
    }

    /// [`FlagSet::has`] over raw codes. Unknown bits are kept, so the test is plain bitwise
    /// containment.
    fn has_bits(set: Self::Bits, required: Self::Bits) -> bool {
        Self::from_bits_retain(set).has(Self::from_bits_retain(required))
    }

    /// [`FlagSet::render`] over a raw code.
    fn render_bits(bits: Self::Bits) -> String {
        Self::from_bits_retain(bits).render()
    }

    /// Parses the output of [`FlagSet::render`] back into a set.
    ///
    /// Segments are trimmed and matched exactly against the labels. An empty input or the
    /// [`Self::NONE`] sentinel yields the empty set.
    ///
    /// # Errors
    /// Returns [`DomainError::UnknownFlag`] for a segment that is not a label.
    fn parse(input: &str) -> Result<Self, DomainError> {
        let input = input.trim();
        if input.is_empty() || input == Self::NONE {
            return Ok(Self::empty());
        }

        input.split(Self::SEPARATOR).map(str::trim).try_fold(Self::empty(), |set, segment| {
            Self::LABELS
                .iter()
                .find(|(_, label)| *label == segment)
                .map(|(flag, _)| set.union(*flag))
                .ok_or_else(|| DomainError::UnknownFlag {
                    kind: Self::KIND,
                    name: segment.to_owned().into(),
                    context: None,
                })
        })
    }
}

/// Free-standing form of [`FlagSet::has_bits`].
pub fn has<F: FlagSet>(set: F::Bits, required: F::Bits) -> bool {
    F::has_bits(set, required)
}

/// Free-standing form of [`FlagSet::render_bits`].
///
/// ```rust
/// use codebook_domain::{ConfigFlags, flags};
///
/// assert_eq!(flags::render::<ConfigFlags>(12), "EnableCache,EnableDebug");
/// assert_eq!(flags::render::<ConfigFlags>(0), "None");
/// ```
pub fn render<F: FlagSet>(bits: F::Bits) -> String {
    F::render_bits(bits)
}

/// Accepts either the raw bits (number or numeric string) or a rendered set of labels.
///
/// Raw bits are retained as-is; label strings are parsed strictly.
#[derive(Debug)]
pub(crate) struct BitsOrLabels<F>(PhantomData<F>);

impl<F> BitsOrLabels<F> {
    pub(crate) const fn new() -> Self {
        Self(PhantomData)
    }
}

impl<F> Visitor<'_> for BitsOrLabels<F>
where
    F: FlagSet,
    F::Bits: TryFrom<u64>,
{
    type Value = F;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} bits or flag labels joined by '{}'", F::KIND, F::SEPARATOR)
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<F, E> {
        <F::Bits as TryFrom<u64>>::try_from(v)
            .map(F::from_bits_retain)
            .map_err(|_| E::invalid_value(Unexpected::Unsigned(v), &self))
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<F, E> {
        let bits = u64::try_from(v).map_err(|_| E::invalid_value(Unexpected::Signed(v), &self))?;
        self.visit_u64(bits)
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<F, E> {
        if let Ok(bits) = v.trim().parse::<u64>() {
            return self.visit_u64(bits);
        }
        F::parse(v).map_err(E::custom)
    }
}

/// `Display` as [`FlagSet::render`], serialized as raw bits, deserialized through
/// [`BitsOrLabels`].
macro_rules! flag_set_impls {
    ($ty:ident) => {
        impl ::std::fmt::Display for $ty {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(&$crate::flags::FlagSet::render(*self))
            }
        }

        impl ::serde::Serialize for $ty {
            fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
            where
                S: ::serde::Serializer,
            {
                serializer.serialize_u64(u64::from(self.bits()))
            }
        }

        impl<'de> ::serde::Deserialize<'de> for $ty {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: ::serde::Deserializer<'de>,
            {
                deserializer.deserialize_any($crate::flags::BitsOrLabels::<Self>::new())
            }
        }
    };
}

pub(crate) use flag_set_impls;
