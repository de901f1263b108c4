use std::borrow::Cow;

/// Errors raised by the strict conversions into domain types.
///
/// Rendering never produces these; only `TryFrom`, `FromStr`, [`crate::FlagSet::parse`] and
/// deserialization do.
#[codebook_derive::codebook_error]
#[derive(Clone, PartialEq, Eq)]
pub enum DomainError {
    /// The integer code does not map to any case of the enumeration.
    #[error("Unknown {kind} code {code}{}", format_context(.context))]
    UnknownCode { kind: &'static str, code: u64, context: Option<Cow<'static, str>> },

    /// The name does not match any case of the enumeration.
    #[error("Unknown {kind} name '{name}'{}", format_context(.context))]
    UnknownName { kind: &'static str, name: Cow<'static, str>, context: Option<Cow<'static, str>> },

    /// A segment of a rendered flag set does not name a known flag.
    #[error("Unknown {kind} flag '{name}'{}", format_context(.context))]
    UnknownFlag { kind: &'static str, name: Cow<'static, str>, context: Option<Cow<'static, str>> },
}
