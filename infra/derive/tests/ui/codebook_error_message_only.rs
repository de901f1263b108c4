use codebook_derive::codebook_error;
use std::borrow::Cow;

#[codebook_error]
#[derive(Debug)]
pub enum LookupError {
    #[error("Unknown key: {key}")]
    UnknownKey { key: u32 },

    #[error("Rejected{}: {message}", format_context(.context))]
    Rejected { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

fn main() {
    let err: Result<(), LookupError> = Err(LookupError::UnknownKey { key: 7 });
    let _ = err.context("ignored for variants without context");
}
