#[codebook_derive::codebook_error]
pub enum DemoError {
    #[error("Read failed{}: {source}", format_context(.context))]
    Read { source: std::io::Error, context: Option<std::borrow::Cow<'static, str>> },

    #[error("Write failed{}: {source}", format_context(.context))]
    Write { source: std::io::Error, context: Option<std::borrow::Cow<'static, str>> },
}

fn main() {}
