#[codebook_derive::codebook_error]
pub enum DemoError {
    #[error("IO error: {source}")]
    Io { source: std::io::Error },
}

fn main() {}
