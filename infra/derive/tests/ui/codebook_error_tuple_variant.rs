#[codebook_derive::codebook_error]
pub enum DemoError {
    Io(std::io::Error),
}

fn main() {}
