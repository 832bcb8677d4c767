use thiserror::Error;

/// Failures of a render run
///
/// Every variant carries its underlying cause and renders as the exact
/// user-facing message the CLI prints. Read and decode failures stop the run;
/// a write failure only loses the output file.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("Error reading file: {0}")]
    Read(#[source] std::io::Error),

    #[error("Error decoding image: {0}")]
    Decode(#[from] image::ImageError),

    #[error("Error saving ASCII art: {0}")]
    Write(#[source] std::io::Error),
}
