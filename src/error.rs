use thiserror::Error;

#[derive(Debug, Error)]
pub enum IconError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("image error: {0}")]
    Image(#[from] image::ImageError),
    #[error("rendered buffer does not match canvas dimensions")]
    InvalidBuffer,
}
