use thiserror::Error;

#[derive(Debug, Error)]
pub enum CasterError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("yaml error: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("image error: {0}")]
    Image(#[from] image::ImageError),
    #[error("invalid map: {0}")]
    InvalidMap(String),
    #[error("invalid config: {0}")]
    InvalidConfig(String),
    #[error("out of bounds: {0}")]
    OutOfBounds(String),
}
