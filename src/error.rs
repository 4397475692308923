use thiserror::Error;

pub type GraphResult<T> = Result<T, GraphError>;

#[derive(Debug, Error)]
pub enum GraphError {
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("invalid frame geometry: {0}")]
    InvalidFrame(String),
}
