use thiserror::Error;

#[derive(Debug, Error)]
pub enum SpotError {
    #[error("spot parse error: {0}")]
    Parse(String),

    #[error("duplicate spot id {0:?}")]
    DuplicateId(String),

    #[error("spot {id:?} has invalid price {price}")]
    InvalidPrice { id: String, price: f64 },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type SpotResult<T> = Result<T, SpotError>;
