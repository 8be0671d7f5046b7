use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum CipherError {
    #[error("Bellaso key must not be empty")]
    EmptyKey,
}

pub type Result<T> = std::result::Result<T, CipherError>;
