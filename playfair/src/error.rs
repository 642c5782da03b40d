//! Error types for Playfair cipher operations

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PlayfairError {
    #[error("Unsupported character '{0}' (only letters A-Z and spaces are allowed)")]
    UnsupportedCharacter(char),
}

pub type Result<T> = std::result::Result<T, PlayfairError>;
