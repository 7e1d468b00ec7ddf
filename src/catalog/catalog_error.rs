use crate::errors::ServerError;
use std::error::Error;
use std::fmt;

#[derive(Debug)]
pub enum CatalogError {
    Network(String),
    JsonParse(String),
    UnexpectedShape(String),
    DuplicateId(i64),
}

impl fmt::Display for CatalogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogError::Network(msg) => write!(f, "Network error: {msg}"),
            CatalogError::JsonParse(msg) => write!(f, "JSON parse error: {msg}"),
            CatalogError::UnexpectedShape(msg) => write!(f, "Unexpected data shape: {msg}"),
            CatalogError::DuplicateId(id) => write!(f, "Duplicate hostel id {id}"),
        }
    }
}

impl Error for CatalogError {}

impl From<CatalogError> for ServerError {
    fn from(err: CatalogError) -> Self {
        ServerError::CatalogError(err.to_string())
    }
}
