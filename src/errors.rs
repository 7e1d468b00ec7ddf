// errors.rs
use std::fmt;

/// Errors originating from either the server logic
/// (routing, missing resources, bad input) or downstream layers (DB, catalog, config).
#[derive(Debug)]
pub enum ServerError {
    NotFound,
    BadRequest(String),
    DbError(String),
    CatalogError(String),
    ConfigError(String),
    InternalError,
}

impl ServerError {
    pub fn status(&self) -> u16 {
        match self {
            ServerError::NotFound => 404,
            ServerError::BadRequest(_) => 400,
            ServerError::CatalogError(_) => 503,
            ServerError::DbError(_) | ServerError::ConfigError(_) | ServerError::InternalError => {
                500
            }
        }
    }
}

impl fmt::Display for ServerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ServerError::NotFound => write!(f, "Not Found"),
            ServerError::BadRequest(msg) => write!(f, "Bad Request: {msg}"),
            ServerError::DbError(msg) => write!(f, "Database Error: {msg}"),
            ServerError::CatalogError(msg) => write!(f, "Catalog Error: {msg}"),
            ServerError::ConfigError(msg) => write!(f, "Configuration Error: {msg}"),
            ServerError::InternalError => write!(f, "Internal Server Error"),
        }
    }
}

impl std::error::Error for ServerError {}
