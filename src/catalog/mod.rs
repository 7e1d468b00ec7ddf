mod catalog_error;
mod remote;
mod store;

pub use catalog_error::CatalogError;
pub use remote::CatalogFetcher;
pub use store::{Catalog, CatalogState};
