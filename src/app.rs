// src/app.rs
use crate::catalog::{Catalog, CatalogFetcher, CatalogState};
use crate::config::Config;
use crate::db::{self, hostels, Database};
use crate::engine::{Coordinator, ViewSettings};
use crate::errors::ServerError;
use std::fs;
use tracing::{error, info, warn};

/// Everything a request handler needs. Shared read-only across workers.
#[derive(Debug, Clone)]
pub struct App {
    pub db: Database,
    pub config: Config,
    pub catalog: CatalogState,
}

impl App {
    pub fn new(db: Database, config: Config, catalog: CatalogState) -> Self {
        Self {
            db,
            config,
            catalog,
        }
    }

    /// Applies the schema and loads the catalog. Only a schema failure is
    /// fatal; a catalog that cannot be loaded leaves the app serving the
    /// offline notice.
    pub fn start(config: Config) -> Result<Self, ServerError> {
        let db = Database::new(config.db_path.clone());
        db::init_db(&db, &config.schema_path)?;

        let catalog = match load_catalog(&db, &config) {
            Ok(catalog) => {
                if catalog.is_empty() {
                    warn!("Catalog is empty; listings will show no hostels");
                } else {
                    info!("Catalog ready with {} hostels", catalog.len());
                }
                CatalogState::Ready(catalog)
            }
            Err(e) => {
                error!("Catalog unavailable: {e}");
                CatalogState::Unavailable(e.to_string())
            }
        };

        Ok(Self::new(db, config, catalog))
    }

    pub fn settings(&self) -> ViewSettings {
        ViewSettings {
            page_size: self.config.page_size,
            price_ceiling: self.config.price_ceiling,
        }
    }

    /// Errors with `CatalogError` while the catalog is unavailable.
    pub fn catalog(&self) -> Result<&Catalog, ServerError> {
        match &self.catalog {
            CatalogState::Ready(catalog) => Ok(catalog),
            CatalogState::Unavailable(reason) => Err(ServerError::CatalogError(reason.clone())),
        }
    }

    pub fn coordinator(&self) -> Option<Coordinator<'_>> {
        self.catalog
            .catalog()
            .map(|catalog| Coordinator::new(catalog, self.settings()))
    }
}

fn load_catalog(db: &Database, config: &Config) -> Result<Catalog, ServerError> {
    if let Some(url) = &config.catalog_url {
        let catalog = CatalogFetcher::new()?.fetch(url)?;
        // Bookings reference hostel rows, so the fetched list is mirrored locally.
        hostels::mirror_catalog(db, &catalog)?;
        return Ok(catalog);
    }

    match fs::read_to_string(&config.seed_path) {
        Ok(json) => {
            let seed = Catalog::from_json(&json)?;
            let inserted = hostels::seed_if_empty(db, &seed)?;
            if inserted > 0 {
                info!("Seeded {inserted} hostels from {}", config.seed_path);
            }
        }
        Err(e) => warn!("No seed data at {}: {e}", config.seed_path),
    }

    hostels::load_catalog(db)
}
