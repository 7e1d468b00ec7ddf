// src/catalog/store.rs
use crate::catalog::CatalogError;
use crate::domain::{HostelPayload, HostelRecord};
use serde_json::Value;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::warn;

/// The hostel listings for the lifetime of the process.
///
/// Cloning is cheap: the records live behind an `Arc` and are never mutated
/// after construction, so every worker thread reads the same list.
#[derive(Debug, Clone)]
pub struct Catalog {
    records: Arc<[HostelRecord]>,
    by_id: Arc<HashMap<i64, usize>>,
}

impl Catalog {
    /// Ids must be unique.
    pub fn from_records(records: Vec<HostelRecord>) -> Result<Self, CatalogError> {
        let mut by_id = HashMap::with_capacity(records.len());
        for (pos, record) in records.iter().enumerate() {
            if by_id.insert(record.id, pos).is_some() {
                return Err(CatalogError::DuplicateId(record.id));
            }
        }

        Ok(Self {
            records: records.into(),
            by_id: Arc::new(by_id),
        })
    }

    /// Parses a JSON array of hostel objects. Entries that are not objects or
    /// lack an id, name or price are skipped with a warning.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let value: Value =
            serde_json::from_str(json).map_err(|e| CatalogError::JsonParse(e.to_string()))?;
        Self::from_value(value)
    }

    pub fn from_value(value: Value) -> Result<Self, CatalogError> {
        let items = match value {
            Value::Array(items) => items,
            other => {
                return Err(CatalogError::UnexpectedShape(format!(
                    "expected an array of hostels, got {}",
                    json_kind(&other)
                )))
            }
        };

        let mut records = Vec::with_capacity(items.len());
        for (i, item) in items.into_iter().enumerate() {
            let payload: HostelPayload = match serde_json::from_value(item) {
                Ok(p) => p,
                Err(e) => {
                    warn!("Skipping hostel entry {i}: {e}");
                    continue;
                }
            };
            match payload.into_record() {
                Ok(record) => records.push(record),
                Err(e) => warn!("Skipping hostel entry {i}: {e}"),
            }
        }

        Self::from_records(records)
    }

    pub fn records(&self) -> &[HostelRecord] {
        &self.records
    }

    pub fn get(&self, id: i64) -> Option<&HostelRecord> {
        self.by_id.get(&id).map(|&pos| &self.records[pos])
    }

    /// Record at a catalog position, as stored in a `ResultSet`.
    pub fn at(&self, pos: usize) -> Option<&HostelRecord> {
        self.records.get(pos)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

fn json_kind(v: &Value) -> &'static str {
    match v {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// What the listing page works from: either a loaded catalog or the reason
/// loading failed.
#[derive(Debug, Clone)]
pub enum CatalogState {
    Ready(Catalog),
    Unavailable(String),
}

impl CatalogState {
    pub fn catalog(&self) -> Option<&Catalog> {
        match self {
            CatalogState::Ready(c) => Some(c),
            CatalogState::Unavailable(_) => None,
        }
    }
}
