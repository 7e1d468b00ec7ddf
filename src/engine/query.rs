// src/engine/query.rs

//! Filtering and ordering of the catalog.
//!
//! A `ResultSet` stores catalog positions rather than records, so it can live
//! inside a `ViewState` without borrowing the catalog. Every function here is
//! pure: the catalog is only read and a new `ResultSet` is returned.

use crate::catalog::Catalog;
use crate::domain::{HostelRecord, QueryCriteria, SortKey};

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ResultSet {
    positions: Vec<usize>,
}

impl ResultSet {
    /// Every record, in catalog order.
    pub fn all(catalog: &Catalog) -> Self {
        Self {
            positions: (0..catalog.len()).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    pub fn positions(&self) -> &[usize] {
        &self.positions
    }

    pub fn records<'a>(&'a self, catalog: &'a Catalog) -> impl Iterator<Item = &'a HostelRecord> {
        self.positions.iter().filter_map(move |&pos| catalog.at(pos))
    }

    pub fn ids(&self, catalog: &Catalog) -> Vec<i64> {
        self.records(catalog).map(|r| r.id).collect()
    }
}

/// True when `record` passes every predicate in `criteria`.
pub fn matches(record: &HostelRecord, criteria: &QueryCriteria) -> bool {
    passes(record, criteria, &criteria.search_term.to_lowercase())
}

fn passes(record: &HostelRecord, criteria: &QueryCriteria, term: &str) -> bool {
    matches_search(record, term)
        && record.price <= criteria.max_price
        && criteria.roommate.admits(record.roommate)
        && record.rating >= criteria.min_rating
}

/// `term` must already be lower-cased.
fn matches_search(record: &HostelRecord, term: &str) -> bool {
    if term.is_empty() {
        return true;
    }
    [&record.name, &record.location, &record.description]
        .iter()
        .any(|field| field.to_lowercase().contains(term))
}

/// Applies `criteria` to the whole catalog.
pub fn filter(catalog: &Catalog, criteria: &QueryCriteria) -> ResultSet {
    refine(catalog, &ResultSet::all(catalog), criteria)
}

/// Applies `criteria` to an existing result set, keeping only its members.
pub fn refine(catalog: &Catalog, results: &ResultSet, criteria: &QueryCriteria) -> ResultSet {
    let term = criteria.search_term.to_lowercase();

    let positions = results
        .positions
        .iter()
        .copied()
        .filter(|&pos| catalog.at(pos).is_some_and(|r| passes(r, criteria, &term)))
        .collect();

    sort(catalog, &ResultSet { positions }, criteria.sort_key)
}

/// Reorders without refiltering. Ties keep their incoming order;
/// `Featured` restores catalog order.
pub fn sort(catalog: &Catalog, results: &ResultSet, key: SortKey) -> ResultSet {
    let records = catalog.records();
    let mut positions: Vec<usize> = results
        .positions
        .iter()
        .copied()
        .filter(|&pos| pos < records.len())
        .collect();

    match key {
        SortKey::Featured => positions.sort_unstable(),
        SortKey::PriceAsc => positions.sort_by_key(|&p| records[p].price),
        SortKey::PriceDesc => positions.sort_by(|&a, &b| records[b].price.cmp(&records[a].price)),
        SortKey::RatingDesc => {
            positions.sort_by(|&a, &b| records[b].rating.total_cmp(&records[a].rating))
        }
        SortKey::Newest => positions.sort_by(|&a, &b| records[b].id.cmp(&records[a].id)),
    }

    ResultSet { positions }
}
