// src/domain/criteria.rs

use crate::domain::hostel::RoommatePreference;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RoommateFilter {
    #[default]
    Any,
    Only(RoommatePreference),
}

impl RoommateFilter {
    pub fn parse(raw: &str) -> Option<Self> {
        if raw.trim().eq_ignore_ascii_case("any") {
            return Some(RoommateFilter::Any);
        }
        RoommatePreference::parse(raw).map(RoommateFilter::Only)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RoommateFilter::Any => "any",
            RoommateFilter::Only(pref) => pref.as_str(),
        }
    }

    pub fn admits(&self, pref: RoommatePreference) -> bool {
        match self {
            RoommateFilter::Any => true,
            RoommateFilter::Only(wanted) => *wanted == pref,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortKey {
    /// Original catalog order.
    #[default]
    Featured,
    PriceAsc,
    PriceDesc,
    RatingDesc,
    /// Highest id first; ids grow as hostels are listed.
    Newest,
}

impl SortKey {
    pub const ALL: [SortKey; 5] = [
        SortKey::Featured,
        SortKey::PriceAsc,
        SortKey::PriceDesc,
        SortKey::RatingDesc,
        SortKey::Newest,
    ];

    /// Accepts the select values used by the listing page.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim() {
            "featured" => Some(SortKey::Featured),
            "price-low" => Some(SortKey::PriceAsc),
            "price-high" => Some(SortKey::PriceDesc),
            "rating" => Some(SortKey::RatingDesc),
            "newest" => Some(SortKey::Newest),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::Featured => "featured",
            SortKey::PriceAsc => "price-low",
            SortKey::PriceDesc => "price-high",
            SortKey::RatingDesc => "rating",
            SortKey::Newest => "newest",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SortKey::Featured => "Featured",
            SortKey::PriceAsc => "Price: Low to High",
            SortKey::PriceDesc => "Price: High to Low",
            SortKey::RatingDesc => "Highest Rated",
            SortKey::Newest => "Newest",
        }
    }
}

/// The user's current filter and sort selection. Rebuilt on every interaction.
#[derive(Debug, Clone, PartialEq)]
pub struct QueryCriteria {
    pub search_term: String,
    pub max_price: i64,
    pub roommate: RoommateFilter,
    pub min_rating: f64,
    pub sort_key: SortKey,
}

impl QueryCriteria {
    /// Criteria that admit every record priced at or below `price_ceiling`.
    pub fn defaults(price_ceiling: i64) -> Self {
        Self {
            search_term: String::new(),
            max_price: price_ceiling,
            roommate: RoommateFilter::Any,
            min_rating: 0.0,
            sort_key: SortKey::Featured,
        }
    }
}
