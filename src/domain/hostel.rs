// src/domain/hostel.rs

use serde::Deserialize;
use serde_json::Value;
use std::fmt;

/// Whether a listing is a solo room or a shared room.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RoommatePreference {
    #[default]
    Alone,
    Share,
}

impl RoommatePreference {
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "alone" => Some(RoommatePreference::Alone),
            "share" => Some(RoommatePreference::Share),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RoommatePreference::Alone => "alone",
            RoommatePreference::Share => "share",
        }
    }
}

impl fmt::Display for RoommatePreference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinates {
    pub lat: f64,
    pub long: f64,
}

/// A catalog entry. Immutable once loaded.
#[derive(Debug, Clone, PartialEq)]
pub struct HostelRecord {
    pub id: i64,
    pub name: String,
    pub location: String,
    pub description: String,

    // Whole Kenyan shillings
    pub price: i64,
    pub original_price: i64,
    pub discount_percent: i64,

    pub roommate: RoommatePreference,
    pub rating: f64,
    pub review_count: u32,

    pub amenities: Vec<String>,
    pub images: Vec<String>,
    pub landlord: Option<String>,

    pub verified: bool,
    pub available: bool,
    pub coordinates: Option<Coordinates>,
}

/// Percentage knocked off `original_price`, rounded to the nearest whole percent.
pub fn derive_discount_percent(price: i64, original_price: i64) -> i64 {
    if original_price <= 0 {
        return 0;
    }
    let off = (original_price - price) as f64 / original_price as f64 * 100.0;
    off.round() as i64
}

/// Loosely-shaped hostel object as it arrives from a JSON list, a remote
/// "nearby" response, or a database row. Every field is optional here;
/// `into_record` decides which are required and how the rest default.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HostelPayload {
    pub id: Option<i64>,
    pub name: Option<String>,
    #[serde(alias = "locationText", alias = "location_text")]
    pub location: Option<String>,
    pub description: Option<String>,

    pub price: Option<f64>,
    #[serde(alias = "original_price")]
    pub original_price: Option<f64>,
    #[serde(alias = "discountPercent", alias = "discount_percent")]
    pub discount: Option<f64>,

    #[serde(
        alias = "roommate_option",
        alias = "roommatePreference",
        alias = "roommate_preference"
    )]
    pub roommate_option: Option<String>,
    pub rating: Option<f64>,
    #[serde(alias = "reviewCount", alias = "review_count")]
    pub reviews: Option<i64>,

    pub amenities: Option<Value>,
    pub images: Option<Vec<String>>,
    #[serde(alias = "image_url")]
    pub image_url: Option<String>,
    pub landlord: Option<String>,

    pub verified: Option<bool>,
    pub available: Option<bool>,

    #[serde(alias = "latitude")]
    pub lat: Option<f64>,
    #[serde(alias = "lng", alias = "longitude")]
    pub long: Option<f64>,
}

impl HostelPayload {
    /// Builds a `HostelRecord`, failing only when `id`, `name` or `price` is absent.
    pub fn into_record(self) -> Result<HostelRecord, String> {
        let id = self.id.ok_or("Missing id")?;
        let name = self
            .name
            .filter(|s| !s.trim().is_empty())
            .ok_or_else(|| format!("Missing or empty name for hostel {id}"))?;
        let price = self
            .price
            .map(|p| p.round() as i64)
            .ok_or_else(|| format!("Missing price for hostel {id}"))?;

        let original_price = self.original_price.map(|p| p.round() as i64).unwrap_or(price);
        let discount_percent = self
            .discount
            .map(|d| d.round() as i64)
            .unwrap_or_else(|| derive_discount_percent(price, original_price));

        let mut images = self.images.unwrap_or_default();
        if let Some(url) = self.image_url.filter(|u| !u.is_empty()) {
            if !images.contains(&url) {
                images.insert(0, url);
            }
        }

        let coordinates = match (self.lat, self.long) {
            (Some(lat), Some(long)) => Some(Coordinates { lat, long }),
            _ => None,
        };

        Ok(HostelRecord {
            id,
            name,
            location: self.location.unwrap_or_default(),
            description: self.description.unwrap_or_default(),
            price,
            original_price,
            discount_percent,
            roommate: self
                .roommate_option
                .as_deref()
                .and_then(RoommatePreference::parse)
                .unwrap_or_default(),
            rating: self.rating.unwrap_or(0.0),
            review_count: self.reviews.unwrap_or(0).clamp(0, u32::MAX as i64) as u32,
            amenities: string_list_from_value(self.amenities),
            images,
            landlord: self.landlord.filter(|s| !s.is_empty()),
            verified: self.verified.unwrap_or(false),
            available: self.available.unwrap_or(true),
            coordinates,
        })
    }
}

/// Tag and URL lists come either as a JSON array, a JSON-encoded array inside a string
/// (MySQL JSON columns), or a comma-separated string. Anything else is empty.
pub fn string_list_from_value(value: Option<Value>) -> Vec<String> {
    match value {
        Some(Value::Array(items)) => items
            .into_iter()
            .filter_map(|v| match v {
                Value::String(s) => Some(s),
                _ => None,
            })
            .collect(),
        Some(Value::String(raw)) => {
            let trimmed = raw.trim();
            if trimmed.starts_with('[') {
                serde_json::from_str::<Vec<String>>(trimmed).unwrap_or_default()
            } else {
                trimmed
                    .split(',')
                    .map(str::trim)
                    .filter(|s| !s.is_empty())
                    .map(String::from)
                    .collect()
            }
        }
        _ => Vec::new(),
    }
}
