// src/engine/presentation.rs

use crate::domain::{HostelRecord, RoommatePreference};

pub const AMENITY_PREVIEW_LEN: usize = 3;
const MAX_STARS: u8 = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StarGlyph {
    Full,
    Half,
    Empty,
}

impl StarGlyph {
    /// Font Awesome classes used by the card markup.
    pub fn css_class(&self) -> &'static str {
        match self {
            StarGlyph::Full => "fas fa-star",
            StarGlyph::Half => "fas fa-star-half-alt",
            StarGlyph::Empty => "far fa-star",
        }
    }
}

/// `full + half + empty == 5` for every rating.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StarRating {
    pub full: u8,
    pub half: bool,
    pub empty: u8,
}

impl StarRating {
    pub fn from_rating(rating: f64) -> Self {
        let rating = if rating.is_nan() {
            0.0
        } else {
            rating.clamp(0.0, MAX_STARS as f64)
        };
        let full = rating.floor() as u8;
        let half = rating - rating.floor() >= 0.5;
        let empty = MAX_STARS - full - half as u8;
        Self { full, half, empty }
    }

    pub fn glyphs(&self) -> Vec<StarGlyph> {
        let mut out = Vec::with_capacity(MAX_STARS as usize);
        out.extend(std::iter::repeat(StarGlyph::Full).take(self.full as usize));
        if self.half {
            out.push(StarGlyph::Half);
        }
        out.extend(std::iter::repeat(StarGlyph::Empty).take(self.empty as usize));
        out
    }
}

/// Everything a hostel card needs, already formatted.
#[derive(Debug, Clone, PartialEq)]
pub struct DisplayRecord {
    pub id: i64,
    pub name: String,
    pub location: String,

    pub price: i64,
    pub price_label: String,
    pub original_price_label: String,
    /// Negative when the listing is priced above its original price.
    pub savings: i64,
    pub savings_label: String,
    pub discount_badge: String,

    pub roommate_label: &'static str,
    pub roommate_icon: &'static str,

    pub stars: StarRating,
    pub rating_label: String,

    pub amenity_preview: Vec<String>,
    pub more_amenities: Option<String>,

    pub images: Vec<String>,
    pub verified: bool,
    pub available: bool,
}

pub fn to_view_model(record: &HostelRecord) -> DisplayRecord {
    let savings = record.original_price - record.price;
    let (amenity_preview, more_amenities) = amenity_preview(&record.amenities);

    DisplayRecord {
        id: record.id,
        name: record.name.clone(),
        location: record.location.clone(),
        price: record.price,
        price_label: format_kes(record.price),
        original_price_label: format_kes(record.original_price),
        savings,
        savings_label: format!("Save {}", format_kes(savings)),
        discount_badge: format!("{}% off", record.discount_percent),
        roommate_label: roommate_label(record.roommate),
        roommate_icon: roommate_icon(record.roommate),
        stars: StarRating::from_rating(record.rating),
        rating_label: format!(
            "{} ({})",
            format_rating(record.rating),
            record.review_count
        ),
        amenity_preview,
        more_amenities,
        images: record.images.clone(),
        verified: record.verified,
        available: record.available,
    }
}

/// First three amenities verbatim, plus a "+N more" marker for the rest.
pub fn amenity_preview(amenities: &[String]) -> (Vec<String>, Option<String>) {
    let shown = amenities
        .iter()
        .take(AMENITY_PREVIEW_LEN)
        .cloned()
        .collect();
    let more = (amenities.len() > AMENITY_PREVIEW_LEN)
        .then(|| format!("+{} more", amenities.len() - AMENITY_PREVIEW_LEN));
    (shown, more)
}

pub fn roommate_label(pref: RoommatePreference) -> &'static str {
    match pref {
        RoommatePreference::Alone => "Stay Alone",
        RoommatePreference::Share => "Share Room",
    }
}

fn roommate_icon(pref: RoommatePreference) -> &'static str {
    match pref {
        RoommatePreference::Alone => "fa-user",
        RoommatePreference::Share => "fa-users",
    }
}

/// "4" for whole ratings, "4.5" otherwise.
pub fn format_rating(rating: f64) -> String {
    if rating.fract() == 0.0 {
        format!("{rating:.0}")
    } else {
        format!("{rating}")
    }
}

/// "KES 12,000"
pub fn format_kes(amount: i64) -> String {
    format!("KES {}", group_thousands(amount))
}

pub fn group_thousands(n: i64) -> String {
    let digits = n.unsigned_abs().to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if n < 0 {
        out.push('-');
    }
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}
