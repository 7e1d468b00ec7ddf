use crate::catalog::Catalog;
use crate::domain::{HostelRecord, RoommatePreference};

/// A solo-room hostel with no discount and no amenities.
pub fn hostel(id: i64, name: &str, price: i64, rating: f64) -> HostelRecord {
    HostelRecord {
        id,
        name: name.to_string(),
        location: String::new(),
        description: String::new(),
        price,
        original_price: price,
        discount_percent: 0,
        roommate: RoommatePreference::Alone,
        rating,
        review_count: 0,
        amenities: Vec::new(),
        images: Vec::new(),
        landlord: None,
        verified: false,
        available: true,
        coordinates: None,
    }
}

fn tags(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// The three launch listings around DeKUT.
pub fn sample_catalog() -> Catalog {
    let maisha = HostelRecord {
        location: "Dedan Kimathi University, Boma, opposite Sunrise hostel".into(),
        description: "Modern hostel with great views of the campus. Each room has ensuite bathroom and high-speed WiFi.".into(),
        original_price: 12000,
        discount_percent: 50,
        review_count: 24,
        amenities: tags(&["WiFi", "Security", "Laundry", "Study Room"]),
        verified: true,
        ..hostel(1, "Maisha Hostel", 6000, 4.5)
    };
    let paradise = HostelRecord {
        location: "DeKUT, Gate A".into(),
        description: "Affordable shared accommodation with common study areas and 24/7 security.".into(),
        original_price: 8500,
        discount_percent: 15,
        roommate: RoommatePreference::Share,
        review_count: 18,
        amenities: tags(&["WiFi", "Common Kitchen", "Security", "TV Room"]),
        verified: true,
        ..hostel(2, "Paradise Hostels", 7200, 4.0)
    };
    let catholic = HostelRecord {
        location: "DeKUT, Gate B, Nyeri View".into(),
        description: "Budget-friendly accommodation with quiet environment perfect for studying.".into(),
        original_price: 4000,
        discount_percent: 25,
        review_count: 12,
        amenities: tags(&["WiFi", "Security", "Prayer Room"]),
        verified: true,
        ..hostel(3, "Catholic Hostel", 2999, 3.5)
    };

    Catalog::from_records(vec![maisha, paradise, catholic]).unwrap()
}
