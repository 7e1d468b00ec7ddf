pub mod bookings;
pub mod connection;
pub mod geo;
pub mod hostels;

pub use connection::{init_db, Database};
