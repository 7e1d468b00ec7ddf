pub mod booking;
pub mod hostels;
pub mod login;
pub mod nearby;
