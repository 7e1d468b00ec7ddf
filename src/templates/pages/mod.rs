pub mod booking;
pub mod detail;
pub mod home;
pub mod hostels;
pub mod login;

pub use booking::{booking_confirmed_page, booking_page};
pub use detail::detail_page;
pub use home::home_page;
pub use hostels::{hostels_page, HostelsVm, Listing};
pub use login::login_page;
