mod action_tests;
mod booking_flow_tests;
mod listing_tests;
mod nearby_tests;
mod page_tests;
