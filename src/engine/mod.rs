pub mod coordinator;
pub mod pagination;
pub mod presentation;
pub mod query;

#[cfg(test)]
pub(crate) mod test_support;

pub use coordinator::{Coordinator, Effect, Event, ResultsView, ViewSettings};
pub use pagination::{PageNav, PaginationState};
pub use presentation::{to_view_model, DisplayRecord, StarRating};
