pub mod criteria;
pub mod hostel;

pub use criteria::{QueryCriteria, RoommateFilter, SortKey};
pub use hostel::{Coordinates, HostelPayload, HostelRecord, RoommatePreference};
