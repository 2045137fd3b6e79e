//! Query layer over the radiology reference database.
//!
//! All queries are pure linear scans that preserve database order and hand
//! out shared borrows. `RadiologyIndex` is an opt-in escape hatch for
//! repeated lookups.

pub mod index;
pub mod radiology;

pub use index::{tokenize, RadiologyIndex};
pub use radiology::{
    filter_by_category, get_entry_by_id, radiology_database, search_radiology_entries,
    RadiologyDatabase,
};
