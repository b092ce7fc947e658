//! Best-effort cleanup of individual listing fields.

pub mod dates;
pub mod location;

pub use dates::{DEFAULT_YEAR, parse_date_range};
pub use location::clean_location;
