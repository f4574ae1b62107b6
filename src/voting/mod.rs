pub mod summary;

pub use summary::{calculate_results, fetch_results};
