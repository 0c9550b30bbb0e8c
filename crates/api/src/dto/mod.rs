pub mod dig;
pub mod stats;

pub use dig::{DigParams, ErrorResponse};
pub use stats::StatsResponse;
