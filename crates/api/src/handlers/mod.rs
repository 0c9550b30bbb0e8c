pub mod dig;
pub mod health;
pub mod stats;

pub use dig::{dig_body, dig_query};
pub use health::health_check;
pub use stats::get_stats;
