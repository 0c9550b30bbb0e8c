pub mod answer;
pub mod query_type;
pub mod record_type;

pub use answer::RawAnswer;
pub use query_type::{QueryType, TypeSelector};
pub use record_type::RecordType;
