pub mod mock_query_client;

pub use mock_query_client::*;
