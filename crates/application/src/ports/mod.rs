pub mod dns_query_client;
pub mod domain_validator;

pub use dns_query_client::DnsQueryClient;
pub use domain_validator::DomainValidator;
