pub mod lookup_domain;
pub mod resolve_records;

pub use lookup_domain::LookupDomainUseCase;
pub use resolve_records::ResolveRecordsUseCase;
