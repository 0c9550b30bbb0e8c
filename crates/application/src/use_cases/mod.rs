pub mod lookup;

pub use lookup::{LookupDomainUseCase, ResolveRecordsUseCase};
