//! dnsdig Application Layer
//!
//! Ports the outside world implements, the error classifier, and the lookup
//! use cases that drive them.
pub mod events;
pub mod ports;
pub mod services;
pub mod use_cases;
