//! Sieve DNS Application Layer
//!
//! Ports describe what the resolution pipeline needs from the outside world;
//! use cases compose them. Concrete adapters live in `sieve-dns-infrastructure`.
pub mod ports;
pub mod services;
pub mod use_cases;
