//! Sieve DNS Infrastructure Layer
//!
//! Concrete adapters for the application ports: blocklist matcher and file
//! source, response cache, UDP upstream forwarder, telemetry channel and the
//! UDP server front-end.
pub mod dns;
