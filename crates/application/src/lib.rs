//! Ferrous Sweep Application Layer
//!
//! Ports for the outside world (DNS query clients, list sources, result sinks,
//! progress observers), the round-based resolution engine and the use cases
//! that tie them together.
pub mod ports;
pub mod services;
pub mod use_cases;
