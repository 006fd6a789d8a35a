//! Ferrous Sweep Infrastructure Layer
//!
//! Adapters for the application ports: DNS existence queries over UDP/TCP,
//! HTTP and file list sources, file result sinks and tracing-based progress
//! reporting.
pub mod dns;
pub mod output;
pub mod progress;
pub mod sources;
