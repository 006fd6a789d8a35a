pub mod forwarding;
pub mod probe;
pub mod transport;

pub use probe::{DnsProbeClient, DnsProbeFactory};
