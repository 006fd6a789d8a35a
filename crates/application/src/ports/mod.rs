pub mod list_source;
pub mod probe_client;
pub mod progress;
pub mod result_sink;

pub use list_source::ListSource;
pub use probe_client::{ProbeClient, ProbeClientFactory};
pub use progress::{NoopProgressObserver, ProgressObserver, RoundReport};
pub use result_sink::ResultSink;
