pub mod batch_resolver;
pub mod group_resolver;
pub mod round_orchestrator;

pub use batch_resolver::{BatchResolver, RetryPolicy, DEFAULT_MIN_SUCCESS_THRESHOLD};
pub use group_resolver::{GroupResolver, DEFAULT_CONCURRENCY_PER_GROUP};
pub use round_orchestrator::{assign_shards, RoundOrchestrator};
