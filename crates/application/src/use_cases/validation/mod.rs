pub mod load_domains;
pub mod validate_domains;

pub use load_domains::{LoadDomainsUseCase, LoadedDomains};
pub use validate_domains::ValidateDomainsUseCase;
