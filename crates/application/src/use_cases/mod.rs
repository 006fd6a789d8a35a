pub mod validation;

pub use validation::{LoadDomainsUseCase, LoadedDomains, ValidateDomainsUseCase};
