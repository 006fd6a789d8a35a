use thiserror::Error;

#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Invalid domain name: {0}")]
    InvalidDomainName(String),

    #[error("Invalid resolver endpoint: {0}")]
    InvalidEndpoint(String),

    #[error("Resolver endpoint set cannot be empty")]
    EmptyEndpointSet,

    #[error("List source '{source_name}' failed: {reason}")]
    ListSource { source_name: String, reason: String },

    #[error("Invalid DNS response: {0}")]
    InvalidDnsResponse(String),

    #[error("Transport error: {0}")]
    Transport(String),

    #[error("I/O error: {0}")]
    IoError(String),

    #[error("Query timeout")]
    QueryTimeout,
}

impl DomainError {
    pub fn list_source(source_name: &str, reason: impl Into<String>) -> Self {
        Self::ListSource {
            source_name: source_name.to_string(),
            reason: reason.into(),
        }
    }
}

impl From<std::io::Error> for DomainError {
    fn from(e: std::io::Error) -> Self {
        Self::IoError(e.to_string())
    }
}
