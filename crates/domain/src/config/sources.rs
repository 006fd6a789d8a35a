use serde::{Deserialize, Serialize};

/// Public anti-AD domain list, used when no list is configured.
pub const DEFAULT_DOMAIN_LIST: &str =
    "https://raw.githubusercontent.com/privacy-protection-tools/anti-AD/master/anti-ad-domains.txt";

/// Input list locations. Each location is an `http(s)://` URL or a local path.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SourcesConfig {
    /// Primary newline-delimited domain list (default: the anti-AD list)
    #[serde(default = "default_domain_list")]
    pub domain_list: String,

    /// Lists whose entries are removed from the domain list before resolving
    #[serde(default)]
    pub filter_lists: Vec<String>,

    /// HTTP fetch timeout in seconds (default: 30)
    #[serde(default = "default_fetch_timeout_secs")]
    pub fetch_timeout_secs: u64,
}

impl Default for SourcesConfig {
    fn default() -> Self {
        Self {
            domain_list: default_domain_list(),
            filter_lists: vec![],
            fetch_timeout_secs: default_fetch_timeout_secs(),
        }
    }
}

fn default_domain_list() -> String {
    DEFAULT_DOMAIN_LIST.to_string()
}

fn default_fetch_timeout_secs() -> u64 {
    30
}
