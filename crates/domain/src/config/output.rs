use serde::{Deserialize, Serialize};

/// Result file locations
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct OutputConfig {
    /// One resolvable domain per line (default: "./output/valid_domains.txt")
    #[serde(default = "default_resolved_path")]
    pub resolved_path: String,

    /// One unresolved domain per line (default: "./output/failed_domains.txt")
    #[serde(default = "default_unresolved_path")]
    pub unresolved_path: String,

    /// Optional JSON run summary
    #[serde(default)]
    pub summary_path: Option<String>,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            resolved_path: default_resolved_path(),
            unresolved_path: default_unresolved_path(),
            summary_path: None,
        }
    }
}

fn default_resolved_path() -> String {
    "./output/valid_domains.txt".to_string()
}

fn default_unresolved_path() -> String {
    "./output/failed_domains.txt".to_string()
}
