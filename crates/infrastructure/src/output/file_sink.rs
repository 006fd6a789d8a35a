use async_trait::async_trait;
use ferrous_sweep_application::ports::ResultSink;
use ferrous_sweep_domain::{BatchOutcome, DomainError, OutputConfig};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::info;

/// Writes the resolved and unresolved partitions as newline-delimited
/// files, plus an optional JSON summary of the run.
///
/// Existing files are overwritten. Missing parent directories are created.
pub struct FileResultSink {
    resolved_path: PathBuf,
    unresolved_path: PathBuf,
    summary_path: Option<PathBuf>,
}

impl FileResultSink {
    pub fn new(resolved_path: impl Into<PathBuf>, unresolved_path: impl Into<PathBuf>) -> Self {
        Self {
            resolved_path: resolved_path.into(),
            unresolved_path: unresolved_path.into(),
            summary_path: None,
        }
    }

    pub fn with_summary(mut self, summary_path: impl Into<PathBuf>) -> Self {
        self.summary_path = Some(summary_path.into());
        self
    }

    pub fn from_config(config: &OutputConfig) -> Self {
        let sink = Self::new(&config.resolved_path, &config.unresolved_path);
        match &config.summary_path {
            Some(path) => sink.with_summary(path),
            None => sink,
        }
    }

    async fn write_lines(path: &Path, domains: &[Arc<str>]) -> Result<(), DomainError> {
        let mut contents = String::with_capacity(domains.iter().map(|d| d.len() + 1).sum());
        for domain in domains {
            contents.push_str(domain);
            contents.push('\n');
        }
        Self::write_file(path, contents.as_bytes()).await
    }

    async fn write_file(path: &Path, contents: &[u8]) -> Result<(), DomainError> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent).await.map_err(|e| {
                DomainError::IoError(format!("Failed to create {}: {}", parent.display(), e))
            })?;
        }
        tokio::fs::write(path, contents)
            .await
            .map_err(|e| DomainError::IoError(format!("Failed to write {}: {}", path.display(), e)))
    }
}

#[async_trait]
impl ResultSink for FileResultSink {
    async fn persist(&self, outcome: &BatchOutcome) -> Result<(), DomainError> {
        Self::write_lines(&self.resolved_path, &outcome.resolved).await?;
        Self::write_lines(&self.unresolved_path, &outcome.unresolved).await?;

        if let Some(summary_path) = &self.summary_path {
            let json = serde_json::to_vec_pretty(&outcome.summary())
                .map_err(|e| DomainError::IoError(format!("Failed to encode summary: {}", e)))?;
            Self::write_file(summary_path, &json).await?;
        }

        info!(
            resolved = outcome.resolved.len(),
            resolved_path = %self.resolved_path.display(),
            unresolved = outcome.unresolved.len(),
            unresolved_path = %self.unresolved_path.display(),
            "Results written"
        );
        Ok(())
    }
}
