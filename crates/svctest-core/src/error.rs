//! Error taxonomy for service test result queries.

use std::fmt;

use crate::config_entry::ConfigSummary;

/// Listing of every config a result knows about, rendered as `[a, b, ...]`.
///
/// Renders `[]` when nothing was generated so an empty listing is visible in
/// the message rather than silently absent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KnownConfigs(pub Vec<ConfigSummary>);

impl fmt::Display for KnownConfigs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (idx, summary) in self.0.iter().enumerate() {
            if idx > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{summary}")?;
        }
        f.write_str("]")
    }
}

/// Service test result errors.
#[derive(Debug, thiserror::Error)]
pub enum TestResultError {
    #[error(
        "unable to find config [pod={pod_type}, task={task_name}, config={config_name}]. Known configs are: {known}"
    )]
    ConfigNotFound {
        pod_type: String,
        task_name: String,
        config_name: String,
        known: KnownConfigs,
    },
}

/// Result type for service test result queries.
pub type Result<T> = std::result::Result<T, TestResultError>;
