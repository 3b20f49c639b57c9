//! Rendered task configuration entries and their composite identity.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The rendered content of one config file for one task.
///
/// Identified by `(pod_type, task_name, config_name)`. Nothing here enforces
/// uniqueness of that triple; the renderer is expected to produce each key once.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfigEntry {
    pod_type: String,
    task_name: String,
    config_name: String,
    content: String,
}

/// Borrowed three-part identity of a [`ConfigEntry`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ConfigKey<'a> {
    pub pod_type: &'a str,
    pub task_name: &'a str,
    pub config_name: &'a str,
}

/// Identity plus content size of an entry, for failure diagnostics.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConfigSummary {
    pub pod_type: String,
    pub task_name: String,
    pub config_name: String,
    /// Length of the rendered content in bytes.
    pub content_len: usize,
}

impl ConfigEntry {
    pub fn new(
        pod_type: impl Into<String>,
        task_name: impl Into<String>,
        config_name: impl Into<String>,
        content: impl Into<String>,
    ) -> Self {
        Self {
            pod_type: pod_type.into(),
            task_name: task_name.into(),
            config_name: config_name.into(),
            content: content.into(),
        }
    }

    pub fn pod_type(&self) -> &str {
        &self.pod_type
    }

    pub fn task_name(&self) -> &str {
        &self.task_name
    }

    pub fn config_name(&self) -> &str {
        &self.config_name
    }

    /// Rendered config text.
    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn key(&self) -> ConfigKey<'_> {
        ConfigKey {
            pod_type: &self.pod_type,
            task_name: &self.task_name,
            config_name: &self.config_name,
        }
    }

    /// Exact, case-sensitive match on all three identity components.
    pub fn matches(&self, pod_type: &str, task_name: &str, config_name: &str) -> bool {
        self.pod_type == pod_type && self.task_name == task_name && self.config_name == config_name
    }

    pub(crate) fn belongs_to(&self, pod_type: &str, task_name: &str) -> bool {
        self.pod_type == pod_type && self.task_name == task_name
    }

    pub fn summary(&self) -> ConfigSummary {
        ConfigSummary {
            pod_type: self.pod_type.clone(),
            task_name: self.task_name.clone(),
            config_name: self.config_name.clone(),
            content_len: self.content.len(),
        }
    }
}

impl fmt::Display for ConfigKey<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "pod={}, task={}, config={}",
            self.pod_type, self.task_name, self.config_name
        )
    }
}

impl fmt::Display for ConfigSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}-{}: {} ({} bytes)",
            self.pod_type, self.task_name, self.config_name, self.content_len
        )
    }
}

// Content stays out of the rendering; only its size is shown.
impl fmt::Display for ConfigEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}-{}: {} ({} bytes)",
            self.pod_type,
            self.task_name,
            self.config_name,
            self.content.len()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn app_conf() -> ConfigEntry {
        ConfigEntry::new("web", "server", "app.conf", "PORT=80")
    }

    #[test]
    fn test_entry_accessors() {
        let entry = app_conf();
        assert_eq!(entry.pod_type(), "web");
        assert_eq!(entry.task_name(), "server");
        assert_eq!(entry.config_name(), "app.conf");
        assert_eq!(entry.content(), "PORT=80");
    }

    #[test]
    fn test_matches_is_exact_and_case_sensitive() {
        let entry = ConfigEntry::new("pod", "task", "cfg", "x");
        assert!(entry.matches("pod", "task", "cfg"));
        assert!(!entry.matches("Pod", "task", "cfg"));
        assert!(!entry.matches("pod", "TASK", "cfg"));
        assert!(!entry.matches("pod", "task", "cfg "));
        assert!(!entry.matches("po", "task", "cfg"));
    }

    #[test]
    fn test_display_shows_identity_and_byte_length() {
        assert_eq!(app_conf().to_string(), "web-server: app.conf (7 bytes)");
    }

    #[test]
    fn test_display_counts_bytes_not_chars() {
        let entry = ConfigEntry::new("web", "server", "motd", "héllo");
        assert_eq!(entry.to_string(), "web-server: motd (6 bytes)");
        assert_eq!(entry.summary().content_len, 6);
    }

    #[test]
    fn test_display_omits_content() {
        let entry = ConfigEntry::new("web", "server", "secret.conf", "TOKEN=hunter2");
        assert!(!entry.to_string().contains("hunter2"));
    }

    #[test]
    fn test_summary_renders_like_entry() {
        let entry = app_conf();
        assert_eq!(entry.summary().to_string(), entry.to_string());
    }

    #[test]
    fn test_key_display() {
        let entry = app_conf();
        assert_eq!(
            entry.key().to_string(),
            "pod=web, task=server, config=app.conf"
        );
    }

    #[test]
    fn test_entry_deserializes_from_renderer_json() {
        let json = r#"{
            "pod_type": "hello",
            "task_name": "server",
            "config_name": "config.yml",
            "content": "port: 8080\n"
        }"#;
        let entry: ConfigEntry = serde_json::from_str(json).expect("deserialize");
        assert!(entry.matches("hello", "server", "config.yml"));
        assert_eq!(entry.content(), "port: 8080\n");
    }
}
