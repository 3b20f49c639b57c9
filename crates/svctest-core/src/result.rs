//! The rendered outputs of one service test run.
//!
//! A [`ServiceTestResult`] is assembled once by the harness that parsed,
//! resolved and rendered a service definition, and is read-only afterwards.
//! Assertion helpers borrow it; nothing can change it after construction.

use crate::config_entry::{ConfigEntry, ConfigKey, ConfigSummary};
use crate::environment::SchedulerEnvironment;
use crate::error::{KnownConfigs, Result, TestResultError};
use crate::obs;

/// Outputs of rendering a service definition.
///
/// * `S` is the resolved service specification.
/// * `R` is the raw object model of the textual definition.
///
/// Both are opaque here and are returned exactly as supplied.
#[derive(Debug, Clone)]
pub struct ServiceTestResult<S, R> {
    resolved_spec: S,
    raw_spec: R,
    scheduler_environment: SchedulerEnvironment,
    task_configs: Vec<ConfigEntry>,
}

impl<S, R> ServiceTestResult<S, R> {
    /// Assemble a result from fully formed render outputs.
    ///
    /// Config order is preserved. Duplicate `(pod, task, config)` keys are
    /// kept as-is; lookups return the first one inserted.
    pub fn new(
        resolved_spec: S,
        raw_spec: R,
        scheduler_environment: impl Into<SchedulerEnvironment>,
        task_configs: impl IntoIterator<Item = ConfigEntry>,
    ) -> Self {
        let scheduler_environment = scheduler_environment.into();
        let task_configs: Vec<ConfigEntry> = task_configs.into_iter().collect();
        obs::emit_result_assembled(task_configs.len(), scheduler_environment.len());

        Self {
            resolved_spec,
            raw_spec,
            scheduler_environment,
            task_configs,
        }
    }

    /// The resolved service specification produced by the test.
    pub fn resolved_spec(&self) -> &S {
        &self.resolved_spec
    }

    /// The raw object model of the service definition.
    pub fn raw_spec(&self) -> &R {
        &self.raw_spec
    }

    /// The environment the scheduler would be launched with.
    pub fn scheduler_environment(&self) -> &SchedulerEnvironment {
        &self.scheduler_environment
    }

    /// Rendered content of one task config.
    ///
    /// Matching is exact and case-sensitive on all three components. On a
    /// miss the error lists every known config with its size so the cause
    /// (typo, wrong pod, config never rendered) is visible from the message.
    pub fn task_config(&self, pod_type: &str, task_name: &str, config_name: &str) -> Result<&str> {
        let key = ConfigKey {
            pod_type,
            task_name,
            config_name,
        };

        match self
            .task_configs
            .iter()
            .find(|entry| entry.matches(pod_type, task_name, config_name))
        {
            Some(entry) => {
                obs::emit_task_config_resolved(key, entry.content().len());
                Ok(entry.content())
            }
            None => {
                obs::emit_task_config_missing(key, self.task_configs.len());
                Err(TestResultError::ConfigNotFound {
                    pod_type: pod_type.to_string(),
                    task_name: task_name.to_string(),
                    config_name: config_name.to_string(),
                    known: KnownConfigs(self.known_configs()),
                })
            }
        }
    }

    /// Every rendered config, in the order the renderer produced them.
    pub fn task_configs(&self) -> &[ConfigEntry] {
        &self.task_configs
    }

    /// Rendered configs of a single task.
    pub fn task_configs_for<'a>(
        &'a self,
        pod_type: &'a str,
        task_name: &'a str,
    ) -> impl Iterator<Item = &'a ConfigEntry> + 'a {
        self.task_configs
            .iter()
            .filter(move |entry| entry.belongs_to(pod_type, task_name))
    }

    /// Identity and size of every rendered config.
    pub fn known_configs(&self) -> Vec<ConfigSummary> {
        self.task_configs.iter().map(ConfigEntry::summary).collect()
    }
}
