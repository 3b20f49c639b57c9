//! Structured observability hooks for service test results.
//!
//! Events carry a stable `event` field so log pipelines can filter on them.
//! Verbosity is controlled via `SVCTEST_LOG`; set `SVCTEST_LOG_FORMAT=json`
//! for JSON output (see [`crate::telemetry`]).

use tracing::{debug, trace, warn};

use crate::config_entry::ConfigKey;

/// Emit event: a result was assembled from a finished render run.
pub fn emit_result_assembled(config_count: usize, env_var_count: usize) {
    debug!(
        event = "result.assembled",
        config_count = config_count,
        env_var_count = env_var_count,
    );
}

/// Emit event: a task config lookup resolved.
pub fn emit_task_config_resolved(key: ConfigKey<'_>, content_len: usize) {
    trace!(
        event = "task_config.resolved",
        pod_type = %key.pod_type,
        task_name = %key.task_name,
        config_name = %key.config_name,
        content_len = content_len,
    );
}

/// Emit event: a task config lookup missed (warn level).
pub fn emit_task_config_missing(key: ConfigKey<'_>, known_count: usize) {
    warn!(
        event = "task_config.missing",
        pod_type = %key.pod_type,
        task_name = %key.task_name,
        config_name = %key.config_name,
        known_count = known_count,
    );
}
