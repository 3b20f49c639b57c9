//! Service render testing core
//!
//! Holds the outputs of rendering a service definition in a test and serves
//! them to assertions:
//! - the resolved service specification
//! - the raw object model of the definition
//! - the scheduler launch environment
//! - rendered task config files, keyed by `(pod type, task, config name)`
//!
//! ```
//! use svctest_core::{ConfigEntry, SchedulerEnvironment, ServiceTestResult};
//!
//! let result = ServiceTestResult::new(
//!     "resolved",
//!     "raw",
//!     SchedulerEnvironment::default(),
//!     vec![ConfigEntry::new("web", "server", "app.conf", "PORT=80")],
//! );
//! assert_eq!(result.task_config("web", "server", "app.conf").unwrap(), "PORT=80");
//! assert!(result.task_config("web", "server", "log.conf").is_err());
//! ```

pub mod config_entry;
pub mod environment;
pub mod error;
pub mod obs;
pub mod result;
pub mod telemetry;

pub use config_entry::{ConfigEntry, ConfigKey, ConfigSummary};
pub use environment::SchedulerEnvironment;
pub use error::{KnownConfigs, Result, TestResultError};
pub use obs::{emit_result_assembled, emit_task_config_missing, emit_task_config_resolved};
pub use result::ServiceTestResult;
pub use telemetry::{init_tracing, LogConfig};

/// svctest version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
