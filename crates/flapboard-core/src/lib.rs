//! flapboard-core: Shared runtime components for the flapboard service.
//!
//! - `config/` - Logging and metrics config types, config file loading, CLI args
//! - `metrics/` - Internal metric events and the Prometheus exporter
//! - `polling` - Polling loop trait and failure-tolerant runner
//! - `signal` - Signal handling for graceful shutdown
//! - `clock` - Injectable wall clock
//! - `logging` - Tracing subscriber setup
//! - `error` - Config and metrics error types

pub mod clock;
pub mod config;
pub mod error;
pub mod logging;
pub mod metrics;
pub mod polling;
pub mod signal;

// Re-export commonly used items
pub use self::metrics::init as init_metrics;
pub use clock::{Clock, FixedClock, SystemClock};
pub use config::{CliArgs, LoggingConfig, MetricsConfig, load_file};
pub use error::{ConfigError, MetricsError};
pub use logging::init_tracing;
pub use polling::{LoopState, LoopStats, PollingProcessor, run_polling_loop};
pub use signal::{cancel_on_shutdown, shutdown_signal};
