//! Polling loop trait and runner.
//!
//! The runner drives one processor forever: run an iteration, sleep for the
//! poll interval, repeat until the shutdown token fires. A failed iteration is
//! reported and the loop keeps going, so one bad cycle never stops the service.

use async_trait::async_trait;
use std::time::{Duration, Instant};
use tokio_util::sync::CancellationToken;
use tracing::{debug, error, info};

use crate::emit;
use crate::metrics::events::{IterationCompleted, IterationDuration, IterationResultType};

/// Trait for implementing a polling-based processor.
#[async_trait]
pub trait PollingProcessor {
    /// The state type prepared for each iteration.
    type State: Send;
    /// The error type for this processor.
    type Error: std::error::Error + Send;

    /// Prepare state for a processing iteration.
    async fn prepare(&mut self) -> Result<Self::State, Self::Error>;

    /// Process the prepared state.
    async fn process(&mut self, state: Self::State) -> Result<(), Self::Error>;

    /// Report a failed iteration. The loop continues afterwards.
    fn report_failure(&self, name: &str, error: &Self::Error) {
        error!(target = name, error = %error, "Iteration failed, keeping previous output");
    }
}

/// Where the loop stands after the most recent iteration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopState {
    /// The last iteration succeeded.
    Running,
    /// One or more iterations in a row have failed.
    RetryWait { consecutive_failures: u32 },
}

impl LoopState {
    fn recovered(self, name: &str) -> Self {
        if let LoopState::RetryWait {
            consecutive_failures,
        } = self
        {
            info!(
                target = name,
                consecutive_failures, "Recovered after failed iterations"
            );
        }
        LoopState::Running
    }

    fn failed(self) -> Self {
        match self {
            LoopState::Running => LoopState::RetryWait {
                consecutive_failures: 1,
            },
            LoopState::RetryWait {
                consecutive_failures,
            } => LoopState::RetryWait {
                consecutive_failures: consecutive_failures.saturating_add(1),
            },
        }
    }
}

/// Counters returned when the loop exits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoopStats {
    /// Iterations that ran to completion (successfully or not).
    pub iterations: u64,
    /// Iterations that ended in an error.
    pub failures: u64,
    /// State at exit.
    pub state: LoopState,
}

impl Default for LoopStats {
    fn default() -> Self {
        Self {
            iterations: 0,
            failures: 0,
            state: LoopState::Running,
        }
    }
}

async fn run_iteration<P: PollingProcessor>(processor: &mut P) -> Result<(), P::Error> {
    let state = processor.prepare().await?;
    processor.process(state).await
}

/// Run a polling loop with the given processor.
///
/// 1. Call `prepare()`, then `process()` with its state
/// 2. Report any error through `report_failure()` and carry on
/// 3. Wait for `poll_interval` or the shutdown signal
/// 4. Repeat until shutdown
///
/// The sleep starts after the iteration finishes, so the time between two
/// iteration starts is the iteration duration plus `poll_interval`.
pub async fn run_polling_loop<P: PollingProcessor>(
    processor: &mut P,
    poll_interval: Duration,
    shutdown: CancellationToken,
    name: &str,
    service: &'static str,
) -> LoopStats {
    let mut stats = LoopStats::default();

    loop {
        let iteration_start = Instant::now();

        let outcome = tokio::select! {
            biased;

            _ = shutdown.cancelled() => {
                info!(target = name, "Shutdown requested during processing");
                break;
            }

            outcome = run_iteration(processor) => outcome,
        };

        stats.iterations += 1;
        let result = match outcome {
            Ok(()) => {
                stats.state = stats.state.recovered(name);
                IterationResultType::Processed
            }
            Err(e) => {
                processor.report_failure(name, &e);
                stats.failures += 1;
                stats.state = stats.state.failed();
                IterationResultType::Failed
            }
        };

        emit!(IterationCompleted {
            service,
            result,
            target: name.to_string(),
        });
        emit!(IterationDuration {
            service,
            duration: iteration_start.elapsed(),
            target: name.to_string(),
        });
        debug!(
            target = name,
            "Iteration complete, waiting {}s before next poll",
            poll_interval.as_secs()
        );

        if shutdown
            .run_until_cancelled(tokio::time::sleep(poll_interval))
            .await
            .is_none()
        {
            info!(target = name, "Shutdown requested during poll wait");
            break;
        }
    }

    stats
}
