//! Metrics and observability infrastructure.
//!
//! - `events`: Internal event types and the `InternalEvent` trait
//! - `server`: Prometheus exporter initialization

pub mod events;
pub mod server;

pub use server::init;

/// Macro for emitting metric events.
///
/// Calls `InternalEvent::emit()` on the given event, which records the
/// corresponding metric. Without an installed recorder this is a no-op.
///
/// # Example
///
/// ```ignore
/// use flapboard_core::metrics::events::RecordsSkipped;
///
/// emit!(RecordsSkipped { count: 1, target: "board".into() });
/// ```
#[macro_export]
macro_rules! emit {
    ($event:expr) => {
        $crate::metrics::events::InternalEvent::emit($event)
    };
}

pub use emit;
