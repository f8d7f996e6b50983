//! Lifecycle telemetry published on the event stream.

mod lifecycle_event;
mod lifecycle_stage;

pub use lifecycle_event::LifecycleEvent;
pub use lifecycle_stage::LifecycleStage;
