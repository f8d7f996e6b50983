/// Actor trait, cells, contexts and references.
pub mod actor_prim;
/// Actor system and dispatcher configuration.
pub mod config;
/// Dead-letter sink.
pub mod dead_letter;
/// Mailboxes, dispatchers and executors.
pub mod dispatch;
/// Error types.
pub mod error;
/// Observational event bus.
pub mod event_stream;
/// Completion handles for asks and system termination.
pub mod futures;
/// Lifecycle telemetry.
pub mod lifecycle;
/// Log events published on the event stream.
pub mod logging;
/// Message envelopes and the system-message protocol.
pub mod messaging;
/// Actor construction descriptors.
pub mod props;
/// Supervision directives and strategies.
pub mod supervision;
/// Actor system runtime.
pub mod system;
