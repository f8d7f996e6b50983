//! Synchronous observational event bus.

mod base;
mod event_stream_event;
mod event_stream_subscriber;
mod event_stream_subscriber_entry;
mod event_stream_subscription;
mod unhandled_message_event;

pub use base::{DEFAULT_REPLAY_CAPACITY, EventStream};
pub use event_stream_event::EventStreamEvent;
pub use event_stream_subscriber::EventStreamSubscriber;
pub use event_stream_subscription::EventStreamSubscription;
pub use unhandled_message_event::UnhandledMessageEvent;
