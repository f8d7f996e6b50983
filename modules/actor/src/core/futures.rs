//! Completion handles.

mod actor_future;

pub use actor_future::ActorFuture;
