//! Error types shared across the kernel.

mod actor_error;
mod actor_error_reason;
mod actor_panic;
mod ask_error;
mod dispatch_error;
mod send_error;
mod spawn_error;
mod stash_error;

pub use actor_error::ActorError;
pub use actor_error_reason::ActorErrorReason;
pub use actor_panic::ActorPanic;
pub use ask_error::AskError;
pub use dispatch_error::DispatchError;
pub use send_error::SendError;
pub use spawn_error::SpawnError;
pub use stash_error::StashError;
