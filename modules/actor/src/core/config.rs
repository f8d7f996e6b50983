//! Actor system configuration and the dispatcher and mailbox registries built from it.

mod actor_system_config;
mod dispatcher_config;
mod dispatchers;
mod mailboxes;

pub use actor_system_config::{ActorSystemConfig, DEFAULT_DISPATCHER_ID};
pub use dispatcher_config::DispatcherConfig;
pub use dispatchers::Dispatchers;
pub use mailboxes::Mailboxes;
