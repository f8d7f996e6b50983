//! Immutable actor construction descriptors.

mod actor_factory;
mod base;
mod mailbox_selector;

pub use actor_factory::ActorFactory;
pub use base::Props;
pub use mailbox_selector::MailboxSelector;
