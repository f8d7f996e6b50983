//! Mailboxes and the dispatcher kernel that runs them.

/// Dispatchers and executors.
pub mod dispatcher;
/// Per-actor message buffers.
pub mod mailbox;
