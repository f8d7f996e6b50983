mod base;
mod enqueue_outcome;
mod mailbox_capacity;
mod mailbox_overflow_strategy;
mod mailbox_policy;
mod mailbox_status;
mod schedule_hints;
mod system_queue;
mod user_queue;

pub use base::Mailbox;
pub use enqueue_outcome::EnqueueOutcome;
pub use mailbox_capacity::MailboxCapacity;
pub use mailbox_overflow_strategy::MailboxOverflowStrategy;
pub use mailbox_policy::MailboxPolicy;
pub use schedule_hints::ScheduleHints;
pub use system_queue::SystemQueue;
