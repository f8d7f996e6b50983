//! Sink for messages that could not be delivered.

mod base;
mod dead_letter_entry;
mod dead_letter_reason;

pub use base::{DEFAULT_DEAD_LETTER_CAPACITY, DeadLetter};
pub use dead_letter_entry::DeadLetterEntry;
pub use dead_letter_reason::DeadLetterReason;
