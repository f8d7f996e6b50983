//! Log events published on the event stream and their subscribers.

mod log_event;
mod log_level;
mod logger_subscriber;
mod logger_writer;

pub use log_event::LogEvent;
pub use log_level::LogLevel;
pub use logger_subscriber::LoggerSubscriber;
pub use logger_writer::LoggerWriter;
