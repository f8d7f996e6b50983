/// Severity of a log event.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum LogLevel {
  /// Fine-grained tracing.
  Trace,
  /// Diagnostics.
  Debug,
  /// Informational messages.
  Info,
  /// Something unexpected that the runtime recovered from.
  Warn,
  /// Failures that need attention.
  Error,
}
