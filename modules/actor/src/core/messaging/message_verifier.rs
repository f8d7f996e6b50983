use super::AnyMessage;
use crate::core::error::ActorErrorReason;

/// Hook run on every `tell` when message verification is enabled.
///
/// Used to check that messages would survive a serialization boundary before they are delivered
/// locally.
pub trait MessageVerifier: Send + Sync {
  /// Checks the message.
  ///
  /// # Errors
  ///
  /// Returns the reason the message is rejected; it is then routed to dead letters.
  fn verify(&self, message: &AnyMessage) -> Result<(), ActorErrorReason>;
}
