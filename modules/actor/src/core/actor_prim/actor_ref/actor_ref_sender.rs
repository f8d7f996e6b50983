use crate::core::{
  error::SendError,
  messaging::{AnyMessage, SystemMessage},
};

/// Delivery seam behind an [`ActorRef`](super::ActorRef).
pub trait ActorRefSender: Send + Sync {
  /// Delivers a user message.
  ///
  /// # Errors
  ///
  /// Returns the message when it could not be enqueued.
  fn send(&self, message: AnyMessage) -> Result<(), SendError>;

  /// Delivers a system message.
  ///
  /// # Errors
  ///
  /// Returns the message when the target can no longer process system messages.
  fn send_system(&self, message: SystemMessage) -> Result<(), SystemMessage>;
}
