use super::ActorRefSender;
use crate::core::{
  error::{AskError, SendError},
  futures::ActorFuture,
  messaging::{AnyMessage, SystemMessage},
};

/// Temporary reply target of an ask; the first reply completes the future.
pub(crate) struct AskReplySender {
  future: ActorFuture<Result<AnyMessage, AskError>>,
}

impl AskReplySender {
  pub(crate) const fn new(future: ActorFuture<Result<AnyMessage, AskError>>) -> Self {
    Self { future }
  }
}

impl ActorRefSender for AskReplySender {
  fn send(&self, message: AnyMessage) -> Result<(), SendError> {
    if self.future.is_ready() {
      return Err(SendError::closed(message));
    }
    self.future.complete(Ok(message));
    Ok(())
  }

  fn send_system(&self, message: SystemMessage) -> Result<(), SystemMessage> {
    Err(message)
  }
}
