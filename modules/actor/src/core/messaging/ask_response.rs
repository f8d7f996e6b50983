use super::AnyMessage;
use crate::core::{actor_prim::ActorRef, error::AskError, futures::ActorFuture};

/// Result handle of an ask: the temporary reply reference and the future it completes.
pub struct AskResponse {
  reply_to: ActorRef,
  future:   ActorFuture<Result<AnyMessage, AskError>>,
}

impl AskResponse {
  pub(crate) const fn new(reply_to: ActorRef, future: ActorFuture<Result<AnyMessage, AskError>>) -> Self {
    Self { reply_to, future }
  }

  /// Temporary reference the request carried as its sender.
  #[must_use]
  pub const fn reply_to(&self) -> &ActorRef {
    &self.reply_to
  }

  /// Future completed by the first reply, or with an error if the request was undeliverable.
  #[must_use]
  pub const fn future(&self) -> &ActorFuture<Result<AnyMessage, AskError>> {
    &self.future
  }

  /// Consumes the response and returns its future.
  #[must_use]
  pub fn into_future(self) -> ActorFuture<Result<AnyMessage, AskError>> {
    self.future
  }
}
