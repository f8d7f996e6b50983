use core::time::Duration;

use super::ActorFutureExt;
use crate::core::{actor_prim::ActorRef, error::AskError, messaging::AnyMessage};

#[cfg(test)]
mod tests;

/// Blocking request/response on top of [`ActorRef::ask`].
pub trait ActorRefExt {
  /// Sends `message` and parks the calling thread until the reply arrives or `timeout` elapses.
  ///
  /// A timed-out ask is closed, so a late reply becomes a dead letter.
  ///
  /// # Errors
  ///
  /// Returns [`AskError::Timeout`] when no reply arrives in time and
  /// [`AskError::Undeliverable`] when the request could not be delivered.
  fn ask_timeout(&self, message: AnyMessage, timeout: Duration) -> Result<AnyMessage, AskError>;
}

impl ActorRefExt for ActorRef {
  fn ask_timeout(&self, message: AnyMessage, timeout: Duration) -> Result<AnyMessage, AskError> {
    let future = self.ask(message).into_future();
    if let Some(outcome) = future.wait_timeout(timeout) {
      return outcome;
    }
    if future.complete(Err(AskError::Timeout)) {
      return Err(AskError::Timeout);
    }
    future.try_take().unwrap_or(Err(AskError::Timeout))
  }
}
