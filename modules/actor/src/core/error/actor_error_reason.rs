use alloc::borrow::Cow;
use core::{any::Any, fmt};

use tessera_utils_rs::core::sync::ArcShared;

/// Human readable failure description with an optional typed cause.
///
/// The cause lets supervisor deciders match on the kind of failure instead of parsing the
/// message, e.g. `reason.cause::<DivideByZero>().is_some()`.
#[derive(Clone)]
pub struct ActorErrorReason {
  message: Cow<'static, str>,
  cause:   Option<ArcShared<dyn Any + Send + Sync>>,
}

impl ActorErrorReason {
  /// Creates a reason carrying only a message.
  #[must_use]
  pub fn new(message: impl Into<Cow<'static, str>>) -> Self {
    Self { message: message.into(), cause: None }
  }

  /// Creates a reason carrying a message and a typed cause.
  #[must_use]
  pub fn with_cause<C>(message: impl Into<Cow<'static, str>>, cause: C) -> Self
  where
    C: Any + Send + Sync, {
    let cause = ArcShared::new(cause).into_dyn(|cause| cause as &(dyn Any + Send + Sync));
    Self { message: message.into(), cause: Some(cause) }
  }

  /// Returns the message.
  #[must_use]
  pub fn as_str(&self) -> &str {
    &self.message
  }

  /// Returns the cause if it has type `C`.
  #[must_use]
  pub fn cause<C: Any>(&self) -> Option<&C> {
    self.cause.as_deref().and_then(|cause| cause.downcast_ref::<C>())
  }

  /// Returns `true` if a typed cause is attached.
  #[must_use]
  pub const fn has_cause(&self) -> bool {
    self.cause.is_some()
  }
}

impl PartialEq for ActorErrorReason {
  fn eq(&self, other: &Self) -> bool {
    self.message == other.message
  }
}

impl fmt::Debug for ActorErrorReason {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("ActorErrorReason").field("message", &self.message).field("has_cause", &self.has_cause()).finish()
  }
}

impl fmt::Display for ActorErrorReason {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(&self.message)
  }
}
