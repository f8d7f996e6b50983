use alloc::string::{String, ToString};
use core::{any::Any, fmt};

/// Cause attached to failures raised by a panic inside actor code.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ActorPanic {
  message: String,
}

impl ActorPanic {
  /// Extracts the panic message from a `catch_unwind` payload.
  #[must_use]
  pub fn from_payload(payload: &(dyn Any + Send)) -> Self {
    let message = if let Some(message) = payload.downcast_ref::<&str>() {
      (*message).to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
      message.clone()
    } else {
      String::from("actor panicked with a non-string payload")
    };
    Self { message }
  }

  /// Returns the panic message.
  #[must_use]
  pub fn message(&self) -> &str {
    &self.message
  }
}

impl fmt::Display for ActorPanic {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "actor panicked: {}", self.message)
  }
}
