use core::fmt;

use crate::core::error::{ActorError, ActorPanic};

#[derive(Debug, PartialEq)]
struct DivideByZero;

impl fmt::Display for DivideByZero {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str("division by zero")
  }
}

#[test]
fn typed_cause_is_inspectable() {
  let error = ActorError::from_cause(DivideByZero);
  assert!(error.is_recoverable());
  assert!(error.is::<DivideByZero>());
  assert!(!error.is::<ActorPanic>());
  assert_eq!(error.cause::<DivideByZero>(), Some(&DivideByZero));
  assert_eq!(error.reason().as_str(), "division by zero");
}

#[test]
fn message_only_errors_have_no_cause() {
  let error = ActorError::fatal("corrupted state");
  assert!(error.is_fatal());
  assert!(!error.reason().has_cause());
  assert_eq!(alloc::format!("{error}"), "fatal actor error: corrupted state");
}

#[test]
fn equality_compares_kind_and_message() {
  assert_eq!(ActorError::recoverable("a"), ActorError::recoverable("a"));
  assert_ne!(ActorError::recoverable("a"), ActorError::fatal("a"));
}
