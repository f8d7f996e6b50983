use super::{AnyMessage, SystemMessage};
use crate::core::error::DispatchError;

/// Target a mailbox drives while it is being processed.
pub trait MessageInvoker: Send + Sync {
  /// Handles a control-plane message.
  fn invoke_system_message(&self, message: SystemMessage);

  /// Handles a user message.
  fn invoke_user_message(&self, message: AnyMessage);

  /// Receives a system message that can no longer be processed because the mailbox closed.
  fn discard_system_message(&self, message: SystemMessage);

  /// Reports that the executor refused to run the mailbox.
  fn report_dispatch_failure(&self, error: &DispatchError);
}
