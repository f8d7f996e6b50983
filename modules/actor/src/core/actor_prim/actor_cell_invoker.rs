use alloc::format;

use tessera_utils_rs::core::sync::WeakShared;

use super::{ActorCell, Pid};
use crate::core::{
  dead_letter::DeadLetterReason,
  error::DispatchError,
  logging::LogLevel,
  messaging::{AnyMessage, MessageInvoker, SystemMessage},
  system::SystemState,
};

/// Connects a mailbox to its cell without keeping the cell alive.
pub(crate) struct ActorCellInvoker {
  cell:   WeakShared<ActorCell>,
  pid:    Pid,
  system: WeakShared<SystemState>,
}

impl ActorCellInvoker {
  pub(crate) const fn new(cell: WeakShared<ActorCell>, pid: Pid, system: WeakShared<SystemState>) -> Self {
    Self { cell, pid, system }
  }
}

impl MessageInvoker for ActorCellInvoker {
  fn invoke_system_message(&self, message: SystemMessage) {
    match self.cell.upgrade() {
      | Some(cell) => cell.invoke_system(message),
      | None => self.discard_system_message(message),
    }
  }

  fn invoke_user_message(&self, message: AnyMessage) {
    match self.cell.upgrade() {
      | Some(cell) => cell.invoke_user(message),
      | None => {
        if let Some(system) = self.system.upgrade() {
          system.record_dead_letter(message, DeadLetterReason::RecipientUnavailable, Some(self.pid));
        }
      },
    }
  }

  fn discard_system_message(&self, message: SystemMessage) {
    if let Some(system) = self.system.upgrade() {
      system.handle_undeliverable_system(self.pid, message);
    }
  }

  fn report_dispatch_failure(&self, error: &DispatchError) {
    if let Some(system) = self.system.upgrade() {
      let message = format!("mailbox of {} could not be scheduled: {error}", self.pid);
      system.emit_log(LogLevel::Error, message, Some(self.pid));
    }
  }
}
