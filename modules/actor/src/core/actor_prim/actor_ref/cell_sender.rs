use tessera_utils_rs::core::sync::WeakShared;

use super::ActorRefSender;
use crate::core::{
  actor_prim::ActorCell,
  error::SendError,
  messaging::{AnyMessage, SystemMessage},
};

/// Delivers into the mailbox of a live cell; fails once the cell has been released.
pub(crate) struct CellSender {
  cell: WeakShared<ActorCell>,
}

impl CellSender {
  pub(crate) const fn new(cell: WeakShared<ActorCell>) -> Self {
    Self { cell }
  }
}

impl ActorRefSender for CellSender {
  fn send(&self, message: AnyMessage) -> Result<(), SendError> {
    match self.cell.upgrade() {
      | Some(cell) => cell.send_message(message),
      | None => Err(SendError::no_recipient(message)),
    }
  }

  fn send_system(&self, message: SystemMessage) -> Result<(), SystemMessage> {
    match self.cell.upgrade() {
      | Some(cell) => cell.send_system_message(message),
      | None => Err(message),
    }
  }
}
