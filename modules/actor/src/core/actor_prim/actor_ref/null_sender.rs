use super::ActorRefSender;
use crate::core::{
  error::SendError,
  messaging::{AnyMessage, SystemMessage},
};

pub(super) struct NullSender;

impl ActorRefSender for NullSender {
  fn send(&self, message: AnyMessage) -> Result<(), SendError> {
    Err(SendError::no_recipient(message))
  }

  fn send_system(&self, message: SystemMessage) -> Result<(), SystemMessage> {
    Err(message)
  }
}
