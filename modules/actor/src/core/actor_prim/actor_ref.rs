mod actor_ref_sender;
mod ask_reply_sender;
mod cell_sender;
mod null_sender;

use alloc::format;
use core::{fmt, hash::Hash};

pub use actor_ref_sender::ActorRefSender;
pub(crate) use ask_reply_sender::AskReplySender;
pub(crate) use cell_sender::CellSender;
use null_sender::NullSender;
use tessera_utils_rs::core::sync::{ArcShared, WeakShared};

use super::{ActorPath, Pid};
use crate::core::{
  dead_letter::DeadLetterReason,
  error::{AskError, SendError},
  futures::ActorFuture,
  messaging::{AnyMessage, AskResponse, SystemMessage},
  system::SystemState,
};


/// Location-transparent handle used to send messages to an actor.
///
/// References stay valid after the actor terminates; messages sent to a terminated actor become
/// dead letters instead of failing at the sender.
#[derive(Clone)]
pub struct ActorRef {
  pid:    Pid,
  path:   ArcShared<ActorPath>,
  sender: ArcShared<dyn ActorRefSender>,
  system: Option<WeakShared<SystemState>>,
}

impl ActorRef {
  /// Creates a reference from its parts.
  #[must_use]
  pub fn new(
    pid: Pid,
    path: ActorPath,
    sender: ArcShared<dyn ActorRefSender>,
    system: Option<WeakShared<SystemState>>,
  ) -> Self {
    Self { pid, path: ArcShared::new(path), sender, system }
  }

  /// Reference used as the sender of messages sent from outside any actor.
  #[must_use]
  pub fn no_sender() -> Self {
    let sender = ArcShared::new(NullSender).into_dyn(|sender| sender as &dyn ActorRefSender);
    Self::new(Pid::NONE, ActorPath::root().child("deadLetters"), sender, None)
  }

  /// Returns `true` for [`ActorRef::no_sender`] references.
  #[must_use]
  pub fn is_no_sender(&self) -> bool {
    self.pid == Pid::NONE
  }

  /// Actor identity.
  #[must_use]
  pub const fn pid(&self) -> Pid {
    self.pid
  }

  /// Actor path.
  #[must_use]
  pub fn path(&self) -> &ActorPath {
    &self.path
  }

  /// Sends a message; failures are routed to dead letters and never reported to the caller.
  pub fn tell(&self, message: AnyMessage) {
    let Some(message) = self.verified(message) else {
      return;
    };
    if let Err(error) = self.sender.send(message) {
      self.record_dead_letter_from(error);
    }
  }

  /// Sends a message with `sender` attached, so the receiver can reply.
  pub fn tell_from(&self, message: AnyMessage, sender: &ActorRef) {
    self.tell(message.with_sender(sender.clone()));
  }

  /// Sends a message and reports enqueue failures to the caller.
  ///
  /// # Errors
  ///
  /// Returns the message when the mailbox is full, closed, timed out or the actor is gone.
  pub fn try_tell(&self, message: AnyMessage) -> Result<(), SendError> {
    self.sender.send(message)
  }

  /// Sends a request whose sender is a temporary reference completing the returned future.
  pub fn ask(&self, message: AnyMessage) -> AskResponse {
    let future = ActorFuture::new();
    let reply_sender =
      ArcShared::new(AskReplySender::new(future.clone())).into_dyn(|sender| sender as &dyn ActorRefSender);
    let system = self.system.as_ref().and_then(WeakShared::upgrade);
    let reply_pid = system.as_ref().map_or(Pid::NONE, |system| system.allocate_pid());
    let reply_path = ActorPath::root().child("temp").child(&format!("$ask{}", reply_pid.value()));
    let reply_to = Self::new(reply_pid, reply_path, reply_sender, self.system.clone());

    match self.verified(message.with_sender(reply_to.clone())) {
      | Some(message) => {
        if let Err(error) = self.sender.send(message) {
          self.record_dead_letter_from(error);
          future.complete(Err(AskError::Undeliverable));
        }
      },
      | None => {
        future.complete(Err(AskError::Undeliverable));
      },
    }
    AskResponse::new(reply_to, future)
  }

  /// Delivers a system message, handing undeliverable ones to the system.
  pub(crate) fn send_system(&self, message: SystemMessage) {
    if let Err(message) = self.sender.send_system(message) {
      if let Some(system) = self.system() {
        system.handle_undeliverable_system(self.pid, message);
      }
    }
  }

  pub(crate) fn system(&self) -> Option<ArcShared<SystemState>> {
    self.system.as_ref().and_then(WeakShared::upgrade)
  }

  fn verified(&self, message: AnyMessage) -> Option<AnyMessage> {
    let Some(system) = self.system() else {
      return Some(message);
    };
    match system.verify(&message) {
      | Ok(()) => Some(message),
      | Err(reason) => {
        system.emit_debug(format!("message to {} rejected by verifier: {reason}", &*self.path), Some(self.pid));
        system.record_dead_letter(message, DeadLetterReason::VerificationFailed, Some(self.pid));
        None
      },
    }
  }

  fn record_dead_letter_from(&self, error: SendError) {
    if let Some(system) = self.system() {
      let reason = DeadLetterReason::from_send_error(&error);
      system.record_dead_letter(error.into_message(), reason, Some(self.pid));
    }
  }
}

impl PartialEq for ActorRef {
  fn eq(&self, other: &Self) -> bool {
    self.pid == other.pid
  }
}

impl Eq for ActorRef {}

impl Hash for ActorRef {
  fn hash<H: core::hash::Hasher>(&self, state: &mut H) {
    self.pid.hash(state);
  }
}

impl fmt::Debug for ActorRef {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("ActorRef").field("path", &format_args!("{}", &*self.path)).field("pid", &self.pid).finish()
  }
}

impl fmt::Display for ActorRef {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}#{:x}", &*self.path, self.pid.uid())
  }
}
