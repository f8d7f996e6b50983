use alloc::{string::String, vec::Vec};
use core::fmt;

use tessera_utils_rs::core::sync::ArcShared;

use super::{GuardianActor, SystemState};
use crate::core::{
  actor_prim::{ActorCell, ActorPath, ActorRef, Pid},
  config::ActorSystemConfig,
  dead_letter::DeadLetterEntry,
  error::SpawnError,
  event_stream::{EventStream, EventStreamSubscriber, EventStreamSubscription},
  futures::ActorFuture,
  logging::LogLevel,
  messaging::SystemMessage,
  props::Props,
  supervision::SupervisorStrategy,
};


/// Handle to a running actor system.
///
/// Booting a system creates the root guardian `/` and the user guardian `/user`; actors created
/// through [`actor_of`](Self::actor_of) are children of the user guardian. Cloning the handle is
/// cheap.
#[derive(Clone)]
pub struct ActorSystem {
  state: ArcShared<SystemState>,
}

impl ActorSystem {
  /// Boots a system.
  ///
  /// # Errors
  ///
  /// Returns a [`SpawnError`] when a guardian cannot be created, e.g. because the default
  /// dispatcher rejects work.
  pub fn new(config: &ActorSystemConfig) -> Result<Self, SpawnError> {
    let state = ArcShared::new(SystemState::new(config));

    let root_props = Props::from_fn(GuardianActor::root).with_supervisor_strategy(SupervisorStrategy::stopping());
    let root = ActorCell::create(&state, None, ActorPath::root(), &root_props)?;
    state.register_cell(root.clone());
    root.start();

    let user_props = Props::from_fn(GuardianActor::user).with_supervisor_strategy(config.guardian_strategy().clone());
    let user = root.spawn_child(&user_props, Some("user"))?;
    root.watch(&user);
    state.install_guardians(root.actor_ref(), user);
    state.emit_log(LogLevel::Info, alloc::format!("actor system {} started", state.name()), None);

    Ok(Self { state })
  }

  pub(crate) const fn from_state(state: ArcShared<SystemState>) -> Self {
    Self { state }
  }

  /// Shared runtime state.
  #[must_use]
  pub const fn state(&self) -> &ArcShared<SystemState> {
    &self.state
  }

  /// System name.
  #[must_use]
  pub fn name(&self) -> &str {
    self.state.name()
  }

  /// Creates a top-level actor with a generated name.
  ///
  /// # Errors
  ///
  /// See [`actor_of_named`](Self::actor_of_named).
  pub fn actor_of(&self, props: &Props) -> Result<ActorRef, SpawnError> {
    self.user_cell()?.spawn_child(props, None)
  }

  /// Creates a top-level actor at `/user/<name>`.
  ///
  /// # Errors
  ///
  /// Returns [`SpawnError::NameConflict`] when the name is taken, [`SpawnError::InvalidName`] for
  /// malformed names, [`SpawnError::SystemUnavailable`] once the system is terminating, and
  /// configuration errors for unknown dispatchers or mailboxes.
  pub fn actor_of_named(&self, props: &Props, name: &str) -> Result<ActorRef, SpawnError> {
    self.user_cell()?.spawn_child(props, Some(name))
  }

  /// Reference to a live actor.
  #[must_use]
  pub fn actor_ref(&self, pid: Pid) -> Option<ActorRef> {
    self.state.actor_ref(pid)
  }

  /// User guardian reference.
  #[must_use]
  pub fn user_guardian(&self) -> Option<ActorRef> {
    self.state.user_guardian().cloned()
  }

  /// Stops an actor asynchronously.
  pub fn stop(&self, actor: &ActorRef) {
    match self.user_cell() {
      | Ok(guardian) => guardian.stop_child(actor),
      | Err(_) => actor.send_system(SystemMessage::Terminate),
    }
  }

  /// Stops every actor, then the guardians. Completion is signalled through
  /// [`when_terminated`](Self::when_terminated).
  pub fn terminate(&self) {
    match self.state.root_guardian() {
      | Some(root) => root.send_system(SystemMessage::Terminate),
      | None => self.state.mark_terminated(),
    }
  }

  /// Returns `true` once every actor has stopped.
  #[must_use]
  pub fn is_terminated(&self) -> bool {
    self.state.is_terminated()
  }

  /// Future resolved once every actor has stopped and the executors are shut down.
  #[must_use]
  pub fn when_terminated(&self) -> ActorFuture<()> {
    self.state.when_terminated()
  }

  /// Event stream.
  #[must_use]
  pub fn event_stream(&self) -> &ArcShared<EventStream> {
    self.state.event_stream()
  }

  /// Subscribes to the event stream; the subscription ends when the handle is dropped.
  #[must_use]
  pub fn subscribe(&self, subscriber: &ArcShared<dyn EventStreamSubscriber>) -> EventStreamSubscription {
    EventStream::subscribe(self.state.event_stream(), subscriber)
  }

  /// Retained dead letters, oldest first.
  #[must_use]
  pub fn dead_letters(&self) -> Vec<DeadLetterEntry> {
    self.state.dead_letter().entries()
  }

  /// Publishes a log event not tied to an actor.
  pub fn emit_log(&self, level: LogLevel, message: impl Into<String>) {
    self.state.emit_log(level, message.into(), None);
  }

  fn user_cell(&self) -> Result<ArcShared<ActorCell>, SpawnError> {
    self
      .state
      .user_guardian()
      .and_then(|guardian| self.state.cell(guardian.pid()))
      .ok_or(SpawnError::SystemUnavailable)
  }
}

impl fmt::Debug for ActorSystem {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("ActorSystem")
      .field("name", &self.state.name())
      .field("actors", &self.state.actor_count())
      .field("terminated", &self.state.is_terminated())
      .finish()
  }
}
