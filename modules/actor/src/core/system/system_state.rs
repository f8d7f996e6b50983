use alloc::{format, string::String, vec::Vec};
use core::time::Duration;

use ahash::RandomState;
use hashbrown::HashMap;
use portable_atomic::{AtomicBool, AtomicU64, Ordering};
use tessera_utils_rs::core::{
  sync::{ArcShared, SpinSyncMutex},
  time::MonotonicClock,
};

use crate::core::{
  actor_prim::{ActorCell, ActorRef, Pid},
  config::{ActorSystemConfig, Dispatchers, Mailboxes},
  dead_letter::{DeadLetter, DeadLetterReason},
  error::{ActorError, ActorErrorReason},
  event_stream::{EventStream, EventStreamEvent},
  futures::ActorFuture,
  lifecycle::{LifecycleEvent, LifecycleStage},
  logging::{LogEvent, LogLevel},
  messaging::{AnyMessage, MessageVerifier, SystemMessage},
};

/// Shared runtime state: the cell registry, pid allocation and the observation sinks.
pub struct SystemState {
  name:          String,
  clock:         ArcShared<dyn MonotonicClock>,
  event_stream:  ArcShared<EventStream>,
  dead_letter:   DeadLetter,
  dispatchers:   Dispatchers,
  mailboxes:     Mailboxes,
  verifier:      Option<ArcShared<dyn MessageVerifier>>,
  cells:         SpinSyncMutex<HashMap<Pid, ArcShared<ActorCell>, RandomState>>,
  next_pid:      AtomicU64,
  uid_seed:      RandomState,
  root_guardian: spin::Once<ActorRef>,
  user_guardian: spin::Once<ActorRef>,
  termination:   ActorFuture<()>,
  terminated:    AtomicBool,
}

impl SystemState {
  pub(crate) fn new(config: &ActorSystemConfig) -> Self {
    let event_stream = ArcShared::new(EventStream::with_capacity(config.event_stream_capacity()));
    Self {
      name: String::from(config.name()),
      clock: config.clock().clone(),
      dead_letter: DeadLetter::new(event_stream.clone(), config.dead_letter_capacity()),
      event_stream,
      dispatchers: Dispatchers::new(config.default_dispatcher(), config.dispatchers()),
      mailboxes: Mailboxes::new(config.mailboxes()),
      verifier: config.message_verifier().cloned(),
      cells: SpinSyncMutex::new(HashMap::with_hasher(RandomState::new())),
      next_pid: AtomicU64::new(1),
      uid_seed: RandomState::new(),
      root_guardian: spin::Once::new(),
      user_guardian: spin::Once::new(),
      termination: ActorFuture::new(),
      terminated: AtomicBool::new(false),
    }
  }

  /// System name.
  #[must_use]
  pub fn name(&self) -> &str {
    &self.name
  }

  /// Current reading of the system clock.
  #[must_use]
  pub fn now(&self) -> Duration {
    self.clock.now()
  }

  /// System clock.
  #[must_use]
  pub fn clock(&self) -> ArcShared<dyn MonotonicClock> {
    self.clock.clone()
  }

  /// Event stream.
  #[must_use]
  pub const fn event_stream(&self) -> &ArcShared<EventStream> {
    &self.event_stream
  }

  /// Dead-letter store.
  #[must_use]
  pub const fn dead_letter(&self) -> &DeadLetter {
    &self.dead_letter
  }

  /// Dispatcher registry.
  #[must_use]
  pub const fn dispatchers(&self) -> &Dispatchers {
    &self.dispatchers
  }

  /// Mailbox registry.
  #[must_use]
  pub const fn mailboxes(&self) -> &Mailboxes {
    &self.mailboxes
  }

  /// Allocates a fresh pid with a random uid.
  #[must_use]
  pub fn allocate_pid(&self) -> Pid {
    let value = self.next_pid.fetch_add(1, Ordering::Relaxed);
    Pid::new(value, self.uid_seed.hash_one(value))
  }

  /// Runs the configured message verifier.
  ///
  /// # Errors
  ///
  /// Returns the verifier's rejection reason.
  pub fn verify(&self, message: &AnyMessage) -> Result<(), ActorErrorReason> {
    match &self.verifier {
      | Some(verifier) => verifier.verify(message),
      | None => Ok(()),
    }
  }

  /// Publishes an event.
  pub fn publish(&self, event: &EventStreamEvent) {
    self.event_stream.publish(event);
  }

  /// Publishes a log event.
  pub fn emit_log(&self, level: LogLevel, message: String, origin: Option<Pid>) {
    self.publish(&EventStreamEvent::Log(LogEvent::new(level, message, self.now(), origin)));
  }

  pub(crate) fn emit_debug(&self, message: String, origin: Option<Pid>) {
    self.emit_log(LogLevel::Debug, message, origin);
  }

  pub(crate) fn publish_lifecycle(
    &self,
    pid: Pid,
    parent: Option<Pid>,
    path: String,
    stage: LifecycleStage,
    reason: Option<ActorError>,
  ) {
    let mut event = LifecycleEvent::new(pid, parent, path, stage, self.now());
    if let Some(reason) = reason {
      event = event.with_reason(reason);
    }
    self.publish(&EventStreamEvent::Lifecycle(event));
  }

  /// Records an undeliverable message.
  pub fn record_dead_letter(&self, message: AnyMessage, reason: DeadLetterReason, recipient: Option<Pid>) {
    self.dead_letter.record(message, reason, recipient, self.now());
  }

  /// Handles a system message whose target can no longer process it.
  ///
  /// A watch request on a terminated actor is answered right away so the watcher still learns
  /// about the termination.
  pub(crate) fn handle_undeliverable_system(&self, target: Pid, message: SystemMessage) {
    match message {
      | SystemMessage::Watch { watchee, watcher } if watcher != target => {
        if let Some(watcher) = self.actor_ref(watcher) {
          watcher.send_system(SystemMessage::DeathWatchNotification { actor: watchee, existence_confirmed: false });
        }
      },
      | SystemMessage::NoMessage => {},
      | other => {
        self.emit_debug(format!("system message {} to terminated actor {target} dropped", other.name()), Some(target));
      },
    }
  }

  pub(crate) fn register_cell(&self, cell: ArcShared<ActorCell>) {
    self.cells.lock().insert(cell.pid(), cell);
  }

  pub(crate) fn remove_cell(&self, pid: Pid) -> Option<ArcShared<ActorCell>> {
    self.cells.lock().remove(&pid)
  }

  pub(crate) fn cell(&self, pid: Pid) -> Option<ArcShared<ActorCell>> {
    self.cells.lock().get(&pid).cloned()
  }

  /// Reference to a live actor.
  #[must_use]
  pub fn actor_ref(&self, pid: Pid) -> Option<ActorRef> {
    self.cell(pid).map(|cell| cell.actor_ref())
  }

  /// Number of live actors, guardians included.
  #[must_use]
  pub fn actor_count(&self) -> usize {
    self.cells.lock().len()
  }

  /// Pids of every live actor.
  #[must_use]
  pub fn pids(&self) -> Vec<Pid> {
    self.cells.lock().keys().copied().collect()
  }

  pub(crate) fn install_guardians(&self, root: ActorRef, user: ActorRef) {
    self.root_guardian.call_once(|| root);
    self.user_guardian.call_once(|| user);
  }

  /// Root guardian `/`.
  #[must_use]
  pub fn root_guardian(&self) -> Option<&ActorRef> {
    self.root_guardian.get()
  }

  /// User guardian `/user`, parent of every actor created through the system.
  #[must_use]
  pub fn user_guardian(&self) -> Option<&ActorRef> {
    self.user_guardian.get()
  }

  /// Completes termination: shuts down the executors and resolves the termination future.
  pub(crate) fn mark_terminated(&self) {
    if self.terminated.swap(true, Ordering::AcqRel) {
      return;
    }
    self.emit_log(LogLevel::Info, format!("actor system {} terminated", self.name), None);
    self.dispatchers.shutdown_all();
    self.termination.complete(());
  }

  /// Returns `true` once the root guardian has stopped.
  #[must_use]
  pub fn is_terminated(&self) -> bool {
    self.terminated.load(Ordering::Acquire)
  }

  /// Future resolved when the root guardian has stopped.
  #[must_use]
  pub fn when_terminated(&self) -> ActorFuture<()> {
    self.termination.clone()
  }
}
