mod cell_state;
mod death_watch;
mod failed_state;
mod fault_handling;
mod system_invocation;
mod termination;

use alloc::{
  boxed::Box,
  format,
  string::{String, ToString},
  vec::Vec,
};
use std::panic::{AssertUnwindSafe, catch_unwind};

use cell_state::CellState;
use failed_state::FailedState;
use portable_atomic::{AtomicU64, Ordering};
use tessera_utils_rs::core::sync::{ArcShared, SpinSyncMutex, WeakShared};

use super::{
  Actor, ActorContext, ActorPath, ActorRef, ActorRefSender, BehaviorSlot, Pid, Terminated,
  actor_cell_invoker::ActorCellInvoker, actor_ref::CellSender,
};
use crate::core::{
  dead_letter::DeadLetterReason,
  dispatch::{
    dispatcher::Dispatcher,
    mailbox::{EnqueueOutcome, Mailbox, ScheduleHints},
  },
  error::{ActorError, ActorPanic, SendError, SpawnError, StashError},
  lifecycle::LifecycleStage,
  logging::LogLevel,
  messaging::{AnyMessage, MessageInvoker, SystemMessage},
  props::Props,
  system::SystemState,
};

#[cfg(test)]
mod tests;

/// Runtime container of one actor.
///
/// The cell owns the current actor instance, its mailbox, behavior stack, children and stash, and
/// runs the system-message state machine that drives creation, failure handling, restarts and
/// termination. All of it is only touched by the thread that currently owns the mailbox.
pub struct ActorCell {
  pid:           Pid,
  path:          ActorPath,
  parent:        Option<ActorRef>,
  system:        ArcShared<SystemState>,
  props:         Props,
  mailbox:       ArcShared<Mailbox>,
  dispatcher:    Dispatcher,
  self_ref:      ActorRef,
  state:         SpinSyncMutex<CellState>,
  actor:         SpinSyncMutex<Option<Box<dyn Actor>>>,
  next_child_id: AtomicU64,
}

impl ActorCell {
  /// Builds a cell with its mailbox and dispatcher. The cell is inert until
  /// [`start`](Self::start) enqueues its `Create` message.
  pub(crate) fn create(
    system: &ArcShared<SystemState>,
    parent: Option<ActorRef>,
    path: ActorPath,
    props: &Props,
  ) -> Result<ArcShared<Self>, SpawnError> {
    let dispatcher = system.dispatchers().resolve(props.dispatcher_id())?;
    let policy = system.mailboxes().resolve(props.mailbox())?;
    if policy.requires_blocking() && !dispatcher.executor().supports_blocking() {
      return Err(SpawnError::InvalidMailboxConfig(format!(
        "dispatcher `{}` cannot run a mailbox that blocks its senders",
        dispatcher.id()
      )));
    }

    let pid = system.allocate_pid();
    let mailbox = ArcShared::new(Mailbox::new(policy, system.clock()));
    let system_weak = system.downgrade();
    let cell = ArcShared::new_cyclic(|weak: &WeakShared<Self>| {
      let sender = ArcShared::new(CellSender::new(weak.clone())).into_dyn(|sender| sender as &dyn ActorRefSender);
      let self_ref = ActorRef::new(pid, path.clone(), sender, Some(system_weak.clone()));
      Self {
        pid,
        path,
        parent,
        system: system.clone(),
        props: props.clone(),
        mailbox,
        dispatcher,
        self_ref,
        state: SpinSyncMutex::new(CellState::new()),
        actor: SpinSyncMutex::new(None),
        next_child_id: AtomicU64::new(1),
      }
    });

    let invoker = ArcShared::new(ActorCellInvoker::new(cell.downgrade(), pid, system_weak))
      .into_dyn(|invoker| invoker as &dyn MessageInvoker);
    cell.mailbox.install_invoker(invoker);
    Ok(cell)
  }

  /// Enqueues the `Create` message and schedules the mailbox.
  pub(crate) fn start(&self) {
    if self.mailbox.enqueue_system(SystemMessage::Create).is_ok() {
      self.dispatcher.register_for_execution(&self.mailbox, ScheduleHints::SYSTEM);
    }
  }

  /// Actor identity.
  #[must_use]
  pub const fn pid(&self) -> Pid {
    self.pid
  }

  /// Actor path.
  #[must_use]
  pub const fn path(&self) -> &ActorPath {
    &self.path
  }

  /// Parent reference; `None` for the root guardian.
  #[must_use]
  pub const fn parent(&self) -> Option<&ActorRef> {
    self.parent.as_ref()
  }

  /// Reference to this actor.
  #[must_use]
  pub fn actor_ref(&self) -> ActorRef {
    self.self_ref.clone()
  }

  /// Mailbox of this actor.
  #[must_use]
  pub const fn mailbox(&self) -> &ArcShared<Mailbox> {
    &self.mailbox
  }

  /// Dispatcher running this actor.
  #[must_use]
  pub const fn dispatcher(&self) -> &Dispatcher {
    &self.dispatcher
  }

  /// Props the actor was created from.
  #[must_use]
  pub const fn props(&self) -> &Props {
    &self.props
  }

  /// Shared system state.
  #[must_use]
  pub const fn system(&self) -> &ArcShared<SystemState> {
    &self.system
  }

  /// Live children, in creation order.
  #[must_use]
  pub fn children(&self) -> Vec<ActorRef> {
    self.state.lock().children.children()
  }

  /// Child registered under `name`.
  #[must_use]
  pub fn child(&self, name: &str) -> Option<ActorRef> {
    self.state.lock().children.child_by_name(name)
  }

  /// Enqueues a user message and schedules the mailbox.
  ///
  /// # Errors
  ///
  /// Returns the message when the mailbox rejects it.
  pub fn send_message(&self, message: AnyMessage) -> Result<(), SendError> {
    if let EnqueueOutcome::Evicted(evicted) = self.mailbox.enqueue_user(message)? {
      self.system.record_dead_letter(evicted, DeadLetterReason::MailboxFull, Some(self.pid));
    }
    for message in self.mailbox.reclaim_after_close() {
      self.system.record_dead_letter(message, DeadLetterReason::MailboxClosed, Some(self.pid));
    }
    self.dispatcher.register_for_execution(&self.mailbox, ScheduleHints::USER);
    Ok(())
  }

  /// Enqueues a system message and schedules the mailbox.
  ///
  /// # Errors
  ///
  /// Returns the message once the system queue has been closed.
  pub fn send_system_message(&self, message: SystemMessage) -> Result<(), SystemMessage> {
    self.mailbox.enqueue_system(message)?;
    self.dispatcher.register_for_execution(&self.mailbox, ScheduleHints::SYSTEM);
    Ok(())
  }

  /// Creates a child actor. Anonymous children are named `$<n>`.
  ///
  /// # Errors
  ///
  /// Returns [`SpawnError`] when the name is invalid or taken, when this actor is terminating, or
  /// when the props reference an unknown dispatcher or mailbox.
  pub fn spawn_child(&self, props: &Props, name: Option<&str>) -> Result<ActorRef, SpawnError> {
    let name = match name {
      | Some(name) => {
        validate_name(name)?;
        String::from(name)
      },
      | None => format!("${}", self.next_child_id.fetch_add(1, Ordering::Relaxed)),
    };

    self.state.lock().children.reserve(&name)?;
    let child = match Self::create(&self.system, Some(self.self_ref.clone()), self.path.child(&name), props) {
      | Ok(child) => child,
      | Err(error) => {
        self.state.lock().children.unreserve(&name);
        return Err(error);
      },
    };

    let child_ref = child.actor_ref();
    if !self.state.lock().children.init_child(&child_ref) {
      return Err(SpawnError::SystemUnavailable);
    }
    self.system.register_cell(child.clone());
    child.start();
    self.self_ref.send_system(SystemMessage::Supervise { child: child_ref.pid(), is_async: false });
    Ok(child_ref)
  }

  /// Stops `child`; children are marked so their termination is not mistaken for a failure.
  pub(crate) fn stop_child(&self, child: &ActorRef) {
    {
      let mut state = self.state.lock();
      if state.children.is_child(child.pid()) {
        state.children.shall_die(child.pid());
      }
    }
    child.send_system(SystemMessage::Terminate);
  }

  pub(crate) fn stop_all_children(&self) {
    for child in self.children() {
      self.stop_child(&child);
    }
  }

  /// Runs one user message through the current behavior.
  pub(crate) fn invoke_user(&self, message: AnyMessage) {
    let taken = self.actor.lock().take();
    let Some(mut actor) = taken else {
      self.system.record_dead_letter(message, DeadLetterReason::RecipientUnavailable, Some(self.pid));
      return;
    };

    let slot = self.state.lock().behaviors.current();
    let outcome = {
      let mut ctx = ActorContext::new(self, Some(message.clone()));
      guarded(|| match message.downcast_ref::<Terminated>() {
        | Some(terminated) => actor.on_terminated(&mut ctx, terminated.actor()),
        | None => match &slot {
          | BehaviorSlot::Receive => actor.receive(&mut ctx, message.as_view()),
          | BehaviorSlot::Handler(handler) => match handler.try_handle(&mut *actor, &mut ctx, message.as_view()) {
            | Some(result) => result,
            | None => {
              actor.unhandled(&mut ctx, message.as_view());
              Ok(())
            },
          },
        },
      })
    };
    *self.actor.lock() = Some(actor);

    if let Err(error) = outcome {
      self.state.lock().failed_message = Some(message);
      self.handle_invoke_failure(&[], error, None, false);
    }
  }

  pub(crate) fn install_behavior(&self, slot: BehaviorSlot, stacked: bool) {
    let mut state = self.state.lock();
    if stacked {
      state.behaviors.become_stacked(slot);
    } else {
      state.behaviors.become_behavior(slot);
    }
  }

  pub(crate) fn unbecome_stacked(&self) {
    self.state.lock().behaviors.unbecome_stacked();
  }

  pub(crate) fn behavior_depth(&self) -> usize {
    self.state.lock().behaviors.depth()
  }

  pub(crate) fn stash_message(&self, message: AnyMessage) -> Result<(), StashError> {
    let mut state = self.state.lock();
    if let Some(capacity) = self.props.stash_capacity() {
      if state.stash.len() >= capacity {
        return Err(StashError::CapacityExceeded { capacity });
      }
    }
    state.stash.push_back(message);
    Ok(())
  }

  /// Moves the oldest stashed message to the front of the mailbox.
  pub(crate) fn unstash(&self) -> bool {
    let next = self.state.lock().stash.pop_front();
    match next {
      | Some(message) => {
        self.mailbox.prepend_user(alloc::vec![message]);
        self.dispatcher.register_for_execution(&self.mailbox, ScheduleHints::USER);
        true
      },
      | None => false,
    }
  }

  /// Moves every stashed message to the front of the mailbox, keeping their order.
  pub(crate) fn unstash_all(&self) -> usize {
    let stashed: Vec<AnyMessage> = self.state.lock().stash.drain(..).collect();
    let count = stashed.len();
    if count > 0 {
      self.mailbox.prepend_user(stashed);
      self.dispatcher.register_for_execution(&self.mailbox, ScheduleHints::USER);
    }
    count
  }

  pub(crate) fn stash_len(&self) -> usize {
    self.state.lock().stash.len()
  }

  pub(crate) fn log(&self, level: LogLevel, message: String) {
    self.system.emit_log(level, message, Some(self.pid));
  }

  fn publish_lifecycle(&self, stage: LifecycleStage, reason: Option<ActorError>) {
    let parent = self.parent.as_ref().map(ActorRef::pid);
    self.system.publish_lifecycle(self.pid, parent, self.path.to_string(), stage, reason);
  }
}

impl core::fmt::Debug for ActorCell {
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    f.debug_struct("ActorCell")
      .field("pid", &self.pid)
      .field("path", &format_args!("{}", self.path))
      .field("mailbox", &self.mailbox)
      .finish_non_exhaustive()
  }
}

fn validate_name(name: &str) -> Result<(), SpawnError> {
  if name.is_empty() || name.contains('/') || name.starts_with('$') {
    return Err(SpawnError::invalid_name(name));
  }
  Ok(())
}

/// Runs actor code, turning a panic into a recoverable failure.
fn guarded<R>(body: impl FnOnce() -> Result<R, ActorError>) -> Result<R, ActorError> {
  match catch_unwind(AssertUnwindSafe(body)) {
    | Ok(result) => result,
    | Err(payload) => Err(ActorError::from_cause(ActorPanic::from_payload(&*payload))),
  }
}
