//! Processing context handed to actor hooks and handlers.


use alloc::{format, string::String, vec::Vec};

use tessera_utils_rs::core::sync::ArcShared;

use super::{Actor, ActorCell, ActorPath, ActorRef, Behavior, BehaviorSlot, MessageHandler, Pid};
use crate::core::{
  dead_letter::DeadLetterReason,
  error::{SpawnError, StashError},
  event_stream::{EventStreamEvent, UnhandledMessageEvent},
  logging::LogLevel,
  messaging::{AnyMessage, AnyMessageView},
  props::Props,
  system::ActorSystem,
};

/// Provides the running actor's view of the system while it handles a message or a hook.
pub struct ActorContext<'a> {
  cell:    &'a ActorCell,
  current: Option<AnyMessage>,
  stashed: bool,
}

impl<'a> ActorContext<'a> {
  pub(crate) const fn new(cell: &'a ActorCell, current: Option<AnyMessage>) -> Self {
    Self { cell, current, stashed: false }
  }

  /// Returns a handle to the actor system.
  #[must_use]
  pub fn system(&self) -> ActorSystem {
    ActorSystem::from_state(self.cell.system().clone())
  }

  /// Returns the pid of the running actor.
  #[must_use]
  pub const fn pid(&self) -> Pid {
    self.cell.pid()
  }

  /// Returns the path of the running actor.
  #[must_use]
  pub const fn path(&self) -> &ActorPath {
    self.cell.path()
  }

  /// Returns a reference to the running actor.
  #[must_use]
  pub fn self_ref(&self) -> ActorRef {
    self.cell.actor_ref()
  }

  /// Returns the parent reference; `None` for the root guardian.
  #[must_use]
  pub const fn parent(&self) -> Option<&ActorRef> {
    self.cell.parent()
  }

  /// Message being processed; `None` inside lifecycle hooks.
  #[must_use]
  pub const fn current_message(&self) -> Option<&AnyMessage> {
    self.current.as_ref()
  }

  /// Sender of the current message, or [`ActorRef::no_sender`] when there is none.
  #[must_use]
  pub fn sender(&self) -> ActorRef {
    self.current.as_ref().and_then(AnyMessage::sender).cloned().unwrap_or_else(ActorRef::no_sender)
  }

  /// Sends `message` to the sender of the current message. Without a sender the reply becomes a
  /// dead letter.
  pub fn reply(&self, message: AnyMessage) {
    match self.current.as_ref().and_then(AnyMessage::sender) {
      | Some(sender) => sender.tell_from(message, &self.self_ref()),
      | None => self.cell.system().record_dead_letter(message, DeadLetterReason::RecipientUnavailable, None),
    }
  }

  /// Sends `message` to `target` with this actor as the sender.
  pub fn tell(&self, target: &ActorRef, message: AnyMessage) {
    target.tell_from(message, &self.self_ref());
  }

  /// Sends `message` to `target`, keeping the sender of the current message.
  pub fn forward(&self, target: &ActorRef, message: AnyMessage) {
    match self.current.as_ref().and_then(AnyMessage::sender) {
      | Some(sender) => target.tell_from(message, sender),
      | None => target.tell(message),
    }
  }

  /// Creates a child with a generated name.
  ///
  /// # Errors
  ///
  /// Returns an error when the child cannot be created.
  pub fn actor_of(&self, props: &Props) -> Result<ActorRef, SpawnError> {
    self.cell.spawn_child(props, None)
  }

  /// Creates a child named `name`.
  ///
  /// # Errors
  ///
  /// Returns [`SpawnError::NameConflict`] when a sibling already uses the name, and other errors
  /// when the child cannot be created.
  pub fn actor_of_named(&self, props: &Props, name: &str) -> Result<ActorRef, SpawnError> {
    self.cell.spawn_child(props, Some(name))
  }

  /// Creates a child and watches it.
  ///
  /// # Errors
  ///
  /// Returns an error when the child cannot be created.
  pub fn actor_of_watched(&self, props: &Props) -> Result<ActorRef, SpawnError> {
    let child = self.actor_of(props)?;
    self.watch(&child);
    Ok(child)
  }

  /// Returns the live children.
  #[must_use]
  pub fn children(&self) -> Vec<ActorRef> {
    self.cell.children()
  }

  /// Returns the child named `name`.
  #[must_use]
  pub fn child(&self, name: &str) -> Option<ActorRef> {
    self.cell.child(name)
  }

  /// Stops `actor` asynchronously; children are tracked so their termination completes a pending
  /// restart or stop of this actor.
  pub fn stop(&self, actor: &ActorRef) {
    self.cell.stop_child(actor);
  }

  /// Stops the running actor once the current message has been processed.
  pub fn stop_self(&self) {
    self.cell.stop_child(&self.self_ref());
  }

  /// Stops every child.
  pub fn stop_children(&self) {
    self.cell.stop_all_children();
  }

  /// Watches `target`; a [`Terminated`](super::Terminated) notification reaches
  /// [`Actor::on_terminated`] once it stops, even if it already has.
  pub fn watch(&self, target: &ActorRef) {
    self.cell.watch(target);
  }

  /// Stops watching `target`.
  pub fn unwatch(&self, target: &ActorRef) {
    self.cell.unwatch(target);
  }

  /// Replaces the top of the behavior stack.
  pub fn become_behavior<A: Actor>(&mut self, behavior: Behavior<A>) {
    self.cell.install_behavior(Self::slot(behavior), false);
  }

  /// Pushes a behavior; [`unbecome_stacked`](Self::unbecome_stacked) restores the previous one.
  pub fn become_stacked<A: Actor>(&mut self, behavior: Behavior<A>) {
    self.cell.install_behavior(Self::slot(behavior), true);
  }

  /// Pops the top behavior. The actor's own `receive` is restored when nothing else remains.
  pub fn unbecome_stacked(&mut self) {
    self.cell.unbecome_stacked();
  }

  /// Depth of the behavior stack, counting the actor's own `receive`.
  #[must_use]
  pub fn behavior_depth(&self) -> usize {
    self.cell.behavior_depth()
  }

  /// Defers the current message until [`unstash`](Self::unstash) or
  /// [`unstash_all`](Self::unstash_all).
  ///
  /// # Errors
  ///
  /// Returns [`StashError::Initialization`] outside message processing,
  /// [`StashError::AlreadyStashed`] when called twice for the same message and
  /// [`StashError::CapacityExceeded`] once the configured stash capacity is reached.
  pub fn stash(&mut self) -> Result<(), StashError> {
    let Some(current) = self.current.as_ref() else {
      return Err(StashError::Initialization);
    };
    if self.stashed {
      return Err(StashError::AlreadyStashed);
    }
    self.cell.stash_message(current.clone())?;
    self.stashed = true;
    Ok(())
  }

  /// Moves the oldest stashed message to the front of the mailbox.
  pub fn unstash(&mut self) -> bool {
    self.cell.unstash()
  }

  /// Moves every stashed message to the front of the mailbox, oldest first.
  pub fn unstash_all(&mut self) -> usize {
    self.cell.unstash_all()
  }

  /// Number of stashed messages.
  #[must_use]
  pub fn stash_len(&self) -> usize {
    self.cell.stash_len()
  }

  /// Emits a log event associated with the running actor.
  pub fn log(&self, level: LogLevel, message: impl Into<String>) {
    self.cell.log(level, message.into());
  }

  pub(crate) fn publish_unhandled(&self, message: AnyMessageView<'_>) {
    let system = self.cell.system();
    system.emit_debug(format!("{} did not handle a message of {:?}", self.path(), message.type_id()), Some(self.pid()));
    if let Some(current) = &self.current {
      let event = UnhandledMessageEvent::new(self.pid(), current.clone(), system.now());
      system.publish(&EventStreamEvent::UnhandledMessage(event));
    }
  }

  fn slot<A: Actor>(behavior: Behavior<A>) -> BehaviorSlot {
    BehaviorSlot::Handler(ArcShared::new(behavior).into_dyn(|handler| handler as &dyn MessageHandler))
  }
}
