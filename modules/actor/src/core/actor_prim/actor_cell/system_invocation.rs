use alloc::{collections::VecDeque, format};
use core::mem;

use super::{ActorCell, FailedState, guarded};
use crate::core::{
  actor_prim::{ActorContext, Pid},
  lifecycle::LifecycleStage,
  logging::LogLevel,
  messaging::SystemMessage,
};

/// How far the cell is from processing every kind of system message.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
enum SuspensionLevel {
  Running,
  Suspended,
  WaitingForChildren,
}

impl ActorCell {
  /// Processes one system message, deferring those that must wait while the cell is suspended
  /// or waiting for children. Deferred messages are replayed in order once the cell gets less
  /// suspended.
  pub(crate) fn invoke_system(&self, message: SystemMessage) {
    let mut pending = VecDeque::new();
    pending.push_back(message);
    while let Some(message) = pending.pop_front() {
      if self.mailbox.is_closed() {
        self.system.handle_undeliverable_system(self.pid, message);
        continue;
      }
      let level = self.suspension_level();
      if should_defer(&message, level) {
        self.state.lock().system_stash.push(message);
        continue;
      }
      self.dispatch_system(message);
      if self.suspension_level() < level {
        let deferred = mem::take(&mut self.state.lock().system_stash);
        for message in deferred.into_iter().rev() {
          pending.push_front(message);
        }
      }
    }
  }

  fn suspension_level(&self) -> SuspensionLevel {
    if self.state.lock().children.is_waiting_for_children() {
      SuspensionLevel::WaitingForChildren
    } else if self.mailbox.is_suspended() {
      SuspensionLevel::Suspended
    } else {
      SuspensionLevel::Running
    }
  }

  fn dispatch_system(&self, message: SystemMessage) {
    match message {
      | SystemMessage::Create => self.create_instance(),
      | SystemMessage::Recreate(cause) => self.fault_recreate(cause),
      | SystemMessage::Suspend => self.fault_suspend(),
      | SystemMessage::Resume(cause) => self.fault_resume(cause),
      | SystemMessage::Terminate => self.terminate(),
      | SystemMessage::Supervise { child, .. } => self.supervise(child),
      | SystemMessage::Watch { watchee, watcher } => self.add_watcher(watchee, watcher),
      | SystemMessage::Unwatch { watchee, watcher } => self.remove_watcher(watchee, watcher),
      | SystemMessage::Failed(payload) => self.handle_failure(payload),
      | SystemMessage::DeathWatchNotification { actor, existence_confirmed } => {
        self.watched_actor_terminated(actor, existence_confirmed);
      },
      | SystemMessage::NoMessage => {
        self.log(LogLevel::Warn, format!("{} ignored a NoMessage system message", self.path));
      },
    }
  }

  /// Instantiates the actor and runs its start hook. Any failure is an initialization failure.
  pub(super) fn create_instance(&self) {
    let outcome = {
      let mut ctx = ActorContext::new(self, None);
      guarded(|| {
        let mut actor = self.props.factory().create()?;
        actor.on_start(&mut ctx)?;
        Ok(actor)
      })
    };
    match outcome {
      | Ok(actor) => {
        *self.actor.lock() = Some(actor);
        self.publish_lifecycle(LifecycleStage::Started, None);
      },
      | Err(error) => {
        self.state.lock().failed = FailedState::Fatal;
        self.handle_invoke_failure(&[], error, None, true);
      },
    }
  }

  fn supervise(&self, child: Pid) {
    let known = self.state.lock().children.child_by_pid(child).is_some();
    if known {
      self.system.emit_debug(format!("{} now supervises {child}", self.path), Some(self.pid));
    } else {
      self.log(LogLevel::Error, format!("{} received a supervision request from unknown actor {child}", self.path));
    }
  }
}

fn should_defer(message: &SystemMessage, level: SuspensionLevel) -> bool {
  match level {
    | SuspensionLevel::WaitingForChildren => message.stash_when_waiting_for_children(),
    | SuspensionLevel::Suspended => message.stash_when_failed(),
    | SuspensionLevel::Running => false,
  }
}
