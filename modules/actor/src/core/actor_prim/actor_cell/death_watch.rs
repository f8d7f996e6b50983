use alloc::format;
use core::mem;

use super::ActorCell;
use crate::core::{
  actor_prim::{ActorRef, Pid, SuspendReason, Terminated},
  dead_letter::DeadLetterReason,
  logging::LogLevel,
  messaging::{AnyMessage, SystemMessage},
};

impl ActorCell {
  /// Starts watching `target`; a [`Terminated`] message arrives once it stops.
  pub(crate) fn watch(&self, target: &ActorRef) {
    if target.pid() == self.pid {
      return;
    }
    let added = {
      let mut state = self.state.lock();
      if state.watching.iter().any(|watched| watched.pid() == target.pid()) {
        false
      } else {
        state.watching.push(target.clone());
        true
      }
    };
    if added {
      target.send_system(SystemMessage::Watch { watchee: target.pid(), watcher: self.pid });
    }
  }

  /// Stops watching `target`; a termination already in flight is no longer delivered.
  pub(crate) fn unwatch(&self, target: &ActorRef) {
    let removed = {
      let mut state = self.state.lock();
      let before = state.watching.len();
      state.watching.retain(|watched| watched.pid() != target.pid());
      state.watching.len() != before
    };
    if removed {
      target.send_system(SystemMessage::Unwatch { watchee: target.pid(), watcher: self.pid });
    }
  }

  pub(super) fn add_watcher(&self, watchee: Pid, watcher: Pid) {
    match (watchee == self.pid, watcher == self.pid) {
      | (true, false) => match self.system.actor_ref(watcher) {
        | Some(watcher) => {
          let mut state = self.state.lock();
          if !state.watched_by.contains(&watcher) {
            state.watched_by.push(watcher);
          }
        },
        | None => {
          self.system.emit_debug(format!("{} ignored a watch from stopped actor {watcher}", self.path), Some(self.pid));
        },
      },
      | (false, true) => match self.system.actor_ref(watchee) {
        | Some(watchee) => self.watch(&watchee),
        | None => self.log(LogLevel::Warn, format!("{} cannot watch stopped actor {watchee}", self.path)),
      },
      | _ => self.log(LogLevel::Warn, format!("{} received an invalid watch of {watchee} by {watcher}", self.path)),
    }
  }

  pub(super) fn remove_watcher(&self, watchee: Pid, watcher: Pid) {
    match (watchee == self.pid, watcher == self.pid) {
      | (true, false) => self.state.lock().watched_by.retain(|watching| watching.pid() != watcher),
      | (false, true) => {
        let target = self.state.lock().watching.iter().find(|watched| watched.pid() == watchee).cloned();
        if let Some(target) = target {
          self.unwatch(&target);
        }
      },
      | _ => self.log(LogLevel::Warn, format!("{} received an invalid unwatch of {watchee} by {watcher}", self.path)),
    }
  }

  /// Handles the death of a watched actor or of a child.
  pub(super) fn watched_actor_terminated(&self, actor: Pid, existence_confirmed: bool) {
    let (was_watching, terminating) = {
      let mut state = self.state.lock();
      let before = state.watching.len();
      state.watching.retain(|watched| watched.pid() != actor);
      (state.watching.len() != before, state.children.is_terminating())
    };
    if was_watching && !terminating {
      let notification = AnyMessage::new(Terminated::new(actor, existence_confirmed));
      if let Err(error) = self.send_message(notification) {
        let reason = DeadLetterReason::from_send_error(&error);
        self.system.record_dead_letter(error.into_message(), reason, Some(self.pid));
      }
    }

    let is_child = self.state.lock().children.is_child(actor);
    if is_child {
      self.handle_child_terminated(actor);
    }
  }

  fn handle_child_terminated(&self, child: Pid) {
    let reason = self.state.lock().children.remove_child(child);
    match reason {
      | Some(SuspendReason::Recreation(cause)) => self.finish_recreate(cause),
      | Some(SuspendReason::Creation) => self.finish_create(),
      | Some(SuspendReason::Termination) => self.finish_terminate(),
      | Some(SuspendReason::UserRequest) | None => {},
    }
  }

  /// Drops every watch this actor holds so no termination reaches it while it stops.
  pub(super) fn unwatch_watched_actors(&self) {
    let watching = mem::take(&mut self.state.lock().watching);
    for target in watching {
      target.send_system(SystemMessage::Unwatch { watchee: target.pid(), watcher: self.pid });
    }
  }

  /// Notifies the parent and every watcher that this actor has terminated.
  pub(super) fn tell_watchers_we_died(&self) {
    let watchers = mem::take(&mut self.state.lock().watched_by);
    let parent = self.parent.as_ref().map(ActorRef::pid);
    if let Some(parent) = &self.parent {
      parent.send_system(SystemMessage::DeathWatchNotification { actor: self.pid, existence_confirmed: true });
    }
    for watcher in watchers.iter().filter(|watcher| Some(watcher.pid()) != parent) {
      watcher.send_system(SystemMessage::DeathWatchNotification { actor: self.pid, existence_confirmed: true });
    }
  }
}
