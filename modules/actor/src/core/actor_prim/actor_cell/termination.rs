use alloc::format;
use core::mem;

use super::{ActorCell, guarded};
use crate::core::{
  actor_prim::{ActorContext, SuspendReason},
  dead_letter::DeadLetterReason,
  lifecycle::LifecycleStage,
  logging::LogLevel,
};

impl ActorCell {
  /// Starts stopping the actor. It finishes once every child has terminated.
  pub(super) fn terminate(&self) {
    self.unwatch_watched_actors();
    self.stop_all_children();

    let (waiting, was_terminating) = {
      let mut state = self.state.lock();
      let was_terminating = state.children.is_terminating();
      (state.children.set_termination_reason(SuspendReason::Termination), was_terminating)
    };
    if waiting {
      if !was_terminating {
        self.mailbox.suspend();
        self.state.lock().failed.set_failed(self.pid);
        self.system.emit_debug(format!("{} is waiting for its children to stop", self.path), Some(self.pid));
      }
    } else {
      self.state.lock().children.set_terminated();
      self.finish_terminate();
    }
  }

  /// Runs the stop hook, closes the mailbox and releases the cell. Runs at most once.
  pub(super) fn finish_terminate(&self) {
    {
      let mut state = self.state.lock();
      if state.finished {
        return;
      }
      state.finished = true;
      state.children.set_terminated();
    }

    let actor = self.actor.lock().take();
    if let Some(mut actor) = actor {
      let mut ctx = ActorContext::new(self, None);
      if let Err(error) = guarded(|| actor.on_stop(&mut ctx)) {
        self.log(LogLevel::Warn, format!("stop hook of {} failed: {error}", self.path));
      }
    }

    let (stash, system_stash) = {
      let mut state = self.state.lock();
      state.behaviors.reset();
      (mem::take(&mut state.stash), mem::take(&mut state.system_stash))
    };
    for message in stash {
      self.system.record_dead_letter(message, DeadLetterReason::StashDiscarded, Some(self.pid));
    }

    self.mailbox.become_closed();
    for message in system_stash.into_iter().chain(self.mailbox.close_system_queue()) {
      self.system.handle_undeliverable_system(self.pid, message);
    }
    for message in self.mailbox.drain_user_messages() {
      self.system.record_dead_letter(message, DeadLetterReason::MailboxClosed, Some(self.pid));
    }

    self.tell_watchers_we_died();
    self.system.remove_cell(self.pid);
    self.publish_lifecycle(LifecycleStage::Stopped, None);
    if self.parent.is_none() {
      self.system.mark_terminated();
    }
  }
}
