use alloc::{format, vec::Vec};

use super::{ActorCell, FailedState, guarded};
use crate::core::{
  actor_prim::{ActorContext, ActorRef, Pid, SuspendReason},
  error::ActorError,
  lifecycle::LifecycleStage,
  logging::LogLevel,
  messaging::{FailurePayload, SystemMessage},
  supervision::{SupervisorDirective, SupervisorStrategy, SupervisorStrategyKind},
};

impl ActorCell {
  pub(super) fn fault_suspend(&self) {
    self.mailbox.suspend();
    for child in self.children() {
      child.send_system(SystemMessage::Suspend);
    }
  }

  /// Resumes after a failure. Only the child that caused the failure receives `cause`, which
  /// clears its own failure state.
  pub(super) fn fault_resume(&self, cause: Option<ActorError>) {
    if self.actor.lock().is_none() {
      self.log(LogLevel::Warn, format!("{} is not instantiated; retrying its creation", self.path));
      self.fault_create();
      return;
    }
    let fatal = self.state.lock().failed.is_fatal();
    let cause = match (fatal, cause) {
      | (true, Some(cause)) => {
        self.fault_recreate(cause);
        return;
      },
      | (_, cause) => cause,
    };

    let perpetrator = {
      let mut state = self.state.lock();
      let perpetrator = state.failed.perpetrator();
      if cause.is_some() {
        state.failed.clear();
      }
      perpetrator
    };
    self.mailbox.resume();
    self.resume_children(cause, perpetrator);
  }

  /// Discards the failed instance. The fresh one is created once every child stopped by the
  /// pre-restart hook has terminated.
  pub(super) fn fault_recreate(&self, cause: ActorError) {
    if self.actor.lock().is_none() {
      self.log(LogLevel::Warn, format!("{} is not instantiated; retrying its creation", self.path));
      self.fault_create();
      return;
    }
    if !self.state.lock().children.is_normal() {
      self.fault_resume(None);
      return;
    }

    let failed = self.actor.lock().take();
    let (fatal, failed_message) = {
      let mut state = self.state.lock();
      (state.failed.is_fatal(), state.failed_message.take())
    };
    self.unstash_all();
    if let Some(mut failed) = failed {
      if !fatal {
        let mut ctx = ActorContext::new(self, None);
        if let Err(error) = guarded(|| failed.on_pre_restart(&mut ctx, &cause, failed_message.as_ref())) {
          self.log(LogLevel::Error, format!("pre-restart hook of {} failed: {error}", self.path));
        }
      }
    }

    let waiting = {
      let mut state = self.state.lock();
      state.behaviors.reset();
      state.children.set_termination_reason(SuspendReason::Recreation(cause.clone()))
    };
    if !waiting {
      self.finish_recreate(cause);
    }
  }

  /// Creates the fresh instance and restarts the children that survived the pre-restart hook.
  pub(super) fn finish_recreate(&self, cause: ActorError) {
    let survivors = self.children();
    self.mailbox.resume();
    self.state.lock().failed.clear();

    let outcome = {
      let mut ctx = ActorContext::new(self, None);
      guarded(|| {
        let mut fresh = self.props.factory().create()?;
        fresh.on_post_restart(&mut ctx, &cause)?;
        Ok(fresh)
      })
    };
    match outcome {
      | Ok(fresh) => {
        *self.actor.lock() = Some(fresh);
        self.state.lock().failed = FailedState::Healthy;
        self.publish_lifecycle(LifecycleStage::Restarted, Some(cause.clone()));
        for child in &survivors {
          child.send_system(SystemMessage::Recreate(cause.clone()));
        }
      },
      | Err(error) => {
        self.state.lock().failed = FailedState::Fatal;
        let skip: Vec<Pid> = survivors.iter().map(ActorRef::pid).collect();
        self.handle_invoke_failure(&skip, error, None, true);
      },
    }
  }

  /// Retries a failed creation once every child has terminated.
  fn fault_create(&self) {
    self.stop_all_children();
    let waiting = self.state.lock().children.set_termination_reason(SuspendReason::Creation);
    if !waiting {
      self.finish_create();
    }
  }

  pub(super) fn finish_create(&self) {
    self.mailbox.resume();
    self.state.lock().failed = FailedState::Healthy;
    self.create_instance();
  }

  /// Suspends the cell and reports `cause` to the parent. `escalated_from` names the child whose
  /// failure is being escalated; `None` when the actor failed itself.
  pub(super) fn handle_invoke_failure(
    &self,
    skip: &[Pid],
    cause: ActorError,
    escalated_from: Option<Pid>,
    initialization: bool,
  ) {
    let to_suspend: Vec<ActorRef> = {
      let mut state = self.state.lock();
      if state.failed.is_failed() {
        return;
      }
      state.failed.set_failed(escalated_from.unwrap_or(self.pid));
      state
        .children
        .children()
        .into_iter()
        .filter(|child| !skip.contains(&child.pid()) && Some(child.pid()) != escalated_from)
        .collect()
    };
    self.mailbox.suspend();
    for child in &to_suspend {
      child.send_system(SystemMessage::Suspend);
    }
    self.log(LogLevel::Error, format!("{} failed: {cause}", self.path));

    match &self.parent {
      | Some(parent) => {
        let payload = if initialization {
          FailurePayload::initialization(self.pid, cause)
        } else {
          FailurePayload::new(self.pid, cause)
        };
        parent.send_system(SystemMessage::Failed(payload));
      },
      | None => {
        let name = self.system.name();
        self.log(LogLevel::Error, format!("failure reached the root guardian, terminating actor system {name}"));
        self.self_ref.send_system(SystemMessage::Terminate);
      },
    }
  }

  /// Applies this actor's supervisor strategy to a failed child.
  pub(super) fn handle_failure(&self, payload: FailurePayload) {
    let child = self.state.lock().children.child_by_pid(payload.child());
    let Some(child) = child.filter(|child| child.pid().uid() == payload.uid()) else {
      self.system.emit_debug(
        format!("{} dropped a failure report from unknown child {}", self.path, payload.child()),
        Some(self.pid),
      );
      return;
    };

    let initialization = payload.is_initialization();
    let cause = payload.into_cause();
    let strategy = self.props.supervisor_strategy();
    let directive = if initialization {
      SupervisorDirective::Stop
    } else {
      match guarded(|| Ok(strategy.decide(&cause))) {
        | Ok(directive) => directive,
        | Err(error) => {
          let message = format!("supervisor of {} failed to decide on {}: {error}", self.path, child.path());
          self.log(LogLevel::Error, message);
          self.handle_invoke_failure(&[], error, Some(child.pid()), false);
          return;
        },
      }
    };
    self.log(LogLevel::Info, format!("{} applies {directive:?} to {} after: {cause}", self.path, child.path()));

    match directive {
      | SupervisorDirective::Resume => child.send_system(SystemMessage::Resume(Some(cause))),
      | SupervisorDirective::Restart => self.restart_children(&child, cause, strategy),
      | SupervisorDirective::Stop => match strategy.kind() {
        | SupervisorStrategyKind::OneForOne => self.stop_child(&child),
        | SupervisorStrategyKind::AllForOne => self.stop_all_children(),
      },
      | SupervisorDirective::Escalate => self.handle_invoke_failure(&[], cause, Some(child.pid()), false),
    }
  }

  fn restart_children(&self, failed: &ActorRef, cause: ActorError, strategy: &SupervisorStrategy) {
    let now = self.system.now();
    match strategy.kind() {
      | SupervisorStrategyKind::OneForOne => {
        let permitted = self
          .state
          .lock()
          .children
          .stats_mut(failed.pid())
          .is_some_and(|stats| strategy.request_restart_permission(stats, now));
        if permitted {
          failed.send_system(SystemMessage::Recreate(cause));
        } else {
          self.escalate_exhausted(failed, cause);
        }
      },
      | SupervisorStrategyKind::AllForOne => {
        let (permitted, children) = {
          let mut state = self.state.lock();
          let permitted = state.children.all_stats_mut().all(|stats| strategy.request_restart_permission(stats, now));
          (permitted, state.children.children())
        };
        if !permitted {
          self.escalate_exhausted(failed, cause);
          return;
        }
        for child in &children {
          if child.pid() != failed.pid() {
            child.send_system(SystemMessage::Suspend);
          }
          child.send_system(SystemMessage::Recreate(cause.clone()));
        }
      },
    }
  }

  fn escalate_exhausted(&self, failed: &ActorRef, cause: ActorError) {
    self.log(LogLevel::Warn, format!("restart budget of {} exhausted, escalating", failed.path()));
    self.handle_invoke_failure(&[], cause, Some(failed.pid()), false);
  }

  fn resume_children(&self, cause: Option<ActorError>, perpetrator: Option<Pid>) {
    for child in self.children() {
      let cause = if Some(child.pid()) == perpetrator { cause.clone() } else { None };
      child.send_system(SystemMessage::Resume(cause));
    }
  }
}
