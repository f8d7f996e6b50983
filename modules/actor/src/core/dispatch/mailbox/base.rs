use alloc::{collections::VecDeque, vec::Vec};
use core::{fmt, time::Duration};

use portable_atomic::{Ordering, fence};
use tessera_utils_rs::core::{
  sync::{ArcShared, SpinSyncMutex},
  time::MonotonicClock,
};

use super::{
  EnqueueOutcome, MailboxOverflowStrategy, MailboxPolicy, ScheduleHints, SystemQueue, mailbox_status::MailboxStatus,
  user_queue::UserQueue,
};
use crate::core::{
  error::SendError,
  messaging::{AnyMessage, MessageInvoker, SystemMessage},
};


/// Per-actor message buffer with a user queue, a system queue and an atomic status word.
///
/// A mailbox is processed by at most one thread at a time: whoever wins
/// [`set_as_scheduled`](Self::set_as_scheduled) runs it until [`set_as_idle`](Self::set_as_idle).
/// System messages always run before user messages and are swept again after every user message.
pub struct Mailbox {
  status:  MailboxStatus,
  system:  SystemQueue,
  user:    UserQueue,
  prepend: SpinSyncMutex<VecDeque<AnyMessage>>,
  policy:  MailboxPolicy,
  clock:   ArcShared<dyn MonotonicClock>,
  invoker: SpinSyncMutex<Option<ArcShared<dyn MessageInvoker>>>,
}

impl Mailbox {
  /// Creates an open mailbox.
  #[must_use]
  pub fn new(policy: MailboxPolicy, clock: ArcShared<dyn MonotonicClock>) -> Self {
    Self {
      status: MailboxStatus::new(),
      system: SystemQueue::new(),
      user: UserQueue::for_policy(&policy),
      prepend: SpinSyncMutex::new(VecDeque::new()),
      policy,
      clock,
      invoker: SpinSyncMutex::new(None),
    }
  }

  /// Installs the target driven by [`run`](Self::run).
  pub fn install_invoker(&self, invoker: ArcShared<dyn MessageInvoker>) {
    *self.invoker.lock() = Some(invoker);
  }

  pub(crate) fn invoker(&self) -> Option<ArcShared<dyn MessageInvoker>> {
    self.invoker.lock().clone()
  }

  /// Returns the mailbox policy.
  #[must_use]
  pub const fn policy(&self) -> &MailboxPolicy {
    &self.policy
  }

  /// Enqueues a user message according to the overflow strategy.
  ///
  /// # Errors
  ///
  /// Returns the message when the mailbox is closed, full under
  /// [`MailboxOverflowStrategy::DropNewest`], or still full when a blocking enqueue times out.
  pub fn enqueue_user(&self, message: AnyMessage) -> Result<EnqueueOutcome, SendError> {
    if self.is_closed() {
      return Err(SendError::closed(message));
    }
    match &self.user {
      | UserQueue::Unbounded(queue) => {
        queue.push(message);
        Ok(EnqueueOutcome::Enqueued)
      },
      | UserQueue::Bounded(queue) => match self.policy.overflow() {
        | MailboxOverflowStrategy::DropNewest => {
          queue.push(message).map(|()| EnqueueOutcome::Enqueued).map_err(SendError::full)
        },
        | MailboxOverflowStrategy::DropOldest => match queue.force_push(message) {
          | None => Ok(EnqueueOutcome::Enqueued),
          | Some(evicted) => Ok(EnqueueOutcome::Evicted(evicted)),
        },
        | MailboxOverflowStrategy::Block { timeout } => {
          let deadline = self.clock.now().saturating_add(timeout);
          let mut pending = message;
          loop {
            match queue.push(pending) {
              | Ok(()) => return Ok(EnqueueOutcome::Enqueued),
              | Err(rejected) => pending = rejected,
            }
            if self.is_closed() {
              return Err(SendError::closed(pending));
            }
            if self.clock.now() >= deadline {
              return Err(SendError::timeout(pending));
            }
            std::thread::yield_now();
          }
        },
      },
    }
  }

  /// Enqueues a system message.
  ///
  /// # Errors
  ///
  /// Returns the message when the mailbox has been cleaned up after termination.
  pub fn enqueue_system(&self, message: SystemMessage) -> Result<(), SystemMessage> {
    self.system.push(message)
  }

  /// Puts messages back at the front of the user queue, keeping their relative order.
  pub fn prepend_user(&self, messages: Vec<AnyMessage>) {
    let mut prepend = self.prepend.lock();
    for message in messages.into_iter().rev() {
      prepend.push_front(message);
    }
  }

  /// Removes the next user message.
  pub fn dequeue(&self) -> Option<AnyMessage> {
    if let Some(message) = self.prepend.lock().pop_front() {
      return Some(message);
    }
    self.user.pop()
  }

  /// Returns `true` if user messages are queued.
  #[must_use]
  pub fn has_messages(&self) -> bool {
    !self.prepend.lock().is_empty() || !self.user.is_empty()
  }

  /// Number of queued user messages.
  #[must_use]
  pub fn number_of_messages(&self) -> usize {
    self.prepend.lock().len() + self.user.len()
  }

  /// Returns `true` if system messages are queued.
  #[must_use]
  pub fn has_system_messages(&self) -> bool {
    self.system.has_messages()
  }

  /// Adds one suspension level; returns `true` if the mailbox was not suspended before.
  pub fn suspend(&self) -> bool {
    self.status.suspend()
  }

  /// Removes one suspension level; returns `true` if the mailbox is no longer suspended.
  pub fn resume(&self) -> bool {
    self.status.resume()
  }

  /// Returns `true` while at least one suspension is in effect.
  #[must_use]
  pub fn is_suspended(&self) -> bool {
    self.status.is_suspended()
  }

  /// Number of nested suspensions.
  #[must_use]
  pub fn suspend_count(&self) -> u32 {
    self.status.suspend_count()
  }

  /// Returns `true` once the mailbox has been closed.
  #[must_use]
  pub fn is_closed(&self) -> bool {
    self.status.is_closed()
  }

  /// Returns `true` while a thread owns the mailbox.
  #[must_use]
  pub fn is_scheduled(&self) -> bool {
    self.status.is_scheduled()
  }

  /// Returns `true` if user messages may be processed now.
  #[must_use]
  pub fn should_process_message(&self) -> bool {
    self.status.should_process_message()
  }

  /// Closes the mailbox; returns `true` if this call closed it.
  pub fn become_closed(&self) -> bool {
    self.status.become_closed()
  }

  /// Claims the mailbox for processing.
  pub fn set_as_scheduled(&self) -> bool {
    self.status.set_as_scheduled()
  }

  /// Releases the processing claim.
  pub fn set_as_idle(&self) {
    self.status.set_as_idle();
  }

  /// Returns `true` if running the mailbox now would make progress.
  ///
  /// A suspended mailbox is only worth running for system messages; a closed one never is.
  #[must_use]
  pub fn can_be_scheduled_for_execution(&self, hints: ScheduleHints) -> bool {
    if self.is_closed() {
      false
    } else if self.is_suspended() {
      hints.has_system_messages || self.has_system_messages()
    } else {
      hints.has_system_messages || hints.has_user_messages || self.has_system_messages() || self.has_messages()
    }
  }

  /// Seals the system queue and returns the messages that were still queued.
  pub fn close_system_queue(&self) -> Vec<SystemMessage> {
    self.system.close()
  }

  /// Removes every queued user message.
  pub fn drain_user_messages(&self) -> Vec<AnyMessage> {
    fence(Ordering::SeqCst);
    let mut drained: Vec<AnyMessage> = self.prepend.lock().drain(..).collect();
    while let Some(message) = self.user.pop() {
      drained.push(message);
    }
    drained
  }

  /// Removes user messages that were pushed concurrently with [`become_closed`](Self::become_closed)
  /// and missed the final drain. Returns nothing while the mailbox is open.
  pub fn reclaim_after_close(&self) -> Vec<AnyMessage> {
    fence(Ordering::SeqCst);
    if self.is_closed() { self.drain_user_messages() } else { Vec::new() }
  }

  /// Processes one batch: all system messages, then up to `throughput` user messages or until
  /// `deadline` has elapsed. The caller must hold the schedule claim; it is released on return.
  pub fn run(&self, throughput: usize, deadline: Option<Duration>) {
    let _claim = ScheduledClaim { mailbox: self };
    if let Some(invoker) = self.invoker() {
      if !self.is_closed() {
        self.process_all_system_messages(&*invoker);
        self.process_mailbox(&*invoker, throughput, deadline);
      }
    }
  }

  fn process_mailbox(&self, invoker: &dyn MessageInvoker, throughput: usize, deadline: Option<Duration>) {
    let limit = throughput.max(1);
    let deadline_at = deadline.map(|budget| self.clock.now().saturating_add(budget));
    let mut processed = 0;
    while processed < limit && self.should_process_message() {
      let Some(message) = self.dequeue() else {
        break;
      };
      invoker.invoke_user_message(message);
      self.process_all_system_messages(invoker);
      processed += 1;
      if deadline_at.is_some_and(|deadline_at| self.clock.now() >= deadline_at) {
        break;
      }
    }
  }

  fn process_all_system_messages(&self, invoker: &dyn MessageInvoker) {
    let mut batch = self.system.take_all().into_iter();
    while !self.is_closed() {
      match batch.next() {
        | Some(message) => invoker.invoke_system_message(message),
        | None => {
          let next = self.system.take_all();
          if next.is_empty() {
            break;
          }
          batch = next.into_iter();
        },
      }
    }
    for message in batch {
      invoker.discard_system_message(message);
    }
  }
}

impl fmt::Debug for Mailbox {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("Mailbox")
      .field("policy", &self.policy)
      .field("closed", &self.is_closed())
      .field("scheduled", &self.is_scheduled())
      .field("suspend_count", &self.suspend_count())
      .field("messages", &self.number_of_messages())
      .finish()
  }
}

/// Releases the scheduling claim when a batch ends, including when the invoker unwinds.
struct ScheduledClaim<'a> {
  mailbox: &'a Mailbox,
}

impl Drop for ScheduledClaim<'_> {
  fn drop(&mut self) {
    self.mailbox.set_as_idle();
  }
}
