use portable_atomic::{AtomicU32, Ordering};


const OPEN: u32 = 0;
const CLOSED: u32 = 1;
const SCHEDULED: u32 = 2;
const SHOULD_SCHEDULE_MASK: u32 = 3;
const SHOULD_NOT_PROCESS_MASK: u32 = !2;
const SUSPEND_MASK: u32 = !3;
const SUSPEND_UNIT: u32 = 4;

/// Atomic status word of a mailbox.
///
/// Bit 0 marks the mailbox closed, bit 1 scheduled; the remaining bits count nested
/// suspensions. Closing overwrites the whole word, so no transition leads out of `Closed`.
#[derive(Debug)]
pub(crate) struct MailboxStatus {
  word: AtomicU32,
}

impl MailboxStatus {
  pub(crate) const fn new() -> Self {
    Self { word: AtomicU32::new(OPEN) }
  }

  fn current(&self) -> u32 {
    self.word.load(Ordering::Acquire)
  }

  fn update(&self, current: u32, next: u32) -> Result<(), u32> {
    self.word.compare_exchange(current, next, Ordering::AcqRel, Ordering::Acquire).map(|_| ())
  }

  pub(crate) fn is_closed(&self) -> bool {
    self.current() == CLOSED
  }

  pub(crate) fn is_scheduled(&self) -> bool {
    self.current() & SCHEDULED != 0
  }

  pub(crate) fn is_suspended(&self) -> bool {
    self.current() & SUSPEND_MASK != 0
  }

  pub(crate) fn suspend_count(&self) -> u32 {
    self.current() / SUSPEND_UNIT
  }

  pub(crate) fn should_process_message(&self) -> bool {
    self.current() & SHOULD_NOT_PROCESS_MASK == 0
  }

  /// Returns `true` if this call suspended a previously unsuspended mailbox.
  pub(crate) fn suspend(&self) -> bool {
    let mut current = self.current();
    loop {
      if current == CLOSED {
        return false;
      }
      match self.update(current, current + SUSPEND_UNIT) {
        | Ok(()) => return current < SUSPEND_UNIT,
        | Err(observed) => current = observed,
      }
    }
  }

  /// Returns `true` if the mailbox is no longer suspended after this call.
  pub(crate) fn resume(&self) -> bool {
    let mut current = self.current();
    loop {
      if current == CLOSED {
        return false;
      }
      let next = if current < SUSPEND_UNIT { current } else { current - SUSPEND_UNIT };
      match self.update(current, next) {
        | Ok(()) => return next < SUSPEND_UNIT,
        | Err(observed) => current = observed,
      }
    }
  }

  /// Returns `true` if this call closed the mailbox.
  pub(crate) fn become_closed(&self) -> bool {
    let mut current = self.current();
    loop {
      if current == CLOSED {
        return false;
      }
      match self.update(current, CLOSED) {
        | Ok(()) => return true,
        | Err(observed) => current = observed,
      }
    }
  }

  /// Claims the right to run the mailbox; only one caller wins until [`Self::set_as_idle`].
  pub(crate) fn set_as_scheduled(&self) -> bool {
    let mut current = self.current();
    loop {
      if current & SHOULD_SCHEDULE_MASK != OPEN {
        return false;
      }
      match self.update(current, current | SCHEDULED) {
        | Ok(()) => return true,
        | Err(observed) => current = observed,
      }
    }
  }

  pub(crate) fn set_as_idle(&self) {
    let mut current = self.current();
    loop {
      match self.update(current, current & !SCHEDULED) {
        | Ok(()) => return,
        | Err(observed) => current = observed,
      }
    }
  }
}
