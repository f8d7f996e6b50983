use tessera_utils_rs::core::sync::ArcShared;

use super::Dispatcher;
use crate::core::dispatch::mailbox::{Mailbox, ScheduleHints};

/// One scheduled mailbox batch, handed to an executor.
#[derive(Clone)]
pub struct DispatchShared {
  dispatcher: Dispatcher,
  mailbox:    ArcShared<Mailbox>,
}

impl DispatchShared {
  pub(super) const fn new(dispatcher: Dispatcher, mailbox: ArcShared<Mailbox>) -> Self {
    Self { dispatcher, mailbox }
  }

  /// Runs the batch on the current thread, then reschedules the mailbox if work remains.
  pub fn drive(self) {
    self.mailbox.run(self.dispatcher.throughput(), self.dispatcher.throughput_deadline());
    self.dispatcher.register_for_execution(&self.mailbox, ScheduleHints::NONE);
  }

  /// Mailbox this batch runs.
  #[must_use]
  pub const fn mailbox(&self) -> &ArcShared<Mailbox> {
    &self.mailbox
  }
}
