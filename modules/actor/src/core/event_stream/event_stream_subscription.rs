use tessera_utils_rs::core::sync::ArcShared;

use super::EventStream;

/// Registration handle; dropping it unsubscribes.
pub struct EventStreamSubscription {
  stream: ArcShared<EventStream>,
  id:     u64,
}

impl EventStreamSubscription {
  pub(crate) const fn new(stream: ArcShared<EventStream>, id: u64) -> Self {
    Self { stream, id }
  }

  /// Subscription id.
  #[must_use]
  pub const fn id(&self) -> u64 {
    self.id
  }
}

impl Drop for EventStreamSubscription {
  fn drop(&mut self) {
    self.stream.unsubscribe(self.id);
  }
}
