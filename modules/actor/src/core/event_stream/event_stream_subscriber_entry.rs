use tessera_utils_rs::core::sync::ArcShared;

use super::EventStreamSubscriber;

#[derive(Clone)]
pub(crate) struct EventStreamSubscriberEntry {
  id:         u64,
  subscriber: ArcShared<dyn EventStreamSubscriber>,
}

impl EventStreamSubscriberEntry {
  pub(crate) const fn new(id: u64, subscriber: ArcShared<dyn EventStreamSubscriber>) -> Self {
    Self { id, subscriber }
  }

  pub(crate) const fn id(&self) -> u64 {
    self.id
  }

  pub(crate) fn subscriber(&self) -> &dyn EventStreamSubscriber {
    &*self.subscriber
  }
}
