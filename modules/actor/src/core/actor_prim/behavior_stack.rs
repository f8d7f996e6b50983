use alloc::{vec, vec::Vec};

use tessera_utils_rs::core::sync::ArcShared;

use super::MessageHandler;


/// Entry of a behavior stack.
#[derive(Clone)]
pub(crate) enum BehaviorSlot {
  /// The actor's own [`Actor::receive`](super::Actor::receive).
  Receive,
  /// A handler installed through the context.
  Handler(ArcShared<dyn MessageHandler>),
}

/// Stack of behaviors; the top handles the next message and the stack is never empty.
pub(crate) struct BehaviorStack {
  slots: Vec<BehaviorSlot>,
}

impl BehaviorStack {
  pub(crate) fn new() -> Self {
    Self { slots: vec![BehaviorSlot::Receive] }
  }

  pub(crate) fn current(&self) -> BehaviorSlot {
    self.slots.last().cloned().unwrap_or(BehaviorSlot::Receive)
  }

  /// Replaces the top entry.
  pub(crate) fn become_behavior(&mut self, slot: BehaviorSlot) {
    self.slots.pop();
    self.slots.push(slot);
  }

  /// Pushes a new top entry.
  pub(crate) fn become_stacked(&mut self, slot: BehaviorSlot) {
    self.slots.push(slot);
  }

  /// Pops the top entry, falling back to `Receive` when nothing would remain.
  pub(crate) fn unbecome_stacked(&mut self) {
    self.slots.pop();
    if self.slots.is_empty() {
      self.slots.push(BehaviorSlot::Receive);
    }
  }

  pub(crate) fn reset(&mut self) {
    self.slots.clear();
    self.slots.push(BehaviorSlot::Receive);
  }

  pub(crate) fn depth(&self) -> usize {
    self.slots.len()
  }
}
