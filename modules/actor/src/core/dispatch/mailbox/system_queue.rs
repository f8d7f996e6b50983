use alloc::{boxed::Box, vec::Vec};
use core::{fmt, ptr};

use portable_atomic::{AtomicPtr, Ordering};

use crate::core::messaging::SystemMessage;


struct Node {
  message: SystemMessage,
  next:    *mut Node,
}

/// Lock-free multi-producer queue of system messages.
///
/// Producers prepend onto an intrusive stack; the single consumer detaches the whole stack at
/// once and reverses it, so every drain yields messages in enqueue order. Closing swaps in a
/// terminal node holding [`SystemMessage::NoMessage`]; afterwards every push is refused and
/// the caller keeps ownership of the message.
pub struct SystemQueue {
  head:     AtomicPtr<Node>,
  terminal: *mut Node,
}

// Nodes are only reachable through `head`; ownership moves with the successful CAS, and the
// terminal node is compared by address and freed on drop.
unsafe impl Send for SystemQueue {}
unsafe impl Sync for SystemQueue {}

impl SystemQueue {
  /// Creates an open, empty queue.
  #[must_use]
  pub fn new() -> Self {
    let terminal = Box::into_raw(Box::new(Node { message: SystemMessage::NoMessage, next: ptr::null_mut() }));
    Self { head: AtomicPtr::new(ptr::null_mut()), terminal }
  }

  /// Appends a message.
  ///
  /// # Errors
  ///
  /// Returns the message when the queue has been closed.
  pub fn push(&self, message: SystemMessage) -> Result<(), SystemMessage> {
    let node = Box::into_raw(Box::new(Node { message, next: ptr::null_mut() }));
    let mut head = self.head.load(Ordering::Acquire);
    loop {
      if head == self.terminal {
        // SAFETY: `node` was never published.
        let node = unsafe { Box::from_raw(node) };
        return Err(node.message);
      }
      // SAFETY: `node` is still exclusively owned by this call.
      unsafe { (*node).next = head };
      match self.head.compare_exchange_weak(head, node, Ordering::AcqRel, Ordering::Acquire) {
        | Ok(_) => return Ok(()),
        | Err(observed) => head = observed,
      }
    }
  }

  /// Detaches every queued message in enqueue order.
  pub fn take_all(&self) -> Vec<SystemMessage> {
    let mut head = self.head.load(Ordering::Acquire);
    loop {
      if head.is_null() || head == self.terminal {
        return Vec::new();
      }
      match self.head.compare_exchange_weak(head, ptr::null_mut(), Ordering::AcqRel, Ordering::Acquire) {
        | Ok(_) => return Self::collect(head),
        | Err(observed) => head = observed,
      }
    }
  }

  /// Closes the queue and returns the messages still queued, in enqueue order.
  pub fn close(&self) -> Vec<SystemMessage> {
    let head = self.head.swap(self.terminal, Ordering::AcqRel);
    if head == self.terminal { Vec::new() } else { Self::collect(head) }
  }

  /// Returns `true` if messages are queued.
  #[must_use]
  pub fn has_messages(&self) -> bool {
    let head = self.head.load(Ordering::Acquire);
    !head.is_null() && head != self.terminal
  }

  /// Returns `true` once [`Self::close`] has been called.
  #[must_use]
  pub fn is_closed(&self) -> bool {
    self.head.load(Ordering::Acquire) == self.terminal
  }

  fn collect(mut node: *mut Node) -> Vec<SystemMessage> {
    let mut messages = Vec::new();
    while !node.is_null() {
      // SAFETY: the detached chain is owned by the caller and every node came from `Box::into_raw`.
      let boxed = unsafe { Box::from_raw(node) };
      node = boxed.next;
      messages.push(boxed.message);
    }
    messages.reverse();
    messages
  }
}

impl Default for SystemQueue {
  fn default() -> Self {
    Self::new()
  }
}

impl Drop for SystemQueue {
  fn drop(&mut self) {
    let head = *self.head.get_mut();
    if head != self.terminal {
      drop(Self::collect(head));
    }
    // SAFETY: the terminal node is owned by the queue and never handed out.
    drop(unsafe { Box::from_raw(self.terminal) });
  }
}

impl fmt::Debug for SystemQueue {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("SystemQueue")
      .field("closed", &self.is_closed())
      .field("has_messages", &self.has_messages())
      .finish()
  }
}
