use alloc::sync::Arc;
use core::{task::Waker, time::Duration};
use std::{
  task::Wake,
  thread::{self, Thread},
  time::Instant,
};

use crate::core::futures::ActorFuture;

#[cfg(test)]
mod tests;

struct ThreadWaker(Thread);

impl Wake for ThreadWaker {
  fn wake(self: Arc<Self>) {
    self.0.unpark();
  }

  fn wake_by_ref(self: &Arc<Self>) {
    self.0.unpark();
  }
}

/// Blocking accessors for [`ActorFuture`] on threads outside the actor system.
///
/// Never call these from inside an actor: the batch blocks its worker until the value arrives.
pub trait ActorFutureExt<T> {
  /// Parks the calling thread until the value is available and takes it.
  ///
  /// Returns `None` if another consumer took the value first.
  fn wait(&self) -> Option<T>;

  /// Like [`wait`](Self::wait), giving up after `timeout`.
  fn wait_timeout(&self, timeout: Duration) -> Option<T>;
}

impl<T> ActorFutureExt<T> for ActorFuture<T> {
  fn wait(&self) -> Option<T> {
    park_until(self, None)
  }

  fn wait_timeout(&self, timeout: Duration) -> Option<T> {
    park_until(self, Some(Instant::now() + timeout))
  }
}

fn park_until<T>(future: &ActorFuture<T>, deadline: Option<Instant>) -> Option<T> {
  let waker = Waker::from(Arc::new(ThreadWaker(thread::current())));
  loop {
    if let Some(value) = future.try_take() {
      return Some(value);
    }
    if future.is_ready() {
      return None;
    }
    future.register_waker(&waker);
    match deadline {
      | None => thread::park(),
      | Some(deadline) => {
        let now = Instant::now();
        if now >= deadline {
          return future.try_take();
        }
        thread::park_timeout(deadline - now);
      },
    }
  }
}
