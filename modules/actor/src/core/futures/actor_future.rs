use core::{
  fmt,
  future::Future,
  pin::Pin,
  task::{Context, Poll, Waker},
};

use tessera_utils_rs::core::sync::{ArcShared, SpinSyncMutex};


struct FutureState<T> {
  value:     Option<T>,
  completed: bool,
  waker:     Option<Waker>,
}

/// One-shot completion cell shared between a producer and its consumers.
///
/// The first [`complete`](Self::complete) wins. The value can be taken once, either through
/// [`try_take`](Self::try_take) or by awaiting the future.
pub struct ActorFuture<T> {
  state: ArcShared<SpinSyncMutex<FutureState<T>>>,
}

impl<T> ActorFuture<T> {
  /// Creates a pending future.
  #[must_use]
  pub fn new() -> Self {
    Self { state: ArcShared::new(SpinSyncMutex::new(FutureState { value: None, completed: false, waker: None })) }
  }

  /// Completes the future; returns `false` if it was already completed.
  pub fn complete(&self, value: T) -> bool {
    let waker = {
      let mut state = self.state.lock();
      if state.completed {
        return false;
      }
      state.completed = true;
      state.value = Some(value);
      state.waker.take()
    };
    if let Some(waker) = waker {
      waker.wake();
    }
    true
  }

  /// Returns `true` once completed, even after the value has been taken.
  #[must_use]
  pub fn is_ready(&self) -> bool {
    self.state.lock().completed
  }

  /// Takes the value if available.
  pub fn try_take(&self) -> Option<T> {
    self.state.lock().value.take()
  }

  /// Registers a waker notified on completion; wakes it immediately if already completed.
  pub fn register_waker(&self, waker: &Waker) {
    let ready = {
      let mut state = self.state.lock();
      if state.completed {
        true
      } else {
        state.waker = Some(waker.clone());
        false
      }
    };
    if ready {
      waker.wake_by_ref();
    }
  }
}

impl<T> Default for ActorFuture<T> {
  fn default() -> Self {
    Self::new()
  }
}

impl<T> Clone for ActorFuture<T> {
  fn clone(&self) -> Self {
    Self { state: self.state.clone() }
  }
}

impl<T> Future for ActorFuture<T> {
  type Output = T;

  fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
    let mut state = self.state.lock();
    match state.value.take() {
      | Some(value) => Poll::Ready(value),
      | None => {
        state.waker = Some(cx.waker().clone());
        Poll::Pending
      },
    }
  }
}

impl<T> fmt::Debug for ActorFuture<T> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("ActorFuture").field("ready", &self.is_ready()).finish()
  }
}
