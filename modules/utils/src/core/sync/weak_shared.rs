use alloc::sync::Weak;
use core::fmt;

use super::ArcShared;

/// Weak counterpart of [`ArcShared`].
#[repr(transparent)]
pub struct WeakShared<T: ?Sized>(Weak<T>);

impl<T> WeakShared<T> {
  /// Creates a weak handle that never upgrades.
  #[must_use]
  pub const fn new() -> Self {
    Self(Weak::new())
  }
}

impl<T: ?Sized> WeakShared<T> {
  /// Wraps an existing [`Weak`].
  #[must_use]
  pub const fn from_weak(inner: Weak<T>) -> Self {
    Self(inner)
  }

  /// Attempts to upgrade to an [`ArcShared`].
  ///
  /// Returns `None` if the value has been dropped.
  #[must_use]
  pub fn upgrade(&self) -> Option<ArcShared<T>> {
    self.0.upgrade().map(ArcShared::from_arc)
  }

  /// Returns the number of strong handles still alive.
  #[must_use]
  pub fn strong_count(&self) -> usize {
    self.0.strong_count()
  }
}

impl<T> Default for WeakShared<T> {
  fn default() -> Self {
    Self::new()
  }
}

impl<T: ?Sized> Clone for WeakShared<T> {
  fn clone(&self) -> Self {
    Self(self.0.clone())
  }
}

impl<T: ?Sized> fmt::Debug for WeakShared<T> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("WeakShared").finish()
  }
}
