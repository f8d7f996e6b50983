use alloc::sync::Arc;
use core::{fmt, ops::Deref, ptr};

use super::WeakShared;


/// Shared handle backed by [`alloc::sync::Arc`].
///
/// Equality is identity: two handles are equal when they point at the same allocation.
#[repr(transparent)]
pub struct ArcShared<T: ?Sized>(Arc<T>);

impl<T> ArcShared<T> {
  /// Creates a new `ArcShared` by wrapping the provided value.
  pub fn new(value: T) -> Self {
    Self(Arc::new(value))
  }

  /// Creates a handle whose value can hold a weak reference to itself.
  pub fn new_cyclic<F>(build: F) -> Self
  where
    F: FnOnce(&WeakShared<T>) -> T, {
    Self(Arc::new_cyclic(|weak| build(&WeakShared::from_weak(weak.clone()))))
  }
}

impl<T: ?Sized> ArcShared<T> {
  /// Wraps an existing `Arc`.
  #[must_use]
  pub const fn from_arc(inner: Arc<T>) -> Self {
    Self(inner)
  }

  /// Creates a weak handle to the same allocation.
  #[must_use]
  pub fn downgrade(&self) -> WeakShared<T> {
    WeakShared::from_weak(Arc::downgrade(&self.0))
  }

  /// Returns `true` when both handles point at the same allocation.
  #[must_use]
  pub fn ptr_eq(&self, other: &Self) -> bool {
    Arc::ptr_eq(&self.0, &other.0)
  }

  /// Returns the number of strong handles to the allocation.
  #[must_use]
  pub fn strong_count(&self) -> usize {
    Arc::strong_count(&self.0)
  }

  /// Consumes the shared handle and returns the raw pointer.
  #[must_use]
  pub fn into_raw(self) -> *const T {
    Arc::into_raw(self.0)
  }

  /// Reconstructs the shared handle from a raw pointer.
  ///
  /// # Safety
  ///
  /// The pointer must originate from [`ArcShared::into_raw`] and must not be reused afterwards.
  pub unsafe fn from_raw(ptr: *const T) -> Self {
    Self(unsafe { Arc::from_raw(ptr) })
  }

  /// Converts the shared handle into a trait object handle.
  ///
  /// `cast` must return the reference it receives, only widened to `U`
  /// (for example `|actor| actor as &dyn Actor`).
  pub fn into_dyn<U: ?Sized, F>(self, cast: F) -> ArcShared<U>
  where
    F: FnOnce(&T) -> &U, {
    let raw = self.into_raw();
    // SAFETY: `raw` comes from `into_raw` and `cast` only changes the pointer metadata, so the
    // resulting pointer still addresses the same `Arc` allocation.
    unsafe {
      let widened = ptr::from_ref(cast(&*raw));
      ArcShared::from_raw(widened)
    }
  }
}

impl<T: ?Sized> Deref for ArcShared<T> {
  type Target = T;

  fn deref(&self) -> &Self::Target {
    &self.0
  }
}

impl<T: ?Sized> Clone for ArcShared<T> {
  fn clone(&self) -> Self {
    Self(self.0.clone())
  }
}

impl<T: ?Sized> PartialEq for ArcShared<T> {
  fn eq(&self, other: &Self) -> bool {
    self.ptr_eq(other)
  }
}

impl<T: ?Sized> Eq for ArcShared<T> {}

impl<T: ?Sized> fmt::Debug for ArcShared<T> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("ArcShared").field("strong", &Arc::strong_count(&self.0)).finish()
  }
}
