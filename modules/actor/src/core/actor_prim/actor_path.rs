use alloc::{string::String, vec::Vec};
use core::fmt;


/// Hierarchical location of an actor, e.g. `/user/parent/child`.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Default)]
pub struct ActorPath {
  segments: Vec<String>,
}

impl ActorPath {
  /// Path of the root guardian.
  #[must_use]
  pub const fn root() -> Self {
    Self { segments: Vec::new() }
  }

  /// Parses an absolute path such as `/user/a`.
  ///
  /// Returns `None` for relative paths and empty segments.
  #[must_use]
  pub fn parse(path: &str) -> Option<Self> {
    let rest = path.strip_prefix('/')?;
    if rest.is_empty() {
      return Some(Self::root());
    }
    let mut segments = Vec::new();
    for segment in rest.split('/') {
      if segment.is_empty() {
        return None;
      }
      segments.push(String::from(segment));
    }
    Some(Self { segments })
  }

  /// Returns the path of a child named `name`.
  #[must_use]
  pub fn child(&self, name: &str) -> Self {
    let mut segments = self.segments.clone();
    segments.push(String::from(name));
    Self { segments }
  }

  /// Returns the parent path, `None` for the root.
  #[must_use]
  pub fn parent(&self) -> Option<Self> {
    let (_, parent) = self.segments.split_last()?;
    Some(Self { segments: parent.to_vec() })
  }

  /// Last segment, empty for the root.
  #[must_use]
  pub fn name(&self) -> &str {
    self.segments.last().map_or("", String::as_str)
  }

  /// Number of segments below the root.
  #[must_use]
  pub fn depth(&self) -> usize {
    self.segments.len()
  }

  /// Returns the segments below the root.
  #[must_use]
  pub fn segments(&self) -> &[String] {
    &self.segments
  }

  /// Returns `true` for the root path.
  #[must_use]
  pub fn is_root(&self) -> bool {
    self.segments.is_empty()
  }
}

impl fmt::Display for ActorPath {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    if self.segments.is_empty() {
      return f.write_str("/");
    }
    for segment in &self.segments {
      write!(f, "/{segment}")?;
    }
    Ok(())
  }
}
