use core::fmt;

/// Identity of an actor cell.
///
/// `value` is unique for the lifetime of the system and never reused. `uid` is drawn at random
/// whenever a cell is created, so references to a terminated actor never match a new actor that
/// later takes the same path.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Pid {
  value: u64,
  uid:   u64,
}

impl Pid {
  /// Pid used by references that have no actor behind them.
  pub const NONE: Pid = Pid::new(0, 0);

  /// Creates a pid.
  #[must_use]
  pub const fn new(value: u64, uid: u64) -> Self {
    Self { value, uid }
  }

  /// System-unique cell number.
  #[must_use]
  pub const fn value(&self) -> u64 {
    self.value
  }

  /// Random incarnation number.
  #[must_use]
  pub const fn uid(&self) -> u64 {
    self.uid
  }
}

impl fmt::Display for Pid {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}#{:x}", self.value, self.uid)
  }
}
