/// Scope a directive applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SupervisorStrategyKind {
  /// Only the failing child.
  #[default]
  OneForOne,
  /// The failing child and all of its siblings.
  AllForOne,
}
