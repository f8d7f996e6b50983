/// Lifecycle transition of an actor.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LifecycleStage {
  /// The start hook completed.
  Started,
  /// A fresh instance replaced a failed one.
  Restarted,
  /// The actor terminated.
  Stopped,
}
