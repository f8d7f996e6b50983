/// Outcome of a supervision decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SupervisorDirective {
  /// Keep the actor state and continue with the next message.
  Resume,
  /// Replace the actor instance with a fresh one built from the same props.
  Restart,
  /// Terminate the actor.
  Stop,
  /// Fail the supervisor itself, handing the decision to its own parent.
  Escalate,
}
