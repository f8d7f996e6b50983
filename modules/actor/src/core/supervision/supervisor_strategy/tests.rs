use core::time::Duration;

use super::SupervisorStrategy;
use crate::core::{
  error::ActorError,
  supervision::{ChildRestartStats, SupervisorDirective, SupervisorStrategyKind},
};

#[derive(Debug)]
struct DivideByZero;

impl core::fmt::Display for DivideByZero {
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    f.write_str("divide by zero")
  }
}

#[test]
fn default_decider_restarts_recoverable_and_stops_fatal() {
  let strategy = SupervisorStrategy::default();
  assert_eq!(strategy.kind(), SupervisorStrategyKind::OneForOne);
  assert_eq!(strategy.decide(&ActorError::recoverable("boom")), SupervisorDirective::Restart);
  assert_eq!(strategy.decide(&ActorError::fatal("boom")), SupervisorDirective::Stop);
}

#[test]
fn custom_decider_matches_on_cause_type() {
  let strategy = SupervisorStrategy::all_for_one().with_decider(|error: &ActorError| {
    if error.is::<DivideByZero>() { SupervisorDirective::Restart } else { SupervisorDirective::Escalate }
  });

  assert_eq!(strategy.kind(), SupervisorStrategyKind::AllForOne);
  assert_eq!(strategy.decide(&ActorError::from_cause(DivideByZero)), SupervisorDirective::Restart);
  assert_eq!(strategy.decide(&ActorError::recoverable("other")), SupervisorDirective::Escalate);
}

#[test]
fn stopping_strategy_stops_everything() {
  let strategy = SupervisorStrategy::stopping();
  assert_eq!(strategy.decide(&ActorError::recoverable("boom")), SupervisorDirective::Stop);
}

#[test]
fn budget_is_charged_through_the_strategy() {
  let strategy = SupervisorStrategy::one_for_one().with_max_restarts(1).with_within(Duration::from_secs(10));
  let mut stats = ChildRestartStats::new();
  assert!(strategy.request_restart_permission(&mut stats, Duration::ZERO));
  assert!(!strategy.request_restart_permission(&mut stats, Duration::from_secs(1)));
}
