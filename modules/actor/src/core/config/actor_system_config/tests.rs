use tessera_utils_rs::core::{
  sync::ArcShared,
  time::{ManualClock, MonotonicClock},
};

use super::ActorSystemConfig;
use crate::core::{
  config::DispatcherConfig,
  dead_letter::DEFAULT_DEAD_LETTER_CAPACITY,
  dispatch::mailbox::MailboxPolicy,
  supervision::{SupervisorStrategy, SupervisorStrategyKind},
};

fn clock() -> ArcShared<dyn MonotonicClock> {
  ArcShared::new(ManualClock::new()).into_dyn(|clock| clock as &dyn MonotonicClock)
}

#[test]
fn new_config_uses_defaults() {
  let config = ActorSystemConfig::new("kernel", clock());
  assert_eq!(config.name(), "kernel");
  assert!(config.dispatchers().is_empty());
  assert!(config.mailboxes().is_empty());
  assert_eq!(config.dead_letter_capacity(), DEFAULT_DEAD_LETTER_CAPACITY);
  assert!(config.message_verifier().is_none());
  assert!(!config.default_dispatcher().executor().supports_blocking());
}

#[test]
fn builder_registers_dispatchers_and_mailboxes() {
  let config = ActorSystemConfig::new("kernel", clock())
    .with_name("renamed")
    .with_dispatcher("fair", DispatcherConfig::inline().with_throughput(1))
    .with_mailbox("unbounded", MailboxPolicy::unbounded())
    .with_dead_letter_capacity(3)
    .with_event_stream_capacity(0)
    .with_guardian_strategy(SupervisorStrategy::all_for_one());

  assert_eq!(config.name(), "renamed");
  assert_eq!(config.dispatchers()[0].0, "fair");
  assert_eq!(config.dispatchers()[0].1.throughput(), 1);
  assert_eq!(config.mailboxes()[0], ("unbounded".into(), MailboxPolicy::unbounded()));
  assert_eq!(config.dead_letter_capacity(), 3);
  assert_eq!(config.event_stream_capacity(), 0);
  assert_eq!(config.guardian_strategy().kind(), SupervisorStrategyKind::AllForOne);
}
