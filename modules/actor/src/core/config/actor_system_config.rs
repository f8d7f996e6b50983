use alloc::{string::String, vec::Vec};
use core::fmt;

use tessera_utils_rs::core::{sync::ArcShared, time::MonotonicClock};

use super::DispatcherConfig;
use crate::core::{
  dead_letter::DEFAULT_DEAD_LETTER_CAPACITY, dispatch::mailbox::MailboxPolicy, event_stream::DEFAULT_REPLAY_CAPACITY,
  messaging::MessageVerifier, supervision::SupervisorStrategy,
};

#[cfg(test)]
mod tests;

/// Id under which the default dispatcher is registered.
pub const DEFAULT_DISPATCHER_ID: &str = "default";

/// Settings an [`ActorSystem`](crate::core::system::ActorSystem) is booted with.
///
/// The core constructor runs every dispatcher inline; the `std` module adds a thread-pool
/// backed default through `ActorSystemConfig::with_std_defaults`.
#[derive(Clone)]
pub struct ActorSystemConfig {
  name:                  String,
  clock:                 ArcShared<dyn MonotonicClock>,
  default_dispatcher:    DispatcherConfig,
  dispatchers:           Vec<(String, DispatcherConfig)>,
  mailboxes:             Vec<(String, MailboxPolicy)>,
  dead_letter_capacity:  usize,
  event_stream_capacity: usize,
  verifier:              Option<ArcShared<dyn MessageVerifier>>,
  guardian_strategy:     SupervisorStrategy,
}

impl ActorSystemConfig {
  /// Creates a configuration reading time from `clock`.
  #[must_use]
  pub fn new(name: impl Into<String>, clock: ArcShared<dyn MonotonicClock>) -> Self {
    Self {
      name: name.into(),
      clock,
      default_dispatcher: DispatcherConfig::inline(),
      dispatchers: Vec::new(),
      mailboxes: Vec::new(),
      dead_letter_capacity: DEFAULT_DEAD_LETTER_CAPACITY,
      event_stream_capacity: DEFAULT_REPLAY_CAPACITY,
      verifier: None,
      guardian_strategy: SupervisorStrategy::default(),
    }
  }

  /// Renames the system.
  #[must_use]
  pub fn with_name(mut self, name: impl Into<String>) -> Self {
    self.name = name.into();
    self
  }

  /// Replaces the clock.
  #[must_use]
  pub fn with_clock(mut self, clock: ArcShared<dyn MonotonicClock>) -> Self {
    self.clock = clock;
    self
  }

  /// Replaces the default dispatcher.
  #[must_use]
  pub fn with_default_dispatcher(mut self, config: DispatcherConfig) -> Self {
    self.default_dispatcher = config;
    self
  }

  /// Registers a dispatcher selectable with
  /// [`Props::with_dispatcher_id`](crate::core::props::Props::with_dispatcher_id).
  #[must_use]
  pub fn with_dispatcher(mut self, id: impl Into<String>, config: DispatcherConfig) -> Self {
    self.dispatchers.push((id.into(), config));
    self
  }

  /// Registers a mailbox policy selectable with [`Props::with_mailbox_id`](crate::core::props::Props::with_mailbox_id).
  #[must_use]
  pub fn with_mailbox(mut self, id: impl Into<String>, policy: MailboxPolicy) -> Self {
    self.mailboxes.push((id.into(), policy));
    self
  }

  /// Number of dead letters retained for inspection.
  #[must_use]
  pub const fn with_dead_letter_capacity(mut self, capacity: usize) -> Self {
    self.dead_letter_capacity = capacity;
    self
  }

  /// Number of events replayed to late event stream subscribers.
  #[must_use]
  pub const fn with_event_stream_capacity(mut self, capacity: usize) -> Self {
    self.event_stream_capacity = capacity;
    self
  }

  /// Runs `verifier` on every `tell`.
  #[must_use]
  pub fn with_message_verifier(mut self, verifier: ArcShared<dyn MessageVerifier>) -> Self {
    self.verifier = Some(verifier);
    self
  }

  /// Strategy of the user guardian, applied to failures of top-level actors.
  #[must_use]
  pub fn with_guardian_strategy(mut self, strategy: SupervisorStrategy) -> Self {
    self.guardian_strategy = strategy;
    self
  }

  /// System name.
  #[must_use]
  pub fn name(&self) -> &str {
    &self.name
  }

  /// Clock.
  #[must_use]
  pub const fn clock(&self) -> &ArcShared<dyn MonotonicClock> {
    &self.clock
  }

  /// Default dispatcher.
  #[must_use]
  pub const fn default_dispatcher(&self) -> &DispatcherConfig {
    &self.default_dispatcher
  }

  /// Named dispatchers.
  #[must_use]
  pub fn dispatchers(&self) -> &[(String, DispatcherConfig)] {
    &self.dispatchers
  }

  /// Named mailbox policies.
  #[must_use]
  pub fn mailboxes(&self) -> &[(String, MailboxPolicy)] {
    &self.mailboxes
  }

  /// Dead-letter retention.
  #[must_use]
  pub const fn dead_letter_capacity(&self) -> usize {
    self.dead_letter_capacity
  }

  /// Event stream replay size.
  #[must_use]
  pub const fn event_stream_capacity(&self) -> usize {
    self.event_stream_capacity
  }

  /// Message verifier, if enabled.
  #[must_use]
  pub const fn message_verifier(&self) -> Option<&ArcShared<dyn MessageVerifier>> {
    self.verifier.as_ref()
  }

  /// User guardian strategy.
  #[must_use]
  pub const fn guardian_strategy(&self) -> &SupervisorStrategy {
    &self.guardian_strategy
  }
}

impl fmt::Debug for ActorSystemConfig {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("ActorSystemConfig")
      .field("name", &self.name)
      .field("default_dispatcher", &self.default_dispatcher)
      .field("dispatchers", &self.dispatchers)
      .field("mailboxes", &self.mailboxes)
      .field("dead_letter_capacity", &self.dead_letter_capacity)
      .field("event_stream_capacity", &self.event_stream_capacity)
      .field("verifier", &self.verifier.is_some())
      .field("guardian_strategy", &self.guardian_strategy)
      .finish_non_exhaustive()
  }
}
