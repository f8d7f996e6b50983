use alloc::{boxed::Box, string::String};
use core::fmt;

use tessera_utils_rs::core::sync::ArcShared;

use super::{ActorFactory, MailboxSelector};
use crate::core::{
  actor_prim::Actor, dispatch::mailbox::MailboxPolicy, error::ActorError, supervision::SupervisorStrategy,
};


/// Everything needed to create, and later recreate, an actor.
///
/// Props are immutable once built; a restart rebuilds the actor from the same factory.
#[derive(Clone)]
pub struct Props {
  factory:             ArcShared<dyn ActorFactory>,
  dispatcher_id:       Option<String>,
  mailbox:             MailboxSelector,
  supervisor_strategy: SupervisorStrategy,
  stash_capacity:      Option<usize>,
}

impl Props {
  /// Creates props from an arbitrary factory.
  #[must_use]
  pub fn from_factory(factory: ArcShared<dyn ActorFactory>) -> Self {
    Self {
      factory,
      dispatcher_id: None,
      mailbox: MailboxSelector::Default,
      supervisor_strategy: SupervisorStrategy::default(),
      stash_capacity: None,
    }
  }

  /// Creates props from an infallible constructor.
  #[must_use]
  pub fn from_fn<A, F>(constructor: F) -> Self
  where
    A: Actor,
    F: Fn() -> A + Send + Sync + 'static, {
    Self::try_from_fn(move || Ok(constructor()))
  }

  /// Creates props from a constructor that may fail.
  #[must_use]
  pub fn try_from_fn<A, F>(constructor: F) -> Self
  where
    A: Actor,
    F: Fn() -> Result<A, ActorError> + Send + Sync + 'static, {
    let factory = move || -> Result<Box<dyn Actor>, ActorError> {
      let actor: Box<dyn Actor> = Box::new(constructor()?);
      Ok(actor)
    };
    Self::from_factory(ArcShared::new(factory).into_dyn(|factory| factory as &dyn ActorFactory))
  }

  /// Selects a dispatcher registered in the system configuration.
  #[must_use]
  pub fn with_dispatcher_id(mut self, id: impl Into<String>) -> Self {
    self.dispatcher_id = Some(id.into());
    self
  }

  /// Uses an explicit mailbox policy.
  #[must_use]
  pub fn with_mailbox_policy(mut self, policy: MailboxPolicy) -> Self {
    self.mailbox = MailboxSelector::Policy(policy);
    self
  }

  /// Uses a mailbox policy registered in the system configuration.
  #[must_use]
  pub fn with_mailbox_id(mut self, id: impl Into<String>) -> Self {
    self.mailbox = MailboxSelector::Id(id.into());
    self
  }

  /// Strategy applied to failures of the actor's children.
  #[must_use]
  pub fn with_supervisor_strategy(mut self, strategy: SupervisorStrategy) -> Self {
    self.supervisor_strategy = strategy;
    self
  }

  /// Limits the number of stashed messages.
  #[must_use]
  pub const fn with_stash_capacity(mut self, capacity: usize) -> Self {
    self.stash_capacity = Some(capacity);
    self
  }

  /// Instance factory.
  #[must_use]
  pub fn factory(&self) -> &ArcShared<dyn ActorFactory> {
    &self.factory
  }

  /// Requested dispatcher id; `None` selects the default dispatcher.
  #[must_use]
  pub fn dispatcher_id(&self) -> Option<&str> {
    self.dispatcher_id.as_deref()
  }

  /// Requested mailbox.
  #[must_use]
  pub const fn mailbox(&self) -> &MailboxSelector {
    &self.mailbox
  }

  /// Strategy supervising the actor's children.
  #[must_use]
  pub const fn supervisor_strategy(&self) -> &SupervisorStrategy {
    &self.supervisor_strategy
  }

  /// Stash capacity; `None` when unlimited.
  #[must_use]
  pub const fn stash_capacity(&self) -> Option<usize> {
    self.stash_capacity
  }
}

impl fmt::Debug for Props {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("Props")
      .field("dispatcher_id", &self.dispatcher_id)
      .field("mailbox", &self.mailbox)
      .field("supervisor_strategy", &self.supervisor_strategy)
      .field("stash_capacity", &self.stash_capacity)
      .finish_non_exhaustive()
  }
}
