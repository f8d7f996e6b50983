use alloc::string::{String, ToString};

use ahash::RandomState;
use hashbrown::HashMap;

use crate::core::{dispatch::mailbox::MailboxPolicy, error::SpawnError, props::MailboxSelector};


/// Mailbox policies registered by id.
pub struct Mailboxes {
  entries: HashMap<String, MailboxPolicy, RandomState>,
}

impl Mailboxes {
  /// Builds the registry.
  #[must_use]
  pub fn new(entries: &[(String, MailboxPolicy)]) -> Self {
    let mut map = HashMap::with_hasher(RandomState::new());
    for (id, policy) in entries {
      map.insert(id.clone(), *policy);
    }
    Self { entries: map }
  }

  /// Resolves the policy requested by a selector.
  ///
  /// # Errors
  ///
  /// Returns [`SpawnError::UnknownMailbox`] when the selector names an unregistered id.
  pub fn resolve(&self, selector: &MailboxSelector) -> Result<MailboxPolicy, SpawnError> {
    match selector {
      | MailboxSelector::Default => Ok(MailboxPolicy::unbounded()),
      | MailboxSelector::Policy(policy) => Ok(*policy),
      | MailboxSelector::Id(id) => {
        self.entries.get(id).copied().ok_or_else(|| SpawnError::UnknownMailbox(id.to_string()))
      },
    }
  }
}
