use alloc::{
  string::{String, ToString},
  vec::Vec,
};

use ahash::RandomState;
use hashbrown::HashMap;

use super::{DEFAULT_DISPATCHER_ID, DispatcherConfig};
use crate::core::{dispatch::dispatcher::Dispatcher, error::SpawnError};

#[cfg(test)]
mod tests;

/// Dispatchers of a system, keyed by id.
pub struct Dispatchers {
  entries: HashMap<String, Dispatcher, RandomState>,
}

impl Dispatchers {
  /// Builds the registry; `default` is registered as [`DEFAULT_DISPATCHER_ID`] unless `named`
  /// overrides that id.
  #[must_use]
  pub fn new(default: &DispatcherConfig, named: &[(String, DispatcherConfig)]) -> Self {
    let mut entries = HashMap::with_hasher(RandomState::new());
    entries.insert(DEFAULT_DISPATCHER_ID.to_string(), default.build(DEFAULT_DISPATCHER_ID));
    for (id, config) in named {
      entries.insert(id.clone(), config.build(id));
    }
    Self { entries }
  }

  /// Looks up a dispatcher; `None` selects the default.
  ///
  /// # Errors
  ///
  /// Returns [`SpawnError::UnknownDispatcher`] for unregistered ids.
  pub fn resolve(&self, id: Option<&str>) -> Result<Dispatcher, SpawnError> {
    let id = id.unwrap_or(DEFAULT_DISPATCHER_ID);
    self.entries.get(id).cloned().ok_or_else(|| SpawnError::UnknownDispatcher(id.to_string()))
  }

  /// Registered ids.
  #[must_use]
  pub fn ids(&self) -> Vec<&str> {
    self.entries.keys().map(String::as_str).collect()
  }

  /// Shuts down every executor.
  pub fn shutdown_all(&self) {
    for dispatcher in self.entries.values() {
      dispatcher.shutdown();
    }
  }
}
