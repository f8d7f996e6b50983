use alloc::{string::String, vec};

use super::Dispatchers;
use crate::core::{
  config::{DEFAULT_DISPATCHER_ID, DispatcherConfig},
  error::SpawnError,
};

#[test]
fn resolves_default_and_named_dispatchers() {
  let named = vec![(String::from("fair"), DispatcherConfig::inline().with_throughput(1))];
  let dispatchers = Dispatchers::new(&DispatcherConfig::inline(), &named);

  let default = dispatchers.resolve(None).unwrap();
  assert_eq!(default.id(), DEFAULT_DISPATCHER_ID);
  let fair = dispatchers.resolve(Some("fair")).unwrap();
  assert_eq!(fair.id(), "fair");
  assert_eq!(fair.throughput(), 1);

  let mut ids = dispatchers.ids();
  ids.sort_unstable();
  assert_eq!(ids, ["default", "fair"]);
}

#[test]
fn unknown_ids_fail() {
  let dispatchers = Dispatchers::new(&DispatcherConfig::inline(), &[]);
  assert_eq!(dispatchers.resolve(Some("missing")).unwrap_err(), SpawnError::UnknownDispatcher("missing".into()));
}
