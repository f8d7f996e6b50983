use alloc::{format, string::String};
use std::thread;

use tessera_utils_rs::{
  core::{sync::ArcShared, time::MonotonicClock},
  std::{StdMonotonicClock, ThreadPoolError},
};

use super::ThreadPoolExecutor;
use crate::core::{
  config::{ActorSystemConfig, DispatcherConfig},
  dispatch::dispatcher::DispatchExecutor,
};


impl ActorSystemConfig {
  /// Configuration backed by the wall clock and a thread pool with one worker per available core.
  ///
  /// Worker threads are named `<name>-dispatcher-<index>`.
  ///
  /// # Errors
  ///
  /// Returns [`ThreadPoolError::Spawn`] when the worker threads cannot be created.
  pub fn with_std_defaults(name: impl Into<String>) -> Result<Self, ThreadPoolError> {
    let name = name.into();
    let threads = thread::available_parallelism().map_or(1, usize::from);
    let executor = ThreadPoolExecutor::new(threads, format!("{name}-dispatcher"))?;
    let executor = ArcShared::new(executor).into_dyn(|executor| executor as &dyn DispatchExecutor);
    let clock = ArcShared::new(StdMonotonicClock::new()).into_dyn(|clock| clock as &dyn MonotonicClock);
    Ok(Self::new(name, clock).with_default_dispatcher(DispatcherConfig::new(executor)))
  }
}
