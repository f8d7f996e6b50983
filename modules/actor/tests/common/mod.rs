#![allow(dead_code)]

use std::{
  thread,
  time::{Duration, Instant},
};

use tessera_actor_rs::{
  core::{
    config::{ActorSystemConfig, DispatcherConfig},
    dispatch::dispatcher::DispatchExecutor,
    system::ActorSystem,
  },
  std::{ActorFutureExt, ThreadPoolExecutor},
};
use tessera_utils_rs::{
  core::{sync::ArcShared, time::MonotonicClock},
  std::StdMonotonicClock,
};

/// Configuration whose default dispatcher runs on `threads` pool workers with the given throughput.
pub fn pooled_config(name: &str, threads: usize, throughput: usize) -> ActorSystemConfig {
  let executor = ArcShared::new(ThreadPoolExecutor::new(threads, name).expect("thread pool"))
    .into_dyn(|executor| executor as &dyn DispatchExecutor);
  let clock = ArcShared::new(StdMonotonicClock::new()).into_dyn(|clock| clock as &dyn MonotonicClock);
  let dispatcher = DispatcherConfig::new(executor).with_throughput(throughput);
  ActorSystemConfig::new(name, clock).with_default_dispatcher(dispatcher)
}

/// Booted system over [`pooled_config`].
pub fn pooled_system(name: &str, threads: usize, throughput: usize) -> ActorSystem {
  ActorSystem::new(&pooled_config(name, threads, throughput)).expect("system boots")
}

/// Polls `condition` for up to five seconds.
pub fn eventually(condition: impl Fn() -> bool) -> bool {
  let deadline = Instant::now() + Duration::from_secs(5);
  while Instant::now() < deadline {
    if condition() {
      return true;
    }
    thread::sleep(Duration::from_millis(1));
  }
  condition()
}

/// Terminates `system` and waits for the root guardian to stop.
pub fn shutdown(system: &ActorSystem) {
  system.terminate();
  assert_eq!(system.when_terminated().wait_timeout(Duration::from_secs(5)), Some(()));
}
