#![cfg(feature = "tokio-executor")]

use std::time::Duration;

use tessera_actor_rs::{
  core::{
    actor_prim::{Actor, ActorContext},
    config::{ActorSystemConfig, DispatcherConfig},
    dispatch::dispatcher::DispatchExecutor,
    error::{ActorError, AskError},
    messaging::{AnyMessage, AnyMessageView},
    props::Props,
    system::ActorSystem,
  },
  std::TokioExecutor,
};
use tessera_utils_rs::{
  core::{sync::ArcShared, time::MonotonicClock},
  std::StdMonotonicClock,
};

struct Accumulator {
  total: u64,
}

impl Actor for Accumulator {
  fn receive(&mut self, ctx: &mut ActorContext<'_>, message: AnyMessageView<'_>) -> Result<(), ActorError> {
    if let Some(value) = message.downcast_ref::<u64>() {
      self.total += value;
    } else if message.is::<()>() {
      ctx.reply(AnyMessage::new(self.total));
    }
    Ok(())
  }
}

fn tokio_system(name: &str) -> ActorSystem {
  let executor = ArcShared::new(TokioExecutor::current()).into_dyn(|executor| executor as &dyn DispatchExecutor);
  let clock = ArcShared::new(StdMonotonicClock::new()).into_dyn(|clock| clock as &dyn MonotonicClock);
  let config = ActorSystemConfig::new(name, clock).with_default_dispatcher(DispatcherConfig::new(executor));
  ActorSystem::new(&config).unwrap()
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn concurrent_tasks_feed_one_actor() {
  let system = tokio_system("tokio-accumulate");
  let accumulator = system.actor_of(&Props::from_fn(|| Accumulator { total: 0 })).unwrap();

  let producers: Vec<_> = (0..4)
    .map(|_| {
      let accumulator = accumulator.clone();
      tokio::spawn(async move {
        for value in 1..=100_u64 {
          accumulator.tell(AnyMessage::new(value));
        }
      })
    })
    .collect();
  for producer in producers {
    producer.await.unwrap();
  }

  let total = tokio::time::timeout(Duration::from_secs(5), accumulator.ask(AnyMessage::new(())).into_future())
    .await
    .unwrap()
    .unwrap();
  assert_eq!(total.downcast_ref::<u64>(), Some(&(4 * 5_050)));

  system.terminate();
  tokio::time::timeout(Duration::from_secs(5), system.when_terminated()).await.unwrap();
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn asks_after_termination_are_undeliverable() {
  let system = tokio_system("tokio-terminated");
  let accumulator = system.actor_of(&Props::from_fn(|| Accumulator { total: 0 })).unwrap();
  system.terminate();
  tokio::time::timeout(Duration::from_secs(5), system.when_terminated()).await.unwrap();

  let outcome = accumulator.ask(AnyMessage::new(())).into_future().await;

  assert_eq!(outcome.map(|_| ()), Err(AskError::Undeliverable));
}
