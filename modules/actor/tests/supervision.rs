mod common;

use std::{
  fmt,
  sync::{
    Arc, Mutex,
    atomic::{AtomicUsize, Ordering},
  },
  time::Duration,
};

use tessera_actor_rs::{
  core::{
    actor_prim::{Actor, ActorContext, ActorRef},
    dead_letter::DeadLetterReason,
    error::ActorError,
    event_stream::{EventStreamEvent, EventStreamSubscriber, EventStreamSubscription},
    lifecycle::LifecycleStage,
    messaging::{AnyMessage, AnyMessageView},
    props::Props,
    supervision::{SupervisorDirective, SupervisorStrategy},
    system::ActorSystem,
  },
  std::ActorRefExt,
};
use tessera_utils_rs::core::sync::ArcShared;

const REPLY_TIMEOUT: Duration = Duration::from_secs(5);

#[derive(Default)]
struct Stages {
  seen: Mutex<Vec<(String, LifecycleStage)>>,
}

impl Stages {
  fn count(&self, path: &str, stage: LifecycleStage) -> usize {
    self.seen.lock().unwrap().iter().filter(|(seen, kind)| seen == path && *kind == stage).count()
  }
}

impl EventStreamSubscriber for Stages {
  fn on_event(&self, event: &EventStreamEvent) {
    if let EventStreamEvent::Lifecycle(event) = event {
      self.seen.lock().unwrap().push((event.path().to_string(), event.stage()));
    }
  }
}

fn observe(system: &ActorSystem) -> (ArcShared<Stages>, EventStreamSubscription) {
  let stages = ArcShared::new(Stages::default());
  let subscription = system.subscribe(&stages.clone().into_dyn(|stages| stages as &dyn EventStreamSubscriber));
  (stages, subscription)
}

struct Increment;
struct Boom;
struct Report;

struct Counter {
  count:      u32,
  instances:  Arc<AtomicUsize>,
  increments: Arc<AtomicUsize>,
}

impl Actor for Counter {
  fn on_start(&mut self, _ctx: &mut ActorContext<'_>) -> Result<(), ActorError> {
    self.instances.fetch_add(1, Ordering::SeqCst);
    Ok(())
  }

  fn receive(&mut self, ctx: &mut ActorContext<'_>, message: AnyMessageView<'_>) -> Result<(), ActorError> {
    if message.is::<Increment>() {
      self.count += 1;
      self.increments.fetch_add(1, Ordering::SeqCst);
    } else if message.is::<Boom>() {
      return Err(ActorError::recoverable("boom"));
    } else if message.is::<Report>() {
      ctx.reply(AnyMessage::new(self.count));
    }
    Ok(())
  }
}

#[test]
fn restart_resets_state_and_keeps_queued_messages() {
  let system = common::pooled_system("restart-state", 2, 2);
  let (stages, _subscription) = observe(&system);
  let instances = Arc::new(AtomicUsize::new(0));
  let increments = Arc::new(AtomicUsize::new(0));
  let props = {
    let instances = instances.clone();
    let increments = increments.clone();
    Props::from_fn(move || Counter { count: 0, instances: instances.clone(), increments: increments.clone() })
  };
  let counter = system.actor_of_named(&props, "counter").unwrap();

  for _ in 0..3 {
    counter.tell(AnyMessage::new(Increment));
  }
  counter.tell(AnyMessage::new(Boom));
  for _ in 0..2 {
    counter.tell(AnyMessage::new(Increment));
  }
  let reply = counter.ask_timeout(AnyMessage::new(Report), REPLY_TIMEOUT).unwrap();

  assert_eq!(reply.downcast_ref::<u32>(), Some(&2));
  assert_eq!(increments.load(Ordering::SeqCst), 5);
  assert_eq!(instances.load(Ordering::SeqCst), 2);
  assert_eq!(stages.count("/user/counter", LifecycleStage::Restarted), 1);
  common::shutdown(&system);
}

#[derive(Debug)]
struct DivideByZero;

impl fmt::Display for DivideByZero {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str("attempt to divide by zero")
  }
}

struct Divide(i64, i64);
struct Parse(&'static str);
struct Echo(&'static str);

struct Calculator;

impl Actor for Calculator {
  fn receive(&mut self, ctx: &mut ActorContext<'_>, message: AnyMessageView<'_>) -> Result<(), ActorError> {
    if let Some(Divide(dividend, divisor)) = message.downcast_ref::<Divide>() {
      let quotient = dividend.checked_div(*divisor).ok_or_else(|| ActorError::from_cause(DivideByZero))?;
      ctx.reply(AnyMessage::new(quotient));
    } else if let Some(Parse(text)) = message.downcast_ref::<Parse>() {
      let value = text.parse::<i64>().map_err(ActorError::from_cause)?;
      ctx.reply(AnyMessage::new(value));
    } else if let Some(Echo(text)) = message.downcast_ref::<Echo>() {
      ctx.reply(AnyMessage::new(*text));
    }
    Ok(())
  }
}

#[test]
fn divide_by_zero_restarts_and_other_failures_stop() {
  let strategy = SupervisorStrategy::one_for_one().with_decider(|error: &ActorError| {
    if error.is::<DivideByZero>() { SupervisorDirective::Restart } else { SupervisorDirective::Stop }
  });
  let system = ActorSystem::new(&common::pooled_config("calculator", 2, 5).with_guardian_strategy(strategy)).unwrap();
  let (stages, _subscription) = observe(&system);
  let calculator = system.actor_of_named(&Props::from_fn(|| Calculator), "calculator").unwrap();

  let quotient = calculator.ask_timeout(AnyMessage::new(Divide(10, 2)), REPLY_TIMEOUT).unwrap();
  assert_eq!(quotient.downcast_ref::<i64>(), Some(&5));

  calculator.tell(AnyMessage::new(Divide(1, 0)));
  let echo = calculator.ask_timeout(AnyMessage::new(Echo("still here")), REPLY_TIMEOUT).unwrap();
  assert_eq!(echo.downcast_ref::<&str>(), Some(&"still here"));
  assert_eq!(stages.count("/user/calculator", LifecycleStage::Restarted), 1);

  calculator.tell(AnyMessage::new(Parse("not a number")));
  assert!(common::eventually(|| stages.count("/user/calculator", LifecycleStage::Stopped) == 1));
  assert_eq!(stages.count("/user/calculator", LifecycleStage::Restarted), 1);

  calculator.tell(AnyMessage::new(Echo("anyone?")));
  let dead = system.dead_letters().into_iter().find(|entry| entry.message().is::<Echo>()).expect("dead letter");
  assert_eq!(dead.recipient(), Some(calculator.pid()));
  assert!(matches!(dead.reason(), DeadLetterReason::RecipientUnavailable | DeadLetterReason::MailboxClosed));
  common::shutdown(&system);
}

struct Fail;

/// Child whose constructions are counted by name.
struct Sibling {
  name:   &'static str,
  starts: Arc<Mutex<Vec<&'static str>>>,
}

impl Actor for Sibling {
  fn on_start(&mut self, _ctx: &mut ActorContext<'_>) -> Result<(), ActorError> {
    self.starts.lock().unwrap().push(self.name);
    Ok(())
  }

  fn receive(&mut self, _ctx: &mut ActorContext<'_>, message: AnyMessageView<'_>) -> Result<(), ActorError> {
    if message.is::<Fail>() {
      return Err(ActorError::recoverable("sibling failed"));
    }
    Ok(())
  }
}

struct Parent {
  starts:   Arc<Mutex<Vec<&'static str>>>,
  children: Vec<ActorRef>,
}

impl Actor for Parent {
  fn on_start(&mut self, ctx: &mut ActorContext<'_>) -> Result<(), ActorError> {
    for name in ["left", "middle", "right"] {
      let starts = self.starts.clone();
      let props = Props::from_fn(move || Sibling { name, starts: starts.clone() });
      self.children.push(ctx.actor_of_named(&props, name).map_err(ActorError::from_cause)?);
    }
    Ok(())
  }

  fn receive(&mut self, ctx: &mut ActorContext<'_>, message: AnyMessageView<'_>) -> Result<(), ActorError> {
    if message.is::<Fail>() {
      if let Some(middle) = self.children.get(1) {
        middle.tell(AnyMessage::new(Fail));
      }
    } else if message.is::<Report>() {
      ctx.reply(AnyMessage::new(ctx.children().len()));
    }
    Ok(())
  }
}

#[test]
fn all_for_one_restarts_every_sibling_on_the_pool() {
  let system = common::pooled_system("all-for-one", 3, 5);
  let starts = Arc::new(Mutex::new(Vec::new()));
  let props = {
    let starts = starts.clone();
    Props::from_fn(move || Parent { starts: starts.clone(), children: Vec::new() })
      .with_supervisor_strategy(SupervisorStrategy::all_for_one())
  };
  let parent = system.actor_of_named(&props, "parent").unwrap();

  assert!(common::eventually(|| starts.lock().unwrap().len() == 3));
  parent.tell(AnyMessage::new(Fail));

  assert!(common::eventually(|| starts.lock().unwrap().len() == 6));
  let mut restarted = starts.lock().unwrap()[3..].to_vec();
  restarted.sort_unstable();
  assert_eq!(restarted, ["left", "middle", "right"]);
  let children = parent.ask_timeout(AnyMessage::new(Report), REPLY_TIMEOUT).unwrap();
  assert_eq!(children.downcast_ref::<usize>(), Some(&3));
  common::shutdown(&system);
}

/// Parent whose supervisor strategy panics while deciding.
struct CarelessParent {
  starts: Arc<Mutex<Vec<&'static str>>>,
  worker: Option<ActorRef>,
}

impl Actor for CarelessParent {
  fn on_start(&mut self, ctx: &mut ActorContext<'_>) -> Result<(), ActorError> {
    let starts = self.starts.clone();
    let props = Props::from_fn(move || Sibling { name: "worker", starts: starts.clone() });
    self.worker = Some(ctx.actor_of_named(&props, "worker").map_err(ActorError::from_cause)?);
    Ok(())
  }

  fn receive(&mut self, ctx: &mut ActorContext<'_>, message: AnyMessageView<'_>) -> Result<(), ActorError> {
    if message.is::<Fail>() {
      if let Some(worker) = &self.worker {
        worker.tell(AnyMessage::new(Fail));
      }
    } else if message.is::<Report>() {
      ctx.reply(AnyMessage::new(ctx.children().len()));
    }
    Ok(())
  }
}

#[test]
fn a_panicking_decider_fails_the_supervisor_instead_of_wedging_it() {
  let system = common::pooled_system("careless-decider", 2, 5);
  let (stages, _subscription) = observe(&system);
  let starts = Arc::new(Mutex::new(Vec::new()));
  let props = {
    let starts = starts.clone();
    Props::from_fn(move || CarelessParent { starts: starts.clone(), worker: None }).with_supervisor_strategy(
      SupervisorStrategy::one_for_one().with_decider(|_: &ActorError| -> SupervisorDirective { panic!("decider bug") }),
    )
  };
  let parent = system.actor_of_named(&props, "parent").unwrap();
  assert!(common::eventually(|| starts.lock().unwrap().len() == 1));

  parent.tell(AnyMessage::new(Fail));

  assert!(common::eventually(|| stages.count("/user/parent", LifecycleStage::Restarted) == 1));
  let children = parent.ask_timeout(AnyMessage::new(Report), REPLY_TIMEOUT).unwrap();
  assert_eq!(children.downcast_ref::<usize>(), Some(&1));
  assert!(common::eventually(|| stages.count("/user/parent/worker", LifecycleStage::Stopped) == 1));
  assert!(common::eventually(|| starts.lock().unwrap().len() == 2));
  common::shutdown(&system);
}
