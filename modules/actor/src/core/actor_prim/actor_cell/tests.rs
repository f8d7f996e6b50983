use alloc::{format, string::String, vec::Vec};
use core::fmt::Display;

use tessera_utils_rs::core::{
  sync::{ArcShared, SpinSyncMutex},
  time::{ManualClock, MonotonicClock},
};

use super::ActorCell;
use crate::core::{
  actor_prim::{Actor, ActorContext, ActorRef, Pid},
  config::ActorSystemConfig,
  error::{ActorError, ActorPanic},
  event_stream::{EventStreamEvent, EventStreamSubscriber, EventStreamSubscription},
  lifecycle::{LifecycleEvent, LifecycleStage},
  messaging::{AnyMessage, AnyMessageView},
  props::Props,
  supervision::{SupervisorDirective, SupervisorStrategy},
  system::ActorSystem,
};

type Journal = ArcShared<SpinSyncMutex<Vec<String>>>;

struct Fail;
struct FailAfter(u32);
struct Panic;
struct Watch(ActorRef);

struct Tracker {
  name:     &'static str,
  children: &'static [&'static str],
  journal:  Journal,
  total:    u32,
}

impl Tracker {
  fn props(name: &'static str, journal: &Journal) -> Props {
    Self::parent_props(name, &[], journal)
  }

  fn parent_props(name: &'static str, children: &'static [&'static str], journal: &Journal) -> Props {
    let journal = journal.clone();
    Props::from_fn(move || Tracker { name, children, journal: journal.clone(), total: 0 })
  }

  fn record(&self, entry: impl Display) {
    self.journal.lock().push(format!("{}: {entry}", self.name));
  }
}

impl Actor for Tracker {
  fn on_start(&mut self, ctx: &mut ActorContext<'_>) -> Result<(), ActorError> {
    self.record("start");
    for &child in self.children {
      ctx.actor_of_named(&Tracker::props(child, &self.journal), child).map_err(ActorError::from_cause)?;
    }
    Ok(())
  }

  fn receive(&mut self, ctx: &mut ActorContext<'_>, message: AnyMessageView<'_>) -> Result<(), ActorError> {
    if let Some(value) = message.downcast_ref::<u32>() {
      self.total += value;
      self.record(format_args!("got {value} total {}", self.total));
    } else if message.is::<Fail>() {
      self.record("fail");
      return Err(ActorError::recoverable("boom"));
    } else if let Some(FailAfter(value)) = message.downcast_ref::<FailAfter>() {
      ctx.self_ref().tell(AnyMessage::new(*value));
      self.record("fail");
      return Err(ActorError::recoverable("boom"));
    } else if message.is::<Panic>() {
      panic!("kaboom");
    } else if let Some(Watch(target)) = message.downcast_ref::<Watch>() {
      ctx.watch(target);
    } else {
      self.unhandled(ctx, message);
    }
    Ok(())
  }

  fn on_stop(&mut self, _ctx: &mut ActorContext<'_>) -> Result<(), ActorError> {
    self.record("stop");
    Ok(())
  }

  fn on_pre_restart(
    &mut self,
    ctx: &mut ActorContext<'_>,
    _reason: &ActorError,
    _message: Option<&AnyMessage>,
  ) -> Result<(), ActorError> {
    self.record("pre_restart");
    ctx.stop_children();
    Ok(())
  }

  fn on_post_restart(&mut self, _ctx: &mut ActorContext<'_>, _reason: &ActorError) -> Result<(), ActorError> {
    self.record("post_restart");
    Ok(())
  }

  fn on_terminated(&mut self, _ctx: &mut ActorContext<'_>, _terminated: Pid) -> Result<(), ActorError> {
    self.record("terminated");
    Ok(())
  }
}

struct LifecycleLog {
  events: SpinSyncMutex<Vec<LifecycleEvent>>,
}

impl EventStreamSubscriber for LifecycleLog {
  fn on_event(&self, event: &EventStreamEvent) {
    if let EventStreamEvent::Lifecycle(event) = event {
      self.events.lock().push(event.clone());
    }
  }
}

impl LifecycleLog {
  fn new() -> Self {
    Self { events: SpinSyncMutex::new(Vec::new()) }
  }

  fn stages_of(&self, pid: Pid) -> Vec<LifecycleStage> {
    self.events.lock().iter().filter(|event| event.pid() == pid).map(LifecycleEvent::stage).collect()
  }
}

fn config() -> ActorSystemConfig {
  let clock = ArcShared::new(ManualClock::new()).into_dyn(|clock| clock as &dyn MonotonicClock);
  ActorSystemConfig::new("cell-tests", clock)
}

fn journal() -> Journal {
  ArcShared::new(SpinSyncMutex::new(Vec::new()))
}

fn entries(journal: &Journal) -> Vec<String> {
  journal.lock().clone()
}

fn observe(system: &ActorSystem) -> (ArcShared<LifecycleLog>, EventStreamSubscription) {
  let log = ArcShared::new(LifecycleLog::new());
  let subscriber = log.clone().into_dyn(|log| log as &dyn EventStreamSubscriber);
  let subscription = system.subscribe(&subscriber);
  (log, subscription)
}

fn cell_of(system: &ActorSystem, actor: &ActorRef) -> ArcShared<ActorCell> {
  system.state().cell(actor.pid()).expect("live cell")
}

fn position(entries: &[String], entry: &str) -> usize {
  entries.iter().position(|candidate| candidate == entry).unwrap_or_else(|| panic!("missing `{entry}` in {entries:?}"))
}

#[test]
fn messages_are_processed_in_order_after_start() {
  let system = ActorSystem::new(&config()).unwrap();
  let journal = journal();
  let tracker = system.actor_of_named(&Tracker::props("p", &journal), "p").unwrap();

  for value in 1..=3_u32 {
    tracker.tell(AnyMessage::new(value));
  }

  assert_eq!(entries(&journal), ["p: start", "p: got 1 total 1", "p: got 2 total 3", "p: got 3 total 6"]);
  assert_eq!(tracker.path().to_string(), "/user/p");
}

#[test]
fn failure_restarts_a_fresh_instance_and_keeps_queued_messages() {
  let system = ActorSystem::new(&config()).unwrap();
  let (log, _subscription) = observe(&system);
  let journal = journal();
  let tracker = system.actor_of_named(&Tracker::props("p", &journal), "p").unwrap();

  tracker.tell(AnyMessage::new(5_u32));
  tracker.tell(AnyMessage::new(FailAfter(2)));

  assert_eq!(entries(&journal), [
    "p: start",
    "p: got 5 total 5",
    "p: fail",
    "p: pre_restart",
    "p: post_restart",
    "p: got 2 total 2",
  ]);
  assert_eq!(log.stages_of(tracker.pid()), [LifecycleStage::Started, LifecycleStage::Restarted]);
  let cell = cell_of(&system, &tracker);
  assert!(!cell.mailbox().is_suspended());
  assert_eq!(cell.pid(), tracker.pid());
}

#[test]
fn panics_are_supervised_like_errors() {
  let system = ActorSystem::new(&config()).unwrap();
  let (log, _subscription) = observe(&system);
  let journal = journal();
  let tracker = system.actor_of(&Tracker::props("p", &journal)).unwrap();

  tracker.tell(AnyMessage::new(Panic));
  tracker.tell(AnyMessage::new(1_u32));

  let events = log.events.lock().clone();
  let restarted = events
    .iter()
    .find(|event| event.pid() == tracker.pid() && event.stage() == LifecycleStage::Restarted)
    .expect("restart event");
  let cause = restarted.reason().and_then(|reason| reason.cause::<ActorPanic>()).expect("panic cause");
  assert_eq!(cause.message(), "kaboom");
  assert_eq!(entries(&journal).last().map(String::as_str), Some("p: got 1 total 1"));
}

#[test]
fn resume_keeps_the_failed_instance() {
  let strategy = SupervisorStrategy::one_for_one().with_decider(|_: &ActorError| SupervisorDirective::Resume);
  let system = ActorSystem::new(&config().with_guardian_strategy(strategy)).unwrap();
  let journal = journal();
  let tracker = system.actor_of_named(&Tracker::props("p", &journal), "p").unwrap();

  tracker.tell(AnyMessage::new(1_u32));
  tracker.tell(AnyMessage::new(Fail));
  tracker.tell(AnyMessage::new(2_u32));

  assert_eq!(entries(&journal), ["p: start", "p: got 1 total 1", "p: fail", "p: got 2 total 3"]);
  assert!(!cell_of(&system, &tracker).mailbox().is_suspended());
}

#[test]
fn stop_directive_routes_later_messages_to_dead_letters() {
  let system = ActorSystem::new(&config().with_guardian_strategy(SupervisorStrategy::stopping())).unwrap();
  let journal = journal();
  let tracker = system.actor_of_named(&Tracker::props("p", &journal), "p").unwrap();

  tracker.tell(AnyMessage::new(Fail));
  tracker.tell(AnyMessage::new(7_u32));

  assert_eq!(entries(&journal), ["p: start", "p: fail", "p: stop"]);
  assert!(system.actor_ref(tracker.pid()).is_none());
  assert!(system.dead_letters().iter().any(|entry| entry.message().downcast_ref::<u32>() == Some(&7)));
  assert!(system.actor_of_named(&Tracker::props("p", &journal), "p").is_ok());
}

#[test]
fn initialization_failure_stops_the_actor() {
  let system = ActorSystem::new(&config()).unwrap();
  let (log, _subscription) = observe(&system);
  let props = Props::try_from_fn(|| -> Result<Tracker, ActorError> { Err(ActorError::recoverable("no constructor")) });

  let actor = system.actor_of(&props).unwrap();

  assert!(system.actor_ref(actor.pid()).is_none());
  assert_eq!(log.stages_of(actor.pid()), [LifecycleStage::Stopped]);
  assert!(!system.is_terminated());
}

#[test]
fn exhausted_restart_budget_escalates_and_terminates_the_system() {
  let strategy = SupervisorStrategy::one_for_one().with_max_restarts(1);
  let system = ActorSystem::new(&config().with_guardian_strategy(strategy)).unwrap();
  let journal = journal();
  let tracker = system.actor_of_named(&Tracker::props("p", &journal), "p").unwrap();

  tracker.tell(AnyMessage::new(Fail));
  assert!(!system.is_terminated());
  tracker.tell(AnyMessage::new(Fail));

  assert!(system.is_terminated());
  assert!(system.when_terminated().is_ready());
  assert_eq!(system.state().actor_count(), 0);
  assert_eq!(entries(&journal).last().map(String::as_str), Some("p: stop"));
}

#[test]
fn all_for_one_restarts_every_sibling() {
  let system = ActorSystem::new(&config()).unwrap();
  let journal = journal();
  let props =
    Tracker::parent_props("sup", &["a", "b"], &journal).with_supervisor_strategy(SupervisorStrategy::all_for_one());
  let supervisor = system.actor_of_named(&props, "sup").unwrap();
  let supervisor_cell = cell_of(&system, &supervisor);
  let a = supervisor_cell.child("a").unwrap();
  let b = supervisor_cell.child("b").unwrap();

  a.tell(AnyMessage::new(Fail));
  b.tell(AnyMessage::new(4_u32));

  let entries = entries(&journal);
  position(&entries, "a: pre_restart");
  position(&entries, "b: pre_restart");
  assert!(position(&entries, "b: post_restart") < position(&entries, "b: got 4 total 4"));
  assert!(!entries.iter().any(|entry| entry == "sup: pre_restart"));
  assert!(!cell_of(&system, &b).mailbox().is_suspended());
  assert_eq!(supervisor_cell.children(), [a, b]);
}

#[test]
fn one_for_one_leaves_siblings_alone() {
  let system = ActorSystem::new(&config()).unwrap();
  let journal = journal();
  let supervisor = system.actor_of_named(&Tracker::parent_props("sup", &["a", "b"], &journal), "sup").unwrap();
  let a = cell_of(&system, &supervisor).child("a").unwrap();

  a.tell(AnyMessage::new(Fail));

  let entries = entries(&journal);
  position(&entries, "a: post_restart");
  assert!(!entries.iter().any(|entry| entry.starts_with("b: pre_restart")));
}

#[test]
fn stop_waits_for_children_before_the_parent_stops() {
  let system = ActorSystem::new(&config()).unwrap();
  let (log, _subscription) = observe(&system);
  let journal = journal();
  let parent = system.actor_of_named(&Tracker::parent_props("parent", &["kid"], &journal), "parent").unwrap();
  let kid = cell_of(&system, &parent).child("kid").unwrap();

  system.stop(&parent);

  let entries = entries(&journal);
  assert!(position(&entries, "kid: stop") < position(&entries, "parent: stop"));
  assert!(system.actor_ref(parent.pid()).is_none());
  assert!(system.actor_ref(kid.pid()).is_none());
  assert_eq!(log.stages_of(kid.pid()).last(), Some(&LifecycleStage::Stopped));
}

#[test]
fn watchers_learn_about_terminations() {
  let system = ActorSystem::new(&config()).unwrap();
  let journal = journal();
  let watcher = system.actor_of_named(&Tracker::props("watcher", &journal), "watcher").unwrap();
  let target = system.actor_of_named(&Tracker::props("target", &journal), "target").unwrap();

  watcher.tell(AnyMessage::new(Watch(target.clone())));
  system.stop(&target);

  let entries = entries(&journal);
  assert!(position(&entries, "target: stop") < position(&entries, "watcher: terminated"));
}

#[test]
fn watching_a_stopped_actor_still_notifies() {
  let system = ActorSystem::new(&config()).unwrap();
  let journal = journal();
  let watcher = system.actor_of_named(&Tracker::props("watcher", &journal), "watcher").unwrap();
  let target = system.actor_of_named(&Tracker::props("target", &journal), "target").unwrap();
  system.stop(&target);

  watcher.tell(AnyMessage::new(Watch(target)));

  position(&entries(&journal), "watcher: terminated");
}

#[test]
fn terminating_the_system_stops_every_actor() {
  let system = ActorSystem::new(&config()).unwrap();
  let journal = journal();
  system.actor_of_named(&Tracker::parent_props("parent", &["kid"], &journal), "parent").unwrap();

  system.terminate();

  assert!(system.is_terminated());
  assert_eq!(system.state().actor_count(), 0);
  let entries = entries(&journal);
  assert!(position(&entries, "kid: stop") < position(&entries, "parent: stop"));
}

/// Actor whose stop hook fails, either by returning an error or by panicking.
struct BrokenStop {
  panics: bool,
}

impl Actor for BrokenStop {
  fn receive(&mut self, _ctx: &mut ActorContext<'_>, _message: AnyMessageView<'_>) -> Result<(), ActorError> {
    Ok(())
  }

  fn on_stop(&mut self, _ctx: &mut ActorContext<'_>) -> Result<(), ActorError> {
    if self.panics {
      panic!("stop hook exploded");
    }
    Err(ActorError::recoverable("cannot release"))
  }
}

#[test]
fn failing_stop_hooks_still_close_the_mailbox_once() {
  for panics in [false, true] {
    let system = ActorSystem::new(&config()).unwrap();
    let journal = journal();
    let (log, _subscription) = observe(&system);
    let watcher = system.actor_of_named(&Tracker::props("watcher", &journal), "watcher").unwrap();
    let broken = system.actor_of_named(&Props::from_fn(move || BrokenStop { panics }), "broken").unwrap();
    let cell = cell_of(&system, &broken);
    watcher.tell(AnyMessage::new(Watch(broken.clone())));

    system.stop(&broken);
    system.stop(&broken);

    assert!(cell.mailbox().is_closed());
    assert_eq!(log.stages_of(broken.pid()), [LifecycleStage::Started, LifecycleStage::Stopped]);
    assert_eq!(entries(&journal), ["watcher: start", "watcher: terminated"]);
    assert!(system.state().cell(broken.pid()).is_none());
  }
}
