use core::time::Duration;

use tessera_utils_rs::core::{
  sync::ArcShared,
  time::{ManualClock, MonotonicClock},
};

use super::ActorRefExt;
use crate::core::{
  actor_prim::{Actor, ActorContext, ActorRef},
  config::ActorSystemConfig,
  dead_letter::DeadLetterReason,
  error::{ActorError, AskError},
  messaging::{AnyMessage, AnyMessageView},
  props::Props,
  system::ActorSystem,
};

/// Replies to `u32` requests and keeps the sender of `&str` requests for a later reply.
struct Deferred {
  pending: Option<ActorRef>,
}

impl Actor for Deferred {
  fn receive(&mut self, ctx: &mut ActorContext<'_>, message: AnyMessageView<'_>) -> Result<(), ActorError> {
    if let Some(value) = message.downcast_ref::<u32>() {
      ctx.reply(AnyMessage::new(value + 1));
    } else if message.is::<&str>() {
      self.pending = Some(ctx.sender());
    } else if message.is::<()>() {
      if let Some(pending) = self.pending.take() {
        pending.tell(AnyMessage::new("late"));
      }
    }
    Ok(())
  }
}

fn system() -> ActorSystem {
  let clock = ArcShared::new(ManualClock::new()).into_dyn(|clock| clock as &dyn MonotonicClock);
  ActorSystem::new(&ActorSystemConfig::new("ask-tests", clock)).unwrap()
}

#[test]
fn answered_asks_return_the_reply() {
  let system = system();
  let actor = system.actor_of(&Props::from_fn(|| Deferred { pending: None })).unwrap();

  let reply = actor.ask_timeout(AnyMessage::new(1_u32), Duration::from_secs(1)).unwrap();

  assert_eq!(reply.downcast_ref::<u32>(), Some(&2));
}

#[test]
fn unanswered_asks_time_out_and_late_replies_become_dead_letters() {
  let system = system();
  let actor = system.actor_of(&Props::from_fn(|| Deferred { pending: None })).unwrap();

  let outcome = actor.ask_timeout(AnyMessage::new("hold"), Duration::from_millis(5));
  assert_eq!(outcome.map(|_| ()), Err(AskError::Timeout));

  actor.tell(AnyMessage::new(()));
  let late = system.dead_letters().into_iter().find(|entry| entry.message().downcast_ref::<&str>() == Some(&"late"));
  assert_eq!(late.map(|entry| entry.reason()), Some(DeadLetterReason::MailboxClosed));
}

#[test]
fn asks_to_stopped_actors_are_undeliverable() {
  let system = system();
  let actor = system.actor_of(&Props::from_fn(|| Deferred { pending: None })).unwrap();
  system.stop(&actor);

  let outcome = actor.ask_timeout(AnyMessage::new(1_u32), Duration::from_millis(5));

  assert_eq!(outcome.map(|_| ()), Err(AskError::Undeliverable));
}
