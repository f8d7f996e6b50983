mod common;

use std::{
  sync::{
    Arc, Barrier,
    atomic::{AtomicUsize, Ordering},
  },
  thread,
};

use tessera_actor_rs::core::{
  actor_prim::{Actor, ActorContext},
  error::ActorError,
  messaging::{AnyMessage, AnyMessageView},
  props::Props,
};

#[derive(Default)]
struct Occupancy {
  active:    AtomicUsize,
  max:       AtomicUsize,
  processed: AtomicUsize,
}

struct Guarded {
  occupancy: Arc<Occupancy>,
  sum:   u64,
}

impl Actor for Guarded {
  fn receive(&mut self, _ctx: &mut ActorContext<'_>, message: AnyMessageView<'_>) -> Result<(), ActorError> {
    let active = self.occupancy.active.fetch_add(1, Ordering::SeqCst) + 1;
    self.occupancy.max.fetch_max(active, Ordering::SeqCst);
    if let Some(value) = message.downcast_ref::<u64>() {
      self.sum += value;
      thread::yield_now();
    }
    self.occupancy.active.fetch_sub(1, Ordering::SeqCst);
    self.occupancy.processed.fetch_add(1, Ordering::SeqCst);
    Ok(())
  }
}

#[test]
fn concurrent_tells_never_reenter_the_handler() {
  const SENDERS: usize = 8;
  const PER_SENDER: u64 = 500;

  let system = common::pooled_system("mutual-exclusion", 4, 5);
  let occupancy = Arc::new(Occupancy::default());
  let actor = {
    let occupancy = occupancy.clone();
    system.actor_of(&Props::from_fn(move || Guarded { occupancy: occupancy.clone(), sum: 0 })).unwrap()
  };

  let barrier = Arc::new(Barrier::new(SENDERS));
  let senders: Vec<_> = (0..SENDERS)
    .map(|_| {
      let actor = actor.clone();
      let barrier = barrier.clone();
      thread::spawn(move || {
        barrier.wait();
        for value in 0..PER_SENDER {
          actor.tell(AnyMessage::new(value));
        }
      })
    })
    .collect();
  for sender in senders {
    sender.join().unwrap();
  }

  let expected = SENDERS * PER_SENDER as usize;
  assert!(common::eventually(|| occupancy.processed.load(Ordering::SeqCst) == expected));
  assert_eq!(occupancy.max.load(Ordering::SeqCst), 1);
  assert!(system.dead_letters().is_empty());
  common::shutdown(&system);
}

#[test]
fn many_actors_share_a_small_pool() {
  let system = common::pooled_system("many-actors", 2, 3);
  let occupancies: Vec<Arc<Occupancy>> = (0..32).map(|_| Arc::new(Occupancy::default())).collect();
  let actors: Vec<_> = occupancies
    .iter()
    .map(|occupancy| {
      let occupancy = occupancy.clone();
      system.actor_of(&Props::from_fn(move || Guarded { occupancy: occupancy.clone(), sum: 0 })).unwrap()
    })
    .collect();

  for round in 0..50_u64 {
    for actor in &actors {
      actor.tell(AnyMessage::new(round));
    }
  }

  assert!(common::eventually(|| occupancies.iter().all(|occupancy| occupancy.processed.load(Ordering::SeqCst) == 50)));
  assert!(occupancies.iter().all(|occupancy| occupancy.max.load(Ordering::SeqCst) == 1));
  common::shutdown(&system);
}
