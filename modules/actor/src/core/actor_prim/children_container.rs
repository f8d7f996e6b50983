use alloc::{
  string::{String, ToString},
  vec::Vec,
};

use ahash::RandomState;
use hashbrown::HashMap;

use super::{ActorRef, Pid};
use crate::core::{
  error::{ActorError, SpawnError},
  supervision::ChildRestartStats,
};


/// Why a cell is waiting for children to terminate.
#[derive(Debug)]
pub(crate) enum SuspendReason {
  /// Children were stopped explicitly; nothing waits for them.
  UserRequest,
  /// The cell retries its failed creation once every child has terminated.
  Creation,
  /// The cell restarts once every child has terminated.
  Recreation(ActorError),
  /// The cell terminates once every child has terminated.
  Termination,
}

enum ChildSlot {
  Reserved,
  Live { child: ActorRef, stats: ChildRestartStats },
}

enum Phase {
  Normal,
  Terminating { to_die: Vec<Pid>, reason: SuspendReason },
  Terminated,
}

/// Children of a cell, including names reserved for children still being created.
pub(crate) struct ChildrenContainer {
  slots: HashMap<String, ChildSlot, RandomState>,
  names: HashMap<Pid, String, RandomState>,
  phase: Phase,
}

impl ChildrenContainer {
  pub(crate) fn new() -> Self {
    Self {
      slots: HashMap::with_hasher(RandomState::new()),
      names: HashMap::with_hasher(RandomState::new()),
      phase: Phase::Normal,
    }
  }

  /// Reserves `name` for a child about to be created.
  pub(crate) fn reserve(&mut self, name: &str) -> Result<(), SpawnError> {
    if self.is_terminating() {
      return Err(SpawnError::SystemUnavailable);
    }
    if self.slots.contains_key(name) {
      return Err(SpawnError::name_conflict(name));
    }
    self.slots.insert(name.to_string(), ChildSlot::Reserved);
    Ok(())
  }

  /// Releases a reservation whose child could not be created.
  pub(crate) fn unreserve(&mut self, name: &str) {
    if matches!(self.slots.get(name), Some(ChildSlot::Reserved)) {
      self.slots.remove(name);
    }
  }

  /// Promotes the reservation of `child` to a live entry; returns `false` for unknown children.
  pub(crate) fn init_child(&mut self, child: &ActorRef) -> bool {
    let name = child.path().name();
    match self.slots.get_mut(name) {
      | Some(slot @ ChildSlot::Reserved) => {
        *slot = ChildSlot::Live { child: child.clone(), stats: ChildRestartStats::new() };
        self.names.insert(child.pid(), name.to_string());
        true
      },
      | Some(ChildSlot::Live { child: existing, .. }) => existing.pid() == child.pid(),
      | None => false,
    }
  }

  /// Removes a terminated child. Returns the pending reason when this was the last child the
  /// cell was waiting for.
  pub(crate) fn remove_child(&mut self, pid: Pid) -> Option<SuspendReason> {
    if let Some(name) = self.names.remove(&pid) {
      self.slots.remove(&name);
    }
    let Phase::Terminating { to_die, .. } = &mut self.phase else {
      return None;
    };
    to_die.retain(|candidate| *candidate != pid);
    if !to_die.is_empty() {
      return None;
    }
    match core::mem::replace(&mut self.phase, Phase::Normal) {
      | Phase::Terminating { reason: SuspendReason::Termination, .. } => {
        self.phase = Phase::Terminated;
        Some(SuspendReason::Termination)
      },
      | Phase::Terminating { reason, .. } => Some(reason),
      | other => {
        self.phase = other;
        None
      },
    }
  }

  /// Marks a child as stopping.
  pub(crate) fn shall_die(&mut self, pid: Pid) {
    if let Phase::Terminating { to_die, .. } = &mut self.phase {
      if !to_die.contains(&pid) {
        to_die.push(pid);
      }
    } else if matches!(self.phase, Phase::Normal) {
      self.phase = Phase::Terminating { to_die: alloc::vec![pid], reason: SuspendReason::UserRequest };
    }
  }

  /// Sets what happens once the stopping children are gone; returns `false` if none are stopping.
  pub(crate) fn set_termination_reason(&mut self, reason: SuspendReason) -> bool {
    match &mut self.phase {
      | Phase::Terminating { reason: current, .. } => {
        *current = reason;
        true
      },
      | Phase::Normal | Phase::Terminated => false,
    }
  }

  pub(crate) fn set_terminated(&mut self) {
    self.phase = Phase::Terminated;
  }

  /// Returns `true` once the cell is stopping for good; no new children may be created.
  pub(crate) fn is_terminating(&self) -> bool {
    matches!(self.phase, Phase::Terminating { reason: SuspendReason::Termination, .. } | Phase::Terminated)
  }

  /// Returns `true` unless the cell waits for children to restart, recreate or terminate.
  pub(crate) fn is_normal(&self) -> bool {
    matches!(self.phase, Phase::Normal | Phase::Terminating { reason: SuspendReason::UserRequest, .. })
  }

  /// Returns `true` while a creation or restart waits for children to terminate.
  pub(crate) fn is_waiting_for_children(&self) -> bool {
    matches!(
      self.phase,
      Phase::Terminating { reason: SuspendReason::Creation | SuspendReason::Recreation(_), .. }
    )
  }

  /// Live children in creation order.
  pub(crate) fn children(&self) -> Vec<ActorRef> {
    let mut children: Vec<ActorRef> = self
      .slots
      .values()
      .filter_map(|slot| match slot {
        | ChildSlot::Live { child, .. } => Some(child.clone()),
        | ChildSlot::Reserved => None,
      })
      .collect();
    children.sort_by_key(|child| child.pid().value());
    children
  }

  pub(crate) fn child_by_name(&self, name: &str) -> Option<ActorRef> {
    match self.slots.get(name) {
      | Some(ChildSlot::Live { child, .. }) => Some(child.clone()),
      | _ => None,
    }
  }

  pub(crate) fn child_by_pid(&self, pid: Pid) -> Option<ActorRef> {
    let name = self.names.get(&pid)?;
    self.child_by_name(name)
  }

  pub(crate) fn is_child(&self, pid: Pid) -> bool {
    self.names.contains_key(&pid)
  }

  pub(crate) fn stats_mut(&mut self, pid: Pid) -> Option<&mut ChildRestartStats> {
    let name = self.names.get(&pid)?;
    match self.slots.get_mut(name) {
      | Some(ChildSlot::Live { stats, .. }) => Some(stats),
      | _ => None,
    }
  }

  /// Restart statistics of every live child.
  pub(crate) fn all_stats_mut(&mut self) -> impl Iterator<Item = &mut ChildRestartStats> {
    self.slots.values_mut().filter_map(|slot| match slot {
      | ChildSlot::Live { stats, .. } => Some(stats),
      | ChildSlot::Reserved => None,
    })
  }
}
