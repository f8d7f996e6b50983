use alloc::{collections::VecDeque, vec::Vec};

use super::FailedState;
use crate::core::{
  actor_prim::{ActorRef, BehaviorStack, ChildrenContainer},
  messaging::{AnyMessage, SystemMessage},
};

/// Mutable part of a cell, guarded by a single lock that is never held across user code.
pub(super) struct CellState {
  pub(super) behaviors:      BehaviorStack,
  pub(super) children:       ChildrenContainer,
  pub(super) stash:          VecDeque<AnyMessage>,
  /// System messages deferred while the cell is suspended or waiting for children.
  pub(super) system_stash:   Vec<SystemMessage>,
  pub(super) watching:       Vec<ActorRef>,
  pub(super) watched_by:     Vec<ActorRef>,
  pub(super) failed:         FailedState,
  pub(super) failed_message: Option<AnyMessage>,
  pub(super) finished:       bool,
}

impl CellState {
  pub(super) fn new() -> Self {
    Self {
      behaviors: BehaviorStack::new(),
      children: ChildrenContainer::new(),
      stash: VecDeque::new(),
      system_stash: Vec::new(),
      watching: Vec::new(),
      watched_by: Vec::new(),
      failed: FailedState::Healthy,
      failed_message: None,
      finished: false,
    }
  }
}
