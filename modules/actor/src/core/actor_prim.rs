//! Actors, their cells, contexts and references.

mod actor;
mod actor_cell;
mod actor_cell_invoker;
mod actor_context;
mod actor_path;
mod actor_ref;
mod behavior;
mod behavior_stack;
mod children_container;
mod message_handler;
mod pid;
mod terminated;

pub use actor::Actor;
pub use actor_cell::ActorCell;
pub use actor_context::ActorContext;
pub use actor_path::ActorPath;
pub use actor_ref::{ActorRef, ActorRefSender};
pub use behavior::Behavior;
pub(crate) use behavior_stack::{BehaviorSlot, BehaviorStack};
pub(crate) use children_container::{ChildrenContainer, SuspendReason};
pub use message_handler::MessageHandler;
pub use pid::Pid;
pub use terminated::Terminated;
