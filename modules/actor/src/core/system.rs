//! Actor system runtime: guardians, registry and shared sinks.

mod actor_system;
mod guardian_actor;
mod system_state;

pub use actor_system::ActorSystem;
pub(crate) use guardian_actor::GuardianActor;
pub use system_state::SystemState;
