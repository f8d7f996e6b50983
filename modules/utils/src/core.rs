/// Shared ownership and locking primitives.
pub mod sync;
/// Clock abstractions used for deadlines and restart windows.
pub mod time;
