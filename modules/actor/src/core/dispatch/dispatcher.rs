mod base;
mod dispatch_executor;
mod dispatch_shared;
mod inline_executor;

pub use base::{DEFAULT_THROUGHPUT, Dispatcher};
pub use dispatch_executor::DispatchExecutor;
pub use dispatch_shared::DispatchShared;
pub use inline_executor::InlineExecutor;
