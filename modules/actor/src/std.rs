mod actor_future_ext;
mod actor_ref_ext;
mod std_defaults;
mod thread_pool_executor;
#[cfg(feature = "tokio-executor")]
mod tokio_executor;
mod tracing_logger_subscriber;

pub use actor_future_ext::ActorFutureExt;
pub use actor_ref_ext::ActorRefExt;
pub use thread_pool_executor::ThreadPoolExecutor;
#[cfg(feature = "tokio-executor")]
pub use tokio_executor::TokioExecutor;
pub use tracing_logger_subscriber::TracingLoggerSubscriber;
