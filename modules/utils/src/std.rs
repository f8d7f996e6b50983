mod dedicated_thread_pool;
mod dedicated_thread_pool_settings;
mod spinning_semaphore;
mod std_monotonic_clock;
mod thread_pool_error;

pub use dedicated_thread_pool::DedicatedThreadPool;
pub use dedicated_thread_pool_settings::{DedicatedThreadPoolSettings, PanicHandler};
pub use spinning_semaphore::SpinningSemaphore;
pub use std_monotonic_clock::StdMonotonicClock;
pub use thread_pool_error::ThreadPoolError;
