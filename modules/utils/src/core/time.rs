mod manual_clock;
mod monotonic_clock;

pub use manual_clock::ManualClock;
pub use monotonic_clock::MonotonicClock;
