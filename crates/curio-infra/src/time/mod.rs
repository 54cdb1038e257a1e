mod fixed_clock;
mod latency;
mod system_clock;

pub use fixed_clock::FixedClock;
pub use latency::TokioLatency;
pub use system_clock::SystemClock;
