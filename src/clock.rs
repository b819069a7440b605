use std::time::Instant;

/// Nanosecond time source used to bracket each benchmark phase.
pub trait Clock {
    fn now_nanos(&mut self) -> u64;
}

/// Monotonic clock anchored at construction; never affected by wall-clock jumps.
pub struct MonotonicClock {
    origin: Instant,
}

impl MonotonicClock {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Default for MonotonicClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for MonotonicClock {
    fn now_nanos(&mut self) -> u64 {
        // u64 nanoseconds cover several centuries of uptime
        self.origin.elapsed().as_nanos() as u64
    }
}
