use std::cell::Cell;
use std::thread;
use std::time::{Duration, Instant};

// Monotonic milliseconds, the same shape of timestamp a display refresh
// callback hands out.
pub trait Clock {
    fn now_ms(&self) -> f64;

    // block (or pretend to) until the clock reads at least `deadline_ms`
    fn wait_until(&self, deadline_ms: f64);
}

pub struct SystemClock {
    origin: Instant,
}

impl SystemClock {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for SystemClock {
    fn now_ms(&self) -> f64 {
        self.origin.elapsed().as_secs_f64() * 1000.0
    }

    fn wait_until(&self, deadline_ms: f64) {
        let remaining = deadline_ms - self.now_ms();
        if remaining > 0.0 {
            thread::sleep(Duration::from_secs_f64(remaining / 1000.0));
        }
    }
}

// A clock that only moves when told to. Waiting on it just jumps ahead, which
// lets a whole race run as fast as the CPU allows.
pub struct ManualClock {
    now_ms: Cell<f64>,
}

impl ManualClock {
    pub fn new(start_ms: f64) -> Self {
        Self {
            now_ms: Cell::new(start_ms),
        }
    }
}

impl Clock for ManualClock {
    fn now_ms(&self) -> f64 {
        self.now_ms.get()
    }

    fn wait_until(&self, deadline_ms: f64) {
        if deadline_ms > self.now_ms.get() {
            self.now_ms.set(deadline_ms);
        }
    }
}
