//! Resource Blocking.
//!
//! The engine models a busy resource by stalling its only thread. The stall
//! sits behind the [`Delay`] trait so callers can swap the CPU-bound spin
//! for an instant no-op.

use std::time::{Duration, Instant};

/// Stalls the calling thread for a simulated number of milliseconds.
pub trait Delay {
    /// Blocks for `ms` simulated milliseconds. Must not return early.
    fn block(&mut self, ms: u64);
}

/// CPU-bound busy-wait against the monotonic clock.
///
/// Issues no I/O and never yields to the scheduler. `scale` stretches or
/// shrinks every stall, so `0.5` turns 10 simulated ms into about 5 real ms.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpinDelay {
    scale: f64,
}

impl SpinDelay {
    /// Creates a spin delay that runs in real time.
    pub fn new() -> Self {
        Self { scale: 1.0 }
    }

    /// Creates a spin delay with a time scale. Negative and NaN scales
    /// clamp to zero.
    pub fn with_scale(scale: f64) -> Self {
        let scale = if scale > 0.0 { scale } else { 0.0 };
        Self { scale }
    }

    /// Real milliseconds spent per simulated millisecond.
    pub fn scale(&self) -> f64 {
        self.scale
    }

    fn real_duration(&self, ms: u64) -> Duration {
        let micros = (ms as f64) * 1000.0 * self.scale;
        Duration::from_micros(micros.min(u64::MAX as f64) as u64)
    }
}

impl Default for SpinDelay {
    fn default() -> Self {
        Self::new()
    }
}

impl Delay for SpinDelay {
    fn block(&mut self, ms: u64) {
        let target = self.real_duration(ms);
        if target.is_zero() {
            return;
        }
        let begin = Instant::now();
        while begin.elapsed() < target {
            std::hint::spin_loop();
        }
    }
}

/// Returns immediately. Used by tests and `--no-delay` runs.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NoDelay;

impl Delay for NoDelay {
    fn block(&mut self, _ms: u64) {}
}

impl<T: Delay + ?Sized> Delay for &mut T {
    fn block(&mut self, ms: u64) {
        (**self).block(ms);
    }
}
