use std::{
    thread::sleep,
    time::{Duration, Instant},
};

/// Sleeps out the remainder of the configured step interval after each frame
/// and keeps a smoothed steps-per-second estimate for the stats readout.
pub struct StepLimiter {
    interval: Duration,
    frame_timer: Instant,
    frametime_smoothed: f64,
}

impl StepLimiter {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            frame_timer: Instant::now(),
            frametime_smoothed: interval.as_secs_f64().max(1e-6),
        }
    }

    pub fn steps_per_sec(&self) -> f64 {
        1. / self.frametime_smoothed
    }

    pub fn delay(&mut self) {
        let before_wait = self.frame_timer.elapsed();

        if self.interval > before_wait {
            sleep(self.interval - before_wait);
        }

        let after_wait = self.frame_timer.elapsed();
        let frametime = after_wait.as_secs_f64();
        self.frametime_smoothed += (frametime - self.frametime_smoothed) * 0.1;

        self.frame_timer = Instant::now();
    }
}
