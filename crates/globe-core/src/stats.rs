use instant::Instant;
use std::time::Duration;

/// Rolling frames-per-second counter.
#[derive(Clone, Debug)]
pub struct FrameStats {
    window: Duration,
    window_start: Instant,
    frames_in_window: u32,
    total: u64,
}

impl FrameStats {
    pub fn new(window: Duration) -> Self {
        Self {
            window,
            window_start: Instant::now(),
            frames_in_window: 0,
            total: 0,
        }
    }

    /// Count one frame. Returns the average rate once per elapsed window.
    pub fn record(&mut self) -> Option<f64> {
        self.record_at(Instant::now())
    }

    pub fn record_at(&mut self, now: Instant) -> Option<f64> {
        self.frames_in_window += 1;
        self.total += 1;
        if now <= self.window_start {
            return None;
        }
        let elapsed = now - self.window_start;
        if elapsed < self.window {
            return None;
        }
        let fps = self.frames_in_window as f64 / elapsed.as_secs_f64();
        self.window_start = now;
        self.frames_in_window = 0;
        Some(fps)
    }

    pub fn total(&self) -> u64 {
        self.total
    }
}

impl Default for FrameStats {
    fn default() -> Self {
        Self::new(Duration::from_secs_f64(crate::constants::STATS_WINDOW_SEC))
    }
}
