//! Frame timing: per-frame time step and a rolling frames-per-second count.

/// Turns successive timestamps into frame deltas and counts frames per second.
#[derive(Clone, Debug)]
pub struct FrameTimer {
    prev: f64,
    interval: f64,
    frame_count: u32,
    fps: u32,
}

impl FrameTimer {
    /// Start timing at `now` seconds.
    pub fn new(now: f64) -> Self {
        FrameTimer {
            prev: now,
            interval: 0.0,
            frame_count: 0,
            fps: 0,
        }
    }

    /// Register a frame at `now` seconds and return the time since the previous one.
    ///
    /// A clock that runs backwards yields a zero delta.
    pub fn tick(&mut self, now: f64) -> f64 {
        let delta = (now - self.prev).max(0.0);
        self.prev = now;

        self.frame_count += 1;
        self.interval += delta;
        if self.interval >= 1.0 {
            self.fps = self.frame_count;
            self.interval = 0.0;
            self.frame_count = 0;
            log::trace!("fps: {}", self.fps);
        }
        delta
    }

    /// Restart timing at `now` without touching the FPS count.
    pub fn reset(&mut self, now: f64) {
        self.prev = now;
    }

    /// Frames counted over the last full second.
    pub fn fps(&self) -> u32 {
        self.fps
    }
}
