//! Frame timing

/// Turns `requestAnimationFrame` timestamps into per-tick `dt`
#[derive(Debug, Clone, Default)]
pub struct FrameClock {
    last_ms: Option<f64>,
}

impl FrameClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seconds since the previous timestamp.
    ///
    /// The first frame has nothing to measure against and yields 0, as does a
    /// timestamp that runs backwards.
    pub fn advance(&mut self, timestamp_ms: f64) -> f32 {
        let dt = match self.last_ms {
            Some(last) => ((timestamp_ms - last) / 1000.0).max(0.0) as f32,
            None => 0.0,
        };
        self.last_ms = Some(timestamp_ms);
        dt
    }
}

/// Rolling FPS estimate over the last 60 frames
#[derive(Debug, Clone)]
pub struct FpsCounter {
    frame_times: [f64; 60],
    frame_index: usize,
    fps: u32,
}

impl Default for FpsCounter {
    fn default() -> Self {
        Self {
            frame_times: [0.0; 60],
            frame_index: 0,
            fps: 0,
        }
    }
}

impl FpsCounter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, time_ms: f64) {
        self.frame_times[self.frame_index] = time_ms;
        self.frame_index = (self.frame_index + 1) % self.frame_times.len();

        // Oldest sample is the one we'll overwrite next
        let oldest_time = self.frame_times[self.frame_index];
        if oldest_time > 0.0 {
            let elapsed = time_ms - oldest_time;
            if elapsed > 0.0 {
                let intervals = (self.frame_times.len() - 1) as f64;
                self.fps = (intervals * 1000.0 / elapsed).round() as u32;
            }
        }
    }

    pub fn fps(&self) -> u32 {
        self.fps
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_frame_has_zero_dt() {
        let mut clock = FrameClock::new();
        assert_eq!(clock.advance(123_456.0), 0.0);
        let dt = clock.advance(123_456.0 + 16.0);
        assert!((dt - 0.016).abs() < 1e-6);
    }

    #[test]
    fn test_backwards_timestamp_clamps_to_zero() {
        let mut clock = FrameClock::new();
        clock.advance(1000.0);
        assert_eq!(clock.advance(900.0), 0.0);
        // Measured from the latest timestamp
        let dt = clock.advance(1000.0);
        assert!((dt - 0.1).abs() < 1e-6);
    }

    #[test]
    fn test_fps_needs_full_window() {
        let mut fps = FpsCounter::new();
        for i in 1..60 {
            fps.record(i as f64 * 16.0);
        }
        assert_eq!(fps.fps(), 0);
    }

    #[test]
    fn test_fps_at_steady_rate() {
        let mut fps = FpsCounter::new();
        // 120 frames at 20 ms each -> 50 fps once the window is full
        for i in 1..=120 {
            fps.record(i as f64 * 20.0);
        }
        assert_eq!(fps.fps(), 50);
    }
}
