use std::collections::VecDeque;
use std::time::Duration;

/// Rolling average of recent frame times.
#[derive(Clone, Debug)]
pub struct FrameStats {
    samples: VecDeque<f32>,
    capacity: usize,
}

impl FrameStats {
    pub fn new(capacity: usize) -> Self {
        Self {
            samples: VecDeque::with_capacity(capacity.max(1)),
            capacity: capacity.max(1),
        }
    }

    pub fn push(&mut self, dt: Duration) {
        if self.samples.len() == self.capacity {
            self.samples.pop_front();
        }
        self.samples.push_back(dt.as_secs_f32());
    }

    /// Average frame time in milliseconds (0 before the first frame).
    pub fn average_ms(&self) -> f32 {
        if self.samples.is_empty() {
            return 0.0;
        }
        1000.0 * self.samples.iter().sum::<f32>() / self.samples.len() as f32
    }

    pub fn fps(&self) -> f32 {
        let ms = self.average_ms();
        if ms > 0.0 {
            1000.0 / ms
        } else {
            0.0
        }
    }
}
