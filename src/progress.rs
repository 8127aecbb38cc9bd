//! Cosmetic progress bar shown before a conversion runs
//!
//! Purely time-based: the bar fills in fixed steps regardless of what the
//! converter is doing.

use std::time::Duration;

/// Default number of steps to fill the bar
pub const DEFAULT_STEPS: u32 = 20;
/// Default time per step
pub const DEFAULT_STEP: Duration = Duration::from_millis(50);

/// A determinate progress animation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProgressAnimation {
    pub steps: u32,
    pub step: Duration,
}

impl Default for ProgressAnimation {
    fn default() -> Self {
        Self {
            steps: DEFAULT_STEPS,
            step: DEFAULT_STEP,
        }
    }
}

impl ProgressAnimation {
    /// Spread `total` evenly over the default step count
    pub fn with_duration(total: Duration) -> Self {
        Self {
            steps: DEFAULT_STEPS,
            step: total / DEFAULT_STEPS,
        }
    }

    /// Time from first to last frame
    pub fn total(&self) -> Duration {
        self.step * self.steps
    }

    /// Bar values in percent, `0` through `100` inclusive
    pub fn percentages(&self) -> impl Iterator<Item = f32> {
        let steps = self.steps.max(1);
        (0..=steps).map(move |i| (i * 100) as f32 / steps as f32)
    }

    /// Play the animation, calling `on_progress` per frame and sleeping between frames
    pub fn play(&self, mut on_progress: impl FnMut(f32)) {
        let mut frames = self.percentages().peekable();
        while let Some(percent) = frames.next() {
            on_progress(percent);
            if frames.peek().is_some() {
                std::thread::sleep(self.step);
            }
        }
    }
}
