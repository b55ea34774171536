//! Simulated loading progress shown before a plan is generated
//!
//! Progress grows by a random step on every tick. Once it reaches 100 the
//! run waits a short settle delay and completes. Dropping the future stops
//! the timer.

use std::time::Duration;

use rand::RngExt;
use tokio::time::{Instant, interval_at, sleep};
use tracing::debug;

use crate::config::LoadingConfig;

/// Timer settings for the loading animation
#[derive(Debug, Clone)]
pub struct LoadingProgress {
    tick: Duration,
    settle: Duration,
    min_step: f32,
    max_step: f32,
}

impl Default for LoadingProgress {
    fn default() -> Self {
        Self::from_config(&LoadingConfig::default())
    }
}

impl LoadingProgress {
    #[must_use]
    pub fn from_config(config: &LoadingConfig) -> Self {
        Self {
            tick: Duration::from_millis(config.tick_ms),
            settle: Duration::from_millis(config.settle_ms),
            min_step: config.min_step as f32,
            max_step: config.max_step as f32,
        }
    }

    /// Progress after one tick, starting from `current`
    #[must_use]
    pub fn advance(&self, current: f32) -> f32 {
        let step = if self.max_step > self.min_step {
            rand::rng().random_range(self.min_step..self.max_step)
        } else {
            self.min_step
        };
        current + step
    }

    /// Run the timer to completion, reporting progress (0-100) on every tick.
    /// Returns the number of ticks taken.
    pub async fn run<F: FnMut(u8)>(&self, mut on_tick: F) -> u32 {
        let mut ticker = interval_at(Instant::now() + self.tick, self.tick);
        let mut progress = 0.0_f32;
        let mut ticks = 0;

        loop {
            ticker.tick().await;
            ticks += 1;
            if progress >= 100.0 {
                break;
            }
            progress = self.advance(progress);
            on_tick(progress.min(100.0) as u8);
        }

        debug!("Loading finished after {} ticks", ticks);
        sleep(self.settle).await;
        ticks
    }

    /// Run the timer, then the pipeline
    pub async fn run_then<T, F, P>(&self, on_tick: F, pipeline: P) -> T
    where
        F: FnMut(u8),
        P: FnOnce() -> T,
    {
        self.run(on_tick).await;
        pipeline()
    }
}

/// What the loading screen says at a given progress
#[must_use]
pub fn stage_label(progress: u8) -> &'static str {
    match progress {
        0..=24 => "Searching transport",
        25..=49 => "Comparing accommodation",
        50..=74 => "Building itinerary",
        75..=99 => "Estimating budget",
        _ => "Plan ready",
    }
}

/// Text progress bar, e.g. `[#####.....]  50%`
#[must_use]
pub fn render_bar(progress: u8, width: usize) -> String {
    let progress = progress.min(100);
    let filled = width * usize::from(progress) / 100;
    format!(
        "[{}{}] {:>3}%",
        "#".repeat(filled),
        ".".repeat(width - filled),
        progress
    )
}
