use std::time::Duration;

use log::{debug, warn};

use crate::aggregator::GroupAggregator;
use crate::config::Mode;
use crate::surface::Surface;

/// Drives the refresh loop.
///
/// The mode is chosen once at startup and threaded in as a value; cycles
/// are strictly sequential because the delay is only armed after the
/// previous cycle's future completes. A slow network therefore stretches
/// the period instead of stacking fetches.
pub struct Scheduler {
    aggregator: GroupAggregator,
    mode: Mode,
    refresh: Duration,
}

impl Scheduler {
    pub fn new(aggregator: GroupAggregator, mode: Mode, refresh: Duration) -> Self {
        Self {
            aggregator,
            mode,
            refresh,
        }
    }

    /// Runs one refresh cycle. Failures are logged and left for the next
    /// interval; the board itself never shows an error.
    pub async fn tick(&self, surface: &mut dyn Surface) {
        let outcome = match &self.mode {
            Mode::Overview => self.aggregator.render_overview().await,
            Mode::Group(name) => self
                .aggregator
                .render_group(name, surface)
                .await
                .map(|outcome| debug!("Cycle finished: {outcome:?}")),
        };

        if let Err(err) = outcome {
            warn!("Refresh cycle failed, retrying next interval: {err}");
        }
    }

    /// Refreshes forever. Never returns; the process is torn down from
    /// outside.
    pub async fn run(&self, surface: &mut dyn Surface) {
        loop {
            self.tick(surface).await;
            tokio::time::sleep(self.refresh).await;
        }
    }
}
