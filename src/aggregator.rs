use console::Term;
use indexmap::IndexMap;
use log::{debug, warn};

use crate::client::DashboardClient;
use crate::error::Result;
use crate::layout;
use crate::model::{HistoryEntry, RenderablePipeline};
use crate::output;
use crate::surface::Surface;

/// How a group refresh cycle ended. `NotFound` and `Empty` leave the prior
/// frame on screen; only `Drawn` repaints the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CycleOutcome {
    Drawn,
    NotFound,
    Empty,
}

/// Orchestrates one refresh cycle: fetch the group, fan out one history
/// request per pipeline, join the results, and draw the grid once.
pub struct GroupAggregator {
    client: DashboardClient,
    columns: Option<usize>,
}

impl GroupAggregator {
    pub fn new(client: DashboardClient, columns: Option<usize>) -> Self {
        Self { client, columns }
    }

    /// Renders the tile grid for `group_name` onto `surface`.
    ///
    /// Histories are fetched concurrently with no ordering guarantee among
    /// themselves; the draw happens exactly once, after every fetch has
    /// settled. An individual fetch failure degrades that pipeline to an
    /// empty history (a pending tile) instead of blocking the join.
    ///
    /// # Errors
    ///
    /// Fails only when the group listing itself cannot be fetched; the
    /// scheduler logs that and retries on the next interval.
    pub async fn render_group(
        &self,
        group_name: &str,
        surface: &mut dyn Surface,
    ) -> Result<CycleOutcome> {
        let groups = self.client.pipeline_groups().await?;

        let Some(group) = groups.into_iter().find(|group| group.name == group_name) else {
            warn!("Pipeline group {group_name} doesn't exist");
            return Ok(CycleOutcome::NotFound);
        };

        if group.pipelines.is_empty() {
            warn!("Pipeline group {group_name} doesn't have any pipelines");
            return Ok(CycleOutcome::Empty);
        }

        debug!(
            "Fetching histories for {} pipelines in group {group_name}",
            group.pipelines.len()
        );

        // Fan out one fetch per pipeline and wait for all of them. The map
        // is allocated fresh each cycle so no stale histories leak across
        // refreshes.
        let fetches: Vec<_> = group
            .pipelines
            .iter()
            .map(|name| self.fetch_history_or_empty(name))
            .collect();
        let histories: IndexMap<String, Vec<HistoryEntry>> =
            futures::future::join_all(fetches).await.into_iter().collect();

        let pipelines: Vec<RenderablePipeline> = group
            .pipelines
            .iter()
            .map(|name| RenderablePipeline {
                name: name.clone(),
                histories: histories.get(name).cloned().unwrap_or_default(),
            })
            .collect();

        layout::draw(surface, &pipelines, self.columns);
        surface.present()?;

        Ok(CycleOutcome::Drawn)
    }

    /// Renders the group overview listing to the terminal.
    pub async fn render_overview(&self) -> Result<()> {
        let groups = self.client.pipeline_groups().await?;

        let term = Term::stdout();
        term.clear_screen()?;
        term.write_line(&output::group_list_table(&groups).to_string())?;

        Ok(())
    }

    async fn fetch_history_or_empty(&self, name: &str) -> (String, Vec<HistoryEntry>) {
        match self.client.pipeline_history(name).await {
            Ok(histories) => (name.to_string(), histories),
            Err(err) => {
                warn!("History fetch for pipeline {name} failed: {err}");
                (name.to_string(), Vec::new())
            }
        }
    }
}
