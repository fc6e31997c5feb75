use anyhow::Result;
use clap::Parser;
use log::info;

use crate::aggregator::GroupAggregator;
use crate::client::DashboardClient;
use crate::config::PageConfig;
use crate::scheduler::Scheduler;
use crate::surface::TermSurface;

#[derive(Parser)]
#[command(name = "pipeboard")]
#[command(author, version, about = "CI pipeline status board", long_about = None)]
pub struct Cli {
    /// Base URL of the dashboard API server
    #[arg(short, long, env = "PIPEBOARD_URL", default_value = "http://localhost:8080")]
    url: String,

    /// Page location: "/" lists all groups, "/<group>" shows that group's
    /// tile grid. Accepts cols and refresh query parameters, e.g.
    /// "/build?cols=4&refresh=10000".
    #[arg(default_value = "/")]
    location: String,

    /// Run a single refresh cycle and exit
    #[arg(long, default_value_t = false)]
    once: bool,
}

impl Cli {
    pub async fn execute(&self) -> Result<()> {
        let page = PageConfig::from_location(&self.location);
        info!("Mode {:?}, refreshing every {:?}", page.mode, page.refresh);

        let client = DashboardClient::new(&self.url)?;
        let aggregator = GroupAggregator::new(client, page.columns);
        let scheduler = Scheduler::new(aggregator, page.mode.clone(), page.refresh);
        let mut surface = TermSurface::stdout();

        if self.once {
            scheduler.tick(&mut surface).await;
            return Ok(());
        }

        scheduler.run(&mut surface).await;
        Ok(())
    }
}
