use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use std::time::Duration;

use crate::consts::ITEM_DELAY_MS;
use crate::driver::{self, RunConfig};
use crate::fetch::WikiFetcher;

#[derive(Parser)]
#[command(name = "arc_scrape", version, about = "Scrape the ARC Raiders wiki into static datasets")]
pub struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Scrape the weapon listing + detail pages into the weapons dataset
    Weapons(RunArgs),
    /// Scrape the loot listing + detail pages into the items dataset
    Loot(RunArgs),
}

#[derive(Args)]
struct RunArgs {
    /// Output path for the generated dataset
    #[arg(long)]
    out: Option<PathBuf>,

    /// Pause between item pages, in milliseconds
    #[arg(long, default_value_t = ITEM_DELAY_MS)]
    delay_ms: u64,

    /// Stop after N items (all by default)
    #[arg(short = 'n', long)]
    limit: Option<usize>,

    /// Also write the normalized records as JSON next to the dataset
    #[arg(long)]
    json: bool,
}

impl RunArgs {
    fn into_config(self, default_out: &str) -> RunConfig {
        let mut cfg = RunConfig::new(self.out.unwrap_or_else(|| PathBuf::from(default_out)));
        cfg.delay = Duration::from_millis(self.delay_ms);
        cfg.limit = self.limit;
        cfg.json = self.json;
        cfg
    }
}

pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let fetcher = WikiFetcher::new()?;

    // Per-item failures are already accounted for inside the run; only a
    // failure before the batch starts (or while writing the dataset)
    // surfaces as a non-zero exit.
    let summary = match cli.cmd {
        Command::Weapons(args) => {
            driver::run_weapons(&fetcher, &args.into_config("weapons_data.ts"))?
        }
        Command::Loot(args) => driver::run_loot(&fetcher, &args.into_config("all_items_data.ts"))?,
    };

    driver::print_summary(&summary);
    Ok(())
}
