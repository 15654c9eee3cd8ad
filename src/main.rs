use clap::Parser;
use sectorwatch::application::screen_sector::CancelToken;
use sectorwatch::cli::commands::{Cli, Commands};
use sectorwatch::domain::values::metrics::GrowthPolicy;
use sectorwatch::infrastructure::jquants::auth::JquantsAuth;
use sectorwatch::SectorWatch;

#[tokio::main]
async fn main() {
    env_logger::init();
    let cli = Cli::parse();

    if let Err(e) = run_command(cli.command).await {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

async fn run_command(cmd: Commands) -> Result<(), Box<dyn std::error::Error>> {
    match cmd {
        Commands::Screen {
            sector,
            limit,
            policy,
        } => {
            let policy: GrowthPolicy = policy.parse().map_err(|e: String| e)?;
            let refresh_token = std::env::var("SECTORWATCH_REFRESH_TOKEN").unwrap_or_default();
            let session = JquantsAuth::new().authenticate(&refresh_token).await?;

            // Ctrl-C stops the pass between companies; partial results
            // already collected are still reported.
            let cancel = CancelToken::new();
            let cancel_signal = cancel.clone();
            tokio::spawn(async move {
                if tokio::signal::ctrl_c().await.is_ok() {
                    cancel_signal.cancel();
                }
            });

            let sw = SectorWatch::new(policy);
            let report = sw.screen_sector(&sector, limit, &session, &cancel).await?;
            println!("{}", serde_json::to_string_pretty(&report).unwrap());
        }
        Commands::WatchAdd { code, entry_price } => {
            let sw = SectorWatch::new(GrowthPolicy::default());
            let item = sw.watch_add(&code, entry_price)?;
            println!("{}", serde_json::to_string_pretty(&item).unwrap());
        }
        Commands::WatchRemove { code } => {
            let sw = SectorWatch::new(GrowthPolicy::default());
            sw.watch_remove(&code)?;
            println!("Removed {code} from the watch list");
        }
        Commands::WatchList => {
            let sw = SectorWatch::new(GrowthPolicy::default());
            let items = sw.watch_list()?;
            println!("{}", serde_json::to_string_pretty(&items).unwrap());
        }
        Commands::Refresh { notify } => {
            let sw = SectorWatch::new(GrowthPolicy::default());
            let rows = sw.refresh(notify).await?;
            println!("{}", serde_json::to_string_pretty(&rows).unwrap());
        }
    }
    Ok(())
}
