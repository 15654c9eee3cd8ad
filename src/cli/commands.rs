use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "sectorwatch",
    about = "Personal stock watch list and sector fundamentals screener"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Screen a sector for S/A-rank fundamentals candidates
    Screen {
        /// Sector name exactly as the listing directory reports it
        sector: String,
        /// Maximum number of companies to screen
        #[arg(long, default_value = "30")]
        limit: usize,
        /// Growth denominator policy (strict | nonzero)
        #[arg(long, default_value = "strict")]
        policy: String,
    },
    /// Add a position to the watch list
    WatchAdd {
        /// Company code
        code: String,
        /// Price the position was entered at
        entry_price: f64,
    },
    /// Remove a position from the watch list
    WatchRemove {
        /// Company code
        code: String,
    },
    /// Print the watch list
    WatchList,
    /// Refresh prices for the watch list and flag threshold moves
    Refresh {
        /// Push alert statuses to the configured webhook
        #[arg(long)]
        notify: bool,
    },
}
