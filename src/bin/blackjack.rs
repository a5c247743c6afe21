use std::{io, path::PathBuf};

use blackjack_table::{Console, Session, Table, TableConfig};
use clap::Parser;

type BoxErr = Box<dyn std::error::Error + Send + Sync>;

#[derive(Parser)]
#[command(name = "blackjack", about = "Text-based Blackjack against the dealer")]
struct Cli {
    /// JSON table config; flags below override it
    #[arg(long)]
    config: Option<PathBuf>,

    /// Seed for a reproducible shuffle
    #[arg(long)]
    seed: Option<u64>,

    /// Starting bankroll
    #[arg(long)]
    bankroll: Option<u64>,

    /// Player name shown at the table
    #[arg(long)]
    name: Option<String>,

    /// Dealer also draws on a soft 17
    #[arg(long)]
    dealer_hits_soft_17: bool,

    /// Raise log verbosity (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

impl Cli {
    fn table_config(&self) -> Result<TableConfig, BoxErr> {
        let mut config = match &self.config {
            Some(path) => TableConfig::from_path(path)?,
            None => TableConfig::default(),
        };
        if let Some(seed) = self.seed {
            config.seed = Some(seed);
        }
        if let Some(bankroll) = self.bankroll {
            config.starting_bankroll = bankroll;
        }
        if let Some(name) = &self.name {
            config.player_name = name.clone();
        }
        if self.dealer_hits_soft_17 {
            config.dealer_hits_soft_17 = true;
        }
        config.validate()?;
        Ok(config)
    }
}

fn main() -> Result<(), BoxErr> {
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    let config = cli.table_config()?;
    log::info!(
        "starting table: bankroll={}, seed={:?}, dealer_hits_soft_17={}",
        config.starting_bankroll,
        config.seed,
        config.dealer_hits_soft_17
    );

    let stdin = io::stdin();
    let console = Console::new(stdin.lock(), io::stdout());
    let mut session = Session::new(Table::from_config(&config), console);
    session.run()?;
    Ok(())
}
