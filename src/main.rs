use broadside::{init_logging, CliFrontend, Session, SessionConfig};
use clap::Parser;
use log::LevelFilter;
use tokio::time::Duration;

/// Battleship against a computer opponent that fires at random.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
    seed: Option<u64>,
    #[arg(long, default_value_t = 3000, help = "Delay before each opponent step, in milliseconds")]
    delay_ms: u64,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    init_logging(LevelFilter::Warn);
    let cli = Cli::parse();

    if let Some(s) = cli.seed {
        println!("Using fixed seed: {} (game will be reproducible)", s);
    }
    let config = SessionConfig {
        seed: cli.seed,
        delay: Duration::from_millis(cli.delay_ms),
    };
    let mut session = Session::from_config(config)?;
    let mut frontend = CliFrontend::stdin();

    println!("Place your ships, then type 'start'. Type 'help' for commands.");
    session.run(&mut frontend).await?;
    Ok(())
}
