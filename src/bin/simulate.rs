//! Run one seeded autoplay game and print the result.
//!
//! Set `RUST_LOG=real_estate=debug` to watch every turn.

use clap::{Parser, ValueEnum};
use tracing_subscriber::EnvFilter;

use real_estate::core::GameConfig;
use real_estate::sim::{BuyPolicy, SimulationBuilder};

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Policy {
    Always,
    Never,
    Reserve,
}

#[derive(Debug, Parser)]
#[command(about = "Autoplay a real-estate board game")]
struct Cli {
    /// Dice seed.
    #[arg(long, default_value_t = 42)]
    seed: u64,

    /// Stop after this many rounds without a winner.
    #[arg(long, default_value_t = 1_000)]
    max_rounds: u32,

    /// When players buy the space they land on.
    #[arg(long, value_enum, default_value_t = Policy::Always)]
    policy: Policy,

    /// Cash kept in hand under the `reserve` policy.
    #[arg(long, default_value_t = 0)]
    reserve: i64,

    /// Player names in seating order. Defaults to the reference trio.
    #[arg(long = "player")]
    players: Vec<String>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    let policy = match cli.policy {
        Policy::Always => BuyPolicy::Always,
        Policy::Never => BuyPolicy::Never,
        Policy::Reserve => BuyPolicy::Reserve(cli.reserve),
    };

    let mut config = GameConfig::new();
    if !cli.players.is_empty() {
        config = config.with_players(cli.players);
    }

    let mut sim = SimulationBuilder::new()
        .config(config)
        .policy(policy)
        .max_rounds(cli.max_rounds)
        .build(cli.seed)?;
    let outcome = sim.run()?;

    for (_, player) in sim.game().players().iter() {
        println!("{player}");
    }
    match outcome.winner {
        Some(winner) => println!(
            "{winner} wins after {} rounds ({} turns)",
            outcome.rounds, outcome.turns
        ),
        None => println!("No winner after {} rounds", outcome.rounds),
    }
    Ok(())
}
