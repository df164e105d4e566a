//! Pits the computer players against each other and prints how they fared.
//! Nothing is written to disk; the table lives only for the run.
//!

use clap::Parser;
use itertools::Itertools as _;
use log::{info, LevelFilter};
use rand::{rngs::StdRng, Rng as _, SeedableRng as _};
use simple_logger::SimpleLogger;
use tictac::{
    core::{GameStatus, PlayerMark},
    game::run_game,
    player::Strategy,
};

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Strategy playing X. Leave out both players to run every pairing
    #[arg(short = 'p', long)]
    p1: Option<Strategy>,

    /// Strategy playing O. See alternatives for p1
    #[arg(short = 'q', long)]
    p2: Option<Strategy>,

    /// Games per pairing
    #[arg(short, long, default_value = "100")]
    games: usize,

    /// The seed for the random number generator (when used)
    #[arg(long)]
    seed: Option<u64>,

    /// Log level for diagnostics on stderr
    #[arg(long, default_value = "warn")]
    log_level: LevelFilter,
}

#[derive(Debug, Default, Clone, Copy)]
struct Tally {
    first_wins: usize,
    second_wins: usize,
    draws: usize,
}

impl Tally {
    fn record(&mut self, status: GameStatus) {
        match status {
            GameStatus::Won(PlayerMark::First, _) => self.first_wins += 1,
            GameStatus::Won(PlayerMark::Second, _) => self.second_wins += 1,
            GameStatus::Draw => self.draws += 1,
            GameStatus::InProgress => unreachable!("run_game only returns finished games"),
        }
    }
}

fn pairings(cli: &Cli) -> Vec<(Strategy, Strategy)> {
    match (cli.p1, cli.p2) {
        (Some(p1), Some(p2)) => vec![(p1, p2)],
        (Some(p1), None) => enum_iterator::all::<Strategy>().map(|p2| (p1, p2)).collect(),
        (None, Some(p2)) => enum_iterator::all::<Strategy>().map(|p1| (p1, p2)).collect(),
        (None, None) => enum_iterator::all::<Strategy>()
            .cartesian_product(enum_iterator::all::<Strategy>())
            .collect(),
    }
}

fn play_pairing(
    p1: Strategy,
    p2: Strategy,
    games: usize,
    rng: &mut StdRng,
) -> anyhow::Result<Tally> {
    let mut tally = Tally::default();
    for _ in 0..games {
        let first = p1.player(PlayerMark::First, Some(rng.gen()));
        let second = p2.player(PlayerMark::Second, Some(rng.gen()));
        tally.record(run_game(first, second)?);
    }
    info!("{} vs {}: {:?}", p1, p2, tally);
    Ok(tally)
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    SimpleLogger::new().with_level(cli.log_level).init()?;
    let seed = cli.seed.unwrap_or(StdRng::from_entropy().gen());
    println!("Arena seed: {}", seed);
    let mut rng = StdRng::seed_from_u64(seed);

    println!(
        "{:>10} {:>10} {:>8} {:>8} {:>8}",
        "X", "O", "X wins", "O wins", "draws"
    );
    for (p1, p2) in pairings(&cli) {
        let tally = play_pairing(p1, p2, cli.games, &mut rng)?;
        println!(
            "{:>10} {:>10} {:>8} {:>8} {:>8}",
            p1.name(),
            p2.name(),
            tally.first_wins,
            tally.second_wins,
            tally.draws
        );
    }
    Ok(())
}
