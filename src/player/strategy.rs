//! Picking a policy by name, and the one-shot `select_move` entry point.

use std::fmt::Display;
use std::str::FromStr;

use clap::ValueEnum;
use enum_iterator::Sequence;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use crate::core::{Player, PlayerMark};
use crate::error::GameError;
use crate::game::tictactoe::{TTTAddr, TTTBoard};

use super::{HeuristicAi, MinMaxAi, RandomAi};

#[derive(
    Debug,
    Copy,
    Clone,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    ValueEnum,
    Sequence,
    Serialize,
    Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Strategy {
    /// Uniformly random among the empty cells
    Random,
    /// Win, block, centre, corner, anything
    Heuristic,
    /// Exhaustive minimax, never loses
    Optimal,
}

impl Strategy {
    pub fn name(&self) -> &'static str {
        match self {
            Strategy::Random => "random",
            Strategy::Heuristic => "heuristic",
            Strategy::Optimal => "optimal",
        }
    }

    /// A player for `mark` that keeps its own rng between moves
    pub fn player(self, mark: PlayerMark, seed: Option<u64>) -> Box<dyn Player> {
        match self {
            Strategy::Random => Box::new(RandomAi::new(seed)),
            Strategy::Heuristic => Box::new(HeuristicAi::new(mark, seed)),
            Strategy::Optimal => Box::new(MinMaxAi::new(mark)),
        }
    }
}

impl Display for Strategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Strategy {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        enum_iterator::all::<Strategy>()
            .find(|strategy| strategy.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| GameError::Configuration(s.to_string()))
    }
}

/// Choose the cell `mark` should play on `board`.
///
/// Only the random and heuristic strategies draw from `rng`.
pub fn select_move<R: Rng>(
    board: &TTTBoard,
    mark: PlayerMark,
    strategy: Strategy,
    rng: &mut R,
) -> Result<TTTAddr, GameError> {
    match strategy {
        Strategy::Random => RandomAi::with_rng(rng).play(board),
        Strategy::Heuristic => HeuristicAi::with_rng(mark, rng).play(board),
        Strategy::Optimal => MinMaxAi::new(mark).play(board),
    }
}

/// `select_move` with a freshly seeded rng
pub fn select_move_seeded(
    board: &TTTBoard,
    mark: PlayerMark,
    strategy: Strategy,
    seed: u64,
) -> Result<TTTAddr, GameError> {
    let mut rng = rand::rngs::StdRng::seed_from_u64(seed);
    select_move(board, mark, strategy, &mut rng)
}
