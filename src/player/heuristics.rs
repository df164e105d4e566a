use log::debug;
use rand::{rngs::StdRng, SeedableRng};

use crate::{
    core::{Player, PlayerMark},
    error::GameError,
    game::tictactoe::{TTTAddr, TTTBoard, CENTER, CORNERS},
};

use super::random::random_move;

/// The first empty cell (lowest index) where `mark` would complete a line.
pub fn winning_cell(b: &TTTBoard, mark: PlayerMark) -> Option<TTTAddr> {
    b.valid_moves().into_iter().find(|&addr| {
        b.place(addr, mark)
            .map(|scratch| scratch.has_won(mark))
            .unwrap_or(false)
    })
}

/// A rule cascade. Not optimal play, a careful opponent can beat it.
///
/// 1. win if possible
/// 2. block the opponent's win
/// 3. take the centre
/// 4. take a random free corner
/// 5. take any random free cell
pub struct HeuristicAi<R> {
    my_marker: PlayerMark,
    rng: R,
}

impl HeuristicAi<StdRng> {
    pub fn new(mark: PlayerMark, seed: Option<u64>) -> Self {
        Self {
            my_marker: mark,
            rng: match seed {
                None => StdRng::from_entropy(),
                Some(seed) => StdRng::seed_from_u64(seed),
            },
        }
    }
}

impl<R: rand::Rng> HeuristicAi<R> {
    pub fn with_rng(mark: PlayerMark, rng: R) -> Self {
        Self {
            my_marker: mark,
            rng,
        }
    }
}

impl<R: rand::Rng> Player for HeuristicAi<R> {
    fn play(&mut self, b: &TTTBoard) -> Result<TTTAddr, GameError> {
        super::check_playable(b)?;
        if let Some(addr) = winning_cell(b, self.my_marker) {
            debug!("Heuristic AI {} wins at {}", self.my_marker, addr);
            return Ok(addr);
        }
        if let Some(addr) = winning_cell(b, self.my_marker.other()) {
            debug!("Heuristic AI {} blocks at {}", self.my_marker, addr);
            return Ok(addr);
        }
        if !b.is_occupied(CENTER) {
            return Ok(CENTER);
        }
        let corners: Vec<TTTAddr> = CORNERS
            .into_iter()
            .filter(|&c| !b.is_occupied(c))
            .collect();
        if !corners.is_empty() {
            return random_move(&corners, &mut self.rng);
        }
        random_move(&b.valid_moves(), &mut self.rng)
    }
}
