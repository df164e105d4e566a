pub mod heuristics;
pub mod min_max;
pub mod random;
pub mod strategy;

pub use heuristics::HeuristicAi;
pub use min_max::MinMaxAi;
pub use random::RandomAi;
pub use strategy::{select_move, select_move_seeded, Strategy};

use crate::error::GameError;
use crate::game::tictactoe::TTTBoard;

/// Every policy needs an empty cell and an undecided game to choose a move.
pub(crate) fn check_playable(b: &TTTBoard) -> Result<(), GameError> {
    if b.is_full() {
        Err(GameError::PreconditionViolation("board is full"))
    } else if b.outcome().is_over() {
        Err(GameError::PreconditionViolation("game is already decided"))
    } else {
        Ok(())
    }
}
