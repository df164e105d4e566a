use log::debug;

use crate::core::{GameStatus, Player, PlayerMark};
use crate::error::GameError;
use crate::game::tictactoe::TTTBoard;

pub mod tictactoe;

/// Plays a full game from an empty board. `p1` plays the first mark.
pub fn run_game(
    mut p1: Box<dyn Player>,
    mut p2: Box<dyn Player>,
) -> Result<GameStatus, GameError> {
    let mut board = TTTBoard::new();
    let mut status = board.outcome();
    while !status.is_over() {
        let current_player = board.current_player();
        let action = match current_player {
            PlayerMark::First => p1.play(&board)?,
            PlayerMark::Second => p2.play(&board)?,
        };
        debug!("Player {} played {}", current_player, action);
        board.place_mark(action, current_player)?;
        debug!("\n{}", board);
        status = board.outcome();
    }
    debug!("Game ended with {:?}", status);
    Ok(status)
}
