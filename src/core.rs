//! The core abstractions for this application
//!

use std::fmt::Display;

use enum_iterator::Sequence;
use serde::{Deserialize, Serialize};

use crate::error::GameError;
use crate::game::tictactoe::{TTTAddr, TTTBoard, WinLine};

/// The two marks. `First` always opens the game.
#[derive(
    Clone, Copy, PartialEq, Eq, Debug, Hash, PartialOrd, Ord, Sequence, Serialize, Deserialize,
)]
pub enum PlayerMark {
    First,
    Second,
}

impl PlayerMark {
    pub fn other(&self) -> Self {
        match *self {
            Self::First => Self::Second,
            Self::Second => Self::First,
        }
    }
}

impl Display for PlayerMark {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PlayerMark::First => write!(f, "X"),
            PlayerMark::Second => write!(f, "O"),
        }
    }
}

/// The Player trait is the struct that represents a player.
pub trait Player {
    /// The play function is the main mechanic for the AIs
    /// You observe the whole board through a reference, and return the cell where to play.
    /// Boards that are full or already decided have no move and give an error.
    fn play(&mut self, b: &TTTBoard) -> Result<TTTAddr, GameError>;
}

/// Computed fresh from the board after every placement, never stored on it.
#[derive(Debug, Clone, Copy, PartialEq, Hash, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    InProgress,
    Won(PlayerMark, WinLine),
    Draw,
}

impl GameStatus {
    pub fn is_over(&self) -> bool {
        !matches!(self, GameStatus::InProgress)
    }

    pub fn winner(&self) -> Option<PlayerMark> {
        match self {
            GameStatus::Won(mark, _) => Some(*mark),
            _ => None,
        }
    }
}

impl Display for GameStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameStatus::InProgress => write!(f, "in progress"),
            GameStatus::Won(mark, _) => write!(f, "{mark} wins!"),
            GameStatus::Draw => write!(f, "It's a draw!"),
        }
    }
}
