//! The driver side of a game: whose turn it is, which AI (if any) plays the
//! second mark, and the running score across rounds.
//!
//! A front end owns one `Session` per visit to the mode menu. Leaving for the
//! menu drops it, which is what resets the score.

use std::fmt::Display;

use clap::ValueEnum;
use log::{debug, info};
use serde::{Deserialize, Serialize};

use crate::core::{GameStatus, Player, PlayerMark};
use crate::error::GameError;
use crate::game::tictactoe::{TTTAddr, TTTBoard, WinLine};
use crate::player::Strategy;

/// The entries of the mode menu
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GameMode {
    /// Two humans taking turns
    Friend,
    /// Random AI
    Easy,
    /// Heuristic AI
    Medium,
    /// Minimax AI
    Hard,
}

impl GameMode {
    pub fn strategy(&self) -> Option<Strategy> {
        match self {
            GameMode::Friend => None,
            GameMode::Easy => Some(Strategy::Random),
            GameMode::Medium => Some(Strategy::Heuristic),
            GameMode::Hard => Some(Strategy::Optimal),
        }
    }
}

impl Display for GameMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            GameMode::Friend => "friend",
            GameMode::Easy => "easy",
            GameMode::Medium => "medium",
            GameMode::Hard => "hard",
        };
        write!(f, "{name}")
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Score {
    pub first_wins: u32,
    pub second_wins: u32,
}

impl Score {
    /// Draws leave the score alone
    pub fn record(&mut self, status: GameStatus) {
        match status.winner() {
            Some(PlayerMark::First) => self.first_wins += 1,
            Some(PlayerMark::Second) => self.second_wins += 1,
            None => {}
        }
    }
}

/// What a single accepted move did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveReport {
    pub mark: PlayerMark,
    pub addr: TTTAddr,
    pub status: GameStatus,
}

/// Everything a presentation layer needs to redraw
#[derive(Debug, Clone, Serialize)]
pub struct SessionSnapshot {
    pub mode: GameMode,
    pub cells: [Option<PlayerMark>; 9],
    pub turn: PlayerMark,
    pub status: GameStatus,
    pub winning_line: Option<WinLine>,
    pub score: Score,
}

pub struct Session {
    mode: GameMode,
    board: TTTBoard,
    status: GameStatus,
    score: Score,
    ai: Option<Box<dyn Player>>,
    ai_marker: PlayerMark,
}

impl Session {
    /// In AI modes the computer plays the second mark.
    pub fn new(mode: GameMode, seed: Option<u64>) -> Self {
        let ai_marker = PlayerMark::Second;
        let board = TTTBoard::new();
        Self {
            mode,
            board,
            status: board.outcome(),
            score: Score::default(),
            ai: mode.strategy().map(|s| s.player(ai_marker, seed)),
            ai_marker,
        }
    }

    pub fn mode(&self) -> GameMode {
        self.mode
    }

    pub fn board(&self) -> &TTTBoard {
        &self.board
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn score(&self) -> Score {
        self.score
    }

    pub fn turn(&self) -> PlayerMark {
        self.board.current_player()
    }

    pub fn is_over(&self) -> bool {
        self.status.is_over()
    }

    pub fn ai_marker(&self) -> Option<PlayerMark> {
        self.ai.as_ref().map(|_| self.ai_marker)
    }

    /// True when the next move belongs to the computer
    pub fn awaiting_ai(&self) -> bool {
        self.ai.is_some() && !self.is_over() && self.turn() == self.ai_marker
    }

    /// A click on cell `index`.
    /// Clicks that cannot be played (occupied cell, finished round, the AI's turn)
    /// are ignored and give `Ok(None)`. Only a cell outside the board is an error.
    pub fn play_human(&mut self, index: usize) -> Result<Option<MoveReport>, GameError> {
        let addr = TTTAddr(index);
        if index >= 9 {
            // let the board produce the error
            return self.board.place(addr, self.turn()).map(|_| None);
        }
        if self.is_over() || self.awaiting_ai() || self.board.is_occupied(addr) {
            debug!("Ignoring click on cell {}", index);
            return Ok(None);
        }
        self.apply(addr).map(Some)
    }

    /// Let the AI pick and play its move
    pub fn play_ai(&mut self) -> Result<MoveReport, GameError> {
        if !self.awaiting_ai() {
            return Err(GameError::PreconditionViolation("it is not the AI's turn"));
        }
        let ai = self
            .ai
            .as_mut()
            .ok_or(GameError::PreconditionViolation("no AI in this mode"))?;
        let addr = ai.play(&self.board)?;
        self.apply(addr)
    }

    fn apply(&mut self, addr: TTTAddr) -> Result<MoveReport, GameError> {
        let mark = self.turn();
        self.board.place_mark(addr, mark)?;
        self.status = self.board.outcome();
        debug!("Player {} played {}", mark, addr);
        if self.status.is_over() {
            self.score.record(self.status);
            info!("Round over: {}", self.status);
        }
        Ok(MoveReport {
            mark,
            addr,
            status: self.status,
        })
    }

    /// A fresh board, same mode and score
    pub fn new_round(&mut self) {
        self.board = TTTBoard::new();
        self.status = self.board.outcome();
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        let winning_line = match self.status {
            GameStatus::Won(_, line) => Some(line),
            _ => None,
        };
        SessionSnapshot {
            mode: self.mode,
            cells: *self.board.cells(),
            turn: self.turn(),
            status: self.status,
            winning_line,
            score: self.score,
        }
    }
}
