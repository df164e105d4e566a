use log::debug;

use crate::core::{Player, PlayerMark};
use crate::error::GameError;
use crate::game::tictactoe::{TTTAddr, TTTBoard};

/// Exhaustive minimax over the whole remaining game tree
pub struct MinMaxAi {
    my_marker: PlayerMark,
    /// A performance counter. Number of terminal boards scored.
    n_leafs_evaluated: usize,
}

impl MinMaxAi {
    pub fn new(mark: PlayerMark) -> Self {
        Self {
            my_marker: mark,
            n_leafs_evaluated: 0,
        }
    }

    pub fn n_leafs_evaluated(&self) -> usize {
        self.n_leafs_evaluated
    }

    /// It is good to win. It is bad to lose.
    /// If we can win, we want to win fast,
    /// If we must lose, we want to lose slowly
    fn terminal_score(&mut self, b: &TTTBoard, depth: i32) -> Option<i32> {
        let score = if b.has_won(self.my_marker) {
            10 - depth
        } else if b.has_won(self.my_marker.other()) {
            depth - 10
        } else if b.is_full() {
            0
        } else {
            return None;
        };
        self.n_leafs_evaluated += 1;
        Some(score)
    }

    /// compute the best move and its score by use of minimax
    /// Assumes I want to maximize my score, and the opponent makes moves to minimize it.
    /// Ties go to the lowest cell index.
    fn minimax(
        &mut self,
        node: &TTTBoard,
        mover: PlayerMark,
        depth: i32,
    ) -> (Option<TTTAddr>, i32) {
        if let Some(s) = self.terminal_score(node, depth) {
            return (None, s);
        }
        let my_move = mover == self.my_marker;
        let mut best: Option<(TTTAddr, i32)> = None;
        for addr in node.valid_moves() {
            let Ok(child) = node.place(addr, mover) else {
                continue;
            };
            let (_, score) = self.minimax(&child, mover.other(), depth + 1);
            let improves = match best {
                None => true,
                Some((_, best_score)) if my_move => score > best_score,
                Some((_, best_score)) => score < best_score,
            };
            if improves {
                best = Some((addr, score));
            }
        }
        match best {
            Some((addr, score)) => (Some(addr), score),
            None => (None, 0),
        }
    }

    /// The move and its minimax score, for callers that want to inspect the evaluation
    pub fn evaluate(&mut self, b: &TTTBoard) -> Result<(TTTAddr, i32), GameError> {
        super::check_playable(b)?;
        match self.minimax(b, self.my_marker, 0) {
            (Some(addr), score) => Ok((addr, score)),
            (None, _) => Err(GameError::PreconditionViolation("board is full")),
        }
    }
}

impl Player for MinMaxAi {
    fn play(&mut self, b: &TTTBoard) -> Result<TTTAddr, GameError> {
        let (addr, score) = self.evaluate(b)?;
        debug!("Minimax AI {} plays {} with score {}", self.my_marker, addr, score);
        Ok(addr)
    }
}

impl Drop for MinMaxAi {
    fn drop(&mut self) {
        debug!("MinMaxAi evaluated {} leaf nodes", self.n_leafs_evaluated);
    }
}

#[cfg(test)]
mod test {
    use std::str::FromStr;

    use super::*;

    #[test]
    fn can_find_winning_move() {
        let b = TTTBoard::from_str("   xx o o").unwrap();
        let mut ai = MinMaxAi::new(PlayerMark::First);
        assert_eq!(ai.play(&b).unwrap(), TTTAddr(5));
    }

    #[test]
    fn can_block_winning_move() {
        let b = TTTBoard::from_str("oo  x  x ").unwrap();
        let mut ai = MinMaxAi::new(PlayerMark::First);
        assert_eq!(ai.play(&b).unwrap(), TTTAddr(2));
    }

    #[test]
    fn prefers_the_faster_win() {
        // O wins at 2 right now; other lines only win later
        let b = TTTBoard::from_str("oo xx  x ").unwrap();
        let mut ai = MinMaxAi::new(PlayerMark::Second);
        let (addr, score) = ai.evaluate(&b).unwrap();
        assert_eq!(addr, TTTAddr(2));
        assert_eq!(score, 9);
    }

    #[test]
    fn empty_board_is_a_draw_and_opens_in_the_corner() {
        let mut ai = MinMaxAi::new(PlayerMark::First);
        let (addr, score) = ai.evaluate(&TTTBoard::new()).unwrap();
        assert_eq!(score, 0);
        // every opening draws, so the lowest index wins the tie
        assert_eq!(addr, TTTAddr(0));
        assert!(ai.n_leafs_evaluated() > 0);
    }

    #[test]
    fn lost_position_still_picks_a_move() {
        // X threatens 1, 6 and 8 at once; O can only block one
        let b = TTTBoard::from_str("x xoxo   ").unwrap();
        let mut ai = MinMaxAi::new(PlayerMark::Second);
        let (addr, score) = ai.evaluate(&b).unwrap();
        assert_eq!(score, -8);
        assert_eq!(addr, TTTAddr(1));
    }

    #[test]
    fn full_board_is_an_error() {
        let b = TTTBoard::from_str("xoxxoooxx").unwrap();
        let mut ai = MinMaxAi::new(PlayerMark::First);
        assert!(matches!(
            ai.play(&b),
            Err(GameError::PreconditionViolation(_))
        ));
    }
}
