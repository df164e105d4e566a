use log::debug;
use rand::{rngs::StdRng, seq::SliceRandom, SeedableRng};

use crate::core::Player;
use crate::error::GameError;
use crate::game::tictactoe::{TTTAddr, TTTBoard};

/// Picks uniformly among the empty cells
pub struct RandomAi<R> {
    rng: R,
}

/// Shared by the random and heuristic players
pub(crate) fn random_move<R: rand::Rng>(
    moves: &[TTTAddr],
    rng: &mut R,
) -> Result<TTTAddr, GameError> {
    moves
        .choose(rng)
        .copied()
        .ok_or(GameError::PreconditionViolation("board is full"))
}

impl<R: rand::Rng> Player for RandomAi<R> {
    fn play(&mut self, b: &TTTBoard) -> Result<TTTAddr, GameError> {
        super::check_playable(b)?;
        let action = random_move(&b.valid_moves(), &mut self.rng)?;
        debug!("Random AI plays {}", action);
        Ok(action)
    }
}

impl<R: rand::Rng> RandomAi<R> {
    pub fn with_rng(rng: R) -> Self {
        Self { rng }
    }
}

impl RandomAi<StdRng> {
    pub fn new(seed: Option<u64>) -> Self {
        Self {
            rng: match seed {
                None => StdRng::from_entropy(),
                Some(seed) => StdRng::seed_from_u64(seed),
            },
        }
    }
}

#[cfg(test)]
mod test {
    use std::str::FromStr;

    use super::*;

    #[test]
    fn only_plays_empty_cells() {
        let b = TTTBoard::from_str("xoxo xoxo").unwrap();
        let mut ai = RandomAi::new(Some(7));
        for _ in 0..20 {
            assert_eq!(ai.play(&b).unwrap(), TTTAddr(4));
        }
    }

    #[test]
    fn same_seed_same_moves() {
        let b = TTTBoard::new();
        let mut a = RandomAi::new(Some(42));
        let mut c = RandomAi::new(Some(42));
        for _ in 0..10 {
            assert_eq!(a.play(&b).unwrap(), c.play(&b).unwrap());
        }
    }

    #[test]
    fn full_board_is_an_error() {
        let b = TTTBoard::from_str("xoxxoooxx").unwrap();
        let mut ai = RandomAi::new(Some(1));
        assert!(matches!(
            ai.play(&b),
            Err(GameError::PreconditionViolation(_))
        ));
    }
}
