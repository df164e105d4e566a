use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::core::{GameStatus, PlayerMark};
use crate::error::{GameError, IllegalMoveReason};

/// Represents a coordinate on the board
///
///  0 1 2
///  3 4 5
///  6 7 8
///
/// invariant: the number inside must be 0-8 once it has passed through `TTTBoard::place`
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub struct TTTAddr(pub usize);

impl std::fmt::Display for TTTAddr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self.0)
    }
}

/// Three cells in a row
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash, Serialize, Deserialize)]
pub struct WinLine(pub [usize; 3]);

impl WinLine {
    pub fn contains(&self, addr: TTTAddr) -> bool {
        self.0.contains(&addr.0)
    }
}

/// 3 rows (top to bottom), 3 columns (left to right) and two diagonals
/// (first the one that points to southeast, then the one to southwest).
/// Lookups that report a line report the first match in this order.
pub const WIN_LINES: [WinLine; 8] = [
    WinLine([0, 1, 2]),
    WinLine([3, 4, 5]),
    WinLine([6, 7, 8]),
    WinLine([0, 3, 6]),
    WinLine([1, 4, 7]),
    WinLine([2, 5, 8]),
    WinLine([0, 4, 8]),
    WinLine([2, 4, 6]),
];

pub const CENTER: TTTAddr = TTTAddr(4);
pub const CORNERS: [TTTAddr; 4] = [TTTAddr(0), TTTAddr(2), TTTAddr(6), TTTAddr(8)];

/// The board entries from top left row wise to bottom right.
/// `None` is an empty cell.
#[derive(Clone, Copy, Debug, Default, Hash, Eq, PartialEq, Serialize, Deserialize)]
pub struct TTTBoard([Option<PlayerMark>; 9]);

impl TTTBoard {
    pub fn new() -> Self {
        Self([None; 9])
    }

    pub fn cells(&self) -> &[Option<PlayerMark>; 9] {
        &self.0
    }

    pub fn get(&self, addr: TTTAddr) -> Option<PlayerMark> {
        self.0.get(addr.0).copied().flatten()
    }

    /// Out of range cells count as unoccupied; `place` rejects them separately.
    pub fn is_occupied(&self, addr: TTTAddr) -> bool {
        self.get(addr).is_some()
    }

    /// The coordinates where a marker may still go, in ascending order.
    pub fn valid_moves(&self) -> Vec<TTTAddr> {
        self.0
            .iter()
            .enumerate()
            .filter_map(|(num, &mark)| {
                if mark.is_none() {
                    Some(TTTAddr(num))
                } else {
                    None
                }
            })
            .collect()
    }

    /// Returns a copy of the board with `marker` at `addr`. `self` is left as is.
    pub fn place(&self, addr: TTTAddr, marker: PlayerMark) -> Result<Self, GameError> {
        let mut next = *self;
        next.place_mark(addr, marker)?;
        Ok(next)
    }

    /// Puts `marker` at `addr`. On error the board is unchanged.
    pub fn place_mark(&mut self, addr: TTTAddr, marker: PlayerMark) -> Result<(), GameError> {
        let slot = self.0.get_mut(addr.0).ok_or(GameError::IllegalMove {
            index: addr.0,
            reason: IllegalMoveReason::OutOfRange,
        })?;
        if slot.is_some() {
            return Err(GameError::IllegalMove {
                index: addr.0,
                reason: IllegalMoveReason::Occupied,
            });
        }
        *slot = Some(marker);
        Ok(())
    }

    pub fn has_won(&self, mark: PlayerMark) -> bool {
        self.winning_line(mark).is_some()
    }

    /// The first line in `WIN_LINES` order that `mark` has filled
    pub fn winning_line(&self, mark: PlayerMark) -> Option<WinLine> {
        WIN_LINES
            .iter()
            .find(|line| line.0.iter().all(|&i| self.0[i] == Some(mark)))
            .copied()
    }

    pub fn is_full(&self) -> bool {
        self.0.iter().all(|q| q.is_some())
    }

    /// The mark that moved last is checked first, so a board where both marks
    /// have a line reports the player who completed theirs most recently.
    pub fn outcome(&self) -> GameStatus {
        let last = self.current_player().other();
        for mark in [last, last.other()] {
            if let Some(line) = self.winning_line(mark) {
                return GameStatus::Won(mark, line);
            }
        }
        if self.is_full() {
            GameStatus::Draw
        } else {
            GameStatus::InProgress
        }
    }

    /// Whose turn it is, derived from the mark counts.
    pub fn current_player(&self) -> PlayerMark {
        if self.count(PlayerMark::First) > self.count(PlayerMark::Second) {
            PlayerMark::Second
        } else {
            PlayerMark::First
        }
    }

    pub fn count(&self, mark: PlayerMark) -> usize {
        self.0.iter().filter(|&&q| q == Some(mark)).count()
    }

    pub fn n_moves_made(&self) -> usize {
        self.0.iter().filter(|&q| q.is_some()).count()
    }
}

/// Parses 9 characters, top left to bottom right.
/// `x` is the first player, `o` the second, and a blank or `.` is an empty cell.
impl FromStr for TTTBoard {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = |reason: String| GameError::InvalidBoard {
            input: s.to_string(),
            reason,
        };
        let n_chars = s.chars().count();
        if n_chars != 9 {
            return Err(invalid(format!("expected 9 cells, got {n_chars}")));
        }
        let mut b = Self::new();
        for (num, c) in s.chars().enumerate() {
            b.0[num] = match c.to_ascii_lowercase() {
                'x' => Some(PlayerMark::First),
                'o' => Some(PlayerMark::Second),
                ' ' | '.' => None,
                _ => return Err(invalid(format!("unexpected character {c:?} at {num}"))),
            };
        }
        let n_first = b.count(PlayerMark::First);
        let n_second = b.count(PlayerMark::Second);
        if n_first != n_second && n_first != n_second + 1 {
            return Err(invalid(format!(
                "X={n_first}, O={n_second} (must be equal or X ahead by 1)"
            )));
        }
        Ok(b)
    }
}

impl std::fmt::Display for TTTBoard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let m = |m| match m {
            None => ' ',
            Some(PlayerMark::First) => 'X',
            Some(PlayerMark::Second) => 'O',
        };
        writeln!(f, " ------- ")?;
        for row in self.0.chunks(3) {
            write!(f, "| ")?;
            row.iter().try_for_each(|&mark| write!(f, "{} ", m(mark)))?;
            writeln!(f, "|")?;
        }
        writeln!(f, " ------- ")
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn empty_board_is_in_progress() {
        let b = TTTBoard::new();
        assert_eq!(b.outcome(), GameStatus::InProgress);
        assert_eq!(b.current_player(), PlayerMark::First);
        assert_eq!(b.valid_moves().len(), 9);
    }

    #[test]
    fn place_returns_new_board() {
        let b = TTTBoard::new();
        let b2 = b.place(TTTAddr(4), PlayerMark::First).unwrap();
        assert!(!b.is_occupied(TTTAddr(4)));
        assert!(b2.is_occupied(TTTAddr(4)));
        assert_eq!(b2.current_player(), PlayerMark::Second);
    }

    #[test]
    fn place_on_occupied_cell_fails_and_keeps_board() {
        let mut b = TTTBoard::from_str("x   o    ").unwrap();
        let before = b;
        let err = b.place_mark(TTTAddr(0), PlayerMark::First).unwrap_err();
        assert_eq!(
            err,
            GameError::IllegalMove {
                index: 0,
                reason: IllegalMoveReason::Occupied
            }
        );
        assert_eq!(b, before);
        assert!(b.place(TTTAddr(4), PlayerMark::Second).is_err());
    }

    #[test]
    fn place_out_of_range_fails() {
        let b = TTTBoard::new();
        let err = b.place(TTTAddr(9), PlayerMark::First).unwrap_err();
        assert_eq!(
            err,
            GameError::IllegalMove {
                index: 9,
                reason: IllegalMoveReason::OutOfRange
            }
        );
        assert!(!b.is_occupied(TTTAddr(42)));
    }

    #[test]
    fn detects_every_line() {
        for line in WIN_LINES {
            let mut b = TTTBoard::new();
            for i in line.0 {
                b.place_mark(TTTAddr(i), PlayerMark::Second).unwrap();
            }
            assert!(b.has_won(PlayerMark::Second));
            assert!(!b.has_won(PlayerMark::First));
            assert_eq!(b.winning_line(PlayerMark::Second), Some(line));
        }
    }

    #[test]
    fn full_board_without_line_is_draw() {
        let b = TTTBoard::from_str("xoxxoooxx").unwrap();
        assert!(b.is_full());
        assert!(!b.has_won(PlayerMark::First));
        assert!(!b.has_won(PlayerMark::Second));
        assert_eq!(b.outcome(), GameStatus::Draw);
    }

    #[test]
    fn win_on_last_cell_beats_draw() {
        let b = TTTBoard::from_str("xoxoxoxxo").unwrap();
        assert!(b.is_full());
        assert_eq!(
            b.outcome(),
            GameStatus::Won(PlayerMark::First, WinLine([2, 4, 6]))
        );
    }

    #[test]
    fn reports_first_of_simultaneous_lines() {
        // X completes the top row and the left column with the corner
        let b = TTTBoard::from_str("xxxxooxoo").unwrap();
        assert_eq!(b.winning_line(PlayerMark::First), Some(WinLine([0, 1, 2])));
        assert_eq!(
            b.outcome(),
            GameStatus::Won(PlayerMark::First, WinLine([0, 1, 2]))
        );
    }

    #[test]
    fn outcome_checks_last_mover_first() {
        // not reachable in play, but both lines are present and O moved last
        let b = TTTBoard::from_str("xxxooo   ").unwrap();
        assert_eq!(
            b.outcome(),
            GameStatus::Won(PlayerMark::Second, WinLine([3, 4, 5]))
        );
    }

    #[test]
    fn parse_rejects_bad_input() {
        assert!(matches!(
            TTTBoard::from_str("xx"),
            Err(GameError::InvalidBoard { .. })
        ));
        assert!(matches!(
            TTTBoard::from_str("xxq      "),
            Err(GameError::InvalidBoard { .. })
        ));
        assert!(matches!(
            TTTBoard::from_str("xx       "),
            Err(GameError::InvalidBoard { .. })
        ));
        assert!(matches!(
            TTTBoard::from_str("o        "),
            Err(GameError::InvalidBoard { .. })
        ));
        assert!(TTTBoard::from_str("x.o......").is_ok());
    }

    #[test]
    fn display_draws_grid() {
        let b = TTTBoard::from_str("x   o    ").unwrap();
        let s = b.to_string();
        assert!(s.contains("| X     |"));
        assert!(s.contains("|   O   |"));
    }
}
