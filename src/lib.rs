//! Tic-tac-toe with a computer opponent at three levels: random moves,
//! a simple rule cascade, and exhaustive minimax.

pub mod core;
pub mod error;
pub mod game;
pub mod player;
pub mod session;
