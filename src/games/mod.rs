//! Game engines.

pub mod tictactoe;
