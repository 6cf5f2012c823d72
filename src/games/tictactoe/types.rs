//! Core domain types for tic-tac-toe.

use super::action::Move;
use super::rules;
use serde::{Deserialize, Serialize};

/// Player in the game.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display, strum::EnumIter,
)]
pub enum Player {
    /// Player X (the human; goes first).
    X,
    /// Player O (the computer opponent; goes second).
    O,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }
}

/// A square on the tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Square {
    /// Empty square.
    Empty,
    /// Square occupied by a player.
    Occupied(Player),
}

/// 3x3 tic-tac-toe board.
///
/// Squares are stored in row-major order:
///
/// ```text
/// 0 1 2
/// 3 4 5
/// 6 7 8
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    /// Squares in row-major order (0-8).
    squares: [Square; 9],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            squares: [Square::Empty; 9],
        }
    }

    /// Gets the square at the given position (0-8).
    pub fn get(&self, pos: usize) -> Option<Square> {
        self.squares.get(pos).copied()
    }

    /// Sets the square at the given position. Caller validates bounds.
    pub(super) fn set(&mut self, pos: usize, square: Square) {
        self.squares[pos] = square;
    }

    /// Checks if a square is empty.
    pub fn is_empty(&self, pos: usize) -> bool {
        matches!(self.get(pos), Some(Square::Empty))
    }

    /// Checks if the board is full.
    pub fn is_full(&self) -> bool {
        self.squares.iter().all(|s| *s != Square::Empty)
    }

    /// Returns all squares as a slice.
    pub fn squares(&self) -> &[Square; 9] {
        &self.squares
    }

    /// Returns the empty positions in ascending order.
    pub fn available_cells(&self) -> Vec<usize> {
        (0..9).filter(|&pos| self.is_empty(pos)).collect()
    }

    /// Counts the occupied squares.
    pub fn marks(&self) -> usize {
        self.squares.iter().filter(|s| **s != Square::Empty).count()
    }

    /// Formats the board as a human-readable string.
    pub fn display(&self) -> String {
        let mut result = String::new();
        for row in 0..3 {
            for col in 0..3 {
                let pos = row * 3 + col;
                let symbol = match self.squares[pos] {
                    Square::Empty => (pos + 1).to_string(),
                    Square::Occupied(player) => player.to_string(),
                };
                result.push_str(&symbol);
                if col < 2 {
                    result.push('|');
                }
            }
            if row < 2 {
                result.push_str("\n-+-+-\n");
            }
        }
        result
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

/// Current status of the game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    /// Game is ongoing.
    InProgress,
    /// Game ended in a win.
    Won {
        /// The winning player.
        player: Player,
        /// The completed line, as board indices.
        line: [usize; 3],
    },
    /// Game ended in a draw.
    Draw,
}

impl GameStatus {
    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Player> {
        match self {
            GameStatus::Won { player, .. } => Some(*player),
            _ => None,
        }
    }
}

/// Complete game state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    /// The board.
    board: Board,
    /// Current player to move.
    current_player: Player,
    /// Game status.
    status: GameStatus,
    /// Move history.
    history: Vec<Move>,
}

impl GameState {
    /// Creates a new game: empty board, X to move, in progress.
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            current_player: Player::X,
            status: GameStatus::InProgress,
            history: Vec::new(),
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the current player.
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    /// Returns the game status.
    pub fn status(&self) -> &GameStatus {
        &self.status
    }

    /// Returns true while the game accepts moves.
    pub fn is_active(&self) -> bool {
        self.status == GameStatus::InProgress
    }

    /// Returns the move history.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Evaluates the terminal condition from the board alone.
    ///
    /// Scans the winning-line table in canonical order; a fully-owned
    /// line wins, a full board with no winner is a draw. Pure, so
    /// calling it repeatedly without an intervening move returns the
    /// same result.
    pub fn evaluate(&self) -> GameStatus {
        if let Some((player, line)) = rules::check_winner(&self.board) {
            GameStatus::Won { player, line }
        } else if self.board.is_full() {
            GameStatus::Draw
        } else {
            GameStatus::InProgress
        }
    }

    /// Places a mark (unchecked - use Game::make_move for validation).
    pub(super) fn apply_move(&mut self, mov: Move) {
        self.board.set(mov.position, Square::Occupied(mov.player));
        self.history.push(mov);
    }

    /// Hands the turn to the other player.
    pub(super) fn flip_turn(&mut self) {
        self.current_player = self.current_player.opponent();
    }

    /// Sets the game status.
    pub(super) fn set_status(&mut self, status: GameStatus) {
        self.status = status;
    }

    /// Restores the initial values: empty board, X to move, in progress.
    pub fn reset(&mut self) {
        *self = Self::new();
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_opponent_round_trips() {
        for player in Player::iter() {
            assert_ne!(player.opponent(), player);
            assert_eq!(player.opponent().opponent(), player);
        }
    }

    #[test]
    fn test_out_of_bounds_get() {
        let board = Board::new();
        assert_eq!(board.get(9), None);
        assert!(!board.is_empty(9));
    }

    #[test]
    fn test_available_cells_ascending() {
        let mut board = Board::new();
        board.set(4, Square::Occupied(Player::X));
        board.set(0, Square::Occupied(Player::O));
        assert_eq!(board.available_cells(), vec![1, 2, 3, 5, 6, 7, 8]);
    }

    #[test]
    fn test_display_shows_marks_and_indices() {
        let mut board = Board::new();
        board.set(4, Square::Occupied(Player::X));
        assert_eq!(board.display(), "1|2|3\n-+-+-\n4|X|6\n-+-+-\n7|8|9");
    }
}
