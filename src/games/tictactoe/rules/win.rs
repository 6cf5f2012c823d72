//! Win detection logic for tic-tac-toe.

use super::super::{Board, Player, Square};
use tracing::instrument;

/// The 8 winning lines: 3 rows, 3 columns, 2 diagonals.
///
/// Table order is canonical: every scan walks it top to bottom and the
/// first qualifying line wins ties.
pub const WINNING_LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

/// Checks if there is a winner on the board.
///
/// Returns the winning player together with the first fully-owned line
/// in table order, or `None` if no line is complete.
#[instrument]
pub fn check_winner(board: &Board) -> Option<(Player, [usize; 3])> {
    for line in WINNING_LINES {
        let [a, b, c] = line;
        if let Some(Square::Occupied(player)) = board.get(a)
            && board.get(b) == Some(Square::Occupied(player))
            && board.get(c) == Some(Square::Occupied(player))
        {
            return Some((player, line));
        }
    }

    None
}

/// Finds a move that would complete a line for `player`.
///
/// Scans the line table in order; the first line holding exactly two of
/// the player's marks and one empty square yields that empty index.
#[instrument]
pub fn find_winning_move(board: &Board, player: Player) -> Option<usize> {
    for line in WINNING_LINES {
        let mut owned = 0;
        let mut open = None;
        for pos in line {
            match board.get(pos) {
                Some(Square::Occupied(p)) if p == player => owned += 1,
                Some(Square::Empty) => open = Some(pos),
                _ => {}
            }
        }
        if owned == 2
            && let Some(pos) = open
        {
            return Some(pos);
        }
    }

    None
}
