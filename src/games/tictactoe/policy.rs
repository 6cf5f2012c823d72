//! Opponent move selection.
//!
//! The computer opponent is deliberately weakened so the human wins
//! often: most turns it plays a uniformly random square, and even on a
//! strategic turn it only blocks the human half the time. The branch
//! probabilities are part of the observable contract, not tuning noise.
//! There is no minimax or lookahead here on purpose.

use super::rules::find_winning_move;
use super::types::GameState;
use crate::rng::MoveRng;
use tracing::{debug, instrument};

/// Probability of ignoring strategy and playing a random square.
pub const RANDOM_PLAY_CHANCE: f64 = 0.6;

/// Probability of blocking the other player's winning square, checked
/// only after the opponent has no winning move of its own.
pub const BLOCK_CHANCE: f64 = 0.5;

/// Error that can occur when choosing a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum PolicyError {
    /// No empty square is left to play. The caller skipped the
    /// terminal-state check.
    #[display("No move available: the board is full")]
    NoMoveAvailable,
}

impl std::error::Error for PolicyError {}

/// Chooses the next square for the player to move.
///
/// The decision blends three sub-strategies, evaluated in order:
///
/// 1. with probability [`RANDOM_PLAY_CHANCE`], a uniformly random empty
///    square (the boundary is exclusive: a roll of exactly 0.6 plays
///    strategically);
/// 2. otherwise the first square completing one of the mover's own
///    lines, if any;
/// 3. otherwise, with probability [`BLOCK_CHANCE`], the first square
///    that would complete a line for the other player;
/// 4. otherwise a uniformly random empty square.
///
/// Randomness comes exclusively from `rng`, so a seeded or scripted
/// source makes the choice reproducible.
///
/// # Errors
///
/// Fails with [`PolicyError::NoMoveAvailable`] on a full board; callers
/// must check the terminal state first.
#[instrument(skip(state, rng), fields(to_move = %state.current_player()))]
pub fn choose_move<R: MoveRng>(state: &GameState, rng: &mut R) -> Result<usize, PolicyError> {
    let open = state.board().available_cells();
    if open.is_empty() {
        return Err(PolicyError::NoMoveAvailable);
    }

    if rng.roll() < RANDOM_PLAY_CHANCE {
        let pos = open[rng.pick_index(open.len())];
        debug!(position = pos, "random move");
        return Ok(pos);
    }

    let mover = state.current_player();
    if let Some(pos) = find_winning_move(state.board(), mover) {
        debug!(position = pos, "winning move");
        return Ok(pos);
    }

    if rng.roll() < BLOCK_CHANCE
        && let Some(pos) = find_winning_move(state.board(), mover.opponent())
    {
        debug!(position = pos, "blocking move");
        return Ok(pos);
    }

    let pos = open[rng.pick_index(open.len())];
    debug!(position = pos, "fallback random move");
    Ok(pos)
}

#[cfg(test)]
mod tests {
    use super::super::{Game, Move, Player};
    use super::*;

    /// Replays pre-decided draws, failing the test on overruns.
    struct ScriptedRng {
        rolls: std::vec::IntoIter<f64>,
        picks: std::vec::IntoIter<usize>,
    }

    impl ScriptedRng {
        fn new(rolls: &[f64], picks: &[usize]) -> Self {
            Self {
                rolls: rolls.to_vec().into_iter(),
                picks: picks.to_vec().into_iter(),
            }
        }
    }

    impl MoveRng for ScriptedRng {
        fn roll(&mut self) -> f64 {
            self.rolls.next().expect("scripted roll exhausted")
        }

        fn pick_index(&mut self, len: usize) -> usize {
            let pick = self.picks.next().expect("scripted pick exhausted");
            assert!(pick < len, "scripted pick out of range");
            pick
        }
    }

    /// Plays out the given moves, alternating from X, panicking on any
    /// illegal move.
    fn game_after(moves: &[usize]) -> Game {
        let mut game = Game::new();
        for &pos in moves {
            let player = game.state().current_player();
            game.make_move(Move::new(player, pos)).unwrap();
        }
        game
    }

    #[test]
    fn test_roll_below_threshold_plays_random() {
        // X at 4; O to move. 0.59 stays on the random branch even with
        // a winning or blocking square on the board.
        let game = game_after(&[4]);
        let mut rng = ScriptedRng::new(&[0.59], &[0]);
        let pos = choose_move(game.state(), &mut rng).unwrap();
        assert_eq!(pos, 0);
    }

    #[test]
    fn test_roll_at_threshold_plays_strategically() {
        // O owns 0 and 1; the boundary roll of exactly 0.6 must take
        // the strategic branch and complete the line at 2.
        let game = game_after(&[4, 0, 5, 1, 8]);
        assert_eq!(game.state().current_player(), Player::O);
        let mut rng = ScriptedRng::new(&[0.6], &[]);
        assert_eq!(choose_move(game.state(), &mut rng).unwrap(), 2);
    }

    #[test]
    fn test_winning_move_taken_before_block_roll() {
        // Both sides have an open two-in-line; the mover's own win is
        // taken without drawing the block roll.
        let game = game_after(&[3, 0, 4, 1]);
        assert_eq!(game.state().current_player(), Player::X);
        let mut rng = ScriptedRng::new(&[0.9], &[]);
        assert_eq!(choose_move(game.state(), &mut rng).unwrap(), 5);
    }

    #[test]
    fn test_block_attempted_on_low_second_roll() {
        // X at 0 and 1, O at 4; O has no win, rolls 0.9 then 0.4 and
        // blocks X at 2.
        let game = game_after(&[0, 4, 1]);
        assert_eq!(game.state().current_player(), Player::O);
        let mut rng = ScriptedRng::new(&[0.9, 0.4], &[]);
        assert_eq!(choose_move(game.state(), &mut rng).unwrap(), 2);
    }

    #[test]
    fn test_block_suppressed_on_high_second_roll() {
        // Same position, but the block roll of exactly 0.5 fails the
        // strict comparison and the move falls back to random.
        let game = game_after(&[0, 4, 1]);
        let mut rng = ScriptedRng::new(&[0.9, 0.5], &[2]);
        let open = game.available_cells();
        assert_eq!(choose_move(game.state(), &mut rng).unwrap(), open[2]);
    }

    #[test]
    fn test_full_board_fails() {
        // Draw position: X O X / X O O / O X X filled move by move.
        let game = game_after(&[0, 1, 2, 4, 3, 5, 7, 6, 8]);
        assert!(game.available_cells().is_empty());
        let mut rng = ScriptedRng::new(&[], &[]);
        assert_eq!(
            choose_move(game.state(), &mut rng),
            Err(PolicyError::NoMoveAvailable)
        );
    }

    #[test]
    fn test_single_empty_cell_always_chosen() {
        // Eight squares filled without a winner; every rng script must
        // land on the lone empty square.
        let game = game_after(&[0, 1, 2, 4, 3, 5, 7, 6]);
        assert_eq!(game.available_cells(), vec![8]);
        for rolls in [&[0.0][..], &[0.9, 0.0][..], &[0.9, 0.9][..]] {
            let mut rng = ScriptedRng::new(rolls, &[0]);
            assert_eq!(choose_move(game.state(), &mut rng).unwrap(), 8);
        }
    }
}
