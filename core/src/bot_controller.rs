use crate::board::{Board, completing_pairs};
use crate::game_rng::GameRng;
use crate::types::{GameError, Mark};

// No line can be one move from completion with fewer than two taken cells.
const MIN_TAKEN_FOR_THREAT: usize = 2;

pub fn calculate_move(
    board: &Board,
    own_mark: Mark,
    opponent_mark: Mark,
    rng: &mut GameRng,
) -> Result<usize, GameError> {
    let empty_positions = board.empty_positions();
    if empty_positions.is_empty() {
        return Err(GameError::NoMovesAvailable);
    }

    if board.taken_positions().len() >= MIN_TAKEN_FOR_THREAT {
        if let Some(position) = find_completing_move(board, &empty_positions, own_mark) {
            return Ok(position);
        }
        if let Some(position) = find_completing_move(board, &empty_positions, opponent_mark) {
            return Ok(position);
        }
    }

    let index = rng.choose_index(empty_positions.len());
    Ok(empty_positions[index])
}

fn find_completing_move(board: &Board, empty_positions: &[usize], mark: Mark) -> Option<usize> {
    empty_positions.iter().copied().find(|&position| {
        completing_pairs(position)
            .iter()
            .any(|&(first, second)| {
                board.mark_at(first) == Some(mark) && board.mark_at(second) == Some(mark)
            })
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board_with(marks: &[(usize, Mark)]) -> Board {
        let mut board = Board::new();
        for &(position, mark) in marks {
            board.mark(position, mark).unwrap();
        }
        board
    }

    #[test]
    fn test_attack_completes_own_line() {
        let board = board_with(&[(1, Mark::X), (2, Mark::X)]);
        let mut rng = GameRng::new(0);

        let position = calculate_move(&board, Mark::X, Mark::O, &mut rng).unwrap();

        assert_eq!(position, 3);
    }

    #[test]
    fn test_defend_blocks_opponent_line() {
        let board = board_with(&[(1, Mark::O), (2, Mark::O), (5, Mark::X)]);
        let mut rng = GameRng::new(0);

        let position = calculate_move(&board, Mark::X, Mark::O, &mut rng).unwrap();

        assert_eq!(position, 3);
    }

    #[test]
    fn test_attack_takes_priority_over_defense() {
        // O threatens 3 via 1-2-3, but X can win at 9 via 7-8-9.
        let board = board_with(&[
            (1, Mark::O),
            (2, Mark::O),
            (7, Mark::X),
            (8, Mark::X),
        ]);
        let mut rng = GameRng::new(0);

        let position = calculate_move(&board, Mark::X, Mark::O, &mut rng).unwrap();

        assert_eq!(position, 9);
    }

    #[test]
    fn test_lowest_open_position_wins_ties_between_attacks() {
        // X can complete 1-2-3 at 3 or 1-4-7 at 7; the ascending scan finds 3.
        let board = board_with(&[
            (1, Mark::X),
            (2, Mark::X),
            (4, Mark::X),
            (5, Mark::O),
            (9, Mark::O),
        ]);
        let mut rng = GameRng::new(0);

        let position = calculate_move(&board, Mark::X, Mark::O, &mut rng).unwrap();

        assert_eq!(position, 3);
    }

    #[test]
    fn test_random_move_when_board_is_too_sparse_to_threaten() {
        let board = board_with(&[(5, Mark::X)]);
        let mut rng = GameRng::new(11);

        let position = calculate_move(&board, Mark::O, Mark::X, &mut rng).unwrap();

        assert!(board.empty_positions().contains(&position));
    }

    #[test]
    fn test_random_move_is_deterministic_for_a_seed() {
        let board = board_with(&[(5, Mark::X)]);

        let mut first_rng = GameRng::new(123);
        let mut second_rng = GameRng::new(123);
        let first = calculate_move(&board, Mark::O, Mark::X, &mut first_rng).unwrap();
        let second = calculate_move(&board, Mark::O, Mark::X, &mut second_rng).unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn test_random_move_when_no_line_is_one_away() {
        // Two taken but neither player holds two in any line.
        let board = board_with(&[(1, Mark::X), (9, Mark::O)]);
        let mut rng = GameRng::new(3);

        let position = calculate_move(&board, Mark::O, Mark::X, &mut rng).unwrap();

        assert!(board.empty_positions().contains(&position));
    }

    #[test]
    fn test_full_board_has_no_moves_available() {
        let board = board_with(&[
            (1, Mark::X),
            (2, Mark::O),
            (3, Mark::X),
            (4, Mark::X),
            (5, Mark::O),
            (6, Mark::O),
            (7, Mark::O),
            (8, Mark::X),
            (9, Mark::X),
        ]);
        let mut rng = GameRng::new(0);

        let result = calculate_move(&board, Mark::X, Mark::O, &mut rng);

        assert_eq!(result, Err(GameError::NoMovesAvailable));
    }
}
