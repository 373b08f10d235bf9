use crate::board::{Board, completing_pairs};
use crate::types::Mark;

pub fn check_win(board: &Board, mark: Mark) -> bool {
    find_winning_line(board, mark).is_some()
}

pub fn find_winning_line(board: &Board, mark: Mark) -> Option<[usize; 3]> {
    if mark == Mark::Empty {
        return None;
    }

    for position in board.taken_positions() {
        if board.mark_at(position) != Some(mark) {
            continue;
        }

        for &(first, second) in completing_pairs(position) {
            if board.mark_at(first) == Some(mark) && board.mark_at(second) == Some(mark) {
                let mut line = [position, first, second];
                line.sort_unstable();
                return Some(line);
            }
        }
    }

    None
}
