use tictactoe_core::{Board, Mark, Player};

pub fn mark_glyph(mark: Mark) -> char {
    match mark {
        Mark::Empty => ' ',
        Mark::X => 'X',
        Mark::O => 'O',
    }
}

pub fn render_board(board: &Board) -> String {
    let cell = |position: usize| mark_glyph(board.mark_at(position).unwrap_or(Mark::Empty));
    format!(
        "  {} | {} | {} \n----+---+----\n  {} | {} | {} \n----+---+----\n  {} | {} | {} ",
        cell(1),
        cell(2),
        cell(3),
        cell(4),
        cell(5),
        cell(6),
        cell(7),
        cell(8),
        cell(9),
    )
}

pub fn render_winner(winner_name: &str) -> String {
    format!("{} has gotten 3 in a row and wins the game.", winner_name)
}

pub fn render_tie() -> String {
    "This is a cat's game and it ends in a tie.".to_string()
}

pub fn render_winning_line(line: &[usize; 3]) -> String {
    format!("Winning line: {}-{}-{}", line[0], line[1], line[2])
}

pub fn render_scores(players: &[Player; 2]) -> String {
    format!(
        "Score: {} {} - {} {}",
        players[0].name, players[0].score, players[1].score, players[1].name
    )
}
