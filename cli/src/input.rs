use std::io::{BufRead, Write};
use tictactoe_core::log;

pub const DEFAULT_PLAYER_NAME: &str = "Player";

fn read_trimmed_line<R: BufRead>(reader: &mut R) -> Result<Option<String>, String> {
    let mut line = String::new();
    let bytes_read = reader
        .read_line(&mut line)
        .map_err(|e| format!("Failed to read input: {}", e))?;
    if bytes_read == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

pub fn read_player_name<R: BufRead, W: Write>(
    reader: &mut R,
    writer: &mut W,
) -> Result<String, String> {
    writeln!(writer, "Please enter your name:")
        .map_err(|e| format!("Failed to write prompt: {}", e))?;

    match read_trimmed_line(reader)? {
        Some(name) if !name.is_empty() => Ok(name),
        _ => Ok(DEFAULT_PLAYER_NAME.to_string()),
    }
}

// Re-prompts until the entry parses as a position that is currently open.
// Invalid moves are recoverable here and never reach the board.
pub fn read_position<R: BufRead, W: Write>(
    reader: &mut R,
    writer: &mut W,
    empty_positions: &[usize],
) -> Result<usize, String> {
    let open_list = empty_positions
        .iter()
        .map(|position| position.to_string())
        .collect::<Vec<_>>()
        .join(",");

    loop {
        writeln!(writer, "Please choose a spot to mark: {}", open_list)
            .map_err(|e| format!("Failed to write prompt: {}", e))?;

        let Some(entry) = read_trimmed_line(reader)? else {
            return Err("Input ended before a position was chosen".to_string());
        };

        match entry.parse::<usize>() {
            Ok(position) if empty_positions.contains(&position) => return Ok(position),
            Ok(position) => log!("Rejected move to position {}: not open", position),
            Err(_) => log!("Rejected input {:?}: not a position", entry),
        }
    }
}

pub fn read_play_again<R: BufRead, W: Write>(
    reader: &mut R,
    writer: &mut W,
) -> Result<bool, String> {
    writeln!(writer, "Would you like to play again?")
        .map_err(|e| format!("Failed to write prompt: {}", e))?;

    let Some(answer) = read_trimmed_line(reader)? else {
        return Ok(false);
    };

    Ok(matches!(
        answer.to_lowercase().as_str(),
        "yes" | "yea" | "y"
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_read_player_name_trims_the_entry() {
        let mut reader = Cursor::new("  Alice  \n");
        let mut output = Vec::new();

        let name = read_player_name(&mut reader, &mut output).unwrap();

        assert_eq!(name, "Alice");
        assert!(String::from_utf8(output).unwrap().contains("Please enter your name:"));
    }

    #[test]
    fn test_blank_name_falls_back_to_the_default() {
        let mut reader = Cursor::new("\n");
        let mut output = Vec::new();

        let name = read_player_name(&mut reader, &mut output).unwrap();

        assert_eq!(name, DEFAULT_PLAYER_NAME);
    }

    #[test]
    fn test_read_position_accepts_an_open_position() {
        let mut reader = Cursor::new("5\n");
        let mut output = Vec::new();

        let position = read_position(&mut reader, &mut output, &[1, 3, 5, 7]).unwrap();

        assert_eq!(position, 5);
    }

    #[test]
    fn test_read_position_retries_until_the_entry_is_open() {
        let mut reader = Cursor::new("abc\n12\n2\n7\n");
        let mut output = Vec::new();

        let position = read_position(&mut reader, &mut output, &[1, 7, 9]).unwrap();

        assert_eq!(position, 7);
        let prompts = String::from_utf8(output).unwrap();
        assert_eq!(prompts.matches("Please choose a spot to mark: 1,7,9").count(), 4);
    }

    #[test]
    fn test_read_position_fails_when_input_ends() {
        let mut reader = Cursor::new("abc\n");
        let mut output = Vec::new();

        let result = read_position(&mut reader, &mut output, &[1]);

        assert!(result.is_err());
    }

    #[test]
    fn test_play_again_accepts_the_affirmative_forms() {
        for answer in ["yes", "YEA", "y", "Y"] {
            let mut reader = Cursor::new(format!("{}\n", answer));
            let mut output = Vec::new();

            assert!(read_play_again(&mut reader, &mut output).unwrap());
        }
    }

    #[test]
    fn test_play_again_rejects_everything_else() {
        for answer in ["no", "n", "maybe", ""] {
            let mut reader = Cursor::new(format!("{}\n", answer));
            let mut output = Vec::new();

            assert!(!read_play_again(&mut reader, &mut output).unwrap());
        }
    }

    #[test]
    fn test_play_again_defaults_to_no_on_end_of_input() {
        let mut reader = Cursor::new("");
        let mut output = Vec::new();

        assert!(!read_play_again(&mut reader, &mut output).unwrap());
    }
}
