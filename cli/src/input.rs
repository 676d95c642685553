use std::io::{self, BufRead};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum InputError {
    #[error("empty todo is not allowed")]
    Empty,

    #[error("failed to read task from stdin: {0}")]
    Io(#[from] io::Error),
}

/// Task text for `--add`: the words joined by single spaces, or, when there
/// are none, the first line of `reader` without its line terminator.
pub fn read_task<R: BufRead>(mut reader: R, words: &[String]) -> Result<String, InputError> {
    let task = if words.is_empty() {
        let mut line = String::new();
        reader.read_line(&mut line)?;
        line.trim_end_matches(['\n', '\r']).to_string()
    } else {
        words.join(" ")
    };

    if task.trim().is_empty() {
        return Err(InputError::Empty);
    }
    Ok(task)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn words(ws: &[&str]) -> Vec<String> {
        ws.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn words_win_over_stdin() {
        let task = read_task(Cursor::new("ignored\n"), &words(&["walk", "the", "dog"])).unwrap();
        assert_eq!(task, "walk the dog");
    }

    #[test]
    fn reads_only_first_line() {
        let task = read_task(Cursor::new("first line\r\nsecond\n"), &[]).unwrap();
        assert_eq!(task, "first line");
    }

    #[test]
    fn line_without_newline_is_accepted() {
        assert_eq!(read_task(Cursor::new("eof"), &[]).unwrap(), "eof");
    }

    #[test]
    fn blank_input_is_rejected() {
        for input in ["", "\n", "   \n"] {
            let err = read_task(Cursor::new(input), &[]).unwrap_err();
            assert!(matches!(err, InputError::Empty), "input {input:?}");
        }
    }

    #[test]
    fn blank_words_are_rejected() {
        let err = read_task(Cursor::new(""), &words(&["", " "])).unwrap_err();
        assert!(matches!(err, InputError::Empty));
    }
}
