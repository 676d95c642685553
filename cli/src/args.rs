use clap::{ArgAction, Parser};

/// Manage todos stored on a remote todo service.
#[derive(Debug, Parser)]
#[command(name = "todo", version, about)]
pub struct Args {
    /// Add a new todo; the task is WORDS, or one line read from stdin
    #[arg(long)]
    pub add: bool,

    /// Mark the todo at position N (1-based, as shown by --list) done
    #[arg(long, value_name = "N", allow_negative_numbers = true)]
    pub complete: Option<i64>,

    /// Delete the todo at position N (1-based, as shown by --list)
    #[arg(long = "del", value_name = "N", allow_negative_numbers = true)]
    pub del: Option<i64>,

    /// List all todos
    #[arg(long)]
    pub list: bool,

    /// Base URL of the todo service
    #[arg(long, env = "TODO_URL", default_value = "http://localhost:8080")]
    pub url: String,

    /// Per-request timeout in seconds; unset waits indefinitely
    #[arg(long, env = "TODO_TIMEOUT", value_name = "SECONDS")]
    pub timeout: Option<u64>,

    /// More log output on stderr (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,

    /// Task text for --add
    #[arg(value_name = "WORDS")]
    pub words: Vec<String>,
}

/// The single operation one invocation performs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Add(Vec<String>),
    Complete(i64),
    Delete(i64),
    List,
    Invalid,
}

impl Args {
    /// Resolve the flags into one command. When several apply, add wins,
    /// then complete, then del, then list. Positions below 1 do not count.
    pub fn command(&self) -> Command {
        if self.add {
            return Command::Add(self.words.clone());
        }
        if let Some(n) = self.complete.filter(|n| *n > 0) {
            return Command::Complete(n);
        }
        if let Some(n) = self.del.filter(|n| *n > 0) {
            return Command::Delete(n);
        }
        if self.list {
            return Command::List;
        }
        Command::Invalid
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn command(argv: &[&str]) -> Command {
        let mut full = vec!["todo"];
        full.extend_from_slice(argv);
        Args::try_parse_from(full).unwrap().command()
    }

    #[test]
    fn add_collects_trailing_words() {
        assert_eq!(
            command(&["--add", "buy", "oat", "milk"]),
            Command::Add(vec!["buy".into(), "oat".into(), "milk".into()])
        );
        assert_eq!(command(&["--add"]), Command::Add(Vec::new()));
    }

    #[test]
    fn positions_parse() {
        assert_eq!(command(&["--complete", "2"]), Command::Complete(2));
        assert_eq!(command(&["--del", "3"]), Command::Delete(3));
        assert_eq!(command(&["--list"]), Command::List);
    }

    #[test]
    fn non_positive_positions_are_invalid() {
        assert_eq!(command(&["--complete", "0"]), Command::Invalid);
        assert_eq!(command(&["--del", "-1"]), Command::Invalid);
    }

    #[test]
    fn no_flags_is_invalid() {
        assert_eq!(command(&[]), Command::Invalid);
        assert_eq!(command(&["stray", "words"]), Command::Invalid);
    }

    #[test]
    fn precedence_is_add_complete_del_list() {
        assert_eq!(
            command(&["--list", "--del", "1", "--complete", "2", "--add", "x"]),
            Command::Add(vec!["x".into()])
        );
        assert_eq!(command(&["--list", "--del", "1", "--complete", "2"]), Command::Complete(2));
        assert_eq!(command(&["--list", "--del", "1", "--complete", "0"]), Command::Delete(1));
        assert_eq!(command(&["--list", "--del", "0"]), Command::List);
    }

    #[test]
    fn non_numeric_position_is_rejected() {
        assert!(Args::try_parse_from(["todo", "--complete", "two"]).is_err());
    }

    #[test]
    fn url_flag_is_taken_verbatim() {
        let args = Args::try_parse_from(["todo", "--list", "--url", "http://example:9000/"]).unwrap();
        assert_eq!(args.url, "http://example:9000/");
    }

    #[test]
    fn timeout_flag_parses_seconds() {
        let args = Args::try_parse_from(["todo", "--list", "--timeout", "3"]).unwrap();
        assert_eq!(args.timeout, Some(3));
        assert!(Args::try_parse_from(["todo", "--list", "--timeout", "soon"]).is_err());
    }
}
