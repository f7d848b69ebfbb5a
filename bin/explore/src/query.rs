use clap::Parser;

/// One line typed at the explorer prompt.
#[derive(Parser, Debug, PartialEq, Eq)]
#[command(about, long_about = None)]
pub enum Query {
    #[command(about = "Apply the next step", alias = "n")]
    Next,
    #[command(about = "Undo the last step", alias = "p", alias = "back")]
    Prev,
    #[command(about = "Move to a position between 0 and the trace length", alias = "j")]
    Jump {
        #[arg(required = true)]
        position: usize,
    },
    #[command(about = "Return to before the first step", alias = "r")]
    Reset,
    #[command(about = "Draw every node's state at the cursor", alias = "s")]
    Show,
    #[command(about = "List all steps, marking the cursor", alias = "t")]
    Trace,
    #[command(about = "Draw the tree")]
    Tree,
    #[command(about = "Count events and check the value against plain minimax")]
    Summary,
    #[command(about = "Leave the explorer", alias = "q", alias = "exit")]
    Quit,
}

impl Query {
    /// Parses a prompt line. A blank line means `next`.
    pub fn read(input: &str) -> Result<Self, clap::Error> {
        match input.trim() {
            "" => Ok(Self::Next),
            line => Self::try_parse_from(std::iter::once("> ").chain(line.split_whitespace())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_commands_and_aliases() {
        assert_eq!(Query::read("next").unwrap(), Query::Next);
        assert_eq!(Query::read("  ").unwrap(), Query::Next);
        assert_eq!(Query::read("p").unwrap(), Query::Prev);
        assert_eq!(Query::read("jump 4").unwrap(), Query::Jump { position: 4 });
        assert_eq!(Query::read("j 0").unwrap(), Query::Jump { position: 0 });
        assert_eq!(Query::read("exit").unwrap(), Query::Quit);
    }

    #[test]
    fn rejects_garbage() {
        assert!(Query::read("jump").is_err());
        assert!(Query::read("jump -1").is_err());
        assert!(Query::read("fly").is_err());
    }
}
