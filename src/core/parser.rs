//! Command line tokenizer.
//!
//! Input is split on whitespace: the first word is the command name, the
//! rest are positional arguments. There is no quoting, expansion or piping.

/// A tokenized command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedCommand {
    pub name: String,
    pub args: Vec<String>,
}

/// Tokenize one submitted line.
///
/// Returns `None` for blank input.
pub fn parse_input(input: &str) -> Option<ParsedCommand> {
    let mut words = input.split_whitespace();
    let name = words.next()?.to_string();
    let args = words.map(str::to_string).collect();
    Some(ParsedCommand { name, args })
}
