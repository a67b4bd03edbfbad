use std::ffi::OsString;

pub use clap::Parser;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct ClapArgs {
    /// Print the display after every press instead of only once at the end
    #[clap(short = 'e', long, help = "print the display after every press")]
    each: bool,

    /// Print engine snapshots as JSON objects instead of bare display strings
    #[clap(short = 'j', long, help = "print JSON snapshots")]
    json: bool,

    /// Keypad tokens to press in order. When omitted, tokens are read
    /// line by line from stdin.
    #[clap(value_name = "TOKEN", help = "keypad tokens (0-9 . + - * / = del reset)")]
    tokens: Vec<String>,
}

#[derive(Debug, Clone)]
pub struct CommandLineArgs {
    each: bool,
    json: bool,
    tokens: Vec<String>,
}

impl CommandLineArgs {
    pub fn parse() -> Self {
        let args = ClapArgs::parse();
        Self {
            each: args.each,
            json: args.json,
            tokens: args.tokens,
        }
    }

    pub fn parse_from<I, T>(itr: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let args = ClapArgs::parse_from(itr);
        Self {
            each: args.each,
            json: args.json,
            tokens: args.tokens,
        }
    }

    pub fn each(&self) -> bool {
        self.each
    }

    pub fn json(&self) -> bool {
        self.json
    }

    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_parse_args_tokens_only() {
        let args = CommandLineArgs::parse_from(["program", "2", "+", "3", "="]);
        assert_eq!(args.tokens(), ["2", "+", "3", "="]);
        assert!(!args.each());
        assert!(!args.json());
    }

    #[test]
    fn test_parse_args_short_flags() {
        let args = CommandLineArgs::parse_from(["program", "-e", "-j", "7"]);
        assert!(args.each());
        assert!(args.json());
        assert_eq!(args.tokens(), ["7"]);
    }

    #[test]
    fn test_parse_args_long_flags() {
        let args = CommandLineArgs::parse_from(["program", "--each", "--json"]);
        assert!(args.each());
        assert!(args.json());
        assert!(args.tokens().is_empty());
    }

    #[test]
    fn test_parse_args_lone_minus_is_a_token() {
        let args = CommandLineArgs::parse_from(["program", "5", "-", "2", "="]);
        assert_eq!(args.tokens(), ["5", "-", "2", "="]);
    }
}
