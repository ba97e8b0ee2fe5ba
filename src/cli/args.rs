//! CLI argument definitions using clap

use std::path::PathBuf;

use clap::{ArgAction, Parser, ValueHint};

/// Review synthesis pipeline: collect, synthesize, generate
#[derive(Parser, Debug)]
#[command(name = "review-synth")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Verbosity of log output on stderr (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Settings file (TOML)
    #[arg(short, long, value_name = "FILE", value_hint = ValueHint::FilePath)]
    pub config: Option<PathBuf>,

    /// Print shell completions and exit
    #[arg(long, value_name = "SHELL", value_enum)]
    pub completions: Option<clap_complete::Shell>,

    /// collect | synthesize | generate | all
    ///
    /// Words that look like flags but aren't known ones land here too,
    /// so they are reported as unknown commands.
    #[arg(value_name = "COMMAND", allow_hyphen_values = true)]
    pub command: Option<String>,

    /// Ignored
    #[arg(trailing_var_arg = true, allow_hyphen_values = true, hide = true)]
    pub extra: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use rstest::rstest;

    // https://docs.rs/clap/latest/clap/_derive/_tutorial/index.html#testing
    #[test]
    fn verify_cli() {
        Cli::command().debug_assert();
    }

    #[test]
    fn given_no_args_when_parsing_then_command_is_none() {
        let cli = Cli::try_parse_from(["review-synth"]).expect("parse");
        assert!(cli.command.is_none());
        assert_eq!(cli.verbose, 0);
    }

    #[test]
    fn given_command_and_extras_when_parsing_then_extras_collected() {
        let cli = Cli::try_parse_from(["review-synth", "-vv", "collect", "later", "--x"])
            .expect("parse");
        assert_eq!(cli.command.as_deref(), Some("collect"));
        assert_eq!(cli.extra, vec!["later", "--x"]);
        assert_eq!(cli.verbose, 2);
    }

    #[rstest]
    #[case("-x")]
    #[case("--bogus")]
    #[case("-vx")]
    fn given_unknown_flag_word_when_parsing_then_taken_as_command(#[case] word: &str) {
        let cli = Cli::try_parse_from(["review-synth", word]).expect("parse");
        assert_eq!(cli.command.as_deref(), Some(word));
    }

    #[test]
    fn given_known_flags_when_parsing_then_still_flags() {
        let cli = Cli::try_parse_from(["review-synth", "-v", "-c", "s.toml"]).expect("parse");
        assert!(cli.command.is_none());
        assert_eq!(cli.verbose, 1);
        assert_eq!(cli.config, Some(PathBuf::from("s.toml")));
    }
}
