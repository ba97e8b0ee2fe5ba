//! Pipeline stages and the commands that select them

use std::fmt;
use std::str::FromStr;

use crate::cli::error::CliError;
use crate::config::StageLocations;

/// One of the three review pipeline stages, in pipeline order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stage {
    Collect,
    Synthesize,
    Generate,
}

impl Stage {
    /// All stages in the order `all` runs them.
    pub const ALL: [Stage; 3] = [Stage::Collect, Stage::Synthesize, Stage::Generate];

    /// Summary line used in the `all` outline.
    pub fn step_summary(self) -> &'static str {
        match self {
            Stage::Collect => "Collect reviews from Notion",
            Stage::Synthesize => "Synthesize against rubrics",
            Stage::Generate => "Generate slide decks",
        }
    }

    /// Lines printed when the stage is invoked on its own.
    pub fn notice(self, locations: &StageLocations) -> [String; 2] {
        match self {
            Stage::Collect => [
                "Not implemented yet: Notion collection".to_string(),
                format!("See {} for API integration", locations.collect.display()),
            ],
            Stage::Synthesize => [
                "Not implemented yet: rubric synthesis".to_string(),
                format!("See {} for AI synthesis logic", locations.synthesize.display()),
            ],
            Stage::Generate => [
                "Not implemented yet: slide generation".to_string(),
                format!(
                    "See {} for slide specs and brand assets",
                    locations.generate.display()
                ),
            ],
        }
    }
}

/// A recognized subcommand: a single stage or the whole pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PipelineCommand {
    Stage(Stage),
    All,
}

impl PipelineCommand {
    /// Recognized commands in usage order.
    pub const ALL: [PipelineCommand; 4] = [
        PipelineCommand::Stage(Stage::Collect),
        PipelineCommand::Stage(Stage::Synthesize),
        PipelineCommand::Stage(Stage::Generate),
        PipelineCommand::All,
    ];

    /// The literal that selects this command.
    pub fn name(self) -> &'static str {
        match self {
            PipelineCommand::Stage(Stage::Collect) => "collect",
            PipelineCommand::Stage(Stage::Synthesize) => "synthesize",
            PipelineCommand::Stage(Stage::Generate) => "generate",
            PipelineCommand::All => "all",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            PipelineCommand::Stage(Stage::Collect) => "Pull reviews from Notion",
            PipelineCommand::Stage(Stage::Synthesize) => "Analyze reviews against rubrics",
            PipelineCommand::Stage(Stage::Generate) => "Generate HTML slide decks",
            PipelineCommand::All => "Run full pipeline",
        }
    }
}

impl fmt::Display for PipelineCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for PipelineCommand {
    type Err = CliError;

    /// Exact, case-sensitive match against the recognized literals.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PipelineCommand::ALL
            .into_iter()
            .find(|cmd| cmd.name() == s)
            .ok_or_else(|| CliError::UnknownCommand(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("collect", PipelineCommand::Stage(Stage::Collect))]
    #[case("synthesize", PipelineCommand::Stage(Stage::Synthesize))]
    #[case("generate", PipelineCommand::Stage(Stage::Generate))]
    #[case("all", PipelineCommand::All)]
    fn given_recognized_literal_when_parsing_then_returns_command(
        #[case] input: &str,
        #[case] expected: PipelineCommand,
    ) {
        let cmd: PipelineCommand = input.parse().expect("recognized command");
        assert_eq!(cmd, expected);
        assert_eq!(cmd.to_string(), input);
    }

    #[rstest]
    #[case("Collect")]
    #[case("ALL")]
    #[case(" collect")]
    #[case("collect ")]
    #[case("")]
    #[case("bogus")]
    fn given_unrecognized_literal_when_parsing_then_unknown_command(#[case] input: &str) {
        let err = input.parse::<PipelineCommand>().unwrap_err();
        match err {
            CliError::UnknownCommand(literal) => assert_eq!(literal, input),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn given_stages_when_listed_then_in_pipeline_order() {
        let summaries: Vec<_> = Stage::ALL.iter().map(|s| s.step_summary()).collect();
        assert_eq!(
            summaries,
            vec![
                "Collect reviews from Notion",
                "Synthesize against rubrics",
                "Generate slide decks",
            ]
        );
    }

    #[test]
    fn given_default_locations_when_notice_then_points_at_stage_dir() {
        let locations = StageLocations::default();
        let [headline, pointer] = Stage::Synthesize.notice(&locations);
        assert!(headline.contains("Not implemented"));
        assert_eq!(pointer, "See scripts/analysis/ for AI synthesis logic");
    }
}
