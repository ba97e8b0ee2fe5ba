use std::io::Write;

use tracing::{debug, instrument};

use crate::cli::args::Cli;
use crate::cli::error::{CliError, CliResult};
use crate::cli::output;
use crate::config::Settings;
use crate::exitcode;
use crate::pipeline::{PipelineCommand, Stage};

/// Parse the command named on the command line.
pub fn parse_command(cli: &Cli) -> CliResult<PipelineCommand> {
    let Some(literal) = cli.command.as_deref() else {
        return Err(CliError::MissingCommand);
    };
    if !cli.extra.is_empty() {
        debug!("ignoring extra arguments: {:?}", cli.extra);
    }
    literal.parse()
}

/// Parse the command, then load settings and dispatch.
///
/// Settings load only after the command is known, so a missing or unknown
/// command is reported even when the settings file is broken.
pub fn execute_command(cli: &Cli, out: &mut impl Write) -> CliResult<()> {
    let command = parse_command(cli)?;
    let settings = Settings::load(cli.config.as_deref())?;
    dispatch(command, &settings, out)
}

/// Write the output of a recognized command to `out`.
pub fn dispatch(
    command: PipelineCommand,
    settings: &Settings,
    out: &mut impl Write,
) -> CliResult<()> {
    match command {
        PipelineCommand::Stage(stage) => _stage(stage, settings, out),
        PipelineCommand::All => _all(out),
    }
}

/// Execute, then report any error; returns the process exit code.
pub fn run(cli: &Cli, out: &mut impl Write) -> i32 {
    let result = execute_command(cli, out).and_then(|()| out.flush().map_err(CliError::from));
    match result {
        Ok(()) => exitcode::OK,
        Err(e) => {
            report_error(&e, out);
            e.exit_code()
        }
    }
}

/// Report an error to the user.
///
/// Missing and unknown commands go to `out`; everything else goes to stderr
/// and leaves `out` untouched.
pub fn report_error(err: &CliError, out: &mut impl Write) {
    if !err.reports_on_stdout() {
        output::error(err);
        return;
    }
    let written = match err {
        CliError::MissingCommand => write_usage(out),
        e => output::info(out, e),
    };
    if let Err(e) = written.and_then(|()| out.flush()) {
        output::error(&CliError::Io(e));
    }
}

/// Write the usage block listing every recognized command.
pub fn write_usage(out: &mut impl Write) -> std::io::Result<()> {
    let names: Vec<_> = PipelineCommand::ALL.iter().map(|c| c.name()).collect();
    output::header(
        out,
        &format!("Usage: {} [{}]", env!("CARGO_PKG_NAME"), names.join("|")),
    )?;
    output::blank(out)?;
    let width = names.iter().map(|n| n.len()).max().unwrap_or(0);
    for cmd in PipelineCommand::ALL {
        output::detail(
            out,
            &format!("{:<width$} - {}", cmd.name(), cmd.description()),
        )?;
    }
    Ok(())
}

#[instrument(skip(settings, out))]
fn _stage(stage: Stage, settings: &Settings, out: &mut impl Write) -> CliResult<()> {
    let [headline, pointer] = stage.notice(&settings.stages);
    output::pending(out, &headline)?;
    output::info(out, &pointer)?;
    Ok(())
}

#[instrument(skip(out))]
fn _all(out: &mut impl Write) -> CliResult<()> {
    output::info(out, "Running full pipeline...")?;
    for (i, stage) in Stage::ALL.iter().enumerate() {
        debug!(?stage, "outlining step");
        output::info(out, &format!("Step {}: {}", i + 1, stage.step_summary()))?;
    }
    output::pending(out, "Not implemented yet: wiring between pipeline steps")?;
    Ok(())
}
