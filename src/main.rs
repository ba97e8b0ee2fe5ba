use std::{io, process};

use clap::{Command, CommandFactory, Parser};
use clap_complete::{generate, Generator};
use review_synth::cli::{run, Cli};
use review_synth::exitcode;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::fmt::format::FmtSpan;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter, Layer};

fn print_completions<G: Generator>(gen: G, cmd: &mut Command) {
    generate(gen, cmd, cmd.get_name().to_string(), &mut io::stdout());
}

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            // --help and --version land here too
            let code = if e.use_stderr() {
                exitcode::FAILURE
            } else {
                exitcode::OK
            };
            let _ = e.print();
            process::exit(code);
        }
    };

    setup_logging(cli.verbose);

    if let Some(shell) = cli.completions {
        let mut cmd = Cli::command();
        tracing::info!("Generating completion file for {shell:?}");
        print_completions(shell, &mut cmd);
        return;
    }

    let code = run(&cli, &mut io::stdout().lock());
    process::exit(code);
}

fn setup_logging(verbosity: u8) {
    let filter = match verbosity {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    };

    // RUST_LOG wins over -v when set
    let env_filter = EnvFilter::builder()
        .with_default_directive(filter.into())
        .from_env_lossy();

    // Log to stderr so command output on stdout stays clean
    let fmt_layer = fmt::layer()
        .with_writer(io::stderr)
        .with_target(true)
        .with_thread_names(false)
        .with_span_events(FmtSpan::CLOSE);

    tracing_subscriber::registry()
        .with(fmt_layer.with_filter(env_filter))
        .init();

    match filter {
        LevelFilter::INFO => tracing::info!("Debug mode: info"),
        LevelFilter::DEBUG => tracing::debug!("Debug mode: debug"),
        LevelFilter::TRACE => tracing::debug!("Debug mode: trace"),
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_verbosity_when_setting_up_logging_then_does_not_panic() {
        // a second global init would panic, so only one call per process
        setup_logging(2);
        tracing::debug!("logging ready");
    }
}
