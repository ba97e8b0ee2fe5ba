//! Test helpers: one-shot logging setup and in-memory dispatch.

use std::env;
use std::sync::Once;

use clap::Parser;
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::cli::{run, Cli};

static TEST_SETUP: Once = Once::new();

/// Install a trace-level subscriber on stderr and turn colors off.
///
/// Safe to call from every test; only the first call has any effect.
pub fn init_test_setup() {
    TEST_SETUP.call_once(|| {
        if env::var("RUST_LOG").is_err() {
            env::set_var("RUST_LOG", "trace");
        }
        // captured output must compare equal to plain text
        colored::control::set_override(false);

        let subscriber = tracing_subscriber::registry().with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(true)
                .with_filter(EnvFilter::from_default_env()),
        );
        if tracing::dispatcher::has_been_set() || subscriber.try_init().is_err() {
            eprintln!("tracing subscriber already set, keeping it");
        }
        info!("Test Setup complete");
    });
}

/// Parse `args` as if given after the program name.
pub fn parse_args(args: &[&str]) -> Cli {
    match Cli::try_parse_from(std::iter::once("review-synth").chain(args.iter().copied())) {
        Ok(cli) => cli,
        Err(e) => panic!("cannot parse {args:?}: {e}"),
    }
}

/// Run the CLI on `args`, returning the exit code and everything written to stdout.
pub fn dispatch_args(args: &[&str]) -> (i32, String) {
    init_test_setup();
    let mut out = Vec::new();
    let code = run(&parse_args(args), &mut out);
    (code, String::from_utf8_lossy(&out).into_owned())
}
