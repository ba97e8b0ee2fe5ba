//! Review synthesis pipeline CLI
//!
//! Dispatches one of the pipeline commands (`collect`, `synthesize`,
//! `generate`, `all`) and reports what each stage would do.

pub mod cli;
pub mod config;
pub mod exitcode;
pub mod pipeline;
pub mod util;
