//! Process exit codes

/// Successful termination
pub const OK: i32 = 0;

/// Missing or unknown command, bad arguments, or any other failure
pub const FAILURE: i32 = 1;
