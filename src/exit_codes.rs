//! Exit code constants for the taskgen CLI.
//!
//! - 0: Success
//! - 1: User error (unsupported language, bad arguments)
//! - 2: Generation failure (filesystem or template error)
//!
//! The reference tool this replaces exited zero even on failure; mapping
//! failures to distinct non-zero codes is a recorded design decision
//! (see DESIGN.md).

/// Successful execution.
pub const SUCCESS: i32 = 0;

/// User error: unsupported language or otherwise invalid input.
pub const USER_ERROR: i32 = 1;

/// Generation failure: directory, template, or output-file error.
pub const GENERATION_FAILURE: i32 = 2;
