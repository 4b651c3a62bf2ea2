//! Exit code constants for the bob CLI.
//!
//! - 0: Success
//! - 1: User error (bad args, unsupported agent, unknown template or preset)
//! - 2: Validation failure (doctor found issues)
//! - 3: Template defect (a bundled template rendered to something invalid)
//! - 4: Filesystem failure

/// Successful execution.
pub const SUCCESS: i32 = 0;

/// User error: bad arguments, unsupported agent type, malformed payload.
pub const USER_ERROR: i32 = 1;

/// Validation failure: the target's scaffolding has unresolved issues.
pub const VALIDATION_FAILURE: i32 = 2;

/// Template defect: rendering failed or produced malformed frontmatter.
pub const TEMPLATE_DEFECT: i32 = 3;

/// Filesystem failure: a read, write, or directory creation failed.
pub const IO_FAILURE: i32 = 4;
